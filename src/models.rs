use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Reads `null` as the type's default, the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The household spending ceiling.
///
/// The server has answered with both `{ "amount": .. }` and
/// `{ "budget": .., "spent": .., "remaining": .. }`, so either key is read.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Budget {
    #[serde(default, alias = "budget")]
    pub amount: Option<f64>,
}

impl Budget {
    pub fn amount(&self) -> f64 {
        self.amount.unwrap_or(0.0)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BudgetUpdate {
    pub amount: f64,
}

/// Acknowledgement returned by `POST /api/budget`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BudgetSaved {
    pub message: Option<String>,
    pub amount: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Share {
    pub user_id: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub display_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub share_amount: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Expense {
    pub id: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub item: String,
    #[serde(deserialize_with = "null_as_default")]
    pub amount: f64,
    pub category: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub time: String,
    pub payer_id: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub payer_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub shares: Vec<Share>,
}

/// Response of `GET /api/expenses`. `total` is computed by the server.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExpenseList {
    #[serde(deserialize_with = "null_as_default")]
    pub expenses: Vec<Expense>,
    pub total: Option<f64>,
}

impl ExpenseList {
    pub fn total(&self) -> f64 {
        self.total.unwrap_or(0.0)
    }
}

/// How the cost of a new expense is divided.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Allocation {
    /// Caller-supplied division, forwarded to the server untouched.
    Splits(Value),
    /// Member ids; the server divides the amount between them.
    Participants(Vec<i64>),
}

/// Body of `POST /api/expense`.
///
/// `amount` is `None` when the field held no number; it is sent as `null`
/// and the server rejects it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewExpense {
    pub item: String,
    pub amount: Option<f64>,
    pub category: String,
    pub date: String,
    pub time: String,
    #[serde(flatten)]
    pub allocation: Option<Allocation>,
}

/// Acknowledgement returned by `POST /api/expense`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExpenseCreated {
    pub message: Option<String>,
    pub expense_id: Option<i64>,
}

/// Reporting windows offered as download buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportPeriod {
    Daily,
    Monthly,
    Yearly,
    Full,
}

impl ReportPeriod {
    pub const ALL: [ReportPeriod; 4] = [
        ReportPeriod::Daily,
        ReportPeriod::Monthly,
        ReportPeriod::Yearly,
        ReportPeriod::Full,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportPeriod::Daily => "daily",
            ReportPeriod::Monthly => "monthly",
            ReportPeriod::Yearly => "yearly",
            ReportPeriod::Full => "full",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportPeriod::Daily => "Daily report",
            ReportPeriod::Monthly => "Monthly report",
            ReportPeriod::Yearly => "Yearly report",
            ReportPeriod::Full => "Full report",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn budget_reads_either_key() {
        let a: Budget = serde_json::from_value(json!({ "amount": 500.0 })).unwrap();
        let b: Budget =
            serde_json::from_value(json!({ "budget": 250.5, "spent": 10, "remaining": 240.5 }))
                .unwrap();
        let empty: Budget = serde_json::from_value(json!({})).unwrap();

        assert_eq!(a.amount(), 500.0);
        assert_eq!(b.amount(), 250.5);
        assert_eq!(empty.amount(), 0.0);
    }

    #[test]
    fn expense_list_tolerates_missing_fields() {
        let list: ExpenseList = serde_json::from_value(json!({
            "expenses": [{ "item": "Milk", "amount": 42, "date": "2024-01-02", "time": "08:15" }]
        }))
        .unwrap();

        assert_eq!(list.total(), 0.0);
        assert_eq!(list.expenses.len(), 1);
        assert!(list.expenses[0].shares.is_empty());
        assert_eq!(list.expenses[0].payer_name, "");
    }

    #[test]
    fn expense_list_reads_null_as_empty() {
        let list: ExpenseList = serde_json::from_value(json!({
            "expenses": [{
                "item": null,
                "amount": null,
                "date": "2024-01-02",
                "time": null,
                "payer_name": null,
                "shares": [{ "display_name": "A", "share_amount": null }]
            }],
            "total": 5
        }))
        .unwrap();

        let expense = &list.expenses[0];
        assert_eq!(expense.item, "");
        assert_eq!(expense.amount, 0.0);
        assert_eq!(expense.time, "");
        assert_eq!(expense.shares[0].display_name, "A");
        assert_eq!(expense.shares[0].share_amount, 0.0);
        assert_eq!(list.total(), 5.0);
    }

    #[test]
    fn new_expense_carries_one_allocation_key() {
        let expense = NewExpense {
            item: "Rent".to_string(),
            amount: Some(1200.0),
            category: "Housing".to_string(),
            date: "2024-03-01".to_string(),
            time: "09:00".to_string(),
            allocation: Some(Allocation::Participants(vec![1, 3])),
        };
        let body = serde_json::to_value(&expense).unwrap();

        assert_eq!(body["participants"], json!([1, 3]));
        assert!(body.get("splits").is_none());
        assert_eq!(body["amount"], json!(1200.0));
    }

    #[test]
    fn new_expense_without_allocation_or_amount() {
        let expense = NewExpense {
            item: "Tea".to_string(),
            amount: None,
            category: String::new(),
            date: String::new(),
            time: String::new(),
            allocation: None,
        };
        let body = serde_json::to_value(&expense).unwrap();

        assert_eq!(body["amount"], Value::Null);
        assert!(body.get("splits").is_none());
        assert!(body.get("participants").is_none());
    }
}
