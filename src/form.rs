//! Reading the budget and add-expense inputs.
//!
//! Numeric fields are read the way a browser's `parseFloat`/`parseInt` read
//! them: leading whitespace is skipped and the longest numeric prefix wins,
//! so `"12kg"` is `12` and `"kg"` is nothing.

use chrono::NaiveDateTime;
use serde_json::Value;

use crate::error::FormError;
use crate::models::{Allocation, NewExpense};

/// Raw text of the add-expense form, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpenseForm {
    pub item: String,
    pub amount: String,
    pub category: String,
    pub date: String,
    pub time: String,
    pub splits: String,
    pub participants: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Item,
    Amount,
    Category,
    Date,
    Time,
    Splits,
    Participants,
}

impl ExpenseForm {
    /// A blank form with date and time defaulted to `now` (minute resolution).
    pub fn stamped(now: NaiveDateTime) -> Self {
        Self {
            date: now.format("%Y-%m-%d").to_string(),
            time: now.format("%H:%M").to_string(),
            ..Self::default()
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Item => &mut self.item,
            FormField::Amount => &mut self.amount,
            FormField::Category => &mut self.category,
            FormField::Date => &mut self.date,
            FormField::Time => &mut self.time,
            FormField::Splits => &mut self.splits,
            FormField::Participants => &mut self.participants,
        };
        *slot = value;
    }

    /// Builds the request body, or refuses when the splits text is not JSON.
    pub fn to_request(&self) -> Result<NewExpense, FormError> {
        Ok(NewExpense {
            item: self.item.clone(),
            amount: parse_float(&self.amount),
            category: self.category.clone(),
            date: self.date.clone(),
            time: self.time.clone(),
            allocation: parse_allocation(&self.splits, &self.participants)?,
        })
    }
}

/// Splits win over participants; both blank means neither is sent.
pub fn parse_allocation(splits: &str, participants: &str) -> Result<Option<Allocation>, FormError> {
    let splits = splits.trim();
    if !splits.is_empty() {
        let value: Value = serde_json::from_str(splits).map_err(|_| FormError::InvalidSplits)?;
        return Ok(Some(Allocation::Splits(value)));
    }
    let participants = participants.trim();
    if !participants.is_empty() {
        return Ok(Some(Allocation::Participants(parse_participants(participants))));
    }
    Ok(None)
}

/// Comma-separated member ids. Entries that are not numbers, or are zero,
/// are dropped.
pub fn parse_participants(text: &str) -> Vec<i64> {
    text.split(',')
        .filter_map(parse_int)
        .filter(|id| *id != 0)
        .collect()
}

/// Budget input: blank or unreadable means zero.
pub fn parse_budget(text: &str) -> f64 {
    parse_float(text).unwrap_or(0.0)
}

pub fn parse_float(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let int_start = end;
    end += count_digits(&bytes[end..]);
    let mut digits = end - int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac = count_digits(&bytes[end + 1..]);
        digits += frac;
        if digits > 0 {
            end += 1 + frac;
        }
    }
    if digits == 0 {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }
    text[..end].parse().ok()
}

pub fn parse_int(text: &str) -> Option<i64> {
    let text = text.trim();
    let bytes = text.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'+') | Some(b'-')));
    let digits = count_digits(&bytes[sign..]);
    if digits == 0 {
        return None;
    }
    text[..sign + digits].parse().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
