//! Page flows. Each reports view changes as [`ViewAction`]s; a failed call reports none.

use std::rc::Rc;

use yew::{Callback, Reducible};

use crate::api::{ApiClient, Transport};
use crate::form::{self, ExpenseForm, FormField};
use crate::models::ExpenseList;

/// Side effects that live outside the rendered tree.
pub trait Host {
    /// Blocking notification.
    fn alert(&self, message: &str);
    fn navigate(&self, url: &str);
}

/// [`Host`] backed by the browser window.
#[derive(Clone, Debug, Default)]
pub struct BrowserHost;

impl Host for BrowserHost {
    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn navigate(&self, url: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.location().set_href(url) {
                tracing::error!(url, ?err, "navigation failed");
            }
        }
    }
}

pub fn remaining(budget: f64, total: f64) -> f64 {
    (budget - total).max(0.0)
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewAction {
    BudgetLoaded(f64),
    RemainingLoaded(f64),
    ExpensesLoaded(ExpenseList),
    BudgetInputEdited(String),
    FormEdited(FormField, String),
    FormReset,
}

/// Everything the page shows. `None` means "never loaded".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageState {
    pub budget: Option<f64>,
    pub remaining: Option<f64>,
    pub expenses: Option<ExpenseList>,
    pub budget_input: String,
    pub form: ExpenseForm,
}

impl PageState {
    pub fn new(form: ExpenseForm) -> Self {
        Self {
            form,
            ..Self::default()
        }
    }

    pub fn apply(&mut self, action: ViewAction) {
        match action {
            ViewAction::BudgetLoaded(amount) => self.budget = Some(amount),
            ViewAction::RemainingLoaded(amount) => self.remaining = Some(amount),
            ViewAction::ExpensesLoaded(list) => self.expenses = Some(list),
            ViewAction::BudgetInputEdited(value) => self.budget_input = value,
            ViewAction::FormEdited(field, value) => self.form.set(field, value),
            ViewAction::FormReset => self.form = ExpenseForm::default(),
        }
    }
}

impl Reducible for PageState {
    type Action = ViewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

pub struct Controller<T, H> {
    api: ApiClient<T>,
    host: H,
    view: Callback<ViewAction>,
}

impl<T: Transport, H: Host> Controller<T, H> {
    pub fn new(api: ApiClient<T>, host: H, view: Callback<ViewAction>) -> Self {
        Self { api, host, view }
    }

    pub async fn save_budget(&self, input: &str) {
        let amount = form::parse_budget(input);
        tracing::debug!(amount, "saving budget");
        if self.api.save_budget(amount).await.is_none() {
            return;
        }
        self.host.alert("Budget saved");
        self.load_budget().await;
        self.load_expenses().await;
    }

    /// Renders the budget, then asks for the expense total separately to
    /// work out what is left. Each step is skipped on its own failure.
    pub async fn load_budget(&self) {
        let Some(budget) = self.api.budget().await else {
            return;
        };
        let amount = budget.amount();
        self.view.emit(ViewAction::BudgetLoaded(amount));

        let Some(list) = self.api.expenses().await else {
            return;
        };
        self.view
            .emit(ViewAction::RemainingLoaded(remaining(amount, list.total())));
    }

    pub async fn add_expense(&self, form: &ExpenseForm) {
        let request = match form.to_request() {
            Ok(request) => request,
            Err(err) => {
                self.host.alert(&err.to_string());
                return;
            }
        };
        tracing::debug!(item = %request.item, "adding expense");
        if self.api.add_expense(&request).await.is_none() {
            return;
        }
        self.host.alert("Expense added");
        self.view.emit(ViewAction::FormReset);
        self.load_expenses().await;
        self.load_budget().await;
    }

    pub async fn load_expenses(&self) {
        if let Some(list) = self.api.expenses().await {
            tracing::debug!(count = list.expenses.len(), "expenses loaded");
            self.view.emit(ViewAction::ExpensesLoaded(list));
        }
    }

    pub fn download_report(&self, period: &str) {
        self.host.navigate(&self.api.report_url(period));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Expense;

    #[test]
    fn remaining_never_goes_negative() {
        assert_eq!(remaining(1000.0, 250.0), 750.0);
        assert_eq!(remaining(100.0, 100.0), 0.0);
        assert_eq!(remaining(100.0, 180.5), 0.0);
        assert_eq!(remaining(0.0, 0.0), 0.0);
    }

    #[test]
    fn reset_clears_form_but_keeps_figures() {
        let mut state = PageState::default();
        state.apply(ViewAction::BudgetLoaded(500.0));
        state.apply(ViewAction::FormEdited(FormField::Item, "Fuel".to_string()));
        state.apply(ViewAction::FormReset);

        assert_eq!(state.budget, Some(500.0));
        assert_eq!(state.form, ExpenseForm::default());
    }

    #[test]
    fn reducer_replaces_expense_list() {
        let state = Rc::new(PageState::default());
        let list = ExpenseList {
            expenses: vec![Expense {
                item: "Bus".to_string(),
                amount: 2.5,
                ..Expense::default()
            }],
            total: Some(2.5),
        };
        let state = state.reduce(ViewAction::ExpensesLoaded(list.clone()));

        assert_eq!(state.expenses, Some(list));
    }
}
