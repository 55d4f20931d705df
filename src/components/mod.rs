mod budget_panel;
mod expense_form;
mod expense_table;
mod report_buttons;

pub use budget_panel::BudgetPanel;
pub use expense_form::ExpenseFormCard;
pub use expense_table::ExpenseTable;
pub use report_buttons::ReportButtons;

use yew::prelude::*;

use crate::settings::AppSettings;

#[hook]
pub(crate) fn use_currency_symbol() -> String {
    use_context::<AppSettings>()
        .map(|s| s.currency_symbol)
        .unwrap_or_else(|| AppSettings::default().currency_symbol)
}
