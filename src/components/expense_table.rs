use yew::prelude::*;

use super::use_currency_symbol;
use crate::format::{money, shares_summary};
use crate::models::ExpenseList;

#[derive(Properties, PartialEq)]
pub struct ExpenseTableProps {
    /// `None` until the first successful load.
    pub expenses: Option<ExpenseList>,
}

#[function_component(ExpenseTable)]
pub fn expense_table(props: &ExpenseTableProps) -> Html {
    let symbol = use_currency_symbol();
    let rows = props
        .expenses
        .as_ref()
        .map(|list| list.expenses.as_slice())
        .unwrap_or_default();
    let total = props
        .expenses
        .as_ref()
        .map(|list| money(&symbol, list.total()))
        .unwrap_or_else(|| "-".to_string());

    html! {
        <div class="bg-card rounded-2xl shadow-md border border-border overflow-hidden">
            <div class="p-5 border-b border-border flex items-center justify-between">
                <h3 class="font-bold text-lg text-foreground">{"Expenses"}</h3>
                <span class="text-sm text-muted-foreground">{"Total spent: "}<span id="totalSpent" class="font-semibold">{ total }</span></span>
            </div>
            <div class="overflow-x-auto">
                <table id="table" class="w-full text-left border-collapse">
                    <thead>
                        <tr class="bg-muted text-muted-foreground text-[10px] uppercase tracking-widest">
                            <th class="px-8 py-4 font-bold">{"Item"}</th>
                            <th class="px-8 py-4 font-bold">{"Amount"}</th>
                            <th class="px-8 py-4 font-bold">{"Payer"}</th>
                            <th class="px-8 py-4 font-bold">{"Date"}</th>
                            <th class="px-8 py-4 font-bold">{"Time"}</th>
                            <th class="px-8 py-4 font-bold">{"Shares"}</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">
                        { for rows.iter().enumerate().map(|(idx, e)| html! {
                            <tr key={e.id.map(|id| id.to_string()).unwrap_or_else(|| format!("row-{}", idx))} class="text-sm">
                                <td class="px-8 py-4 text-foreground">{ e.item.clone() }</td>
                                <td class="px-8 py-4 font-semibold">{ money(&symbol, e.amount) }</td>
                                <td class="px-8 py-4">{ e.payer_name.clone() }</td>
                                <td class="px-8 py-4 text-muted-foreground">{ e.date.clone() }</td>
                                <td class="px-8 py-4 text-muted-foreground">{ e.time.clone() }</td>
                                <td class="px-8 py-4">{ shares_summary(&e.shares) }</td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            </div>
        </div>
    }
}
