use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::use_currency_symbol;
use crate::format::money;

#[derive(Properties, PartialEq)]
pub struct BudgetPanelProps {
    pub budget: Option<f64>,
    pub remaining: Option<f64>,
    pub budget_input: String,
    pub on_input: Callback<String>,
    pub on_save: Callback<()>,
}

#[function_component(BudgetPanel)]
pub fn budget_panel(props: &BudgetPanelProps) -> Html {
    let symbol = use_currency_symbol();
    let shown = |value: Option<f64>| {
        value
            .map(|v| money(&symbol, v))
            .unwrap_or_else(|| "-".to_string())
    };

    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit(input.value());
        })
    };
    let onclick = {
        let on_save = props.on_save.clone();
        Callback::from(move |_: MouseEvent| on_save.emit(()))
    };

    html! {
        <div class="bg-card rounded-[10px] p-6 border border-border">
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6 mb-4">
                <div>
                    <p class="text-sm text-muted-foreground mb-2">{"Budget"}</p>
                    <h3 id="budgetDisplay" class="text-2xl font-bold text-foreground">{ shown(props.budget) }</h3>
                </div>
                <div>
                    <p class="text-sm text-muted-foreground mb-2">{"Remaining"}</p>
                    <h3 id="remainingDisplay" class="text-2xl font-bold text-foreground">{ shown(props.remaining) }</h3>
                </div>
            </div>
            <div class="flex gap-3">
                <input id="budgetInput" type="number" step="0.01" placeholder={format!("Budget ({})", symbol)}
                    value={props.budget_input.clone()} {oninput} class="flex-1 p-2 border rounded" />
                <button id="saveBudgetBtn" type="button" {onclick} class="bg-primary text-primary-foreground px-4 rounded">{"Save Budget"}</button>
            </div>
        </div>
    }
}
