use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::form::{ExpenseForm, FormField};

#[derive(Properties, PartialEq)]
pub struct ExpenseFormProps {
    pub form: ExpenseForm,
    pub on_edit: Callback<(FormField, String)>,
    pub on_submit: Callback<()>,
}

#[function_component(ExpenseFormCard)]
pub fn expense_form_card(props: &ExpenseFormProps) -> Html {
    let input_for = |field: FormField| {
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_edit.emit((field, input.value()));
        })
    };
    let on_splits = {
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            on_edit.emit((FormField::Splits, area.value()));
        })
    };
    let onsubmit = Callback::from(|e: SubmitEvent| e.prevent_default());
    let onclick = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |_: MouseEvent| on_submit.emit(()))
    };
    let form = &props.form;

    html! {
        <form id="expense-form" {onsubmit} class="bg-white p-5 rounded-[10px] shadow-sm border border-white/50">
            <h4 class="text-[#1D617A] font-bold text-[15px] mb-3 tracking-wider">{"Add New Expense"}</h4>
            <div class="grid grid-cols-2 md:grid-cols-5 gap-3 mb-4">
                <input id="item" type="text" placeholder="Item" value={form.item.clone()}
                    oninput={input_for(FormField::Item)} class="rounded-[10px] px-3 py-2 text-[11px]" />
                <input id="amount" type="number" step="0.01" placeholder="Amount" value={form.amount.clone()}
                    oninput={input_for(FormField::Amount)} class="rounded-[10px] px-3 py-2 text-[11px]" />
                <input id="category" type="text" placeholder="Category" value={form.category.clone()}
                    oninput={input_for(FormField::Category)} class="rounded-[10px] px-3 py-2 text-[11px]" />
                <input id="date" type="date" value={form.date.clone()}
                    oninput={input_for(FormField::Date)} class="rounded-[10px] px-3 py-2 text-[11px]" />
                <input id="time" type="time" value={form.time.clone()}
                    oninput={input_for(FormField::Time)} class="rounded-[10px] px-3 py-2 text-[11px]" />
            </div>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-3 mb-4">
                <textarea id="splits" placeholder={r#"Splits JSON, e.g. {"2": 150, "3": 50}"#} value={form.splits.clone()}
                    oninput={on_splits} class="rounded-[10px] px-3 py-2 text-[11px]" />
                <input id="participants" type="text" placeholder="Participant ids, e.g. 1, 2, 3" value={form.participants.clone()}
                    oninput={input_for(FormField::Participants)} class="rounded-[10px] px-3 py-2 text-[11px]" />
            </div>
            <button id="addBtn" type="button" {onclick} class="w-full bg-[#173E63] text-white py-2 rounded-[10px] text-[10px] font-bold">{"Add Expense"}</button>
        </form>
    }
}
