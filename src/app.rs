use std::rc::Rc;

use chrono::Local;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{ApiClient, HttpTransport};
use crate::components::{BudgetPanel, ExpenseFormCard, ExpenseTable, ReportButtons};
use crate::controller::{BrowserHost, Controller, PageState, ViewAction};
use crate::form::{ExpenseForm, FormField};
use crate::settings::{load_settings, AppSettings};

pub type PageController = Controller<HttpTransport, BrowserHost>;

fn page_shell(title: &'static str, children: Html) -> Html {
    html! {
        <div class="p-6 max-w-7xl mx-auto">
            <div class="flex items-center justify-between pb-4 border-b border-border">
                <h1 class="text-2xl font-bold text-foreground">{ title }</h1>
            </div>
            <div class="pt-5 space-y-6">
                { children }
            </div>
        </div>
    }
}

/// Runs one flow on the event loop. Overlapping flows are not sequenced.
fn spawn_flow<F, Fut>(controller: &Rc<PageController>, flow: F)
where
    F: FnOnce(Rc<PageController>) -> Fut,
    Fut: std::future::Future<Output = ()> + 'static,
{
    spawn_local(flow(Rc::clone(controller)));
}

#[function_component(App)]
pub fn app() -> Html {
    let settings = use_state(load_settings);
    let state =
        use_reducer(|| PageState::new(ExpenseForm::stamped(Local::now().naive_local())));

    let controller = {
        let dispatcher = state.dispatcher();
        use_memo(
            move |settings: &AppSettings| {
                let api = ApiClient::new(HttpTransport, settings.api_base_url.clone());
                let view = Callback::from(move |action| dispatcher.dispatch(action));
                Controller::new(api, BrowserHost, view)
            },
            (*settings).clone(),
        )
    };

    {
        let controller = controller.clone();
        use_effect_with_deps(
            move |_| {
                spawn_flow(&controller, |c| async move { c.load_budget().await });
                spawn_flow(&controller, |c| async move { c.load_expenses().await });
                || ()
            },
            (),
        );
    }

    let on_budget_input = {
        let dispatcher = state.dispatcher();
        Callback::from(move |value: String| {
            dispatcher.dispatch(ViewAction::BudgetInputEdited(value))
        })
    };
    let on_save_budget = {
        let controller = controller.clone();
        let input = state.budget_input.clone();
        Callback::from(move |_| {
            let input = input.clone();
            spawn_flow(&controller, |c| async move { c.save_budget(&input).await });
        })
    };
    let on_edit = {
        let dispatcher = state.dispatcher();
        Callback::from(move |(field, value): (FormField, String)| {
            dispatcher.dispatch(ViewAction::FormEdited(field, value))
        })
    };
    let on_add_expense = {
        let controller = controller.clone();
        let form = state.form.clone();
        Callback::from(move |_| {
            let form = form.clone();
            spawn_flow(&controller, |c| async move { c.add_expense(&form).await });
        })
    };
    let on_download = {
        let controller = controller.clone();
        Callback::from(move |period: String| controller.download_report(&period))
    };

    html! {
        <ContextProvider<AppSettings> context={(*settings).clone()}>
            { page_shell(
                "Household Expenses",
                html! {
                    <>
                        <BudgetPanel
                            budget={state.budget}
                            remaining={state.remaining}
                            budget_input={state.budget_input.clone()}
                            on_input={on_budget_input}
                            on_save={on_save_budget} />
                        <ExpenseFormCard
                            form={state.form.clone()}
                            {on_edit}
                            on_submit={on_add_expense} />
                        <ReportButtons {on_download} />
                        <ExpenseTable expenses={state.expenses.clone()} />
                    </>
                }
            ) }
        </ContextProvider<AppSettings>>
    }
}
