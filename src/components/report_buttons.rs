use yew::prelude::*;

use crate::models::ReportPeriod;

#[derive(Properties, PartialEq)]
pub struct ReportButtonsProps {
    pub on_download: Callback<String>,
}

#[function_component(ReportButtons)]
pub fn report_buttons(props: &ReportButtonsProps) -> Html {
    html! {
        <div class="flex flex-wrap gap-3">
            { for ReportPeriod::ALL.iter().map(|period| {
                let onclick = {
                    let on_download = props.on_download.clone();
                    let period = period.as_str();
                    Callback::from(move |_: MouseEvent| on_download.emit(period.to_string()))
                };
                html! {
                    <button type="button" class="downloadBtn bg-[#B2CBDE] text-[#173E63] px-4 py-2 rounded-[10px] text-[10px] font-bold"
                        data-period={period.as_str()} {onclick}>
                        { period.label() }
                    </button>
                }
            }) }
        </div>
    }
}
