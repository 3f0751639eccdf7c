// Panel rendering - Pure function of the panel state
use crate::domain::panel_state::PanelState;
use dioxus::prelude::*;

/// Metrics panel for one state of a mounted panel
#[component]
pub fn MetricsPanel(state: PanelState) -> Element {
    match state {
        PanelState::Loading => rsx! {
            div { class: "p-2 border rounded", "Loading..." }
        },
        PanelState::Failed(message) => rsx! {
            div { class: "p-2 border rounded text-red-500", "Error: {message}" }
        },
        PanelState::Ready(metrics, finance, domains) => {
            let domain_count = metrics.domain_count;
            let revenue = format_number(metrics.revenue);
            let profit = format_number(finance.profit);

            rsx! {
                div { class: "p-2 border rounded space-y-2",
                    div { "KPIs: domains={domain_count}, revenue={revenue}" }
                    div { "Finance Profit: {profit}" }
                    div {
                        "Domains:"
                        ul { class: "list-disc list-inside",
                            for domain in domains.iter() {
                                li { key: "{domain}", "{domain}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Whole values keep one decimal place so a float reads as a float.
pub fn format_number(value: f64) -> String {
    // -0.0 shows as zero
    let value = if value == 0.0 { 0.0 } else { value };
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}
