//! Radio pair toggling std-dev error bars on the time series chart.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn VariabilityToggle() -> Element {
    let mut state = use_context::<AppState>();
    let show = (state.show_variability)();

    rsx! {
        div {
            style: "margin: 8px 0;",
            div {
                style: "font-weight: bold; margin-bottom: 4px;",
                "Show Variability?"
            }
            label {
                style: "display: inline-flex; align-items: center; gap: 4px; margin-right: 12px; font-size: 14px;",
                input {
                    r#type: "radio",
                    name: "show-variability",
                    checked: show,
                    onchange: move |_| state.show_variability.set(true),
                }
                "Yes"
            }
            label {
                style: "display: inline-flex; align-items: center; gap: 4px; font-size: 14px;",
                input {
                    r#type: "radio",
                    name: "show-variability",
                    checked: !show,
                    onchange: move |_| state.show_variability.set(false),
                }
                "No"
            }
            div {
                style: "font-size: 11px; color: #666; margin-top: 2px;",
                "Error bars show one standard deviation across the AOI."
            }
        }
    }
}
