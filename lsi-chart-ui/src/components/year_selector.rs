//! Year filter checkboxes for the sidebar.

use crate::state::AppState;
use dioxus::prelude::*;

/// One checkbox per year present in the dataset. The checked set feeds the
/// year filter; clearing every box falls back to the full record.
#[component]
pub fn YearSelector() -> Element {
    let state = use_context::<AppState>();
    let years = state.available_years.read().clone();
    let selected = state.selected_years.read().clone();

    rsx! {
        div {
            style: "margin: 8px 0;",
            div {
                style: "font-weight: bold; margin-bottom: 4px;",
                "Select Year(s)"
            }
            for year in years {
                YearCheckbox {
                    year,
                    checked: selected.contains(&year),
                }
            }
            div {
                style: "font-size: 11px; color: #666; margin-top: 4px;",
                "No years checked shows the full record."
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct YearCheckboxProps {
    year: i32,
    checked: bool,
}

#[component]
fn YearCheckbox(props: YearCheckboxProps) -> Element {
    let mut state = use_context::<AppState>();
    let year = props.year;

    let on_change = move |_| {
        let mut years = state.selected_years.read().clone();
        if let Some(position) = years.iter().position(|y| *y == year) {
            years.remove(position);
        } else {
            years.push(year);
            years.sort_unstable();
        }
        state.selected_years.set(years);
    };

    rsx! {
        label {
            style: "display: inline-flex; align-items: center; gap: 4px; margin-right: 10px; font-size: 14px;",
            input {
                r#type: "checkbox",
                checked: props.checked,
                onchange: on_change,
            }
            "{props.year}"
        }
    }
}
