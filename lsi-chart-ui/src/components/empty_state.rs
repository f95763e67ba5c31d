//! Message panel shown where the charts would be when a selection matches
//! no scenes.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct EmptyStateProps {
    pub message: String,
}

/// Informational panel for an empty selection. The sidebar controls stay
/// live so the user can widen the filter.
#[component]
pub fn EmptyState(props: EmptyStateProps) -> Element {
    rsx! {
        div {
            style: "padding: 32px 16px; margin: 12px 0; background: #FFF8E1; border: 1px solid #FFE082; border-radius: 4px; text-align: center; color: #795548;",
            div {
                style: "font-size: 15px; font-weight: bold; margin-bottom: 4px;",
                "{props.message}"
            }
            div {
                style: "font-size: 13px;",
                "Adjust the year filter in the sidebar to bring data back."
            }
        }
    }
}
