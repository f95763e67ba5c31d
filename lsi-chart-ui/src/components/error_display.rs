//! Fatal error banner for failed data loads.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Full-width banner for errors that stop the dashboard from loading.
/// Recoverable conditions (empty selections, missing AOI) never use this;
/// they degrade their own panel instead.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 14px 16px; margin: 12px 0; background: #FFEBEE; border-left: 4px solid #C62828; border-radius: 2px;",
            div {
                style: "font-weight: bold; color: #B71C1C; margin-bottom: 4px;",
                "Dashboard data unavailable"
            }
            div {
                style: "color: #C62828; font-size: 14px;",
                "{props.message}"
            }
        }
    }
}
