//! Chart panel: a heading plus the container div a renderer draws into.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PanelProps {
    /// The DOM id the JS renderer looks up.
    pub id: String,
    /// Heading shown above the panel; empty string hides it.
    #[props(default = String::new())]
    pub heading: String,
    /// Minimum panel height in pixels.
    #[props(default = 320)]
    pub min_height: u32,
}

/// A panel with a heading and an empty container div. The JS side owns
/// everything inside the container.
#[component]
pub fn Panel(props: PanelProps) -> Element {
    let container_style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );

    rsx! {
        div {
            style: "margin-bottom: 16px;",
            if !props.heading.is_empty() {
                h3 {
                    style: "margin: 0 0 6px 0; font-size: 16px;",
                    "{props.heading}"
                }
            }
            div {
                id: "{props.id}",
                style: "{container_style}",
            }
        }
    }
}
