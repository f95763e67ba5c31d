//! Single statistic card: a label over a preformatted value.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct MetricCardProps {
    pub label: String,
    pub value: String,
}

/// One stat card. The value arrives preformatted from the render plan, so
/// this component never touches numbers.
#[component]
pub fn MetricCard(props: MetricCardProps) -> Element {
    rsx! {
        div {
            style: "padding: 10px 12px; margin-bottom: 8px; background: #FAFAFA; border: 1px solid #E0E0E0; border-radius: 4px;",
            div {
                style: "font-size: 12px; color: #666; margin-bottom: 2px;",
                "{props.label}"
            }
            div {
                style: "font-size: 20px; font-weight: bold; color: #212121;",
                "{props.value}"
            }
        }
    }
}
