//! Tab strip for switching between the four surface indices.

use crate::state::AppState;
use dioxus::prelude::*;
use lsi_core::index::{IndexConfig, IndexKind};

/// Horizontal tab strip listing every index in tab order. Clicking a tab
/// updates `selected_index`, which re-runs the render effect.
#[component]
pub fn IndexTabs() -> Element {
    let state = use_context::<AppState>();
    let selected = (state.selected_index)();

    rsx! {
        div {
            style: "display: flex; gap: 4px; border-bottom: 2px solid #E0E0E0; margin-bottom: 12px;",
            for config in IndexConfig::all() {
                IndexTabButton {
                    kind: config.kind,
                    active: config.kind == selected,
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct IndexTabButtonProps {
    kind: IndexKind,
    active: bool,
}

#[component]
fn IndexTabButton(props: IndexTabButtonProps) -> Element {
    let mut state = use_context::<AppState>();
    let config = IndexConfig::for_kind(props.kind);
    let kind = props.kind;

    let style = if props.active {
        "padding: 8px 14px; border: none; border-bottom: 3px solid #2E7D32; \
         background: #F1F8E9; font-weight: bold; cursor: pointer; font-size: 14px;"
    } else {
        "padding: 8px 14px; border: none; border-bottom: 3px solid transparent; \
         background: transparent; cursor: pointer; font-size: 14px; color: #555;"
    };

    rsx! {
        button {
            style: "{style}",
            onclick: move |_| state.selected_index.set(kind),
            "{config.icon} {config.short_label}"
        }
    }
}
