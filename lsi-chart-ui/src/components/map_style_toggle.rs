//! Radio toggle for the map base layer.

use crate::state::AppState;
use dioxus::prelude::*;
use lsi_core::selection::MapStyle;

/// Standard/Satellite radio pair controlling the tile layer under the AOI.
#[component]
pub fn MapStyleToggle() -> Element {
    let mut state = use_context::<AppState>();
    let current = (state.map_style)();

    rsx! {
        div {
            style: "margin: 8px 0;",
            div {
                style: "font-weight: bold; margin-bottom: 4px;",
                "Map View"
            }
            label {
                style: "display: inline-flex; align-items: center; gap: 4px; margin-right: 12px; font-size: 14px;",
                input {
                    r#type: "radio",
                    name: "map-style",
                    checked: current == MapStyle::Standard,
                    onchange: move |_| state.map_style.set(MapStyle::Standard),
                }
                "Standard"
            }
            label {
                style: "display: inline-flex; align-items: center; gap: 4px; font-size: 14px;",
                input {
                    r#type: "radio",
                    name: "map-style",
                    checked: current == MapStyle::Satellite,
                    onchange: move |_| state.map_style.set(MapStyle::Satellite),
                }
                "Satellite"
            }
        }
    }
}
