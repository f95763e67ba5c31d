//! Loading indicator shown while the embedded CSV is parsed.

use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 48px; color: #666; font-size: 14px;",
            "Loading Landsat scenes..."
        }
    }
}
