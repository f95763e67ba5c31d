//! Reusable Dioxus RSX components for the dashboard shell.

mod empty_state;
mod error_display;
mod index_tabs;
mod loading_spinner;
mod map_style_toggle;
mod metric_card;
mod panel;
mod variability_toggle;
mod year_selector;

pub use empty_state::EmptyState;
pub use error_display::ErrorDisplay;
pub use index_tabs::IndexTabs;
pub use loading_spinner::LoadingSpinner;
pub use map_style_toggle::MapStyleToggle;
pub use metric_card::MetricCard;
pub use panel::Panel;
pub use variability_toggle::VariabilityToggle;
pub use year_selector::YearSelector;
