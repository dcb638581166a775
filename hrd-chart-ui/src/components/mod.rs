//! Reusable Dioxus RSX components for the dashboard.

mod age_selector;
mod chart_container;
mod chart_kind_selector;
mod error_display;
mod field_selector;
mod loading_spinner;
mod metric_tile;
mod panel;

pub use age_selector::AgeSelector;
pub use chart_container::ChartContainer;
pub use chart_kind_selector::ChartKindSelector;
pub use error_display::ErrorDisplay;
pub use field_selector::FieldSelector;
pub use loading_spinner::LoadingSpinner;
pub use metric_tile::MetricTile;
pub use panel::Panel;
