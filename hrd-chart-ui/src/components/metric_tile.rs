//! A single headline metric.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct MetricTileProps {
    pub label: String,
    pub value: String,
}

/// Bordered tile with the label above a large value, both centered.
#[component]
pub fn MetricTile(props: MetricTileProps) -> Element {
    rsx! {
        div {
            style: "flex: 1; min-width: 120px; padding: 12px 8px; border: 1px solid #e0e0e0; border-radius: 8px; text-align: center;",
            div {
                style: "font-size: 14px; color: #555; margin-bottom: 4px;",
                "{props.label}"
            }
            div {
                style: "font-size: 28px; font-weight: 600;",
                "{props.value}"
            }
        }
    }
}
