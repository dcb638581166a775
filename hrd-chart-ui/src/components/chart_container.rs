//! Mount point for a D3 chart.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id the renderer draws into
    pub id: String,
    /// Accessible name of the chart, usually the panel title
    pub label: String,
    #[props(default = 400)]
    pub min_height: u32,
}

/// Fixed-height host element; the renderer replaces its contents on every call.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    rsx! {
        figure {
            style: "margin: 0; min-height: {props.min_height}px; width: 100%;",
            "aria-label": "{props.label}",
            div {
                id: "{props.id}",
                style: "width: 100%;",
            }
        }
    }
}
