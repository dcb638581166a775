//! Error box for load failures and per-panel query failures.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Compact variant shown inside a panel, above its chart.
    #[props(default = false)]
    pub inline: bool,
}

/// A load error replaces the whole page; an inline error only its panel.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    let (padding, heading) = if props.inline {
        ("4px 8px", "Chart unavailable: ")
    } else {
        ("12px 16px", "Could not load the dashboard: ")
    };

    rsx! {
        div {
            role: "alert",
            style: "padding: {padding}; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A; font-size: 13px;",
            strong { "{heading}" }
            "{props.message}"
        }
    }
}
