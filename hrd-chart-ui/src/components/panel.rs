//! Bordered grid cell holding one chart panel.

use crate::palette::PANEL_BACKGROUND;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PanelProps {
    /// Panel heading
    pub title: String,
    pub children: Element,
}

#[component]
pub fn Panel(props: PanelProps) -> Element {
    rsx! {
        section {
            style: "flex: 1; min-width: 0; padding: 12px 16px; border: 1px solid #e0e0e0; border-radius: 8px; background-color: {PANEL_BACKGROUND};",
            h6 {
                style: "margin: 0 0 8px 0; font-size: 15px; font-weight: 600;",
                "{props.title}"
            }
            {props.children}
        }
    }
}
