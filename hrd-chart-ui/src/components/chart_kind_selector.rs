//! Histogram / Pie toggle for the distribution panel.

use crate::state::AppState;
use dioxus::prelude::*;
use hrd_core::ChartKind;

#[component]
pub fn ChartKindSelector() -> Element {
    let mut state = use_context::<AppState>();
    let current = (state.chart_kind)();

    let on_change = move |evt: Event<FormData>| {
        if let Some(kind) = ChartKind::from_label(&evt.value()) {
            state.chart_kind.set(kind);
        }
    };

    rsx! {
        select {
            id: "chart-kind-select",
            "aria-label": "Chart type",
            style: "flex: 1; padding: 4px;",
            onchange: on_change,
            for kind in ChartKind::ALL {
                option {
                    value: "{kind.label()}",
                    selected: kind == current,
                    "{kind.label()}"
                }
            }
        }
    }
}
