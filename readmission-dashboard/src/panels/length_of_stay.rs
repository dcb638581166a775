//! Factors Influencing Length of Stay.

use dioxus::prelude::*;
use hrd_chart_ui::components::{ChartContainer, ErrorDisplay, FieldSelector};
use hrd_chart_ui::js_bridge::{self, ChartRenderer};
use hrd_chart_ui::payload::scatter_payload;
use hrd_chart_ui::state::AppState;
use hrd_core::STAY_FACTOR_FIELDS;

const CHART_ID: &str = "length-of-stay-chart";

#[component]
pub fn LengthOfStayPanel() -> Element {
    let state = use_context::<AppState>();
    let mut panel_error = use_signal(|| None::<String>);

    use_effect(move || {
        let factor = (state.stay_factor)();
        let db = match &*state.db.read() {
            Some(db) => db.clone(),
            None => return,
        };

        let payload = db
            .query_stay_scatter(factor)
            .and_then(|points| scatter_payload(factor, &points));
        match payload {
            Ok(payload) => {
                panel_error.set(None);
                js_bridge::render_chart(ChartRenderer::Scatter, CHART_ID, &payload);
            }
            Err(e) => {
                log::error!("[HRD] panel: failed to build length of stay chart: {}", e);
                panel_error.set(Some(e.to_string()));
                js_bridge::destroy_chart(CHART_ID);
            }
        }
    });

    rsx! {
        div {
            style: "display: flex; margin-bottom: 4px;",
            FieldSelector {
                id: "stay-factor-select".to_string(),
                options: &STAY_FACTOR_FIELDS,
                selected: state.stay_factor,
            }
        }
        if let Some(err) = panel_error() {
            ErrorDisplay { message: err, inline: true }
        }
        ChartContainer {
            id: CHART_ID.to_string(),
            label: "Time in hospital against the selected count".to_string(),
            min_height: 400,
        }
    }
}
