//! Length of Stay by Primary Diagnosis. Fixed chart, no controls.

use dioxus::prelude::*;
use hrd_chart_ui::components::{ChartContainer, ErrorDisplay};
use hrd_chart_ui::js_bridge::{self, ChartRenderer};
use hrd_chart_ui::payload::diagnosis_box_payload;
use hrd_chart_ui::state::AppState;

const CHART_ID: &str = "diagnosis-box-chart";

#[component]
pub fn DiagnosisPanel() -> Element {
    let state = use_context::<AppState>();
    let mut panel_error = use_signal(|| None::<String>);

    use_effect(move || {
        let db = match &*state.db.read() {
            Some(db) => db.clone(),
            None => return,
        };

        let payload = db
            .query_stay_by_diagnosis()
            .and_then(|boxes| diagnosis_box_payload(&boxes));
        match payload {
            Ok(payload) => {
                panel_error.set(None);
                js_bridge::render_chart(ChartRenderer::Box, CHART_ID, &payload);
            }
            Err(e) => {
                log::error!("[HRD] panel: failed to build diagnosis chart: {}", e);
                panel_error.set(Some(e.to_string()));
                js_bridge::destroy_chart(CHART_ID);
            }
        }
    });

    rsx! {
        if let Some(err) = panel_error() {
            ErrorDisplay { message: err, inline: true }
        }
        ChartContainer {
            id: CHART_ID.to_string(),
            label: "Time in hospital by primary diagnosis".to_string(),
            min_height: 400,
        }
    }
}
