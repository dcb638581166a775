//! Medical Interventions by Age and Readmission.
//!
//! Means are computed per (age bracket, readmitted) but drawn in a single
//! colour, so the two readmission groups of a bracket stack into one bar.

use dioxus::prelude::*;
use hrd_chart_ui::components::{ChartContainer, ErrorDisplay, FieldSelector};
use hrd_chart_ui::js_bridge::{self, ChartRenderer};
use hrd_chart_ui::payload::intervention_bar_payload;
use hrd_chart_ui::state::AppState;
use hrd_core::INTERVENTION_FIELDS;

const CHART_ID: &str = "interventions-chart";

#[component]
pub fn InterventionsPanel() -> Element {
    let state = use_context::<AppState>();
    let mut panel_error = use_signal(|| None::<String>);

    use_effect(move || {
        let field = (state.intervention)();
        let db = match &*state.db.read() {
            Some(db) => db.clone(),
            None => return,
        };

        let payload = db
            .query_intervention_means(field)
            .and_then(|means| intervention_bar_payload(field, &means));
        match payload {
            Ok(payload) => {
                panel_error.set(None);
                js_bridge::render_chart(ChartRenderer::Bar, CHART_ID, &payload);
            }
            Err(e) => {
                log::error!("[HRD] panel: failed to build interventions chart: {}", e);
                panel_error.set(Some(e.to_string()));
                js_bridge::destroy_chart(CHART_ID);
            }
        }
    });

    rsx! {
        div {
            style: "display: flex; margin-bottom: 4px;",
            FieldSelector {
                id: "intervention-select".to_string(),
                options: &INTERVENTION_FIELDS,
                selected: state.intervention,
            }
        }
        if let Some(err) = panel_error() {
            ErrorDisplay { message: err, inline: true }
        }
        ChartContainer {
            id: CHART_ID.to_string(),
            label: "Mean intervention count by age bracket".to_string(),
            min_height: 400,
        }
    }
}
