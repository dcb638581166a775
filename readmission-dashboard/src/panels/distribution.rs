//! Variable Distribution by Age Group.

use crate::config::HISTOGRAM_MAX_BINS;
use dioxus::prelude::*;
use hrd_chart_ui::components::{AgeSelector, ChartContainer, ChartKindSelector, ErrorDisplay, FieldSelector};
use hrd_chart_ui::js_bridge;
use hrd_chart_ui::payload::distribution_chart;
use hrd_chart_ui::state::AppState;
use hrd_core::DISTRIBUTION_FIELDS;

const CHART_ID: &str = "distribution-chart";

#[component]
pub fn DistributionPanel() -> Element {
    let state = use_context::<AppState>();
    let mut panel_error = use_signal(|| None::<String>);

    let encounters = use_memo(move || {
        let age = (state.age_filter)();
        state
            .db
            .read()
            .as_ref()
            .and_then(|db| db.query_filtered_count(&age).ok())
            .unwrap_or(0)
    });

    // Re-render whenever the variable, age bracket or chart kind changes
    use_effect(move || {
        let field = (state.distribution_field)();
        let age = (state.age_filter)();
        let kind = (state.chart_kind)();
        let db = match &*state.db.read() {
            Some(db) => db.clone(),
            None => return,
        };

        match distribution_chart(&db, field, &age, kind, HISTOGRAM_MAX_BINS) {
            Ok((renderer, payload)) => {
                panel_error.set(None);
                js_bridge::render_chart(renderer, CHART_ID, &payload);
            }
            Err(e) => {
                log::error!("[HRD] panel: failed to build distribution chart: {}", e);
                panel_error.set(Some(e.to_string()));
                js_bridge::destroy_chart(CHART_ID);
            }
        }
    });

    let n = encounters();

    rsx! {
        div {
            style: "display: flex; gap: 8px; margin-bottom: 4px;",
            FieldSelector {
                id: "distribution-field-select".to_string(),
                options: &DISTRIBUTION_FIELDS,
                selected: state.distribution_field,
            }
            AgeSelector {}
            ChartKindSelector {}
        }
        p {
            style: "margin: 0; font-size: 11px; color: #888;",
            "{n} encounters"
        }
        if let Some(err) = panel_error() {
            ErrorDisplay { message: err, inline: true }
        }
        ChartContainer {
            id: CHART_ID.to_string(),
            label: "Variable distribution".to_string(),
            min_height: 400,
        }
    }
}
