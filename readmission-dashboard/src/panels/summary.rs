//! Headline metric tiles over the full table.

use dioxus::prelude::*;
use hrd_chart_ui::components::{ErrorDisplay, MetricTile};
use hrd_chart_ui::payload::summary_tiles;
use hrd_chart_ui::state::AppState;

#[component]
pub fn SummaryRow() -> Element {
    let state = use_context::<AppState>();
    let db = state.db.read().clone();
    let Some(db) = db else {
        return rsx! {};
    };

    let tiles = match db.query_summary() {
        Ok(metrics) => summary_tiles(&metrics),
        Err(e) => {
            log::error!("[HRD] panel: failed to compute summary metrics: {}", e);
            return rsx! {
                ErrorDisplay {
                    message: format!("Failed to compute summary metrics: {}", e),
                    inline: true,
                }
            };
        }
    };

    rsx! {
        div {
            style: "display: flex; gap: 12px; flex-wrap: wrap;",
            for tile in tiles {
                MetricTile {
                    key: "{tile.label}",
                    label: tile.label.to_string(),
                    value: tile.value,
                }
            }
        }
    }
}
