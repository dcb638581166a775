//! Hospital Readmission Dashboard
//!
//! Single-page report over a cleaned table of hospital encounters: six
//! headline metrics and four chart panels, each driven by its own dropdowns.
//!
//! Data flow:
//! 1. `build.rs` copies `data/hospital_readmission_clean.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds the CSV into the WASM binary.
//! 3. On mount, `hrd_db::cache::load_cached` parses it into an in-memory
//!    SQLite database once; every later render reuses that handle.
//! 4. Each panel's effect re-runs when one of its selections changes,
//!    queries the database and re-renders its D3.js chart.
//!
//! A load failure replaces the whole page with an error; there is no
//! partial dashboard.

mod config;
mod panels;

use dioxus::prelude::*;
use hrd_chart_ui::components::{ErrorDisplay, LoadingSpinner, Panel};
use hrd_chart_ui::js_bridge;
use hrd_chart_ui::state::AppState;
use panels::{
    DiagnosisPanel, DistributionPanel, InterventionsPanel, LengthOfStayPanel, SummaryRow,
};

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname(config::ROOT_NAME))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Load (or reuse) the encounter table once on mount
    use_effect(move || {
        match hrd_db::cache::load_cached(config::ENCOUNTERS_CSV) {
            Ok(db) => match db.query_age_brackets() {
                Ok(brackets) => {
                    log::info!("[HRD] app: dashboard ready, {} age brackets", brackets.len());
                    state.age_brackets.set(brackets);
                    state.db.set(Some(db));
                    js_bridge::init_charts();
                }
                Err(e) => {
                    log::error!("[HRD] app: failed to read age brackets: {}", e);
                    state
                        .error_msg
                        .set(Some(format!("age brackets unavailable: {}", e)));
                }
            },
            Err(e) => {
                log::error!("[HRD] app: failed to load encounters: {}", e);
                state.error_msg.set(Some(e.to_string()));
            }
        }
        state.loading.set(false);
    });

    rsx! {
        document::Title { "{config::PAGE_TITLE}" }
        document::Link { rel: "icon", href: config::PAGE_ICON_HREF }
        document::Script { src: config::D3_SCRIPT_URL }

        div {
            style: "max-width: 1400px; margin: 0 auto; padding: 16px; font-family: system-ui, -apple-system, sans-serif;",
            h1 {
                style: "margin: 0 0 16px 0; font-size: 28px;",
                "{config::PAGE_TITLE}"
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                SummaryRow {}

                div {
                    style: "display: flex; gap: 16px; margin-top: 16px;",
                    Panel {
                        title: "Variable Distribution by Age Group".to_string(),
                        DistributionPanel {}
                    }
                    Panel {
                        title: "Factors Influencing Length of Stay".to_string(),
                        LengthOfStayPanel {}
                    }
                }

                div {
                    style: "display: flex; gap: 16px; margin-top: 16px;",
                    Panel {
                        title: "Length of Stay by Primary Diagnosis".to_string(),
                        DiagnosisPanel {}
                    }
                    Panel {
                        title: "Medical Interventions by Age and Readmission".to_string(),
                        InterventionsPanel {}
                    }
                }
            }
        }
    }
}
