//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! Panels hold no state of their own beyond these selections.

use dioxus::prelude::*;
use hrd_core::{AgeFilter, ChartKind, Field, DISTRIBUTION_FIELDS, INTERVENTION_FIELDS, STAY_FACTOR_FIELDS};
use hrd_db::Database;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Cached encounter database (None until loaded)
    pub db: Signal<Option<Database>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Load error; when set, nothing but the error is rendered
    pub error_msg: Signal<Option<String>>,
    /// Sorted distinct age brackets for the age dropdown
    pub age_brackets: Signal<Vec<String>>,
    /// Distribution panel: selected variable
    pub distribution_field: Signal<Field>,
    /// Distribution panel: selected age bracket or all ages
    pub age_filter: Signal<AgeFilter>,
    /// Distribution panel: histogram or pie
    pub chart_kind: Signal<ChartKind>,
    /// Length-of-stay panel: selected count field
    pub stay_factor: Signal<Field>,
    /// Interventions panel: selected count field
    pub intervention: Signal<Field>,
}

impl AppState {
    /// Create a new AppState with each dropdown on its first option.
    pub fn new() -> Self {
        Self {
            db: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            age_brackets: Signal::new(Vec::new()),
            distribution_field: Signal::new(DISTRIBUTION_FIELDS[0]),
            age_filter: Signal::new(AgeFilter::All),
            chart_kind: Signal::new(ChartKind::Histogram),
            stay_factor: Signal::new(STAY_FACTOR_FIELDS[0]),
            intervention: Signal::new(INTERVENTION_FIELDS[0]),
        }
    }
}
