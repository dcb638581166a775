//! Query result model structs.
//!
//! All structs derive `Serialize` so they can be passed to D3.js as JSON
//! from the Dioxus WASM frontend.

use hrd_data::quantiles::BoxStats;
use serde::Serialize;

pub use hrd_data::histogram::HistogramBin;

/// The six headline aggregates over the full table.
///
/// Averages are rounded to 2 decimals and are `None` for an empty table.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SummaryMetrics {
    pub total_patients: i64,
    /// Mean `time_in_hospital` in days.
    pub avg_stay: Option<f64>,
    /// Percentage of rows with `readmitted == "yes"`.
    pub readmission_rate: Option<f64>,
    pub avg_procedures: Option<f64>,
    pub avg_lab_tests: Option<f64>,
    pub avg_medications: Option<f64>,
}

/// Number of rows holding one distinct value of a column.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ValueCount {
    pub value: String,
    pub count: i64,
}

/// One encounter projected onto (selected count, length of stay).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScatterPoint {
    pub x: i64,
    pub y: i64,
    pub readmitted: String,
}

/// Length-of-stay distribution for one (primary diagnosis, readmitted) group.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DiagnosisBox {
    pub diagnosis: String,
    pub readmitted: String,
    #[serde(flatten)]
    pub stats: BoxStats,
}

/// Mean of an intervention count for one (age bracket, readmitted) group.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GroupMean {
    pub age_bracket: String,
    pub readmitted: String,
    pub mean: f64,
    /// Rows in the group; always at least one.
    pub count: i64,
}
