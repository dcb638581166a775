//! Core types for the hospital readmission dashboard.
//!
//! - `encounter`: one row of the Encounter Table as read from CSV
//! - `field`: the column catalog and the fixed selector lists each panel offers
//! - `filter`: age bracket filter and chart kind selections
//! - `readmitted`: the binary outcome stored in the `readmitted` column

pub mod encounter;
pub mod field;
pub mod filter;
pub mod readmitted;

pub use encounter::Encounter;
pub use field::{Field, FieldKind, DISTRIBUTION_FIELDS, INTERVENTION_FIELDS, STAY_FACTOR_FIELDS};
pub use filter::{AgeFilter, ChartKind, ALL_AGES_LABEL};
pub use readmitted::Readmitted;
