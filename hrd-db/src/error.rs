//! Errors raised while loading the encounter file.

use thiserror::Error;

/// The dataset could not be turned into an Encounter Table.
///
/// Any of these aborts rendering: the dashboard never shows a partial page.
#[derive(Error, Debug)]
pub enum LoadError {
    /// No header line at all, e.g. the file was missing at build time.
    #[error("encounter dataset is empty or missing")]
    Empty,

    /// A row could not be parsed (missing column, non-integer count, ...).
    #[error("failed to parse encounter CSV: {0}")]
    Csv(#[from] csv::Error),

    /// SQLite rejected the schema or an insert.
    #[error("database error while loading encounters: {0}")]
    Database(#[from] rusqlite::Error),
}
