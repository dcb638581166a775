//! In-memory SQLite database for the hospital encounter table.
//!
//! The cleaned encounter CSV is parsed once into an in-memory SQLite
//! database and exposed through typed query methods, one per dashboard
//! panel. Results are serializable so they can be handed to D3.js as JSON
//! from the Dioxus WASM frontend.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in single-threaded WASM
//! - In-memory SQLite via `rusqlite`
//! - CSV data embedded via `include_str!` at compile time in the consuming crate
//! - Rows are written once by [`Database::from_csv`]; handles are read-only afterwards
//! - [`cache::load_cached`] memoizes the loaded database for the process lifetime
//!
//! # Usage
//!
//! ```rust
//! use hrd_db::Database;
//!
//! let csv = "\
//! age,time_in_hospital,n_lab_procedures,n_procedures,n_medications,n_outpatient,n_inpatient,n_emergency,medical_specialty,diag_1,diag_2,diag_3,glucose_test,A1Ctest,change,diabetes_med,readmitted
//! [70-80),5,40,1,10,0,0,0,Cardiology,Circulatory,Other,Diabetes,no,no,no,yes,yes
//! ";
//! let db = Database::from_csv(csv).unwrap();
//! let summary = db.query_summary().unwrap();
//! assert_eq!(summary.total_patients, 1);
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`]. There is a single `encounters` table; every
//! aggregate is derived on the fly with `GROUP BY` queries.

pub mod cache;
mod error;
mod loader;
pub mod models;
mod queries;
pub mod schema;

pub use error::LoadError;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database holding the Encounter Table.
///
/// Cheaply cloneable (via `Rc`); clones share one connection. The table is
/// only written by the loader, so every clone observes the same immutable rows.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the schema applied and no rows.
    pub(crate) fn new() -> Result<Self, LoadError> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }

    /// Create a database and load `csv_data` into it.
    ///
    /// This is the only way to populate a table from outside the crate, so a
    /// handle, once returned, never gains or loses rows.
    pub fn from_csv(csv_data: &str) -> Result<Self, LoadError> {
        let db = Self::new()?;
        db.load_encounters(csv_data)?;
        Ok(db)
    }

    /// True when both handles share the same underlying connection.
    pub fn shares_connection(&self, other: &Database) -> bool {
        Rc::ptr_eq(&self.conn, &other.conn)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_creates_successfully() {
        let db = Database::new();
        assert!(db.is_ok(), "Database should create without errors");
    }

    #[test]
    fn database_is_cloneable() {
        let db = Database::new().unwrap();
        let db2 = db.clone();
        db.load_encounters(&test_fixtures::four_rows()).unwrap();
        assert_eq!(
            db2.query_row_count().unwrap(),
            4,
            "Clone should see same data via shared Rc"
        );
        assert!(db.shares_connection(&db2));
    }

    #[test]
    fn database_starts_empty() {
        let db = Database::new().unwrap();
        assert_eq!(db.query_row_count().unwrap(), 0);
    }

    #[test]
    fn separate_databases_do_not_share() {
        let a = Database::new().unwrap();
        let b = Database::new().unwrap();
        assert!(!a.shares_connection(&b));
    }
}
