//! Process-wide memoized encounter database.
//!
//! The dashboard re-runs its panels on every dropdown change; all of them
//! read the same immutable table. The first [`load_cached`] call parses the
//! CSV and stores the resulting [`Database`]; later calls with identical
//! content hand back a clone of the same handle without touching the CSV
//! again. If the content differs (the embedded file changed) the slot is
//! replaced. The WASM runtime is single-threaded, so a thread-local slot is
//! process-wide.

use crate::{Database, LoadError};
use std::cell::RefCell;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

struct CachedDataset {
    fingerprint: u64,
    db: Database,
}

thread_local! {
    static DATASET: RefCell<Option<CachedDataset>> = const { RefCell::new(None) };
}

fn fingerprint(csv_data: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    csv_data.hash(&mut hasher);
    hasher.finish()
}

/// Return the cached database for `csv_data`, loading it on first use.
pub fn load_cached(csv_data: &str) -> Result<Database, LoadError> {
    let fingerprint = fingerprint(csv_data);

    let hit = DATASET.with(|slot| {
        slot.borrow()
            .as_ref()
            .filter(|cached| cached.fingerprint == fingerprint)
            .map(|cached| cached.db.clone())
    });
    if let Some(db) = hit {
        log::debug!("[HRD] cache: reusing loaded encounter table");
        return Ok(db);
    }

    let db = Database::from_csv(csv_data)?;
    DATASET.with(|slot| {
        *slot.borrow_mut() = Some(CachedDataset {
            fingerprint,
            db: db.clone(),
        });
    });
    log::info!("[HRD] cache: encounter table loaded and cached");
    Ok(db)
}

/// Drop the cached database so the next [`load_cached`] reloads.
pub fn invalidate() {
    DATASET.with(|slot| slot.borrow_mut().take());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{four_rows, HEADER};

    #[test]
    fn identical_content_reuses_handle() {
        invalidate();
        let first = load_cached(&four_rows()).unwrap();
        let second = load_cached(&four_rows()).unwrap();
        assert!(first.shares_connection(&second));
        assert_eq!(second.query_row_count().unwrap(), 4);
    }

    #[test]
    fn changed_content_reloads() {
        invalidate();
        let first = load_cached(&four_rows()).unwrap();
        let header_only = format!("{HEADER}\n");
        let second = load_cached(&header_only).unwrap();
        assert!(!first.shares_connection(&second));
        assert_eq!(second.query_row_count().unwrap(), 0);
        // The old handle is still valid and unchanged.
        assert_eq!(first.query_row_count().unwrap(), 4);
    }

    #[test]
    fn invalidate_forces_reload() {
        invalidate();
        let first = load_cached(&four_rows()).unwrap();
        invalidate();
        let second = load_cached(&four_rows()).unwrap();
        assert!(!first.shares_connection(&second));
        assert_eq!(first.query_summary().unwrap(), second.query_summary().unwrap());
    }

    #[test]
    fn repeated_loads_serve_an_unchanged_table() {
        invalidate();
        let first = load_cached(&four_rows()).unwrap();
        let before = first.query_summary().unwrap();
        for field in hrd_core::DISTRIBUTION_FIELDS {
            first.query_value_counts(field, &hrd_core::AgeFilter::All).unwrap();
        }
        first.query_stay_by_diagnosis().unwrap();

        for _ in 0..3 {
            let again = load_cached(&four_rows()).unwrap();
            assert_eq!(again.query_row_count().unwrap(), 4);
            assert_eq!(again.query_summary().unwrap(), before);
        }
    }

    #[test]
    fn load_errors_are_not_cached() {
        invalidate();
        assert!(matches!(load_cached(""), Err(LoadError::Empty)));
        assert!(load_cached(&four_rows()).is_ok());
    }
}
