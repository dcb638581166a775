//! SQL schema for the in-memory encounter database.

/// Returns the full SQL schema as a single batch string.
///
/// One row per encounter. Count columns are `INTEGER`, so `GROUP BY` and
/// `ORDER BY` on them sort numerically. Indexes cover the columns the
/// panels filter or group on.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS encounters (
        id INTEGER PRIMARY KEY,
        age_bracket TEXT NOT NULL,
        time_in_hospital INTEGER NOT NULL,
        n_lab_procedures INTEGER NOT NULL,
        n_procedures INTEGER NOT NULL,
        n_medications INTEGER NOT NULL,
        n_outpatient INTEGER NOT NULL,
        n_inpatient INTEGER NOT NULL,
        n_emergency INTEGER NOT NULL,
        medical_specialty TEXT NOT NULL,
        diag_1 TEXT NOT NULL,
        diag_2 TEXT NOT NULL,
        diag_3 TEXT NOT NULL,
        glucose_test TEXT NOT NULL,
        a1c_test TEXT NOT NULL,
        change TEXT NOT NULL,
        diabetes_med TEXT NOT NULL,
        readmitted TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_enc_age ON encounters(age_bracket);
    CREATE INDEX IF NOT EXISTS idx_enc_readmitted ON encounters(readmitted);
    CREATE INDEX IF NOT EXISTS idx_enc_diag1 ON encounters(diag_1);
    "#
}

#[cfg(test)]
mod tests {
    use super::*;
    use hrd_core::DISTRIBUTION_FIELDS;
    use rusqlite::Connection;

    #[test]
    fn schema_is_valid_sql() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema())
            .expect("Schema SQL should be valid");
    }

    #[test]
    fn schema_creates_indexes() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();

        for idx in ["idx_enc_age", "idx_enc_readmitted", "idx_enc_diag1"] {
            let count: i64 = conn
                .query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type='index' AND name=?1",
                    [idx],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "Index '{}' should exist", idx);
        }
    }

    #[test]
    fn every_catalog_field_has_a_column() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();
        for field in DISTRIBUTION_FIELDS {
            let sql = format!("SELECT {} FROM encounters LIMIT 1", field.column());
            conn.prepare(&sql)
                .unwrap_or_else(|e| panic!("column {} missing: {}", field.column(), e));
        }
    }

    #[test]
    fn schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();
        conn.execute_batch(create_schema())
            .expect("Applying schema twice should succeed due to IF NOT EXISTS");
    }
}
