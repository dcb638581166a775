//! CSV loading for the encounter table.
//!
//! Expected format (with headers, in any column order):
//!
//! ```text
//! age,time_in_hospital,n_lab_procedures,n_procedures,n_medications,n_outpatient,n_inpatient,n_emergency,medical_specialty,diag_1,diag_2,diag_3,glucose_test,A1Ctest,change,diabetes_med,readmitted
//! [70-80),8,72,1,18,2,0,0,Missing,Circulatory,Respiratory,Other,no,no,no,yes,no
//! ```
//!
//! The file is assumed to be clean; anything serde cannot parse into an
//! [`Encounter`] fails the whole load.

use crate::{Database, LoadError};
use hrd_core::Encounter;
use rusqlite::params;

impl Database {
    /// Load encounters from a CSV string, returning the number of rows inserted.
    ///
    /// All rows are inserted in one transaction; on error nothing is kept.
    pub(crate) fn load_encounters(&self, csv_data: &str) -> Result<usize, LoadError> {
        if csv_data.trim().is_empty() {
            log::error!("[HRD] loader: encounter CSV is empty");
            return Err(LoadError::Empty);
        }

        let mut conn = self.conn.borrow_mut();
        let tx = conn.transaction()?;
        let mut count = 0usize;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO encounters (
                    age_bracket, time_in_hospital, n_lab_procedures, n_procedures,
                    n_medications, n_outpatient, n_inpatient, n_emergency,
                    medical_specialty, diag_1, diag_2, diag_3,
                    glucose_test, a1c_test, change, diabetes_med, readmitted
                 ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17)",
            )?;

            let mut rdr = csv::ReaderBuilder::new()
                .has_headers(true)
                .from_reader(csv_data.as_bytes());

            for result in rdr.deserialize::<Encounter>() {
                let e = result?;
                stmt.execute(params![
                    e.age_bracket,
                    e.time_in_hospital,
                    e.n_lab_procedures,
                    e.n_procedures,
                    e.n_medications,
                    e.n_outpatient,
                    e.n_inpatient,
                    e.n_emergency,
                    e.medical_specialty,
                    e.diag_1,
                    e.diag_2,
                    e.diag_3,
                    e.glucose_test,
                    e.a1c_test,
                    e.change,
                    e.diabetes_med,
                    e.readmitted,
                ])?;
                count += 1;
            }
        }
        tx.commit()?;

        log::info!("[HRD] loader: Loaded {} encounters", count);
        Ok(count)
    }
}
