//! A single hospital encounter.

use serde::{Deserialize, Serialize};

/// One hospitalization record, as stored in the cleaned CSV.
///
/// Header names match the source file; `age` is exposed as `age_bracket`
/// because the column holds decade bands such as `[70-80)`, not ages.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Encounter {
    #[serde(rename = "age")]
    pub age_bracket: String,
    /// Length of stay in days.
    pub time_in_hospital: i64,
    pub n_lab_procedures: i64,
    pub n_procedures: i64,
    pub n_medications: i64,
    pub n_outpatient: i64,
    pub n_inpatient: i64,
    pub n_emergency: i64,
    pub medical_specialty: String,
    pub diag_1: String,
    pub diag_2: String,
    pub diag_3: String,
    pub glucose_test: String,
    #[serde(rename = "A1Ctest")]
    pub a1c_test: String,
    pub change: String,
    pub diabetes_med: String,
    pub readmitted: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
age,time_in_hospital,n_lab_procedures,n_procedures,n_medications,n_outpatient,n_inpatient,n_emergency,medical_specialty,diag_1,diag_2,diag_3,glucose_test,A1Ctest,change,diabetes_med,readmitted
[70-80),8,72,1,18,2,0,0,Missing,Circulatory,Respiratory,Other,no,no,no,yes,no
";

    #[test]
    fn deserializes_from_source_headers() {
        let mut rdr = csv::Reader::from_reader(SAMPLE.as_bytes());
        let rows: Vec<Encounter> = rdr.deserialize().collect::<Result<_, _>>().unwrap();
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.age_bracket, "[70-80)");
        assert_eq!(row.time_in_hospital, 8);
        assert_eq!(row.n_lab_procedures, 72);
        assert_eq!(row.a1c_test, "no");
        assert_eq!(row.readmitted, "no");
    }

    #[test]
    fn rejects_non_integer_counts() {
        let bad = SAMPLE.replace(",72,", ",seventy,");
        let mut rdr = csv::Reader::from_reader(bad.as_bytes());
        let result: Result<Vec<Encounter>, _> = rdr.deserialize().collect();
        assert!(result.is_err());
    }
}
