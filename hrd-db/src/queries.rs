//! Typed query methods backing each dashboard panel.
//!
//! Column names are interpolated from [`Field::column`], which only yields
//! names from the fixed schema. User-supplied values (age brackets) are
//! always bound as parameters.

use crate::models::{DiagnosisBox, GroupMean, HistogramBin, ScatterPoint, SummaryMetrics, ValueCount};
use crate::Database;
use hrd_core::{AgeFilter, Field, Readmitted};
use hrd_data::histogram::bin_counts;
use hrd_data::quantiles::BoxStats;
use hrd_data::rounding::{percentage, round2};
use rusqlite::params;

impl Database {
    /// Total number of encounters.
    pub fn query_row_count(&self) -> anyhow::Result<i64> {
        let conn = self.conn.borrow();
        let count = conn.query_row("SELECT COUNT(*) FROM encounters", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Number of encounters passing the age filter.
    pub fn query_filtered_count(&self, age: &AgeFilter) -> anyhow::Result<i64> {
        let conn = self.conn.borrow();
        let count = conn.query_row(
            "SELECT COUNT(*) FROM encounters WHERE (?1 IS NULL OR age_bracket = ?1)",
            params![age.bracket()],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    // ───────────────────── Summary Metrics ─────────────────────

    /// Compute the six headline tiles over the full table.
    pub fn query_summary(&self) -> anyhow::Result<SummaryMetrics> {
        let conn = self.conn.borrow();
        let (total, avg_stay, readmitted_yes, avg_procedures, avg_lab_tests, avg_medications) = conn
            .query_row(
                "SELECT COUNT(*),
                        AVG(time_in_hospital),
                        SUM(CASE WHEN readmitted = ?1 THEN 1 ELSE 0 END),
                        AVG(n_procedures),
                        AVG(n_lab_procedures),
                        AVG(n_medications)
                 FROM encounters",
                [Readmitted::Yes.as_str()],
                |row| {
                    Ok((
                        row.get::<_, i64>(0)?,
                        row.get::<_, Option<f64>>(1)?,
                        row.get::<_, Option<i64>>(2)?,
                        row.get::<_, Option<f64>>(3)?,
                        row.get::<_, Option<f64>>(4)?,
                        row.get::<_, Option<f64>>(5)?,
                    ))
                },
            )?;

        let metrics = SummaryMetrics {
            total_patients: total,
            avg_stay: avg_stay.map(round2),
            readmission_rate: percentage(readmitted_yes.unwrap_or(0) as u64, total as u64),
            avg_procedures: avg_procedures.map(round2),
            avg_lab_tests: avg_lab_tests.map(round2),
            avg_medications: avg_medications.map(round2),
        };
        log::info!("[HRD] query: query_summary over {} encounters", total);
        Ok(metrics)
    }

    // ───────────────────── Distribution Panel ─────────────────────

    /// Distinct age brackets, sorted, for the age dropdown.
    pub fn query_age_brackets(&self) -> anyhow::Result<Vec<String>> {
        let conn = self.conn.borrow();
        let mut stmt =
            conn.prepare("SELECT DISTINCT age_bracket FROM encounters ORDER BY age_bracket")?;
        let rows = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(rows)
    }

    /// Count rows per distinct value of `field` after applying the age filter.
    ///
    /// Numeric columns come back in numeric order, categorical ones in order
    /// of first appearance within the filtered rows. An empty subset yields
    /// an empty vec.
    pub fn query_value_counts(
        &self,
        field: Field,
        age: &AgeFilter,
    ) -> anyhow::Result<Vec<ValueCount>> {
        let conn = self.conn.borrow();
        let column = field.column();
        let order = if field.is_numeric() { column } else { "MIN(id)" };
        let sql = format!(
            "SELECT CAST({column} AS TEXT), COUNT(*)
             FROM encounters
             WHERE (?1 IS NULL OR age_bracket = ?1)
             GROUP BY {column}
             ORDER BY {order}"
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map(params![age.bracket()], |row| {
                Ok(ValueCount {
                    value: row.get(0)?,
                    count: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[HRD] query: query_value_counts({}, {}) returned {} values",
            column,
            age.label(),
            rows.len()
        );
        Ok(rows)
    }

    /// Histogram bins for a numeric field after applying the age filter.
    pub fn query_histogram(
        &self,
        field: Field,
        age: &AgeFilter,
        max_bins: usize,
    ) -> anyhow::Result<Vec<HistogramBin>> {
        anyhow::ensure!(field.is_numeric(), "{} is not a numeric field", field.label());
        let conn = self.conn.borrow();
        let column = field.column();
        let sql = format!(
            "SELECT {column}, COUNT(*)
             FROM encounters
             WHERE (?1 IS NULL OR age_bracket = ?1)
             GROUP BY {column}
             ORDER BY {column}"
        );
        let mut stmt = conn.prepare(&sql)?;
        let counts = stmt
            .query_map(params![age.bracket()], |row| {
                Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)? as u64))
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(bin_counts(&counts, max_bins))
    }

    // ───────────────────── Length of Stay Panels ─────────────────────

    /// Every encounter as (selected count, time in hospital, readmitted).
    pub fn query_stay_scatter(&self, factor: Field) -> anyhow::Result<Vec<ScatterPoint>> {
        anyhow::ensure!(factor.is_numeric(), "{} is not a numeric field", factor.label());
        let conn = self.conn.borrow();
        let sql = format!(
            "SELECT {}, time_in_hospital, readmitted FROM encounters ORDER BY id",
            factor.column()
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map([], |row| {
                Ok(ScatterPoint {
                    x: row.get(0)?,
                    y: row.get(1)?,
                    readmitted: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[HRD] query: query_stay_scatter({}) returned {} points",
            factor.column(),
            rows.len()
        );
        Ok(rows)
    }

    /// Box summaries of `time_in_hospital` per (diag_1, readmitted) group.
    ///
    /// Groups are returned in order of first appearance in the table, which
    /// is the category order the chart uses on both axes.
    pub fn query_stay_by_diagnosis(&self) -> anyhow::Result<Vec<DiagnosisBox>> {
        let conn = self.conn.borrow();
        let mut stmt =
            conn.prepare("SELECT diag_1, readmitted, time_in_hospital FROM encounters ORDER BY id")?;
        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, i64>(2)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let mut groups: Vec<(String, String, Vec<f64>)> = Vec::new();
        for (diagnosis, readmitted, stay) in rows {
            match groups
                .iter_mut()
                .find(|(d, r, _)| *d == diagnosis && *r == readmitted)
            {
                Some((_, _, values)) => values.push(stay as f64),
                None => groups.push((diagnosis, readmitted, vec![stay as f64])),
            }
        }

        let boxes: Vec<DiagnosisBox> = groups
            .into_iter()
            .filter_map(|(diagnosis, readmitted, values)| {
                BoxStats::from_values(values).map(|stats| DiagnosisBox {
                    diagnosis,
                    readmitted,
                    stats,
                })
            })
            .collect();
        log::info!(
            "[HRD] query: query_stay_by_diagnosis returned {} groups",
            boxes.len()
        );
        Ok(boxes)
    }

    // ───────────────────── Interventions Panel ─────────────────────

    /// Mean of `field` per (age bracket, readmitted) group.
    ///
    /// Groups without rows never appear; there is no zero-filling.
    pub fn query_intervention_means(&self, field: Field) -> anyhow::Result<Vec<GroupMean>> {
        anyhow::ensure!(field.is_numeric(), "{} is not a numeric field", field.label());
        let conn = self.conn.borrow();
        let sql = format!(
            "SELECT age_bracket, readmitted, AVG({}), COUNT(*)
             FROM encounters
             GROUP BY age_bracket, readmitted
             ORDER BY age_bracket, readmitted",
            field.column()
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map([], |row| {
                Ok(GroupMean {
                    age_bracket: row.get(0)?,
                    readmitted: row.get(1)?,
                    mean: row.get(2)?,
                    count: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[HRD] query: query_intervention_means({}) returned {} groups",
            field.column(),
            rows.len()
        );
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_fixtures::{four_rows, HEADER};
    use crate::Database;
    use hrd_core::{AgeFilter, Field, DISTRIBUTION_FIELDS, INTERVENTION_FIELDS};

    fn sample_db() -> Database {
        Database::from_csv(&four_rows()).unwrap()
    }

    fn row(age: &str, stay: i64, readmitted: &str) -> String {
        format!("{age},{stay},10,1,5,0,0,0,Other,Circulatory,Other,Other,no,no,no,yes,{readmitted}")
    }

    fn db_from_rows(rows: &[String]) -> Database {
        let csv = format!("{HEADER}\n{}\n", rows.join("\n"));
        Database::from_csv(&csv).unwrap()
    }

    // ───────────────────── Summary ─────────────────────

    #[test]
    fn summary_end_to_end_scenario() {
        let summary = sample_db().query_summary().unwrap();
        assert_eq!(summary.total_patients, 4);
        assert_eq!(summary.avg_stay, Some(3.0));
        assert_eq!(summary.readmission_rate, Some(75.0));
        assert_eq!(summary.avg_procedures, Some(1.5));
        assert_eq!(summary.avg_lab_tests, Some(45.0));
        assert_eq!(summary.avg_medications, Some(13.0));
    }

    #[test]
    fn summary_is_deterministic_across_reloads() {
        let a = Database::from_csv(&four_rows()).unwrap().query_summary().unwrap();
        let b = Database::from_csv(&four_rows()).unwrap().query_summary().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn average_stay_rounds_half_to_even() {
        // 9 days over 8 stays = 1.125
        let mut rows = vec![row("[60-70)", 2, "no")];
        rows.extend((0..7).map(|_| row("[60-70)", 1, "no")));
        let db = db_from_rows(&rows);
        assert_eq!(db.query_summary().unwrap().avg_stay, Some(1.12));
    }

    #[test]
    fn readmission_rate_boundaries() {
        let all_yes = db_from_rows(&[row("[60-70)", 1, "yes"), row("[60-70)", 2, "yes")]);
        assert_eq!(all_yes.query_summary().unwrap().readmission_rate, Some(100.0));

        let none = db_from_rows(&[row("[60-70)", 1, "no"), row("[60-70)", 2, "no")]);
        assert_eq!(none.query_summary().unwrap().readmission_rate, Some(0.0));

        let third = db_from_rows(&[
            row("[60-70)", 1, "yes"),
            row("[60-70)", 2, "no"),
            row("[60-70)", 4, "no"),
        ]);
        let summary = third.query_summary().unwrap();
        assert_eq!(summary.readmission_rate, Some(33.33));
        assert_eq!(summary.avg_stay, Some(2.33));
    }

    #[test]
    fn summary_of_empty_table_is_undefined() {
        let db = Database::from_csv(&format!("{HEADER}\n")).unwrap();
        let summary = db.query_summary().unwrap();
        assert_eq!(summary.total_patients, 0);
        assert_eq!(summary.avg_stay, None);
        assert_eq!(summary.readmission_rate, None);
        assert_eq!(summary.avg_medications, None);
    }

    // ───────────────────── Distribution ─────────────────────

    #[test]
    fn age_brackets_are_sorted_and_distinct() {
        let brackets = sample_db().query_age_brackets().unwrap();
        assert_eq!(brackets, vec!["[50-60)", "[70-80)"]);
    }

    #[test]
    fn filtered_count_matches_rows_in_bracket() {
        let db = sample_db();
        for bracket in db.query_age_brackets().unwrap() {
            let filter = AgeFilter::Bracket(bracket.clone());
            let counted: i64 = db
                .query_value_counts(Field::Readmitted, &filter)
                .unwrap()
                .iter()
                .map(|v| v.count)
                .sum();
            assert_eq!(counted, 2, "bracket {bracket}");
            assert_eq!(db.query_filtered_count(&filter).unwrap(), 2);
        }
    }

    #[test]
    fn all_ages_equals_no_filter() {
        let db = sample_db();
        for field in DISTRIBUTION_FIELDS {
            let all = db.query_value_counts(field, &AgeFilter::All).unwrap();
            let total: i64 = all.iter().map(|v| v.count).sum();
            assert_eq!(total, db.query_row_count().unwrap(), "{}", field.label());
        }
        assert_eq!(
            db.query_value_counts(Field::PrimaryDiagnosis, &AgeFilter::from_selection("All ages"))
                .unwrap(),
            db.query_value_counts(Field::PrimaryDiagnosis, &AgeFilter::default())
                .unwrap()
        );
    }

    #[test]
    fn categorical_value_counts_with_filter() {
        let db = sample_db();
        let all = db
            .query_value_counts(Field::PrimaryDiagnosis, &AgeFilter::All)
            .unwrap();
        let pairs: Vec<(&str, i64)> = all.iter().map(|v| (v.value.as_str(), v.count)).collect();
        assert_eq!(pairs, vec![("Circulatory", 2), ("Respiratory", 1), ("Diabetes", 1)]);

        let seventies = db
            .query_value_counts(Field::PrimaryDiagnosis, &AgeFilter::Bracket("[70-80)".into()))
            .unwrap();
        let pairs: Vec<(&str, i64)> = seventies.iter().map(|v| (v.value.as_str(), v.count)).collect();
        assert_eq!(pairs, vec![("Circulatory", 1), ("Respiratory", 1)]);
    }

    #[test]
    fn categorical_order_follows_filtered_rows() {
        let db = sample_db();
        let fifties = db
            .query_value_counts(Field::PrimaryDiagnosis, &AgeFilter::Bracket("[50-60)".into()))
            .unwrap();
        let values: Vec<&str> = fifties.iter().map(|v| v.value.as_str()).collect();
        assert_eq!(values, vec!["Circulatory", "Diabetes"]);

        let readmitted = db.query_value_counts(Field::Readmitted, &AgeFilter::All).unwrap();
        let values: Vec<&str> = readmitted.iter().map(|v| v.value.as_str()).collect();
        assert_eq!(values, vec!["yes", "no"], "first row is readmitted");
    }

    #[test]
    fn numeric_value_counts_sort_numerically() {
        let db = db_from_rows(&[
            row("[60-70)", 10, "no"),
            row("[60-70)", 9, "no"),
            row("[60-70)", 2, "yes"),
        ]);
        let counts = db
            .query_value_counts(Field::TimeInHospital, &AgeFilter::All)
            .unwrap();
        let values: Vec<&str> = counts.iter().map(|v| v.value.as_str()).collect();
        assert_eq!(values, vec!["2", "9", "10"]);
    }

    #[test]
    fn unknown_bracket_yields_empty_subset() {
        let db = sample_db();
        let filter = AgeFilter::Bracket("[90-100)".into());
        assert!(db.query_value_counts(Field::TimeInHospital, &filter).unwrap().is_empty());
        assert!(db.query_histogram(Field::TimeInHospital, &filter, 40).unwrap().is_empty());
        assert_eq!(db.query_filtered_count(&filter).unwrap(), 0);
    }

    #[test]
    fn histogram_bins_time_in_hospital() {
        let bins = sample_db()
            .query_histogram(Field::TimeInHospital, &AgeFilter::All, 40)
            .unwrap();
        let counts: Vec<(i64, u64)> = bins.iter().map(|b| (b.lower, b.count)).collect();
        assert_eq!(counts, vec![(2, 2), (3, 1), (4, 0), (5, 1)]);
    }

    #[test]
    fn histogram_rejects_categorical_fields() {
        assert!(sample_db()
            .query_histogram(Field::MedicalSpecialty, &AgeFilter::All, 40)
            .is_err());
    }

    // ───────────────────── Length of stay ─────────────────────

    #[test]
    fn stay_scatter_covers_every_row() {
        let points = sample_db().query_stay_scatter(Field::Procedures).unwrap();
        let xy: Vec<(i64, i64)> = points.iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(xy, vec![(1, 5), (2, 3), (0, 2), (3, 2)]);
        assert_eq!(points[1].readmitted, "no");
    }

    #[test]
    fn stay_by_diagnosis_groups_in_first_appearance_order() {
        let boxes = sample_db().query_stay_by_diagnosis().unwrap();
        let keys: Vec<(&str, &str)> = boxes
            .iter()
            .map(|b| (b.diagnosis.as_str(), b.readmitted.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![("Circulatory", "yes"), ("Respiratory", "no"), ("Diabetes", "yes")]
        );
        let circulatory = &boxes[0].stats;
        assert_eq!(circulatory.count, 2);
        assert_eq!(circulatory.median, 3.5);
        assert_eq!(circulatory.min, 2.0);
        assert_eq!(circulatory.max, 5.0);
    }

    // ───────────────────── Interventions ─────────────────────

    #[test]
    fn intervention_means_omit_empty_groups() {
        let means = sample_db()
            .query_intervention_means(Field::LabProcedures)
            .unwrap();
        let got: Vec<(&str, &str, f64)> = means
            .iter()
            .map(|m| (m.age_bracket.as_str(), m.readmitted.as_str(), m.mean))
            .collect();
        // ([50-60), no) has no rows and must not appear as zero.
        assert_eq!(
            got,
            vec![
                ("[50-60)", "yes", 45.0),
                ("[70-80)", "no", 50.0),
                ("[70-80)", "yes", 40.0),
            ]
        );
        assert_eq!(means[0].count, 2);
    }

    #[test]
    fn intervention_means_two_by_two() {
        let db = db_from_rows(&[
            row("[40-50)", 1, "yes"),
            row("[40-50)", 1, "no"),
            row("[80-90)", 1, "yes"),
            row("[80-90)", 1, "no"),
        ]);
        for field in INTERVENTION_FIELDS {
            assert_eq!(db.query_intervention_means(field).unwrap().len(), 4);
        }
    }

    #[test]
    fn intervention_means_reject_categorical() {
        assert!(sample_db()
            .query_intervention_means(Field::Readmitted)
            .is_err());
    }
}
