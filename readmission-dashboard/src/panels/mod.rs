//! The metrics row and the four chart panels.
//!
//! Every panel is a pure function of the cached table and its current
//! selections: it reads them from `AppState`, queries, and hands the payload
//! to the D3 bridge. Empty subsets render as empty charts.

mod diagnosis;
mod distribution;
mod interventions;
mod length_of_stay;
mod summary;

pub use diagnosis::DiagnosisPanel;
pub use distribution::DistributionPanel;
pub use interventions::InterventionsPanel;
pub use length_of_stay::LengthOfStayPanel;
pub use summary::SummaryRow;

#[cfg(test)]
mod tests {
    const SOURCES: [(&str, &str); 7] = [
        ("main.rs", include_str!("../main.rs")),
        ("summary.rs", include_str!("summary.rs")),
        ("distribution.rs", include_str!("distribution.rs")),
        ("length_of_stay.rs", include_str!("length_of_stay.rs")),
        ("diagnosis.rs", include_str!("diagnosis.rs")),
        ("interventions.rs", include_str!("interventions.rs")),
        ("mod.rs", include_str!("mod.rs")),
    ];

    #[test]
    fn log_lines_carry_the_hrd_prefix() {
        for (file, source) in SOURCES {
            for line in source.lines().filter(|l| l.trim_start().starts_with("log::")) {
                assert!(line.contains("(\"[HRD] "), "{file}: {}", line.trim());
            }
        }
    }
}
