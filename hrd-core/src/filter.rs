//! Dropdown selections for the distribution panel.

use serde::Serialize;

/// Sentinel option meaning "do not filter by age".
pub const ALL_AGES_LABEL: &str = "All ages";

/// Age bracket filter applied before counting values.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub enum AgeFilter {
    #[default]
    All,
    Bracket(String),
}

impl AgeFilter {
    /// Parse a dropdown value; the sentinel label maps to [`AgeFilter::All`].
    pub fn from_selection(value: &str) -> Self {
        if value == ALL_AGES_LABEL {
            AgeFilter::All
        } else {
            AgeFilter::Bracket(value.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            AgeFilter::All => ALL_AGES_LABEL,
            AgeFilter::Bracket(bracket) => bracket,
        }
    }

    /// The bracket to match, or `None` when every row passes.
    pub fn bracket(&self) -> Option<&str> {
        match self {
            AgeFilter::All => None,
            AgeFilter::Bracket(bracket) => Some(bracket),
        }
    }
}

/// How the distribution panel draws the selected variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ChartKind {
    #[default]
    Histogram,
    Pie,
}

impl ChartKind {
    pub const ALL: [ChartKind; 2] = [ChartKind::Histogram, ChartKind::Pie];

    pub fn label(self) -> &'static str {
        match self {
            ChartKind::Histogram => "Histogram",
            ChartKind::Pie => "Pie",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.label() == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_ages_sentinel_disables_filter() {
        let filter = AgeFilter::from_selection("All ages");
        assert_eq!(filter, AgeFilter::All);
        assert_eq!(filter.bracket(), None);
        assert_eq!(filter.label(), ALL_AGES_LABEL);
    }

    #[test]
    fn bracket_selection_keeps_value() {
        let filter = AgeFilter::from_selection("[50-60)");
        assert_eq!(filter.bracket(), Some("[50-60)"));
        assert_eq!(filter.label(), "[50-60)");
    }

    #[test]
    fn chart_kind_labels() {
        assert_eq!(ChartKind::from_label("Pie"), Some(ChartKind::Pie));
        assert_eq!(ChartKind::from_label("Histogram"), Some(ChartKind::Histogram));
        assert_eq!(ChartKind::from_label("Donut"), None);
        assert_eq!(ChartKind::default(), ChartKind::Histogram);
    }
}
