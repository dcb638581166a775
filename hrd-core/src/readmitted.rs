//! Readmission outcome values as they appear in the `readmitted` column.

/// Binary readmission outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readmitted {
    Yes,
    No,
}

impl Readmitted {
    pub fn as_str(self) -> &'static str {
        match self {
            Readmitted::Yes => "yes",
            Readmitted::No => "no",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "yes" => Some(Readmitted::Yes),
            "no" => Some(Readmitted::No),
            _ => None,
        }
    }
}
