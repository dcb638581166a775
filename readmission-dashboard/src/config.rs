//! Compile-time page configuration.

pub const PAGE_TITLE: &str = "Hospital Readmission Dashboard";

/// Hospital emoji favicon as an inline SVG data URI.
pub const PAGE_ICON_HREF: &str = "data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>🏥</text></svg>";

/// Element the Dioxus app mounts into; `main` is the id the default dx page provides.
pub const ROOT_NAME: &str = "main";

pub const D3_SCRIPT_URL: &str = "https://d3js.org/d3.v7.min.js";

/// Upper bound on histogram bars for numeric variables.
pub const HISTOGRAM_MAX_BINS: usize = 40;

/// Cleaned encounter table, embedded by `build.rs`.
pub const ENCOUNTERS_CSV: &str =
    include_str!(concat!(env!("OUT_DIR"), "/hospital_readmission_clean.csv"));
