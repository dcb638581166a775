//! Fixed chart colours.

/// Main series colour, also used for `readmitted == "yes"`.
pub const PRIMARY: &str = "rgb(143, 36, 62)";
/// Secondary series colour, used for `readmitted == "no"`.
pub const SECONDARY: &str = "rgb(64, 64, 64)";
/// Two-colour sequence assigned to groups in order of first appearance.
pub const SEQUENCE: [&str; 2] = [PRIMARY, SECONDARY];
/// Panel background.
pub const PANEL_BACKGROUND: &str = "#fdfdfd";
