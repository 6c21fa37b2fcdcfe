//! Subcommands of the `jdx` CLI.

pub mod batch;
pub mod config;
pub mod extract;

use jdx_core::JobFields;

/// Output columns for one set of extracted fields.
pub const FIELD_COLUMNS: [&str; 5] = [
    "years_experience",
    "salary_usd",
    "skills",
    "level",
    "languages",
];

/// Separator between skills inside a single CSV cell.
pub const SKILL_SEPARATOR: &str = ";";

/// Render extracted fields as CSV cells, in `FIELD_COLUMNS` order.
pub fn field_cells(fields: &JobFields) -> [String; 5] {
    [
        fields
            .years_experience
            .map(|years| years.to_string())
            .unwrap_or_default(),
        fields
            .salary_usd
            .map(|usd| usd.to_string())
            .unwrap_or_default(),
        fields.skills.join(SKILL_SEPARATOR),
        fields.level.to_string(),
        fields.languages.clone(),
    ]
}
