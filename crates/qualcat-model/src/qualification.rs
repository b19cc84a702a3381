use serde::{Deserialize, Serialize};

use crate::enums::{Faculty, QualificationLevel};

/// Accreditation identifier used when the source record has none.
pub const SAQA_ID_PLACEHOLDER: &str = "TBD";

/// Credit total used when the source record has none.
pub const DEFAULT_TOTAL_CREDITS: u32 = 120;

/// Duration used when the source text has no digits.
pub const DEFAULT_DURATION_YEARS: u32 = 1;

/// A normalized qualification, ready to be embedded in the generated module.
///
/// Field order here is the serialized field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Qualification {
    pub id: String,
    pub name: String,
    pub level: QualificationLevel,
    /// NQF level exactly as supplied by the source record.
    pub nqf_level: Option<u32>,
    pub saqa_id: String,
    pub total_credits: u32,
    pub duration_years: u32,
    pub faculty: Faculty,
    pub description: String,
    pub coordinator: Option<String>,
    pub career_outcomes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub programme_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saqa_url: Option<String>,
}

impl Qualification {
    /// Case-insensitive substring match over name, description and faculty.
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
            || self.faculty.as_str().to_lowercase().contains(&needle)
    }
}
