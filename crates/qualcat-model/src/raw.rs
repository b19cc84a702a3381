//! Source catalogue records as they appear in the JSON input.
//!
//! Optional fields are decoded leniently: a value of the wrong shape becomes
//! `None` (or an empty list) instead of failing the whole parse, so the
//! transformer can apply its documented defaults.

use serde::{Deserialize, Deserializer};

/// One qualification object from the source catalogue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawQualification {
    #[serde(rename = "Title", default, deserialize_with = "lenient_text")]
    pub title: Option<String>,

    #[serde(rename = "NQF_Level", default, deserialize_with = "lenient_u32")]
    pub nqf_level: Option<u32>,

    /// Free-text duration such as "3 Years" or "18 months".
    #[serde(rename = "Duration", default, deserialize_with = "lenient_text")]
    pub duration: Option<String>,

    #[serde(rename = "Credits", default, deserialize_with = "lenient_u32")]
    pub credits: Option<u32>,

    #[serde(rename = "SAQA_ID", default, deserialize_with = "lenient_text")]
    pub saqa_id: Option<String>,

    #[serde(
        rename = "AcademicProgrammeManager",
        default,
        deserialize_with = "lenient_text"
    )]
    pub programme_manager: Option<String>,

    #[serde(rename = "CareerPaths", default, deserialize_with = "lenient_text_list")]
    pub career_paths: Vec<String>,

    #[serde(rename = "ShortDescription", default, deserialize_with = "lenient_text")]
    pub short_description: Option<String>,

    #[serde(rename = "About", default, deserialize_with = "lenient_text")]
    pub about: Option<String>,

    #[serde(rename = "ProgrammeURL", default, deserialize_with = "lenient_text")]
    pub programme_url: Option<String>,

    #[serde(
        rename = "SAQA_QualificationURL",
        default,
        deserialize_with = "lenient_text"
    )]
    pub saqa_url: Option<String>,
}

impl RawQualification {
    /// Create a record with only a title and NQF level set.
    pub fn new(title: impl Into<String>, nqf_level: Option<u32>) -> Self {
        Self {
            title: Some(title.into()),
            nqf_level,
            ..Self::default()
        }
    }
}

/// Any JSON scalar or structure, with the shapes we care about broken out.
#[derive(Deserialize)]
#[serde(untagged)]
enum LooseValue {
    Integer(i64),
    Float(f64),
    Text(String),
    List(Vec<LooseValue>),
    Other(serde::de::IgnoredAny),
}

impl LooseValue {
    fn into_text(self) -> Option<String> {
        match self {
            LooseValue::Text(text) => Some(text),
            LooseValue::Integer(number) => Some(number.to_string()),
            LooseValue::Float(number) => Some(number.to_string()),
            LooseValue::List(_) | LooseValue::Other(_) => None,
        }
    }

    fn into_integer(self) -> Option<i64> {
        match self {
            LooseValue::Integer(number) => Some(number),
            LooseValue::Float(number) if number.fract() == 0.0 && number.is_finite() => {
                // Whole-number floats such as `7.0` only; range checked by the caller.
                if number >= i64::MIN as f64 && number <= i64::MAX as f64 {
                    Some(number as i64)
                } else {
                    None
                }
            }
            LooseValue::Text(text) => text.trim().parse::<i64>().ok(),
            _ => None,
        }
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(LooseValue::deserialize(deserializer)?.into_text())
}

fn lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = LooseValue::deserialize(deserializer)?;
    Ok(value.into_integer().and_then(|n| u32::try_from(n).ok()))
}

fn lenient_text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match LooseValue::deserialize(deserializer)? {
        LooseValue::List(items) => Ok(items
            .into_iter()
            .filter_map(|item| match item {
                LooseValue::Text(text) => Some(text),
                _ => None,
            })
            .collect()),
        _ => Ok(Vec::new()),
    }
}
