//! Identifier synthesis from qualification titles.
//!
//! The identifier is a best-effort slug: degree phrases are abbreviated,
//! the connecting word "in" and whitespace become underscores, anything
//! outside `[A-Za-z0-9_]` is dropped, and the result is uppercased.
//! Distinct titles can collapse to the same identifier.

use std::sync::LazyLock;

use regex::Regex;

/// Ordered phrase substitutions, applied case-insensitively top to bottom.
pub const PHRASE_ABBREVIATIONS: &[(&str, &str)] = &[
    ("Bachelor of Commerce", "BCOM"),
    ("Bachelor of Business Administration", "BBA"),
    ("Bachelor of Public Administration", "BPA"),
    ("Bachelor of Education", "BED"),
    ("Master of Business Administration", "MBA"),
    ("Master of Public Administration", "MPA"),
    ("Master of Commerce", "MCOM"),
    ("Doctor of Business Administration", "DBA"),
    ("Postgraduate Diploma", "PGDIP"),
    ("Advanced Diploma", "ADIP"),
    ("Advanced Certificate", "ACERT"),
    ("Higher Certificate", "HC"),
    ("Honours", "HONS"),
];

static PHRASE_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    PHRASE_ABBREVIATIONS
        .iter()
        .map(|(phrase, abbreviation)| {
            let pattern = format!("(?i){}", regex::escape(phrase));
            (
                Regex::new(&pattern).expect("Invalid phrase regex"),
                *abbreviation,
            )
        })
        .collect()
});

static IN_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+in\s+").expect("Invalid separator regex"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

static NON_IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]").expect("Invalid identifier regex"));

/// Synthesize an identifier from a title.
///
/// # Example
///
/// ```
/// use qualcat_transform::synthesize_id;
///
/// assert_eq!(
///     synthesize_id("Bachelor of Business Administration in Project Management"),
///     "BBA_PROJECT_MANAGEMENT"
/// );
/// ```
pub fn synthesize_id(title: &str) -> String {
    let mut slug = abbreviate_phrases(title);
    slug = IN_SEPARATOR.replace_all(&slug, "_").into_owned();
    slug = WHITESPACE.replace_all(&slug, "_").into_owned();
    slug = NON_IDENTIFIER.replace_all(&slug, "").into_owned();
    slug.to_ascii_uppercase()
}

fn abbreviate_phrases(title: &str) -> String {
    PHRASE_PATTERNS
        .iter()
        .fold(title.to_string(), |text, (pattern, abbreviation)| {
            pattern.replace_all(&text, *abbreviation).into_owned()
        })
}
