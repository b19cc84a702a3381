//! Programme duration parsing.

use qualcat_model::DEFAULT_DURATION_YEARS;

/// Parse a free-text duration into whole years.
///
/// Takes the first run of ASCII digits regardless of the unit that follows,
/// so "18 months" yields 18. Missing text, text without digits, or a digit
/// run that does not fit in a `u32` yields [`DEFAULT_DURATION_YEARS`].
pub fn parse_duration_years(value: Option<&str>) -> u32 {
    value
        .and_then(first_digit_run)
        .and_then(|digits| digits.parse::<u32>().ok())
        .unwrap_or(DEFAULT_DURATION_YEARS)
}

fn first_digit_run(value: &str) -> Option<&str> {
    let start = value.find(|c: char| c.is_ascii_digit())?;
    let rest = &value[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    Some(&rest[..end])
}
