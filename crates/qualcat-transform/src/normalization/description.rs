//! Description derivation from short and long narrative fields.

/// Maximum characters kept from the long narrative before truncating.
pub const DESCRIPTION_MAX_CHARS: usize = 200;

const ELLIPSIS: &str = "...";

/// Derive a description.
///
/// A non-empty short description is used verbatim. Otherwise the long
/// narrative is used, cut to [`DESCRIPTION_MAX_CHARS`] characters with an
/// ellipsis appended when anything was cut. With neither, the result is empty.
pub fn derive_description(short_description: Option<&str>, about: Option<&str>) -> String {
    if let Some(short) = short_description.filter(|s| !s.is_empty()) {
        return short.to_string();
    }
    match about {
        Some(about) => truncate_with_ellipsis(about, DESCRIPTION_MAX_CHARS),
        None => String::new(),
    }
}

/// Truncate to `max_chars` Unicode scalar values, appending "..." if cut.
pub fn truncate_with_ellipsis(value: &str, max_chars: usize) -> String {
    match value.char_indices().nth(max_chars) {
        Some((byte_index, _)) => format!("{}{ELLIPSIS}", &value[..byte_index]),
        None => value.to_string(),
    }
}
