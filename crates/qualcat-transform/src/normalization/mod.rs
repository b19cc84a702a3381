//! Field normalization for qualification records.
//!
//! - **duration**: free-text duration to whole years
//! - **description**: short/long narrative selection and truncation

pub mod description;
pub mod duration;

pub use description::{DESCRIPTION_MAX_CHARS, derive_description, truncate_with_ellipsis};
pub use duration::parse_duration_years;
