//! Data model for the qualification catalogue generator.
//!
//! - [`RawQualification`]: a record as supplied by the source catalogue
//! - [`Qualification`]: the normalized record embedded in generated output
//! - [`Catalogue`]: read-only queries and summary counts over normalized records

pub mod catalogue;
pub mod enums;
pub mod qualification;
pub mod raw;

pub use catalogue::{Catalogue, CatalogueSummary};
pub use enums::{Faculty, QualificationLevel};
pub use qualification::{
    DEFAULT_DURATION_YEARS, DEFAULT_TOTAL_CREDITS, Qualification, SAQA_ID_PLACEHOLDER,
};
pub use raw::RawQualification;
