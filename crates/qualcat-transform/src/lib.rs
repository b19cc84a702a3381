//! Qualification catalogue transformation.
//!
//! Turns source records into normalized qualifications. Every function here
//! is pure: the same record always produces the same output and records
//! never influence each other.
//!
//! # Example
//!
//! ```
//! use qualcat_model::{QualificationLevel, RawQualification};
//! use qualcat_transform::transform_catalogue;
//!
//! let records = vec![RawQualification::new("Master of Business Administration", Some(9))];
//! let catalogue = transform_catalogue(&records).unwrap();
//!
//! let mba = catalogue.by_id("MBA").unwrap();
//! assert_eq!(mba.level, QualificationLevel::MastersDegree);
//! ```

mod error;
mod identifier;
mod inference;
mod transformer;

pub mod normalization;

pub use error::{Result, TransformError};
pub use identifier::{PHRASE_ABBREVIATIONS, synthesize_id};
pub use inference::{
    DEFAULT_FACULTY, DEFAULT_LEVEL, FACULTY_RULES, classify_level, infer_faculty,
};
pub use transformer::{transform_catalogue, transform_record};
