//! Generated module output for qualification catalogues.
//!
//! - **TypeScript**: typed declarations, the embedded record array and query helpers
//! - **Writing**: atomic replacement of the output file

mod error;
mod typescript;
mod write;

pub use error::{ReportError, Result};
pub use typescript::{
    ModuleOptions, NQF_LEVELS, render_declarations, render_header, render_module,
};
pub use write::write_module;
