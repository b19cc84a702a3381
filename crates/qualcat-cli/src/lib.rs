//! CLI library components for the qualification catalogue generator.

pub mod logging;
pub mod pipeline;
