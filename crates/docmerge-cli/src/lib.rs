//! CLI library components for docmerge.

pub mod input;
pub mod logging;
