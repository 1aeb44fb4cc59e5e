//! Filename template resolution.
//!
//! A template like `{Last Name}-{First and Middle Name}` is resolved once
//! per table row: column placeholders become cell values, `{index}` becomes
//! the row number, and collisions are settled with numeric suffixes so one
//! generation pass never produces two files with the same name.

#![deny(unsafe_code)]

pub mod registry;
pub mod resolver;

pub use registry::FilenameRegistry;
pub use resolver::{FilenameResolver, INDEX_PLACEHOLDER};
