//! Core definitions (errors and validation helpers), relied upon by the stride-* crates.

pub mod error;
pub mod result;

pub use result::Result;
