//! Serde mirror of the visual editor's JSON document format.

pub mod types;

pub use types::*;
