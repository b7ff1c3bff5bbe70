//! enrichdash-common — Shared types, errors, and the sandboxed HTTP client
//! used across all Enrichdash crates.

pub mod error;
pub mod genes;
pub mod matrix;
pub mod sandbox;
pub mod table;

// Re-export commonly used types
pub use genes::GeneList;
pub use matrix::EvaluationMatrix;
pub use table::DataTable;
