//! HTTP handlers for all web routes.

pub mod analysis;
pub mod dashboard;
pub mod export;
pub mod matrix;
