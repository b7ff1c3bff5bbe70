//! enrichdash-web — Axum server for the enrichment tools dashboard.

pub mod handlers;
pub mod router;
pub mod state;
