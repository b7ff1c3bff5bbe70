//! Shared application state for the web server.

use std::sync::Arc;
use tokio::sync::RwLock;

use enrichdash_common::EvaluationMatrix;
use enrichdash_providers::enrichr::EnrichrClient;
use enrichdash_providers::gprofiler::GProfilerClient;
use enrichdash_providers::webgestalt::WebGestaltClient;

/// Shared state injected into every Axum handler.
///
/// Each provider client carries its own memo cache, so downloads after a run
/// are cache hits rather than fresh network calls. Matrix scores are
/// session-local, in memory only.
pub struct AppState {
    pub gprofiler: GProfilerClient,
    pub enrichr: EnrichrClient,
    pub webgestalt: WebGestaltClient,
    pub matrix: RwLock<EvaluationMatrix>,
}

impl AppState {
    pub fn new(matrix: EvaluationMatrix) -> Self {
        Self {
            gprofiler: GProfilerClient::new(),
            enrichr: EnrichrClient::new(),
            webgestalt: WebGestaltClient::new(),
            matrix: RwLock::new(matrix),
        }
    }
}

pub type SharedState = Arc<AppState>;
