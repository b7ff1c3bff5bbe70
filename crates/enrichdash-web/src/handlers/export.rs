//! CSV export handlers.
//!
//! Provider exports go back through the memoized clients, so a download
//! right after a run is a cache hit, not a second network call.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::state::SharedState;
use enrichdash_common::{DataTable, GeneList};
use enrichdash_providers::Provider;

#[derive(Deserialize)]
pub struct ExportParams {
    #[serde(default)]
    pub genes: String,
}

/// GET /export/{provider}?genes=A,B,C
pub async fn export_provider(
    State(state): State<SharedState>,
    Path(provider): Path<String>,
    Query(params): Query<ExportParams>,
) -> Response {
    let genes = GeneList::parse(&params.genes);
    let outcome = match provider.as_str() {
        "gprofiler" => state.gprofiler.fetch(&genes).await,
        "enrichr" => state.enrichr.fetch(&genes).await,
        "webgestalt" => state.webgestalt.fetch(&genes).await,
        _ => return (StatusCode::NOT_FOUND, "unknown provider").into_response(),
    };

    // A failed provider downloads as an empty table; the page already
    // surfaced the error inline.
    let csv = outcome
        .table()
        .map(DataTable::to_csv)
        .unwrap_or_default();
    csv_response(export_filename(&provider), csv)
}

/// GET /export/matrix
pub async fn export_matrix(State(state): State<SharedState>) -> Response {
    let csv = state.matrix.read().await.to_table().to_csv();
    csv_response("tool_evaluation.csv", csv)
}

fn export_filename(provider: &str) -> &'static str {
    match provider {
        "gprofiler" => "gprofiler.csv",
        "enrichr" => "enrichr.csv",
        "webgestalt" => "webgestalt_mapped.csv",
        _ => "export.csv",
    }
}

fn csv_response(filename: &str, csv: String) -> Response {
    (
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        csv,
    )
        .into_response()
}
