//! Dashboard handler — the single-page gene input form, analysis results,
//! and evaluation matrix.

use axum::{extract::State, response::Html};
use chrono::Utc;

use crate::handlers::matrix::render_matrix_section;
use crate::state::SharedState;
use enrichdash_common::EvaluationMatrix;

/// Pre-filled example gene list shown in the input form.
pub const DEFAULT_GENES: &str = "FSHR, LHCGR, CYP19A1, ESR1, INHBA";

pub async fn dashboard(State(state): State<SharedState>) -> Html<String> {
    let matrix = state.matrix.read().await;
    Html(render_dashboard(DEFAULT_GENES, None, &matrix))
}

/// Minimal HTML escaping for user-echoed text and table cells.
pub fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

pub fn nav_html() -> String {
    r#"<nav class="navbar">
    <a href="/" class="brand">Gene Set Enrichment Tools Dashboard</a>
    <div class="nav-links">
        <a href="/">Dashboard</a>
        <a href="/export/matrix">Download Evaluation Scores</a>
    </div>
</nav>"#
        .to_string()
}

/// Render the full dashboard page.
///
/// `results_html` is present after a run; the evaluation matrix section is
/// always visible and has no data dependency on the providers.
pub fn render_dashboard(
    genes_input: &str,
    results_html: Option<String>,
    matrix: &EvaluationMatrix,
) -> String {
    let today = Utc::now().format("%A, %B %d, %Y");
    let results = results_html.unwrap_or_default();
    let matrix_html = render_matrix_section(matrix);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Gene Set Enrichment Tools Dashboard</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
{nav}
<main class="main-content">
    <p class="text-muted">Today: {today}</p>
    <div class="card info-card">
        <p>This platform integrates genomic enrichment tools to understand and evaluate
        their performance. It uses tools such as gProfiler, Enrichr, Metascape,
        WebGestalt, DAVID and ClusterProfiler, emphasizing user-friendly interfaces
        and transparent data sources.</p>
    </div>

    <div class="card">
        <div class="card-header">Input Genes</div>
        <form method="POST" action="/run">
            <label class="form-label">Enter gene symbols (comma-separated):</label>
            <textarea name="genes" class="form-control" rows="3">{genes}</textarea>
            <button type="submit" class="btn btn-primary mt-2">Run Analysis</button>
        </form>
    </div>

    {results}

    <hr>
    {matrix}
</main>
</body>
</html>"#,
        nav = nav_html(),
        today = today,
        genes = escape(genes_input),
        results = results,
        matrix = matrix_html,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("a<b>&\"c\""), "a&lt;b&gt;&amp;&quot;c&quot;");
    }

    #[test]
    fn test_dashboard_contains_form_and_matrix() {
        let page = render_dashboard(DEFAULT_GENES, None, &EvaluationMatrix::default());
        assert!(page.contains(r#"action="/run""#));
        assert!(page.contains("FSHR, LHCGR, CYP19A1, ESR1, INHBA"));
        assert!(page.contains("Tool Performance Evaluation"));
    }
}
