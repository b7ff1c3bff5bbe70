//! Evaluation matrix section and score updates.

use axum::{extract::State, response::Redirect, Form};
use serde::Deserialize;
use tracing::debug;

use crate::handlers::dashboard::escape;
use crate::state::SharedState;
use enrichdash_common::EvaluationMatrix;

#[derive(Deserialize)]
pub struct ScoreForm {
    pub tool: String,
    pub criterion: usize,
    pub score: i64,
}

/// Update one cell of the matrix, then return to the dashboard.
///
/// Out-of-range scores are clamped; unknown tool/criterion pairs are ignored
/// since the matrix shape is fixed.
pub async fn score_submit(
    State(state): State<SharedState>,
    Form(form): Form<ScoreForm>,
) -> Redirect {
    let updated = state
        .matrix
        .write()
        .await
        .set_score(&form.tool, form.criterion, form.score);
    debug!(tool = %form.tool, criterion = form.criterion, score = form.score, updated, "score update");
    Redirect::to("/")
}

/// Render the always-visible evaluation section: one editable score cell per
/// tool per criterion, a derived total per tool, and the CSV download link.
pub fn render_matrix_section(matrix: &EvaluationMatrix) -> String {
    let header: String = std::iter::once("<th>Tool</th>".to_string())
        .chain(matrix.criteria.iter().map(|c| {
            format!(
                r#"<th title="{}">{}</th>"#,
                escape(&c.description),
                escape(&c.name)
            )
        }))
        .chain(std::iter::once("<th>Total Score</th>".to_string()))
        .collect();

    let rows: String = matrix
        .tools
        .iter()
        .map(|entry| {
            let cells: String = entry
                .scores
                .iter()
                .enumerate()
                .map(|(j, &score)| {
                    format!(
                        r#"<td><form method="POST" action="/matrix/score">
<input type="hidden" name="tool" value="{tool}">
<input type="hidden" name="criterion" value="{j}">
<input type="number" name="score" class="score-input" min="1" max="5" value="{score}" onchange="this.form.submit()">
</form></td>"#,
                        tool = escape(&entry.tool),
                        j = j,
                        score = score,
                    )
                })
                .collect();
            let total: u32 = entry.scores.iter().map(|&s| s as u32).sum();
            format!(
                r#"<tr><td class="tool-name">{}</td>{}<td class="total">{}</td></tr>"#,
                escape(&entry.tool),
                cells,
                total
            )
        })
        .collect();

    format!(
        r#"<div class="card">
    <div class="card-header">Tool Performance Evaluation</div>
    <div class="table-container"><table class="table matrix-table">
<thead><tr>{}</tr></thead>
<tbody>{}</tbody>
</table></div>
    <a class="btn btn-outline" href="/export/matrix">Download Evaluation Scores (CSV)</a>
</div>"#,
        header, rows
    )
}
