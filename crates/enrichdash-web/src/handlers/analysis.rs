//! Analysis run handler — gene form submission through the three provider
//! clients, rendered back into the dashboard page.

use axum::{extract::State, response::Html, Form};
use serde::Deserialize;
use tracing::info;

use crate::handlers::dashboard::{escape, render_dashboard};
use crate::state::SharedState;
use enrichdash_common::{DataTable, GeneList};
use enrichdash_providers::outcome::ProviderOutcome;
use enrichdash_providers::tools::{self, ToolInfo};
use enrichdash_providers::Provider;

/// Rows shown inline for the enrichment providers; the full table is always
/// available via the CSV export. WebGestalt mappings are short and shown whole.
const PREVIEW_ROWS: usize = 10;

#[derive(Deserialize)]
pub struct RunForm {
    pub genes: String,
}

pub async fn run_submit(
    State(state): State<SharedState>,
    Form(form): Form<RunForm>,
) -> Html<String> {
    let genes = GeneList::parse(&form.genes);

    let results = if genes.is_empty() {
        r#"<div class="notice">No gene symbols entered. Provide a comma-separated list and run again.</div>"#
            .to_string()
    } else {
        info!(n_genes = genes.len(), "running analysis");
        // Providers run one after another; each failure is contained and
        // never blocks the remaining providers from rendering.
        let outcomes = vec![
            (state.gprofiler.name(), state.gprofiler.fetch(&genes).await),
            (state.enrichr.name(), state.enrichr.fetch(&genes).await),
            (state.webgestalt.name(), state.webgestalt.fetch(&genes).await),
        ];
        render_results(&genes, &outcomes)
    };

    let matrix = state.matrix.read().await;
    Html(render_dashboard(&form.genes, Some(results), &matrix))
}

/// Render the per-provider result sections plus the static blocks for the
/// tools without an automatable API.
///
/// Outcomes are keyed by provider name, so section order follows the tool
/// directory regardless of how the outcomes were collected.
pub fn render_results(genes: &GeneList, outcomes: &[(&str, ProviderOutcome)]) -> String {
    let mut sections = String::new();

    for (index, tool) in tools::TOOL_DIRECTORY.iter().enumerate() {
        let index = index + 1;
        if tool.has_api {
            let outcome = outcomes
                .iter()
                .find(|(name, _)| *name == tool.name)
                .map(|(_, outcome)| outcome);
            let preview = match tool.name {
                "WebGestalt" => None,
                _ => Some(PREVIEW_ROWS),
            };
            sections.push_str(&render_provider_section(index, tool, genes, outcome, preview));
        } else {
            sections.push_str(&render_static_section(index, tool));
        }
    }

    sections
}

fn render_provider_section(
    index: usize,
    tool: &ToolInfo,
    genes: &GeneList,
    outcome: Option<&ProviderOutcome>,
    preview: Option<usize>,
) -> String {
    let body = match outcome {
        Some(ProviderOutcome::Success(table)) if !table.is_empty() => {
            let shown = match preview {
                Some(n) => table.head(n),
                None => table.clone(),
            };
            // Symbols are unvalidated free text, so the query value is
            // percent-encoded; escaping alone would let & or = split it.
            let query: String =
                url::form_urlencoded::byte_serialize(genes.cache_key().as_bytes()).collect();
            let export = format!(
                r#"<a class="btn btn-outline" href="/export/{}?genes={}">Download {} Results (CSV)</a>"#,
                tool.name.to_lowercase(),
                query,
                tool.name
            );
            format!("{}\n{}", render_table(&shown), export)
        }
        Some(ProviderOutcome::Success(_)) => {
            format!(r#"<div class="notice">{}</div>"#, empty_notice(tool.name))
        }
        Some(ProviderOutcome::Failure { reason }) => {
            format!(r#"<div class="notice notice-error">{}</div>"#, escape(reason))
        }
        None => String::new(),
    };

    format!(
        r#"<div class="card result-card">
    <div class="card-header">{index}. {name}</div>
    <p><strong>Summary:</strong> {summary}<br>
    <strong>API/Automation:</strong> {automation}</p>
    {body}
    <p><a href="{url}" target="_blank" rel="noopener">Open {name}</a></p>
</div>"#,
        index = index,
        name = tool.name,
        summary = tool.summary,
        automation = tool.automation,
        body = body,
        url = tool.url,
    )
}

fn render_static_section(index: usize, tool: &ToolInfo) -> String {
    format!(
        r#"<div class="card result-card">
    <div class="card-header">{index}. {name}</div>
    <p><strong>Summary:</strong> {summary}<br>
    <strong>API/Automation:</strong> {automation}</p>
    <p><a href="{url}" target="_blank" rel="noopener">Open {name}</a></p>
</div>"#,
        index = index,
        name = tool.name,
        summary = tool.summary,
        automation = tool.automation,
        url = tool.url,
    )
}

fn empty_notice(tool: &str) -> String {
    match tool {
        "gProfiler" => "No enrichment found from gProfiler.".to_string(),
        "Enrichr" => "No enrichment results from Enrichr.".to_string(),
        "WebGestalt" => "No successful mappings from WebGestalt.".to_string(),
        other => format!("No results from {}.", other),
    }
}

fn render_table(table: &DataTable) -> String {
    let header: String = table
        .columns()
        .iter()
        .map(|c| format!("<th>{}</th>", escape(c)))
        .collect();
    let rows: String = table
        .rows()
        .iter()
        .map(|row| {
            let cells: String = row
                .iter()
                .map(|v| format!("<td>{}</td>", escape(&DataTable::cell_text(v))))
                .collect();
            format!("<tr>{}</tr>", cells)
        })
        .collect();

    format!(
        r#"<div class="table-container"><table class="table">
<thead><tr>{}</tr></thead>
<tbody>{}</tbody>
</table></div>"#,
        header, rows
    )
}
