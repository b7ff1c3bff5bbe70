//! Enrichr client.
//!
//! Two-step protocol:
//!   1. POST the newline-joined gene list as multipart field `list` to
//!      /Enrichr/addList, yielding an opaque `userListId`.
//!   2. GET /Enrichr/enrich?userListId=<id>&backgroundType=<library>.
//!
//! Enrichment rows arrive as positional nine-element arrays under the
//! library key; the two legacy "Old" p-value columns are dropped.

use async_trait::async_trait;
use enrichdash_common::sandbox::SandboxClient as Client;
use enrichdash_common::{DataTable, GeneList};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::cache::MemoCache;
use crate::outcome::ProviderOutcome;
use crate::Provider;

const ADD_LIST_URL: &str = "https://maayanlab.cloud/Enrichr/addList";
const ENRICH_URL: &str = "https://maayanlab.cloud/Enrichr/enrich";

pub const DEFAULT_LIBRARY: &str = "KEGG_2021_Human";

/// Positional columns of an Enrichr enrichment row.
const RAW_COLUMNS: [&str; 9] = [
    "Rank",
    "Term",
    "P-value",
    "Z-score",
    "Combined Score",
    "Overlapping Genes",
    "Adjusted P-value",
    "Old P-value",
    "Old Adjusted P-value",
];

/// Columns kept after dropping the two legacy ones.
const KEPT_COLUMNS: usize = 7;

pub struct EnrichrClient {
    client: Client,
    cache: MemoCache,
    library: String,
}

impl EnrichrClient {
    pub fn new() -> Self {
        Self::with_library(DEFAULT_LIBRARY)
    }

    /// Target a specific Enrichr background library.
    pub fn with_library(library: &str) -> Self {
        Self {
            client: Client::new().unwrap(),
            cache: MemoCache::default(),
            library: library.to_string(),
        }
    }

    pub fn library(&self) -> &str {
        &self.library
    }

    async fn upload(&self, genes: &GeneList) -> anyhow::Result<u64> {
        let form = reqwest::multipart::Form::new().text("list", genes.joined("\n"));
        let resp = self.client.post(ADD_LIST_URL)?.multipart(form).send().await?;
        if !resp.status().is_success() {
            anyhow::bail!("upload failed: HTTP {}", resp.status());
        }
        let body = resp.json::<Value>().await?;
        extract_list_id(&body).ok_or_else(|| anyhow::anyhow!("upload response missing userListId"))
    }

    async fn enrich(&self, genes: &GeneList) -> anyhow::Result<DataTable> {
        let user_list_id = self.upload(genes).await?;
        debug!(user_list_id, library = %self.library, "Enrichr list uploaded");

        let resp = self
            .client
            .get(ENRICH_URL)?
            .query(&[
                ("userListId", user_list_id.to_string().as_str()),
                ("backgroundType", &self.library),
            ])
            .send()
            .await?;
        if !resp.status().is_success() {
            anyhow::bail!("enrich failed: HTTP {}", resp.status());
        }

        let body = resp.json::<Value>().await?;
        Ok(project_library_rows(&body, &self.library))
    }
}

impl Default for EnrichrClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Provider for EnrichrClient {
    fn name(&self) -> &'static str {
        "Enrichr"
    }

    #[instrument(skip(self, genes))]
    async fn fetch(&self, genes: &GeneList) -> ProviderOutcome {
        // The library is part of the memo key: the same gene list against a
        // different library is a different call.
        let key = format!("{}::{}", self.library, genes.cache_key());
        if let Some(hit) = self.cache.get(&key).await {
            return hit;
        }

        let outcome = match self.enrich(genes).await {
            Ok(table) => ProviderOutcome::Success(table),
            Err(e) => {
                warn!(error = %e, "Enrichr call failed");
                ProviderOutcome::failure(self.name(), e)
            }
        };
        self.cache.put(key, outcome.clone()).await;
        outcome
    }
}

/// Pull `userListId` out of an addList reply.
pub fn extract_list_id(body: &Value) -> Option<u64> {
    body["userListId"].as_u64()
}

/// Project the positional rows under `library` into the seven-column table.
///
/// A missing or empty library key yields an empty table.
pub fn project_library_rows(body: &Value, library: &str) -> DataTable {
    let data = body[library].as_array().cloned().unwrap_or_default();
    if data.is_empty() {
        return DataTable::empty();
    }

    let columns = RAW_COLUMNS[..KEPT_COLUMNS]
        .iter()
        .map(|c| c.to_string())
        .collect();
    let rows = data
        .iter()
        .filter_map(Value::as_array)
        .map(|row| row.iter().take(KEPT_COLUMNS).cloned().collect())
        .collect();

    DataTable::with_columns(columns, rows)
}
