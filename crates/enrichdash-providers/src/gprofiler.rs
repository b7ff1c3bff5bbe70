//! gProfiler g:GOSt functional enrichment client.
//!
//! Endpoint: https://biit.cs.ut.ee/gprofiler/api/gost/profile/
//!
//! Single POST with the gene list; the `result` array in the reply carries
//! one object per enrichment hit whose key set is response-driven, so rows
//! are flattened into a structural table.

use async_trait::async_trait;
use enrichdash_common::sandbox::SandboxClient as Client;
use enrichdash_common::{DataTable, GeneList};
use serde_json::{json, Value};
use tracing::{debug, instrument, warn};

use crate::cache::MemoCache;
use crate::outcome::ProviderOutcome;
use crate::Provider;

const GPROFILER_URL: &str = "https://biit.cs.ut.ee/gprofiler/api/gost/profile/";

/// Annotation sources requested from g:GOSt.
const SOURCES: [&str; 3] = ["GO:BP", "KEGG", "REAC"];

pub struct GProfilerClient {
    client: Client,
    cache: MemoCache,
}

impl GProfilerClient {
    pub fn new() -> Self {
        Self {
            client: Client::new().unwrap(),
            cache: MemoCache::default(),
        }
    }

    async fn profile(&self, genes: &GeneList) -> anyhow::Result<DataTable> {
        let payload = json!({
            "organism": "hsapiens",
            "query": genes.symbols(),
            "sources": SOURCES,
            "no_evidences": true,
        });

        let resp = self.client.post(GPROFILER_URL)?.json(&payload).send().await?;
        if !resp.status().is_success() {
            anyhow::bail!("HTTP {}", resp.status());
        }

        let body = resp.json::<Value>().await?;
        let table = parse_profile_response(&body);
        debug!(rows = table.row_count(), "gProfiler enrichment returned");
        Ok(table)
    }
}

impl Default for GProfilerClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Provider for GProfilerClient {
    fn name(&self) -> &'static str {
        "gProfiler"
    }

    #[instrument(skip(self, genes))]
    async fn fetch(&self, genes: &GeneList) -> ProviderOutcome {
        let key = genes.cache_key();
        if let Some(hit) = self.cache.get(&key).await {
            return hit;
        }

        let outcome = match self.profile(genes).await {
            Ok(table) => ProviderOutcome::Success(table),
            Err(e) => {
                warn!(error = %e, "gProfiler call failed");
                ProviderOutcome::failure(self.name(), e)
            }
        };
        self.cache.put(key, outcome.clone()).await;
        outcome
    }
}

/// Flatten the `result` array of a g:GOSt reply into a table.
///
/// A reply without `result` (or with a non-array value) yields an empty
/// table: no hits is not an error.
pub fn parse_profile_response(body: &Value) -> DataTable {
    let records = body["result"].as_array().cloned().unwrap_or_default();
    DataTable::from_records(&records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_one_hit() {
        let body = json!({"result": [{"name": "GO:1", "p_value": 0.01}]});
        let table = parse_profile_response(&body);
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.columns(), &["name", "p_value"]);
    }

    #[test]
    fn test_parse_missing_result_is_empty() {
        assert!(parse_profile_response(&json!({})).is_empty());
        assert!(parse_profile_response(&json!({"result": null})).is_empty());
    }

    #[tokio::test]
    async fn test_fetch_is_memoized_per_gene_list() {
        let client = GProfilerClient::new();
        let genes = GeneList::parse("FSHR, LHCGR");
        let seeded = ProviderOutcome::Success(DataTable::from_records(&[
            json!({"name": "GO:1", "p_value": 0.01}),
        ]));
        client.cache.put(genes.cache_key(), seeded.clone()).await;

        // A hit is served as-is; a miss would issue a live network call
        // and could not reproduce this exact seeded table.
        let first = client.fetch(&genes).await;
        let second = client.fetch(&genes).await;
        assert_eq!(first, seeded);
        assert_eq!(
            first.table().unwrap().to_csv(),
            second.table().unwrap().to_csv()
        );
    }

    #[test]
    fn test_parse_response_driven_columns() {
        let body = json!({"result": [
            {"name": "GO:1", "p_value": 0.01, "source": "GO:BP"},
            {"name": "hsa04913", "p_value": 0.03, "term_size": 42},
        ]});
        let table = parse_profile_response(&body);
        assert_eq!(table.columns(), &["name", "p_value", "source", "term_size"]);
        assert_eq!(table.row_count(), 2);
    }
}
