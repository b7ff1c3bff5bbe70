//! WebGestalt identifier mapping client.
//!
//! Endpoint: https://www.webgestalt.org/api/idmapping
//!
//! Translates gene symbols to Entrez gene IDs. This client performs ID
//! mapping only; statistical enrichment stays on the provider's own site.

use async_trait::async_trait;
use enrichdash_common::sandbox::SandboxClient as Client;
use enrichdash_common::{DataTable, GeneList};
use serde_json::{json, Value};
use tracing::{debug, instrument, warn};

use crate::cache::MemoCache;
use crate::outcome::ProviderOutcome;
use crate::Provider;

const IDMAPPING_URL: &str = "https://www.webgestalt.org/api/idmapping";

pub struct WebGestaltClient {
    client: Client,
    cache: MemoCache,
}

impl WebGestaltClient {
    pub fn new() -> Self {
        Self {
            client: Client::new().unwrap(),
            cache: MemoCache::default(),
        }
    }

    async fn map_ids(&self, genes: &GeneList) -> anyhow::Result<DataTable> {
        let payload = json!({
            "organism": "hsapiens",
            "sourceType": "genesymbol",
            "targetType": "entrezgene",
            "ids": genes.symbols(),
            "standardId": "entrezgene",
        });

        let resp = self.client.post(IDMAPPING_URL)?.json(&payload).send().await?;
        if !resp.status().is_success() {
            anyhow::bail!("HTTP {}", resp.status());
        }

        let body = resp.json::<Value>().await?;
        let table = parse_mapping_response(&body);
        debug!(mapped = table.row_count(), "WebGestalt ID mapping returned");
        Ok(table)
    }
}

impl Default for WebGestaltClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Provider for WebGestaltClient {
    fn name(&self) -> &'static str {
        "WebGestalt"
    }

    #[instrument(skip(self, genes))]
    async fn fetch(&self, genes: &GeneList) -> ProviderOutcome {
        let key = genes.cache_key();
        if let Some(hit) = self.cache.get(&key).await {
            return hit;
        }

        let outcome = match self.map_ids(genes).await {
            Ok(table) => ProviderOutcome::Success(table),
            Err(e) => {
                warn!(error = %e, "WebGestalt call failed");
                ProviderOutcome::failure(self.name(), e)
            }
        };
        self.cache.put(key, outcome.clone()).await;
        outcome
    }
}

/// Flatten the `mapped` array into a table.
///
/// Unmapped symbols are simply absent; a reply without `mapped` yields an
/// empty table, not an error.
pub fn parse_mapping_response(body: &Value) -> DataTable {
    let records = body["mapped"].as_array().cloned().unwrap_or_default();
    DataTable::from_records(&records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_mapped_entries() {
        let body = json!({"mapped": [{"userId": "FSHR", "entrezgeneid": "2492"}]});
        let table = parse_mapping_response(&body);
        assert_eq!(table.row_count(), 1);
        assert!(table.columns().contains(&"userId".to_string()));
        assert!(table.columns().contains(&"entrezgeneid".to_string()));
    }

    #[test]
    fn test_parse_missing_mapped_is_empty() {
        assert!(parse_mapping_response(&json!({})).is_empty());
    }

    #[tokio::test]
    async fn test_fetch_is_memoized_per_gene_list() {
        let client = WebGestaltClient::new();
        let genes = GeneList::parse("FSHR");
        let seeded = ProviderOutcome::Success(parse_mapping_response(
            &json!({"mapped": [{"userId": "FSHR", "entrezgeneid": "2492"}]}),
        ));
        client.cache.put(genes.cache_key(), seeded.clone()).await;

        let first = client.fetch(&genes).await;
        let second = client.fetch(&genes).await;
        assert_eq!(first, seeded);
        assert_eq!(
            first.table().unwrap().to_csv(),
            second.table().unwrap().to_csv()
        );
    }

    #[test]
    fn test_partial_mapping_is_not_an_error() {
        // Two symbols submitted, one mapped: the result just has one row.
        let body = json!({"mapped": [{"userId": "FSHR", "entrezgeneid": "2492"}],
                          "unmapped": ["NOTAGENE"]});
        let table = parse_mapping_response(&body);
        assert_eq!(table.row_count(), 1);
    }
}
