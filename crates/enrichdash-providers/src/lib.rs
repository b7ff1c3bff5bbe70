//! enrichdash-providers — Clients for the external enrichment services.
//!
//! Each provider module wraps one service's wire protocol and reshapes its
//! JSON reply into a [`DataTable`](enrichdash_common::DataTable). Failures
//! are contained per provider: a client never panics or propagates a fatal
//! error, it returns a [`ProviderOutcome`].

pub mod cache;
pub mod enrichr;
pub mod gprofiler;
pub mod outcome;
pub mod tools;
pub mod webgestalt;

use async_trait::async_trait;
use enrichdash_common::GeneList;
use outcome::ProviderOutcome;

/// Common interface for all enrichment service clients.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Display name, matching the tool directory entry.
    fn name(&self) -> &'static str;

    /// Run the provider's protocol for a gene list.
    ///
    /// Outcomes are memoized per input, so repeated identical submissions
    /// do not re-issue network calls.
    async fn fetch(&self, genes: &GeneList) -> ProviderOutcome;
}
