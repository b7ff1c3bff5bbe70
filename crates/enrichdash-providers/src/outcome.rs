//! Provider call outcomes.

use enrichdash_common::DataTable;
use serde::{Deserialize, Serialize};

/// Result of one provider call.
///
/// A successful call with zero hits is `Success` with an empty table, which
/// is distinct from `Failure` (transport error, bad status, malformed body).
/// The presenter renders the two differently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ProviderOutcome {
    Success(DataTable),
    Failure { reason: String },
}

impl ProviderOutcome {
    /// Wrap an error as a failure outcome naming the provider.
    pub fn failure(provider: &str, err: impl std::fmt::Display) -> Self {
        Self::Failure {
            reason: format!("{} error: {}", provider, err),
        }
    }

    pub fn table(&self) -> Option<&DataTable> {
        match self {
            Self::Success(table) => Some(table),
            Self::Failure { .. } => None,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Failure { reason } => Some(reason),
            Self::Success(_) => None,
        }
    }
}
