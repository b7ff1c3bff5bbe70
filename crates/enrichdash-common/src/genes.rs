//! Gene list parsing.
//!
//! Input arrives as free text from the dashboard form; symbols are
//! comma-separated, case-preserved, and kept in submission order.

use serde::{Deserialize, Serialize};

/// An ordered list of trimmed, non-empty gene symbols.
///
/// Symbol syntax is not validated and duplicates are not collapsed; the
/// downstream providers decide what a symbol means.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneList {
    symbols: Vec<String>,
}

impl GeneList {
    /// Parse raw comma-separated text: split on comma, trim each piece,
    /// drop empty pieces. Malformed input yields an empty list, never an error.
    pub fn parse(raw: &str) -> Self {
        let symbols = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        Self { symbols }
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Join symbols with a separator (Enrichr uploads want newline-joined).
    pub fn joined(&self, sep: &str) -> String {
        self.symbols.join(sep)
    }

    /// Normalized serialization used as the memoization key.
    pub fn cache_key(&self) -> String {
        self.symbols.join(",")
    }
}

impl From<Vec<String>> for GeneList {
    fn from(symbols: Vec<String>) -> Self {
        Self { symbols }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_drops_empties() {
        let list = GeneList::parse(" FSHR, LHCGR ,,  ");
        assert_eq!(list.symbols(), &["FSHR", "LHCGR"]);
    }

    #[test]
    fn test_parse_preserves_order_and_case() {
        let list = GeneList::parse("cyp19a1,ESR1,Inhba");
        assert_eq!(list.symbols(), &["cyp19a1", "ESR1", "Inhba"]);
    }

    #[test]
    fn test_all_empty_input_yields_empty_list() {
        assert!(GeneList::parse("").is_empty());
        assert!(GeneList::parse(" , ,, ").is_empty());
    }

    #[test]
    fn test_duplicates_are_kept() {
        let list = GeneList::parse("FSHR,FSHR");
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_cache_key_is_stable() {
        let a = GeneList::parse("FSHR, LHCGR");
        let b = GeneList::parse("FSHR,LHCGR");
        assert_eq!(a.cache_key(), b.cache_key());
    }

    #[test]
    fn test_joined_newline() {
        let list = GeneList::parse("FSHR,LHCGR");
        assert_eq!(list.joined("\n"), "FSHR\nLHCGR");
    }
}
