//! Tool evaluation matrix.
//!
//! A fixed set of tools scored 1-5 against a fixed set of qualitative
//! criteria. Defaults are builtin but can be overridden from a YAML config
//! so tools/criteria can change without code edits. Only scores are mutable
//! at runtime; the tool and criterion sets are fixed for the session.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::table::DataTable;

pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 5;

/// One qualitative evaluation criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criterion {
    pub name: String,
    pub description: String,
}

/// One tool's scores, aligned to the criteria list by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolScores {
    pub tool: String,
    pub scores: Vec<u8>,
}

/// The full evaluation matrix: criteria columns x tool rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationMatrix {
    pub criteria: Vec<Criterion>,
    pub tools: Vec<ToolScores>,
}

impl Default for EvaluationMatrix {
    fn default() -> Self {
        let criterion = |name: &str, description: &str| Criterion {
            name: name.to_string(),
            description: description.to_string(),
        };
        let tool = |tool: &str, scores: &[u8]| ToolScores {
            tool: tool.to_string(),
            scores: scores.to_vec(),
        };

        Self {
            criteria: vec![
                criterion("Biological Context", "Relevance to FSH, folliculogenesis, endocrine system"),
                criterion("Network Connectivity", "Gene/protein interaction coverage"),
                criterion("Clinical Utility", "Drug-related interpretability, PGx targets"),
                criterion("AI-readiness", "Structured SBML, scores, ML readiness"),
                criterion("Interoperability", "API, reproducibility, export support"),
                criterion("Clinical Explainability", "Ease of clinical use in medicine context"),
                criterion("Visual Insight", "Interactive / informative graphics"),
            ],
            tools: vec![
                tool("gProfiler", &[5, 3, 2, 4, 5, 3, 3]),
                tool("Enrichr", &[4, 3, 3, 5, 5, 2, 3]),
                tool("WebGestalt", &[4, 3, 3, 3, 3, 2, 3]),
                tool("Metascape", &[4, 4, 3, 3, 2, 3, 5]),
                tool("DAVID", &[4, 2, 2, 3, 2, 2, 2]),
                tool("ClusterProfiler", &[5, 4, 3, 5, 4, 2, 4]),
            ],
        }
    }
}

impl EvaluationMatrix {
    /// Load from a YAML file, normalizing score vectors to the criteria
    /// count and clamping every score into range.
    pub fn from_yaml(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut matrix: Self = serde_yaml::from_str(&content)?;
        matrix.normalize();
        Ok(matrix)
    }

    /// Pad or truncate each tool's score vector to the criteria count and
    /// clamp all scores into [MIN_SCORE, MAX_SCORE].
    pub fn normalize(&mut self) {
        let width = self.criteria.len();
        for entry in &mut self.tools {
            entry.scores.resize(width, MIN_SCORE);
            for score in &mut entry.scores {
                *score = (*score).clamp(MIN_SCORE, MAX_SCORE);
            }
        }
    }

    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.tool.as_str()).collect()
    }

    /// Current score for one cell, if the tool and criterion exist.
    pub fn score(&self, tool: &str, criterion: usize) -> Option<u8> {
        self.tools
            .iter()
            .find(|t| t.tool == tool)?
            .scores
            .get(criterion)
            .copied()
    }

    /// Update a single cell, clamping the value into range.
    ///
    /// Unknown tools or criterion indices are ignored: the matrix shape is
    /// fixed, only scores vary. Returns true if a cell was updated.
    pub fn set_score(&mut self, tool: &str, criterion: usize, score: i64) -> bool {
        if criterion >= self.criteria.len() {
            return false;
        }
        let clamped = score.clamp(MIN_SCORE as i64, MAX_SCORE as i64) as u8;
        match self.tools.iter_mut().find(|t| t.tool == tool) {
            Some(entry) => {
                entry.scores[criterion] = clamped;
                true
            }
            None => false,
        }
    }

    /// Sum of one tool's current criterion scores, recomputed on every read.
    pub fn total(&self, tool: &str) -> Option<u32> {
        self.tools
            .iter()
            .find(|t| t.tool == tool)
            .map(|t| t.scores.iter().map(|&s| s as u32).sum())
    }

    /// Render the matrix as a table: a Tool index column, one column per
    /// criterion, and the derived Total Score column.
    pub fn to_table(&self) -> DataTable {
        let mut columns = vec!["Tool".to_string()];
        columns.extend(self.criteria.iter().map(|c| c.name.clone()));
        columns.push("Total Score".to_string());

        let rows = self
            .tools
            .iter()
            .map(|entry| {
                let mut row = vec![json!(entry.tool)];
                row.extend(entry.scores.iter().map(|&s| json!(s)));
                row.push(json!(entry.scores.iter().map(|&s| s as u32).sum::<u32>()));
                row
            })
            .collect();

        DataTable::with_columns(columns, rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_shape() {
        let matrix = EvaluationMatrix::default();
        assert_eq!(matrix.criteria.len(), 7);
        assert_eq!(matrix.tools.len(), 6);
        for entry in &matrix.tools {
            assert_eq!(entry.scores.len(), 7);
            assert!(entry.scores.iter().all(|&s| (MIN_SCORE..=MAX_SCORE).contains(&s)));
        }
    }

    #[test]
    fn test_default_totals() {
        let matrix = EvaluationMatrix::default();
        assert_eq!(matrix.total("gProfiler"), Some(25));
        assert_eq!(matrix.total("DAVID"), Some(17));
        assert_eq!(matrix.total("NotATool"), None);
    }

    #[test]
    fn test_set_score_updates_one_cell_only() {
        let mut matrix = EvaluationMatrix::default();
        let before = matrix.clone();
        assert!(matrix.set_score("Enrichr", 2, 5));

        assert_eq!(matrix.score("Enrichr", 2), Some(5));
        for (i, entry) in matrix.tools.iter().enumerate() {
            for (j, &score) in entry.scores.iter().enumerate() {
                if entry.tool != "Enrichr" || j != 2 {
                    assert_eq!(score, before.tools[i].scores[j]);
                }
            }
        }
        assert_eq!(matrix.total("Enrichr"), Some(27));
    }

    #[test]
    fn test_set_score_clamps_out_of_range() {
        let mut matrix = EvaluationMatrix::default();
        matrix.set_score("DAVID", 0, 99);
        assert_eq!(matrix.score("DAVID", 0), Some(5));
        matrix.set_score("DAVID", 0, -3);
        assert_eq!(matrix.score("DAVID", 0), Some(1));
    }

    #[test]
    fn test_set_score_rejects_unknown_cells() {
        let mut matrix = EvaluationMatrix::default();
        assert!(!matrix.set_score("NotATool", 0, 3));
        assert!(!matrix.set_score("gProfiler", 7, 3));
    }

    #[test]
    fn test_to_table_has_index_and_total_columns() {
        let matrix = EvaluationMatrix::default();
        let table = matrix.to_table();
        assert_eq!(table.columns().first().map(String::as_str), Some("Tool"));
        assert_eq!(table.columns().last().map(String::as_str), Some("Total Score"));
        assert_eq!(table.column_count(), 9);
        assert_eq!(table.row_count(), 6);
        let csv = table.to_csv();
        assert!(csv.starts_with("Tool,"));
        assert!(csv.contains("gProfiler,5,3,2,4,5,3,3,25"));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let matrix = EvaluationMatrix::default();
        let yaml = serde_yaml::to_string(&matrix).unwrap();
        let parsed: EvaluationMatrix = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(matrix, parsed);
    }

    #[test]
    fn test_normalize_pads_and_clamps() {
        let mut matrix = EvaluationMatrix::default();
        matrix.tools[0].scores = vec![9, 0];
        matrix.normalize();
        assert_eq!(matrix.tools[0].scores.len(), 7);
        assert_eq!(matrix.tools[0].scores[0], 5);
        assert_eq!(matrix.tools[0].scores[1], 1);
        assert_eq!(matrix.tools[0].scores[2], 1);
    }
}
