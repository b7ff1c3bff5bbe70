//! Structural result tables.
//!
//! Provider responses decide their own column sets (gProfiler and WebGestalt
//! records carry whatever keys the service returns), so results are modeled
//! as an ordered column list plus rows of JSON values rather than a fixed
//! record type.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A flat table of provider results: ordered column names and one row of
/// JSON values per record. Immutable after creation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataTable {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl DataTable {
    /// An empty table with no columns and no rows.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a table with a fixed column set.
    ///
    /// Rows shorter than the column list are padded with nulls; longer rows
    /// are truncated.
    pub fn with_columns(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, Value::Null);
                row
            })
            .collect();
        Self { columns, rows }
    }

    /// Flatten an array of JSON objects into a table.
    ///
    /// Columns are the union of keys encountered across records, in
    /// first-seen order. Nested objects are flattened with dotted keys;
    /// missing cells are null. Non-object records are skipped.
    pub fn from_records(records: &[Value]) -> Self {
        let mut columns: Vec<String> = Vec::new();
        let mut flattened: Vec<Vec<(String, Value)>> = Vec::new();

        for record in records {
            if !record.is_object() {
                continue;
            }
            let mut pairs = Vec::new();
            flatten_into("", record, &mut pairs);
            for (key, _) in &pairs {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
            flattened.push(pairs);
        }

        let rows = flattened
            .into_iter()
            .map(|pairs| {
                columns
                    .iter()
                    .map(|col| {
                        pairs
                            .iter()
                            .find(|(k, _)| k == col)
                            .map(|(_, v)| v.clone())
                            .unwrap_or(Value::Null)
                    })
                    .collect()
            })
            .collect();

        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// A copy containing at most the first `n` rows.
    pub fn head(&self, n: usize) -> Self {
        Self {
            columns: self.columns.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }

    /// Render a cell for display: strings verbatim, null as blank, anything
    /// else as compact JSON.
    pub fn cell_text(value: &Value) -> String {
        match value {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    /// Serialize the full table as CSV: header row of column names, one line
    /// per record, RFC 4180 quoting.
    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        out.push_str(
            &self
                .columns
                .iter()
                .map(|c| csv_escape(c))
                .collect::<Vec<_>>()
                .join(","),
        );
        out.push('\n');
        for row in &self.rows {
            let line = row
                .iter()
                .map(|v| csv_escape(&Self::cell_text(v)))
                .collect::<Vec<_>>()
                .join(",");
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

/// Flatten one JSON object into (dotted key, value) pairs, depth-first.
fn flatten_into(prefix: &str, value: &Value, out: &mut Vec<(String, Value)>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let dotted = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                match child {
                    Value::Object(_) => flatten_into(&dotted, child, out),
                    other => out.push((dotted, other.clone())),
                }
            }
        }
        other => out.push((prefix.to_string(), other.clone())),
    }
}

fn csv_escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_records_union_of_keys() {
        let records = vec![
            json!({"name": "GO:1", "p_value": 0.01}),
            json!({"name": "GO:2", "source": "KEGG"}),
        ];
        let table = DataTable::from_records(&records);
        assert_eq!(table.columns(), &["name", "p_value", "source"]);
        assert_eq!(table.row_count(), 2);
        // Missing cells are null
        assert_eq!(table.rows()[0][2], Value::Null);
        assert_eq!(table.rows()[1][1], Value::Null);
    }

    #[test]
    fn test_from_records_flattens_nested_objects() {
        let records = vec![json!({"term": "GO:1", "stats": {"p": 0.05}})];
        let table = DataTable::from_records(&records);
        assert!(table.columns().contains(&"stats.p".to_string()));
    }

    #[test]
    fn test_from_records_empty_input() {
        let table = DataTable::from_records(&[]);
        assert!(table.is_empty());
        assert_eq!(table.column_count(), 0);
    }

    #[test]
    fn test_head_limits_rows() {
        let records: Vec<Value> = (0..20).map(|i| json!({"rank": i})).collect();
        let table = DataTable::from_records(&records);
        assert_eq!(table.head(10).row_count(), 10);
        assert_eq!(table.head(100).row_count(), 20);
    }

    #[test]
    fn test_to_csv_header_and_rows() {
        let records = vec![json!({"name": "GO:1", "p_value": 0.01})];
        let table = DataTable::from_records(&records);
        let csv = table.to_csv();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("name,p_value"));
        assert_eq!(lines.next(), Some("GO:1,0.01"));
    }

    #[test]
    fn test_to_csv_quotes_special_fields() {
        let table = DataTable::with_columns(
            vec!["genes".to_string()],
            vec![vec![json!("FSHR, LHCGR")], vec![json!("say \"hi\"")]],
        );
        let csv = table.to_csv();
        assert!(csv.contains("\"FSHR, LHCGR\""));
        assert!(csv.contains("\"say \"\"hi\"\"\""));
    }

    #[test]
    fn test_with_columns_pads_short_rows() {
        let table = DataTable::with_columns(
            vec!["a".to_string(), "b".to_string()],
            vec![vec![json!(1)]],
        );
        assert_eq!(table.rows()[0], vec![json!(1), Value::Null]);
    }

    #[test]
    fn test_cell_text_rendering() {
        assert_eq!(DataTable::cell_text(&json!("FSHR")), "FSHR");
        assert_eq!(DataTable::cell_text(&Value::Null), "");
        assert_eq!(DataTable::cell_text(&json!(0.01)), "0.01");
    }
}
