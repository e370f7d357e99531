//! Loading rows parsed by an external markup parser.

use langgen_core::TableRow;
use std::fs;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum RowsError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid rows in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Read a JSON array of table rows from `path`.
pub fn load_rows(path: &Path) -> Result<Vec<TableRow>, RowsError> {
    let shown = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|source| RowsError::Io {
        path: shown.clone(),
        source,
    })?;
    let rows: Vec<TableRow> = serde_json::from_str(&content).map_err(|source| RowsError::Json {
        path: shown.clone(),
        source,
    })?;
    tracing::debug!(path = %shown, rows = rows.len(), "loaded rows");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const ROWS: &str = r#"[{"classes": ["even"], "cells": [{"tag": "td", "classes": ["FrWrd"], "children": ["chat"]}]}, {}]"#;

    fn write_rows(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn loads_rows_from_json() {
        let dir = TempDir::new().unwrap();
        let path = write_rows(&dir, "rows.json", ROWS);

        let rows = load_rows(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].classes, vec!["even"]);
        assert!(rows[1].cells.is_empty());
    }

    #[test]
    fn loads_rows_with_debug_logging() {
        let dir = TempDir::new().unwrap();
        let path = write_rows(&dir, "rows.json", ROWS);
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .finish();

        let rows = tracing::subscriber::with_default(subscriber, || load_rows(&path)).unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn reports_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = write_rows(&dir, "broken.json", "{not json");
        assert!(matches!(load_rows(&path), Err(RowsError::Json { .. })));
    }

    #[test]
    fn reports_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = load_rows(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(RowsError::Io { .. })));
    }
}
