//! Table input: a name plus an ordered column list

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::column::Column;
use crate::dispatch::generate_schema;
use crate::error::SchemaError;

/// A table as supplied by the file reader
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Table name used in generated statements
    pub name: String,

    /// Ordered list of columns
    pub columns: Vec<Column>,
}

/// On-disk manifest: either a full table or a bare column array
#[derive(Deserialize)]
#[serde(untagged)]
enum Manifest {
    Table {
        #[serde(default)]
        name: Option<String>,
        columns: Vec<Column>,
    },
    Columns(Vec<Column>),
}

impl Table {
    /// Create a table from columns
    pub fn new(name: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            name: name.into(),
            columns,
        }
    }

    /// Parse a JSON column manifest
    ///
    /// `default_name` is used when the manifest does not name the table.
    pub fn from_manifest_json(json: &str, default_name: &str) -> Result<Self, SchemaError> {
        let manifest: Manifest = serde_json::from_str(json)
            .map_err(|e| SchemaError::InvalidManifest(e.to_string()))?;

        Ok(match manifest {
            Manifest::Table { name, columns } => Self {
                name: name.unwrap_or_else(|| default_name.to_string()),
                columns,
            },
            Manifest::Columns(columns) => Self::new(default_name, columns),
        })
    }

    /// Table name for a `.dbf` path: the lower-cased file stem
    pub fn name_from_path(path: &Path) -> Option<String> {
        path.file_stem()
            .and_then(|stem| stem.to_str())
            .map(|stem| stem.to_lowercase())
    }

    /// Generate the schema of this table for the dialect named by `dialect`
    pub fn generate_schema(&self, dialect: &str, fragment_only: bool) -> Result<String, SchemaError> {
        generate_schema(&self.name, &self.columns, dialect, fragment_only)
    }

    /// Get column names
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
}
