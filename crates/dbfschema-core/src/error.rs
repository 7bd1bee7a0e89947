//! Error types for schema generation

use crate::dialect::Dialect;

/// Errors raised while resolving a schema request
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// No renderer is registered for the requested dialect
    #[error("unsupported dialect '{dialect}'; valid dialects are: {}", .valid.join(", "))]
    UnsupportedDialect {
        dialect: String,
        valid: Vec<String>,
    },

    /// A column manifest could not be parsed
    #[error("invalid column manifest: {0}")]
    InvalidManifest(String),
}

impl SchemaError {
    /// Build an `UnsupportedDialect` error listing every valid identifier
    pub fn unsupported_dialect(dialect: impl Into<String>) -> Self {
        Self::UnsupportedDialect {
            dialect: dialect.into(),
            valid: Dialect::identifiers(),
        }
    }
}
