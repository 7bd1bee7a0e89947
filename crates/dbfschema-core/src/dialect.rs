//! Supported output dialects

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::SchemaError;

/// Target schema format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Dialect {
    /// ActiveRecord `Schema.define` block
    ActiveRecord,

    /// Sequel migration
    Sequel,

    /// PostgreSQL DDL
    Postgresql,

    /// Snowflake DDL
    Snowflake,

    /// JSON array of column descriptors
    Json,
}

impl Dialect {
    /// Every supported dialect, in the order they are listed to users
    pub const ALL: [Dialect; 5] = [
        Dialect::ActiveRecord,
        Dialect::Sequel,
        Dialect::Postgresql,
        Dialect::Snowflake,
        Dialect::Json,
    ];

    /// Stable identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ActiveRecord => "activerecord",
            Self::Sequel => "sequel",
            Self::Postgresql => "postgresql",
            Self::Snowflake => "snowflake",
            Self::Json => "json",
        }
    }

    /// Identifiers of every supported dialect
    pub fn identifiers() -> Vec<String> {
        Self::ALL.iter().map(|d| d.as_str().to_string()).collect()
    }

    /// Whether the dialect has a fragment form distinct from its full document
    pub fn supports_fragment(&self) -> bool {
        matches!(self, Self::Sequel | Self::Postgresql | Self::Snowflake)
    }
}

impl Default for Dialect {
    fn default() -> Self {
        Self::ActiveRecord
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<Dialect> for String {
    fn from(dialect: Dialect) -> Self {
        dialect.as_str().to_string()
    }
}

impl TryFrom<String> for Dialect {
    type Error = SchemaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl FromStr for Dialect {
    type Err = SchemaError;

    /// Accepts identifiers case-insensitively, with or without a leading `:`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        let key = key.strip_prefix(':').unwrap_or(key);

        Self::ALL
            .iter()
            .copied()
            .find(|d| d.as_str().eq_ignore_ascii_case(key))
            .ok_or_else(|| SchemaError::unsupported_dialect(s))
    }
}
