//! Native type to dialect type mapping
//!
//! The intent of each rule is the same in every dialect; only the spelling
//! differs:
//!
//! - N/F/I with decimals map to a floating point type, otherwise to integer
//! - Y maps to a fixed-point decimal with precision 15 and scale 4
//! - D, T, L, M and B map to date, timestamp, boolean, text and binary
//! - everything else, including unknown codes, is length-bounded text

use crate::column::{Column, NativeType};
use crate::dialect::Dialect;

/// Precision of the fixed-point type used for currency columns
pub const CURRENCY_PRECISION: u32 = 15;

/// Scale of the fixed-point type used for currency columns
///
/// Currency is stored as a 64-bit integer scaled by 10^4, so the scale is
/// constant regardless of the decimal count in the header.
pub const CURRENCY_SCALE: u32 = 4;

/// Map a native type to the type expression of `dialect`
///
/// Never fails: codes without a dedicated rule use the string rule.
pub fn map_type(native_type: NativeType, decimal_count: u32, length: u32, dialect: Dialect) -> String {
    match native_type {
        NativeType::Numeric | NativeType::Float | NativeType::Integer => {
            number_type(decimal_count > 0, dialect).to_string()
        }
        NativeType::Currency => currency_type(dialect),
        NativeType::Date => date_type(dialect).to_string(),
        NativeType::DateTime => datetime_type(dialect).to_string(),
        NativeType::Logical => boolean_type(dialect).to_string(),
        NativeType::Memo => text_type(dialect).to_string(),
        NativeType::Binary => binary_type(dialect).to_string(),
        NativeType::Character | NativeType::Other(_) => string_type(length, dialect),
    }
}

/// Map a column to the type expression of `dialect`
pub fn map_column(column: &Column, dialect: Dialect) -> String {
    map_type(column.native_type, column.decimal_count, column.length, dialect)
}

fn number_type(has_decimals: bool, dialect: Dialect) -> &'static str {
    match (dialect, has_decimals) {
        (Dialect::ActiveRecord | Dialect::Sequel, true) => ":float",
        (Dialect::ActiveRecord | Dialect::Sequel, false) => ":integer",
        (Dialect::Postgresql, true) => "DOUBLE PRECISION",
        (Dialect::Snowflake, true) => "FLOAT",
        (Dialect::Postgresql | Dialect::Snowflake, false) => "INTEGER",
        (Dialect::Json, true) => "float",
        (Dialect::Json, false) => "integer",
    }
}

fn currency_type(dialect: Dialect) -> String {
    let (p, s) = (CURRENCY_PRECISION, CURRENCY_SCALE);
    match dialect {
        Dialect::ActiveRecord | Dialect::Sequel => {
            format!(":decimal, :precision => {}, :scale => {}", p, s)
        }
        Dialect::Postgresql => format!("NUMERIC({}, {})", p, s),
        Dialect::Snowflake => format!("NUMBER({}, {})", p, s),
        Dialect::Json => format!("decimal({}, {})", p, s),
    }
}

fn date_type(dialect: Dialect) -> &'static str {
    match dialect {
        Dialect::ActiveRecord | Dialect::Sequel => ":date",
        Dialect::Postgresql | Dialect::Snowflake => "DATE",
        Dialect::Json => "date",
    }
}

fn datetime_type(dialect: Dialect) -> &'static str {
    match dialect {
        Dialect::ActiveRecord | Dialect::Sequel => ":datetime",
        Dialect::Postgresql => "TIMESTAMP WITH TIME ZONE",
        Dialect::Snowflake => "TIMESTAMP_NTZ",
        Dialect::Json => "datetime",
    }
}

fn boolean_type(dialect: Dialect) -> &'static str {
    match dialect {
        Dialect::ActiveRecord | Dialect::Sequel => ":boolean",
        Dialect::Postgresql | Dialect::Snowflake => "BOOLEAN",
        Dialect::Json => "boolean",
    }
}

fn text_type(dialect: Dialect) -> &'static str {
    match dialect {
        Dialect::ActiveRecord | Dialect::Sequel => ":text",
        Dialect::Postgresql | Dialect::Snowflake => "TEXT",
        Dialect::Json => "text",
    }
}

fn binary_type(dialect: Dialect) -> &'static str {
    match dialect {
        Dialect::ActiveRecord | Dialect::Sequel => ":binary",
        Dialect::Postgresql => "BYTEA",
        Dialect::Snowflake => "BINARY",
        Dialect::Json => "binary",
    }
}

fn string_type(length: u32, dialect: Dialect) -> String {
    match dialect {
        Dialect::ActiveRecord => format!(":string, :limit => {}", length),
        Dialect::Sequel => format!(":varchar, :size => {}", length),
        Dialect::Postgresql | Dialect::Snowflake => format!("VARCHAR({})", length),
        Dialect::Json => format!("string({})", length),
    }
}
