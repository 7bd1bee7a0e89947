//! Column descriptors and the xBase native type system

use serde::{Deserialize, Serialize};

use crate::dialect::Dialect;
use crate::typemap::map_type;

/// xBase field type, as stored in the table header
///
/// Each variant corresponds to the single-letter type code of the
/// dBase/FoxPro family. Codes this crate does not know are kept as
/// `Other` and render like `Character`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum NativeType {
    /// `N` - numeric stored as ASCII digits
    Numeric,

    /// `F` - floating point stored as ASCII digits
    Float,

    /// `I` - 32-bit binary integer
    Integer,

    /// `Y` - currency, 64-bit fixed point
    Currency,

    /// `D` - date (YYYYMMDD)
    Date,

    /// `T` - date and time
    DateTime,

    /// `L` - logical (T/F/Y/N/?)
    Logical,

    /// `M` - memo, stored in the companion memo file
    Memo,

    /// `B` - binary
    Binary,

    /// `C` - fixed-width character data
    Character,

    /// Any other type code (varchar, general, picture, ...)
    Other(UnknownCode),
}

/// A type code with no dedicated `NativeType` variant
///
/// Only built by [`NativeType::from_code`], so it never holds one of the
/// known letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnknownCode(char);

impl UnknownCode {
    /// The type code letter
    pub fn code(&self) -> char {
        self.0
    }
}

impl std::fmt::Display for UnknownCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl NativeType {
    /// Parse a type code letter; unknown letters become `Other`
    pub const fn from_code(code: char) -> Self {
        match code.to_ascii_uppercase() {
            'N' => Self::Numeric,
            'F' => Self::Float,
            'I' => Self::Integer,
            'Y' => Self::Currency,
            'D' => Self::Date,
            'T' => Self::DateTime,
            'L' => Self::Logical,
            'M' => Self::Memo,
            'B' => Self::Binary,
            'C' => Self::Character,
            other => Self::Other(UnknownCode(other)),
        }
    }

    /// The single-letter type code
    pub fn code(&self) -> char {
        match self {
            Self::Numeric => 'N',
            Self::Float => 'F',
            Self::Integer => 'I',
            Self::Currency => 'Y',
            Self::Date => 'D',
            Self::DateTime => 'T',
            Self::Logical => 'L',
            Self::Memo => 'M',
            Self::Binary => 'B',
            Self::Character => 'C',
            Self::Other(unknown) => unknown.code(),
        }
    }
}

impl std::fmt::Display for NativeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<NativeType> for String {
    fn from(native_type: NativeType) -> Self {
        native_type.code().to_string()
    }
}

impl TryFrom<String> for NativeType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let mut chars = value.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(code), None) => Ok(Self::from_code(code)),
            _ => Err(format!("expected a single-letter type code, got '{}'", value)),
        }
    }
}

/// A column of an xBase table
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Column {
    /// Column name as stored in the header
    pub name: String,

    /// Native type code
    #[serde(rename = "type")]
    pub native_type: NativeType,

    /// Field length in bytes
    #[serde(default)]
    pub length: u32,

    /// Number of decimal places
    #[serde(default, rename = "decimal")]
    pub decimal_count: u32,
}

impl Column {
    /// Create a new column with zero length and no decimals
    pub fn new(name: impl Into<String>, native_type: NativeType) -> Self {
        Self {
            name: name.into(),
            native_type,
            length: 0,
            decimal_count: 0,
        }
    }

    /// Set field length
    pub fn with_length(mut self, length: u32) -> Self {
        self.length = length;
        self
    }

    /// Set decimal count
    pub fn with_decimal_count(mut self, decimal_count: u32) -> Self {
        self.decimal_count = decimal_count;
        self
    }

    /// Lower-case, underscore-separated form of the column name
    ///
    /// Names with no letters or digits (`"__"`, `" - "`, `""`) become
    /// `"column"` so every field declaration has an identifier.
    pub fn underscored_name(&self) -> String {
        let name = underscore(&self.name);
        if name.is_empty() {
            return String::from("column");
        }
        name
    }

    /// Structural description used by the JSON export
    pub fn to_descriptor(&self) -> ColumnDescriptor {
        ColumnDescriptor {
            name: self.name.clone(),
            type_name: map_type(self.native_type, self.decimal_count, self.length, Dialect::Json),
            native_type: self.native_type,
            length: self.length,
            decimal: self.decimal_count,
        }
    }
}

/// Serializable per-column record emitted by the JSON dialect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Original column name
    pub name: String,

    /// Portable type expression
    #[serde(rename = "type")]
    pub type_name: String,

    /// Native type code
    pub native_type: NativeType,

    /// Field length in bytes
    pub length: u32,

    /// Number of decimal places
    pub decimal: u32,
}

/// Convert `CamelCase`, spaced or dashed names to `snake_case`
fn underscore(name: &str) -> String {
    let chars: Vec<char> = name.trim().chars().collect();
    let mut out = String::with_capacity(chars.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == ' ' || c == '-' || c == '_' {
            push_separator(&mut out);
            continue;
        }

        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());

            // fooBar, foo2Bar, and the last capital of an acronym in HTMLParser
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower) {
                push_separator(&mut out);
            }
        }

        out.extend(c.to_lowercase());
    }

    while out.ends_with('_') {
        out.pop();
    }

    out
}

fn push_separator(out: &mut String) {
    if !out.is_empty() && !out.ends_with('_') {
        out.push('_');
    }
}
