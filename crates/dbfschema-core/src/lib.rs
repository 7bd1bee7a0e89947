//! dbfschema core
//!
//! Renders xBase (dBase/FoxPro) column metadata as schema definitions for
//! ActiveRecord, Sequel, PostgreSQL, Snowflake and JSON.
//! Rendering is pure: no I/O, no shared state.

pub mod column;
pub mod config;
pub mod dialect;
pub mod dispatch;
pub mod error;
pub mod render;
pub mod table;
pub mod typemap;

pub use column::{Column, ColumnDescriptor, NativeType, UnknownCode};
pub use config::{Config, ConfigError};
pub use dialect::Dialect;
pub use dispatch::{generate_schema, render_schema, renderer_for};
pub use error::SchemaError;
pub use render::{RenderOptions, SchemaRenderer};
pub use table::Table;
pub use typemap::{map_column, map_type, CURRENCY_PRECISION, CURRENCY_SCALE};
