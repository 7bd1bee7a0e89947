//! Dialect dispatch
//!
//! The only place a dialect identifier is validated. Renderers behind
//! `renderer_for` trust the resolved `Dialect`.

use crate::column::{Column, NativeType};
use crate::dialect::Dialect;
use crate::error::SchemaError;
use crate::render::{
    ActiveRecordRenderer, JsonRenderer, RenderOptions, SchemaRenderer, SequelRenderer, SqlRenderer,
};

static ACTIVERECORD: ActiveRecordRenderer = ActiveRecordRenderer;
static SEQUEL: SequelRenderer = SequelRenderer;
static POSTGRESQL: SqlRenderer = SqlRenderer::POSTGRESQL;
static SNOWFLAKE: SqlRenderer = SqlRenderer::SNOWFLAKE;
static JSON: JsonRenderer = JsonRenderer;

/// Renderer registered for `dialect`
pub fn renderer_for(dialect: Dialect) -> &'static dyn SchemaRenderer {
    match dialect {
        Dialect::ActiveRecord => &ACTIVERECORD,
        Dialect::Sequel => &SEQUEL,
        Dialect::Postgresql => &POSTGRESQL,
        Dialect::Snowflake => &SNOWFLAKE,
        Dialect::Json => &JSON,
    }
}

/// Render a schema for an already-resolved dialect
pub fn render_schema(
    table_name: &str,
    columns: &[Column],
    dialect: Dialect,
    options: RenderOptions,
) -> String {
    tracing::debug!(
        table = table_name,
        %dialect,
        columns = columns.len(),
        fragment_only = options.fragment_only,
        "rendering schema"
    );

    for column in columns {
        if let NativeType::Other(code) = column.native_type {
            tracing::warn!(
                column = %column.name,
                code = %code,
                "unknown native type code, rendering as character"
            );
        }
    }

    renderer_for(dialect).render(table_name, columns, options)
}

/// Generate a schema for the dialect named by `dialect`
///
/// Fails with [`SchemaError::UnsupportedDialect`] before rendering
/// anything when the identifier is not registered.
pub fn generate_schema(
    table_name: &str,
    columns: &[Column],
    dialect: &str,
    fragment_only: bool,
) -> Result<String, SchemaError> {
    let dialect: Dialect = dialect.parse()?;
    Ok(render_schema(table_name, columns, dialect, RenderOptions { fragment_only }))
}
