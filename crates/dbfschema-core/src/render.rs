//! Per-dialect schema renderers
//!
//! Every renderer turns a table name and an ordered column list into a
//! complete schema document. Field declarations always appear in column
//! order, one per line, using the underscored column name.

use crate::column::{Column, ColumnDescriptor};
use crate::dialect::Dialect;
use crate::typemap::map_column;

/// Options shared by all renderers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit only the column definitions, without the surrounding document
    pub fragment_only: bool,
}

impl RenderOptions {
    /// Options for rendering just the column definitions
    pub fn fragment() -> Self {
        Self { fragment_only: true }
    }
}

/// Renders a schema document for one dialect
///
/// Renderers assume the dialect is already resolved and never fail.
pub trait SchemaRenderer: Send + Sync {
    /// The dialect this renderer produces
    fn dialect(&self) -> Dialect;

    /// Render the schema for `table_name`
    fn render(&self, table_name: &str, columns: &[Column], options: RenderOptions) -> String;
}

/// `ActiveRecord::Schema.define` block; has no fragment form
#[derive(Debug, Clone, Copy, Default)]
pub struct ActiveRecordRenderer;

impl SchemaRenderer for ActiveRecordRenderer {
    fn dialect(&self) -> Dialect {
        Dialect::ActiveRecord
    }

    fn render(&self, table_name: &str, columns: &[Column], _options: RenderOptions) -> String {
        let mut s = String::from("ActiveRecord::Schema.define do\n");
        s.push_str(&format!("  create_table \"{}\" do |t|\n", table_name));
        for column in columns {
            s.push_str(&format!(
                "    t.column \"{}\", {}\n",
                column.underscored_name(),
                map_column(column, Dialect::ActiveRecord)
            ));
        }
        s.push_str("  end\n");
        s.push_str("end\n");
        s
    }
}

/// `Sequel.migration` with a `create_table` block
#[derive(Debug, Clone, Copy, Default)]
pub struct SequelRenderer;

impl SchemaRenderer for SequelRenderer {
    fn dialect(&self) -> Dialect {
        Dialect::Sequel
    }

    fn render(&self, table_name: &str, columns: &[Column], options: RenderOptions) -> String {
        let fields: String = columns
            .iter()
            .map(|column| {
                format!(
                    "      column :{}, {}\n",
                    column.underscored_name(),
                    map_column(column, Dialect::Sequel)
                )
            })
            .collect();

        if options.fragment_only {
            return fields;
        }

        let mut s = String::from("Sequel.migration do\n");
        s.push_str("  change do\n");
        s.push_str(&format!("    create_table(:{}) do\n", table_name));
        s.push_str(&fields);
        s.push_str("    end\n");
        s.push_str("  end\n");
        s.push_str("end\n");
        s
    }
}

/// `CREATE TABLE` statement for a SQL dialect
///
/// Every field line ends with a comma, the last one included, so fragment
/// lines are byte-identical to the lines of the full statement. Strip the
/// final comma before running the full statement on PostgreSQL or Snowflake.
#[derive(Debug, Clone, Copy)]
pub struct SqlRenderer {
    dialect: Dialect,
    create_keyword: &'static str,
}

impl SqlRenderer {
    /// PostgreSQL: `CREATE TABLE`
    pub const POSTGRESQL: SqlRenderer = SqlRenderer {
        dialect: Dialect::Postgresql,
        create_keyword: "CREATE TABLE",
    };

    /// Snowflake: `CREATE OR REPLACE TABLE`
    pub const SNOWFLAKE: SqlRenderer = SqlRenderer {
        dialect: Dialect::Snowflake,
        create_keyword: "CREATE OR REPLACE TABLE",
    };
}

impl SchemaRenderer for SqlRenderer {
    fn dialect(&self) -> Dialect {
        self.dialect
    }

    fn render(&self, table_name: &str, columns: &[Column], options: RenderOptions) -> String {
        let fields: String = columns
            .iter()
            .map(|column| {
                format!(
                    "  {} {},\n",
                    column.underscored_name(),
                    map_column(column, self.dialect)
                )
            })
            .collect();

        if options.fragment_only {
            return fields;
        }

        format!("{} {} (\n{});\n", self.create_keyword, table_name, fields)
    }
}

/// JSON array of column descriptors; the fragment flag has no effect
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl SchemaRenderer for JsonRenderer {
    fn dialect(&self) -> Dialect {
        Dialect::Json
    }

    fn render(&self, _table_name: &str, columns: &[Column], _options: RenderOptions) -> String {
        let descriptors: Vec<ColumnDescriptor> = columns.iter().map(Column::to_descriptor).collect();

        // Plain structs of strings and integers always serialize.
        serde_json::to_string(&descriptors).unwrap_or_else(|e| {
            tracing::error!(error = %e, "failed to serialize column descriptors");
            String::from("[]")
        })
    }
}
