//! Integration tests for schema generation

use dbfschema_core::{
    generate_schema, render_schema, Column, ColumnDescriptor, Dialect, NativeType, RenderOptions,
    SchemaError, Table,
};
use pretty_assertions::assert_eq;

fn people() -> Vec<Column> {
    vec![
        Column::new("First Name", NativeType::Character).with_length(30),
        Column::new("Age", NativeType::Numeric).with_length(3),
    ]
}

fn every_type() -> Vec<Column> {
    vec![
        Column::new("ID", NativeType::Integer).with_length(4),
        Column::new("Price", NativeType::Numeric).with_length(10).with_decimal_count(2),
        Column::new("Rate", NativeType::Float).with_length(12).with_decimal_count(4),
        Column::new("Balance", NativeType::Currency).with_length(8).with_decimal_count(2),
        Column::new("BirthDate", NativeType::Date).with_length(8),
        Column::new("UpdatedAt", NativeType::DateTime).with_length(8),
        Column::new("Active", NativeType::Logical).with_length(1),
        Column::new("Notes", NativeType::Memo).with_length(10),
        Column::new("Photo", NativeType::Binary).with_length(10),
        Column::new("Email", NativeType::Character).with_length(60),
        Column::new("Nickname", NativeType::from_code('V')).with_length(20),
    ]
}

#[test]
fn activerecord_people() {
    let schema = generate_schema("people", &people(), "activerecord", false).unwrap();

    let expected = r#"ActiveRecord::Schema.define do
  create_table "people" do |t|
    t.column "first_name", :string, :limit => 30
    t.column "age", :integer
  end
end
"#;
    assert_eq!(schema, expected);
}

#[test]
fn sequel_every_type() {
    let schema = generate_schema("catalog", &every_type(), "sequel", false).unwrap();

    let expected = r#"Sequel.migration do
  change do
    create_table(:catalog) do
      column :id, :integer
      column :price, :float
      column :rate, :float
      column :balance, :decimal, :precision => 15, :scale => 4
      column :birth_date, :date
      column :updated_at, :datetime
      column :active, :boolean
      column :notes, :text
      column :photo, :binary
      column :email, :varchar, :size => 60
      column :nickname, :varchar, :size => 20
    end
  end
end
"#;
    assert_eq!(schema, expected);
}

#[test]
fn postgresql_every_type() {
    let schema = generate_schema("catalog", &every_type(), "postgresql", false).unwrap();

    let expected = r#"CREATE TABLE catalog (
  id INTEGER,
  price DOUBLE PRECISION,
  rate DOUBLE PRECISION,
  balance NUMERIC(15, 4),
  birth_date DATE,
  updated_at TIMESTAMP WITH TIME ZONE,
  active BOOLEAN,
  notes TEXT,
  photo BYTEA,
  email VARCHAR(60),
  nickname VARCHAR(20),
);
"#;
    assert_eq!(schema, expected);
}

#[test]
fn snowflake_every_type() {
    let schema = generate_schema("catalog", &every_type(), "snowflake", false).unwrap();

    let expected = r#"CREATE OR REPLACE TABLE catalog (
  id INTEGER,
  price FLOAT,
  rate FLOAT,
  balance NUMBER(15, 4),
  birth_date DATE,
  updated_at TIMESTAMP_NTZ,
  active BOOLEAN,
  notes TEXT,
  photo BINARY,
  email VARCHAR(60),
  nickname VARCHAR(20),
);
"#;
    assert_eq!(schema, expected);
}

#[test]
fn sql_fragment_is_two_field_lines() {
    let schema = generate_schema("people", &people(), "postgresql", true).unwrap();
    assert_eq!(schema, "  first_name VARCHAR(30),\n  age INTEGER,\n");

    let lines: Vec<&str> = schema.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|line| line.ends_with(',')));
}

#[test]
fn json_export() {
    let schema = generate_schema("people", &people(), "json", false).unwrap();

    assert_eq!(
        schema,
        r#"[{"name":"First Name","type":"string(30)","native_type":"C","length":30,"decimal":0},{"name":"Age","type":"integer","native_type":"N","length":3,"decimal":0}]"#
    );

    // The fragment flag does not change the export.
    assert_eq!(schema, generate_schema("people", &people(), "json", true).unwrap());
}

#[test]
fn currency_scale_is_four_everywhere() {
    let columns = vec![Column::new("Amount", NativeType::Currency).with_length(8).with_decimal_count(2)];

    for dialect in Dialect::ALL {
        let schema = render_schema("ledger", &columns, dialect, RenderOptions::default());
        assert!(schema.contains('4'), "{}: {}", dialect, schema);
        assert!(schema.contains("15"), "{}: {}", dialect, schema);
        assert!(!schema.contains(", 2") && !schema.contains("=> 2"), "{}: {}", dialect, schema);
    }
}

#[test]
fn column_order_is_preserved() {
    let columns = every_type();

    for dialect in Dialect::ALL.into_iter().filter(|d| *d != Dialect::Json) {
        let header_lines = match dialect {
            Dialect::ActiveRecord => 2,
            Dialect::Sequel => 3,
            _ => 1,
        };

        let schema = render_schema("catalog", &columns, dialect, RenderOptions::default());
        let field_lines: Vec<&str> = schema.lines().skip(header_lines).take(columns.len()).collect();

        assert_eq!(field_lines.len(), columns.len(), "{}", dialect);
        for (line, column) in field_lines.iter().zip(&columns) {
            assert!(line.contains(&column.underscored_name()), "{}: {}", dialect, line);
        }
    }

    let json = render_schema("catalog", &columns, Dialect::Json, RenderOptions::default());
    let parsed: Vec<ColumnDescriptor> = serde_json::from_str(&json).unwrap();
    let parsed_names: Vec<&str> = parsed.iter().map(|d| d.name.as_str()).collect();
    let column_names: Vec<&str> = columns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(parsed_names, column_names);
}

#[test]
fn fragment_preserves_field_lines() {
    for dialect in Dialect::ALL.into_iter().filter(Dialect::supports_fragment) {
        let full = render_schema("catalog", &every_type(), dialect, RenderOptions::default());
        let fragment = render_schema("catalog", &every_type(), dialect, RenderOptions::fragment());

        assert_ne!(full, fragment, "{}", dialect);
        assert!(full.contains(&fragment), "{}", dialect);
        assert_eq!(fragment.lines().count(), every_type().len(), "{}", dialect);
    }
}

#[test]
fn unsupported_dialect_has_no_output() {
    let result = generate_schema("people", &people(), "access", false);

    match result {
        Err(SchemaError::UnsupportedDialect { dialect, valid }) => {
            assert_eq!(dialect, "access");
            assert_eq!(valid, vec!["activerecord", "sequel", "postgresql", "snowflake", "json"]);
        }
        other => panic!("expected UnsupportedDialect, got {:?}", other),
    }
}

#[test]
fn unknown_native_type_matches_character() {
    let unknown = vec![Column::new("Code", NativeType::from_code('G')).with_length(15)];
    let character = vec![Column::new("Code", NativeType::Character).with_length(15)];

    for dialect in Dialect::ALL.into_iter().filter(|d| *d != Dialect::Json) {
        assert_eq!(
            render_schema("t", &unknown, dialect, RenderOptions::default()),
            render_schema("t", &character, dialect, RenderOptions::default())
        );
    }
}

#[test]
fn manifest_to_schema() {
    let manifest = r#"{
        "columns": [
            {"name": "First Name", "type": "C", "length": 30},
            {"name": "Age", "type": "N", "length": 3, "decimal": 0}
        ]
    }"#;

    let table = Table::from_manifest_json(manifest, "people").unwrap();
    let schema = table.generate_schema(":activerecord", false).unwrap();

    assert_eq!(schema, generate_schema("people", &people(), "activerecord", false).unwrap());
}
