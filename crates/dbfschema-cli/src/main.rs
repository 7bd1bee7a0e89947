use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use dbfschema_core::{Config, Dialect, Table};

/// dbfschema - Generate schema definitions from dBase column metadata
#[derive(Parser)]
#[command(name = "dbfschema")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to config file (default: dbfschema.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the schema for a column manifest
    Generate {
        /// JSON column manifest exported from a .dbf header
        manifest: PathBuf,

        /// Output dialect (activerecord, sequel, postgresql, snowflake, json)
        #[arg(short, long)]
        dialect: Option<String>,

        /// Emit only the column definitions
        #[arg(long, overrides_with = "no_fragment_only")]
        fragment_only: bool,

        /// Emit the full document even if the config sets fragment_only
        #[arg(long, overrides_with = "fragment_only")]
        no_fragment_only: bool,

        /// Table name (default: manifest name, then manifest file stem)
        #[arg(short, long)]
        table: Option<String>,
    },

    /// List supported dialects
    Dialects,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref(), cli.verbose)?;

    if cli.verbose {
        eprintln!("{} dialect: {}", "Using".cyan(), config.dialect);
    }

    match cli.command {
        Commands::Generate {
            manifest,
            dialect,
            fragment_only,
            no_fragment_only,
            table,
        } => {
            let fragment_only = match (fragment_only, no_fragment_only) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            generate_command(&config, &manifest, dialect.as_deref(), fragment_only, table)
        }
        Commands::Dialects => {
            dialects_command(&config);
            Ok(())
        }
    }
}

/// Explicit --config, then ./dbfschema.toml, then defaults
fn load_config(path: Option<&Path>, verbose: bool) -> Result<Config> {
    if let Some(path) = path {
        return Config::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()));
    }

    let local = Path::new("dbfschema.toml");
    if local.exists() {
        return Config::from_file(local).context("failed to load dbfschema.toml");
    }

    if verbose {
        eprintln!("{}", "No config file found, using defaults".yellow());
    }
    Ok(Config::default())
}

/// Generate command - render one manifest to stdout
///
/// `fragment_only` from the command line wins over the config file.
fn generate_command(
    config: &Config,
    manifest: &Path,
    dialect: Option<&str>,
    fragment_only: Option<bool>,
    table_name: Option<String>,
) -> Result<()> {
    let json = std::fs::read_to_string(manifest)
        .with_context(|| format!("failed to read manifest {}", manifest.display()))?;

    let default_name = Table::name_from_path(manifest).unwrap_or_else(|| "table".to_string());
    let mut table = Table::from_manifest_json(&json, &default_name)?;
    if let Some(name) = table_name {
        table.name = name;
    }

    let dialect = dialect.unwrap_or(config.dialect.as_str());
    let mut options = config.render_options();
    if let Some(fragment_only) = fragment_only {
        options.fragment_only = fragment_only;
    }

    tracing::info!(
        table = %table.name,
        dialect,
        columns = ?table.column_names(),
        fragment_only = options.fragment_only,
        "generating schema"
    );

    let schema = table.generate_schema(dialect, options.fragment_only)?;
    print!("{}", schema);
    if !schema.ends_with('\n') {
        println!();
    }

    Ok(())
}

/// Dialects command - list identifiers, marking the configured default
fn dialects_command(config: &Config) {
    for dialect in Dialect::ALL {
        if dialect == config.dialect {
            println!("{} {}", dialect.as_str().green().bold(), "(default)".dimmed());
        } else {
            println!("{}", dialect.as_str());
        }
    }
}
