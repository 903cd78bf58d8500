//! generate-databricks-optimize-config - INSERT rows for the Databricks optimization config table
//!
//! Reads a `schema.table` list and writes one INSERT statement per table.

use clap::Parser;
use optconf::{GeneratorConfig, Variant};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "generate-databricks-optimize-config")]
#[command(version, about = "Generate Databricks optimization INSERT statements from a list of tables", long_about = None)]
struct Cli {
    /// Path to the input text file listing tables (format: schema.table)
    #[arg(short, long)]
    input: PathBuf,

    /// Path for the output SQL file containing INSERT statements
    #[arg(short, long)]
    output_sql: PathBuf,

    /// Optional YAML file with generator settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Target configuration table (overrides OPTCONF_CONFIG_TABLE and --config)
    #[arg(long)]
    config_table: Option<String>,

    /// Log per-statement details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    optconf::logging::init(cli.verbose);

    if let Err(e) = generate(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn generate(cli: Cli) -> Result<(), optconf::GeneratorError> {
    let config = GeneratorConfig::from_env(cli.config_table, cli.config.as_deref())?;

    let summary = optconf::run(Variant::Databricks, &cli.input, &cli.output_sql, &config)?;

    if summary.skipped_lines > 0 {
        println!("Skipped {} invalid lines (see warnings above).", summary.skipped_lines);
    }
    println!("Successfully created configuration SQL file: {}", cli.output_sql.display());
    Ok(())
}
