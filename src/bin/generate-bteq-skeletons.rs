//! generate-bteq-skeletons - BTEQ skeleton scripts from a table list
//!
//! Accepts `schema.table` entries, optionally with a leading `,` and trailing
//! `# comment`, and writes one skeleton block per table.

use clap::Parser;
use optconf::{GeneratorConfig, Variant};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "generate-bteq-skeletons")]
#[command(version, about = "Generate BTEQ skeleton scripts from a list of tables", long_about = None)]
struct Cli {
    /// Path to the input text file listing tables (format: schema.table)
    #[arg(short, long)]
    input: PathBuf,

    /// Path for the output file containing the BTEQ skeletons
    #[arg(short, long)]
    output_sql: PathBuf,

    /// Optional YAML file with generator settings
    #[arg(short, long)]
    config: Option<PathBuf>,

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
    let config = match cli.config.as_deref() {
        Some(path) => GeneratorConfig::from_file(path)?,
        None => GeneratorConfig::default(),
    };

    let summary = optconf::run(Variant::Bteq, &cli.input, &cli.output_sql, &config)?;

    if summary.skipped_lines > 0 {
        println!("Skipped {} invalid lines (see warnings above).", summary.skipped_lines);
    }
    println!("Successfully created BTEQ skeleton file: {}", cli.output_sql.display());
    Ok(())
}
