//! Parse → render → write driver shared by both generator binaries.

use crate::codegen::render::render_statements;
use crate::codegen::templates::{BTEQ_HEADER_TITLE, DATABRICKS_HEADER_TITLE};
use crate::codegen::writer::{write_output_sql, Header};
use crate::config::GeneratorConfig;
use crate::error::GeneratorError;
use crate::parser::{read_table_list, LineFormat};
use std::fmt;
use std::path::Path;

/// Which generator is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Per-table BTEQ skeleton scripts
    Bteq,
    /// Rows for the Databricks optimization config table
    Databricks,
}

impl Variant {
    pub fn line_format(self) -> LineFormat {
        match self {
            Variant::Bteq => LineFormat::Bteq,
            Variant::Databricks => LineFormat::Plain,
        }
    }

    pub fn header_title(self) -> &'static str {
        match self {
            Variant::Bteq => BTEQ_HEADER_TITLE,
            Variant::Databricks => DATABRICKS_HEADER_TITLE,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Bteq => write!(f, "BTEQ"),
            Variant::Databricks => write!(f, "Databricks"),
        }
    }
}

/// Summary of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub tables: usize,
    pub skipped_lines: usize,
}

/// Run one generator end to end.
///
/// Nothing is written unless at least one valid table was parsed.
pub fn run(
    variant: Variant,
    input: &Path,
    output: &Path,
    config: &GeneratorConfig,
) -> Result<RunSummary, GeneratorError> {
    let parsed = read_table_list(input, variant.line_format())?;
    if parsed.is_empty() {
        return Err(GeneratorError::NoValidRows(input.to_path_buf()));
    }

    println!("Found {} tables. Generating {} statements...", parsed.tables.len(), variant);

    let statements = render_statements(variant, &parsed.tables, config)?;

    let header = Header {
        title: variant.header_title(),
        generated_by: &config.generated_by,
    };
    write_output_sql(&statements, output, header)?;

    Ok(RunSummary {
        tables: parsed.tables.len(),
        skipped_lines: parsed.skipped.len(),
    })
}
