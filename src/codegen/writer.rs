//! Write rendered statements to the output SQL file.

use super::fs_utils::ensure_parent_dir;
use crate::error::GeneratorError;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Fixed two-line header written before the statements.
#[derive(Debug, Clone, Copy)]
pub struct Header<'a> {
    pub title: &'a str,
    pub generated_by: &'a str,
}

/// Write the header and every statement, each followed by a blank line.
pub fn write_statements<W: Write>(
    out: &mut W,
    header: Header<'_>,
    statements: &[String],
) -> io::Result<()> {
    writeln!(out, "-- Generated {}", header.title)?;
    writeln!(out, "-- Generated by: {}\n", header.generated_by)?;

    for stmt in statements {
        writeln!(out, "{}\n", stmt)?;
    }
    Ok(())
}

/// Write the output file, overwriting any existing content.
///
/// Partial output is left in place if a write fails midway.
pub fn write_output_sql<P: AsRef<Path>>(
    statements: &[String],
    output_path: P,
    header: Header<'_>,
) -> Result<(), GeneratorError> {
    let path = output_path.as_ref();
    let io_err = |source: io::Error| GeneratorError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    if ensure_parent_dir(path).map_err(io_err)? {
        if let Some(parent) = path.parent() {
            println!("Created output directory: {}", parent.display());
        }
    }

    let file = File::create(path).map_err(io_err)?;
    let mut out = BufWriter::new(file);
    write_statements(&mut out, header, statements).map_err(io_err)?;
    out.flush().map_err(io_err)?;

    tracing::debug!("Wrote {} statements to {}", statements.len(), path.display());
    Ok(())
}
