//! Table list parsing.
//!
//! Input files hold one `schema.table` entry per line. Two line formats are
//! understood:
//!
//! - [`LineFormat::Plain`]: blank lines are ignored, every other line must be
//!   `schema.table`.
//! - [`LineFormat::Bteq`]: additionally tolerates a leading `,` (lists pasted
//!   from a SQL column list), a trailing `# comment`, and full-line `#`
//!   comments.
//!
//! Malformed lines are reported with their 1-based line number and skipped;
//! they never abort parsing.

use crate::error::GeneratorError;
use crate::table_ref::TableRef;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Line syntax accepted by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineFormat {
    Plain,
    Bteq,
}

/// Why a line was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineError {
    /// No `.` anywhere in the entry
    MissingSeparator,
    /// Schema or table is empty (leading dot, trailing dot, blank side)
    EmptySegment,
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineError::MissingSeparator => write!(f, "missing '.'"),
            LineError::EmptySegment => write!(f, "format error"),
        }
    }
}

/// A line that was skipped, kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub line_number: usize,
    pub raw: String,
    pub error: LineError,
}

/// Result of parsing a whole list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedList {
    /// Accepted entries in input order, duplicates included
    pub tables: Vec<TableRef>,
    pub skipped: Vec<SkippedLine>,
}

impl ParsedList {
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

/// Parse a single line.
///
/// Returns `Ok(None)` for lines that carry no entry (blank, comment) and
/// `Err` for lines that should have been an entry but are malformed.
pub fn parse_line(line: &str, format: LineFormat) -> Result<Option<TableRef>, LineError> {
    let mut entry = line.trim();
    if entry.is_empty() {
        return Ok(None);
    }

    if format == LineFormat::Bteq {
        if entry.starts_with('#') {
            return Ok(None);
        }
        if let Some(rest) = entry.strip_prefix(',') {
            entry = rest;
        }
        if let Some(idx) = entry.find('#') {
            entry = &entry[..idx];
        }
        entry = entry.trim();
        if entry.is_empty() {
            return Ok(None);
        }
    }

    // Split once: `a.b.c` is schema `a`, table `b.c`.
    let (schema, table) = entry
        .split_once('.')
        .ok_or(LineError::MissingSeparator)?;

    if entry.ends_with('.') {
        return Err(LineError::EmptySegment);
    }

    let (schema, table) = (schema.trim(), table.trim());
    if schema.is_empty() || table.is_empty() {
        return Err(LineError::EmptySegment);
    }

    Ok(Some(TableRef::new(schema, table)))
}

/// Parse the full contents of a list file, logging a warning per skipped line.
pub fn parse_str(contents: &str, format: LineFormat) -> ParsedList {
    let contents = contents.strip_prefix('\u{feff}').unwrap_or(contents);
    let mut parsed = ParsedList::default();

    for (idx, line) in contents.lines().enumerate() {
        let line_number = idx + 1;
        match parse_line(line, format) {
            Ok(Some(table)) => parsed.tables.push(table),
            Ok(None) => {}
            Err(error) => {
                tracing::warn!(
                    "Skipping invalid line {} ({}): {}",
                    line_number,
                    error,
                    line.trim()
                );
                parsed.skipped.push(SkippedLine {
                    line_number,
                    raw: line.to_string(),
                    error,
                });
            }
        }
    }

    parsed
}

/// Read and parse a list file.
///
/// A missing file is reported as [`GeneratorError::InputNotFound`], any other
/// read failure as [`GeneratorError::InputRead`].
pub fn read_table_list<P: AsRef<Path>>(
    path: P,
    format: LineFormat,
) -> Result<ParsedList, GeneratorError> {
    let path = path.as_ref();

    let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => GeneratorError::InputNotFound(path.to_path_buf()),
        _ => GeneratorError::InputRead {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    Ok(parse_str(&contents, format))
}

/// Parse a list file into table references.
///
/// File-level failures are logged and yield an empty list; deciding whether
/// that aborts the run is left to the caller.
pub fn parse_table_list<P: AsRef<Path>>(path: P, format: LineFormat) -> Vec<TableRef> {
    match read_table_list(path, format) {
        Ok(parsed) => parsed.tables,
        Err(e) => {
            tracing::error!("{}", e);
            Vec::new()
        }
    }
}
