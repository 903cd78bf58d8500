//! Error types for the generators.

use std::fmt;
use std::path::PathBuf;

/// Error raised while filling a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A `{name}` placeholder had no value supplied
    UnknownPlaceholder(String),
    /// A `{` with no closing `}`, or a stray `}`
    Unbalanced { offset: usize },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::UnknownPlaceholder(name) => {
                write!(f, "No value supplied for placeholder '{{{}}}'", name)
            }
            TemplateError::Unbalanced { offset } => {
                write!(f, "Unbalanced brace in template at byte {}", offset)
            }
        }
    }
}

impl std::error::Error for TemplateError {}

/// File-level failures that abort a generator run.
///
/// Per-line problems are not errors at this level; they are logged and the
/// line is skipped (see [`crate::parser::LineError`]).
#[derive(Debug)]
pub enum GeneratorError {
    InputNotFound(PathBuf),
    InputRead {
        path: PathBuf,
        source: std::io::Error,
    },
    NoValidRows(PathBuf),
    Template(TemplateError),
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },
    Config(String),
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorError::InputNotFound(path) => {
                write!(f, "Input file not found at {}", path.display())
            }
            GeneratorError::InputRead { path, source } => {
                write!(f, "Could not read file {}. Details: {}", path.display(), source)
            }
            GeneratorError::NoValidRows(path) => {
                write!(f, "No valid tables found in {}", path.display())
            }
            GeneratorError::Template(e) => write!(f, "Template error: {}", e),
            GeneratorError::OutputWrite { path, source } => {
                write!(f, "Could not write output file {}. Details: {}", path.display(), source)
            }
            GeneratorError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for GeneratorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeneratorError::InputRead { source, .. } => Some(source),
            GeneratorError::OutputWrite { source, .. } => Some(source),
            GeneratorError::Template(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TemplateError> for GeneratorError {
    fn from(e: TemplateError) -> Self {
        GeneratorError::Template(e)
    }
}
