//! # optconf: table-optimization configuration generators
//!
//! Turns a flat list of `schema.table` identifiers into SQL that seeds the
//! configuration driving downstream table-optimization jobs.
//!
//! Two generators share one pipeline:
//!
//! - **Databricks**: one `INSERT INTO config_db.optimization_tasks (...)` row
//!   per table, with fixed defaults (daily runs, open-ended validity window).
//! - **BTEQ**: one skeleton script block per table. Its input list may also
//!   carry leading commas and `#` comments.
//!
//! ## Example
//!
//! ```text
//! $ cat tables.txt
//! finance_gl_bronze.t_sap_journal_entries_raw
//! sales_orders_silver.t_order_header_cleaned
//!
//! $ generate-databricks-optimize-config -i tables.txt -o out/optimize.sql
//! Found 2 tables. Generating Databricks statements...
//! Successfully created configuration SQL file: out/optimize.sql
//! ```
//!
//! Nothing here connects to a database; the output is text only.

pub mod table_ref;
pub mod error;
pub mod parser;
pub mod codegen;
pub mod config;
pub mod pipeline;
pub mod logging;

// Re-export key types
pub use table_ref::TableRef;
pub use error::{GeneratorError, TemplateError};
pub use parser::{LineFormat, LineError, ParsedList, SkippedLine, parse_line, parse_str, parse_table_list, read_table_list};
pub use codegen::{GeneratedStatement, generate_insert_statements, generate_bteq_skeletons, render_statements};
pub use config::GeneratorConfig;
pub use pipeline::{RunSummary, Variant, run};
