//! SQL generation: templates, rendering and output.

pub mod template;
pub mod templates;
pub mod render;
pub mod fs_utils;
pub mod writer;

// Re-export key types
pub use template::{Template, escape_sql_literal};
pub use templates::{BTEQ_SKELETON, CONFIG_TABLE_NAME, INSERT_TEMPLATE};
pub use render::{
    GeneratedStatement, render_statements, generate_insert_statements, generate_bteq_skeletons
};
pub use writer::{Header, write_output_sql, write_statements};
