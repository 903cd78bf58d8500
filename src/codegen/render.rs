//! Render table references through the fixed templates.

use super::templates::{BTEQ, INSERT};
use crate::config::GeneratorConfig;
use crate::error::TemplateError;
use crate::pipeline::Variant;
use crate::table_ref::TableRef;

/// A fully substituted statement, trimmed of surrounding whitespace.
pub type GeneratedStatement = String;

/// Render one statement per table, in input order.
pub fn render_statements(
    variant: Variant,
    tables: &[TableRef],
    config: &GeneratorConfig,
) -> Result<Vec<GeneratedStatement>, TemplateError> {
    tables
        .iter()
        .map(|table| render_one(variant, table, config))
        .collect()
}

fn render_one(
    variant: Variant,
    table: &TableRef,
    config: &GeneratorConfig,
) -> Result<GeneratedStatement, TemplateError> {
    let template = match variant {
        Variant::Bteq => BTEQ,
        Variant::Databricks => INSERT,
    };

    let sql = template.render(&[
        ("config_table", config.config_table.as_str()),
        ("schema", table.schema.as_str()),
        ("table_name", table.table.as_str()),
    ])?;

    tracing::debug!("Rendered {} statement for {}", variant, table);
    Ok(sql.trim().to_string())
}

/// Databricks INSERT statements targeting the default config table.
pub fn generate_insert_statements(
    tables: &[TableRef],
) -> Result<Vec<GeneratedStatement>, TemplateError> {
    render_statements(Variant::Databricks, tables, &GeneratorConfig::default())
}

/// BTEQ skeleton blocks, one per table.
pub fn generate_bteq_skeletons(
    tables: &[TableRef],
) -> Result<Vec<GeneratedStatement>, TemplateError> {
    render_statements(Variant::Bteq, tables, &GeneratorConfig::default())
}
