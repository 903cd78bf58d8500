//! Integration tests for parsing, rendering and the end-to-end pipeline

use optconf::{
    GeneratorConfig, GeneratorError, LineFormat, TableRef, Variant, generate_insert_statements,
    parse_table_list, read_table_list,
};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const BTEQ_INPUT: &str = "
    FINANCE_DW.TGL_ACCOUNT_DIM
    ,FINANCE_DW.TGL_JOURNAL_ENTRY_FACT # With comment
    SALES_MART.TCUSTOMER_MASTER

    # This is a full line comment
    INVALID_LINE_NO_DOT
    ,HR_RAW.TEMPL_PROFILE_CURRENT
    .EMPTY_SCHEMA.TABLE # Invalid: Starts with dot, not just schema
    SCHEMA.EMPTY_TABLE. # Invalid: Ends with dot
    ANOTHER_SCHEMA.ANOTHER_TABLE # Valid line after invalid ones
    ";

const DATABRICKS_INPUT: &str = "
    finance_gl_bronze.t_sap_journal_entries_raw
    sales_orders_silver.t_order_header_cleaned
    marketing_campaign_gold.t_campaign_roi_analysis

    invalid_line_no_dot
    inventory_mgmt_bronze.t_wms_stock_levels_raw
    ";

fn write_input(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("Failed to write input file");
    path
}

fn t(schema: &str, table: &str) -> TableRef {
    TableRef::new(schema, table)
}

#[test]
fn test_bteq_parse_table_list_valid() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "bteq_list.txt", BTEQ_INPUT);

    let actual = parse_table_list(&input, LineFormat::Bteq);

    assert_eq!(
        actual,
        vec![
            t("FINANCE_DW", "TGL_ACCOUNT_DIM"),
            t("FINANCE_DW", "TGL_JOURNAL_ENTRY_FACT"),
            t("SALES_MART", "TCUSTOMER_MASTER"),
            t("HR_RAW", "TEMPL_PROFILE_CURRENT"),
            t("ANOTHER_SCHEMA", "ANOTHER_TABLE"),
        ]
    );
}

#[test]
fn test_bteq_skipped_lines_are_reported() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "bteq_list.txt", BTEQ_INPUT);

    let parsed = read_table_list(&input, LineFormat::Bteq).unwrap();
    let skipped: Vec<usize> = parsed.skipped.iter().map(|s| s.line_number).collect();

    // Line 1 is the empty first line of the literal.
    assert_eq!(skipped, vec![7, 9, 10]);
    assert_eq!(parsed.skipped[0].raw.trim(), "INVALID_LINE_NO_DOT");
}

#[test]
fn test_databricks_parse_table_list_valid() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "databricks_list.txt", DATABRICKS_INPUT);

    let actual = parse_table_list(&input, LineFormat::Plain);

    assert_eq!(
        actual,
        vec![
            t("finance_gl_bronze", "t_sap_journal_entries_raw"),
            t("sales_orders_silver", "t_order_header_cleaned"),
            t("marketing_campaign_gold", "t_campaign_roi_analysis"),
            t("inventory_mgmt_bronze", "t_wms_stock_levels_raw"),
        ]
    );
}

#[test]
fn test_parse_table_list_file_not_found() {
    assert!(parse_table_list("non_existent_bteq.txt", LineFormat::Bteq).is_empty());
    assert!(parse_table_list("non_existent_dbx.txt", LineFormat::Plain).is_empty());
    assert!(matches!(
        read_table_list("non_existent_dbx.txt", LineFormat::Plain),
        Err(GeneratorError::InputNotFound(_))
    ));
}

#[test]
fn test_rendered_statements_contain_their_table() {
    let tables = vec![t("finance_gl_bronze", "t_sap"), t("sales", "orders"), t("sales", "orders")];
    let statements = generate_insert_statements(&tables).unwrap();

    assert_eq!(statements.len(), tables.len());
    for (stmt, table) in statements.iter().zip(&tables) {
        assert!(stmt.contains(&format!("'{}'", table.schema)));
        assert!(stmt.contains(&format!("'{}'", table.table)));
    }
}

#[test]
fn test_run_databricks_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "databricks_list.txt", DATABRICKS_INPUT);
    let output = dir.path().join("out/sql/optimize.sql");

    let summary = optconf::run(Variant::Databricks, &input, &output, &GeneratorConfig::default())
        .expect("Run failed");

    assert_eq!(summary.tables, 4);
    assert_eq!(summary.skipped_lines, 1);

    let sql = fs::read_to_string(&output).unwrap();
    assert!(sql.starts_with(
        "-- Generated Databricks Optimization Configuration SQL\n-- Generated by: optconf\n\n"
    ));
    assert_eq!(sql.matches("INSERT INTO config_db.optimization_tasks").count(), 4);
    assert!(sql.ends_with(");\n\n"));

    // Output order follows input order.
    let first = sql.find("'t_sap_journal_entries_raw'").unwrap();
    let last = sql.find("'t_wms_stock_levels_raw'").unwrap();
    assert!(first < last);
}

#[test]
fn test_run_bteq_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "bteq_list.txt", BTEQ_INPUT);
    let output = dir.path().join("bteq.sql");

    let summary = optconf::run(Variant::Bteq, &input, &output, &GeneratorConfig::default())
        .expect("Run failed");
    assert_eq!(summary.tables, 5);

    let sql = fs::read_to_string(&output).unwrap();
    assert!(sql.starts_with("-- Generated BTEQ Skeleton Scripts\n"));
    assert!(sql.contains("INSERT INTO HR_RAW.TEMPL_PROFILE_CURRENT"));
    assert!(!sql.contains("EMPTY_SCHEMA"));
}

#[test]
fn test_run_missing_input_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("never.sql");

    let err = optconf::run(
        Variant::Databricks,
        &dir.path().join("missing.txt"),
        &output,
        &GeneratorConfig::default(),
    )
    .unwrap_err();

    assert!(matches!(err, GeneratorError::InputNotFound(_)));
    assert!(!output.exists());
}

#[test]
fn test_run_without_valid_rows_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "bad.txt", "no_dot_here\n.leading\n\n");
    let output = dir.path().join("never.sql");

    let err = optconf::run(Variant::Databricks, &input, &output, &GeneratorConfig::default())
        .unwrap_err();

    assert!(matches!(err, GeneratorError::NoValidRows(_)));
    assert!(!output.exists());
}
