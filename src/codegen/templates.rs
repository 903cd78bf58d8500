//! Fixed SQL templates and their default column values.

use super::template::Template;

/// Target configuration table for the Databricks optimization jobs.
pub const CONFIG_TABLE_NAME: &str = "config_db.optimization_tasks";

/// Tool name written on the `-- Generated by:` header line.
pub const DEFAULT_GENERATED_BY: &str = "optconf";

pub const DATABRICKS_HEADER_TITLE: &str = "Databricks Optimization Configuration SQL";
pub const BTEQ_HEADER_TITLE: &str = "BTEQ Skeleton Scripts";

/// One row of the optimization config table.
///
/// Every row gets the same defaults: partitions ignored, no z-order column,
/// daily runs, an open-ended validity window and grouping `group1`.
pub const INSERT_TEMPLATE: &str = r#"
INSERT INTO {config_table} (
    tbl_name,
    tbl_schema,
    ignore_partition,
    zorder_col,
    run_freq,
    rec_strt_ts,
    rec_end_ts,
    rec_flg,
    run_parallel_flg,
    non_partition_tables
) VALUES (
    '{table_name}',        -- tbl_name
    '{schema}',            -- tbl_schema
    'Y',                   -- ignore_partition
    '',                    -- zorder_col
    'daily',               -- run_freq
    current_timestamp(),   -- rec_strt_ts
    '9999-12-31T00:00:00.000+0000', -- rec_end_ts (UTC)
    'Y',                   -- rec_flg
    'Y',                   -- run_parallel_flg
    'group1'               -- non_partition_tables
);
"#;

/// Per-table BTEQ block: reload from the staging copy and refresh stats.
pub const BTEQ_SKELETON: &str = r#"
/* -------------------------------------------------------------
   {schema}.{table_name}
   ------------------------------------------------------------- */
.SET ERRORLEVEL UNKNOWN SEVERITY 8;
.REMARK 'Refreshing {schema}.{table_name}';

DELETE FROM {schema}.{table_name} ALL;
.IF ERRORCODE <> 0 THEN .QUIT ERRORCODE;

INSERT INTO {schema}.{table_name}
SELECT *
FROM {schema}_STG.{table_name};
.IF ERRORCODE <> 0 THEN .QUIT ERRORCODE;

COLLECT STATISTICS ON {schema}.{table_name} COLUMN (PARTITION);
.IF ERRORCODE <> 0 THEN .QUIT ERRORCODE;
"#;

pub const INSERT: Template = Template::new(INSERT_TEMPLATE);
pub const BTEQ: Template = Template::new(BTEQ_SKELETON);
