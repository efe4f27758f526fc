//! DDL for the staging tables behind each output CSV.
//!
//! Column names and order come from [`OutputTable::columns`]; this module
//! only adds the SQL type of each column. Table names are
//! [`OutputTable::as_str`].

use aidev_core::OutputTable;

use crate::quote_ident;

/// SQL type and constraints of each column, aligned with
/// [`OutputTable::columns`].
#[must_use]
pub const fn column_types(table: OutputTable) -> &'static [&'static str] {
    match table {
        OutputTable::PullRequests => &[
            "VARCHAR",
            "BIGINT NOT NULL",
            "VARCHAR",
            "VARCHAR",
            "BIGINT",
            "VARCHAR",
        ],
        OutputTable::Repositories => &["BIGINT NOT NULL", "VARCHAR", "BIGINT", "VARCHAR"],
        OutputTable::TaskTypes => &["BIGINT NOT NULL", "VARCHAR", "VARCHAR", "VARCHAR", "DOUBLE"],
        OutputTable::CommitDetails => &[
            "BIGINT NOT NULL",
            "VARCHAR NOT NULL",
            "VARCHAR",
            "VARCHAR",
            "VARCHAR",
            "BIGINT",
            "BIGINT",
            "BIGINT",
            "VARCHAR",
        ],
        OutputTable::SecurityLabels => &[
            "BIGINT NOT NULL",
            "VARCHAR",
            "VARCHAR NOT NULL",
            "DOUBLE",
            "INTEGER NOT NULL CHECK (\"SECURITY\" IN (0, 1))",
        ],
    }
}

/// `CREATE TABLE` statement for one output table.
#[must_use]
pub fn create_table(table: OutputTable) -> String {
    let columns = table
        .columns()
        .iter()
        .zip(column_types(table))
        .map(|(name, sql_type)| format!("    {} {sql_type}", quote_ident(name)))
        .collect::<Vec<_>>()
        .join(",\n");
    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n{columns}\n);",
        table.as_str()
    )
}

/// Select list used when exporting `table`: text columns map the empty
/// string to NULL so both are written as an empty field.
#[must_use]
pub fn export_columns(table: OutputTable) -> String {
    table
        .columns()
        .iter()
        .zip(column_types(table))
        .map(|(name, sql_type)| {
            let ident = quote_ident(name);
            if sql_type.starts_with("VARCHAR") {
                format!("NULLIF({ident}, '') AS {ident}")
            } else {
                ident
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
