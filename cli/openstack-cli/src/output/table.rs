// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Table output formatting

use clap::Args;
use comfy_table::{Table, presets::NOTHING};
use serde_json::Value;

use crate::fields::cell;

/// Table options shared by list commands
#[derive(Args, Clone, Debug, Default)]
pub struct TableFormatArgs {
    /// Omit the table header row
    #[arg(short = 'H', long)]
    pub no_header: bool,

    /// Comma-separated columns to show (field names or headers)
    #[arg(short = 'o', long = "column", value_delimiter = ',')]
    pub columns: Vec<String>,
}

/// Create a new table with headers
pub fn create_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(headers);
    table
}

/// Build a list table; every row has exactly one cell per header
pub fn list_table(headers: &[&str], rows: &[Vec<Option<Value>>], args: &TableFormatArgs) -> Table {
    let mut table = if args.no_header {
        let mut table = Table::new();
        table.load_preset(NOTHING);
        table
    } else {
        create_table(headers)
    };
    for row in rows {
        table.add_row(row.iter().map(cell).collect::<Vec<_>>());
    }
    table
}

/// Build a two-column Field/Value table for a single resource
pub fn record_table(record: &[(&str, Option<Value>)]) -> Table {
    let mut table = create_table(&["Field", "Value"]);
    for (name, value) in record {
        table.add_row(vec![name.to_string(), cell(value)]);
    }
    table
}

/// Format a table and print it
pub fn print_table(table: Table) {
    println!("{table}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_table_row_width_with_missing_cell() {
        let rows = vec![vec![Some(json!("cpu")), None, Some(json!("integer"))]];
        let table = list_table(&["name", "title", "type"], &rows, &TableFormatArgs::default());
        let row = table.row(0).unwrap();
        assert_eq!(row.cell_count(), 3);
    }

    #[test]
    fn test_list_table_no_header() {
        let args = TableFormatArgs {
            no_header: true,
            columns: vec![],
        };
        let table = list_table(&["name"], &[vec![Some(json!("cpu"))]], &args);
        let rendered = table.to_string();
        assert!(!rendered.contains("name"));
        assert!(rendered.contains("cpu"));
    }

    #[test]
    fn test_record_table_renders_fields() {
        let table = record_table(&[("name", Some(json!("cpu"))), ("description", None)]);
        let rendered = table.to_string();
        assert!(rendered.contains("Field"));
        assert!(rendered.contains("cpu"));
        assert!(rendered.contains("description"));
    }
}
