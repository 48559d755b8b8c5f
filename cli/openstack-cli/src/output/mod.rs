// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Output formatting utilities

pub mod json;
pub mod table;

use anyhow::Result;

use crate::fields::{self, Absent, Field};
use table::TableFormatArgs;

/// Print one resource as a field/value record (or a JSON object)
pub fn print_record<T>(
    descriptors: &[Field<T>],
    item: &T,
    absent: Absent,
    use_json: bool,
) -> Result<()> {
    let record = fields::record(descriptors, item, absent);
    if use_json {
        json::print_json(&json::record_object(&record))
    } else {
        table::print_table(table::record_table(&record));
        Ok(())
    }
}

/// Print a listing with the given default columns (or a JSON array)
pub fn print_list<T>(
    descriptors: &[Field<T>],
    columns: &[&str],
    items: &[T],
    args: &TableFormatArgs,
    use_json: bool,
) -> Result<()> {
    let requested: Vec<&str> = if args.columns.is_empty() {
        columns.to_vec()
    } else {
        args.columns.iter().map(String::as_str).collect()
    };
    let selected = fields::select(descriptors, &requested)?;
    let rows: Vec<Vec<Option<serde_json::Value>>> =
        items.iter().map(|item| fields::row(&selected, item)).collect();

    if use_json {
        let names: Vec<&str> = selected.iter().map(|f| f.name).collect();
        json::print_json(&json::list_array(&names, &rows))
    } else {
        let headers: Vec<&str> = selected.iter().map(|f| f.header).collect();
        table::print_table(table::list_table(&headers, &rows, args));
        Ok(())
    }
}
