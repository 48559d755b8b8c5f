// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! JSON output formatting

use serde::Serialize;
use serde_json::{Map, Value};

/// Print a value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// A show record as a JSON object; absent fields become `null`
pub fn record_object(record: &[(&str, Option<Value>)]) -> Value {
    let map: Map<String, Value> = record
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone().unwrap_or(Value::Null)))
        .collect();
    Value::Object(map)
}

/// List rows as an array of objects keyed by field name
pub fn list_array(names: &[&str], rows: &[Vec<Option<Value>>]) -> Value {
    Value::Array(
        rows.iter()
            .map(|row| {
                let pairs: Vec<(&str, Option<Value>)> =
                    names.iter().copied().zip(row.iter().cloned()).collect();
                record_object(&pairs)
            })
            .collect(),
    )
}
