// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Per-resource field tables
//!
//! Each displayable resource has one table mapping a field name to an
//! accessor. List and show output both project through the same table, so a
//! new field is one table entry. An accessor returns `None` when the backend
//! did not supply the field; that is never an error.

use serde::Serialize;
use serde_json::Value;

use crate::error::CommandError;

/// One displayable field of `T`
pub struct Field<T> {
    /// Field name, used as the key in show output and JSON
    pub name: &'static str,
    /// Column header in list output
    pub header: &'static str,
    pub get: fn(&T) -> Option<Value>,
}

/// How show output treats fields the backend left out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Absent {
    /// Keep the field with an empty value
    Blank,
    /// Leave the field out
    Omit,
}

/// Accessor helper for optional string fields
pub fn text(value: &Option<String>) -> Option<Value> {
    value.clone().map(Value::String)
}

/// Accessor helper for any serializable optional field
pub fn json<S: Serialize>(value: &Option<S>) -> Option<Value> {
    value.as_ref().and_then(|v| serde_json::to_value(v).ok())
}

/// Look up fields by name (or header, case-insensitively), preserving the
/// requested order
pub fn select<'a, T>(
    table: &'a [Field<T>],
    names: &[&str],
) -> Result<Vec<&'a Field<T>>, CommandError> {
    names
        .iter()
        .map(|name| {
            table
                .iter()
                .find(|f| f.name.eq_ignore_ascii_case(name) || f.header.eq_ignore_ascii_case(name))
                .ok_or_else(|| CommandError::UnknownColumn(name.to_string()))
        })
        .collect()
}

/// Project one list row; the row always has one cell per field
pub fn row<T>(fields: &[&Field<T>], item: &T) -> Vec<Option<Value>> {
    fields.iter().map(|f| (f.get)(item)).collect()
}

/// Project a show record in table order
pub fn record<T>(table: &[Field<T>], item: &T, absent: Absent) -> Vec<(&'static str, Option<Value>)> {
    table
        .iter()
        .map(|f| (f.name, (f.get)(item)))
        .filter(|(_, value)| absent == Absent::Blank || value.is_some())
        .collect()
}

/// Render a cell: strings verbatim, absent or null as empty, anything else
/// as compact JSON
pub fn cell(value: &Option<Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
