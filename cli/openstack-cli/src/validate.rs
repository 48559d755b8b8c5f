// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Local argument validation, run before any service call

use openstack_api::{Attributes, MAX_PROTOCOL_PORT, MIN_PROTOCOL_PORT};
use serde_json::Value;

use crate::error::CommandError;

/// Check a TCP/UDP protocol port number
pub fn protocol_port(value: i64) -> Result<u16, CommandError> {
    if !(MIN_PROTOCOL_PORT..=MAX_PROTOCOL_PORT).contains(&value) {
        return Err(CommandError::InvalidPort(value));
    }
    u16::try_from(value).map_err(|_| CommandError::InvalidPort(value))
}

/// Parse a `--schema` argument into attributes to merge into a property
pub fn parse_schema(raw: &str) -> Result<Attributes, CommandError> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(CommandError::InvalidSchema(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
        Err(e) => Err(CommandError::InvalidSchema(e.to_string())),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
