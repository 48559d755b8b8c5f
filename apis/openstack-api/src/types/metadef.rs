// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Image service metadata definition types (namespaces, objects, properties)

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use super::common::{Attributes, Timestamp};

/// Metadef namespace
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Namespace {
    /// Namespace name (unique, used in URLs)
    pub namespace: String,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Visibility (public or private)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
    /// Protected from deletion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protected: Option<bool>,
    /// Owning project
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    /// Last update timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

/// Metadef object: a named bundle of property requirements
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetadefObject {
    /// Name of the namespace the object belongs to. Not part of the wire
    /// document; filled in by the client from the request path.
    #[serde(default, skip_serializing)]
    pub namespace_name: Option<String>,
    /// Object name
    pub name: String,
    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Property definitions keyed by property name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, Value>>,
    /// Names of required properties
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    /// Last update timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

/// Request to create a metadef object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMetadefObjectRequest {
    /// Object name
    pub name: String,
}

/// Response of the object list endpoint
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct MetadefObjectList {
    #[serde(default)]
    pub objects: Vec<MetadefObject>,
}

/// Metadef property: a named, typed attribute with JSON-Schema style
/// constraints
///
/// Fields the catalog returns that are not modelled here are kept in
/// `extra` so that a full-document update sends them back unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetadefProperty {
    /// Name of the namespace the property belongs to. Filled in by the client.
    #[serde(default, skip_serializing)]
    pub namespace_name: Option<String>,
    /// Internal property name
    #[serde(default)]
    pub name: String,
    /// Name displayed to users
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// JSON type (string, integer, number, boolean, array, object)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operators: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readonly: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<Number>,
    /// Allowed values
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(rename = "minLength", default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    #[serde(rename = "maxLength", default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    /// Item schema for array properties
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Value>,
    #[serde(rename = "uniqueItems", default, skip_serializing_if = "Option::is_none")]
    pub unique_items: Option<bool>,
    #[serde(rename = "minItems", default, skip_serializing_if = "Option::is_none")]
    pub min_items: Option<u64>,
    #[serde(rename = "maxItems", default, skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u64>,
    #[serde(rename = "additionalItems", default, skip_serializing_if = "Option::is_none")]
    pub additional_items: Option<bool>,
    /// Unmodelled fields, passed through untouched
    #[serde(flatten)]
    pub extra: Attributes,
}

impl MetadefProperty {
    /// The property as a full wire document: every field that is set, keyed
    /// by its wire name. `namespace_name` is never included.
    pub fn to_attributes(&self) -> Result<Attributes, serde_json::Error> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            _ => Ok(Attributes::new()),
        }
    }
}

/// Response of the property list endpoint: properties keyed by name
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct MetadefPropertyList {
    #[serde(default)]
    pub properties: BTreeMap<String, MetadefProperty>,
}
