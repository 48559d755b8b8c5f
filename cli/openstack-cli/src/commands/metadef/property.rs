// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Metadef property commands
//!
//! The catalog treats a property update as a full replace: any attribute
//! missing from the request is reset. `property set` therefore fetches the
//! current document and sends it back with only the requested changes.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use openstack_client::{Attributes, ImageApi, MetadefProperty};
use serde_json::Value;

use crate::batch;
use crate::fields::{Absent, Field, json, text};
use crate::output::{self, table::TableFormatArgs};
use crate::validate;

/// Show fields, sorted by wire name
pub static PROPERTY_FIELDS: &[Field<MetadefProperty>] = &[
    Field {
        name: "additionalItems",
        header: "Additional Items",
        get: |p| json(&p.additional_items),
    },
    Field {
        name: "default",
        header: "Default",
        get: |p| p.default.clone(),
    },
    Field {
        name: "description",
        header: "Description",
        get: |p| text(&p.description),
    },
    Field {
        name: "enum",
        header: "Enum",
        get: |p| json(&p.enum_values),
    },
    Field {
        name: "items",
        header: "Items",
        get: |p| p.items.clone(),
    },
    Field {
        name: "maxItems",
        header: "Max Items",
        get: |p| json(&p.max_items),
    },
    Field {
        name: "maxLength",
        header: "Max Length",
        get: |p| json(&p.max_length),
    },
    Field {
        name: "maximum",
        header: "Maximum",
        get: |p| json(&p.maximum),
    },
    Field {
        name: "minItems",
        header: "Min Items",
        get: |p| json(&p.min_items),
    },
    Field {
        name: "minLength",
        header: "Min Length",
        get: |p| json(&p.min_length),
    },
    Field {
        name: "minimum",
        header: "Minimum",
        get: |p| json(&p.minimum),
    },
    Field {
        name: "name",
        header: "Name",
        get: |p| Some(Value::String(p.name.clone())),
    },
    Field {
        name: "namespace_name",
        header: "Namespace Name",
        get: |p| text(&p.namespace_name),
    },
    Field {
        name: "operators",
        header: "Operators",
        get: |p| json(&p.operators),
    },
    Field {
        name: "pattern",
        header: "Pattern",
        get: |p| text(&p.pattern),
    },
    Field {
        name: "readonly",
        header: "Readonly",
        get: |p| json(&p.readonly),
    },
    Field {
        name: "title",
        header: "Title",
        get: |p| text(&p.title),
    },
    Field {
        name: "type",
        header: "Type",
        get: |p| text(&p.property_type),
    },
    Field {
        name: "uniqueItems",
        header: "Unique Items",
        get: |p| json(&p.unique_items),
    },
];

const LIST_COLUMNS: &[&str] = &["name", "title", "type"];

#[derive(Subcommand, Clone)]
pub enum PropertyCommand {
    /// Create a metadef property
    Create(PropertyCreateArgs),
    /// Describe a metadef property
    Show(PropertyShowArgs),
    /// List metadef properties inside a namespace
    #[command(alias = "ls")]
    List(PropertyListArgs),
    /// Update a metadef property
    Set(PropertySetArgs),
    /// Delete metadef propert(ies)
    #[command(alias = "rm")]
    Delete(PropertyDeleteArgs),
}

#[derive(Args, Clone)]
pub struct PropertyCreateArgs {
    /// Internal name of the property
    #[arg(long)]
    pub name: String,

    /// Property name displayed to the user
    #[arg(long)]
    pub title: String,

    /// Property type
    #[arg(long = "type", value_name = "TYPE")]
    pub property_type: String,

    /// Valid JSON schema of the property
    #[arg(long)]
    pub schema: String,

    /// Name of the namespace to which the property belongs
    pub namespace: String,
}

#[derive(Args, Clone)]
pub struct PropertyShowArgs {
    /// Namespace (name) of the property
    pub namespace: String,

    /// Property to show
    pub property: String,
}

#[derive(Args, Clone)]
pub struct PropertyListArgs {
    /// Namespace (name) to list properties from
    pub namespace: String,

    #[command(flatten)]
    pub table: TableFormatArgs,
}

#[derive(Args, Clone)]
pub struct PropertySetArgs {
    /// Internal name of the property
    #[arg(long)]
    pub name: Option<String>,

    /// Property name displayed to the user
    #[arg(long)]
    pub title: Option<String>,

    /// Property type
    #[arg(long = "type", value_name = "TYPE")]
    pub property_type: Option<String>,

    /// Valid JSON schema of the property
    #[arg(long)]
    pub schema: Option<String>,

    /// Namespace (name) of the property
    pub namespace: String,

    /// Property to update
    pub property: String,
}

#[derive(Args, Clone)]
pub struct PropertyDeleteArgs {
    /// Namespace (name) of the properties
    pub namespace: String,

    /// Metadef propert(ies) to delete (name)
    #[arg(required = true)]
    pub properties: Vec<String>,
}

impl PropertyCommand {
    pub async fn run(self, client: &dyn ImageApi, use_json: bool) -> Result<()> {
        match self {
            Self::Create(args) => {
                let property = create(&args, client).await?;
                output::print_record(PROPERTY_FIELDS, &property, Absent::Omit, use_json)
            }
            Self::Show(args) => {
                let property = client.get_property(&args.property, &args.namespace).await?;
                output::print_record(PROPERTY_FIELDS, &property, Absent::Omit, use_json)
            }
            Self::List(args) => {
                let properties = client.list_properties(&args.namespace).await?;
                output::print_list(
                    PROPERTY_FIELDS,
                    LIST_COLUMNS,
                    &properties,
                    &args.table,
                    use_json,
                )
            }
            Self::Set(args) => set(&args, client).await,
            Self::Delete(args) => delete(&args, client).await,
        }
    }
}

/// Attributes for a new property: name, title and type, then the schema
/// keys on top
pub fn create_attrs(args: &PropertyCreateArgs, schema: Attributes) -> Attributes {
    let mut attrs = Attributes::new();
    attrs.insert("name".to_string(), Value::String(args.name.clone()));
    attrs.insert("title".to_string(), Value::String(args.title.clone()));
    attrs.insert("type".to_string(), Value::String(args.property_type.clone()));
    attrs.extend(schema);
    attrs
}

/// Full replacement document for `property set`: the current property with
/// the explicitly given fields overridden and the schema merged last
pub fn update_attrs(
    current: &MetadefProperty,
    args: &PropertySetArgs,
    schema: Option<Attributes>,
) -> Result<Attributes> {
    let mut attrs = current.to_attributes()?;
    let overrides = [
        ("name", &args.name),
        ("title", &args.title),
        ("type", &args.property_type),
    ];
    for (key, value) in overrides {
        if let Some(value) = value {
            attrs.insert(key.to_string(), Value::String(value.clone()));
        }
    }
    if let Some(schema) = schema {
        attrs.extend(schema);
    }
    Ok(attrs)
}

pub async fn create(args: &PropertyCreateArgs, client: &dyn ImageApi) -> Result<MetadefProperty> {
    let schema = validate::parse_schema(&args.schema)?;
    let attrs = create_attrs(args, schema);
    let property = client.create_property(&args.namespace, attrs).await?;
    Ok(property)
}

pub async fn set(args: &PropertySetArgs, client: &dyn ImageApi) -> Result<()> {
    // An empty --schema is treated as not given
    let schema = match args.schema.as_deref() {
        Some(raw) if !raw.trim().is_empty() => Some(validate::parse_schema(raw)?),
        _ => None,
    };

    let current = client.get_property(&args.property, &args.namespace).await?;
    let attrs = update_attrs(&current, args, schema)?;
    client
        .update_property(&args.property, &args.namespace, attrs)
        .await?;
    Ok(())
}

pub async fn delete(args: &PropertyDeleteArgs, client: &dyn ImageApi) -> Result<()> {
    let namespace = args.namespace.as_str();
    let outcomes = batch::delete_each(&args.properties, move |property| async move {
        delete_one(client, namespace, &property)
            .await
            .with_context(|| {
                format!(
                    "Failed to delete property with name or ID '{}' from namespace '{}'",
                    property, namespace
                )
            })
    })
    .await;

    batch::summarize(&outcomes, "properties")?;
    Ok(())
}

async fn delete_one(
    client: &dyn ImageApi,
    namespace: &str,
    property: &str,
) -> openstack_client::Result<()> {
    let found = client.get_property(property, namespace).await?;
    client.delete_property(&found.name, namespace).await
}
