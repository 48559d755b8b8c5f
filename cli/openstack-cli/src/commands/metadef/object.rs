// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Metadef object commands

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use openstack_client::{ImageApi, MetadefObject};
use serde_json::Value;

use crate::batch;
use crate::fields::{Absent, Field, json, text};
use crate::output::{self, table::TableFormatArgs};

pub static OBJECT_FIELDS: &[Field<MetadefObject>] = &[
    Field {
        name: "created_at",
        header: "Created At",
        get: |o| text(&o.created_at),
    },
    Field {
        name: "description",
        header: "Description",
        get: |o| text(&o.description),
    },
    Field {
        name: "name",
        header: "Name",
        get: |o| Some(Value::String(o.name.clone())),
    },
    Field {
        name: "namespace_name",
        header: "Namespace Name",
        get: |o| text(&o.namespace_name),
    },
    Field {
        name: "properties",
        header: "Properties",
        get: |o| json(&o.properties),
    },
    Field {
        name: "required",
        header: "Required",
        get: |o| json(&o.required),
    },
    Field {
        name: "updated_at",
        header: "Updated At",
        get: |o| text(&o.updated_at),
    },
];

const LIST_COLUMNS: &[&str] = &["name", "description"];

#[derive(Subcommand, Clone)]
pub enum ObjectCommand {
    /// Create a metadef object
    Create(ObjectCreateArgs),
    /// Describe a metadef object
    Show(ObjectShowArgs),
    /// List metadef objects inside a namespace
    #[command(alias = "ls")]
    List(ObjectListArgs),
    /// Delete metadef object(s)
    #[command(alias = "rm")]
    Delete(ObjectDeleteArgs),
}

#[derive(Args, Clone)]
pub struct ObjectCreateArgs {
    /// Metadef namespace to create the object in (name)
    #[arg(long)]
    pub namespace: String,

    /// New metadef object name
    pub name: String,
}

#[derive(Args, Clone)]
pub struct ObjectShowArgs {
    /// Metadef namespace of the object (name)
    pub namespace: String,

    /// Metadef object to show
    pub object: String,
}

#[derive(Args, Clone)]
pub struct ObjectListArgs {
    /// Metadef namespace to list objects from (name)
    pub namespace: String,

    #[command(flatten)]
    pub table: TableFormatArgs,
}

#[derive(Args, Clone)]
pub struct ObjectDeleteArgs {
    /// Metadef namespace of the objects (name)
    pub namespace: String,

    /// Metadef object(s) to delete (name)
    #[arg(required = true)]
    pub objects: Vec<String>,
}

impl ObjectCommand {
    pub async fn run(self, client: &dyn ImageApi, use_json: bool) -> Result<()> {
        match self {
            Self::Create(args) => {
                let object = create(&args, client).await?;
                output::print_record(OBJECT_FIELDS, &object, Absent::Blank, use_json)
            }
            Self::Show(args) => {
                let object = show(&args, client).await?;
                output::print_record(OBJECT_FIELDS, &object, Absent::Blank, use_json)
            }
            Self::List(args) => {
                let objects = client.list_objects(&args.namespace).await?;
                output::print_list(OBJECT_FIELDS, LIST_COLUMNS, &objects, &args.table, use_json)
            }
            Self::Delete(args) => delete(&args, client).await,
        }
    }
}

pub async fn create(args: &ObjectCreateArgs, client: &dyn ImageApi) -> Result<MetadefObject> {
    let namespace = client.get_namespace(&args.namespace).await?;
    let object = client.create_object(&namespace.namespace, &args.name).await?;
    Ok(object)
}

pub async fn show(args: &ObjectShowArgs, client: &dyn ImageApi) -> Result<MetadefObject> {
    let object = client.get_object(&args.object, &args.namespace).await?;
    Ok(object)
}

pub async fn delete(args: &ObjectDeleteArgs, client: &dyn ImageApi) -> Result<()> {
    let namespace = args.namespace.as_str();
    let outcomes = batch::delete_each(&args.objects, move |object| async move {
        delete_one(client, namespace, &object)
            .await
            .with_context(|| format!("Failed to delete object with name or ID '{}'", object))
    })
    .await;

    batch::summarize(&outcomes, "object")?;
    Ok(())
}

async fn delete_one(
    client: &dyn ImageApi,
    namespace: &str,
    object: &str,
) -> openstack_client::Result<()> {
    let found = client.get_object(object, namespace).await?;
    client.delete_object(&found.name, namespace).await
}
