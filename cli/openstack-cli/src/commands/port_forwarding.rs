// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Router gateway port forwarding commands

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use openstack_client::{
    NetworkApi, PortForwarding, PortForwardingAttrs, PortForwardingFilter, Protocol, Uuid,
};
use serde_json::Value;

use crate::batch;
use crate::fields::{Absent, Field, json, text};
use crate::output::{self, table::TableFormatArgs};
use crate::validate;

/// All fields, sorted by name
pub static PORT_FORWARDING_FIELDS: &[Field<PortForwarding>] = &[
    Field {
        name: "description",
        header: "Description",
        get: |pf| text(&pf.description),
    },
    Field {
        name: "external_port",
        header: "External Port",
        get: |pf| json(&pf.external_port),
    },
    Field {
        name: "gw_ip_address",
        header: "Gateway IP Address",
        get: |pf| text(&pf.gw_ip_address),
    },
    Field {
        name: "id",
        header: "ID",
        get: |pf| Some(Value::String(pf.id.to_string())),
    },
    Field {
        name: "internal_ip_address",
        header: "Internal IP Address",
        get: |pf| text(&pf.internal_ip_address),
    },
    Field {
        name: "internal_port",
        header: "Internal Port",
        get: |pf| json(&pf.internal_port),
    },
    Field {
        name: "internal_port_id",
        header: "Internal Port ID",
        get: |pf| json(&pf.internal_port_id),
    },
    Field {
        name: "protocol",
        header: "Protocol",
        get: |pf| json(&pf.protocol),
    },
    Field {
        name: "router_id",
        header: "Router ID",
        get: |pf| json(&pf.router_id),
    },
];

const LIST_COLUMNS: &[&str] = &[
    "id",
    "internal_port_id",
    "internal_ip_address",
    "internal_port",
    "gw_ip_address",
    "external_port",
    "protocol",
];

#[derive(Subcommand, Clone)]
pub enum PortForwardingCommand {
    /// Create router gateway port forwarding
    Create(PortForwardingCreateArgs),
    /// Display router gateway port forwarding details
    Show(PortForwardingShowArgs),
    /// List router gateway port forwarding
    #[command(alias = "ls")]
    List(PortForwardingListArgs),
    /// Set router gateway port forwarding properties
    Set(PortForwardingSetArgs),
    /// Delete router gateway port forwarding
    #[command(alias = "rm")]
    Delete(PortForwardingDeleteArgs),
}

#[derive(Args, Clone)]
pub struct PortForwardingCreateArgs {
    /// The fixed IPv4 address of the network port associated to the port
    /// forwarding
    #[arg(long)]
    pub internal_ip_address: String,

    /// The name or ID of the network port associated to the port forwarding
    #[arg(long)]
    pub port: String,

    /// The protocol port number of the internal port fixed IPv4 address
    #[arg(long, value_name = "PORT_NUMBER", allow_negative_numbers = true)]
    pub internal_protocol_port: i64,

    /// The protocol port number of the router gateway address
    #[arg(long, value_name = "PORT_NUMBER", allow_negative_numbers = true)]
    pub external_protocol_port: i64,

    /// The protocol used in the port forwarding
    #[arg(long, value_enum, ignore_case = true)]
    pub protocol: Protocol,

    /// Description of the port forwarding
    #[arg(long)]
    pub description: Option<String>,

    /// Router that the port forwarding belongs to (ID / Name)
    pub router: String,
}

#[derive(Args, Clone)]
pub struct PortForwardingShowArgs {
    /// Router that the port forwarding belongs to (ID / Name)
    pub router: String,

    /// The ID of the router gateway port forwarding
    pub port_forwarding_id: String,
}

#[derive(Args, Clone)]
pub struct PortForwardingListArgs {
    /// Router that the port forwarding belongs to (ID / Name)
    pub router: String,

    /// Filter by the ID or name of the internal network port
    #[arg(long)]
    pub port: Option<String>,

    /// Filter by the protocol port number of the router gateway address
    #[arg(long, value_name = "PORT_NUMBER", allow_negative_numbers = true)]
    pub external_protocol_port: Option<i64>,

    /// Filter by the port protocol
    #[arg(long, value_enum, ignore_case = true)]
    pub protocol: Option<Protocol>,

    #[command(flatten)]
    pub table: TableFormatArgs,
}

#[derive(Args, Clone, Default)]
pub struct PortForwardingSetArgs {
    /// Router that the port forwarding belongs to (ID / Name)
    pub router: String,

    /// The ID of the router gateway port forwarding
    pub port_forwarding_id: String,

    /// The name or ID of the network port associated to the port forwarding
    #[arg(long)]
    pub port: Option<String>,

    /// The fixed IPv4 address of the network port
    #[arg(long)]
    pub internal_ip_address: Option<String>,

    /// The protocol port number of the internal port fixed IPv4 address
    #[arg(long, value_name = "PORT_NUMBER", allow_negative_numbers = true)]
    pub internal_protocol_port: Option<i64>,

    /// The protocol port number of the router gateway address
    #[arg(long, value_name = "PORT_NUMBER", allow_negative_numbers = true)]
    pub external_protocol_port: Option<i64>,

    /// The IP protocol used in the port forwarding
    #[arg(long, value_enum, ignore_case = true)]
    pub protocol: Option<Protocol>,

    /// Description of the port forwarding
    #[arg(long)]
    pub description: Option<String>,
}

#[derive(Args, Clone)]
pub struct PortForwardingDeleteArgs {
    /// Router that the port forwarding belongs to (ID / Name)
    pub router: String,

    /// The ID(s) of the router gateway port forwarding
    #[arg(required = true)]
    pub port_forwarding_ids: Vec<String>,
}

impl PortForwardingCommand {
    pub async fn run(self, client: &dyn NetworkApi, use_json: bool) -> Result<()> {
        match self {
            Self::Create(args) => {
                let pf = create(&args, client).await?;
                output::print_record(PORT_FORWARDING_FIELDS, &pf, Absent::Blank, use_json)
            }
            Self::Show(args) => {
                let pf = show(&args, client).await?;
                output::print_record(PORT_FORWARDING_FIELDS, &pf, Absent::Blank, use_json)
            }
            Self::List(args) => {
                let pfs = list(&args, client).await?;
                output::print_list(
                    PORT_FORWARDING_FIELDS,
                    LIST_COLUMNS,
                    &pfs,
                    &args.table,
                    use_json,
                )
            }
            Self::Set(args) => set(&args, client).await,
            Self::Delete(args) => delete(&args, client).await,
        }
    }
}

/// Validate an optional port flag
fn optional_port(value: Option<i64>) -> Result<Option<u16>, crate::error::CommandError> {
    value.map(validate::protocol_port).transpose()
}

pub async fn create(
    args: &PortForwardingCreateArgs,
    client: &dyn NetworkApi,
) -> Result<PortForwarding> {
    let internal_port = validate::protocol_port(args.internal_protocol_port)?;
    let external_port = validate::protocol_port(args.external_protocol_port)?;

    let router = client.find_router(&args.router).await?;
    let port = client.find_port(&args.port).await?;

    let attrs = PortForwardingAttrs {
        internal_port_id: Some(port.id),
        internal_ip_address: Some(args.internal_ip_address.clone()),
        internal_port: Some(internal_port),
        external_port: Some(external_port),
        protocol: Some(args.protocol),
        description: args.description.clone(),
    };
    let pf = client.create_port_forwarding(&router.id, &attrs).await?;
    Ok(pf)
}

pub async fn show(args: &PortForwardingShowArgs, client: &dyn NetworkApi) -> Result<PortForwarding> {
    let router = client.find_router(&args.router).await?;
    let pf = client
        .get_port_forwarding(&router.id, &args.port_forwarding_id)
        .await?;
    Ok(pf)
}

/// Query filter from the given flags only; `port_id` is the resolved
/// `--port`
pub fn list_filter(
    args: &PortForwardingListArgs,
    port_id: Option<Uuid>,
) -> Result<PortForwardingFilter> {
    Ok(PortForwardingFilter {
        internal_port_id: port_id,
        external_port: optional_port(args.external_protocol_port)?,
        protocol: args.protocol,
    })
}

pub async fn list(
    args: &PortForwardingListArgs,
    client: &dyn NetworkApi,
) -> Result<Vec<PortForwarding>> {
    // Validate before any lookup
    optional_port(args.external_protocol_port)?;

    let router = client.find_router(&args.router).await?;
    let port_id = match &args.port {
        Some(port) => Some(client.find_port(port).await?.id),
        None => None,
    };
    let filter = list_filter(args, port_id)?;
    let pfs = client.list_port_forwardings(&router.id, &filter).await?;
    Ok(pfs)
}

/// Partial update attributes from the given flags only; `port_id` is the
/// resolved `--port`
pub fn set_attrs(args: &PortForwardingSetArgs, port_id: Option<Uuid>) -> Result<PortForwardingAttrs> {
    Ok(PortForwardingAttrs {
        internal_port_id: port_id,
        internal_ip_address: args.internal_ip_address.clone(),
        internal_port: optional_port(args.internal_protocol_port)?,
        external_port: optional_port(args.external_protocol_port)?,
        protocol: args.protocol,
        description: args.description.clone(),
    })
}

pub async fn set(args: &PortForwardingSetArgs, client: &dyn NetworkApi) -> Result<()> {
    optional_port(args.internal_protocol_port)?;
    optional_port(args.external_protocol_port)?;

    let router = client.find_router(&args.router).await?;
    let port_id = match &args.port {
        Some(port) => Some(client.find_port(port).await?.id),
        None => None,
    };
    let attrs = set_attrs(args, port_id)?;
    client
        .update_port_forwarding(&router.id, &args.port_forwarding_id, &attrs)
        .await?;
    Ok(())
}

pub async fn delete(args: &PortForwardingDeleteArgs, client: &dyn NetworkApi) -> Result<()> {
    let router = client.find_router(&args.router).await?;
    let router_id = &router.id;

    let outcomes = batch::delete_each(&args.port_forwarding_ids, move |id| async move {
        delete_one(client, router_id, &id)
            .await
            .with_context(|| format!("Failed to delete router gateway port forwarding '{}'", id))
    })
    .await;

    batch::summarize(&outcomes, "Port forwarding")?;
    Ok(())
}

async fn delete_one(
    client: &dyn NetworkApi,
    router_id: &Uuid,
    id: &str,
) -> openstack_client::Result<()> {
    let found = client.get_port_forwarding(router_id, id).await?;
    client
        .delete_port_forwarding(router_id, &found.id.to_string())
        .await
}
