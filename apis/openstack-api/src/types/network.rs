// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Network service types (routers, ports, gateway port forwarding)

use serde::{Deserialize, Serialize};

use super::common::Uuid;

/// Router
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Router {
    /// Router UUID
    pub id: Uuid,
    /// Router name
    #[serde(default)]
    pub name: String,
    /// Operational status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Owning project
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

/// Single-router response envelope
#[derive(Debug, Serialize, Deserialize)]
pub struct RouterBody {
    pub router: Router,
}

/// Router list response envelope
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RouterList {
    #[serde(default)]
    pub routers: Vec<Router>,
}

/// Network port
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Port {
    /// Port UUID
    pub id: Uuid,
    /// Port name
    #[serde(default)]
    pub name: String,
    /// Network the port is attached to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_id: Option<Uuid>,
    /// Operational status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Single-port response envelope
#[derive(Debug, Serialize, Deserialize)]
pub struct PortBody {
    pub port: Port,
}

/// Port list response envelope
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PortList {
    #[serde(default)]
    pub ports: Vec<Port>,
}

/// IP protocol of a port forwarding rule
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Protocol {
    Tcp,
    Udp,
}

/// Router gateway port forwarding rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortForwarding {
    /// Rule UUID
    pub id: Uuid,
    /// Router the rule belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub router_id: Option<Uuid>,
    /// Internal network port UUID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_port_id: Option<Uuid>,
    /// Fixed IP address on the internal port
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_ip_address: Option<String>,
    /// Protocol port on the internal address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_port: Option<u16>,
    /// Router gateway IP address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gw_ip_address: Option<String>,
    /// Protocol port on the gateway address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_port: Option<u16>,
    /// Kept as returned by the server so an unrecognised value does not
    /// fail the whole response
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Attributes sent on create and update. Unset fields are left out of the
/// request body entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortForwardingAttrs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_port_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_ip_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<Protocol>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Query filter for listing port forwarding rules
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortForwardingFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_port_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<Protocol>,
}

/// Request/response envelope for a single port forwarding rule
#[derive(Debug, Serialize, Deserialize)]
pub struct PortForwardingBody<T> {
    pub gateway_port_forwarding: T,
}

/// Port forwarding list response envelope
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PortForwardingList {
    #[serde(default)]
    pub gateway_port_forwardings: Vec<PortForwarding>,
}
