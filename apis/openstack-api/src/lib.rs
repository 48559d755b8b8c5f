// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! OpenStack resource types
//!
//! This crate holds the request and response bodies exchanged with two
//! OpenStack services:
//!
//! - the Image service (Glance) metadata definitions catalog: namespaces,
//!   objects and properties
//! - the Network service (Neutron): routers, ports and router gateway port
//!   forwarding rules
//!
//! Field names follow the services' JSON documents. Types are shared by the
//! HTTP client in `openstack-client` and the `openstack` CLI.

pub mod types;
pub use types::*;
