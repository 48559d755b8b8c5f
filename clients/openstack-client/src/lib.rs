// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! OpenStack Client Library
//!
//! Typed access to the two OpenStack service surfaces the `openstack` CLI
//! drives:
//!
//! - [`ImageApi`]: Image service metadata definitions (namespaces, objects,
//!   properties)
//! - [`NetworkApi`]: Network service routers, ports and router gateway port
//!   forwarding rules
//!
//! ## Usage
//!
//! ```ignore
//! use openstack_client::{ClientConfig, HttpClient, ImageApi};
//!
//! let client = HttpClient::new(ClientConfig {
//!     image_url: Some("https://image.example.com:9292".to_string()),
//!     network_url: None,
//!     token: Some(token),
//!     insecure: false,
//! })?;
//!
//! let props = client.list_properties("OS::Compute::Libvirt").await?;
//! ```
//!
//! Command code depends on the traits rather than [`HttpClient`] so it can be
//! exercised against an in-memory backend.

mod error;
mod http;
mod image;
mod network;

use async_trait::async_trait;

pub use error::{ClientError, Result};
pub use http::{ClientConfig, HttpClient};
pub use reqwest::StatusCode;

// Re-export types from the API crate for convenience
pub use openstack_api::{
    Attributes, MetadefObject, MetadefProperty, Namespace, Port, PortForwarding,
    PortForwardingAttrs, PortForwardingFilter, Protocol, Router, Uuid,
};

/// Image service metadata definitions catalog
#[async_trait]
pub trait ImageApi: Send + Sync {
    /// Look up a namespace by name
    async fn get_namespace(&self, namespace: &str) -> Result<Namespace>;

    async fn create_object(&self, namespace: &str, name: &str) -> Result<MetadefObject>;

    async fn get_object(&self, name: &str, namespace: &str) -> Result<MetadefObject>;

    async fn list_objects(&self, namespace: &str) -> Result<Vec<MetadefObject>>;

    async fn delete_object(&self, name: &str, namespace: &str) -> Result<()>;

    /// Create a property from a raw attribute document
    async fn create_property(
        &self,
        namespace: &str,
        attrs: Attributes,
    ) -> Result<MetadefProperty>;

    async fn get_property(&self, name: &str, namespace: &str) -> Result<MetadefProperty>;

    async fn list_properties(&self, namespace: &str) -> Result<Vec<MetadefProperty>>;

    /// Replace a property. The catalog resets any attribute missing from
    /// `attrs`, so callers send the complete document.
    async fn update_property(
        &self,
        name: &str,
        namespace: &str,
        attrs: Attributes,
    ) -> Result<MetadefProperty>;

    async fn delete_property(&self, name: &str, namespace: &str) -> Result<()>;
}

/// Network service routers, ports and gateway port forwarding
#[async_trait]
pub trait NetworkApi: Send + Sync {
    /// Resolve a router by UUID or name
    async fn find_router(&self, id_or_name: &str) -> Result<Router>;

    /// Resolve a port by UUID or name
    async fn find_port(&self, id_or_name: &str) -> Result<Port>;

    async fn create_port_forwarding(
        &self,
        router_id: &Uuid,
        attrs: &PortForwardingAttrs,
    ) -> Result<PortForwarding>;

    async fn list_port_forwardings(
        &self,
        router_id: &Uuid,
        filter: &PortForwardingFilter,
    ) -> Result<Vec<PortForwarding>>;

    async fn get_port_forwarding(&self, router_id: &Uuid, id: &str) -> Result<PortForwarding>;

    /// Partial update: only the attributes present in `attrs` change
    async fn update_port_forwarding(
        &self,
        router_id: &Uuid,
        id: &str,
        attrs: &PortForwardingAttrs,
    ) -> Result<PortForwarding>;

    async fn delete_port_forwarding(&self, router_id: &Uuid, id: &str) -> Result<()>;
}
