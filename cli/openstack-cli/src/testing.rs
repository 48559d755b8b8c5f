// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! In-memory image and network services for command tests
//!
//! Records every call as a short string, echoes created resources back and
//! can be told to fail deletes of particular names. [`LogCapture`] collects
//! the log lines a command emits.

use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use openstack_client::{
    Attributes, ClientError, ImageApi, MetadefObject, MetadefProperty, Namespace, NetworkApi,
    Port, PortForwarding, PortForwardingAttrs, PortForwardingFilter, Result, Router, StatusCode,
    Uuid,
};
use serde_json::Value;
use tracing_subscriber::fmt::MakeWriter;

pub const ROUTER_ID: Uuid = Uuid::from_u128(0x5a1e_0000_0000_0000_0000_0000_0000_0001);
pub const PORT_ID: Uuid = Uuid::from_u128(0x5a1e_0000_0000_0000_0000_0000_0000_0002);

#[derive(Default)]
pub struct StubCloud {
    calls: Mutex<Vec<String>>,
    namespaces: Vec<String>,
    routers: Vec<Router>,
    ports: Vec<Port>,
    objects: Mutex<Vec<MetadefObject>>,
    properties: Mutex<Vec<MetadefProperty>>,
    forwardings: Mutex<Vec<PortForwarding>>,
    failing_deletes: Mutex<Vec<String>>,
    last_property_attrs: Mutex<Option<Attributes>>,
    last_port_forwarding_attrs: Mutex<Option<PortForwardingAttrs>>,
}

impl StubCloud {
    pub fn with_namespace(namespace: &str) -> Self {
        Self {
            namespaces: vec![namespace.to_string()],
            ..Default::default()
        }
    }

    /// One router "edge" and one port "web-port"
    pub fn with_network() -> Self {
        Self {
            routers: vec![Router {
                id: ROUTER_ID,
                name: "edge".to_string(),
                status: Some("ACTIVE".to_string()),
                project_id: None,
            }],
            ports: vec![Port {
                id: PORT_ID,
                name: "web-port".to_string(),
                network_id: None,
                status: Some("ACTIVE".to_string()),
            }],
            ..Default::default()
        }
    }

    pub fn add_object(&self, namespace: &str, name: &str) {
        self.objects.lock().unwrap().push(MetadefObject {
            namespace_name: Some(namespace.to_string()),
            name: name.to_string(),
            ..Default::default()
        });
    }

    pub fn add_property(&self, namespace: &str, mut property: MetadefProperty) {
        property.namespace_name = Some(namespace.to_string());
        self.properties.lock().unwrap().push(property);
    }

    /// Make every delete of `name` fail with a conflict
    pub fn fail_deletes_of(&self, name: &str) {
        self.failing_deletes.lock().unwrap().push(name.to_string());
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    pub fn last_property_attrs(&self) -> Option<Attributes> {
        self.last_property_attrs.lock().unwrap().clone()
    }

    pub fn last_port_forwarding_attrs(&self) -> Option<PortForwardingAttrs> {
        self.last_port_forwarding_attrs.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn check_delete(&self, name: &str) -> Result<()> {
        if self.failing_deletes.lock().unwrap().iter().any(|n| n == name) {
            return Err(ClientError::Api {
                status: StatusCode::CONFLICT,
                message: format!("{} is in use", name),
            });
        }
        Ok(())
    }
}

/// Formatted log output, shared between the subscriber and the test
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    /// Route events on the current thread here until the guard drops.
    /// Formatted the same way as the binary's stderr logger.
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .without_time()
            .with_target(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.0.lock().unwrap())
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Lines logged at ERROR level, level prefix stripped
    pub fn errors(&self) -> Vec<String> {
        self.lines()
            .iter()
            .filter_map(|line| line.trim_start().strip_prefix("ERROR "))
            .map(str::to_string)
            .collect()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn not_found(resource: &'static str, id: &str) -> ClientError {
    ClientError::NotFound {
        resource,
        id: id.to_string(),
    }
}

#[async_trait]
impl ImageApi for StubCloud {
    async fn get_namespace(&self, namespace: &str) -> Result<Namespace> {
        self.record(format!("get_namespace {}", namespace));
        if !self.namespaces.iter().any(|n| n == namespace) {
            return Err(not_found("metadef namespace", namespace));
        }
        Ok(Namespace {
            namespace: namespace.to_string(),
            display_name: None,
            description: None,
            visibility: None,
            protected: None,
            owner: None,
            created_at: None,
            updated_at: None,
        })
    }

    async fn create_object(&self, namespace: &str, name: &str) -> Result<MetadefObject> {
        self.record(format!("create_object {} {}", namespace, name));
        self.add_object(namespace, name);
        self.get_stored_object(name, namespace)
    }

    async fn get_object(&self, name: &str, namespace: &str) -> Result<MetadefObject> {
        self.record(format!("get_object {} {}", name, namespace));
        self.get_stored_object(name, namespace)
    }

    async fn list_objects(&self, namespace: &str) -> Result<Vec<MetadefObject>> {
        self.record(format!("list_objects {}", namespace));
        let objects = self.objects.lock().unwrap();
        Ok(objects
            .iter()
            .filter(|o| o.namespace_name.as_deref() == Some(namespace))
            .cloned()
            .collect())
    }

    async fn delete_object(&self, name: &str, namespace: &str) -> Result<()> {
        self.record(format!("delete_object {} {}", name, namespace));
        self.check_delete(name)?;
        let mut objects = self.objects.lock().unwrap();
        let before = objects.len();
        objects.retain(|o| !(o.name == name && o.namespace_name.as_deref() == Some(namespace)));
        if objects.len() == before {
            return Err(not_found("metadef object", name));
        }
        Ok(())
    }

    async fn create_property(
        &self,
        namespace: &str,
        attrs: Attributes,
    ) -> Result<MetadefProperty> {
        self.record(format!("create_property {}", namespace));
        let mut property: MetadefProperty = serde_json::from_value(Value::Object(attrs))?;
        property.namespace_name = Some(namespace.to_string());
        self.properties.lock().unwrap().push(property.clone());
        Ok(property)
    }

    async fn get_property(&self, name: &str, namespace: &str) -> Result<MetadefProperty> {
        self.record(format!("get_property {} {}", name, namespace));
        self.get_stored_property(name, namespace)
    }

    async fn list_properties(&self, namespace: &str) -> Result<Vec<MetadefProperty>> {
        self.record(format!("list_properties {}", namespace));
        let properties = self.properties.lock().unwrap();
        Ok(properties
            .iter()
            .filter(|p| p.namespace_name.as_deref() == Some(namespace))
            .cloned()
            .collect())
    }

    async fn update_property(
        &self,
        name: &str,
        namespace: &str,
        attrs: Attributes,
    ) -> Result<MetadefProperty> {
        self.record(format!("update_property {} {}", name, namespace));
        *self.last_property_attrs.lock().unwrap() = Some(attrs.clone());
        let mut updated: MetadefProperty = serde_json::from_value(Value::Object(attrs))?;
        updated.namespace_name = Some(namespace.to_string());

        let mut properties = self.properties.lock().unwrap();
        let slot = properties
            .iter_mut()
            .find(|p| p.name == name && p.namespace_name.as_deref() == Some(namespace))
            .ok_or_else(|| not_found("metadef property", name))?;
        *slot = updated.clone();
        Ok(updated)
    }

    async fn delete_property(&self, name: &str, namespace: &str) -> Result<()> {
        self.record(format!("delete_property {} {}", name, namespace));
        self.check_delete(name)?;
        let mut properties = self.properties.lock().unwrap();
        let before = properties.len();
        properties.retain(|p| !(p.name == name && p.namespace_name.as_deref() == Some(namespace)));
        if properties.len() == before {
            return Err(not_found("metadef property", name));
        }
        Ok(())
    }
}

impl StubCloud {
    fn get_stored_object(&self, name: &str, namespace: &str) -> Result<MetadefObject> {
        self.objects
            .lock()
            .unwrap()
            .iter()
            .find(|o| o.name == name && o.namespace_name.as_deref() == Some(namespace))
            .cloned()
            .ok_or_else(|| not_found("metadef object", name))
    }

    fn get_stored_property(&self, name: &str, namespace: &str) -> Result<MetadefProperty> {
        self.properties
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.name == name && p.namespace_name.as_deref() == Some(namespace))
            .cloned()
            .ok_or_else(|| not_found("metadef property", name))
    }
}

#[async_trait]
impl NetworkApi for StubCloud {
    async fn find_router(&self, id_or_name: &str) -> Result<Router> {
        self.record(format!("find_router {}", id_or_name));
        self.routers
            .iter()
            .find(|r| r.name == id_or_name || r.id.to_string() == id_or_name)
            .cloned()
            .ok_or_else(|| not_found("Router", id_or_name))
    }

    async fn find_port(&self, id_or_name: &str) -> Result<Port> {
        self.record(format!("find_port {}", id_or_name));
        self.ports
            .iter()
            .find(|p| p.name == id_or_name || p.id.to_string() == id_or_name)
            .cloned()
            .ok_or_else(|| not_found("Port", id_or_name))
    }

    async fn create_port_forwarding(
        &self,
        router_id: &Uuid,
        attrs: &PortForwardingAttrs,
    ) -> Result<PortForwarding> {
        self.record("create_port_forwarding".to_string());
        *self.last_port_forwarding_attrs.lock().unwrap() = Some(attrs.clone());

        let mut forwardings = self.forwardings.lock().unwrap();
        let pf = PortForwarding {
            id: Uuid::from_u128(0x9f00 + forwardings.len() as u128),
            router_id: Some(*router_id),
            internal_port_id: attrs.internal_port_id,
            internal_ip_address: attrs.internal_ip_address.clone(),
            internal_port: attrs.internal_port,
            gw_ip_address: Some("203.0.113.7".to_string()),
            external_port: attrs.external_port,
            protocol: attrs.protocol.map(|p| p.to_string()),
            description: attrs.description.clone(),
        };
        forwardings.push(pf.clone());
        Ok(pf)
    }

    async fn list_port_forwardings(
        &self,
        router_id: &Uuid,
        filter: &PortForwardingFilter,
    ) -> Result<Vec<PortForwarding>> {
        self.record("list_port_forwardings".to_string());
        let forwardings = self.forwardings.lock().unwrap();
        Ok(forwardings
            .iter()
            .filter(|pf| pf.router_id.as_ref() == Some(router_id))
            .filter(|pf| filter.internal_port_id.is_none() || pf.internal_port_id == filter.internal_port_id)
            .filter(|pf| filter.external_port.is_none() || pf.external_port == filter.external_port)
            .filter(|pf| {
                filter
                    .protocol
                    .is_none_or(|p| pf.protocol.as_deref() == Some(p.to_string().as_str()))
            })
            .cloned()
            .collect())
    }

    async fn get_port_forwarding(&self, router_id: &Uuid, id: &str) -> Result<PortForwarding> {
        self.record(format!("get_port_forwarding {}", id));
        self.forwardings
            .lock()
            .unwrap()
            .iter()
            .find(|pf| pf.router_id.as_ref() == Some(router_id) && pf.id.to_string() == id)
            .cloned()
            .ok_or_else(|| not_found("router gateway port forwarding", id))
    }

    async fn update_port_forwarding(
        &self,
        _router_id: &Uuid,
        id: &str,
        attrs: &PortForwardingAttrs,
    ) -> Result<PortForwarding> {
        self.record(format!("update_port_forwarding {}", id));
        *self.last_port_forwarding_attrs.lock().unwrap() = Some(attrs.clone());
        let mut forwardings = self.forwardings.lock().unwrap();
        match forwardings.iter_mut().find(|pf| pf.id.to_string() == id) {
            Some(pf) => {
                if attrs.internal_port.is_some() {
                    pf.internal_port = attrs.internal_port;
                }
                if attrs.external_port.is_some() {
                    pf.external_port = attrs.external_port;
                }
                if let Some(protocol) = attrs.protocol {
                    pf.protocol = Some(protocol.to_string());
                }
                Ok(pf.clone())
            }
            // Updates of unknown ids are only recorded
            None => Ok(PortForwarding {
                id: Uuid::nil(),
                router_id: None,
                internal_port_id: attrs.internal_port_id,
                internal_ip_address: attrs.internal_ip_address.clone(),
                internal_port: attrs.internal_port,
                gw_ip_address: None,
                external_port: attrs.external_port,
                protocol: attrs.protocol.map(|p| p.to_string()),
                description: attrs.description.clone(),
            }),
        }
    }

    async fn delete_port_forwarding(&self, router_id: &Uuid, id: &str) -> Result<()> {
        self.record(format!("delete_port_forwarding {}", id));
        self.check_delete(id)?;
        let mut forwardings = self.forwardings.lock().unwrap();
        let before = forwardings.len();
        forwardings.retain(|pf| !(pf.router_id.as_ref() == Some(router_id) && pf.id.to_string() == id));
        if forwardings.len() == before {
            return Err(not_found("router gateway port forwarding", id));
        }
        Ok(())
    }
}
