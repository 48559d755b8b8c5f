// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Network service router, port and gateway port forwarding endpoints

use async_trait::async_trait;
use openstack_api::{
    Port, PortBody, PortForwarding, PortForwardingAttrs, PortForwardingBody,
    PortForwardingFilter, PortForwardingList, PortList, Router, RouterBody, RouterList, Uuid,
};
use reqwest::Method;

use crate::NetworkApi;
use crate::error::{ClientError, Result};
use crate::http::HttpClient;

const ROUTER: &str = "Router";
const PORT: &str = "Port";
const PORT_FORWARDING: &str = "router gateway port forwarding";

/// Pick the only element of a name query result
fn single<T>(mut found: Vec<T>, resource: &'static str, name: &str) -> Result<T> {
    match found.len() {
        0 => Err(ClientError::NotFound {
            resource,
            id: name.to_string(),
        }),
        1 => Ok(found.remove(0)),
        _ => Err(ClientError::Ambiguous {
            resource,
            name: name.to_string(),
        }),
    }
}

fn forwardings_path(router_id: &Uuid) -> Vec<String> {
    vec![
        "v2.0".to_string(),
        "routers".to_string(),
        router_id.to_string(),
        "gateway_port_forwardings".to_string(),
    ]
}

impl HttpClient {
    fn forwardings_endpoint(&self, router_id: &Uuid, id: Option<&str>) -> Result<url::Url> {
        let mut path = forwardings_path(router_id);
        if let Some(id) = id {
            path.push(id.to_string());
        }
        let segments: Vec<&str> = path.iter().map(String::as_str).collect();
        self.network_endpoint(&segments)
    }
}

#[async_trait]
impl NetworkApi for HttpClient {
    async fn find_router(&self, id_or_name: &str) -> Result<Router> {
        if Uuid::parse_str(id_or_name).is_ok() {
            let url = self.network_endpoint(&["v2.0", "routers", id_or_name])?;
            match self
                .json::<RouterBody>(self.request(Method::GET, url), ROUTER, id_or_name)
                .await
            {
                Ok(body) => return Ok(body.router),
                Err(e) if e.is_not_found() => {}
                Err(e) => return Err(e),
            }
        }

        let url = self.network_endpoint(&["v2.0", "routers"])?;
        let request = self
            .request(Method::GET, url)
            .query(&[("name", id_or_name)]);
        let list: RouterList = self.json(request, ROUTER, id_or_name).await?;
        single(list.routers, ROUTER, id_or_name)
    }

    async fn find_port(&self, id_or_name: &str) -> Result<Port> {
        if Uuid::parse_str(id_or_name).is_ok() {
            let url = self.network_endpoint(&["v2.0", "ports", id_or_name])?;
            match self
                .json::<PortBody>(self.request(Method::GET, url), PORT, id_or_name)
                .await
            {
                Ok(body) => return Ok(body.port),
                Err(e) if e.is_not_found() => {}
                Err(e) => return Err(e),
            }
        }

        let url = self.network_endpoint(&["v2.0", "ports"])?;
        let request = self
            .request(Method::GET, url)
            .query(&[("name", id_or_name)]);
        let list: PortList = self.json(request, PORT, id_or_name).await?;
        single(list.ports, PORT, id_or_name)
    }

    async fn create_port_forwarding(
        &self,
        router_id: &Uuid,
        attrs: &PortForwardingAttrs,
    ) -> Result<PortForwarding> {
        let url = self.forwardings_endpoint(router_id, None)?;
        let body = PortForwardingBody {
            gateway_port_forwarding: attrs,
        };
        let created: PortForwardingBody<PortForwarding> = self
            .json(
                self.request(Method::POST, url).json(&body),
                ROUTER,
                &router_id.to_string(),
            )
            .await?;
        Ok(created.gateway_port_forwarding)
    }

    async fn list_port_forwardings(
        &self,
        router_id: &Uuid,
        filter: &PortForwardingFilter,
    ) -> Result<Vec<PortForwarding>> {
        let url = self.forwardings_endpoint(router_id, None)?;
        let list: PortForwardingList = self
            .json(
                self.request(Method::GET, url).query(filter),
                ROUTER,
                &router_id.to_string(),
            )
            .await?;
        Ok(list.gateway_port_forwardings)
    }

    async fn get_port_forwarding(&self, router_id: &Uuid, id: &str) -> Result<PortForwarding> {
        let url = self.forwardings_endpoint(router_id, Some(id))?;
        let body: PortForwardingBody<PortForwarding> = self
            .json(self.request(Method::GET, url), PORT_FORWARDING, id)
            .await?;
        Ok(body.gateway_port_forwarding)
    }

    async fn update_port_forwarding(
        &self,
        router_id: &Uuid,
        id: &str,
        attrs: &PortForwardingAttrs,
    ) -> Result<PortForwarding> {
        let url = self.forwardings_endpoint(router_id, Some(id))?;
        let body = PortForwardingBody {
            gateway_port_forwarding: attrs,
        };
        let updated: PortForwardingBody<PortForwarding> = self
            .json(
                self.request(Method::PUT, url).json(&body),
                PORT_FORWARDING,
                id,
            )
            .await?;
        Ok(updated.gateway_port_forwarding)
    }

    async fn delete_port_forwarding(&self, router_id: &Uuid, id: &str) -> Result<()> {
        let url = self.forwardings_endpoint(router_id, Some(id))?;
        self.send(self.request(Method::DELETE, url), PORT_FORWARDING, id)
            .await?;
        Ok(())
    }
}
