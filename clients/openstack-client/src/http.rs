// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! HTTP transport shared by the Image and Network service clients

use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::error::{ClientError, Result};

/// Header carrying a pre-issued identity token
pub const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

const USER_AGENT: &str = concat!("openstack-cli/", env!("CARGO_PKG_VERSION"));

/// Connection settings for [`HttpClient`]
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Image service endpoint, e.g. `https://image.example.com:9292`
    pub image_url: Option<String>,
    /// Network service endpoint, e.g. `https://network.example.com:9696`
    pub network_url: Option<String>,
    /// Identity token sent as `X-Auth-Token`
    pub token: Option<String>,
    /// Skip TLS certificate verification
    pub insecure: bool,
}

/// Client for the Image and Network service REST APIs
#[derive(Clone)]
pub struct HttpClient {
    http: reqwest::Client,
    image_url: Option<Url>,
    network_url: Option<Url>,
}

impl HttpClient {
    /// Create a new client
    pub fn new(config: ClientConfig) -> Result<Self> {
        // Fails only when a provider is already installed.
        let _ = rustls::crypto::ring::default_provider().install_default();

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(token) = &config.token {
            let mut value = HeaderValue::from_str(token)?;
            value.set_sensitive(true);
            headers.insert(AUTH_TOKEN_HEADER, value);
        }

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(Duration::from_secs(60))
            .danger_accept_invalid_certs(config.insecure)
            .build()?;

        Ok(Self {
            http,
            image_url: config.image_url.as_deref().map(Url::parse).transpose()?,
            network_url: config.network_url.as_deref().map(Url::parse).transpose()?,
        })
    }

    pub(crate) fn image_endpoint(&self, segments: &[&str]) -> Result<Url> {
        let base = self
            .image_url
            .as_ref()
            .ok_or(ClientError::MissingEndpoint("image"))?;
        endpoint(base, segments)
    }

    pub(crate) fn network_endpoint(&self, segments: &[&str]) -> Result<Url> {
        let base = self
            .network_url
            .as_ref()
            .ok_or(ClientError::MissingEndpoint("network"))?;
        endpoint(base, segments)
    }

    pub(crate) fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.http.request(method, url)
    }

    /// Send a request, mapping 404 to [`ClientError::NotFound`] for the
    /// given resource and any other non-success status to
    /// [`ClientError::Api`].
    pub(crate) async fn send(
        &self,
        request: RequestBuilder,
        resource: &'static str,
        id: &str,
    ) -> Result<Response> {
        let request = request.build()?;
        tracing::debug!(method = %request.method(), url = %request.url(), "sending request");

        let response = self.http.execute(request).await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound {
                resource,
                id: id.to_string(),
            });
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status,
                message: error_message(status, &body),
            });
        }

        Ok(response)
    }

    /// Send a request and decode the JSON response body
    pub(crate) async fn json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        resource: &'static str,
        id: &str,
    ) -> Result<T> {
        let response = self.send(request, resource, id).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Append percent-encoded path segments to a service base URL
fn endpoint(base: &Url, segments: &[&str]) -> Result<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| ClientError::InvalidEndpoint(base.to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Reduce an error response body to a one-line message
///
/// The Network service wraps errors as `{"NeutronError": {"message": ...}}`;
/// the Image service answers with plain text or `{"message": ...}`.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        for pointer in ["/NeutronError/message", "/message", "/error/message"] {
            if let Some(message) = value.pointer(pointer).and_then(Value::as_str) {
                return message.to_string();
            }
        }
    }

    let text = body.split_whitespace().collect::<Vec<_>>().join(" ");
    if text.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    } else {
        text
    }
}
