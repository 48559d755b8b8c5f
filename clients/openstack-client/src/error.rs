// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Error types for openstack-client

use thiserror::Error;

pub type Result<T, E = ClientError> = std::result::Result<T, E>;

/// Errors returned by service calls
#[derive(Error, Debug)]
pub enum ClientError {
    /// The named resource does not exist
    #[error("No {resource} found for {id}")]
    NotFound { resource: &'static str, id: String },

    /// A name lookup matched more than one resource
    #[error("More than one {resource} exists with the name '{name}'")]
    Ambiguous { resource: &'static str, name: String },

    /// The service answered with an error status
    #[error("{status}: {message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },

    /// No endpoint URL configured for the service being called
    #[error("No {0} endpoint configured")]
    MissingEndpoint(&'static str),

    /// Endpoint URL cannot carry path segments
    #[error("Invalid endpoint URL: {0}")]
    InvalidEndpoint(String),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// Transport failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
