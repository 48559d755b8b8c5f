// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Common types used across services

/// UUID type
pub type Uuid = uuid::Uuid;

/// RFC3339 timestamp
pub type Timestamp = String;

/// Loosely-typed JSON attribute mapping sent as a request body
pub type Attributes = serde_json::Map<String, serde_json::Value>;

/// Lowest valid TCP/UDP protocol port
pub const MIN_PROTOCOL_PORT: i64 = 1;

/// Highest valid TCP/UDP protocol port
pub const MAX_PROTOCOL_PORT: i64 = 65535;
