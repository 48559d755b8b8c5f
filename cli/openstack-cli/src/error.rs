// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Errors raised by command handlers before or after talking to a service

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommandError {
    /// Protocol port outside 1-65535
    #[error("The port number range is <1-65535>")]
    InvalidPort(i64),

    /// `--schema` is not a JSON object
    #[error("Failed to load JSON schema: {0}")]
    InvalidSchema(String),

    /// Some items of a batch delete failed
    #[error("{failed} of {total} {resource} failed to delete.")]
    BatchDelete {
        failed: usize,
        total: usize,
        resource: &'static str,
    },

    /// `-o` named a column the listing does not have
    #[error("Unknown column '{0}'")]
    UnknownColumn(String),
}
