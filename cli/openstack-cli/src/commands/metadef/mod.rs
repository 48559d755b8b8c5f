// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Metadata definition catalog commands

pub mod object;
pub mod property;

use anyhow::Result;
use clap::Subcommand;
use openstack_client::ImageApi;

pub use object::ObjectCommand;
pub use property::PropertyCommand;

#[derive(Subcommand, Clone)]
pub enum MetadefCommand {
    /// Manage metadef objects
    Object {
        #[command(subcommand)]
        command: ObjectCommand,
    },
    /// Manage metadef properties
    Property {
        #[command(subcommand)]
        command: PropertyCommand,
    },
}

impl MetadefCommand {
    pub async fn run(self, client: &dyn ImageApi, use_json: bool) -> Result<()> {
        match self {
            Self::Object { command } => command.run(client, use_json).await,
            Self::Property { command } => command.run(client, use_json).await,
        }
    }
}
