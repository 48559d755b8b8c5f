// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Image service commands

use anyhow::Result;
use clap::Subcommand;
use openstack_client::ImageApi;

use super::metadef::MetadefCommand;

#[derive(Subcommand, Clone)]
pub enum ImageCommand {
    /// Manage image metadata definitions
    Metadef {
        #[command(subcommand)]
        command: MetadefCommand,
    },
}

impl ImageCommand {
    pub async fn run(self, client: &dyn ImageApi, use_json: bool) -> Result<()> {
        match self {
            Self::Metadef { command } => command.run(client, use_json).await,
        }
    }
}
