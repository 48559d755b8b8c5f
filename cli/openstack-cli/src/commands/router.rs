// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Router commands

use anyhow::Result;
use clap::Subcommand;
use openstack_client::NetworkApi;

use super::port_forwarding::PortForwardingCommand;

#[derive(Subcommand, Clone)]
pub enum RouterCommand {
    /// Manage the router gateway
    Gateway {
        #[command(subcommand)]
        command: GatewayCommand,
    },
}

#[derive(Subcommand, Clone)]
pub enum GatewayCommand {
    /// Manage router gateway port forwarding
    #[command(alias = "pf")]
    PortForwarding {
        #[command(subcommand)]
        command: PortForwardingCommand,
    },
}

impl RouterCommand {
    pub async fn run(self, client: &dyn NetworkApi, use_json: bool) -> Result<()> {
        match self {
            Self::Gateway {
                command: GatewayCommand::PortForwarding { command },
            } => command.run(client, use_json).await,
        }
    }
}
