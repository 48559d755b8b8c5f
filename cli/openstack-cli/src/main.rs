// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! OpenStack CLI - image metadata definitions and router gateway port
//! forwarding

use anyhow::Result;
use clap::{Parser, Subcommand};
use openstack_client::{ClientConfig, HttpClient};

mod batch;
mod commands;
mod config;
mod error;
mod fields;
mod output;
mod validate;

#[cfg(test)]
mod testing;

use commands::{ImageCommand, ProfileCommand, RouterCommand};

#[derive(Parser)]
#[command(
    name = "openstack",
    version,
    about = "OpenStack command-line client",
    long_about = "Manage image metadata definitions and router gateway port forwarding"
)]
struct Cli {
    /// Profile to use
    #[arg(short, long, global = true, env = "OS_PROFILE")]
    profile: Option<String>,

    /// Image service (Glance) endpoint override
    #[arg(long, global = true, env = "OS_IMAGE_URL")]
    image_url: Option<String>,

    /// Network service (Neutron) endpoint override
    #[arg(long, global = true, env = "OS_NETWORK_URL")]
    network_url: Option<String>,

    /// Identity token override
    #[arg(long, global = true, env = "OS_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Skip TLS certificate verification
    #[arg(long, global = true)]
    insecure: bool,

    /// Output as JSON
    #[arg(short, long, global = true)]
    json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage connection profiles
    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },

    /// Image service commands
    Image {
        #[command(subcommand)]
        command: ImageCommand,
    },

    /// Router commands
    Router {
        #[command(subcommand)]
        command: RouterCommand,
    },
}

impl Cli {
    /// Connection settings from the selected profile with CLI/env overrides
    /// on top
    fn client_config(&self) -> Result<ClientConfig> {
        let has_endpoints = self.image_url.is_some() || self.network_url.is_some();
        let profile = config::resolve_profile(self.profile.as_deref(), has_endpoints)?;

        let mut client_config = profile
            .map(|p| p.to_client_config())
            .unwrap_or_default();
        if let Some(url) = &self.image_url {
            client_config.image_url = Some(url.clone());
        }
        if let Some(url) = &self.network_url {
            client_config.network_url = Some(url.clone());
        }
        if let Some(token) = &self.token {
            client_config.token = Some(token.clone());
        }
        client_config.insecure |= self.insecure;
        Ok(client_config)
    }

    fn build_client(&self) -> Result<HttpClient> {
        let client = HttpClient::new(self.client_config()?)?;
        Ok(client)
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        "openstack=debug,openstack_client=debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "openstack=warn".to_string())
    };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Profile { command } => command.clone().run(cli.json),
        Commands::Image { command } => {
            let client = cli.build_client()?;
            command.clone().run(&client, cli.json).await
        }
        Commands::Router { command } => {
            let client = cli.build_client()?;
            command.clone().run(&client, cli.json).await
        }
    }
}
