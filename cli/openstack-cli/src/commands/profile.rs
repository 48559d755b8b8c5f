// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Profile management commands

use crate::config::{Config, Profile};
use crate::output::{json, table};
use anyhow::Result;
use clap::Subcommand;

#[derive(Subcommand, Clone)]
pub enum ProfileCommand {
    /// List all profiles
    #[command(alias = "ls")]
    List,

    /// Get profile details
    Get {
        /// Profile name (defaults to current)
        name: Option<String>,
    },

    /// Create a new profile
    Create {
        /// Profile name
        name: String,
        /// Image service (Glance) endpoint
        #[arg(long)]
        image_url: Option<String>,
        /// Network service (Neutron) endpoint
        #[arg(long)]
        network_url: Option<String>,
        /// Identity token sent as X-Auth-Token
        #[arg(long)]
        token: Option<String>,
        /// Skip TLS verification
        #[arg(long)]
        insecure: bool,
    },

    /// Delete profile(s)
    #[command(alias = "rm")]
    Delete {
        /// Profile name(s)
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Set the current profile
    SetCurrent {
        /// Profile name (use '-' for previous)
        name: String,
    },
}

impl ProfileCommand {
    pub fn run(self, use_json: bool) -> Result<()> {
        match self {
            Self::List => list_profiles(use_json),
            Self::Get { name } => get_profile(name, use_json),
            Self::Create {
                name,
                image_url,
                network_url,
                token,
                insecure,
            } => create_profile(name, image_url, network_url, token, insecure),
            Self::Delete { names } => delete_profiles(&names),
            Self::SetCurrent { name } => set_current_profile(&name),
        }
    }
}

fn list_profiles(use_json: bool) -> Result<()> {
    let config = Config::load()?;
    let current = config.current_profile();

    let mut profiles = Vec::new();
    for name in Profile::list_all()? {
        match Profile::load(&name) {
            Ok(profile) => profiles.push(profile),
            Err(e) => tracing::warn!("skipping profile '{}': {:#}", name, e),
        }
    }

    if use_json {
        return json::print_json(&profiles);
    }

    let mut tbl = table::create_table(&["NAME", "CURR", "IMAGE URL", "NETWORK URL"]);
    for profile in &profiles {
        let marker = if Some(profile.name.as_str()) == current {
            "*"
        } else {
            ""
        };
        tbl.add_row(vec![
            profile.name.as_str(),
            marker,
            profile.image_url.as_deref().unwrap_or("-"),
            profile.network_url.as_deref().unwrap_or("-"),
        ]);
    }
    table::print_table(tbl);
    Ok(())
}

fn get_profile(name: Option<String>, use_json: bool) -> Result<()> {
    let profile = match name {
        Some(n) => Profile::load(&n)?,
        None => {
            let config = Config::load()?;
            let current = config
                .current_profile()
                .ok_or_else(|| anyhow::anyhow!("No current profile set"))?;
            Profile::load(current)?
        }
    };

    if use_json {
        json::print_json(&profile)?;
    } else {
        println!("Name:        {}", profile.name);
        println!("Image URL:   {}", profile.image_url.as_deref().unwrap_or("-"));
        println!("Network URL: {}", profile.network_url.as_deref().unwrap_or("-"));
        println!(
            "Token:       {}",
            if profile.token.is_some() { "(set)" } else { "-" }
        );
        println!("Insecure:    {}", profile.insecure);
    }
    Ok(())
}

fn create_profile(
    name: String,
    image_url: Option<String>,
    network_url: Option<String>,
    token: Option<String>,
    insecure: bool,
) -> Result<()> {
    if Profile::list_all()?.contains(&name) {
        return Err(anyhow::anyhow!("Profile '{}' already exists", name));
    }
    if image_url.is_none() && network_url.is_none() {
        return Err(anyhow::anyhow!(
            "A profile needs at least one of --image-url or --network-url"
        ));
    }

    let profile = Profile {
        image_url,
        network_url,
        token,
        insecure,
        ..Profile::new(name.clone())
    };
    profile.save()?;
    println!("Created profile '{}'", name);

    // The first profile becomes current
    let mut config = Config::load()?;
    if config.current_profile().is_none() {
        config.set_current_profile(&name);
        config.save()?;
        println!("Set as current profile");
    }

    Ok(())
}

fn delete_profiles(names: &[String]) -> Result<()> {
    for name in names {
        Profile::delete(name)?;
        println!("Deleted profile '{}'", name);
    }
    Ok(())
}

fn set_current_profile(name: &str) -> Result<()> {
    let mut config = Config::load()?;

    let name = if name == "-" {
        config
            .old_profile
            .clone()
            .ok_or_else(|| anyhow::anyhow!("No previous profile"))?
    } else {
        // Verify profile exists
        Profile::load(name)?;
        name.to_string()
    };

    config.set_current_profile(&name);
    config.save()?;
    println!("Current profile: {}", name);
    Ok(())
}
