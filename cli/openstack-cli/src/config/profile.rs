// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Profile management types

use std::path::Path;

use anyhow::Context;
use openstack_client::ClientConfig;
use serde::{Deserialize, Serialize};

use super::paths;

/// A connection profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Profile name
    pub name: String,

    /// Image service endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Network service endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_url: Option<String>,

    /// Pre-issued identity token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Skip TLS certificate verification
    #[serde(default)]
    pub insecure: bool,
}

impl Profile {
    /// Create a new profile
    pub fn new(name: String) -> Self {
        Self {
            name,
            image_url: None,
            network_url: None,
            token: None,
            insecure: false,
        }
    }

    /// Load a profile from the config directory
    pub fn load(name: &str) -> anyhow::Result<Self> {
        Self::load_from(&paths::config_dir(), name)
    }

    pub fn load_from(config: &Path, name: &str) -> anyhow::Result<Self> {
        let path = paths::profile_path(config, name);
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read profile '{}'", name))?;
        let profile: Profile = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse profile '{}'", name))?;
        Ok(profile)
    }

    /// Save the profile to the config directory
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&paths::config_dir())
    }

    pub fn save_to(&self, config: &Path) -> anyhow::Result<()> {
        paths::ensure_config_dirs(config)?;
        let path = paths::profile_path(config, &self.name);
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// Delete the profile file
    pub fn delete(name: &str) -> anyhow::Result<()> {
        let path = paths::profile_path(&paths::config_dir(), name);
        std::fs::remove_file(&path)
            .with_context(|| format!("Failed to delete profile '{}'", name))?;
        Ok(())
    }

    /// List all available profiles
    pub fn list_all() -> anyhow::Result<Vec<String>> {
        Self::list_in(&paths::config_dir())
    }

    pub fn list_in(config: &Path) -> anyhow::Result<Vec<String>> {
        let profiles_dir = paths::profiles_dir(config);
        if !profiles_dir.exists() {
            return Ok(vec![]);
        }

        let mut profiles = vec![];
        for entry in std::fs::read_dir(&profiles_dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json")
                && let Some(stem) = path.file_stem()
            {
                profiles.push(stem.to_string_lossy().to_string());
            }
        }
        profiles.sort();
        Ok(profiles)
    }

    /// Convert to connection settings for openstack-client
    pub fn to_client_config(&self) -> ClientConfig {
        ClientConfig {
            image_url: self.image_url.clone(),
            network_url: self.network_url.clone(),
            token: self.token.clone(),
            insecure: self.insecure,
        }
    }
}

/// Main configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Current active profile name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Previous profile (for `openstack profile set-current -`)
    #[serde(rename = "oldProfile", skip_serializing_if = "Option::is_none")]
    pub old_profile: Option<String>,
}

impl Config {
    /// Load the main config file
    pub fn load() -> anyhow::Result<Self> {
        let path = paths::config_file(&paths::config_dir());
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save the main config file
    pub fn save(&self) -> anyhow::Result<()> {
        let dir = paths::config_dir();
        paths::ensure_config_dirs(&dir)?;
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(paths::config_file(&dir), content)?;
        Ok(())
    }

    /// Get the current profile name
    pub fn current_profile(&self) -> Option<&str> {
        self.profile.as_deref()
    }

    /// Set the current profile
    pub fn set_current_profile(&mut self, name: &str) {
        self.old_profile = self.profile.take();
        self.profile = Some(name.to_string());
    }
}
