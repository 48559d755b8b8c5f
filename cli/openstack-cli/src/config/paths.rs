// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Configuration path resolution

use std::path::{Path, PathBuf};

/// Get the openstack configuration directory
///
/// Priority:
/// 1. OS_CONFIG_DIR environment variable
/// 2. XDG config dir (~/.config/openstack/ on Linux)
/// 3. ~/.openstack/
pub fn config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("OS_CONFIG_DIR") {
        return PathBuf::from(dir);
    }

    dirs::config_dir()
        .map(|dir| dir.join("openstack"))
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".openstack")
        })
}

/// Get the profiles directory under a config directory
pub fn profiles_dir(config: &Path) -> PathBuf {
    config.join("profiles.d")
}

/// Get the path to the main config file under a config directory
pub fn config_file(config: &Path) -> PathBuf {
    config.join("config.json")
}

/// Get the path to a specific profile under a config directory
pub fn profile_path(config: &Path, name: &str) -> PathBuf {
    profiles_dir(config).join(format!("{}.json", name))
}

/// Ensure config directories exist
pub fn ensure_config_dirs(config: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(config)?;
    std::fs::create_dir_all(profiles_dir(config))?;
    Ok(())
}
