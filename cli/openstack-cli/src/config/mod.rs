// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Configuration management

pub mod paths;
pub mod profile;

pub use profile::{Config, Profile};

use anyhow::Result;

/// Resolve which profile to use
///
/// Priority:
/// 1. `--profile` argument (or OS_PROFILE, via clap)
/// 2. None when endpoints are given directly on the command line or in
///    OS_IMAGE_URL / OS_NETWORK_URL
/// 3. Current profile from config.json
pub fn resolve_profile(cli_profile: Option<&str>, has_endpoints: bool) -> Result<Option<Profile>> {
    if let Some(name) = cli_profile {
        return Profile::load(name).map(Some);
    }

    if has_endpoints {
        return Ok(None);
    }

    let config = Config::load()?;
    if let Some(name) = config.current_profile() {
        return Profile::load(name).map(Some);
    }

    Err(anyhow::anyhow!(
        "No profile configured. Use 'openstack profile create' or set OS_IMAGE_URL / OS_NETWORK_URL."
    ))
}
