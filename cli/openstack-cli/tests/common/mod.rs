// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Test helpers for openstack-cli integration tests
//!
//! Every command runs against its own temporary config directory with the
//! OS_* environment cleared, so nothing on the host leaks in.

// Allow unused code - not every test file uses every helper
// Allow deprecated - cargo_bin is standard for CLI testing
#![allow(dead_code, deprecated)]

use assert_cmd::Command;
use std::path::Path;

/// An endpoint nothing listens on; commands that reach the network fail
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:9";

const OS_ENV: &[&str] = &[
    "OS_PROFILE",
    "OS_IMAGE_URL",
    "OS_NETWORK_URL",
    "OS_TOKEN",
    "RUST_LOG",
];

/// Get a Command for running the openstack CLI binary with an isolated
/// config directory
pub fn openstack_cmd(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("openstack").expect("Failed to find openstack binary");
    for key in OS_ENV {
        cmd.env_remove(key);
    }
    cmd.env("OS_CONFIG_DIR", config_dir);
    cmd
}

/// A fresh, empty config directory
pub fn config_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}
