// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Basic CLI tests - help, version, etc.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{config_dir, openstack_cmd};
use predicates::prelude::*;

#[test]
fn test_openstack_version() {
    let dir = config_dir();
    openstack_cmd(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("openstack"));
}

#[test]
fn test_openstack_help() {
    let dir = config_dir();
    openstack_cmd(dir.path())
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("image"))
        .stdout(predicate::str::contains("router"))
        .stdout(predicate::str::contains("profile"));
}

#[test]
fn test_metadef_help_lists_resources() {
    let dir = config_dir();
    openstack_cmd(dir.path())
        .args(["image", "metadef", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("object"))
        .stdout(predicate::str::contains("property"));
}

#[test]
fn test_port_forwarding_help_lists_operations() {
    let dir = config_dir();
    let output = openstack_cmd(dir.path())
        .args(["router", "gateway", "port-forwarding", "--help"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for op in ["create", "show", "list", "set", "delete"] {
        assert!(stdout.contains(op), "missing '{op}' in:\n{stdout}");
    }
}

#[test]
fn test_missing_subcommand_fails() {
    let dir = config_dir();
    openstack_cmd(dir.path())
        .arg("image")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_no_profile_configured() {
    let dir = config_dir();
    openstack_cmd(dir.path())
        .args(["image", "metadef", "object", "list", "OS::Compute"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No profile configured"));
}
