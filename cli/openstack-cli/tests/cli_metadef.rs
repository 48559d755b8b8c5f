// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Metadef object and property CLI tests
//!
//! These only exercise argument handling and local validation, which fail
//! before any request is sent.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{UNREACHABLE_URL, config_dir, openstack_cmd};
use predicates::prelude::*;

#[test]
fn test_property_create_requires_all_flags() {
    let dir = config_dir();
    openstack_cmd(dir.path())
        .args([
            "--image-url",
            UNREACHABLE_URL,
            "image",
            "metadef",
            "property",
            "create",
            "--name",
            "hw_cpu_policy",
            "--title",
            "CPU Policy",
            "--type",
            "string",
            "OS::Compute",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--schema"));
}

#[test]
fn test_property_create_invalid_schema() {
    let dir = config_dir();
    openstack_cmd(dir.path())
        .args([
            "--image-url",
            UNREACHABLE_URL,
            "image",
            "metadef",
            "property",
            "create",
            "--name",
            "hw_cpu_policy",
            "--title",
            "CPU Policy",
            "--type",
            "string",
            "--schema",
            "not-json",
            "OS::Compute",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load JSON schema:"));
}

#[test]
fn test_property_set_schema_must_be_object() {
    let dir = config_dir();
    openstack_cmd(dir.path())
        .args([
            "--image-url",
            UNREACHABLE_URL,
            "image",
            "metadef",
            "property",
            "set",
            "--schema",
            "[\"a\"]",
            "OS::Compute",
            "hw_cpu_policy",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Failed to load JSON schema: expected a JSON object, got an array",
        ));
}

#[test]
fn test_object_create_requires_namespace() {
    let dir = config_dir();
    openstack_cmd(dir.path())
        .args([
            "--image-url",
            UNREACHABLE_URL,
            "image",
            "metadef",
            "object",
            "create",
            "cpu_pinning",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--namespace"));
}

#[test]
fn test_object_delete_requires_a_target() {
    let dir = config_dir();
    openstack_cmd(dir.path())
        .args(["image", "metadef", "object", "delete", "OS::Compute"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_unreachable_service_reports_failure() {
    let dir = config_dir();
    openstack_cmd(dir.path())
        .args([
            "--image-url",
            UNREACHABLE_URL,
            "image",
            "metadef",
            "object",
            "show",
            "OS::Compute",
            "cpu_pinning",
        ])
        .assert()
        .failure();
}
