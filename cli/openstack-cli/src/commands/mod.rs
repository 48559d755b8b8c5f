// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! CLI commands

pub mod image;
pub mod metadef;
pub mod port_forwarding;
pub mod profile;
pub mod router;

pub use image::ImageCommand;
pub use profile::ProfileCommand;
pub use router::RouterCommand;
