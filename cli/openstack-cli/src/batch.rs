// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Best-effort batch deletes
//!
//! Every target is attempted, strictly in input order, whatever happened to
//! the ones before it. Each attempt yields an [`ItemOutcome`]; failures are
//! logged as they happen and the overall verdict is computed afterwards by
//! [`summarize`].

use std::future::Future;

use crate::error::CommandError;

/// Result of deleting one target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome {
    Deleted { target: String },
    Failed { target: String, error: String },
}

impl ItemOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Run `op` once per target, in order, never stopping early
///
/// `op` should return an error that already names the target; it is logged
/// verbatim.
pub async fn delete_each<F, Fut>(targets: &[String], mut op: F) -> Vec<ItemOutcome>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = anyhow::Result<()>>,
{
    let mut outcomes = Vec::with_capacity(targets.len());

    for target in targets {
        match op(target.clone()).await {
            Ok(()) => {
                tracing::debug!(item = %target, "deleted");
                outcomes.push(ItemOutcome::Deleted {
                    target: target.clone(),
                });
            }
            Err(e) => {
                tracing::error!("{e:#}");
                outcomes.push(ItemOutcome::Failed {
                    target: target.clone(),
                    error: format!("{e:#}"),
                });
            }
        }
    }

    outcomes
}

/// Fold per-item outcomes into the command result
pub fn summarize(outcomes: &[ItemOutcome], resource: &'static str) -> Result<(), CommandError> {
    let failed = outcomes.iter().filter(|o| o.is_failure()).count();
    if failed > 0 {
        return Err(CommandError::BatchDelete {
            failed,
            total: outcomes.len(),
            resource,
        });
    }
    Ok(())
}
