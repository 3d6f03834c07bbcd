// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The [`RedistributionPolicy`] trait and policy implementations.

pub mod equal;
pub mod normalize;
pub mod priority;
pub mod progressive;

use basis_points::Bps;

use crate::{EqualSplit, Normalize, PrioritizeFirst, ProgressiveSplit};

/// Trait for redistribution policies.
///
/// A policy takes the current weights of the selection, in selection order,
/// and produces a complete replacement set.
///
/// Contract for implementors:
/// - the output has exactly `current.len()` entries;
/// - the output sums to exactly `target` when `current` is non-empty;
/// - an empty `current` yields an empty output.
///
/// Policies are pure functions of their input, so they are trivially
/// unit-testable and amenable to property-based testing.
pub trait RedistributionPolicy: Send + Sync {
    /// Human-readable name of this policy.
    fn name(&self) -> &str;

    /// Produces one weight per entry of `current`, summing to `target`.
    fn allocate(&self, current: &[Bps], target: Bps) -> Vec<Bps>;
}

/// Resolves a policy from its name or a short alias.
///
/// Returns `None` for unknown names; callers decide how to report that.
pub fn policy_by_name(name: &str) -> Option<Box<dyn RedistributionPolicy>> {
    match name.trim().to_lowercase().as_str() {
        "equal" | "equal-split" => Some(Box::new(EqualSplit::new())),
        "normalize" | "proportional" => Some(Box::new(Normalize::new())),
        "prioritize-first" | "priority" => Some(Box::new(PrioritizeFirst::default())),
        "progressive" | "progressive-split" => Some(Box::new(ProgressiveSplit::new())),
        _ => None,
    }
}

/// Every built-in policy, in display order.
pub fn all_policies() -> Vec<Box<dyn RedistributionPolicy>> {
    vec![
        Box::new(EqualSplit::new()),
        Box::new(Normalize::new()),
        Box::new(PrioritizeFirst::default()),
        Box::new(ProgressiveSplit::new()),
    ]
}
