// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The weight table: selection membership and weights as one entity.
//!
//! A [`WeightTable`] is an insertion-ordered list of `(strategy, weight)`
//! entries. Selecting a strategy adds its entry; removing it drops the
//! entry and its weight together, so a weight can never outlive its
//! selection.
//!
//! # Invariants
//!
//! - Strategies are unique (addresses are canonical, so `==` is the
//!   case-insensitive comparison).
//! - Every weight is in `[0, 10000]` ([`Bps`] guarantees it).
//! - After any redistribution, or any capped write, the total is
//!   `≤ 10000`. A raw [`WeightTable::set_weight`] may leave the total
//!   above 10000 until the next redistribution.

use crate::policy::RedistributionPolicy;
use crate::{EqualSplit, Normalize};
use basis_points::{Address, Bps, TOTAL_BPS};
use std::fmt;

/// One selected strategy and its weight.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct WeightEntry {
    pub strategy: Address,
    pub weight: Bps,
}

/// A replacement weight emitted by a redistribution, one per selected
/// strategy (unchanged entries included).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct WeightUpdate {
    pub strategy: Address,
    pub previous: Bps,
    pub weight: Bps,
}

impl WeightUpdate {
    /// Returns `true` if the weight actually moved.
    pub fn changed(&self) -> bool {
        self.previous != self.weight
    }
}

/// Outcome of a capped write: what was asked for and what was stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct CappedWeight {
    /// The raw requested value in bps (may be negative or above 10000).
    pub requested: i64,
    /// The value actually stored.
    pub applied: Bps,
    /// `true` if `applied` differs from `requested`.
    pub clamped: bool,
}

/// The unallocated remainder of the selection, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct BufferReport {
    /// Sum of the selected weights in bps (may transiently exceed 10000).
    pub allocated_bps: u64,
    /// `max(0, 10000 − allocated)`.
    pub buffer: Bps,
}

impl BufferReport {
    /// Buffer as a percentage (`1000` bps → `10.0`).
    pub fn percent(&self) -> f64 {
        self.buffer.as_percent()
    }
}

impl fmt::Display for BufferReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.buffer)
    }
}

/// Ordered mapping from selected strategy to weight.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct WeightTable {
    entries: Vec<WeightEntry>,
}

impl WeightTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Membership ─────────────────────────────────────────────

    /// Selects a strategy with zero weight.
    ///
    /// Returns `false` (and changes nothing) if it is already selected.
    pub fn select(&mut self, strategy: Address) -> bool {
        self.select_with_weight(strategy, Bps::ZERO)
    }

    /// Selects a strategy with an initial weight.
    ///
    /// Returns `false` (and changes nothing) if it is already selected.
    pub fn select_with_weight(&mut self, strategy: Address, weight: Bps) -> bool {
        if self.contains(&strategy) {
            return false;
        }
        self.entries.push(WeightEntry { strategy, weight });
        true
    }

    /// Removes a strategy and its weight. Returns the dropped weight.
    pub fn remove(&mut self, strategy: &Address) -> Option<Bps> {
        let pos = self.position(strategy)?;
        Some(self.entries.remove(pos).weight)
    }

    pub fn contains(&self, strategy: &Address) -> bool {
        self.position(strategy).is_some()
    }

    /// Number of selected strategies.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // ── Reads ──────────────────────────────────────────────────

    /// Returns the weight of a selected strategy.
    pub fn weight(&self, strategy: &Address) -> Option<Bps> {
        self.position(strategy).map(|i| self.entries[i].weight)
    }

    /// Iterates entries in selection order.
    pub fn iter(&self) -> impl Iterator<Item = &WeightEntry> {
        self.entries.iter()
    }

    /// Selected strategies in selection order.
    pub fn strategies(&self) -> Vec<Address> {
        self.entries.iter().map(|e| e.strategy.clone()).collect()
    }

    /// Weights in selection order.
    pub fn weights(&self) -> Vec<Bps> {
        self.entries.iter().map(|e| e.weight).collect()
    }

    /// Sum of all selected weights in bps.
    pub fn total_bps(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.weight.as_u32())).sum()
    }

    /// The unallocated remainder, `max(0, 10000 − total)`.
    pub fn buffer(&self) -> Bps {
        Bps::unallocated(self.total_bps())
    }

    /// The buffer value as delivered to a display sink.
    pub fn buffer_report(&self) -> BufferReport {
        BufferReport {
            allocated_bps: self.total_bps(),
            buffer: self.buffer(),
        }
    }

    /// `true` exactly when the selected weights sum to 10000.
    pub fn is_fully_allocated(&self) -> bool {
        self.total_bps() == u64::from(TOTAL_BPS)
    }

    // ── Single-entry writes ────────────────────────────────────

    /// Stores a weight without capping against the other entries.
    ///
    /// The total may exceed 10000 afterwards; a redistribution restores
    /// the invariant. Returns `false` if the strategy is not selected.
    pub fn set_weight(&mut self, strategy: &Address, weight: Bps) -> bool {
        match self.position(strategy) {
            Some(i) => {
                self.entries[i].weight = weight;
                true
            }
            None => false,
        }
    }

    /// Stores a weight clamped so the total stays within 10000.
    ///
    /// The stored value is `clamp(requested, 0, 10000 − sum(others))`.
    /// Returns `None` if the strategy is not selected.
    pub fn set_weight_capped(&mut self, strategy: &Address, requested: i64) -> Option<CappedWeight> {
        let pos = self.position(strategy)?;

        let others: u64 = self
            .entries
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != pos)
            .map(|(_, e)| u64::from(e.weight.as_u32()))
            .sum();
        let headroom = Bps::unallocated(others);

        let applied = Bps::from_bps_clamped(requested).min(headroom);
        let clamped = i64::from(applied.as_u32()) != requested;
        if clamped {
            tracing::debug!(
                strategy = %strategy,
                requested,
                applied = applied.as_u32(),
                "weight clamped to remaining headroom {headroom}"
            );
        }

        self.entries[pos].weight = applied;
        Some(CappedWeight {
            requested,
            applied,
            clamped,
        })
    }

    /// Percent-entry variant of [`Self::set_weight_capped`].
    ///
    /// The percentage is rounded to the nearest bps and passed on
    /// unclamped, so out-of-range input shows up as `clamped`. Non-finite
    /// input counts as zero.
    pub fn set_weight_percent(&mut self, strategy: &Address, percent: f64) -> Option<CappedWeight> {
        let requested = if percent.is_finite() {
            (percent * 100.0).round() as i64
        } else {
            0
        };
        self.set_weight_capped(strategy, requested)
    }

    // ── Redistribution ─────────────────────────────────────────

    /// Replaces every weight using `policy`, aiming at `target`.
    ///
    /// Returns one update per selected strategy, in selection order. An
    /// empty table yields no updates.
    ///
    /// A policy output with the wrong length, or summing above `target`,
    /// is discarded in favour of [`Normalize`] aimed at the same target.
    pub fn redistribute(
        &mut self,
        policy: &dyn RedistributionPolicy,
        target: Bps,
    ) -> Vec<WeightUpdate> {
        if self.entries.is_empty() {
            return Vec::new();
        }

        let current = self.weights();
        let mut next = policy.allocate(&current, target);
        let total: u64 = next.iter().map(|w| u64::from(w.as_u32())).sum();
        if next.len() != self.entries.len() || total > u64::from(target.as_u32()) {
            tracing::warn!(
                policy = policy.name(),
                expected = self.entries.len(),
                returned = next.len(),
                total,
                "policy output rejected, normalizing to {target} instead"
            );
            next = Normalize::new().allocate(&current, target);
        }

        tracing::debug!(
            policy = policy.name(),
            entries = self.entries.len(),
            "redistributing to {target}"
        );

        self.entries
            .iter_mut()
            .zip(next)
            .map(|(entry, weight)| {
                let previous = std::mem::replace(&mut entry.weight, weight);
                WeightUpdate {
                    strategy: entry.strategy.clone(),
                    previous,
                    weight,
                }
            })
            .collect()
    }

    /// Equal split of the full 10000.
    pub fn distribute_equally(&mut self) -> Vec<WeightUpdate> {
        self.redistribute(&EqualSplit::new(), Bps::MAX)
    }

    /// Proportional rescale to `target` (largest remainder).
    pub fn normalize_to(&mut self, target: Bps) -> Vec<WeightUpdate> {
        self.redistribute(&Normalize::new(), target)
    }

    /// Uniform buffer carve-out: rescale the selection to `10000 − reserve`.
    pub fn reserve_buffer(&mut self, reserve: Bps) -> Vec<WeightUpdate> {
        self.normalize_to(Bps::MAX.saturating_sub(reserve))
    }

    /// Returns a human-readable summary of the table.
    pub fn summary(&self) -> String {
        format!(
            "{} strategies, allocated {:.2}%, buffer {}{}",
            self.len(),
            self.total_bps() as f64 / 100.0,
            self.buffer(),
            if self.is_fully_allocated() { " (complete)" } else { "" },
        )
    }

    fn position(&self, strategy: &Address) -> Option<usize> {
        self.entries.iter().position(|e| &e.strategy == strategy)
    }
}
