// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Progressive (rank-weighted) split.
//!
//! Weights follow a descending linear ramp over selection order: the entry
//! at rank `r` gets a share proportional to `N − r`. With `N` entries the
//! ramp sums to `N(N + 1) / 2`.
//!
//! ```text
//! N = 4:  ramp [4, 3, 2, 1] / 10  →  [4000, 3000, 2000, 1000]
//! N = 3:  ramp [3, 2, 1] / 6      →  [5000, 3333, 1666] + 1 to first
//! ```
//!
//! The floored leftover goes to the first (highest-ranked) entry, which
//! keeps the output non-increasing by rank.

use crate::policy::RedistributionPolicy;
use basis_points::Bps;

/// Weights ∝ `N − rank`, leftover to the first.
#[derive(Debug, Clone, Default)]
pub struct ProgressiveSplit;

impl ProgressiveSplit {
    pub fn new() -> Self {
        Self
    }
}

impl RedistributionPolicy for ProgressiveSplit {
    fn name(&self) -> &str {
        "progressive"
    }

    fn allocate(&self, current: &[Bps], target: Bps) -> Vec<Bps> {
        let n = current.len() as u64;
        if n == 0 {
            return Vec::new();
        }

        let target = u64::from(target.as_u32());
        let ramp_sum = n * (n + 1) / 2;

        let mut out: Vec<u64> = (0..n).map(|rank| target * (n - rank) / ramp_sum).collect();
        let distributed: u64 = out.iter().sum();
        out[0] += target - distributed;

        out.into_iter().map(|w| Bps::from(w as u32)).collect()
    }
}
