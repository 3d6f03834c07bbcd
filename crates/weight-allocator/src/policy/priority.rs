// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Prioritize-first split.
//!
//! The first selected strategy takes a fixed lead share (60% by default);
//! the remaining `N − 1` strategies split the rest equally. Leftover from
//! that equal split goes to the **second** entry, so the lead share stays
//! exact.
//!
//! ```text
//! N = 3, target 10000:  [6000, 2000, 2000]
//! N = 4, target 10000:  [6000, 1334, 1333, 1333]
//! N = 1:                [10000]
//! ```

use crate::policy::RedistributionPolicy;
use basis_points::{Bps, TOTAL_BPS};

/// Default lead share for the first strategy: 60%.
const DEFAULT_LEAD_BPS: u32 = 6000;

/// Fixed lead share to the first entry, the rest shared equally.
#[derive(Debug, Clone)]
pub struct PrioritizeFirst {
    /// Share of the target given to the first entry.
    lead: Bps,
}

impl PrioritizeFirst {
    /// Creates the policy with a custom lead share.
    pub fn new(lead: Bps) -> Self {
        Self { lead }
    }

    /// The lead share given to the first entry.
    pub fn lead(&self) -> Bps {
        self.lead
    }
}

impl Default for PrioritizeFirst {
    fn default() -> Self {
        Self::new(Bps::from(DEFAULT_LEAD_BPS))
    }
}

impl RedistributionPolicy for PrioritizeFirst {
    fn name(&self) -> &str {
        "prioritize-first"
    }

    fn allocate(&self, current: &[Bps], target: Bps) -> Vec<Bps> {
        let n = current.len();
        match n {
            0 => return Vec::new(),
            1 => return vec![target],
            _ => {}
        }

        let target = target.as_u32();
        // lead is a fraction of the target, not an absolute amount.
        let first = (u64::from(target) * u64::from(self.lead.as_u32()) / u64::from(TOTAL_BPS)) as u32;
        let rest = target - first;
        let others = (n - 1) as u32;
        let each = rest / others;
        let leftover = rest - each * others;

        let mut out = Vec::with_capacity(n);
        out.push(Bps::from(first));
        out.extend(std::iter::repeat(Bps::from(each)).take(n - 1));
        out[1] = Bps::from(each + leftover);
        out
    }
}
