// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Proportional normalization.
//!
//! Scales every weight by `target / sum(current)` and rounds with the
//! largest-remainder method, so the result sums to exactly `target` and
//! each entry is within 1 bps of its exact proportional share.
//!
//! ```text
//! current = [5000, 3000, 1000]   (sum 9000)
//! exact   = [5555.5, 3333.3, 1111.1]
//! floors  = [5555, 3333, 1111]   (sum 9999, leftover 1)
//! result  = [5556, 3333, 1111]
//! ```
//!
//! A set already summing to `target` has zero remainders everywhere and is
//! returned unchanged. An all-zero set has no proportions to keep and falls
//! back to an equal split of `target`.

use crate::policy::RedistributionPolicy;
use crate::rounding::{largest_remainder, split_equally};
use basis_points::Bps;

/// Proportional rescale to the target with largest-remainder rounding.
#[derive(Debug, Clone, Default)]
pub struct Normalize;

impl Normalize {
    pub fn new() -> Self {
        Self
    }
}

impl RedistributionPolicy for Normalize {
    fn name(&self) -> &str {
        "normalize"
    }

    fn allocate(&self, current: &[Bps], target: Bps) -> Vec<Bps> {
        if current.is_empty() {
            return Vec::new();
        }

        let shares: Vec<u64> = current.iter().map(|w| u64::from(w.as_u32())).collect();
        if shares.iter().all(|&s| s == 0) {
            tracing::debug!(
                entries = current.len(),
                "all weights zero → falling back to equal split of {target}"
            );
            return split_equally(current.len(), target);
        }

        largest_remainder(&shares, target.as_u32())
            .into_iter()
            .map(Bps::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bps(v: &[u32]) -> Vec<Bps> {
        v.iter().copied().map(Bps::from).collect()
    }

    fn raw(v: &[Bps]) -> Vec<u32> {
        v.iter().map(Bps::as_u32).collect()
    }

    #[test]
    fn test_normalize_scales_up() {
        let out = Normalize::new().allocate(&bps(&[5000, 3000, 1000]), Bps::MAX);
        assert_eq!(raw(&out), vec![5556, 3333, 1111]);
    }

    #[test]
    fn test_normalize_to_buffer_target() {
        let out = Normalize::new().allocate(&bps(&[8000, 2000]), Bps::from(9000));
        assert_eq!(raw(&out), vec![7200, 1800]);
    }

    #[test]
    fn test_normalize_scales_down_from_over_allocation() {
        // Transiently over-allocated input (sum 15000).
        let out = Normalize::new().allocate(&bps(&[10_000, 5000]), Bps::MAX);
        assert_eq!(raw(&out), vec![6667, 3333]);
    }

    #[test]
    fn test_normalize_idempotent() {
        let once = Normalize::new().allocate(&bps(&[5000, 3000, 1000]), Bps::MAX);
        let twice = Normalize::new().allocate(&once, Bps::MAX);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_normalize_zero_sum_falls_back_to_equal() {
        let out = Normalize::new().allocate(&bps(&[0, 0, 0]), Bps::MAX);
        assert_eq!(raw(&out), vec![3334, 3333, 3333]);

        let out = Normalize::new().allocate(&bps(&[0, 0]), Bps::from(9000));
        assert_eq!(raw(&out), vec![4500, 4500]);
    }

    #[test]
    fn test_normalize_keeps_zero_entries_at_zero() {
        let out = Normalize::new().allocate(&bps(&[0, 2500, 2500]), Bps::MAX);
        assert_eq!(raw(&out), vec![0, 5000, 5000]);
    }

    #[test]
    fn test_normalize_empty() {
        assert!(Normalize::new().allocate(&[], Bps::MAX).is_empty());
    }
}
