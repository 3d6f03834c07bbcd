// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Equal split.
//!
//! Every selected strategy gets `⌊target / N⌋`; the leftover from the
//! integer division (at most `N − 1` bps) goes to the first entry.
//! Current weights are ignored.

use crate::policy::RedistributionPolicy;
use crate::rounding::split_equally;
use basis_points::Bps;

/// `target / N` to each entry, leftover to the first.
#[derive(Debug, Clone, Default)]
pub struct EqualSplit;

impl EqualSplit {
    pub fn new() -> Self {
        Self
    }
}

impl RedistributionPolicy for EqualSplit {
    fn name(&self) -> &str {
        "equal"
    }

    fn allocate(&self, current: &[Bps], target: Bps) -> Vec<Bps> {
        split_equally(current.len(), target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(n: usize) -> Vec<u32> {
        EqualSplit::new()
            .allocate(&vec![Bps::ZERO; n], Bps::MAX)
            .iter()
            .map(Bps::as_u32)
            .collect()
    }

    #[test]
    fn test_equal_single() {
        assert_eq!(run(1), vec![10_000]);
    }

    #[test]
    fn test_equal_even() {
        assert_eq!(run(4), vec![2500, 2500, 2500, 2500]);
    }

    #[test]
    fn test_equal_leftover_to_first() {
        assert_eq!(run(3), vec![3334, 3333, 3333]);
        // 10000 / 7 = 1428 r 4
        let w = run(7);
        assert_eq!(w[0], 1432);
        assert!(w[1..].iter().all(|&x| x == 1428));
    }

    #[test]
    fn test_equal_ignores_current() {
        let out = EqualSplit::new().allocate(&[Bps::from(9000), Bps::from(1000)], Bps::MAX);
        assert_eq!(out, vec![Bps::from(5000), Bps::from(5000)]);
    }

    #[test]
    fn test_equal_empty() {
        assert!(run(0).is_empty());
    }
}
