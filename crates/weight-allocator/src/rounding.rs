// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Integer apportionment helpers shared by the policies.
//!
//! # Largest-remainder method
//!
//! ```text
//! exact_i  = target * share_i / sum(shares)
//! floor_i  = ⌊exact_i⌋
//! leftover = target - sum(floor_i)          (always < N)
//! ```
//!
//! The `leftover` units go one each to the entries with the largest
//! fractional part. Ties keep original order, so the first of two equal
//! remainders wins. All arithmetic is done on integer numerators, so the
//! "fractional part" is the exact remainder `target * share_i % sum`.

use basis_points::Bps;

/// Apportions `target` proportionally to `shares` by largest remainder.
///
/// Returns all zeros if every share is zero.
pub(crate) fn largest_remainder(shares: &[u64], target: u32) -> Vec<u32> {
    let sum: u128 = shares.iter().map(|&s| u128::from(s)).sum();
    if sum == 0 {
        return vec![0; shares.len()];
    }

    let mut floors = Vec::with_capacity(shares.len());
    let mut remainders = Vec::with_capacity(shares.len());
    for (idx, &share) in shares.iter().enumerate() {
        let numerator = u128::from(target) * u128::from(share);
        floors.push((numerator / sum) as u32);
        remainders.push((idx, numerator % sum));
    }

    let distributed: u32 = floors.iter().sum();
    let leftover = target.saturating_sub(distributed) as usize;

    // Stable sort: equal remainders stay in original order.
    remainders.sort_by(|a, b| b.1.cmp(&a.1));
    for &(idx, _) in remainders.iter().take(leftover) {
        floors[idx] += 1;
    }

    floors
}

/// Splits `target` into `n` equal whole parts, leftover to the first.
pub(crate) fn split_equally(n: usize, target: Bps) -> Vec<Bps> {
    if n == 0 {
        return Vec::new();
    }
    let target = target.as_u32();
    let each = target / n as u32;
    let leftover = target - each * n as u32;

    let mut out = vec![Bps::from(each); n];
    out[0] = Bps::from(each + leftover);
    out
}
