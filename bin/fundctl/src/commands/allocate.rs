// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `fundctl allocate` command: apply one policy and print the weights.
//!
//! ```text
//! strategies ─► WeightTable ─► [weights] ─► policy ─► [buffer carve-out] ─► table
//! ```

use basis_points::Bps;
use weight_allocator::{policy_by_name, WeightTable};

pub async fn execute(
    strategies: String,
    policy: Option<String>,
    weights: Option<String>,
    buffer: Option<String>,
) -> anyhow::Result<()> {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║               fundctl · Weight Allocator            ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    let strategies = super::parse_strategies(&strategies)?;
    let mut table = WeightTable::new();

    // ── Starting weights ───────────────────────────────────────
    match weights {
        Some(list) => {
            let weights = super::parse_weights(&list)?;
            if weights.len() != strategies.len() {
                anyhow::bail!(
                    "{} weights given for {} strategies",
                    weights.len(),
                    strategies.len()
                );
            }
            for (s, w) in strategies.into_iter().zip(weights) {
                if !table.select_with_weight(s.clone(), w) {
                    anyhow::bail!("strategy {s} listed more than once");
                }
            }
        }
        None => {
            for s in strategies {
                if !table.select(s.clone()) {
                    anyhow::bail!("strategy {s} listed more than once");
                }
            }
        }
    }

    // Without weights there is nothing to keep, so equal is the default.
    let policy_name = match (&policy, table.total_bps()) {
        (Some(name), _) => Some(name.as_str()),
        (None, 0) => Some("equal"),
        (None, _) => None,
    };

    // ── Policy ─────────────────────────────────────────────────
    if let Some(name) = policy_name {
        let policy = policy_by_name(name).ok_or_else(|| {
            anyhow::anyhow!(
                "unknown policy '{name}'; expected 'equal', 'normalize', 'prioritize-first', or 'progressive'"
            )
        })?;
        println!("  Policy: {}", policy.name());
        let changed = table
            .redistribute(policy.as_ref(), Bps::MAX)
            .iter()
            .filter(|u| u.changed())
            .count();
        tracing::info!("{changed} of {} weights changed", table.len());
    }

    // ── Buffer carve-out ───────────────────────────────────────
    if let Some(raw) = buffer {
        let reserve = Bps::parse(&raw).map_err(|e| anyhow::anyhow!("invalid buffer: {e}"))?;
        println!("  Buffer: reserving {reserve}");
        table.reserve_buffer(reserve);
    }

    println!();
    super::print_table(&table);
    println!();
    Ok(())
}
