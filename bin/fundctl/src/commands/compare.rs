// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `fundctl compare` command: every policy, side by side.

use basis_points::Bps;
use weight_allocator::all_policies;

pub async fn execute(strategies: String) -> anyhow::Result<()> {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║             fundctl · Policy Comparison             ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    let strategies = super::parse_strategies(&strategies)?;
    let policies = all_policies();

    let columns: Vec<Vec<Bps>> = policies
        .iter()
        .map(|p| p.allocate(&vec![Bps::ZERO; strategies.len()], Bps::MAX))
        .collect();

    print!("  {:<4} {:<14}", "#", "Strategy");
    for p in &policies {
        print!(" {:>17}", p.name());
    }
    println!();
    println!("  {}", "-".repeat(19 + 18 * policies.len()));

    for (row, strategy) in strategies.iter().enumerate() {
        print!("  {:<4} {:<14}", row + 1, strategy.short());
        for column in &columns {
            print!(" {:>17}", column[row].to_string());
        }
        println!();
    }

    println!();
    println!("  Note: 'normalize' starts from zero weights here and falls back to an equal split.");
    println!();
    Ok(())
}
