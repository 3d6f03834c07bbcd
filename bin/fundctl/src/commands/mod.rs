// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Subcommand implementations and shared helpers.

pub mod allocate;
pub mod compare;
pub mod init;
pub mod review;

use basis_points::{Address, Bps};
use tracing_subscriber::EnvFilter;
use weight_allocator::WeightTable;

/// Installs the fmt subscriber. `RUST_LOG` wins over `-v`.
pub fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Parses a comma-separated address list.
pub(crate) fn parse_strategies(list: &str) -> anyhow::Result<Vec<Address>> {
    let strategies = split_list(list)
        .map(|s| Address::parse(s).map_err(|e| anyhow::anyhow!("bad strategy: {e}")))
        .collect::<anyhow::Result<Vec<_>>>()?;
    if strategies.is_empty() {
        anyhow::bail!("no strategies given");
    }
    Ok(strategies)
}

/// Parses a comma-separated weight list.
pub(crate) fn parse_weights(list: &str) -> anyhow::Result<Vec<Bps>> {
    split_list(list)
        .map(|s| Bps::parse(s).map_err(|e| anyhow::anyhow!("bad weight: {e}")))
        .collect()
}

fn split_list(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim).filter(|s| !s.is_empty())
}

/// Prints a weight table with a total/buffer footer.
pub(crate) fn print_table(table: &WeightTable) {
    println!("  {:<4} {:<44} {:>10} {:>8}", "#", "Strategy", "Weight", "Bps");
    println!("  {}", "-".repeat(70));
    for (i, entry) in table.iter().enumerate() {
        println!(
            "  {:<4} {:<44} {:>10} {:>8}",
            i + 1,
            entry.strategy,
            entry.weight.to_string(),
            entry.weight.as_u32(),
        );
    }
    println!("  {}", "-".repeat(70));
    let report = table.buffer_report();
    println!(
        "  Allocated: {:.2}%   Buffer: {}   {}",
        report.allocated_bps as f64 / 100.0,
        report,
        if table.is_fully_allocated() { "OK" } else { "INCOMPLETE" },
    );
}
