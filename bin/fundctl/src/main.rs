// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # fundctl
//!
//! Command-line interface for strategy weight allocation and fund drafts.
//!
//! ## Usage
//! ```bash
//! # Split 100% across three strategies
//! fundctl allocate --strategies 0xaa..,0xbb..,0xcc.. --policy progressive
//!
//! # Normalize hand-entered weights and keep a 10% buffer
//! fundctl allocate --strategies 0xaa..,0xbb.. --weights 80,20 --policy normalize --buffer 10%
//!
//! # Compare every policy side by side
//! fundctl compare --strategies 0xaa..,0xbb..,0xcc..
//!
//! # Validate a draft file and print the create payload
//! fundctl --config draft.toml review --wallet 0xf39f..
//! ```

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "fundctl",
    about = "Basis-point weight allocation for strategy funds",
    version,
    author
)]
struct Cli {
    /// Path to a TOML draft file.
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Allocate weights across a list of strategies.
    Allocate {
        /// Comma-separated strategy addresses, in priority order.
        #[arg(short, long)]
        strategies: String,

        /// Policy: equal, normalize, prioritize-first, progressive.
        /// Defaults to equal when no weights are given.
        #[arg(short, long)]
        policy: Option<String>,

        /// Comma-separated starting weights (e.g., "50,30,10" or "5000bps,...").
        #[arg(short, long)]
        weights: Option<String>,

        /// Share to leave unallocated (e.g., "10%").
        #[arg(short, long)]
        buffer: Option<String>,
    },

    /// Show every policy's allocation for the same strategies.
    Compare {
        /// Comma-separated strategy addresses, in priority order.
        #[arg(short, long)]
        strategies: String,
    },

    /// Validate a draft file (see --config) and print the create payload.
    Review {
        /// Connected wallet address (the manager).
        #[arg(short, long)]
        wallet: Option<String>,
    },

    /// Write a draft template to a file.
    Init {
        /// Output path for the template.
        #[arg(short, long, default_value = "draft.toml")]
        output: std::path::PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging based on verbosity.
    commands::init_tracing(cli.verbose);

    match cli.command {
        Commands::Allocate {
            strategies,
            policy,
            weights,
            buffer,
        } => commands::allocate::execute(strategies, policy, weights, buffer).await,
        Commands::Compare { strategies } => commands::compare::execute(strategies).await,
        Commands::Review { wallet } => commands::review::execute(cli.config, wallet).await,
        Commands::Init { output } => commands::init::execute(output).await,
    }
}
