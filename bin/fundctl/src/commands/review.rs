// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `fundctl review` command: validate a draft file.
//!
//! Loads the TOML draft, prints the review rows and the strategy weights,
//! then either the JSON `createProduct` payload or the first blocking
//! problem. Exits non-zero when the draft cannot be submitted.

use basis_points::Address;
use fund_draft::DraftConfig;
use std::path::PathBuf;

pub async fn execute(config: Option<PathBuf>, wallet: Option<String>) -> anyhow::Result<()> {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║                fundctl · Draft Review               ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    let path = config.ok_or_else(|| anyhow::anyhow!("review needs a draft file: pass --config <FILE>"))?;
    let content = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| anyhow::anyhow!("cannot read draft '{}': {e}", path.display()))?;
    let draft = DraftConfig::from_toml(&content)?.into_draft()?;

    let wallet = wallet
        .as_deref()
        .map(Address::parse)
        .transpose()
        .map_err(|e| anyhow::anyhow!("invalid wallet: {e}"))?;

    // ── Summary ────────────────────────────────────────────────
    for row in draft.review(wallet.as_ref()) {
        println!("  {:<16} {}", row.label, row.value);
    }
    println!();

    // ── Weights ────────────────────────────────────────────────
    super::print_table(&draft.weights);
    println!();

    // ── Verdict ────────────────────────────────────────────────
    match draft.build_params(wallet.as_ref()) {
        Ok(params) => {
            println!("  Status: ready to create");
            println!();
            println!("{}", params.to_json()?);
            Ok(())
        }
        Err(e) => {
            tracing::warn!("draft blocked: {e}");
            println!("  Status: BLOCKED ({e})");
            println!();
            Err(e.into())
        }
    }
}
