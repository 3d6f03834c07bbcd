// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `fundctl init` command: write a draft template.

use fund_draft::DraftConfig;
use std::path::PathBuf;

pub async fn execute(output: PathBuf) -> anyhow::Result<()> {
    if tokio::fs::try_exists(&output).await.unwrap_or(false) {
        anyhow::bail!("'{}' already exists; refusing to overwrite", output.display());
    }

    let template = DraftConfig::default().to_toml()?;
    tokio::fs::write(&output, template)
        .await
        .map_err(|e| anyhow::anyhow!("cannot write '{}': {e}", output.display()))?;

    tracing::info!("template written to {}", output.display());
    println!("  Draft template written to {}", output.display());
    println!("  Fill in asset and strategies, then run: fundctl --config {} review", output.display());
    Ok(())
}
