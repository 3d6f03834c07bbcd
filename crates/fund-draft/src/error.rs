// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for fund drafts.

/// Errors that block a draft from becoming a create payload, or that
/// occur while loading a draft from configuration.
#[derive(Debug, thiserror::Error)]
pub enum DraftError {
    /// No wallet is connected, so there is no manager address.
    #[error("wallet not connected")]
    WalletNotConnected,

    /// The fund name is empty or whitespace.
    #[error("fund name is required")]
    MissingName,

    /// No underlying asset was chosen.
    #[error("an asset must be selected")]
    MissingAsset,

    /// The strategy selection is empty.
    #[error("select at least one strategy")]
    NoStrategies,

    /// Strategy weights do not add up to 100%.
    #[error("strategy weights must total 100.00%, got {}", percent(.total_bps))]
    WeightsIncomplete { total_bps: u64 },

    /// A custom fee recipient was given but is not a valid address.
    #[error("invalid fee recipient '{0}'")]
    InvalidFeeRecipient(String),

    /// A percentage, basis-point or address value could not be parsed.
    #[error("invalid value: {0}")]
    Value(#[from] basis_points::BpsError),

    /// The create payload could not be serialised.
    #[error("payload serialisation error: {0}")]
    Serialize(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    ConfigError(String),
}

fn percent(bps: &u64) -> String {
    format!("{:.2}%", *bps as f64 / 100.0)
}
