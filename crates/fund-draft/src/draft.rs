// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The fund draft: one interactive fund-creation session.
//!
//! Two different "buffers" meet here. `FundDraft::buffer` is a fund
//! parameter: the share of deposits the vault keeps idle. The allocator's
//! buffer (`weights.buffer()`) is the unallocated remainder of the strategy
//! weights. The factory requires the strategy weights themselves to total
//! 10000, so a draft with an unallocated remainder cannot be submitted.

use crate::params::{CreateFundParams, ReviewRow, DEFAULT_FUND_TYPE, DEFAULT_METADATA_URI};
use crate::DraftError;
use basis_points::{Address, Bps};
use weight_allocator::{BufferReport, CappedWeight, RedistributionPolicy, WeightTable, WeightUpdate};

/// Who receives management and performance fees.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FeeRecipient {
    /// The connected manager wallet.
    #[default]
    Manager,
    /// Another address, kept as raw input until the draft is built.
    Other(String),
}

impl FeeRecipient {
    /// Resolves the recipient, or `None` if it cannot be determined yet.
    pub fn resolve(&self, connected: Option<&Address>) -> Option<Address> {
        match self {
            FeeRecipient::Manager => connected.cloned(),
            FeeRecipient::Other(raw) => Address::parse(raw).ok(),
        }
    }
}

/// A fund being configured before submission.
#[derive(Debug, Clone, Default)]
pub struct FundDraft {
    pub name: String,
    pub description: String,
    pub asset: Option<Address>,
    /// Selected strategies and their weights.
    pub weights: WeightTable,
    /// Share of deposits the vault keeps idle.
    pub buffer: Bps,
    pub management_fee: Bps,
    pub performance_fee: Bps,
    pub fee_recipient: FeeRecipient,
}

impl FundDraft {
    /// Starts an empty draft.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    // ── Strategy selection ─────────────────────────────────────

    /// Adds a strategy with zero weight. Returns `false` if already selected.
    pub fn select_strategy(&mut self, strategy: Address) -> bool {
        let added = self.weights.select(strategy);
        if added {
            tracing::debug!("strategy selected ({} total)", self.weights.len());
        }
        added
    }

    /// Removes a strategy together with its weight.
    pub fn remove_strategy(&mut self, strategy: &Address) -> Option<Bps> {
        let removed = self.weights.remove(strategy);
        if let Some(w) = removed {
            tracing::debug!(strategy = %strategy, "strategy removed, dropping weight {w}");
        }
        removed
    }

    // ── Weights ────────────────────────────────────────────────

    /// Sets one strategy's weight from a percentage, capped at the remaining headroom.
    pub fn set_weight_percent(&mut self, strategy: &Address, percent: f64) -> Option<CappedWeight> {
        self.weights.set_weight_percent(strategy, percent)
    }

    /// Sets one strategy's weight in bps, capped at the remaining headroom.
    pub fn set_weight_capped(&mut self, strategy: &Address, requested_bps: i64) -> Option<CappedWeight> {
        self.weights.set_weight_capped(strategy, requested_bps)
    }

    /// Replaces all weights using `policy`, targeting the full 10000.
    pub fn redistribute(&mut self, policy: &dyn RedistributionPolicy) -> Vec<WeightUpdate> {
        tracing::info!("applying '{}' to {} strategies", policy.name(), self.weights.len());
        self.weights.redistribute(policy, Bps::MAX)
    }

    pub fn distribute_equally(&mut self) -> Vec<WeightUpdate> {
        self.weights.distribute_equally()
    }

    /// Scales the strategy weights down so `reserve` stays unallocated.
    pub fn reserve_buffer(&mut self, reserve: Bps) -> Vec<WeightUpdate> {
        self.weights.reserve_buffer(reserve)
    }

    /// Unallocated remainder of the strategy weights.
    pub fn buffer_report(&self) -> BufferReport {
        self.weights.buffer_report()
    }

    // ── Validation ─────────────────────────────────────────────

    /// Validates the draft and assembles the factory payload.
    ///
    /// Checks run in this order and the first failure is returned:
    /// wallet connected, name present, asset chosen, at least one strategy,
    /// weights total 10000, custom fee recipient is a valid address.
    pub fn build_params(&self, connected: Option<&Address>) -> Result<CreateFundParams, DraftError> {
        let manager = connected.ok_or(DraftError::WalletNotConnected)?;

        if self.name.trim().is_empty() {
            return Err(DraftError::MissingName);
        }
        let asset = self.asset.clone().ok_or(DraftError::MissingAsset)?;
        if self.weights.is_empty() {
            return Err(DraftError::NoStrategies);
        }
        if !self.weights.is_fully_allocated() {
            return Err(DraftError::WeightsIncomplete {
                total_bps: self.weights.total_bps(),
            });
        }

        let manager_fee_recipient = match &self.fee_recipient {
            FeeRecipient::Manager => manager.clone(),
            FeeRecipient::Other(raw) => Address::parse(raw)
                .map_err(|_| DraftError::InvalidFeeRecipient(raw.clone()))?,
        };

        Ok(CreateFundParams {
            fund_type: DEFAULT_FUND_TYPE,
            asset,
            fund_metadata_uri: DEFAULT_METADATA_URI.to_string(),
            buffer_bps: self.buffer.as_u32(),
            mgmt_fee_bps: self.management_fee.as_u32(),
            perf_fee_bps: self.performance_fee.as_u32(),
            manager_fee_recipient,
            strategy_implementations: self.weights.strategies(),
            weights_bps: self.weights.weights().iter().map(Bps::as_u32).collect(),
        })
    }

    /// Returns `true` if [`Self::build_params`] would succeed.
    pub fn can_create(&self, connected: Option<&Address>) -> bool {
        self.build_params(connected).is_ok()
    }

    /// Pre-submit summary, `-` where a value is missing.
    pub fn review(&self, connected: Option<&Address>) -> Vec<ReviewRow> {
        let name = self.name.trim();
        vec![
            ReviewRow::new("Fund", if name.is_empty() { "-" } else { name }),
            ReviewRow::new("Asset", or_dash(self.asset.as_ref())),
            ReviewRow::new("Buffer", self.buffer.to_string()),
            ReviewRow::new("Management Fee", self.management_fee.to_string()),
            ReviewRow::new("Performance Fee", self.performance_fee.to_string()),
            ReviewRow::new(
                "Fee Recipient",
                or_dash(self.fee_recipient.resolve(connected).as_ref()),
            ),
        ]
    }
}

fn or_dash(addr: Option<&Address>) -> String {
    addr.map_or_else(|| "-".to_string(), Address::to_string)
}
