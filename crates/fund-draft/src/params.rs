// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The create payload and the review summary.
//!
//! [`CreateFundParams`] serializes with the factory's camelCase field names,
//! so its JSON form can be handed to a contract-write client as-is.

use basis_points::Address;

/// Fund type passed to the factory for strategy-weighted funds.
pub const DEFAULT_FUND_TYPE: u8 = 1;

/// Metadata URI used until metadata upload exists.
pub const DEFAULT_METADATA_URI: &str = "ipfs://fund-meta";

/// Arguments for the factory's `createProduct` call.
///
/// Only [`crate::FundDraft::build_params`] constructs this, after every
/// draft check has passed: weights total exactly 10000 and line up with
/// `strategy_implementations` index by index.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFundParams {
    pub fund_type: u8,
    pub asset: Address,
    #[serde(rename = "fundMetadataURI")]
    pub fund_metadata_uri: String,
    pub buffer_bps: u32,
    pub mgmt_fee_bps: u32,
    pub perf_fee_bps: u32,
    pub manager_fee_recipient: Address,
    pub strategy_implementations: Vec<Address>,
    pub weights_bps: Vec<u32>,
}

impl CreateFundParams {
    /// Serialises the payload to pretty JSON.
    pub fn to_json(&self) -> Result<String, crate::DraftError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| crate::DraftError::Serialize(e.to_string()))
    }
}

/// One labelled line of the pre-submit review.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ReviewRow {
    pub label: &'static str,
    pub value: String,
}

impl ReviewRow {
    pub(crate) fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}
