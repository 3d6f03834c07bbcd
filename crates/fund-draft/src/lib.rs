// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # fund-draft
//!
//! The fund-creation session that owns a [`weight_allocator::WeightTable`].
//!
//! A draft collects everything the product factory needs to create a fund:
//! name, underlying asset, selected strategies and their weights, the
//! liquidity buffer, management and performance fees, and the fee
//! recipient. When every check passes it produces a [`CreateFundParams`]
//! payload for the contract-write client.
//!
//! # Pipeline
//! ```text
//! DraftConfig (TOML) ──into_draft──► FundDraft ──build_params──► CreateFundParams
//!                                       ▲                              │
//!                  select / remove / redistribute                 serde_json
//! ```
//!
//! Submission, wallet connection and receipt decoding live outside this
//! crate; the draft only needs to know which wallet is connected.

mod config;
mod draft;
mod error;
mod params;

pub use config::DraftConfig;
pub use draft::{FeeRecipient, FundDraft};
pub use error::DraftError;
pub use params::{CreateFundParams, ReviewRow, DEFAULT_FUND_TYPE, DEFAULT_METADATA_URI};
