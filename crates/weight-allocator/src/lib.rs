// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # weight-allocator
//!
//! Splits 10000 basis points among the strategies selected for a fund,
//! always producing whole basis points that sum to exactly the target.
//!
//! # Policies
//!
//! | Policy | Shape | Leftover goes to |
//! |---|---|---|
//! | [`EqualSplit`] | `target / N` each | first entry |
//! | [`Normalize`] | proportional to current weights | largest fractional remainders |
//! | [`PrioritizeFirst`] | 60% to the first, rest shared | second entry |
//! | [`ProgressiveSplit`] | ∝ `N − rank` (linear ramp) | first entry |
//!
//! The buffer carve-out ([`WeightTable::reserve_buffer`]) is [`Normalize`]
//! aimed at `10000 − reserve` instead of 10000.
//!
//! # Trait-Based Extensibility
//!
//! All policies implement [`RedistributionPolicy`]:
//!
//! ```ignore
//! struct AllToLast;
//! impl RedistributionPolicy for AllToLast {
//!     fn name(&self) -> &str { "all-to-last" }
//!     fn allocate(&self, current: &[Bps], target: Bps) -> Vec<Bps> { /* ... */ }
//! }
//! ```
//!
//! # Example
//! ```
//! use basis_points::{Address, Bps};
//! use weight_allocator::{Normalize, WeightTable};
//!
//! let a = Address::parse("0x00000000000000000000000000000000000000aa").unwrap();
//! let b = Address::parse("0x00000000000000000000000000000000000000bb").unwrap();
//!
//! let mut table = WeightTable::new();
//! table.select_with_weight(a.clone(), Bps::from(8000));
//! table.select_with_weight(b.clone(), Bps::from(2000));
//!
//! // Reserve a 10% buffer: scale the selection down to 9000 bps.
//! table.reserve_buffer(Bps::from(1000));
//! assert_eq!(table.weight(&a), Some(Bps::from(7200)));
//! assert_eq!(table.weight(&b), Some(Bps::from(1800)));
//! assert_eq!(table.buffer_report().to_string(), "10.00%");
//! ```

pub mod policy;
pub(crate) mod rounding;
mod table;

pub use policy::equal::EqualSplit;
pub use policy::normalize::Normalize;
pub use policy::priority::PrioritizeFirst;
pub use policy::progressive::ProgressiveSplit;
pub use policy::{all_policies, policy_by_name, RedistributionPolicy};
pub use table::{BufferReport, CappedWeight, WeightEntry, WeightTable, WeightUpdate};
