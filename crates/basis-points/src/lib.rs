// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # basis-points
//!
//! Value types shared by the allocator and the fund draft.
//!
//! # Key Components
//!
//! - [`Bps`]: an integer basis-point value clamped to `[0, 10000]`, with
//!   human-readable parsing (`"12.5%"`, `"1250bps"`) and percent conversion.
//! - [`Address`]: a 20-byte hex identifier (`0x` + 40 hex digits) normalized
//!   to lowercase at parse time, so equality is case-insensitive everywhere
//!   downstream.
//!
//! # Rounding
//!
//! Fractional basis points do not exist. Percentages are rounded to the
//! nearest whole basis point when they enter the system:
//!
//! ```text
//! 12.346%  →  1234.6 bps  →  1235 bps
//! ```
//!
//! # Example
//! ```
//! use basis_points::{Address, Bps};
//!
//! let w = Bps::parse("12.5%").unwrap();
//! assert_eq!(w.as_u32(), 1250);
//! assert_eq!(w.to_string(), "12.50%");
//!
//! let a = Address::parse("0xABCDEFabcdef0123456789ABCDEFabcdef012345").unwrap();
//! assert_eq!(a.as_str(), "0xabcdefabcdef0123456789abcdefabcdef012345");
//! ```

mod address;
mod bps;
mod error;

pub use address::Address;
pub use bps::{Bps, TOTAL_BPS};
pub use error::BpsError;
