// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Basis-point values and parsing.
//!
//! A [`Bps`] is one hundredth of a percent. Every constructor clamps into
//! `[0, TOTAL_BPS]`; nothing in this type rejects an out-of-range number.

use crate::BpsError;
use std::fmt;
use std::str::FromStr;

/// The whole: 10000 bps = 100%.
pub const TOTAL_BPS: u32 = 10_000;

/// An integer basis-point value in `[0, 10000]`.
///
/// # Parsing
/// [`Bps::parse`] accepts:
/// - `"12.5%"` or `"12.5"` → percent, rounded to the nearest bps (1250)
/// - `"1250bps"` or `"1250 BPS"` → raw basis points
///
/// Out-of-range values are clamped, not rejected.
///
/// # Examples
/// ```
/// use basis_points::Bps;
///
/// assert_eq!(Bps::from_percent(33.333).as_u32(), 3333);
/// assert_eq!(Bps::from_bps_clamped(-5), Bps::ZERO);
/// assert_eq!(Bps::parse("150%").unwrap(), Bps::MAX);
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(from = "u32", into = "u32")]
pub struct Bps(u32);

impl Bps {
    /// 0 bps.
    pub const ZERO: Bps = Bps(0);
    /// 10000 bps (100%).
    pub const MAX: Bps = Bps(TOTAL_BPS);

    /// Creates a value from a raw basis-point count, clamping to `[0, 10000]`.
    pub fn from_bps_clamped(bps: i64) -> Self {
        Self(bps.clamp(0, TOTAL_BPS as i64) as u32)
    }

    /// Creates a value from a percentage.
    ///
    /// The percentage is clamped to `[0, 100]` and rounded to the nearest
    /// whole basis point. Non-finite input maps to zero.
    pub fn from_percent(percent: f64) -> Self {
        if !percent.is_finite() {
            return Self::ZERO;
        }
        let safe = percent.clamp(0.0, 100.0);
        Self((safe * 100.0).round() as u32)
    }

    /// Returns the unallocated remainder of a total, `max(0, 10000 - total)`.
    pub fn unallocated(total_bps: u64) -> Self {
        Self(TOTAL_BPS - total_bps.min(TOTAL_BPS as u64) as u32)
    }

    /// Returns the raw basis-point count.
    pub fn as_u32(&self) -> u32 {
        self.0
    }

    /// Returns the value as a percentage (`1250` → `12.5`).
    pub fn as_percent(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Saturating subtraction (never below zero).
    pub fn saturating_sub(self, rhs: Bps) -> Bps {
        Bps(self.0.saturating_sub(rhs.0))
    }

    /// Parses a human-readable basis-point string.
    ///
    /// Accepted formats: `"12.5%"`, `"12.5"` (percent), `"1250bps"`
    /// (basis points). Case-insensitive, whitespace tolerant.
    pub fn parse(s: &str) -> Result<Self, BpsError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(BpsError::Empty);
        }

        let lower = s.to_lowercase();

        // Split into numeric part and unit.
        let (num_str, is_bps) = if let Some(rest) = lower.strip_suffix("bps") {
            (rest, true)
        } else if let Some(rest) = lower.strip_suffix('%') {
            (rest, false)
        } else {
            (lower.as_str(), false)
        };

        let value: f64 = num_str
            .trim()
            .parse()
            .map_err(|_| BpsError::InvalidValue(s.to_string()))?;

        if !value.is_finite() {
            return Err(BpsError::NonFinite(s.to_string()));
        }

        if is_bps {
            Ok(Self::from_bps_clamped(value.round() as i64))
        } else {
            Ok(Self::from_percent(value))
        }
    }
}

impl From<u32> for Bps {
    fn from(bps: u32) -> Self {
        Self(bps.min(TOTAL_BPS))
    }
}

impl From<Bps> for u32 {
    fn from(bps: Bps) -> Self {
        bps.0
    }
}

impl FromStr for Bps {
    type Err = BpsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Bps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.as_percent())
    }
}
