// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Canonical 20-byte hex identifiers.
//!
//! Strategy implementations, assets and fee recipients are all identified
//! by addresses. They are compared case-insensitively, so the canonical form
//! is lowercase and normalization happens once, in [`Address::parse`].

use crate::BpsError;
use std::fmt;
use std::str::FromStr;

/// Number of hex digits after the `0x` prefix.
const HEX_DIGITS: usize = 40;

/// A lowercase `0x`-prefixed 40-digit hex identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    /// Parses and normalizes an address.
    ///
    /// Accepts `0x` or `0X` followed by exactly 40 hex digits in any case.
    pub fn parse(s: &str) -> Result<Self, BpsError> {
        let s = s.trim();
        let invalid = |reason| BpsError::InvalidAddress {
            input: s.to_string(),
            reason,
        };

        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .ok_or_else(|| invalid("missing 0x prefix"))?;

        if digits.len() != HEX_DIGITS {
            return Err(invalid("expected 40 hex digits"));
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid("non-hex character"));
        }

        Ok(Self(format!("0x{}", digits.to_ascii_lowercase())))
    }

    /// Returns `true` if `s` parses as an address.
    pub fn is_valid(s: &str) -> bool {
        Self::parse(s).is_ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Abbreviated form for tables: `0x1234…cdef`.
    pub fn short(&self) -> String {
        format!("{}…{}", &self.0[..6], &self.0[self.0.len() - 4..])
    }
}

impl FromStr for Address {
    type Err = BpsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Address {
    type Error = BpsError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Address> for String {
    fn from(a: Address) -> Self {
        a.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIXED: &str = "0xAbCdEf0123456789aBcDeF0123456789AbCdEf01";

    #[test]
    fn test_parse_normalizes_case() {
        let a = Address::parse(MIXED).unwrap();
        assert_eq!(a.as_str(), "0xabcdef0123456789abcdef0123456789abcdef01");
    }

    #[test]
    fn test_case_insensitive_equality() {
        let upper = Address::parse(&MIXED.to_uppercase().replacen("0X", "0x", 1)).unwrap();
        let lower = Address::parse(&MIXED.to_lowercase()).unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_parse_accepts_upper_prefix_and_whitespace() {
        let a = Address::parse("  0XABCDEF0123456789ABCDEF0123456789ABCDEF01 ").unwrap();
        assert_eq!(a, Address::parse(MIXED).unwrap());
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Address::parse("").is_err());
        assert!(Address::parse("abcdef0123456789abcdef0123456789abcdef01").is_err());
        assert!(Address::parse("0x1234").is_err());
        assert!(Address::parse("0xzzcdef0123456789abcdef0123456789abcdef01").is_err());
        assert!(!Address::is_valid("0x"));
    }

    #[test]
    fn test_short() {
        let a = Address::parse(MIXED).unwrap();
        assert_eq!(a.short(), "0xabcd…ef01");
    }

    #[test]
    fn test_serde_validates() {
        let a: Address = serde_json::from_str(&format!("\"{MIXED}\"")).unwrap();
        assert_eq!(serde_json::to_string(&a).unwrap(), format!("\"{}\"", a.as_str()));
        assert!(serde_json::from_str::<Address>("\"0xnope\"").is_err());
    }
}
