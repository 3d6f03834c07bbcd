// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for value parsing.

/// Errors that can occur while parsing basis points or addresses.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BpsError {
    /// The input string was empty.
    #[error("empty value")]
    Empty,

    /// The input is not a number with an optional unit suffix.
    #[error("invalid value '{0}': expected a percentage like '12.5%' or a basis-point count like '1250bps'")]
    InvalidValue(String),

    /// The input parsed as a number but is NaN or infinite.
    #[error("value '{0}' is not a finite number")]
    NonFinite(String),

    /// The input is not a `0x`-prefixed 40-digit hex address.
    #[error("invalid address '{input}': {reason}")]
    InvalidAddress { input: String, reason: &'static str },
}
