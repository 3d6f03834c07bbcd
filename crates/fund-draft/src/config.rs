// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Draft configuration loaded from TOML files or constructed programmatically.
//!
//! # TOML Format
//! ```toml
//! name = "Aave Lending Turbo"
//! description = "Blue-chip lending with a liquid sleeve"
//! asset = "0x5fbdb2315678afecb367f032d93f642f64180aa3"
//! policy = "prioritize-first"
//! buffer = "10%"
//! management_fee = "2%"
//! performance_fee = "20%"
//! strategies = [
//!     "0xe7f1725e7734ce288f8367e1bb143e90bb3f0512",
//!     "0x9fe46736679d2d9a65f0992f2272de9f3c7fa6e0",
//! ]
//! # weights = ["70%", "30%"]   # explicit weights skip the policy
//! ```

use crate::{DraftError, FeeRecipient, FundDraft};
use basis_points::{Address, Bps};
use std::path::Path;
use weight_allocator::{policy_by_name, RedistributionPolicy};

/// Configuration for a fund draft.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct DraftConfig {
    /// Fund display name.
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Underlying asset address.
    pub asset: Option<String>,
    /// Redistribution policy: `"equal"`, `"normalize"`, `"prioritize-first"`, `"progressive"`.
    #[serde(default = "default_policy")]
    pub policy: String,
    /// Idle-liquidity buffer (human-readable, e.g. `"10%"`).
    #[serde(default = "default_zero")]
    pub buffer: String,
    #[serde(default = "default_zero")]
    pub management_fee: String,
    #[serde(default = "default_zero")]
    pub performance_fee: String,
    /// Fee recipient address; omitted means the connected manager.
    pub fee_recipient: Option<String>,
    /// Strategy implementation addresses, in display order.
    #[serde(default)]
    pub strategies: Vec<String>,
    /// Explicit weights, one per strategy. When present, `policy` is not applied.
    pub weights: Option<Vec<String>>,
}

fn default_policy() -> String {
    "equal".to_string()
}

fn default_zero() -> String {
    "0%".to_string()
}

impl DraftConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, DraftError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DraftError::ConfigError(format!("cannot read config '{}': {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, DraftError> {
        toml::from_str(toml_str)
            .map_err(|e| DraftError::ConfigError(format!("TOML parse error: {e}")))
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, DraftError> {
        toml::to_string_pretty(self)
            .map_err(|e| DraftError::ConfigError(format!("TOML serialise error: {e}")))
    }

    /// Creates the redistribution policy specified by this config.
    pub fn create_policy(&self) -> Result<Box<dyn RedistributionPolicy>, DraftError> {
        policy_by_name(&self.policy).ok_or_else(|| {
            DraftError::ConfigError(format!(
                "unknown policy '{}'; expected 'equal', 'normalize', 'prioritize-first', or 'progressive'",
                self.policy
            ))
        })
    }

    /// Builds a [`FundDraft`] from this configuration.
    ///
    /// Addresses and percentages are parsed here. Without explicit
    /// `weights`, the configured policy fills the selection.
    pub fn into_draft(&self) -> Result<FundDraft, DraftError> {
        let mut draft = FundDraft::new(self.name.clone());
        draft.description = self.description.clone();
        draft.asset = self.asset.as_deref().map(Address::parse).transpose()?;
        draft.buffer = Bps::parse(&self.buffer)?;
        draft.management_fee = Bps::parse(&self.management_fee)?;
        draft.performance_fee = Bps::parse(&self.performance_fee)?;
        draft.fee_recipient = match &self.fee_recipient {
            Some(raw) => FeeRecipient::Other(raw.clone()),
            None => FeeRecipient::Manager,
        };

        let strategies = self
            .strategies
            .iter()
            .map(|s| Address::parse(s))
            .collect::<Result<Vec<_>, _>>()?;

        match &self.weights {
            Some(weights) => {
                if weights.len() != strategies.len() {
                    return Err(DraftError::ConfigError(format!(
                        "{} weights given for {} strategies",
                        weights.len(),
                        strategies.len()
                    )));
                }
                for (strategy, raw) in strategies.into_iter().zip(weights) {
                    let weight = Bps::parse(raw)?;
                    if !draft.weights.select_with_weight(strategy.clone(), weight) {
                        return Err(duplicate(&strategy));
                    }
                }
            }
            None => {
                let policy = self.create_policy()?;
                for strategy in strategies {
                    if !draft.select_strategy(strategy.clone()) {
                        return Err(duplicate(&strategy));
                    }
                }
                draft.redistribute(policy.as_ref());
            }
        }

        tracing::info!("draft '{}' loaded: {}", draft.name, draft.weights.summary());
        Ok(draft)
    }
}

fn duplicate(strategy: &Address) -> DraftError {
    DraftError::ConfigError(format!("strategy {strategy} listed more than once"))
}

impl Default for DraftConfig {
    fn default() -> Self {
        Self {
            name: "New Fund".to_string(),
            description: String::new(),
            asset: None,
            policy: default_policy(),
            buffer: default_zero(),
            management_fee: default_zero(),
            performance_fee: default_zero(),
            fee_recipient: None,
            strategies: Vec::new(),
            weights: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const S1: &str = "0xe7f1725e7734ce288f8367e1bb143e90bb3f0512";
    const S2: &str = "0x9fe46736679d2d9a65f0992f2272de9f3c7fa6e0";
    const S3: &str = "0xCf7Ed3AccA5a467e9e704C703E8D87F634fB0Fc9";

    #[test]
    fn test_default() {
        let c = DraftConfig::default();
        assert_eq!(c.policy, "equal");
        assert_eq!(c.buffer, "0%");
        assert!(c.strategies.is_empty());
    }

    #[test]
    fn test_from_toml() {
        let toml = format!(
            r#"
name = "Turbo"
asset = "{S1}"
policy = "progressive"
buffer = "10%"
management_fee = "150bps"
strategies = ["{S1}", "{S2}"]
"#
        );
        let c = DraftConfig::from_toml(&toml).unwrap();
        assert_eq!(c.name, "Turbo");
        assert_eq!(c.policy, "progressive");
        assert_eq!(c.performance_fee, "0%");
        assert!(c.weights.is_none());
        assert!(c.fee_recipient.is_none());
    }

    #[test]
    fn test_to_toml_roundtrip() {
        let c = DraftConfig {
            strategies: vec![S1.into(), S2.into()],
            ..Default::default()
        };
        let toml = c.to_toml().unwrap();
        let back = DraftConfig::from_toml(&toml).unwrap();
        assert_eq!(back.strategies, c.strategies);
        assert_eq!(back.policy, c.policy);
    }

    #[test]
    fn test_create_policy() {
        for (name, expected) in [
            ("equal", "equal"),
            ("normalize", "normalize"),
            ("prioritize-first", "prioritize-first"),
            ("progressive", "progressive"),
        ] {
            let c = DraftConfig {
                policy: name.into(),
                ..Default::default()
            };
            assert_eq!(c.create_policy().unwrap().name(), expected);
        }
    }

    #[test]
    fn test_create_policy_unknown() {
        let c = DraftConfig {
            policy: "bogus".into(),
            ..Default::default()
        };
        assert!(matches!(c.create_policy(), Err(DraftError::ConfigError(_))));
    }

    #[test]
    fn test_into_draft_applies_policy() {
        let c = DraftConfig {
            policy: "prioritize-first".into(),
            strategies: vec![S1.into(), S2.into(), S3.into()],
            ..Default::default()
        };
        let d = c.into_draft().unwrap();
        let w: Vec<u32> = d.weights.weights().iter().map(Bps::as_u32).collect();
        assert_eq!(w, vec![6000, 2000, 2000]);
    }

    #[test]
    fn test_into_draft_explicit_weights() {
        let c = DraftConfig {
            strategies: vec![S1.into(), S2.into()],
            weights: Some(vec!["70%".into(), "3000bps".into()]),
            buffer: "12.5%".into(),
            fee_recipient: Some(S3.into()),
            ..Default::default()
        };
        let d = c.into_draft().unwrap();
        let w: Vec<u32> = d.weights.weights().iter().map(Bps::as_u32).collect();
        assert_eq!(w, vec![7000, 3000]);
        assert_eq!(d.buffer.as_u32(), 1250);
        assert_eq!(d.fee_recipient, FeeRecipient::Other(S3.into()));
    }

    #[test]
    fn test_into_draft_normalizes_addresses() {
        let c = DraftConfig {
            asset: Some(S3.into()),
            strategies: vec![S3.into()],
            ..Default::default()
        };
        let d = c.into_draft().unwrap();
        assert_eq!(d.asset.unwrap().as_str(), S3.to_lowercase());
    }

    #[test]
    fn test_into_draft_rejects_duplicates() {
        let c = DraftConfig {
            strategies: vec![S3.into(), S3.to_lowercase()],
            ..Default::default()
        };
        assert!(matches!(c.into_draft(), Err(DraftError::ConfigError(_))));
    }

    #[test]
    fn test_into_draft_weight_count_mismatch() {
        let c = DraftConfig {
            strategies: vec![S1.into(), S2.into()],
            weights: Some(vec!["100%".into()]),
            ..Default::default()
        };
        assert!(matches!(c.into_draft(), Err(DraftError::ConfigError(_))));
    }

    #[test]
    fn test_into_draft_bad_values() {
        let c = DraftConfig {
            strategies: vec!["0x1234".into()],
            ..Default::default()
        };
        assert!(matches!(c.into_draft(), Err(DraftError::Value(_))));

        let c = DraftConfig {
            management_fee: "lots".into(),
            ..Default::default()
        };
        assert!(matches!(c.into_draft(), Err(DraftError::Value(_))));
    }
}
