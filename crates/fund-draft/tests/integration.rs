// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Integration tests: config file → draft → interactive edits → payload.
//!
//! These exercise the three crates together the way the CLI drives them.

use basis_points::{Address, Bps};
use fund_draft::{DraftConfig, DraftError, FundDraft};
use std::io::Write;
use weight_allocator::{all_policies, Normalize, PrioritizeFirst};

const ASSET: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";
const LIQUID: &str = "0xe7f1725E7734CE288F8367e1Bb143E90bb3F0512";
const ILLIQUID: &str = "0x9fE46736679d2D9a65F0992F2272dE9f3c7fa6e0";
const WALLET: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

// ── Helpers ────────────────────────────────────────────────────

fn wallet() -> Address {
    Address::parse(WALLET).unwrap()
}

fn write_config(body: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(body.as_bytes()).unwrap();
    file
}

fn base_config() -> String {
    format!(
        r#"
name = "Aave Lending Turbo"
description = "Lending sleeve with an illiquid kicker"
asset = "{ASSET}"
policy = "prioritize-first"
buffer = "10%"
management_fee = "2%"
performance_fee = "20%"
strategies = ["{LIQUID}", "{ILLIQUID}"]
"#
    )
}

// ── Tests ──────────────────────────────────────────────────────

#[test]
fn test_config_file_to_payload() {
    let file = write_config(&base_config());
    let config = DraftConfig::from_file(file.path()).unwrap();
    let draft = config.into_draft().unwrap();

    let params = draft.build_params(Some(&wallet())).unwrap();
    assert_eq!(params.asset.as_str(), ASSET.to_lowercase());
    assert_eq!(params.weights_bps, vec![6000, 4000]);
    assert_eq!(params.buffer_bps, 1000);
    assert_eq!(params.mgmt_fee_bps, 200);
    assert_eq!(params.perf_fee_bps, 2000);
    assert_eq!(params.manager_fee_recipient, wallet());
    assert_eq!(
        params.strategy_implementations,
        vec![Address::parse(LIQUID).unwrap(), Address::parse(ILLIQUID).unwrap()]
    );

    let json = params.to_json().unwrap();
    assert!(json.contains("\"weightsBps\""));
}

#[test]
fn test_missing_config_file() {
    let err = DraftConfig::from_file(std::path::Path::new("/nonexistent/draft.toml")).unwrap_err();
    assert!(matches!(err, DraftError::ConfigError(_)));
}

#[test]
fn test_interactive_session() {
    let mut draft = FundDraft::new("Session");
    draft.asset = Some(Address::parse(ASSET).unwrap());

    let a = Address::parse(LIQUID).unwrap();
    let b = Address::parse(ILLIQUID).unwrap();
    let c = Address::parse("0xCf7Ed3AccA5a467e9e704C703E8D87F634fB0Fc9").unwrap();

    draft.select_strategy(a.clone());
    draft.select_strategy(b.clone());
    draft.select_strategy(c.clone());

    // Typing weights by hand: 50%, 30%, 10% → 90% allocated.
    draft.set_weight_percent(&a, 50.0);
    draft.set_weight_percent(&b, 30.0);
    draft.set_weight_percent(&c, 10.0);
    assert_eq!(draft.buffer_report().to_string(), "10.00%");
    assert!(!draft.can_create(Some(&wallet())));

    // Raising `c` to 30% only fits 20%.
    let capped = draft.set_weight_percent(&c, 30.0).unwrap();
    assert!(capped.clamped);
    assert_eq!(capped.applied, Bps::from(2000));
    assert!(draft.can_create(Some(&wallet())));

    // Back to 90% and normalize: 5000/3000/1000 → 5556/3333/1111.
    draft.set_weight_percent(&c, 10.0);
    let updates = draft.redistribute(&Normalize::new());
    assert_eq!(updates.len(), 3);
    let p = draft.build_params(Some(&wallet())).unwrap();
    assert_eq!(p.weights_bps, vec![5556, 3333, 1111]);

    // Remove the middle strategy: its weight leaves with it.
    draft.remove_strategy(&b);
    assert_eq!(draft.weights.total_bps(), 6667);
    assert!(matches!(
        draft.build_params(Some(&wallet())),
        Err(DraftError::WeightsIncomplete { total_bps: 6667 })
    ));

    draft.redistribute(&PrioritizeFirst::default());
    let p = draft.build_params(Some(&wallet())).unwrap();
    assert_eq!(p.strategy_implementations, vec![a, c]);
    assert_eq!(p.weights_bps, vec![6000, 4000]);
}

#[test]
fn test_every_policy_yields_submittable_draft() {
    let file = write_config(&base_config());
    let config = DraftConfig::from_file(file.path()).unwrap();

    for policy in all_policies() {
        let mut draft = config.into_draft().unwrap();
        draft.redistribute(policy.as_ref());
        assert!(
            draft.can_create(Some(&wallet())),
            "policy '{}' left draft incomplete: {}",
            policy.name(),
            draft.weights.summary(),
        );
    }
}

#[test]
fn test_buffer_carve_out_blocks_submission() {
    let file = write_config(&base_config());
    let mut draft = DraftConfig::from_file(file.path()).unwrap().into_draft().unwrap();

    draft.reserve_buffer(Bps::from(1000));
    assert_eq!(draft.weights.total_bps(), 9000);
    assert_eq!(draft.buffer_report().buffer, Bps::from(1000));
    assert!(!draft.can_create(Some(&wallet())));
}
