//! Shared fixtures for unit tests.

use std::collections::HashMap;

use chainspec_config::{
    BootstrapNode, ChainConfig, ChainDataset, ConsensusConfig, EipDef, GenesisConfig,
    HardforkActivation, HardforkParams, ParamEntry, ParamTable, TopicParams,
};

fn activation(name: &str, block: Option<u64>) -> HardforkActivation {
    HardforkActivation {
        name: name.to_owned(),
        block,
        fork_hash: None,
    }
}

fn topic(entries: &[(&str, u64)]) -> TopicParams {
    entries
        .iter()
        .map(|&(name, v)| (name.to_owned(), ParamEntry { v }))
        .collect()
}

fn table(topics: Vec<(&str, TopicParams)>) -> ParamTable {
    topics
        .into_iter()
        .map(|(name, params)| (name.to_owned(), params))
        .collect()
}

fn mainnet_genesis() -> GenesisConfig {
    GenesisConfig {
        hash: "0xd4e56740f876aef8c010b86a40d5f56745a118d0906a34e69aec8c0db1cb8fa3".to_owned(),
        state_root: "0xd7f8974fb5ac78d9ac099b9ad5018bedc2ce0a72dad1827a1709da30580f0544".to_owned(),
        gas_limit: 5000,
        difficulty: 17_179_869_184,
        nonce: "0x0000000000000042".to_owned(),
        extra_data: "0x11bbe8db4e347b4e8c937c1c8370e4b5ed33adb3db69cbdb7a38e1e50b1b82fa".to_owned(),
        timestamp: None,
    }
}

/// Mainnet-shaped chain with a short timeline: two unscheduled hardforks at
/// the end, one of them EIP-referencing.
pub(crate) fn scenario_chain() -> ChainConfig {
    ChainConfig {
        name: "mainnet".to_owned(),
        chain_id: 1,
        network_id: 1,
        genesis: mainnet_genesis(),
        hardforks: vec![
            activation("chainstart", Some(0)),
            activation("homestead", Some(1_150_000)),
            activation("byzantium", Some(4_370_000)),
            activation("istanbul", None),
            activation("berlin", None),
        ],
        bootstrap_nodes: vec![BootstrapNode {
            ip: "18.138.108.67".to_owned(),
            port: 30303,
            id: "d860a01f9722d78051619d1e2351aba3f43f943f6f00718d1b9baa4101932a1f5011f16bb2b1bb35db20d6fe28fa0bf09636d26a87d31de9ec6203eeedb1f666".to_owned(),
            location: "ap-southeast-1".to_owned(),
            comment: "bootnode-aws-ap-southeast-1-001".to_owned(),
        }],
        consensus: ConsensusConfig::default(),
    }
}

fn classic_chain() -> ChainConfig {
    ChainConfig {
        name: "classic".to_owned(),
        chain_id: 61,
        network_id: 1,
        genesis: mainnet_genesis(),
        hardforks: vec![
            activation("chainstart", Some(0)),
            activation("homestead", Some(1_150_000)),
        ],
        bootstrap_nodes: Vec::new(),
        consensus: ConsensusConfig::default(),
    }
}

fn hardfork_defs() -> HashMap<String, HardforkParams> {
    let mut defs = HashMap::new();
    defs.insert(
        "chainstart".to_owned(),
        HardforkParams::Inline(table(vec![
            ("gasConfig", topic(&[("minGasLimit", 5000), ("gasLimitBoundDivisor", 1024)])),
            (
                "gasPrices",
                topic(&[
                    ("tx", 21_000),
                    ("txCreation", 21_000),
                    ("sstoreSet", 20_000),
                    ("sload", 50),
                    ("exp", 10),
                ]),
            ),
            ("vm", topic(&[("stackLimit", 1024)])),
            (
                "pow",
                topic(&[
                    ("minerReward", 5_000_000_000_000_000_000),
                    ("minimumDifficulty", 131_072),
                    ("difficultyBoundDivisor", 2048),
                    ("durationLimit", 13),
                ]),
            ),
        ])),
    );
    defs.insert(
        "homestead".to_owned(),
        HardforkParams::Inline(table(vec![
            ("gasConfig", topic(&[])),
            ("gasPrices", topic(&[("txCreation", 32_000)])),
            ("vm", topic(&[])),
            ("pow", topic(&[])),
        ])),
    );
    defs.insert(
        "byzantium".to_owned(),
        HardforkParams::Inline(table(vec![
            ("gasConfig", topic(&[])),
            (
                "gasPrices",
                topic(&[("modexpGquaddivisor", 20), ("ecAdd", 500), ("ecMul", 40_000)]),
            ),
            ("vm", topic(&[])),
            ("pow", topic(&[("minerReward", 3_000_000_000_000_000_000)])),
        ])),
    );
    defs.insert(
        "istanbul".to_owned(),
        HardforkParams::Inline(table(vec![
            ("gasConfig", topic(&[])),
            (
                "gasPrices",
                topic(&[("sload", 800), ("balance", 700), ("txDataNonZero", 16)]),
            ),
            ("vm", topic(&[])),
            ("pow", topic(&[])),
        ])),
    );
    defs.insert(
        "berlin".to_owned(),
        HardforkParams::Eips {
            eips: vec![2565, 2929],
        },
    );

    defs
}

fn eip_defs() -> HashMap<u64, EipDef> {
    let mut defs = HashMap::new();
    defs.insert(
        2565,
        EipDef {
            minimum_hardfork: "byzantium".to_owned(),
            params: table(vec![
                ("gasConfig", topic(&[])),
                ("gasPrices", topic(&[("modexpGquaddivisor", 3)])),
                ("vm", topic(&[])),
                ("pow", topic(&[])),
            ]),
        },
    );
    defs.insert(
        2929,
        EipDef {
            minimum_hardfork: "chainstart".to_owned(),
            params: table(vec![
                ("gasConfig", topic(&[])),
                (
                    "gasPrices",
                    topic(&[
                        ("coldsload", 2_100),
                        ("coldaccountaccess", 2_600),
                        ("warmstorageread", 100),
                    ]),
                ),
                ("vm", topic(&[])),
                ("pow", topic(&[])),
            ]),
        },
    );
    // Deliberately narrow: EIP-2315 only defines gas prices, so queries on
    // any other topic surface the missing-topic failure.
    defs.insert(
        2315,
        EipDef {
            minimum_hardfork: "istanbul".to_owned(),
            params: table(vec![(
                "gasPrices",
                topic(&[("beginsub", 2), ("returnsub", 5), ("jumpsub", 10)]),
            )]),
        },
    );

    defs
}

/// Dataset holding the scenario chains plus hardfork and EIP definitions.
pub(crate) fn scenario_dataset() -> ChainDataset {
    ChainDataset::new(
        vec![scenario_chain(), classic_chain()],
        hardfork_defs(),
        eip_defs(),
    )
}
