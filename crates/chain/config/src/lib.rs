//! Chain, hardfork and EIP configuration tables.
//!
//! Everything in this crate is static description: once a [`ChainDataset`]
//! is constructed it is never mutated, so it can be shared between any
//! number of consumers (e.g. behind an `Arc`) without synchronization.

mod params;

use std::collections::HashMap;

pub use self::params::{EipDef, HardforkParams, ParamEntry, ParamTable, TopicParams};

/// Genesis block descriptor of a chain.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenesisConfig {
    /// Genesis block hash, `0x`-prefixed.
    pub hash: String,
    /// Genesis state root, `0x`-prefixed.
    pub state_root: String,
    /// Gas limit of the genesis block.
    pub gas_limit: u64,
    /// Difficulty of the genesis block.
    pub difficulty: u64,
    /// Genesis nonce, `0x`-prefixed.
    pub nonce: String,
    /// Extra data of the genesis block, `0x`-prefixed.
    pub extra_data: String,
    /// UNIX timestamp; `None` for chains that leave it unset.
    #[serde(default)]
    pub timestamp: Option<u64>,
}

/// A bootstrap peer of a chain.
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BootstrapNode {
    /// IP address.
    pub ip: String,
    /// TCP/UDP port.
    pub port: u16,
    /// Node public key, hex-encoded.
    pub id: String,
    /// Free-form location hint.
    #[serde(default)]
    pub location: String,
    /// Free-form comment.
    #[serde(default)]
    pub comment: String,
}

/// Consensus family of a chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsensusType {
    /// Proof of work.
    Pow,
    /// Proof of authority.
    Poa,
    /// Proof of stake.
    Pos,
}

/// Algorithm driving the consensus type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsensusAlgorithm {
    /// Ethash proof of work.
    Ethash,
    /// Clique proof of authority.
    Clique,
    /// Casper proof of stake.
    Casper,
}

/// Consensus descriptor (type + algorithm).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsensusConfig {
    /// Consensus family.
    #[serde(rename = "type")]
    pub kind: ConsensusType,
    /// Consensus algorithm.
    pub algorithm: ConsensusAlgorithm,
}

impl Default for ConsensusConfig {
    fn default() -> Self {
        Self {
            kind: ConsensusType::Pow,
            algorithm: ConsensusAlgorithm::Ethash,
        }
    }
}

/// Activation row of a chain's hardfork timeline.
///
/// The parameter surface of the hardfork lives in the dataset's definition
/// table, keyed by `name`; the row only pins the activation point on this
/// particular chain.
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HardforkActivation {
    /// Hardfork name, unique within the chain.
    pub name: String,
    /// Activation block number; `None` when the hardfork is not scheduled.
    pub block: Option<u64>,
    /// Precomputed EIP-2124 fork hash, where canonical for the chain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fork_hash: Option<String>,
}

/// Static description of a chain: identifiers, genesis, hardfork timeline,
/// bootstrap peers and consensus.
///
/// The `hardforks` insertion order is the activation order; the first row's
/// block is `0` or unscheduled.
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainConfig {
    /// Chain name, e.g. "mainnet".
    #[serde(default)]
    pub name: String,
    /// EIP-155 chain ID.
    #[serde(default)]
    pub chain_id: u64,
    /// Network ID used during the p2p handshake.
    pub network_id: u64,
    /// Genesis block descriptor.
    pub genesis: GenesisConfig,
    /// Hardfork timeline rows, in activation order.
    pub hardforks: Vec<HardforkActivation>,
    /// Bootstrap peers.
    pub bootstrap_nodes: Vec<BootstrapNode>,
    /// Consensus descriptor.
    #[serde(default)]
    pub consensus: ConsensusConfig,
}

impl ChainConfig {
    /// Returns the activation row for `name`, if the chain schedules it.
    pub fn hardfork(&self, name: &str) -> Option<&HardforkActivation> {
        self.hardforks.iter().find(|hardfork| hardfork.name == name)
    }

    /// Position of `name` in the timeline, if present.
    pub fn hardfork_index(&self, name: &str) -> Option<usize> {
        self.hardforks.iter().position(|hardfork| hardfork.name == name)
    }
}

/// Immutable provider of chain, hardfork and EIP definition tables.
#[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainDataset {
    chains: Vec<ChainConfig>,
    hardforks: HashMap<String, HardforkParams>,
    eips: HashMap<u64, EipDef>,
}

impl ChainDataset {
    /// Constructs a dataset from the provided tables.
    pub fn new(
        chains: Vec<ChainConfig>,
        hardforks: HashMap<String, HardforkParams>,
        eips: HashMap<u64, EipDef>,
    ) -> Self {
        Self {
            chains,
            hardforks,
            eips,
        }
    }

    /// All chains in the dataset.
    pub fn chains(&self) -> &[ChainConfig] {
        &self.chains
    }

    /// Looks a chain up by name.
    pub fn chain_by_name(&self, name: &str) -> Option<&ChainConfig> {
        self.chains.iter().find(|chain| chain.name == name)
    }

    /// Looks a chain up by EIP-155 chain ID.
    pub fn chain_by_id(&self, chain_id: u64) -> Option<&ChainConfig> {
        self.chains.iter().find(|chain| chain.chain_id == chain_id)
    }

    /// Parameter surface of the named hardfork, if defined.
    pub fn hardfork_def(&self, name: &str) -> Option<&HardforkParams> {
        self.hardforks.get(name)
    }

    /// Definition of the numbered EIP, if present.
    pub fn eip_def(&self, eip: u64) -> Option<&EipDef> {
        self.eips.get(&eip)
    }
}
