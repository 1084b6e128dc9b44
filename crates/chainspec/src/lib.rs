//! Chain parameter resolution for Ethereum-style networks.
//!
//! Given an immutable dataset of chain, hardfork and EIP tables, this crate
//! answers which hardforks are active at a block number, what a protocol
//! parameter is worth at a given upgrade point, and what the chain's
//! EIP-2124 fork hash is, all behind the mutable [`ChainSpec`] context.

pub mod error;
pub mod fork_hash;
pub mod resolver;
mod spec;
#[cfg(test)]
pub(crate) mod test_support;
pub mod timeline;

pub use chainspec_config::{
    BootstrapNode, ChainConfig, ChainDataset, ConsensusAlgorithm, ConsensusConfig, ConsensusType,
    EipDef, GenesisConfig, HardforkActivation, HardforkParams, ParamEntry, ParamTable, TopicParams,
};
pub use chainspec_eip2124::ForkHash;

pub use self::{
    error::ChainSpecError,
    spec::{ChainSelector, ChainSpec, ChainSpecOptions, HardforkOpts, DEFAULT_HARDFORK},
};
