//! Mutable configuration context mediating all chain queries.

use std::sync::Arc;

use chainspec_config::{
    BootstrapNode, ChainConfig, ChainDataset, ConsensusAlgorithm, ConsensusType, GenesisConfig,
    HardforkActivation,
};

use crate::{error::ChainSpecError, fork_hash, resolver, timeline};

/// Baseline hardfork assumed when none is selected explicitly.
pub const DEFAULT_HARDFORK: &str = "istanbul";

/// Selects a chain out of the dataset: by name, by chain ID, or as a fully
/// custom description.
#[derive(Clone, Debug)]
pub enum ChainSelector {
    /// Chain name, e.g. "mainnet".
    Name(String),
    /// EIP-155 chain ID.
    Id(u64),
    /// Custom chain object in the JSON wire shape. Must provide
    /// `networkId`, `genesis`, `hardforks` and `bootstrapNodes`; all values
    /// are trusted verbatim.
    Custom(serde_json::Value),
}

impl From<&str> for ChainSelector {
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}

impl From<u64> for ChainSelector {
    fn from(chain_id: u64) -> Self {
        Self::Id(chain_id)
    }
}

impl From<serde_json::Value> for ChainSelector {
    fn from(custom: serde_json::Value) -> Self {
        Self::Custom(custom)
    }
}

/// Constructor options for [`ChainSpec`].
#[derive(Clone, Debug, Default)]
pub struct ChainSpecOptions {
    /// Initial hardfork; [`DEFAULT_HARDFORK`] when `None`.
    pub hardfork: Option<String>,
    /// Allow-list of selectable hardforks; empty means all are supported.
    pub supported_hardforks: Vec<String>,
    /// Initially active EIPs.
    pub eips: Vec<u64>,
}

/// Options shared by activation and comparison queries.
#[derive(Clone, Copy, Debug, Default)]
pub struct HardforkOpts {
    /// Compare positions within the active timeline only.
    pub only_active: bool,
    /// Enforce the support allow-list.
    pub only_supported: bool,
}

/// Configuration context: one selected chain, a current hardfork, a support
/// allow-list and a set of active EIPs.
///
/// All parameter, activation and fork-hash queries go through this type,
/// which enforces support and activation invariants before delegating to
/// [`timeline`], [`resolver`] and [`fork_hash`]. The dataset handle may be
/// shared freely; the context itself is not synchronized, so concurrent
/// mutation needs one instance per thread or external serialization.
#[derive(Clone, Debug)]
pub struct ChainSpec {
    dataset: Arc<ChainDataset>,
    chain: ChainConfig,
    hardfork: String,
    supported_hardforks: Vec<String>,
    eips: Vec<u64>,
}

impl ChainSpec {
    /// Creates a context for the selected chain.
    ///
    /// The options' hardfork and EIP set go through the same validation as
    /// [`ChainSpec::set_hardfork`] and [`ChainSpec::set_eips`].
    pub fn new(
        dataset: Arc<ChainDataset>,
        chain: impl Into<ChainSelector>,
        options: ChainSpecOptions,
    ) -> Result<Self, ChainSpecError> {
        let chain = Self::select_chain(&dataset, &chain.into())?;
        let mut spec = Self {
            dataset,
            chain,
            hardfork: DEFAULT_HARDFORK.to_owned(),
            supported_hardforks: options.supported_hardforks,
            eips: Vec::new(),
        };

        if let Some(hardfork) = &options.hardfork {
            spec.set_hardfork(hardfork)?;
        }
        if !options.eips.is_empty() {
            spec.set_eips(&options.eips)?;
        }

        Ok(spec)
    }

    fn select_chain(
        dataset: &ChainDataset,
        selector: &ChainSelector,
    ) -> Result<ChainConfig, ChainSpecError> {
        match selector {
            ChainSelector::Name(name) => dataset.chain_by_name(name).cloned().ok_or_else(|| {
                ChainSpecError::UnknownChain {
                    selector: name.clone(),
                }
            }),
            ChainSelector::Id(chain_id) => {
                dataset
                    .chain_by_id(*chain_id)
                    .cloned()
                    .ok_or_else(|| ChainSpecError::UnknownChain {
                        selector: chain_id.to_string(),
                    })
            }
            ChainSelector::Custom(custom) => Self::custom_chain(custom),
        }
    }

    fn custom_chain(custom: &serde_json::Value) -> Result<ChainConfig, ChainSpecError> {
        const REQUIRED_FIELDS: &[&str] = &["networkId", "genesis", "hardforks", "bootstrapNodes"];

        for &field in REQUIRED_FIELDS {
            if custom.get(field).is_none() {
                return Err(ChainSpecError::MissingField { field });
            }
        }

        Ok(serde_json::from_value(custom.clone())?)
    }

    /// Replaces the selected chain. The current hardfork and EIP set are
    /// left untouched.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn set_chain(
        &mut self,
        chain: impl Into<ChainSelector>,
    ) -> Result<&ChainConfig, ChainSpecError> {
        self.chain = Self::select_chain(&self.dataset, &chain.into())?;

        Ok(&self.chain)
    }

    /// Selects the current hardfork.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub fn set_hardfork(&mut self, hardfork: &str) -> Result<(), ChainSpecError> {
        self.ensure_supported(hardfork)?;
        if self.chain.hardfork(hardfork).is_none() {
            return Err(ChainSpecError::UnknownHardfork {
                hardfork: hardfork.to_owned(),
                chain: self.chain.name.clone(),
            });
        }
        self.hardfork = hardfork.to_owned();

        Ok(())
    }

    /// Selects the hardfork active at `block_number`, falling back to
    /// [`DEFAULT_HARDFORK`] when none is active, and returns the chosen
    /// name.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub fn set_hardfork_by_block_number(
        &mut self,
        block_number: u64,
    ) -> Result<String, ChainSpecError> {
        let hardfork = timeline::active_hardforks(&self.chain, Some(block_number), None)
            .last()
            .map_or_else(
                || {
                    log::debug!(
                        "no active hardfork at block {block_number}, falling back to {DEFAULT_HARDFORK}"
                    );
                    DEFAULT_HARDFORK.to_owned()
                },
                |hardfork| hardfork.name.clone(),
            );
        self.set_hardfork(&hardfork)?;

        Ok(hardfork)
    }

    /// Activates the given EIP set, replacing the previous one.
    ///
    /// The whole batch is validated before any of it is committed: every
    /// EIP must exist in the dataset and its minimum hardfork must not lie
    /// beyond the current hardfork in full timeline order.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub fn set_eips(&mut self, eips: &[u64]) -> Result<(), ChainSpecError> {
        for &eip in eips {
            let def = self
                .dataset
                .eip_def(eip)
                .ok_or(ChainSpecError::UnknownEip { eip })?;
            if !self.hardfork_gte_hardfork(None, &def.minimum_hardfork, HardforkOpts::default())? {
                return Err(ChainSpecError::HardforkTooOld {
                    eip,
                    minimum_hardfork: def.minimum_hardfork.clone(),
                    hardfork: self.hardfork.clone(),
                });
            }
        }
        self.eips = eips.to_vec();

        Ok(())
    }

    /// Effective value of `(topic, name)` for the current hardfork and
    /// active EIP set.
    pub fn param(&self, topic: &str, name: &str) -> Result<Option<u64>, ChainSpecError> {
        resolver::resolve(
            &self.dataset,
            &self.chain,
            topic,
            name,
            &self.hardfork,
            &self.eips,
        )
    }

    /// Timeline value of `(topic, name)` at an explicit hardfork, ignoring
    /// active EIPs.
    pub fn param_by_hardfork(
        &self,
        topic: &str,
        name: &str,
        hardfork: &str,
    ) -> Result<Option<u64>, ChainSpecError> {
        resolver::resolve_by_hardfork(&self.dataset, &self.chain, topic, name, hardfork)
    }

    /// Timeline value of `(topic, name)` at the last hardfork active for
    /// `block_number`.
    pub fn param_by_block(
        &self,
        topic: &str,
        name: &str,
        block_number: u64,
    ) -> Result<Option<u64>, ChainSpecError> {
        resolver::resolve_at_block(&self.dataset, &self.chain, topic, name, block_number)
    }

    /// Value of `(topic, name)` as defined by a single EIP.
    pub fn param_by_eip(
        &self,
        topic: &str,
        name: &str,
        eip: u64,
    ) -> Result<Option<u64>, ChainSpecError> {
        resolver::resolve_eip(&self.dataset, topic, name, eip)
    }

    /// Hardforks active at `block_number`; the full scheduled list when
    /// `None`.
    pub fn active_hardforks(
        &self,
        block_number: Option<u64>,
        opts: HardforkOpts,
    ) -> Vec<&HardforkActivation> {
        timeline::active_hardforks(&self.chain, block_number, self.support_filter(opts))
    }

    /// The most recently activated hardfork at `block_number`.
    pub fn active_hardfork(
        &self,
        block_number: Option<u64>,
        opts: HardforkOpts,
    ) -> Result<&HardforkActivation, ChainSpecError> {
        timeline::active_hardfork(&self.chain, block_number, self.support_filter(opts))
    }

    /// Whether `hardfork` (the current one when `None`) is active at
    /// `block_number`.
    pub fn hardfork_is_active_on_block(
        &self,
        hardfork: Option<&str>,
        block_number: u64,
        opts: HardforkOpts,
    ) -> Result<bool, ChainSpecError> {
        let hardfork = self.choose_hardfork(hardfork, opts.only_supported)?;
        let block = timeline::hardfork_block(&self.chain, hardfork)?;

        Ok(matches!(block, Some(block) if block_number >= block))
    }

    /// Whether the current hardfork is active at `block_number`.
    pub fn active_on_block(
        &self,
        block_number: u64,
        opts: HardforkOpts,
    ) -> Result<bool, ChainSpecError> {
        self.hardfork_is_active_on_block(None, block_number, opts)
    }

    /// Whether `hardfork` (the current one when `None`) is scheduled on the
    /// chain at all.
    pub fn hardfork_is_active_on_chain(
        &self,
        hardfork: Option<&str>,
        opts: HardforkOpts,
    ) -> Result<bool, ChainSpecError> {
        let hardfork = self.choose_hardfork(hardfork, opts.only_supported)?;

        Ok(self
            .chain
            .hardfork(hardfork)
            .is_some_and(|hardfork| hardfork.block.is_some()))
    }

    /// Timeline-position comparison of the current hardfork against
    /// `other`.
    pub fn gte_hardfork(&self, other: &str, opts: HardforkOpts) -> Result<bool, ChainSpecError> {
        self.hardfork_gte_hardfork(None, other, opts)
    }

    /// Timeline-position comparison `hardfork >= other`.
    ///
    /// Positions are indices into the full timeline, or into the active
    /// timeline with `only_active`. A name absent from the compared
    /// sequence takes position `-1`, so comparisons involving absent names
    /// are implementation-defined rather than a meaningful ordering.
    pub fn hardfork_gte_hardfork(
        &self,
        hardfork: Option<&str>,
        other: &str,
        opts: HardforkOpts,
    ) -> Result<bool, ChainSpecError> {
        let hardfork = self.choose_hardfork(hardfork, opts.only_supported)?;
        let sequence: Vec<&HardforkActivation> = if opts.only_active {
            self.active_hardforks(None, opts)
        } else {
            self.chain.hardforks.iter().collect()
        };

        let position_of =
            |name: &str| sequence.iter().position(|hardfork| hardfork.name == name);
        Ok(match (position_of(hardfork), position_of(other)) {
            (Some(lhs), Some(rhs)) => lhs >= rhs,
            // An absent name sits at -1, below every real position.
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => true,
        })
    }

    /// Activation block of `hardfork` (the current one when `None`).
    pub fn hardfork_block(&self, hardfork: Option<&str>) -> Result<Option<u64>, ChainSpecError> {
        let hardfork = self.choose_hardfork(hardfork, false)?;

        timeline::hardfork_block(&self.chain, hardfork)
    }

    /// Whether `block_number` is the activation block of `hardfork` (the
    /// current one when `None`).
    pub fn is_hardfork_block(
        &self,
        block_number: u64,
        hardfork: Option<&str>,
    ) -> Result<bool, ChainSpecError> {
        Ok(self.hardfork_block(hardfork)? == Some(block_number))
    }

    /// First scheduled activation block after `hardfork` (the current one
    /// when `None`).
    pub fn next_hardfork_block(
        &self,
        hardfork: Option<&str>,
    ) -> Result<Option<u64>, ChainSpecError> {
        let hardfork = self.choose_hardfork(hardfork, false)?;

        timeline::next_hardfork_block(&self.chain, hardfork)
    }

    /// Whether `block_number` is the next hardfork transition after
    /// `hardfork` (the current one when `None`).
    pub fn is_next_hardfork_block(
        &self,
        block_number: u64,
        hardfork: Option<&str>,
    ) -> Result<bool, ChainSpecError> {
        Ok(self.next_hardfork_block(hardfork)? == Some(block_number))
    }

    /// EIP-2124 fork hash for `hardfork` (the current one when `None`).
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub fn fork_hash(&self, hardfork: Option<&str>) -> Result<String, ChainSpecError> {
        let hardfork = self.choose_hardfork(hardfork, false)?;

        fork_hash::fork_hash(&self.chain, hardfork)
    }

    /// Reverse lookup: the timeline row carrying `fork_hash`, if any.
    pub fn hardfork_for_fork_hash(&self, fork_hash: &str) -> Option<&HardforkActivation> {
        fork_hash::hardfork_for_fork_hash(&self.chain, fork_hash)
    }

    /// The selected chain.
    pub fn chain(&self) -> &ChainConfig {
        &self.chain
    }

    /// Name of the selected chain.
    pub fn chain_name(&self) -> &str {
        &self.chain.name
    }

    /// EIP-155 chain ID of the selected chain.
    pub fn chain_id(&self) -> u64 {
        self.chain.chain_id
    }

    /// Network ID of the selected chain.
    pub fn network_id(&self) -> u64 {
        self.chain.network_id
    }

    /// Genesis descriptor of the selected chain.
    pub fn genesis(&self) -> &GenesisConfig {
        &self.chain.genesis
    }

    /// Hardfork timeline rows of the selected chain.
    pub fn hardforks(&self) -> &[HardforkActivation] {
        &self.chain.hardforks
    }

    /// Bootstrap peers of the selected chain.
    pub fn bootstrap_nodes(&self) -> &[BootstrapNode] {
        &self.chain.bootstrap_nodes
    }

    /// Consensus family of the selected chain.
    pub fn consensus_type(&self) -> ConsensusType {
        self.chain.consensus.kind
    }

    /// Consensus algorithm of the selected chain.
    pub fn consensus_algorithm(&self) -> ConsensusAlgorithm {
        self.chain.consensus.algorithm
    }

    /// The currently selected hardfork.
    pub fn hardfork(&self) -> &str {
        &self.hardfork
    }

    /// The currently active EIPs.
    pub fn eips(&self) -> &[u64] {
        &self.eips
    }

    /// The support allow-list; empty means all hardforks are supported.
    pub fn supported_hardforks(&self) -> &[String] {
        &self.supported_hardforks
    }

    /// Resolves an explicit hardfork argument against the stored current
    /// hardfork, enforcing the support allow-list when requested.
    fn choose_hardfork<'hardfork>(
        &'hardfork self,
        hardfork: Option<&'hardfork str>,
        only_supported: bool,
    ) -> Result<&'hardfork str, ChainSpecError> {
        let hardfork = hardfork.unwrap_or(&self.hardfork);
        if only_supported {
            self.ensure_supported(hardfork)?;
        }

        Ok(hardfork)
    }

    fn is_supported(&self, hardfork: &str) -> bool {
        self.supported_hardforks.is_empty()
            || self.supported_hardforks.iter().any(|name| name == hardfork)
    }

    fn ensure_supported(&self, hardfork: &str) -> Result<(), ChainSpecError> {
        if self.is_supported(hardfork) {
            Ok(())
        } else {
            Err(ChainSpecError::UnsupportedHardfork {
                hardfork: hardfork.to_owned(),
            })
        }
    }

    fn support_filter(&self, opts: HardforkOpts) -> Option<&[String]> {
        if opts.only_supported && !self.supported_hardforks.is_empty() {
            Some(&self.supported_hardforks)
        } else {
            None
        }
    }
}
