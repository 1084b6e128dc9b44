//! Layered parameter resolution.
//!
//! Active EIPs override the hardfork timeline unconditionally: they model
//! opt-in changes that must be able to shadow baseline behavior regardless
//! of where the timeline currently stands.

use chainspec_config::{ChainConfig, ChainDataset, HardforkParams};

use crate::{error::ChainSpecError, timeline};

/// Effective value of `(topic, name)` with `active_eips` layered over the
/// timeline value at `hardfork`.
///
/// Active EIPs are checked in activation order and the first one defining
/// the parameter wins; otherwise resolution falls through to
/// [`resolve_by_hardfork`]. `Ok(None)` when no layer defines the parameter.
pub fn resolve(
    dataset: &ChainDataset,
    chain: &ChainConfig,
    topic: &str,
    name: &str,
    hardfork: &str,
    active_eips: &[u64],
) -> Result<Option<u64>, ChainSpecError> {
    for &eip in active_eips {
        if let Some(value) = resolve_eip(dataset, topic, name, eip)? {
            return Ok(Some(value));
        }
    }

    resolve_by_hardfork(dataset, chain, topic, name, hardfork)
}

/// Timeline value of `(topic, name)` at `hardfork`, without an EIP layer.
///
/// Walks the chain's rows from genesis, overwriting the accumulated value on
/// every match, and stops after processing the target row. An
/// EIP-referencing row resolves each referenced EIP in list order with the
/// same overwrite rule. A target absent from the timeline accumulates
/// through the entire walk.
pub fn resolve_by_hardfork(
    dataset: &ChainDataset,
    chain: &ChainConfig,
    topic: &str,
    name: &str,
    hardfork: &str,
) -> Result<Option<u64>, ChainSpecError> {
    let mut value = None;
    for row in &chain.hardforks {
        let def = dataset
            .hardfork_def(&row.name)
            .ok_or_else(|| ChainSpecError::UnknownHardfork {
                hardfork: row.name.clone(),
                chain: chain.name.clone(),
            })?;

        match def {
            HardforkParams::Eips { eips } => {
                for &eip in eips {
                    if let Some(eip_value) = resolve_eip(dataset, topic, name, eip)? {
                        value = Some(eip_value);
                    }
                }
            }
            HardforkParams::Inline(params) => {
                let topic_params =
                    params
                        .get(topic)
                        .ok_or_else(|| ChainSpecError::UnknownTopic {
                            topic: topic.to_owned(),
                            defined_in: row.name.clone(),
                        })?;
                if let Some(entry) = topic_params.get(name) {
                    value = Some(entry.v);
                }
            }
        }

        if row.name == hardfork {
            break;
        }
    }

    Ok(value)
}

/// Timeline value of `(topic, name)` at the last hardfork active for
/// `block_number`, without an EIP layer.
pub fn resolve_at_block(
    dataset: &ChainDataset,
    chain: &ChainConfig,
    topic: &str,
    name: &str,
    block_number: u64,
) -> Result<Option<u64>, ChainSpecError> {
    let hardfork = timeline::active_hardfork(chain, Some(block_number), None)?;

    resolve_by_hardfork(dataset, chain, topic, name, &hardfork.name)
}

/// Value of `(topic, name)` as defined by `eip` alone.
///
/// `Ok(None)` when the EIP defines the topic but not the name.
pub fn resolve_eip(
    dataset: &ChainDataset,
    topic: &str,
    name: &str,
    eip: u64,
) -> Result<Option<u64>, ChainSpecError> {
    let def = dataset
        .eip_def(eip)
        .ok_or(ChainSpecError::UnknownEip { eip })?;
    let topic_params = def
        .topic(topic)
        .ok_or_else(|| ChainSpecError::UnknownTopic {
            topic: topic.to_owned(),
            defined_in: format!("EIP-{eip}"),
        })?;

    Ok(topic_params.get(name).map(|entry| entry.v))
}
