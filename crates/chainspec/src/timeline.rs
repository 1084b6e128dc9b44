//! Activation-order queries over a chain's hardfork timeline.
//!
//! Activation order is the insertion order of the chain's rows; positions
//! are derived per query instead of being stored on the rows.

use chainspec_config::{ChainConfig, HardforkActivation};

use crate::error::ChainSpecError;

/// The chain's hardfork activation rows verbatim, in activation order.
pub fn hardforks(chain: &ChainConfig) -> &[HardforkActivation] {
    &chain.hardforks
}

/// Hardforks active at `block_number`, preserving timeline order; all
/// scheduled hardforks when `block_number` is `None`.
///
/// Unscheduled rows are skipped. The walk stops (exclusive) at the first row
/// whose block exceeds `block_number`, so a row behind a future activation
/// is never reported even if its own block qualifies. A `support_filter`
/// additionally excludes rows absent from the allow-list.
pub fn active_hardforks<'chain>(
    chain: &'chain ChainConfig,
    block_number: Option<u64>,
    support_filter: Option<&[String]>,
) -> Vec<&'chain HardforkActivation> {
    let mut active = Vec::new();
    for hardfork in &chain.hardforks {
        let Some(block) = hardfork.block else {
            continue;
        };
        if let Some(block_number) = block_number {
            if block_number < block {
                break;
            }
        }
        if let Some(filter) = support_filter {
            if !filter.iter().any(|name| *name == hardfork.name) {
                continue;
            }
        }
        active.push(hardfork);
    }

    active
}

/// The most recently activated hardfork at `block_number`.
pub fn active_hardfork<'chain>(
    chain: &'chain ChainConfig,
    block_number: Option<u64>,
    support_filter: Option<&[String]>,
) -> Result<&'chain HardforkActivation, ChainSpecError> {
    active_hardforks(chain, block_number, support_filter)
        .last()
        .copied()
        .ok_or_else(|| ChainSpecError::NoActiveHardfork {
            chain: chain.name.clone(),
            block_number,
        })
}

/// Activation block of `name`; `None` when the hardfork is not scheduled.
pub fn hardfork_block(chain: &ChainConfig, name: &str) -> Result<Option<u64>, ChainSpecError> {
    chain
        .hardfork(name)
        .map(|hardfork| hardfork.block)
        .ok_or_else(|| ChainSpecError::UnknownHardfork {
            hardfork: name.to_owned(),
            chain: chain.name.clone(),
        })
}

/// First scheduled activation block strictly after `name`'s block; `None`
/// when `name` itself is unscheduled or nothing follows it.
///
/// When several future rows share a block, the first one encountered in
/// timeline order wins. Which of them that is, is implementation-defined.
pub fn next_hardfork_block(chain: &ChainConfig, name: &str) -> Result<Option<u64>, ChainSpecError> {
    let Some(block) = hardfork_block(chain, name)? else {
        return Ok(None);
    };

    Ok(chain
        .hardforks
        .iter()
        .filter_map(|hardfork| hardfork.block)
        .find(|candidate| *candidate > block))
}
