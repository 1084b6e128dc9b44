//! EIP-2124 fork-hash derivation over a chain's timeline.

use chainspec_config::{ChainConfig, HardforkActivation};
use chainspec_eip2124::ForkHash;

use crate::error::ChainSpecError;

/// Fork hash for `hardfork` on `chain`.
///
/// A precomputed hash on the target row takes precedence over computation;
/// historical chains carry these as canonical fixed values.
pub fn fork_hash(chain: &ChainConfig, hardfork: &str) -> Result<String, ChainSpecError> {
    let row = chain
        .hardfork(hardfork)
        .ok_or_else(|| ChainSpecError::UnknownHardfork {
            hardfork: hardfork.to_owned(),
            chain: chain.name.clone(),
        })?;
    if row.block.is_none() {
        return Err(ChainSpecError::NoForkHash {
            hardfork: hardfork.to_owned(),
        });
    }

    if let Some(stored) = &row.fork_hash {
        return Ok(stored.clone());
    }

    Ok(compute_fork_hash(chain, hardfork)?.to_string())
}

/// CRC-32 walk over the genesis hash and the applied transition blocks up to
/// and including `hardfork`.
fn compute_fork_hash(chain: &ChainConfig, hardfork: &str) -> Result<ForkHash, ChainSpecError> {
    let genesis =
        hex::decode(&chain.genesis.hash).map_err(|source| ChainSpecError::InvalidGenesisHash {
            chain: chain.name.clone(),
            source,
        })?;

    let mut transition_blocks = Vec::new();
    // Chainstart (block 0), unscheduled rows and rows repeating the previous
    // transition block contribute no bytes.
    let mut previous_block = 0;
    for row in &chain.hardforks {
        if let Some(block) = row.block {
            if block != 0 && block != previous_block {
                transition_blocks.push(block);
                previous_block = block;
            }
        }
        if row.name == hardfork {
            break;
        }
    }

    Ok(ForkHash::new(&genesis, transition_blocks))
}

/// Reverse lookup: the timeline row whose stored fork hash equals
/// `fork_hash`, if any.
///
/// More than one match means the dataset violates the unique-hash invariant;
/// the last matching row is returned without further handling.
pub fn hardfork_for_fork_hash<'chain>(
    chain: &'chain ChainConfig,
    fork_hash: &str,
) -> Option<&'chain HardforkActivation> {
    chain
        .hardforks
        .iter()
        .rfind(|row| row.fork_hash.as_deref() == Some(fork_hash))
}
