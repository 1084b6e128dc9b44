//! Types related to EIP-2124.
//!
//! A fork hash is the CRC-32 checksum over a chain's genesis hash followed
//! by the 8-byte big-endian block number of every applied fork transition,
//! as specified by [EIP-2124](https://eips.ethereum.org/EIPS/eip-2124).

use core::fmt;

use crc::{Crc, CRC_32_ISO_HDLC};

const CRC_32_IEEE: Crc<u32> = Crc::<u32>::new(&CRC_32_ISO_HDLC);

/// Compact fork identifier digest.
///
/// Wire format is the unsigned 32-bit checksum, rendered by [`fmt::Display`]
/// as a `0x`-prefixed lowercase hex string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ForkHash(pub u32);

impl ForkHash {
    /// Computes the fork hash over `genesis` (raw hash bytes) and the
    /// ordered fork transition block numbers.
    ///
    /// The caller is responsible for the transition-point filtering EIP-2124
    /// prescribes (no genesis block, no unscheduled forks, no repeats).
    pub fn new(genesis: &[u8], transition_blocks: impl IntoIterator<Item = u64>) -> Self {
        let mut bytes = genesis.to_vec();
        for block in transition_blocks {
            bytes.extend_from_slice(&block.to_be_bytes());
        }

        Self(CRC_32_IEEE.checksum(&bytes))
    }
}

impl fmt::Display for ForkHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use crate::ForkHash;

    const MAINNET_GENESIS: &str =
        "d4e56740f876aef8c010b86a40d5f56745a118d0906a34e69aec8c0db1cb8fa3";

    // Expected values are the published EIP-2124 test vectors for mainnet.
    #[test]
    fn matches_eip2124_mainnet_vectors() {
        let genesis = hex::decode(MAINNET_GENESIS).expect("genesis hash is valid hex");

        assert_eq!(ForkHash::new(&genesis, []).to_string(), "0xfc64ec04");
        assert_eq!(
            ForkHash::new(&genesis, [1_150_000]).to_string(),
            "0x97c2c34c"
        );
        assert_eq!(
            ForkHash::new(
                &genesis,
                [1_150_000, 1_920_000, 2_463_000, 2_675_000, 4_370_000]
            )
            .to_string(),
            "0xa00bc324"
        );
    }

    #[test]
    fn renders_leading_zeroes() {
        // Checksum values below 2^28 must keep the fixed 8-digit width.
        let hash = ForkHash(0x00ab_cdef);
        assert_eq!(hash.to_string(), "0x00abcdef");
    }
}
