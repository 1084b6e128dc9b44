//! Error taxonomy for chain selection and parameter resolution.

/// Errors produced by chain selection, hardfork queries and parameter
/// resolution.
///
/// Every variant is an immediate, synchronous failure caused by caller
/// misuse or a malformed dataset, never a transient condition; there is no
/// retry policy.
#[derive(Debug, thiserror::Error)]
pub enum ChainSpecError {
    /// Chain selector did not match any dataset entry.
    #[error("unknown chain: {selector}")]
    UnknownChain {
        /// The name or chain ID that failed to resolve.
        selector: String,
    },
    /// Hardfork name absent from a chain's timeline or from the dataset's
    /// definition table.
    #[error("unknown hardfork `{hardfork}` on chain `{chain}`")]
    UnknownHardfork {
        /// The hardfork name.
        hardfork: String,
        /// The chain it was queried on.
        chain: String,
    },
    /// Hardfork is valid but excluded by the context's support allow-list.
    #[error("hardfork `{hardfork}` is not in the supported hardfork list")]
    UnsupportedHardfork {
        /// The hardfork name.
        hardfork: String,
    },
    /// EIP number absent from the dataset.
    #[error("EIP-{eip} is not defined in the dataset")]
    UnknownEip {
        /// The EIP number.
        eip: u64,
    },
    /// EIP activation requested below its minimum hardfork.
    #[error(
        "EIP-{eip} requires hardfork `{minimum_hardfork}` or later, current hardfork is `{hardfork}`"
    )]
    HardforkTooOld {
        /// The EIP number.
        eip: u64,
        /// The EIP's minimum hardfork.
        minimum_hardfork: String,
        /// The context's current hardfork.
        hardfork: String,
    },
    /// Parameter topic absent from a parameter-inlining hardfork or an EIP
    /// definition.
    #[error("topic `{topic}` is not defined in `{defined_in}`")]
    UnknownTopic {
        /// The topic name.
        topic: String,
        /// The hardfork or EIP lacking the topic.
        defined_in: String,
    },
    /// No hardfork is active for the queried block number.
    #[error("no active hardfork on chain `{chain}`")]
    NoActiveHardfork {
        /// The chain queried.
        chain: String,
        /// The block number queried, when the query was block-scoped.
        block_number: Option<u64>,
    },
    /// Fork hash requested for an unscheduled hardfork.
    #[error("no fork hash for unscheduled hardfork `{hardfork}`")]
    NoForkHash {
        /// The hardfork name.
        hardfork: String,
    },
    /// Genesis hash of a chain failed to decode as hex.
    #[error("invalid genesis hash on chain `{chain}`")]
    InvalidGenesisHash {
        /// The chain with the malformed genesis hash.
        chain: String,
        /// The decoding failure.
        #[source]
        source: hex::FromHexError,
    },
    /// Custom chain object is missing a required field.
    #[error("custom chain is missing required field `{field}`")]
    MissingField {
        /// The missing field, in wire-form (camelCase) spelling.
        field: &'static str,
    },
    /// Custom chain object failed to deserialize after field validation.
    #[error("invalid custom chain")]
    InvalidChain(#[from] serde_json::Error),
}
