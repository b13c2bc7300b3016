//! Error types for the reconciliation pipeline

use thiserror::Error;

/// Failures at the oracle boundary.
#[derive(Error, Debug)]
pub enum OracleError {
    /// The response violated the oracle contract, e.g. the dedup `items`
    /// list is missing or not a list.
    #[error("Oracle contract violation: {0}")]
    Contract(String),

    #[error("Oracle transport failed: {0}")]
    Transport(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Pipeline failure identifying the stage that failed.
///
/// Skippable malformed input and oracle semantic drift never surface here;
/// they are resolved in place by the collector and the resolvers.
#[derive(Error, Debug)]
pub enum ReconcileError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Mention collection failed: {0}")]
    Collection(String),

    #[error("Temporal clustering failed: {0}")]
    Clustering(String),

    #[error("Dedup oracle call failed: {0}")]
    DedupCall(#[source] OracleError),

    #[error("Merge oracle call failed: {0}")]
    MergeCall(#[source] OracleError),
}
