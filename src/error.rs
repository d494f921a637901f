//! Application error types.

use thiserror::Error;

/// Problems found while validating authored graph data.
///
/// These indicate an authoring bug, so they are reported at startup rather
/// than recovered from.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    #[error("Duplicate node id: {0}")]
    DuplicateId(String),

    #[error("Expected exactly one TRUNK node, found {0}")]
    TrunkCount(usize),

    #[error("Unknown category: {0} (expected one of ROOT, TRUNK, BRANCH, LEAF_GAP, LEAF_OPP)")]
    UnknownCategory(String),
}

/// Application-level errors for neurograph.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Dataset error: {0}")]
    Data(#[from] DataError),

    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
