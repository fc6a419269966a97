use thiserror::Error;

/// Unified error type for the pairlink workspace.
///
/// Link resolution itself never fails — degraded inputs default rather
/// than erroring — so the only fallible surface is deserializing a
/// wallet-adapter registry document at the boundary.
#[derive(Error, Debug)]
pub enum PairlinkError {
    #[error("registry parse error: {0}")]
    Registry(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PairlinkError>;
