//! Failure taxonomy of the planning core.
//!
//! Every error is raised synchronously at the point of detection and never
//! retried; the CLI layer is the only place they are turned into text and
//! exit codes.

use crate::models::FaultyBlock;
use thiserror::Error;

/// All the ways a planning request can fail.
#[derive(Debug, Error)]
pub enum PlanError {
    /// Malformed address, mask or binary string. Recoverable by re-prompting.
    #[error("format error: {0}")]
    Format(String),

    /// Prefix or parameter outside the supported bounds.
    #[error("range error: {0}")]
    Range(String),

    /// Parse or semantic error in the host block request string.
    #[error("configuration error: {0}")]
    Config(String),

    /// Address unsuitable for subnetting, with the RFC citation.
    #[error("policy error: {0}")]
    Policy(String),

    /// The requested blocks do not fit the network. Carries one diagnostic
    /// per faulty block rather than a flat message.
    #[error("{} host block(s) do not fit the network", faults.len())]
    Fit { faults: Vec<FaultyBlock> },

    /// The export artifact could not be written. Boundary-layer failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
