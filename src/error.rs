//! Error type shared by the operator library and the search runners.

use thiserror::Error;

/// Errors reported by `u-weasel`.
///
/// Every variant describes a violated precondition; none of them is
/// transient, so callers never need to retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Two sequences that must share a length do not.
    #[error("length mismatch: {left} != {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("target must contain at least one symbol")]
    EmptyTarget,

    #[error("alphabet must contain at least one symbol")]
    EmptyAlphabet,

    #[error("alphabet contains duplicate symbol {0:?}")]
    DuplicateSymbol(char),

    #[error("symbol {0:?} is not part of the alphabet")]
    SymbolNotInAlphabet(char),

    #[error("unknown strategy: {0}")]
    UnknownStrategy(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
