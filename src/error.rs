//! Error types for the ATSP genetic algorithm.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong before a run starts.
///
/// A run that has been constructed successfully never fails; all errors are
/// structural and reported up front.
#[derive(Debug, Error)]
pub enum Error {
    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The mutation method name is not recognised.
    #[error("unknown mutation method '{0}' (expected 'swap' or 'invert')")]
    UnknownMutationMethod(String),

    /// The distance oracle reports no cities.
    #[error("problem has no cities")]
    EmptyProblem,

    /// The distance matrix input is malformed.
    #[error("invalid instance: {0}")]
    InvalidInstance(String),

    /// Reading the instance failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
