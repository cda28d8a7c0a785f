//! Error type definitions.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Why a single DNS lookup produced no records.
///
/// Produced by [`RecordResolver`](crate::dns::RecordResolver) implementations.
/// The checker never surfaces it: every variant is absorbed by
/// [`ResolutionPolicy::TreatAsAbsent`](crate::dns::ResolutionPolicy).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The name exists but holds no records of the requested type.
    #[error("no records found")]
    NoRecords,

    /// The name does not exist.
    #[error("NXDOMAIN: domain does not exist")]
    NxDomain,

    /// The query timed out.
    #[error("timeout")]
    Timeout,

    /// Any other resolver or network failure.
    #[error("DNS error: {0}")]
    Other(String),
}
