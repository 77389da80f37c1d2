//! Error taxonomy for zone generation.
//!
//! Every error here is fatal for the round that raised it: the partial
//! weight table is dropped and no zone is returned. Retries, if desired,
//! are the caller's responsibility via a fresh `zone()` request.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ZoneError {
    /// A peer returned a row with a null host identity. This is a protocol
    /// violation; the row is never skipped and the round is abandoned.
    #[error("host must not be null")]
    NullHostIdentity,

    /// The per-node weight endpoint was invoked on a node that is not a
    /// coordinator.
    #[error("invalid invocation on data node")]
    InvalidInvocation,

    /// The configured session ceiling is zero, so a load percentage cannot
    /// be computed. A configuration-level precondition violation.
    #[error("session capacity is zero")]
    ZeroSessionCapacity,

    /// The synthesizer was handed a weight table with no entries. The
    /// gatherer's unconditional local fold normally guarantees at least one
    /// entry, so this indicates an internal error.
    #[error("no hosts gathered for this round")]
    EmptyWeightTable,

    /// The remote query executor failed while the fan-out row stream was
    /// being consumed.
    #[error("remote weight query failed: {message}")]
    Remote { message: String },
}

impl ZoneError {
    /// Wraps a remote executor failure.
    ///
    /// Intended for [`ClusterQuery`](crate::weights::gather::ClusterQuery)
    /// implementations surfacing transport or execution errors.
    pub fn remote(source: impl std::fmt::Display) -> Self {
        ZoneError::Remote {
            message: source.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_wraps_display() {
        let err = ZoneError::remote("connection refused");
        assert_eq!(
            err.to_string(),
            "remote weight query failed: connection refused"
        );
    }

    #[test]
    fn test_null_host_message() {
        assert_eq!(ZoneError::NullHostIdentity.to_string(), "host must not be null");
    }
}
