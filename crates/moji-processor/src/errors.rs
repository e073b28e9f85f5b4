//! # Error Types
//!
//! Every rejection surfaced to the host is an [`ApplyError`]. Validation
//! failures are grouped under [`InvalidTransaction`]; store and codec failures
//! pass through unchanged so the host can apply its own retry policy.

use crate::domain::invariants::InvariantViolation;
use thiserror::Error;

// =============================================================================
// INVALID TRANSACTION
// =============================================================================

/// The transaction is invalid against current state and must be rejected.
///
/// Never retried by the processor. The host drops the transaction without
/// committing any of its writes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidTransaction {
    /// Payload bytes could not be decoded.
    #[error("unable to decode payload: {0}")]
    MalformedPayload(String),

    /// Payload decoded but carried an action this family does not know.
    #[error("unknown action: {0:?}")]
    UnknownAction(String),

    /// `CREATE_COLLECTION` for a signer that already owns a collection.
    #[error("owner already exists")]
    OwnerAlreadyExists,

    /// `SELECT_SIRE` from a signer without a collection.
    #[error("signer has no collection")]
    NoCollection,

    /// `SELECT_SIRE` referencing an address with no state.
    #[error("sire not found")]
    SireNotFound,
}

// =============================================================================
// STATE ERRORS
// =============================================================================

/// Errors from the state store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StateError {
    /// Store unreachable.
    #[error("state store unavailable")]
    Unavailable,

    /// Store did not answer in time.
    #[error("state access timeout")]
    Timeout,

    /// The store acknowledged fewer addresses than were submitted.
    #[error("incomplete write: {written} of {expected} addresses set")]
    IncompleteWrite { expected: usize, written: usize },

    /// Other store error.
    #[error("state error: {0}")]
    Other(String),
}

// =============================================================================
// CODEC ERRORS
// =============================================================================

/// Errors from encoding or decoding records.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("encode failed: {0}")]
    Encode(String),

    #[error("decode failed: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            Self::Decode(err.to_string())
        } else {
            Self::Encode(err.to_string())
        }
    }
}

// =============================================================================
// CONFIG ERRORS
// =============================================================================

/// Rejected processor configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("namespace must be 6 lowercase hex characters, got {0:?}")]
    InvalidNamespace(String),

    #[error("family name must not be empty")]
    EmptyFamilyName,

    #[error("family version must not be empty")]
    EmptyFamilyVersion,
}

// =============================================================================
// APPLY ERRORS
// =============================================================================

/// Result of a failed `apply`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplyError {
    /// Rejected by validation.
    #[error("invalid transaction: {0}")]
    InvalidTransaction(#[from] InvalidTransaction),

    /// Store failure, propagated unchanged.
    #[error(transparent)]
    State(#[from] StateError),

    /// A record could not be encoded or a stored record could not be decoded.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// A record about to be written breaks a domain invariant.
    #[error("invariant violated: {0}")]
    Invariant(#[from] InvariantViolation),

    /// No registered handler serves this family/version.
    #[error("unsupported transaction family {family_name} {family_version}")]
    UnsupportedFamily {
        family_name: String,
        family_version: String,
    },
}

impl ApplyError {
    /// Returns true if the host should reject the transaction outright.
    #[must_use]
    pub fn is_invalid_transaction(&self) -> bool {
        matches!(self, Self::InvalidTransaction(_))
    }

    /// The validation reason, if this is a validation failure.
    #[must_use]
    pub fn reason(&self) -> Option<&InvalidTransaction> {
        match self {
            Self::InvalidTransaction(reason) => Some(reason),
            _ => None,
        }
    }
}
