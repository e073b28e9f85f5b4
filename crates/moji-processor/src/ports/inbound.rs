//! # Driving Ports (API - Inbound)
//!
//! The capability interface the host runtime uses to discover and invoke a
//! transaction processor. The host never depends on a concrete handler type.

use crate::domain::value_objects::{PublicKey, Signature};
use crate::errors::ApplyError;
use crate::ports::outbound::StateContext;
use async_trait::async_trait;

// =============================================================================
// TRANSACTION ENVELOPE
// =============================================================================

/// Header fields the processor reads. Signature verification already happened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionHeader {
    /// Key that signed the transaction.
    pub signer_public_key: PublicKey,
    /// Family the transaction targets.
    pub family_name: String,
    /// Family version the transaction targets.
    pub family_version: String,
}

/// One transaction delivered by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TpProcessRequest {
    /// Encoded payload, decoded by the handler's codec.
    pub payload: Vec<u8>,
    pub header: TransactionHeader,
    /// Hex signature over the header.
    pub signature: Signature,
}

impl TpProcessRequest {
    #[must_use]
    pub fn signer(&self) -> &PublicKey {
        &self.header.signer_public_key
    }
}

// =============================================================================
// TRANSACTION HANDLER
// =============================================================================

/// A transaction processor for one family.
///
/// `apply` is a single atomic step: all reads needed for validation complete
/// before one combined write is issued, and any error means nothing was
/// written.
#[async_trait]
pub trait TransactionHandler: Send + Sync {
    /// Family served.
    fn family_name(&self) -> &str;

    /// Family versions served.
    fn family_versions(&self) -> Vec<String>;

    /// Namespace prefixes this handler reads and writes.
    fn namespaces(&self) -> Vec<String>;

    /// Validate `request` against current state and write its effects.
    async fn apply(
        &self,
        request: &TpProcessRequest,
        context: &dyn StateContext,
    ) -> Result<(), ApplyError>;
}

/// Shared handler handle.
pub type DynTransactionHandler = std::sync::Arc<dyn TransactionHandler>;
