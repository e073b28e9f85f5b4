//! # Driven Ports (SPI - Outbound)
//!
//! Interfaces the processor depends on:
//! - State access (the host's versioned key-value store)
//! - Payload and record encoding
//!
//! Adapters implement these traits; see `crate::adapters`.

use crate::domain::entities::{Collection, Moji, SireListing};
use crate::domain::payload::RawPayload;
use crate::domain::value_objects::StateAddress;
use crate::errors::{CodecError, StateError};
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};

// =============================================================================
// STATE CONTEXT
// =============================================================================

/// Per-transaction view of global state provided by the host.
///
/// The host serializes conflicting transactions; implementations need no
/// locking on the processor's behalf.
#[async_trait]
pub trait StateContext: Send + Sync {
    /// Read `addresses`.
    ///
    /// # Returns
    ///
    /// One entry per requested address. Addresses with no data map to empty bytes.
    async fn get_state(
        &self,
        addresses: &[StateAddress],
    ) -> Result<HashMap<StateAddress, Vec<u8>>, StateError>;

    /// Write every entry of `updates` as one batch.
    ///
    /// # Returns
    ///
    /// The addresses actually written.
    async fn set_state(
        &self,
        updates: BTreeMap<StateAddress, Vec<u8>>,
    ) -> Result<Vec<StateAddress>, StateError>;

    /// True if `address` holds data.
    async fn exists(&self, address: &StateAddress) -> Result<bool, StateError> {
        let state = self.get_state(std::slice::from_ref(address)).await?;
        Ok(state.get(address).is_some_and(|data| !data.is_empty()))
    }
}

// =============================================================================
// PAYLOAD CODEC
// =============================================================================

/// Wire encoding for payloads and state records.
///
/// Encoding must be deterministic: every validator produces the same bytes
/// for the same record.
pub trait PayloadCodec: Send + Sync {
    /// Transaction payload bytes to their untagged form.
    fn decode_payload(&self, bytes: &[u8]) -> Result<RawPayload, CodecError>;

    /// Client side: build payload bytes.
    fn encode_payload(&self, payload: &RawPayload) -> Result<Vec<u8>, CodecError>;

    fn encode_collection(&self, collection: &Collection) -> Result<Vec<u8>, CodecError>;
    fn decode_collection(&self, bytes: &[u8]) -> Result<Collection, CodecError>;

    fn encode_moji(&self, moji: &Moji) -> Result<Vec<u8>, CodecError>;
    fn decode_moji(&self, bytes: &[u8]) -> Result<Moji, CodecError>;

    fn encode_sire_listing(&self, listing: &SireListing) -> Result<Vec<u8>, CodecError>;
    fn decode_sire_listing(&self, bytes: &[u8]) -> Result<SireListing, CodecError>;
}
