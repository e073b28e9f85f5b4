//! # JSON Codec
//!
//! Canonical JSON: keys in sorted order, no whitespace. Record structs declare
//! their fields in key order, so `serde_json` output is already canonical.

use crate::domain::entities::{Collection, Moji, SireListing};
use crate::domain::payload::RawPayload;
use crate::errors::CodecError;
use crate::ports::outbound::PayloadCodec;

/// `serde_json` implementation of [`PayloadCodec`].
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonCodec;

impl JsonCodec {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl PayloadCodec for JsonCodec {
    fn decode_payload(&self, bytes: &[u8]) -> Result<RawPayload, CodecError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    fn encode_payload(&self, payload: &RawPayload) -> Result<Vec<u8>, CodecError> {
        Ok(serde_json::to_vec(payload)?)
    }

    fn encode_collection(&self, collection: &Collection) -> Result<Vec<u8>, CodecError> {
        Ok(serde_json::to_vec(collection)?)
    }

    fn decode_collection(&self, bytes: &[u8]) -> Result<Collection, CodecError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    fn encode_moji(&self, moji: &Moji) -> Result<Vec<u8>, CodecError> {
        Ok(serde_json::to_vec(moji)?)
    }

    fn decode_moji(&self, bytes: &[u8]) -> Result<Moji, CodecError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    fn encode_sire_listing(&self, listing: &SireListing) -> Result<Vec<u8>, CodecError> {
        Ok(serde_json::to_vec(listing)?)
    }

    fn decode_sire_listing(&self, bytes: &[u8]) -> Result<SireListing, CodecError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
