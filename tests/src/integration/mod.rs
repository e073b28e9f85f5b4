//! # Integration Tests
//!
//! Flows that drive the processor the way a host does: requests built by a
//! client, routed through [`moji_processor::HandlerRegistry`], applied against
//! a shared state context.

pub mod flows;

use moji_processor::prelude::*;
use std::sync::Arc;

/// Registry with the default cryptomoji handler.
pub fn registry() -> HandlerRegistry {
    let mut registry = HandlerRegistry::new();
    let handler: MojiHandler = MojiHandler::default();
    registry.register(Arc::new(handler));
    registry
}

/// A request for the cryptomoji family as a client would submit it.
pub fn request(payload: &MojiPayload, signer: &str, signature: &str) -> anyhow::Result<TpProcessRequest> {
    let payload = JsonCodec.encode_payload(&payload.to_raw())?;
    Ok(TpProcessRequest {
        payload,
        header: TransactionHeader {
            signer_public_key: PublicKey::new(signer),
            family_name: moji_processor::FAMILY_NAME.to_string(),
            family_version: moji_processor::FAMILY_VERSION.to_string(),
        },
        signature: Signature::new(signature),
    })
}

/// Install a test subscriber once; later calls are no-ops.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("moji_processor=debug")
        .with_test_writer()
        .try_init();
}
