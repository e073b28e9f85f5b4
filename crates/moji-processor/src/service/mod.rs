//! # Cryptomoji Handler
//!
//! Implements [`TransactionHandler`] for the cryptomoji family.
//!
//! ## Apply Flow
//!
//! ```text
//! payload bytes ──→ codec.decode_payload ──→ MojiPayload::from_raw
//!                                                  │
//!                  ┌───────────────────────────────┴────────────┐
//!                  ▼                                            ▼
//!          CREATE_COLLECTION                              SELECT_SIRE
//!   read collection_address(signer)              read collection_address(signer)
//!   derive 3 DNA, write 4 records                read sire, write sire listing
//! ```
//!
//! The handler holds no mutable state. Every call re-reads what it validates
//! and ends with at most one `set_state`.

mod create_collection;
mod queries;
mod select_sire;

pub use create_collection::{starter_set, StarterSet};
pub use queries::OwnedMoji;

use crate::adapters::JsonCodec;
use crate::config::ValidatedConfig;
use crate::domain::addressing::AddressCodec;
use crate::domain::payload::MojiPayload;
use crate::domain::value_objects::StateAddress;
use crate::errors::{ApplyError, InvalidTransaction, StateError};
use crate::ports::inbound::{TpProcessRequest, TransactionHandler};
use crate::ports::outbound::{PayloadCodec, StateContext};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tracing::{debug, error, info, instrument, warn};

/// Transaction handler for the cryptomoji family.
#[derive(Clone, Debug)]
pub struct MojiHandler<C: PayloadCodec = JsonCodec> {
    config: ValidatedConfig,
    addresses: AddressCodec,
    codec: C,
}

impl MojiHandler<JsonCodec> {
    /// Handler with the JSON codec.
    #[must_use]
    pub fn with_config(config: ValidatedConfig) -> Self {
        Self::new(config, JsonCodec::new())
    }
}

impl Default for MojiHandler<JsonCodec> {
    fn default() -> Self {
        Self::with_config(ValidatedConfig::default())
    }
}

impl<C: PayloadCodec> MojiHandler<C> {
    pub fn new(config: ValidatedConfig, codec: C) -> Self {
        info!(
            family = config.family_name(),
            version = config.family_version(),
            namespace = %config.namespace(),
            "Initializing cryptomoji handler"
        );
        let addresses = AddressCodec::new(config.namespace().clone());
        Self {
            config,
            addresses,
            codec,
        }
    }

    /// Address derivation for this handler's namespace.
    #[must_use]
    pub fn addresses(&self) -> &AddressCodec {
        &self.addresses
    }

    #[must_use]
    pub fn config(&self) -> &ValidatedConfig {
        &self.config
    }

    /// Decode payload bytes. Any codec failure is a malformed payload.
    pub fn decode(&self, bytes: &[u8]) -> Result<MojiPayload, InvalidTransaction> {
        let raw = self
            .codec
            .decode_payload(bytes)
            .map_err(|e| InvalidTransaction::MalformedPayload(e.to_string()))?;
        MojiPayload::from_raw(raw)
    }

    async fn dispatch(
        &self,
        request: &TpProcessRequest,
        context: &dyn StateContext,
    ) -> Result<Vec<StateAddress>, ApplyError> {
        match self.decode(&request.payload)? {
            MojiPayload::CreateCollection => {
                create_collection::create_collection(
                    &self.addresses,
                    &self.codec,
                    context,
                    request.signer(),
                    &request.signature,
                )
                .await
            }
            MojiPayload::SelectSire { sire } => {
                select_sire::select_sire(
                    &self.addresses,
                    &self.codec,
                    context,
                    request.signer(),
                    sire.as_deref(),
                )
                .await
            }
        }
    }
}

#[async_trait]
impl<C: PayloadCodec> TransactionHandler for MojiHandler<C> {
    fn family_name(&self) -> &str {
        self.config.family_name()
    }

    fn family_versions(&self) -> Vec<String> {
        vec![self.config.family_version().to_string()]
    }

    fn namespaces(&self) -> Vec<String> {
        vec![self.config.namespace().as_str().to_string()]
    }

    #[instrument(skip_all, fields(signer = %request.signer()))]
    async fn apply(
        &self,
        request: &TpProcessRequest,
        context: &dyn StateContext,
    ) -> Result<(), ApplyError> {
        match self.dispatch(request, context).await {
            Ok(written) => {
                debug!(addresses = written.len(), "Transaction applied");
                Ok(())
            }
            Err(e) if e.is_invalid_transaction() => {
                warn!(reason = %e, "Invalid transaction");
                Err(e)
            }
            Err(e) => {
                error!(error = %e, "Transaction failed");
                Err(e)
            }
        }
    }
}

/// Issue `updates` as one `set_state` and check every address was acknowledged.
async fn write_batch(
    context: &dyn StateContext,
    updates: BTreeMap<StateAddress, Vec<u8>>,
) -> Result<Vec<StateAddress>, StateError> {
    let expected = updates.len();
    let written = context.set_state(updates).await?;
    if written.len() < expected {
        return Err(StateError::IncompleteWrite {
            expected,
            written: written.len(),
        });
    }
    Ok(written)
}
