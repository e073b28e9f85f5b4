//! # Cryptomoji Transaction Processor
//!
//! **Family:** `cryptomoji` v0.1
//! **Namespace:** `5f4d76`
//!
//! ## Purpose
//!
//! Validates cryptomoji transactions against global ledger state and writes
//! their effects. The host runtime verifies signatures, orders transactions
//! and commits state; this crate decides whether a transaction is valid and
//! what it writes.
//!
//! ## Actions
//!
//! | Action | Precondition | Writes |
//! |--------|--------------|--------|
//! | `CREATE_COLLECTION` | signer has no collection | collection + 3 moji |
//! | `SELECT_SIRE` | signer has a collection, sire address holds state | sire listing |
//!
//! ## Address Layout
//!
//! ```text
//! ┌────────────┬─────────┬──────────────────────────────────────┐
//! │ namespace  │ subtype │ sha512(key material)[0..62]          │
//! │ 6 hex      │ 2 hex   │ 62 hex                               │
//! └────────────┴─────────┴──────────────────────────────────────┘
//! ```
//!
//! | Subtype | Record | Key material |
//! |---------|--------|--------------|
//! | `00` | Collection | owner public key |
//! | `01` | Moji | owner public key ‖ DNA |
//! | `02` | Sire listing | owner public key |
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      OUTER LAYER                                │
//! │  adapters/ - JsonCodec, InMemoryState                           │
//! │  registry  - HandlerRegistry (routing by family/version)        │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ implements ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      MIDDLE LAYER                               │
//! │  ports/inbound.rs  - TransactionHandler trait                   │
//! │  ports/outbound.rs - StateContext, PayloadCodec traits          │
//! │  service/          - MojiHandler (apply + queries)              │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ uses ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      INNER LAYER                                │
//! │  domain/addressing.rs  - AddressCodec                           │
//! │  domain/dna.rs         - DNA chain from the signature           │
//! │  domain/entities.rs    - Collection, Moji, SireListing          │
//! │  domain/invariants.rs  - checks run before every write          │
//! │  domain/payload.rs     - MojiPayload                            │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod errors;
pub mod ports;
pub mod registry;
pub mod service;

pub use adapters::{InMemoryState, JsonCodec};
pub use config::{ProcessorConfig, ValidatedConfig};
pub use domain::*;
pub use errors::{ApplyError, CodecError, ConfigError, InvalidTransaction, StateError};
pub use ports::*;
pub use registry::HandlerRegistry;
pub use service::{MojiHandler, OwnedMoji};

/// Transaction family name.
pub const FAMILY_NAME: &str = "cryptomoji";

/// Family version served.
pub const FAMILY_VERSION: &str = "0.1";

/// Address prefix for every cryptomoji record.
pub const NAMESPACE: &str = "5f4d76";

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude for hosts and clients.
pub mod prelude {
    pub use crate::adapters::{InMemoryState, JsonCodec};
    pub use crate::config::{ProcessorConfig, ValidatedConfig};
    pub use crate::domain::{Collection, Moji, MojiPayload, PublicKey, Signature, SireListing, StateAddress};
    pub use crate::errors::{ApplyError, InvalidTransaction, StateError};
    pub use crate::ports::{PayloadCodec, StateContext, TpProcessRequest, TransactionHandler, TransactionHeader};
    pub use crate::registry::HandlerRegistry;
    pub use crate::service::MojiHandler;
}
