//! # Domain Layer
//!
//! Pure, deterministic logic: addressing, DNA derivation, records, payloads
//! and invariants. Nothing here touches the state store.

pub mod addressing;
pub mod dna;
pub mod entities;
pub mod invariants;
pub mod payload;
pub mod services;
pub mod value_objects;

pub use addressing::{AddressCodec, AddressKind, HASH_SUFFIX_LENGTH};
pub use dna::{derive_dna, first_dna, next_dna, STARTER_MOJI};
pub use entities::{Collection, Moji, SireListing};
pub use invariants::{check_collection_invariant, check_moji_address_invariant, InvariantViolation};
pub use payload::{MojiPayload, RawPayload, CREATE_COLLECTION, SELECT_SIRE};
pub use services::{sha512_hex, sha512_hex_concat};
pub use value_objects::{
    Dna, Namespace, PublicKey, Signature, StateAddress, ADDRESS_LENGTH, DNA_LENGTH,
    NAMESPACE_LENGTH,
};
