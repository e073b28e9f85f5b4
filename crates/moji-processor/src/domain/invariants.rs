//! # Domain Invariants
//!
//! | Invariant | Check |
//! |-----------|-------|
//! | A moji's address is a pure function of its owner and DNA | [`check_moji_address_invariant`] |
//! | A collection references exactly its owner's starter moji, in order | [`check_collection_invariant`] |
//!
//! The collection transition checks these on the records it is about to
//! write, before the write is issued.

use super::addressing::AddressCodec;
use super::entities::{Collection, Moji};
use super::value_objects::StateAddress;
use thiserror::Error;

/// Violated invariant, carrying the offending address.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InvariantViolation {
    /// Moji stored at an address not derived from its owner and DNA.
    #[error("moji stored at underived address {address}")]
    MojiAddressMismatch { address: StateAddress },
    /// Collection entry that does not point at the matching owned moji.
    #[error("collection entry {index} does not address its moji")]
    CollectionLinkMismatch { index: usize },
    /// Collection and moji list lengths differ.
    #[error("collection lists {expected} moji, {actual} supplied")]
    CollectionSizeMismatch { expected: usize, actual: usize },
}

/// `address` must equal `moji_address(moji.owner, moji.dna)`.
pub fn check_moji_address_invariant(
    codec: &AddressCodec,
    address: &StateAddress,
    moji: &Moji,
) -> Result<(), InvariantViolation> {
    if codec.moji_address(&moji.owner, &moji.dna) == *address {
        Ok(())
    } else {
        Err(InvariantViolation::MojiAddressMismatch {
            address: address.clone(),
        })
    }
}

/// Every collection entry `i` must address `moji[i]`, and every moji must
/// belong to the collection owner.
pub fn check_collection_invariant(
    codec: &AddressCodec,
    collection: &Collection,
    moji: &[Moji],
) -> Result<(), InvariantViolation> {
    if collection.moji_addresses.len() != moji.len() {
        return Err(InvariantViolation::CollectionSizeMismatch {
            expected: collection.moji_addresses.len(),
            actual: moji.len(),
        });
    }

    for (index, (address, entry)) in collection.moji_addresses.iter().zip(moji).enumerate() {
        if entry.owner != collection.owner {
            return Err(InvariantViolation::CollectionLinkMismatch { index });
        }
        check_moji_address_invariant(codec, address, entry)
            .map_err(|_| InvariantViolation::CollectionLinkMismatch { index })?;
    }

    Ok(())
}
