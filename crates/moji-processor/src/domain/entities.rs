//! # Domain Entities
//!
//! Records owned by the state store. The processor never caches them: every
//! transition re-reads what it needs.
//!
//! Field order follows the sorted key order of the canonical JSON encoding so
//! encoded records are byte-identical across validators.

use super::dna::STARTER_MOJI;
use super::value_objects::{Dna, PublicKey, StateAddress};
use serde::{Deserialize, Serialize};

// =============================================================================
// COLLECTION
// =============================================================================

/// The starter set of moji owned by one public key.
///
/// Written once by `CREATE_COLLECTION`, never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    /// Owner public key.
    #[serde(rename = "key")]
    pub owner: PublicKey,
    /// Addresses of the starter moji, in DNA chain order.
    #[serde(rename = "moji")]
    pub moji_addresses: [StateAddress; STARTER_MOJI],
}

impl Collection {
    #[must_use]
    pub fn new(owner: PublicKey, moji_addresses: [StateAddress; STARTER_MOJI]) -> Self {
        Self {
            owner,
            moji_addresses,
        }
    }
}

// =============================================================================
// MOJI
// =============================================================================

/// A collectible entity.
///
/// Breeding references stay empty until breeding exists.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Moji {
    /// Moji bred by this one.
    pub bred: Vec<StateAddress>,
    /// Breeder parent.
    pub breeder: Option<StateAddress>,
    pub dna: Dna,
    /// Current holder.
    pub owner: PublicKey,
    /// Sire parent.
    pub sire: Option<StateAddress>,
    /// Moji sired by this one.
    pub sired: Vec<StateAddress>,
}

impl Moji {
    /// A freshly issued moji with no lineage.
    #[must_use]
    pub fn starter(owner: PublicKey, dna: Dna) -> Self {
        Self {
            bred: Vec::new(),
            breeder: None,
            dna,
            owner,
            sire: None,
            sired: Vec::new(),
        }
    }
}

// =============================================================================
// SIRE LISTING
// =============================================================================

/// One owner's chosen sire. Last write wins.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SireListing {
    pub owner: PublicKey,
    pub sire: StateAddress,
}
