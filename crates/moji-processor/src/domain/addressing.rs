//! # Address Codec
//!
//! Deterministic state addresses for every record of the family.
//!
//! ```text
//! | namespace (6) | subtype (2) | sha512(key material)[0..62] |
//! ```
//!
//! | Record | Subtype | Key material |
//! |--------|---------|--------------|
//! | Collection | `00` | owner public key |
//! | Moji | `01` | owner public key ‖ dna |
//! | Sire listing | `02` | owner public key |

use super::services::sha512_hex_concat;
use super::value_objects::{Dna, Namespace, PublicKey, StateAddress, ADDRESS_LENGTH, NAMESPACE_LENGTH};

/// Hex chars left for the hash suffix after namespace and subtype.
pub const HASH_SUFFIX_LENGTH: usize = ADDRESS_LENGTH - NAMESPACE_LENGTH - 2;

/// Record type encoded in the byte following the namespace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AddressKind {
    Collection,
    Moji,
    SireListing,
}

impl AddressKind {
    /// Two-hex-char discriminator.
    #[must_use]
    pub const fn subtype(self) -> &'static str {
        match self {
            Self::Collection => "00",
            Self::Moji => "01",
            Self::SireListing => "02",
        }
    }

    fn from_subtype(subtype: &str) -> Option<Self> {
        match subtype {
            "00" => Some(Self::Collection),
            "01" => Some(Self::Moji),
            "02" => Some(Self::SireListing),
            _ => None,
        }
    }
}

/// Derives addresses under one namespace. Pure: no state, no failure modes.
#[derive(Clone, Debug)]
pub struct AddressCodec {
    namespace: Namespace,
}

impl AddressCodec {
    #[must_use]
    pub fn new(namespace: Namespace) -> Self {
        Self { namespace }
    }

    #[must_use]
    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// Address of the owner's collection.
    #[must_use]
    pub fn collection_address(&self, owner: &PublicKey) -> StateAddress {
        self.derive(AddressKind::Collection, &[owner.as_str().as_bytes()])
    }

    /// Address of a moji, bound to both its owner and its DNA.
    #[must_use]
    pub fn moji_address(&self, owner: &PublicKey, dna: &Dna) -> StateAddress {
        self.derive(
            AddressKind::Moji,
            &[owner.as_str().as_bytes(), dna.as_str().as_bytes()],
        )
    }

    /// Address of the owner's sire listing.
    #[must_use]
    pub fn sire_address(&self, owner: &PublicKey) -> StateAddress {
        self.derive(AddressKind::SireListing, &[owner.as_str().as_bytes()])
    }

    /// Record type of an address in this namespace.
    ///
    /// `None` for foreign namespaces and unknown subtypes.
    #[must_use]
    pub fn kind_of(&self, address: &StateAddress) -> Option<AddressKind> {
        if !self.namespace.contains(address) {
            return None;
        }
        address
            .as_str()
            .get(NAMESPACE_LENGTH..NAMESPACE_LENGTH + 2)
            .and_then(AddressKind::from_subtype)
    }

    fn derive(&self, kind: AddressKind, key_material: &[&[u8]]) -> StateAddress {
        let digest = sha512_hex_concat(key_material);
        StateAddress::from_parts(
            self.namespace.as_str(),
            kind.subtype(),
            &digest[..HASH_SUFFIX_LENGTH],
        )
    }
}
