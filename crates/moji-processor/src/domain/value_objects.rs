//! # Value Objects
//!
//! Hex-string primitives shared by every record and address.
//! All of them serialize as plain JSON strings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of a state address in hex characters.
pub const ADDRESS_LENGTH: usize = 70;

/// Length of a namespace prefix in hex characters.
pub const NAMESPACE_LENGTH: usize = 6;

/// Length of a DNA string in hex characters.
pub const DNA_LENGTH: usize = 36;

fn is_lower_hex(s: &str) -> bool {
    s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

// =============================================================================
// PUBLIC KEY
// =============================================================================

/// Signer public key, hex encoded. Identifies an account.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PublicKey(String);

impl PublicKey {
    pub fn new(hex: impl Into<String>) -> Self {
        Self(hex.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self.0)
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Compressed secp256k1 keys are 66 chars; keep logs readable.
        let len = self.0.len();
        if len > 16 {
            if let (Some(head), Some(tail)) = (self.0.get(..8), self.0.get(len - 8..)) {
                return write!(f, "{head}...{tail}");
            }
        }
        f.write_str(&self.0)
    }
}

// =============================================================================
// SIGNATURE
// =============================================================================

/// Transaction signature, hex encoded. Already verified by the host.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Signature(String);

impl Signature {
    pub fn new(hex: impl Into<String>) -> Self {
        Self(hex.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({})", self.0)
    }
}

// =============================================================================
// DNA
// =============================================================================

/// Identity-defining attribute of a moji. Always [`DNA_LENGTH`] hex chars.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dna(String);

impl Dna {
    /// Truncate a hex digest to DNA length.
    ///
    /// Returns `None` if the digest is shorter than [`DNA_LENGTH`].
    #[must_use]
    pub fn from_digest(digest_hex: &str) -> Option<Self> {
        digest_hex.get(..DNA_LENGTH).map(|s| Self(s.to_string()))
    }

    /// Leading [`DNA_LENGTH`] chars of a digest known to be long enough.
    pub(crate) fn truncated(digest_hex: &str) -> Self {
        Self(digest_hex.chars().take(DNA_LENGTH).collect())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Dna {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dna({})", self.0)
    }
}

impl fmt::Display for Dna {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// NAMESPACE
// =============================================================================

/// Six-hex-char prefix owning every address of the transaction family.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Namespace(String);

impl Namespace {
    /// Returns `None` unless `prefix` is exactly [`NAMESPACE_LENGTH`] lowercase hex chars.
    #[must_use]
    pub fn parse(prefix: &str) -> Option<Self> {
        (prefix.len() == NAMESPACE_LENGTH && is_lower_hex(prefix)).then(|| Self(prefix.to_string()))
    }

    /// For compile-time constants already known to be valid.
    pub(crate) fn from_static(prefix: &'static str) -> Self {
        Self(prefix.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if `address` lives under this namespace.
    #[must_use]
    pub fn contains(&self, address: &StateAddress) -> bool {
        address.as_str().starts_with(&self.0)
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// STATE ADDRESS
// =============================================================================

/// Key into the global state store: [`ADDRESS_LENGTH`] lowercase hex chars.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateAddress(String);

impl StateAddress {
    /// Validate a caller-supplied address.
    #[must_use]
    pub fn parse(hex: &str) -> Option<Self> {
        (hex.len() == ADDRESS_LENGTH && is_lower_hex(hex)).then(|| Self(hex.to_string()))
    }

    /// Built by the address codec, which guarantees the layout.
    pub(crate) fn from_parts(prefix: &str, subtype: &str, suffix: &str) -> Self {
        let mut address = String::with_capacity(ADDRESS_LENGTH);
        address.push_str(prefix);
        address.push_str(subtype);
        address.push_str(suffix);
        Self(address)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StateAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StateAddress({})", self.0)
    }
}

impl fmt::Display for StateAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
