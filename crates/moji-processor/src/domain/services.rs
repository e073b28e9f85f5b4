//! # Domain Services
//!
//! The single hash primitive used for addressing and DNA derivation.

use sha2::{Digest, Sha512};

/// SHA-512 of `data`, lowercase hex (128 chars).
#[must_use]
pub fn sha512_hex(data: &[u8]) -> String {
    hex::encode(Sha512::digest(data))
}

/// SHA-512 over the concatenation of `parts`, without allocating the joined input.
#[must_use]
pub fn sha512_hex_concat(parts: &[&[u8]]) -> String {
    let mut hasher = Sha512::new();
    for part in parts {
        hasher.update(part);
    }
    hex::encode(hasher.finalize())
}
