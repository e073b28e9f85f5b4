//! # DNA Chain
//!
//! Three DNA strands derived from a transaction signature by iterated hashing:
//!
//! ```text
//! dna1 = sha512(signature)[0..36]
//! dna2 = sha512(dna1)[0..36]
//! dna3 = sha512(dna2)[0..36]
//! ```
//!
//! Replaying the same transaction on any validator yields the same three moji.

use super::services::sha512_hex;
use super::value_objects::{Dna, Signature};

/// Number of moji issued with a new collection.
pub const STARTER_MOJI: usize = 3;

/// Hash a seed and truncate to DNA length.
fn hash_to_dna(seed: &str) -> Dna {
    Dna::truncated(&sha512_hex(seed.as_bytes()))
}

/// First strand: derived from the signature itself.
#[must_use]
pub fn first_dna(signature: &Signature) -> Dna {
    hash_to_dna(signature.as_str())
}

/// Next strand in the chain.
#[must_use]
pub fn next_dna(previous: &Dna) -> Dna {
    hash_to_dna(previous.as_str())
}

/// All starter strands for a signature, in chain order.
#[must_use]
pub fn derive_dna(signature: &Signature) -> [Dna; STARTER_MOJI] {
    let dna1 = first_dna(signature);
    let dna2 = next_dna(&dna1);
    let dna3 = next_dna(&dna2);
    [dna1, dna2, dna3]
}
