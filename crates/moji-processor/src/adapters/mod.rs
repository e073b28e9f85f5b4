//! # Adapters Layer (Outer Hexagon)
//!
//! Concrete implementations of the outbound ports.

pub mod json_codec;
pub mod memory_state;

pub use json_codec::JsonCodec;
pub use memory_state::InMemoryState;
