//! # Ports Layer
//!
//! - `inbound`: the capability interface hosts invoke
//! - `outbound`: state access and encoding the processor depends on

pub mod inbound;
pub mod outbound;

pub use inbound::{DynTransactionHandler, TpProcessRequest, TransactionHandler, TransactionHeader};
pub use outbound::{PayloadCodec, StateContext};
