//! # Payload
//!
//! The decoded transaction payload, tagged by `action`.
//!
//! Decoding happens in two steps: the codec turns bytes into a [`RawPayload`]
//! (any failure there is `MalformedPayload`), then [`MojiPayload::from_raw`]
//! resolves the action tag (an unrecognized tag is `UnknownAction`).

use crate::errors::InvalidTransaction;
use serde::{Deserialize, Serialize};

/// Action tag for collection creation.
pub const CREATE_COLLECTION: &str = "CREATE_COLLECTION";

/// Action tag for sire selection.
pub const SELECT_SIRE: &str = "SELECT_SIRE";

/// Payload as it appears on the wire, before the action is resolved.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sire: Option<String>,
}

/// A payload with a recognized action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MojiPayload {
    CreateCollection,
    /// Sire address as submitted, `None` if the field was absent. Validated
    /// against state by the transition, after the collection check.
    SelectSire { sire: Option<String> },
}

impl MojiPayload {
    #[must_use]
    pub fn create_collection() -> Self {
        Self::CreateCollection
    }

    pub fn select_sire(sire: impl Into<String>) -> Self {
        Self::SelectSire {
            sire: Some(sire.into()),
        }
    }

    /// Resolve the action tag.
    pub fn from_raw(raw: RawPayload) -> Result<Self, InvalidTransaction> {
        match raw.action.as_deref() {
            Some(CREATE_COLLECTION) => Ok(Self::CreateCollection),
            Some(SELECT_SIRE) => Ok(Self::SelectSire { sire: raw.sire }),
            Some(other) => Err(InvalidTransaction::UnknownAction(other.to_string())),
            None => Err(InvalidTransaction::UnknownAction(String::new())),
        }
    }

    /// Wire form, for clients building transactions.
    #[must_use]
    pub fn to_raw(&self) -> RawPayload {
        match self {
            Self::CreateCollection => RawPayload {
                action: Some(CREATE_COLLECTION.to_string()),
                sire: None,
            },
            Self::SelectSire { sire } => RawPayload {
                action: Some(SELECT_SIRE.to_string()),
                sire: sire.clone(),
            },
        }
    }

    /// The action tag.
    #[must_use]
    pub fn action(&self) -> &'static str {
        match self {
            Self::CreateCollection => CREATE_COLLECTION,
            Self::SelectSire { .. } => SELECT_SIRE,
        }
    }
}
