//! # In-Memory State
//!
//! `StateContext` over a hash map, for tests and local tooling.
//! Production hosts supply their own context backed by the ledger's global state.
//!
//! Every `set_state` call is recorded as one batch so callers can assert how
//! many writes a transaction issued.

use crate::domain::value_objects::StateAddress;
use crate::errors::StateError;
use crate::ports::outbound::StateContext;
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

/// In-memory state store.
#[derive(Debug, Default)]
pub struct InMemoryState {
    entries: RwLock<HashMap<StateAddress, Vec<u8>>>,
    /// Write batches in the order they were applied.
    batches: RwLock<Vec<BTreeMap<StateAddress, Vec<u8>>>>,
    /// When set, every call fails with this error.
    failure: RwLock<Option<StateError>>,
}

fn poisoned<T>(_: T) -> StateError {
    StateError::Other("in-memory state lock poisoned".to_string())
}

impl InMemoryState {
    /// Create a new empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed raw bytes at `address` without recording a batch.
    pub fn insert(&self, address: StateAddress, data: Vec<u8>) -> Result<(), StateError> {
        self.entries.write().map_err(poisoned)?.insert(address, data);
        Ok(())
    }

    /// Raw bytes at `address`, `None` if absent.
    pub fn get(&self, address: &StateAddress) -> Result<Option<Vec<u8>>, StateError> {
        Ok(self.entries.read().map_err(poisoned)?.get(address).cloned())
    }

    /// Number of addresses holding data.
    pub fn len(&self) -> Result<usize, StateError> {
        Ok(self.entries.read().map_err(poisoned)?.len())
    }

    pub fn is_empty(&self) -> Result<bool, StateError> {
        Ok(self.len()? == 0)
    }

    /// Write batches applied so far.
    pub fn batches(&self) -> Result<Vec<BTreeMap<StateAddress, Vec<u8>>>, StateError> {
        Ok(self.batches.read().map_err(poisoned)?.clone())
    }

    /// Make every subsequent call fail with `error`; `None` restores normal operation.
    pub fn fail_with(&self, error: Option<StateError>) -> Result<(), StateError> {
        *self.failure.write().map_err(poisoned)? = error;
        Ok(())
    }

    fn check_failure(&self) -> Result<(), StateError> {
        match self.failure.read().map_err(poisoned)?.as_ref() {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl StateContext for InMemoryState {
    async fn get_state(
        &self,
        addresses: &[StateAddress],
    ) -> Result<HashMap<StateAddress, Vec<u8>>, StateError> {
        self.check_failure()?;
        let entries = self.entries.read().map_err(poisoned)?;
        Ok(addresses
            .iter()
            .map(|address| {
                let data = entries.get(address).cloned().unwrap_or_default();
                (address.clone(), data)
            })
            .collect())
    }

    async fn set_state(
        &self,
        updates: BTreeMap<StateAddress, Vec<u8>>,
    ) -> Result<Vec<StateAddress>, StateError> {
        self.check_failure()?;
        let mut entries = self.entries.write().map_err(poisoned)?;
        let written: Vec<StateAddress> = updates.keys().cloned().collect();
        for (address, data) in &updates {
            entries.insert(address.clone(), data.clone());
        }
        self.batches.write().map_err(poisoned)?.push(updates);
        Ok(written)
    }
}

// =============================================================================
// TESTS
// =============================================================================
