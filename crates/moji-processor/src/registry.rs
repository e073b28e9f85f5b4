//! # Handler Registry
//!
//! Host-side routing of transactions to registered handlers by family name
//! and version.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let mut registry = HandlerRegistry::new();
//! registry.register(Arc::new(MojiHandler::default()));
//!
//! registry.apply(&request, &context).await?;
//! ```

use crate::errors::ApplyError;
use crate::ports::inbound::{DynTransactionHandler, TpProcessRequest};
use crate::ports::outbound::StateContext;
use std::collections::HashMap;
use tracing::{info, warn};

/// Registered handlers keyed by family name.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<String, DynTransactionHandler>,
}

impl HandlerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` under its family name, replacing any earlier one.
    pub fn register(&mut self, handler: DynTransactionHandler) {
        let family = handler.family_name().to_string();
        info!(
            family = %family,
            versions = ?handler.family_versions(),
            namespaces = ?handler.namespaces(),
            "[Registry] Registering transaction handler"
        );
        if self.handlers.insert(family.clone(), handler).is_some() {
            warn!(family = %family, "[Registry] Handler already registered, replaced");
        }
    }

    #[must_use]
    pub fn is_registered(&self, family_name: &str) -> bool {
        self.handlers.contains_key(family_name)
    }

    /// Registered family names, sorted.
    #[must_use]
    pub fn families(&self) -> Vec<String> {
        let mut families: Vec<String> = self.handlers.keys().cloned().collect();
        families.sort();
        families
    }

    /// Handler serving `family_name` at `family_version`.
    #[must_use]
    pub fn route(&self, family_name: &str, family_version: &str) -> Option<&DynTransactionHandler> {
        self.handlers.get(family_name).filter(|handler| {
            handler
                .family_versions()
                .iter()
                .any(|version| version == family_version)
        })
    }

    /// Dispatch `request` to the handler named in its header.
    pub async fn apply(
        &self,
        request: &TpProcessRequest,
        context: &dyn StateContext,
    ) -> Result<(), ApplyError> {
        let header = &request.header;
        let Some(handler) = self.route(&header.family_name, &header.family_version) else {
            warn!(
                family = %header.family_name,
                version = %header.family_version,
                "[Registry] No handler for transaction family"
            );
            return Err(ApplyError::UnsupportedFamily {
                family_name: header.family_name.clone(),
                family_version: header.family_version.clone(),
            });
        };
        handler.apply(request, context).await
    }
}
