//! # Processor Configuration
//!
//! Family identity and namespace. Validated once at startup, then moved into
//! the handler and never changed.

use crate::domain::value_objects::Namespace;
use crate::errors::ConfigError;
use crate::{FAMILY_NAME, FAMILY_VERSION, NAMESPACE};
use std::env;

/// Raw processor settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessorConfig {
    /// Transaction family served.
    pub family_name: String,
    /// Family version served.
    pub family_version: String,
    /// Six-hex-char address prefix.
    pub namespace: String,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            family_name: FAMILY_NAME.to_string(),
            family_version: FAMILY_VERSION.to_string(),
            namespace: NAMESPACE.to_string(),
        }
    }
}

impl ProcessorConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `MOJI_FAMILY_NAME`: Family name (default: cryptomoji)
    /// - `MOJI_FAMILY_VERSION`: Family version (default: 0.1)
    /// - `MOJI_NAMESPACE`: Namespace prefix (default: 5f4d76)
    pub fn from_env() -> Self {
        Self {
            family_name: env::var("MOJI_FAMILY_NAME").unwrap_or_else(|_| FAMILY_NAME.to_string()),
            family_version: env::var("MOJI_FAMILY_VERSION")
                .unwrap_or_else(|_| FAMILY_VERSION.to_string()),
            namespace: env::var("MOJI_NAMESPACE").unwrap_or_else(|_| NAMESPACE.to_string()),
        }
    }

    /// Check every field and resolve the namespace.
    pub fn validate(self) -> Result<ValidatedConfig, ConfigError> {
        if self.family_name.trim().is_empty() {
            return Err(ConfigError::EmptyFamilyName);
        }
        if self.family_version.trim().is_empty() {
            return Err(ConfigError::EmptyFamilyVersion);
        }
        let namespace = Namespace::parse(&self.namespace)
            .ok_or_else(|| ConfigError::InvalidNamespace(self.namespace.clone()))?;

        Ok(ValidatedConfig {
            family_name: self.family_name,
            family_version: self.family_version,
            namespace,
        })
    }
}

/// Configuration that passed [`ProcessorConfig::validate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedConfig {
    family_name: String,
    family_version: String,
    namespace: Namespace,
}

impl Default for ValidatedConfig {
    fn default() -> Self {
        Self {
            family_name: FAMILY_NAME.to_string(),
            family_version: FAMILY_VERSION.to_string(),
            namespace: Namespace::from_static(NAMESPACE),
        }
    }
}

impl ValidatedConfig {
    #[must_use]
    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    #[must_use]
    pub fn family_version(&self) -> &str {
        &self.family_version
    }

    #[must_use]
    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }
}
