//! Configuration types for the contact book
//!
//! This module defines all configuration structures used throughout the crate.

use serde::{Deserialize, Serialize};

/// Default path of the collection file, next to the working directory
pub const DEFAULT_STORE_PATH: &str = "data/contacts.json";

/// Largest accepted flash TTL, one day in seconds
pub const MAX_FLASH_TTL_SECS: u64 = 86_400;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Contact store configuration
    pub store: StoreConfig,

    /// Flash notice settings
    #[serde(default)]
    pub flash: FlashConfig,
}

impl AppConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self {
            store: StoreConfig::default(),
            flash: FlashConfig::default(),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        self.store.validate()?;
        self.flash.validate()?;
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Contact store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoreConfig {
    /// File-backed store (the production default)
    File {
        /// Path to the collection file
        path: String,
    },

    /// In-memory store (not persistent; tests and ephemeral deployments)
    Memory,
}

impl StoreConfig {
    /// Validate the store configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        match self {
            StoreConfig::File { path } => {
                if path.is_empty() {
                    return Err(crate::Error::config("store file path cannot be empty"));
                }
                Ok(())
            }
            StoreConfig::Memory => Ok(()),
        }
    }

    /// Get the store type name
    pub fn type_name(&self) -> &str {
        match self {
            StoreConfig::File { .. } => "file",
            StoreConfig::Memory => "memory",
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::File {
            path: DEFAULT_STORE_PATH.to_string(),
        }
    }
}

/// Flash notice configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashConfig {
    /// How long a stashed notice stays claimable (in seconds)
    ///
    /// A notice lives from the redirect that stashes it until the next
    /// page load consumes it, so a few seconds would do; the default
    /// leaves room for slow clients.
    #[serde(default = "default_flash_ttl_secs")]
    pub ttl_secs: u64,
}

impl FlashConfig {
    /// Validate the flash configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        if !(1..=MAX_FLASH_TTL_SECS).contains(&self.ttl_secs) {
            return Err(crate::Error::config(format!(
                "flash TTL must be between 1 and {} seconds, got {}",
                MAX_FLASH_TTL_SECS, self.ttl_secs
            )));
        }
        Ok(())
    }
}

impl Default for FlashConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_flash_ttl_secs(),
        }
    }
}

fn default_flash_ttl_secs() -> u64 {
    60
}
