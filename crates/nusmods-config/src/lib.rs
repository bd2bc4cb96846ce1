//! # NUSMods Config
//!
//! Configuration types for the NUSMods sync client.
//!
//! - [`client`]: Academic year, API location and HTTP timeout
//! - [`calendar`]: Loading an academic calendar from a JSON file
//!
//! Cache settings live with the cache itself in `nusmods_cache::CacheConfig`.
//!
//! # Example
//!
//! ```ignore
//! use nusmods_config::{ClientConfig, load_calendar};
//!
//! let config = ClientConfig::from_env()?;
//! let calendar = load_calendar("calendar-2025-2026.json")?;
//! ```

pub mod calendar;
pub mod client;

pub use calendar::load_calendar;
pub use client::{ClientConfig, DEFAULT_BASE_URL};

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Malformed academic calendar in {path}: {source}")]
    Calendar {
        path: String,
        source: serde_json::Error,
    },
}
