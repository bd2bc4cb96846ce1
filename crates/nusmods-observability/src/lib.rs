//! NUSMods Observability
//!
//! Console logging for the sync client. All crates log through `tracing`
//! macros; this crate installs the subscriber that prints them.
//!
//! # Examples
//!
//! ```no_run
//! use nusmods_observability::init_logging;
//!
//! init_logging();
//! tracing::info!("ready");
//! ```

pub mod basic_logging;

pub use basic_logging::{LogFormat, init_logging};
