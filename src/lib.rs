//! # NUSMods Sync
//!
//! A client that mirrors the NUSMods course catalog and turns module
//! timetables into dated class sessions for a given academic calendar.
//!
//! ## Overview
//!
//! - **Catalog lookups**: module list, module info, weekly timetable and exam
//!   data for one academic year, served through a read-through cache
//! - **Week resolution**: explicit week lists and range objects flattened to
//!   week numbers
//! - **Calendar expansion**: weekly lessons placed on real dates, skipping
//!   recess weeks, reading weeks and public holidays
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── nusmods-models/         # Wire records, week specifications, dated sessions
//! ├── nusmods-calendar/       # Academic calendar index and session expansion
//! ├── nusmods-cache/          # Byte stores and the read-through cache
//! ├── nusmods-config/         # Client configuration and calendar files
//! └── nusmods-observability/  # Console logging
//! src/
//! ├── cli/                    # Command handlers and output formatting
//! ├── client.rs               # NusModsClient facade
//! ├── fetcher.rs              # reqwest-based fetcher
//! └── error.rs                # ClientError
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! NUSMODS_ACADEMIC_YEAR=2025-2026
//! CACHE_BACKEND=file
//! CACHE_DIR=~/.cache
//! ```
//!
//! ```bash
//! cargo run -- sessions CS2030S --semester 1 --calendar calendar.json
//! ```
//!
//! ## Caching
//!
//! Cached records never expire. A module whose timetable changes upstream
//! keeps its old timetable until its cache entry is deleted.

pub mod cli;
pub mod client;
pub mod error;
pub mod fetcher;

pub use client::NusModsClient;
pub use error::ClientError;
pub use fetcher::HttpFetcher;

// Re-export workspace crates for convenience
pub use nusmods_cache;
pub use nusmods_calendar;
pub use nusmods_config;
pub use nusmods_models;
