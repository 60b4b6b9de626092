//! readlog - daily foreign-language news reading log
//!
//! Each entry records one article read: the pasted excerpt, the user's own
//! translation, the corrected output pasted back from an assistant, short
//! summaries and the vocabulary collected along the way.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Entries and their field types
//! - `storage`: Entry store over a pluggable key-value backend
//! - `services`: Business logic layer
//! - `audit`: Audit logging system
//! - `reports`: Statistics, filtered listing and the global vocabulary
//! - `prompt`: Assistant prompt generation
//! - `export`: JSON, YAML, CSV and vocabulary export
//! - `clipboard`: Clipboard output
//! - `display`, `cli`: Terminal front end
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use readlog::clock::SystemClock;
//! use readlog::models::{EntryDefaults, EntryPatch};
//! use readlog::prompt::build_prompt;
//! use readlog::storage::{EntryStore, MemoryStore};
//!
//! let store = EntryStore::open(
//!     Arc::new(MemoryStore::new()),
//!     Arc::new(SystemClock),
//!     EntryDefaults::default(),
//! )?;
//! let entry = store.create()?;
//! let entry = store
//!     .update(&entry.id, EntryPatch { title: Some("Heatwave".into()), ..Default::default() })?
//!     .unwrap();
//! assert!(build_prompt(&entry).contains("- Title: Heatwave"));
//! # Ok::<(), readlog::error::ReadlogError>(())
//! ```

pub mod audit;
pub mod cli;
pub mod clipboard;
pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod prompt;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ReadlogError, ReadlogResult};
