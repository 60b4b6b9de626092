//! Configuration module for readlog
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::ReadlogPaths;
pub use settings::Settings;
