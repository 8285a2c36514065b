//! Configuration module for Pocket Metrics
//!
//! This module provides configuration management including:
//! - Config directory resolution
//! - User settings persistence
//! - Logging setup

pub mod logging;
pub mod paths;
pub mod settings;

pub use paths::PocketPaths;
pub use settings::Settings;
