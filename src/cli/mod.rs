//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod allocate;
pub mod config;
pub mod validate;

pub use allocate::{handle_allocate_command, AllocateArgs};
pub use config::{handle_config_command, handle_rules_command, ConfigArgs};
pub use validate::{handle_validate_command, ValidateArgs};
