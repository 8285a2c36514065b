//! Pocket Metrics - budget allocation calculator
//!
//! Splits a net salary into needs, wants and savings. Two preset rules
//! (50/30/20 and 75/10/15) are built in; a custom rule can be tuned in 5%
//! steps while the three shares always add up to 100%.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Categories, rules, validated income and allocations
//! - `services`: Rule management and the budget calculator
//! - `config`: Paths, settings and logging
//! - `error`: Custom error types
//! - `display`: Plain-text and JSON formatting for the CLI
//! - `cli`: Command handlers
//! - `tui`: Interactive terminal front-end
//!
//! # Example
//!
//! ```
//! use pocket::models::{validate_income, Preset};
//! use pocket::services::allocate;
//!
//! let income = validate_income(Some("5000")).unwrap();
//! let split = allocate(income, &Preset::FiftyThirtyTwenty.rule());
//! assert_eq!(split[0].amount, 2500.0);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod tui;

pub use error::PocketError;
