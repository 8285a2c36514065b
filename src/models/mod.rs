//! Core data models for Pocket Metrics
//!
//! This module contains the data structures of the budget calculator:
//! categories, allocation rules, validated income and computed allocations.

pub mod allocation;
pub mod category;
pub mod income;
pub mod money;
pub mod rule;

pub use allocation::CategoryAllocation;
pub use category::Category;
pub use income::{validate_amount, validate_income, ValidIncome, ValidationError, ValidationErrorCode};
pub use money::Money;
pub use rule::{AllocationRule, Preset, RuleError, RuleMode};
