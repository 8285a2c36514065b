//! Service layer for Pocket Metrics
//!
//! The allocation engine: the rule manager that keeps percentages balanced
//! and the calculator that turns an income and a rule into amounts. Both are
//! pure and perform no I/O.

pub mod calculator;
pub mod rule;

pub use calculator::{allocate, AllocationSummary};
pub use rule::{redistribute, snap_percentage, Redistribution, RuleManager, RuleObserver};
