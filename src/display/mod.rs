//! Display formatting for terminal output
//!
//! Provides utilities for formatting allocations, rules and validation
//! results for the command line.

pub mod allocation;
pub mod rule;

pub use allocation::{
    format_allocation_json, format_allocation_table, format_legend_entry, AllocationReport,
};
pub use rule::{format_rule_list, format_validation_result};
