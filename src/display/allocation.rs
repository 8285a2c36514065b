//! Allocation display formatting
//!
//! Formats a computed split as a terminal table or as JSON.

use serde::Serialize;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::{AllocationRule, CategoryAllocation, RuleMode, ValidIncome};
use crate::services::AllocationSummary;

#[derive(Tabled)]
struct AllocationRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Share")]
    percentage: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format an allocation as a table with a total row
pub fn format_allocation_table(
    income: ValidIncome,
    mode: RuleMode,
    allocations: &[CategoryAllocation],
    currency_symbol: &str,
) -> String {
    let summary = AllocationSummary::new(income, allocations);

    let mut rows: Vec<AllocationRow> = allocations
        .iter()
        .map(|a| AllocationRow {
            category: a.category.label().to_string(),
            percentage: format!("{}%", a.percentage),
            amount: a.money().format_with_symbol(currency_symbol),
        })
        .collect();

    let total_percentage: u16 = allocations.iter().map(|a| u16::from(a.percentage)).sum();
    rows.push(AllocationRow {
        category: "Total".to_string(),
        percentage: format!("{}%", total_percentage),
        amount: summary.allocated.format_with_symbol(currency_symbol),
    });

    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .to_string();

    let mut output = String::new();
    output.push_str(&format!(
        "Net Salary: {}  ({})\n",
        summary.income.format_with_symbol(currency_symbol),
        mode.label()
    ));
    output.push_str(&table);
    output.push('\n');

    let difference = summary.rounding_difference();
    if !difference.is_zero() {
        output.push_str(&format!(
            "Note: rounded amounts differ from the net salary by {}\n",
            difference.abs().format_with_symbol(currency_symbol)
        ));
    }

    output
}

/// One category in the JSON report
#[derive(Debug, Serialize)]
pub struct AllocationEntry {
    pub category: &'static str,
    pub percentage: u8,
    /// Amount rounded to two decimals
    pub amount: f64,
}

/// JSON shape of an `allocate` result
#[derive(Debug, Serialize)]
pub struct AllocationReport {
    pub income: f64,
    pub rule: &'static str,
    pub percentages: AllocationRule,
    pub allocations: Vec<AllocationEntry>,
}

impl AllocationReport {
    pub fn new(
        income: ValidIncome,
        mode: RuleMode,
        rule: AllocationRule,
        allocations: &[CategoryAllocation],
    ) -> Self {
        Self {
            income: income.value(),
            rule: mode.id(),
            percentages: rule,
            allocations: allocations
                .iter()
                .map(|a| AllocationEntry {
                    category: a.category.key(),
                    percentage: a.percentage,
                    amount: a.rounded_amount(),
                })
                .collect(),
        }
    }
}

/// Format an allocation as pretty-printed JSON
pub fn format_allocation_json(report: &AllocationReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

/// Single legend line, e.g. `Needs (50%)  2500.00 €`
pub fn format_legend_entry(allocation: &CategoryAllocation, currency_symbol: &str) -> String {
    format!(
        "{}  {}",
        allocation.label(),
        allocation.money().format_with_symbol(currency_symbol)
    )
}
