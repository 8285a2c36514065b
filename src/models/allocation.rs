//! Category allocation model
//!
//! The monetary share of one category, derived from an income and a rule.
//! Never stored; recomputed whenever either input changes.

use serde::Serialize;

use super::category::Category;
use super::money::Money;

/// Amount assigned to one category
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryAllocation {
    pub category: Category,
    pub percentage: u8,
    /// Full-precision amount
    pub amount: f64,
}

impl CategoryAllocation {
    /// Amount rounded to two decimals
    pub fn rounded_amount(&self) -> f64 {
        self.money().as_f64()
    }

    /// Amount rounded to cents, for display and totals
    pub fn money(&self) -> Money {
        Money::from_amount(self.amount)
    }

    /// Legend label, e.g. `Needs (50%)`
    pub fn label(&self) -> String {
        format!("{} ({}%)", self.category.label(), self.percentage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounded_amount() {
        let allocation = CategoryAllocation {
            category: Category::Wants,
            percentage: 30,
            amount: 1234.5678,
        };
        assert_eq!(allocation.rounded_amount(), 1234.57);
        assert_eq!(allocation.money().cents(), 123457);
        assert_eq!(allocation.label(), "Wants (30%)");
    }
}
