//! Budget calculator
//!
//! Splits a validated income by an allocation rule. Amounts keep full
//! precision; rounding to cents happens only when they are presented, and the
//! rounded parts are not re-normalized, so their sum may differ from the
//! income by a cent or so.

use crate::models::{AllocationRule, Category, CategoryAllocation, Money, ValidIncome};

/// Split an income into needs, wants and savings, in that order
pub fn allocate(income: ValidIncome, rule: &AllocationRule) -> [CategoryAllocation; 3] {
    Category::ALL.map(|category| {
        let percentage = rule.get(category);
        CategoryAllocation {
            category,
            percentage,
            amount: income.value() * (f64::from(percentage) / 100.0),
        }
    })
}

/// Totals of an allocation as displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationSummary {
    /// The income rounded to cents
    pub income: Money,
    /// Sum of the rounded category amounts
    pub allocated: Money,
}

impl AllocationSummary {
    pub fn new(income: ValidIncome, allocations: &[CategoryAllocation]) -> Self {
        Self {
            income: Money::from_amount(income.value()),
            allocated: allocations.iter().map(CategoryAllocation::money).sum(),
        }
    }

    /// Difference introduced by rounding each category separately
    pub fn rounding_difference(&self) -> Money {
        self.allocated - self.income
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{validate_amount, Preset};

    fn income(value: f64) -> ValidIncome {
        validate_amount(value).unwrap()
    }

    #[test]
    fn test_fifty_thirty_twenty_split() {
        let result = allocate(income(5000.0), &Preset::FiftyThirtyTwenty.rule());

        let categories: Vec<Category> = result.iter().map(|a| a.category).collect();
        assert_eq!(categories, Category::ALL.to_vec());

        let rounded: Vec<f64> = result.iter().map(|a| a.rounded_amount()).collect();
        assert_eq!(rounded, vec![2500.0, 1500.0, 1000.0]);
        assert_eq!(result[1].money().to_string(), "1500.00");
    }

    #[test]
    fn test_seventy_five_ten_fifteen_split() {
        let result = allocate(income(2000.0), &Preset::SeventyFiveTenFifteen.rule());
        let cents: Vec<i64> = result.iter().map(|a| a.money().cents()).collect();
        assert_eq!(cents, vec![150000, 20000, 30000]);
    }

    #[test]
    fn test_full_precision_is_kept() {
        let rule = AllocationRule::new(35, 35, 30).unwrap();
        let result = allocate(income(0.07), &rule);
        assert!((result[0].amount - 0.0245).abs() < 1e-12);
        assert_eq!(result[0].money().cents(), 2);
    }

    #[test]
    fn test_zero_percent_category() {
        let rule = AllocationRule::new(100, 0, 0).unwrap();
        let result = allocate(income(1234.56), &rule);
        assert_eq!(result[0].rounded_amount(), 1234.56);
        assert_eq!(result[1].amount, 0.0);
        assert_eq!(result[2].amount, 0.0);
    }

    #[test]
    fn test_summary_rounding_difference() {
        let rule = AllocationRule::new(35, 35, 30).unwrap();
        let value = income(100.01);
        let result = allocate(value, &rule);
        let summary = AllocationSummary::new(value, &result);

        // 35.0035 -> 35.00, 35.0035 -> 35.00, 30.003 -> 30.00
        assert_eq!(summary.allocated.cents(), 10000);
        assert_eq!(summary.income.cents(), 10001);
        assert_eq!(summary.rounding_difference().cents(), -1);
    }

    #[test]
    fn test_sum_matches_income_for_presets() {
        for preset in Preset::ALL {
            let value = income(4321.0);
            let result = allocate(value, &preset.rule());
            let total: f64 = result.iter().map(|a| a.amount).sum();
            assert!((total - 4321.0).abs() < 1e-9);
        }
    }
}
