use pocket::models::{validate_amount, Category, Preset, RuleMode};
use pocket::services::{allocate, AllocationSummary, RuleManager};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Select(RuleMode),
    Adjust(Category, i32),
    Nudge(Category, i32),
}

fn category() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        prop::sample::select(RuleMode::ALL.to_vec()).prop_map(Op::Select),
        (category(), any::<i32>()).prop_map(|(c, v)| Op::Adjust(c, v)),
        (category(), prop_oneof![-3i32..=3, any::<i32>()]).prop_map(|(c, s)| Op::Nudge(c, s)),
    ]
}

proptest! {
    #[test]
    fn every_sequence_stays_balanced(ops in prop::collection::vec(op(), 0..40)) {
        let mut manager = RuleManager::new();
        for op in ops {
            match op {
                Op::Select(mode) => { manager.select(mode); }
                Op::Adjust(category, value) => { manager.adjust_category(category, value); }
                Op::Nudge(category, steps) => { manager.nudge_category(category, steps); }
            }
            let rule = manager.rule();
            prop_assert_eq!(rule.total(), 100);
            for category in Category::ALL {
                prop_assert!(rule.get(category) <= 100);
            }
        }
    }

    #[test]
    fn custom_values_stay_on_the_step_grid(
        adjustments in prop::collection::vec((category(), 0i32..=100), 1..20)
    ) {
        let mut manager = RuleManager::new();
        manager.select_custom();
        for (category, value) in adjustments {
            let rule = manager.adjust_category(category, value);
            for category in Category::ALL {
                prop_assert_eq!(rule.get(category) % 5, 0);
            }
        }
    }

    #[test]
    fn allocations_add_up_to_income(
        cents in 1u64..=100_000_000,
        ops in prop::collection::vec((category(), 0i32..=100), 0..10)
    ) {
        let mut manager = RuleManager::new();
        manager.select_custom();
        for (category, value) in ops {
            manager.adjust_category(category, value);
        }

        let income = validate_amount(cents as f64 / 100.0).unwrap();
        let total: f64 = allocate(income, &manager.rule()).iter().map(|a| a.amount).sum();
        prop_assert!((total - income.value()).abs() < 1e-6);
    }

    #[test]
    fn rounded_amounts_stay_within_two_cents(
        cents in 1u64..=100_000_000,
        ops in prop::collection::vec((category(), 0i32..=100), 0..10)
    ) {
        let mut manager = RuleManager::new();
        manager.select_custom();
        for (category, value) in ops {
            manager.adjust_category(category, value);
        }

        let income = validate_amount(cents as f64 / 100.0).unwrap();
        let allocations = allocate(income, &manager.rule());
        let summary = AllocationSummary::new(income, &allocations);
        prop_assert!(summary.rounding_difference().cents().abs() <= 2);

        let rounded: f64 = allocations.iter().map(|a| a.rounded_amount()).sum();
        prop_assert!((rounded - income.value()).abs() <= 0.015 + 1e-9);
    }

    #[test]
    fn preset_selection_ignores_history(
        ops in prop::collection::vec((category(), 0i32..=100), 0..10),
        preset in prop::sample::select(Preset::ALL.to_vec())
    ) {
        let mut manager = RuleManager::new();
        manager.select_custom();
        for (category, value) in ops {
            manager.adjust_category(category, value);
        }
        let rule = manager.select_preset(preset);
        prop_assert_eq!(rule, preset.rule());
        prop_assert_eq!(manager.select_preset(preset), rule);
    }
}
