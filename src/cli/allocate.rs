//! Allocate CLI command
//!
//! Splits a net salary by a preset or a custom rule and prints the result.
//! A custom rule starts from the configured preset or from an explicit
//! `--split`, then takes any `--adjust` edits in order.

use clap::Args;

use crate::config::settings::Settings;
use crate::display::{format_allocation_json, format_allocation_table, AllocationReport};
use crate::error::{PocketError, PocketResult};
use crate::models::{validate_income, AllocationRule, Category, RuleMode};
use crate::services::{allocate, RuleManager};

/// Arguments for `pocket allocate`
#[derive(Args, Debug)]
pub struct AllocateArgs {
    /// Net salary (e.g., "5000" or "5000.50")
    #[arg(allow_hyphen_values = true)]
    pub income: String,

    /// Rule to apply: 50-30-20, 75-10-15 or custom (defaults to the configured preset)
    #[arg(short, long)]
    pub rule: Option<RuleMode>,

    /// Explicit custom split such as "60/20/20"; must add up to 100
    #[arg(long, value_name = "NEEDS/WANTS/SAVINGS", value_parser = parse_split, conflicts_with = "rule")]
    pub split: Option<[i32; 3]>,

    /// Custom adjustment such as "needs=55"; implies the custom rule, repeatable
    #[arg(short, long = "adjust", value_name = "CATEGORY=PERCENT", value_parser = parse_adjustment)]
    pub adjustments: Vec<(Category, i32)>,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Parse `CATEGORY=PERCENT`
pub fn parse_adjustment(s: &str) -> Result<(Category, i32), String> {
    let (category, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected CATEGORY=PERCENT, got '{}'", s))?;

    let category = category.parse::<Category>().map_err(|e| e.to_string())?;
    let value = value
        .trim()
        .parse::<i32>()
        .map_err(|_| format!("percentage must be a whole number, got '{}'", value.trim()))?;

    Ok((category, value))
}

/// Parse `NEEDS/WANTS/SAVINGS`; the balance check happens when the rule is built
pub fn parse_split(s: &str) -> Result<[i32; 3], String> {
    let parts: Vec<&str> = s.split('/').map(str::trim).collect();
    let [needs, wants, savings] = parts.as_slice() else {
        return Err(format!("expected NEEDS/WANTS/SAVINGS, got '{}'", s));
    };

    let mut values = [0; 3];
    for (slot, part) in values.iter_mut().zip([needs, wants, savings]) {
        *slot = part
            .parse::<i32>()
            .map_err(|_| format!("percentage must be a whole number, got '{}'", part))?;
    }
    Ok(values)
}

/// Build the rule for the given arguments, starting from the configured preset
pub fn build_rule(settings: &Settings, args: &AllocateArgs) -> PocketResult<RuleManager> {
    let mut manager = RuleManager::with_preset(settings.default_preset);

    let mode = match args.rule {
        Some(RuleMode::Preset(_)) if !args.adjustments.is_empty() => {
            return Err(PocketError::InvalidArgument(
                "--adjust can only be combined with the custom rule".into(),
            ))
        }
        Some(mode) => mode,
        None if !args.adjustments.is_empty() => RuleMode::Custom,
        None => RuleMode::Preset(settings.default_preset),
    };
    match args.split {
        Some([needs, wants, savings]) => {
            let rule = AllocationRule::new(needs, wants, savings)?;
            manager.load_custom(rule);
        }
        None => {
            manager.select(mode);
        }
    }

    for (category, value) in &args.adjustments {
        manager.adjust_category(*category, *value);
    }

    Ok(manager)
}

/// Handle the allocate command
pub fn handle_allocate_command(settings: &Settings, args: AllocateArgs) -> PocketResult<()> {
    let income = validate_income(Some(&args.income))?;
    let manager = build_rule(settings, &args)?;
    let rule = manager.rule();
    let allocations = allocate(income, &rule);

    tracing::info!(rule = %rule, mode = manager.mode().id(), "allocation computed");

    if args.json {
        let report = AllocationReport::new(income, manager.mode(), rule, &allocations);
        println!("{}", format_allocation_json(&report)?);
    } else {
        print!(
            "{}",
            format_allocation_table(income, manager.mode(), &allocations, &settings.currency_symbol)
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Preset, RuleError};

    fn args(rule: Option<RuleMode>, adjustments: Vec<(Category, i32)>) -> AllocateArgs {
        AllocateArgs {
            income: "5000".into(),
            rule,
            split: None,
            adjustments,
            json: false,
        }
    }

    #[test]
    fn test_parse_adjustment() {
        assert_eq!(parse_adjustment("needs=55"), Ok((Category::Needs, 55)));
        assert_eq!(parse_adjustment("wants= 0"), Ok((Category::Wants, 0)));
        assert!(parse_adjustment("needs").is_err());
        assert!(parse_adjustment("rent=10").is_err());
        assert!(parse_adjustment("needs=ten").is_err());
    }

    #[test]
    fn test_parse_split() {
        assert_eq!(parse_split("60/20/20"), Ok([60, 20, 20]));
        assert_eq!(parse_split(" 70 / 30 / 0 "), Ok([70, 30, 0]));
        assert_eq!(parse_split("50/50/10"), Ok([50, 50, 10]));
        assert!(parse_split("60/40").is_err());
        assert!(parse_split("60/20/20/0").is_err());
        assert!(parse_split("sixty/20/20").is_err());
    }

    #[test]
    fn test_split_loads_custom_rule() {
        let settings = Settings::default();
        let mut arguments = args(None, vec![(Category::Savings, 30)]);
        arguments.split = Some([60, 20, 20]);

        let manager = build_rule(&settings, &arguments).unwrap();
        assert!(manager.mode().is_custom());
        assert_eq!(manager.rule().as_array(), [55, 15, 30]);
    }

    #[test]
    fn test_unbalanced_split_is_an_invalid_rule() {
        let settings = Settings::default();
        let mut arguments = args(None, vec![]);

        arguments.split = Some([50, 50, 10]);
        let err = build_rule(&settings, &arguments).unwrap_err();
        assert!(matches!(
            err,
            PocketError::InvalidRule(RuleError::Unbalanced { total: 110 })
        ));

        arguments.split = Some([120, -10, -10]);
        let err = build_rule(&settings, &arguments).unwrap_err();
        assert!(matches!(
            err,
            PocketError::InvalidRule(RuleError::OutOfRange { category: Category::Needs, value: 120 })
        ));
    }

    #[test]
    fn test_default_rule_from_settings() {
        let settings = Settings {
            default_preset: Preset::SeventyFiveTenFifteen,
            ..Settings::default()
        };
        let manager = build_rule(&settings, &args(None, vec![])).unwrap();
        assert_eq!(manager.rule().as_array(), [75, 10, 15]);
    }

    #[test]
    fn test_adjustments_imply_custom() {
        let settings = Settings::default();
        let manager = build_rule(&settings, &args(None, vec![(Category::Needs, 60)])).unwrap();
        assert!(manager.mode().is_custom());
        assert_eq!(manager.rule().as_array(), [60, 25, 15]);
    }

    #[test]
    fn test_adjustments_apply_in_order() {
        let settings = Settings::default();
        let manager = build_rule(
            &settings,
            &args(
                Some(RuleMode::Custom),
                vec![(Category::Needs, 60), (Category::Savings, 30)],
            ),
        )
        .unwrap();
        assert_eq!(manager.rule().as_array(), [55, 15, 30]);
    }

    #[test]
    fn test_adjustments_rejected_with_preset() {
        let settings = Settings::default();
        let result = build_rule(
            &settings,
            &args(
                Some(RuleMode::Preset(Preset::FiftyThirtyTwenty)),
                vec![(Category::Needs, 60)],
            ),
        );
        assert!(matches!(result, Err(PocketError::InvalidArgument(_))));
    }
}
