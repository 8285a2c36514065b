//! Rule and validation display formatting

use crate::models::{Category, Preset, RuleMode, ValidIncome, ValidationError};

/// List the selectable rules, marking the configured default
pub fn format_rule_list(default_preset: Preset) -> String {
    let mut output = String::new();
    output.push_str("Budget Rules:\n");

    for mode in RuleMode::ALL {
        let marker = if mode == RuleMode::Preset(default_preset) {
            " (default)"
        } else {
            ""
        };

        let detail = match mode {
            RuleMode::Preset(preset) => {
                let rule = preset.rule();
                Category::ALL
                    .iter()
                    .map(|c| format!("{} {}%", c.label(), rule.get(*c)))
                    .collect::<Vec<_>>()
                    .join(", ")
            }
            RuleMode::Custom => "start from the last rule, adjust in steps of 5%".to_string(),
        };

        output.push_str(&format!(
            "  {:<10} {:<14} {}{}\n",
            mode.id(),
            mode.label(),
            detail,
            marker
        ));
    }

    output
}

/// Describe a validation outcome on one line
pub fn format_validation_result(result: &Result<ValidIncome, ValidationError>) -> String {
    match result {
        Ok(income) => format!("Valid net salary: {}", income),
        Err(err) => format!("{}: {}", err.code(), err.message()),
    }
}
