//! Allocation rule model
//!
//! An allocation rule is a percentage triple over needs, wants and savings
//! that always adds up to 100. Rules can only be built through checked
//! constructors, so a rule held by any consumer is balanced.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::category::Category;

/// Total every rule must add up to
pub const FULL_ALLOCATION: u8 = 100;

/// Errors when building a rule from raw percentages
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("{category} percentage {value} is outside 0-100")]
    OutOfRange { category: Category, value: i32 },

    #[error("percentages must add up to 100, got {total}")]
    Unbalanced { total: i32 },
}

/// A needs/wants/savings percentage split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AllocationRule {
    needs: u8,
    wants: u8,
    savings: u8,
}

impl AllocationRule {
    /// Build a rule, rejecting out-of-range or unbalanced triples
    pub fn new(needs: i32, wants: i32, savings: i32) -> Result<Self, RuleError> {
        for (category, value) in [
            (Category::Needs, needs),
            (Category::Wants, wants),
            (Category::Savings, savings),
        ] {
            if !(0..=FULL_ALLOCATION as i32).contains(&value) {
                return Err(RuleError::OutOfRange { category, value });
            }
        }

        let total = needs + wants + savings;
        if total != FULL_ALLOCATION as i32 {
            return Err(RuleError::Unbalanced { total });
        }

        Ok(Self {
            needs: needs as u8,
            wants: wants as u8,
            savings: savings as u8,
        })
    }

    pub const fn needs(&self) -> u8 {
        self.needs
    }

    pub const fn wants(&self) -> u8 {
        self.wants
    }

    pub const fn savings(&self) -> u8 {
        self.savings
    }

    /// Percentage assigned to a category
    pub const fn get(&self, category: Category) -> u8 {
        match category {
            Category::Needs => self.needs,
            Category::Wants => self.wants,
            Category::Savings => self.savings,
        }
    }

    /// Percentages in display order
    pub const fn as_array(&self) -> [u8; 3] {
        [self.needs, self.wants, self.savings]
    }

    /// Sum of the three percentages
    pub const fn total(&self) -> u16 {
        self.needs as u16 + self.wants as u16 + self.savings as u16
    }

    /// Whether the rule adds up to exactly 100
    pub const fn is_balanced(&self) -> bool {
        self.total() == FULL_ALLOCATION as u16
    }

    /// Build a rule from percentages the redistribution has already clamped
    /// to 0-100. The caller is responsible for checking the total.
    pub(crate) fn from_clamped(values: [i32; 3]) -> Self {
        let clamp = |v: i32| v.clamp(0, FULL_ALLOCATION as i32) as u8;
        Self {
            needs: clamp(values[0]),
            wants: clamp(values[1]),
            savings: clamp(values[2]),
        }
    }
}

impl Default for AllocationRule {
    fn default() -> Self {
        Preset::default().rule()
    }
}

impl fmt::Display for AllocationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.needs, self.wants, self.savings)
    }
}

/// The predefined rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Preset {
    /// 50% needs, 30% wants, 20% savings
    #[default]
    #[serde(rename = "50-30-20")]
    FiftyThirtyTwenty,
    /// 75% needs, 10% wants, 15% savings
    #[serde(rename = "75-10-15")]
    SeventyFiveTenFifteen,
}

impl Preset {
    pub const ALL: [Preset; 2] = [Preset::FiftyThirtyTwenty, Preset::SeventyFiveTenFifteen];

    /// The fixed percentages of this preset
    pub const fn rule(self) -> AllocationRule {
        match self {
            Self::FiftyThirtyTwenty => AllocationRule {
                needs: 50,
                wants: 30,
                savings: 20,
            },
            Self::SeventyFiveTenFifteen => AllocationRule {
                needs: 75,
                wants: 10,
                savings: 15,
            },
        }
    }

    /// Identifier used on the command line and in settings
    pub const fn id(self) -> &'static str {
        match self {
            Self::FiftyThirtyTwenty => "50-30-20",
            Self::SeventyFiveTenFifteen => "75-10-15",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::FiftyThirtyTwenty => "50/30/20 Rule",
            Self::SeventyFiveTenFifteen => "75/10/15 Rule",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// How the current rule was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleMode {
    Preset(Preset),
    Custom,
}

impl RuleMode {
    /// Selector options in display order
    pub const ALL: [RuleMode; 3] = [
        RuleMode::Preset(Preset::FiftyThirtyTwenty),
        RuleMode::Preset(Preset::SeventyFiveTenFifteen),
        RuleMode::Custom,
    ];

    pub const fn id(self) -> &'static str {
        match self {
            Self::Preset(preset) => preset.id(),
            Self::Custom => "custom",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Preset(preset) => preset.label(),
            Self::Custom => "Custom",
        }
    }

    pub const fn is_custom(self) -> bool {
        matches!(self, Self::Custom)
    }
}

impl Default for RuleMode {
    fn default() -> Self {
        Self::Preset(Preset::default())
    }
}

/// Error for unknown rule identifiers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown rule '{0}' (expected 50-30-20, 75-10-15 or custom)")]
pub struct ParseRuleModeError(pub String);

impl FromStr for RuleMode {
    type Err = ParseRuleModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('/', "-");
        match normalized.as_str() {
            "50-30-20" => Ok(Self::Preset(Preset::FiftyThirtyTwenty)),
            "75-10-15" => Ok(Self::Preset(Preset::SeventyFiveTenFifteen)),
            "custom" => Ok(Self::Custom),
            _ => Err(ParseRuleModeError(s.to_string())),
        }
    }
}

impl FromStr for Preset {
    type Err = ParseRuleModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<RuleMode>()? {
            RuleMode::Preset(preset) => Ok(preset),
            RuleMode::Custom => Err(ParseRuleModeError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rule() {
        let rule = AllocationRule::default();
        assert_eq!(rule.as_array(), [50, 30, 20]);
        assert!(rule.is_balanced());
    }

    #[test]
    fn test_presets_are_balanced() {
        for preset in Preset::ALL {
            assert!(preset.rule().is_balanced(), "{} is unbalanced", preset);
        }
        assert_eq!(Preset::SeventyFiveTenFifteen.rule().as_array(), [75, 10, 15]);
    }

    #[test]
    fn test_new_rejects_unbalanced() {
        assert_eq!(
            AllocationRule::new(50, 30, 10),
            Err(RuleError::Unbalanced { total: 90 })
        );
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(
            AllocationRule::new(110, -5, -5),
            Err(RuleError::OutOfRange {
                category: Category::Needs,
                value: 110
            })
        );
    }

    #[test]
    fn test_get_by_category() {
        let rule = AllocationRule::new(60, 25, 15).unwrap();
        assert_eq!(rule.get(Category::Needs), 60);
        assert_eq!(rule.get(Category::Wants), 25);
        assert_eq!(rule.get(Category::Savings), 15);
        assert_eq!(rule.to_string(), "60/25/15");
    }

    #[test]
    fn test_parse_rule_mode() {
        assert_eq!(
            "50/30/20".parse::<RuleMode>().unwrap(),
            RuleMode::Preset(Preset::FiftyThirtyTwenty)
        );
        assert_eq!("Custom".parse::<RuleMode>().unwrap(), RuleMode::Custom);
        assert!("60-20-20".parse::<RuleMode>().is_err());
        assert!("custom".parse::<Preset>().is_err());
    }

    #[test]
    fn test_preset_serialization() {
        let json = serde_json::to_string(&Preset::SeventyFiveTenFifteen).unwrap();
        assert_eq!(json, "\"75-10-15\"");

        let rule = Preset::FiftyThirtyTwenty.rule();
        let json = serde_json::to_string(&rule).unwrap();
        assert_eq!(json, r#"{"needs":50,"wants":30,"savings":20}"#);
    }
}
