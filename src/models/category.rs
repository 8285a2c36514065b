//! Spending categories
//!
//! Every allocation rule splits income across the same three categories,
//! always presented in the order needs, wants, savings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three budget categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Needs,
    Wants,
    Savings,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 3] = [Category::Needs, Category::Wants, Category::Savings];

    /// Position of this category in [`Category::ALL`]
    pub const fn index(self) -> usize {
        match self {
            Self::Needs => 0,
            Self::Wants => 1,
            Self::Savings => 2,
        }
    }

    /// Lowercase key, as used on the command line and in JSON
    pub const fn key(self) -> &'static str {
        match self {
            Self::Needs => "needs",
            Self::Wants => "wants",
            Self::Savings => "savings",
        }
    }

    /// Capitalized label for display
    pub const fn label(self) -> &'static str {
        match self {
            Self::Needs => "Needs",
            Self::Wants => "Wants",
            Self::Savings => "Savings",
        }
    }

    /// The two other categories, in display order
    pub fn others(self) -> [Category; 2] {
        match self {
            Self::Needs => [Self::Wants, Self::Savings],
            Self::Wants => [Self::Needs, Self::Savings],
            Self::Savings => [Self::Needs, Self::Wants],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Error for unknown category names
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category '{0}' (expected needs, wants or savings)")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "needs" | "n" => Ok(Self::Needs),
            "wants" | "w" => Ok(Self::Wants),
            "savings" | "s" => Ok(Self::Savings),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_order() {
        let indices: Vec<usize> = Category::ALL.iter().map(|c| c.index()).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_others_keep_order() {
        assert_eq!(Category::Needs.others(), [Category::Wants, Category::Savings]);
        assert_eq!(Category::Wants.others(), [Category::Needs, Category::Savings]);
        assert_eq!(Category::Savings.others(), [Category::Needs, Category::Wants]);
    }

    #[test]
    fn test_parse() {
        assert_eq!("needs".parse::<Category>().unwrap(), Category::Needs);
        assert_eq!(" Wants ".parse::<Category>().unwrap(), Category::Wants);
        assert_eq!("s".parse::<Category>().unwrap(), Category::Savings);
        assert!("rent".parse::<Category>().is_err());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Category::Savings).unwrap();
        assert_eq!(json, "\"savings\"");
    }
}
