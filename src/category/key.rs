//! Category keys as they appear in routed paths

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The closed set of product categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKey {
    HairWash,
    BodyWash,
    Cleanser,
    Conditioner,
    Lotion,
}

impl CategoryKey {
    /// Every category, in menu order.
    pub const ALL: [CategoryKey; 5] = [
        CategoryKey::HairWash,
        CategoryKey::BodyWash,
        CategoryKey::Cleanser,
        CategoryKey::Conditioner,
        CategoryKey::Lotion,
    ];

    /// Path segment for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryKey::HairWash => "hairwash",
            CategoryKey::BodyWash => "bodywash",
            CategoryKey::Cleanser => "cleanser",
            CategoryKey::Conditioner => "conditioner",
            CategoryKey::Lotion => "lotion",
        }
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Routed path named a category that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category '{0}'")]
pub struct UnknownCategory(pub String);

impl UnknownCategory {
    pub fn code(&self) -> &'static str {
        "MATCHUP_UNKNOWN_CATEGORY"
    }
}

impl FromStr for CategoryKey {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hairwash" | "shampoo" => Ok(CategoryKey::HairWash),
            "bodywash" => Ok(CategoryKey::BodyWash),
            "cleanser" => Ok(CategoryKey::Cleanser),
            "conditioner" => Ok(CategoryKey::Conditioner),
            "lotion" => Ok(CategoryKey::Lotion),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_path_segment() {
        for key in CategoryKey::ALL {
            assert_eq!(key.as_str().parse::<CategoryKey>(), Ok(key));
        }
    }

    #[test]
    fn test_legacy_alias() {
        assert_eq!("shampoo".parse::<CategoryKey>(), Ok(CategoryKey::HairWash));
    }

    #[test]
    fn test_unknown_category() {
        let err = "sunscreen".parse::<CategoryKey>().unwrap_err();
        assert_eq!(err.code(), "MATCHUP_UNKNOWN_CATEGORY");
        assert!(err.to_string().contains("sunscreen"));
    }

    #[test]
    fn test_serde_matches_path_segment() {
        let json = serde_json::to_string(&CategoryKey::BodyWash).unwrap();
        assert_eq!(json, "\"bodywash\"");
    }
}
