//! Menu categories

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The fixed set of menu categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Starters and small plates.
    Appetizer,
    /// Mains.
    MainCourse,
    /// Desserts.
    Dessert,
    /// Drinks.
    Beverage,
}

/// Error returned when parsing an unknown category value.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct CategoryParseError(pub String);

impl Category {
    /// All categories, in menu display order.
    pub const ALL: [Category; 4] = [
        Category::Appetizer,
        Category::MainCourse,
        Category::Dessert,
        Category::Beverage,
    ];

    /// The canonical wire/storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Appetizer => "appetizer",
            Category::MainCourse => "main-course",
            Category::Dessert => "dessert",
            Category::Beverage => "beverage",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "appetizer" => Ok(Category::Appetizer),
            "main-course" => Ok(Category::MainCourse),
            "dessert" => Ok(Category::Dessert),
            "beverage" => Ok(Category::Beverage),
            other => Err(CategoryParseError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_strings() {
        for category in Category::ALL {
            assert_eq!(
                category.as_str().parse::<Category>(),
                Ok(category),
                "category {category} should round-trip"
            );
        }
    }

    #[test]
    fn rejects_unknown_values() {
        let result = "sides".parse::<Category>();

        assert_eq!(result, Err(CategoryParseError("sides".to_string())));
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&Category::MainCourse).expect("serialize");

        assert_eq!(json, "\"main-course\"");
    }
}
