use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Filter value clients send to mean "every category".
pub const ALL_CATEGORIES: &str = "all";

/// Topic tag carried by every article. The vocabulary is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Trending,
    Technology,
    Politics,
    Sports,
    Business,
    Entertainment,
    Health,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl Category {
    /// Every category in display order.
    pub const ALL: [Category; 7] = [
        Category::Trending,
        Category::Technology,
        Category::Politics,
        Category::Sports,
        Category::Business,
        Category::Entertainment,
        Category::Health,
    ];

    /// Wire identifier, matching the serde representation
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Trending => "trending",
            Category::Technology => "technology",
            Category::Politics => "politics",
            Category::Sports => "sports",
            Category::Business => "business",
            Category::Entertainment => "entertainment",
            Category::Health => "health",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Trending => "Trending",
            Category::Technology => "Technology",
            Category::Politics => "Politics",
            Category::Sports => "Sports",
            Category::Business => "Business",
            Category::Entertainment => "Entertainment",
            Category::Health => "Health",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match on the wire identifier.
impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_owned()))
    }
}
