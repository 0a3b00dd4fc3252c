//! Auto-tag category vocabulary

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed vocabulary of categories the classifier may assign.
///
/// User tags are free-form; auto tags are always drawn from this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Loop,
    Api,
    ErrorHandling,
    ArrayOps,
    Debugging,
    Async,
    Database,
    Auth,
    Validation,
    Utility,
    Ui,
    Testing,
}

impl Category {
    /// All categories, in the order the rule table consults them.
    pub const ALL: [Category; 12] = [
        Category::Loop,
        Category::Api,
        Category::ErrorHandling,
        Category::ArrayOps,
        Category::Debugging,
        Category::Async,
        Category::Database,
        Category::Auth,
        Category::Validation,
        Category::Utility,
        Category::Ui,
        Category::Testing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Loop => "loop",
            Category::Api => "api",
            Category::ErrorHandling => "error-handling",
            Category::ArrayOps => "array-ops",
            Category::Debugging => "debugging",
            Category::Async => "async",
            Category::Database => "database",
            Category::Auth => "auth",
            Category::Validation => "validation",
            Category::Utility => "utility",
            Category::Ui => "ui",
            Category::Testing => "testing",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Category::ALL
            .iter()
            .find(|c| c.as_str() == normalized)
            .copied()
            .ok_or_else(|| format!("unknown category: '{}'", s))
    }
}
