//! Two-tier rule-based tag classifier
//!
//! Tier one applies language-independent patterns; tier two adds the
//! patterns idiomatic to the snippet's declared language, when a table
//! exists for it. The result is the union of both tiers. Classification
//! is deterministic: the same code and language always yield the same set.

use crate::domain::tags::rules::{common_table, language_table};
use crate::domain::tags::Category;
use crate::domain::Language;
use std::collections::BTreeSet;

/// Derive the auto-tag categories for a piece of code.
///
/// Unknown or unparseable language values are not an error; the
/// language-specific tier is simply skipped.
pub fn classify(code: &str, language: &str) -> BTreeSet<Category> {
    let mut categories = BTreeSet::new();
    if code.trim().is_empty() {
        return categories;
    }
    common_table().collect_matches(code, &mut categories);
    if let Ok(language) = language.parse::<Language>() {
        if let Some(table) = language_table(language) {
            table.collect_matches(code, &mut categories);
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_try_catch_block() {
        let categories = classify("try {\n  doWork();\n} catch (e) {}", "javascript");
        assert!(categories.contains(&Category::ErrorHandling));
    }

    #[test]
    fn test_classify_empty_code_yields_empty_set() {
        assert!(classify("", "javascript").is_empty());
        assert!(classify("   \n\t  ", "python").is_empty());
    }

    #[test]
    fn test_classify_unmatched_code_yields_empty_set() {
        assert!(classify("x", "plaintext").is_empty());
    }

    #[test]
    fn test_classify_is_deterministic() {
        let code = "async function load() {\n  const rows = await fetch('/api');\n}";
        assert_eq!(classify(code, "javascript"), classify(code, "javascript"));
    }

    #[test]
    fn test_language_tier_applies_only_for_known_language() {
        let code = "async def handler():\n    pass";
        let with_tier = classify(code, "python");
        assert!(with_tier.contains(&Category::Async));

        // Unknown languages skip the second tier entirely.
        let without_tier = classify(code, "klingon");
        assert!(!without_tier.contains(&Category::Async));
    }

    #[test]
    fn test_tiers_union_without_duplicates() {
        // `await` matches both the common table and the python table; the
        // set form guarantees one entry.
        let categories = classify("async def f():\n    await g()", "python");
        assert_eq!(
            categories.iter().filter(|c| **c == Category::Async).count(),
            1
        );
    }

    #[test]
    fn test_classify_multiple_categories() {
        let code = "for (const u of users) {\n  console.log(u.token);\n}";
        let categories = classify(code, "javascript");
        assert!(categories.contains(&Category::Debugging));
        assert!(categories.contains(&Category::Auth));
    }
}
