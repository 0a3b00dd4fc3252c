//! Detection rule tables for the tag classifier
//!
//! A rule table maps each category to an ordered list of case-insensitive
//! regular expressions. A category is detected when at least one of its
//! patterns matches the raw code text. Tables are compiled once at first use
//! and shared process-wide.

use crate::domain::tags::Category;
use crate::domain::Language;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Ordered mapping from category to compiled detection patterns.
pub struct RuleTable {
    rules: Vec<(Category, Vec<Regex>)>,
}

impl RuleTable {
    fn compile(table: &[(Category, &[&str])]) -> Self {
        let rules = table
            .iter()
            .map(|(category, patterns)| {
                let compiled = patterns
                    .iter()
                    .map(|pattern| {
                        Regex::new(&format!("(?i){}", pattern)).expect("invalid detection pattern")
                    })
                    .collect();
                (*category, compiled)
            })
            .collect();
        RuleTable { rules }
    }

    /// Insert every category whose patterns match `code` into `output`.
    pub fn collect_matches(&self, code: &str, output: &mut BTreeSet<Category>) {
        for (category, patterns) in &self.rules {
            if patterns.iter().any(|pattern| pattern.is_match(code)) {
                output.insert(*category);
            }
        }
    }
}

/// Language-independent detection patterns.
pub fn common_table() -> &'static RuleTable {
    static TABLE: OnceLock<RuleTable> = OnceLock::new();
    TABLE.get_or_init(|| {
        RuleTable::compile(&[
            (
                Category::Loop,
                &[
                    r"\b(for|while)\s*\(",
                    r"\b(forEach|map|filter|reduce)\s*\(",
                    r"\bdo\s*\{",
                ],
            ),
            (
                Category::Api,
                &[
                    r"\b(fetch|axios|XMLHttpRequest)\s*\(",
                    r"\b(http|https)\.(get|post|put|delete|patch)",
                ],
            ),
            (
                Category::ErrorHandling,
                &[r"\btry\s*\{", r"\bcatch\s*\(", r"\bthrow\s+"],
            ),
            (
                Category::ArrayOps,
                &[
                    r"\b(map|filter|reduce|find|some|every|includes)\s*\(",
                    r"\b(push|pop|shift|unshift|splice|slice)\s*\(",
                ],
            ),
            (
                Category::Debugging,
                &[
                    r"\bconsole\.(log|error|warn|info|debug)\s*\(",
                    r"\bdebugger\b",
                ],
            ),
            (
                Category::Async,
                &[
                    r"\basync\s+function\b",
                    r"\bawait\s+",
                    r"\bPromise\.(all|race|resolve|reject)\b",
                ],
            ),
            (
                Category::Database,
                &[
                    r"\b(mongodb|mongoose|sql|sequelize|prisma)\b",
                    r"\b(select|insert|update|delete|find|create|save)\b",
                ],
            ),
            (
                Category::Auth,
                &[
                    r"\b(jwt|token|auth|login|register|password|hash)\b",
                    r"\b(session|cookie|oauth|google|github)\b",
                ],
            ),
            (
                Category::Validation,
                &[
                    r"\b(validate|validation|isValid|required|optional)\b",
                    r"\b(zod|joi|yup|validator)\b",
                ],
            ),
            (
                Category::Utility,
                &[
                    r"\b(utils|helpers|format|parse|stringify|encode|decode)\b",
                    r"\b(date|time|number|string|array|object)\b",
                ],
            ),
            (
                Category::Ui,
                &[
                    r"\b(react|vue|angular|svelte)\b",
                    r"\b(component|render|props|state|style|css)\b",
                ],
            ),
            (
                Category::Testing,
                &[
                    r"\b(jest|mocha|chai|cypress|test|spec|expect)\b",
                    r"\b(describe|it|before|after|mock|spy)\b",
                ],
            ),
        ])
    })
}

/// Patterns idiomatic to one language, consulted in addition to the common
/// table (union, never replacement).
pub fn language_table(language: Language) -> Option<&'static RuleTable> {
    match language {
        Language::Javascript => Some(javascript_table()),
        Language::Typescript => Some(typescript_table()),
        Language::Python => Some(python_table()),
        _ => None,
    }
}

fn javascript_table() -> &'static RuleTable {
    static TABLE: OnceLock<RuleTable> = OnceLock::new();
    TABLE.get_or_init(|| {
        RuleTable::compile(&[(
            Category::Async,
            &[r"\bnew\s+Promise\b", r"\b\.then\(", r"\b\.catch\("],
        )])
    })
}

fn typescript_table() -> &'static RuleTable {
    static TABLE: OnceLock<RuleTable> = OnceLock::new();
    TABLE.get_or_init(|| {
        RuleTable::compile(&[(
            Category::Validation,
            &[r"\b(interface|type|enum)\b", r"\b(extends|implements)\b"],
        )])
    })
}

fn python_table() -> &'static RuleTable {
    static TABLE: OnceLock<RuleTable> = OnceLock::new();
    TABLE.get_or_init(|| {
        RuleTable::compile(&[
            (Category::Async, &[r"\basync\s+def\b", r"\bawait\b"]),
            (Category::Loop, &[r"\bfor\s+\w+\s+in\b", r"\bwhile\s+\w+\s*:"]),
        ])
    })
}
