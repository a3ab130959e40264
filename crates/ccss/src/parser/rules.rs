//! Accumulated output rules.
//!
//! A [`Rule`] is opened lazily: the first property definition under a
//! changed selector scope flattens the scope stack and opens a rule;
//! later definitions at the same scope append to it. Selector headers on
//! their own never produce a rule.

/// The selector half of an accumulated rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleSelector {
    /// An ordinary flattened selector group, already `,\n`-joined.
    Plain(String),
    /// The `@media` idiom: the outermost selector's literal text is the
    /// block header, and only the inner scopes were flattened.
    Media { query: String, selectors: String },
}

/// One output rule: a flattened selector plus rendered `name: value;`
/// declaration strings in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub selector: RuleSelector,
    pub declarations: Vec<String>,
}

impl Rule {
    /// Opens an empty rule for a freshly flattened scope.
    pub fn open(selector: RuleSelector) -> Self {
        Self {
            selector,
            declarations: Vec::new(),
        }
    }
}
