//! CSS text rendering for accumulated rules.
//!
//! Rules are walked in creation order. Consecutive media rules that share
//! a query header render inside one wrapping block; a differing header or
//! a plain rule closes the open block first. Rule bodies are indented
//! with tabs, one level deeper inside a media block.

use crate::parser::rules::{Rule, RuleSelector};

/// Serializes accumulated rules as flat CSS text.
pub fn render(rules: &[Rule]) -> String {
    let mut out = String::new();
    let mut media_query: Option<&str> = None;

    for rule in rules {
        match &rule.selector {
            RuleSelector::Media { query, selectors } => {
                if media_query != Some(query.as_str()) {
                    if media_query.is_some() {
                        out.push_str("}\n");
                    }
                    media_query = Some(query.as_str());
                    out.push_str(query);
                    out.push_str(" {\n");
                }
                out.push('\t');
                out.push_str(selectors);
                out.push_str(" {\n\t\t");
                out.push_str(&rule.declarations.join("\n\t\t"));
                out.push_str("\n\t}\n");
            }
            RuleSelector::Plain(selectors) => {
                if media_query.is_some() {
                    out.push_str("}\n");
                    media_query = None;
                }
                out.push_str(selectors);
                out.push_str(" {\n\t");
                out.push_str(&rule.declarations.join("\n\t"));
                out.push_str("\n}\n");
            }
        }
    }

    if media_query.is_some() {
        out.push_str("}\n");
    }
    out
}
