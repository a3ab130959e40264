//! CCSS parsing and rule accumulation.
//!
//! This module drives the conversion pipeline:
//!
//! - [`comments`]: per-line comment stripping with cross-line state
//! - [`indent`]: indentation-unit inference and nesting levels
//! - [`statement`]: classification into the three statement shapes
//! - [`flatten`]: Cartesian flattening of the selector-group stack
//! - [`properties`]: callback rewriting and prefix stacking
//! - [`rules`]: the accumulated output rules
//!
//! [`Parser`] owns the ordered callback list; each [`Parser::to_css`] call
//! runs the whole pipeline over one line sequence with fresh scope state.

pub mod comments;
pub mod flatten;
pub mod indent;
pub mod properties;
pub mod rules;
pub mod statement;

pub use flatten::flatten_selectors;
pub use properties::PropertyCallback;
pub use rules::{Rule, RuleSelector};
pub use statement::Statement;

use crate::emitter;
use crate::error::ParserError;
use comments::CommentStripper;
use indent::IndentTracker;

/// CCSS parser handling the conversion to the standard CSS syntax.
///
/// # Examples
///
/// ```rust
/// use ccss::Parser;
///
/// let mut parser = Parser::new();
/// parser.register_property_callback(|name, value| {
///     vec![(format!("{}-variant", name), value.to_string())]
/// });
///
/// let css = parser.to_css("a:\n    margin: 0\n".lines()).unwrap();
/// assert_eq!(css, "a {\n\tmargin-variant: 0;\n}\n");
/// ```
#[derive(Default)]
pub struct Parser {
    callbacks: Vec<PropertyCallback>,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callback invoked on every parsed property definition.
    ///
    /// Callbacks run in registration order and chain: each consumes the
    /// pairs produced by the previous one, and may replace a pair with
    /// zero, one, or many pairs.
    pub fn register_property_callback<F>(&mut self, callback: F)
    where
        F: Fn(&str, &str) -> Vec<(String, String)> + 'static,
    {
        self.callbacks.push(Box::new(callback));
    }

    /// Converts one sequence of source lines into flat CSS text.
    ///
    /// Every call starts from a clean scope stack, prefix stack, and rule
    /// buffer, so a `Parser` is reusable across sources (and across
    /// incremental callback registrations).
    pub fn to_css<I, S>(&self, lines: I) -> Result<String, ParserError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rules = self.parse_rules(lines)?;
        Ok(emitter::render(&rules))
    }

    fn parse_rules<I, S>(&self, lines: I) -> Result<Vec<Rule>, ParserError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stripper = CommentStripper::new();
        let mut indent = IndentTracker::new();
        let mut tree: Vec<Vec<String>> = Vec::new();
        let mut prefixes: Vec<String> = Vec::new();
        let mut rules: Vec<Rule> = Vec::new();
        let mut selectors_changed = false;

        for (idx, raw) in lines.into_iter().enumerate() {
            let lineno = idx + 1;

            let line = stripper.strip_line(raw.as_ref());
            if line.trim().is_empty() {
                continue;
            }

            let level = indent.advance(&line, lineno)?;

            // Pop to the new level: prefixes first, then selector groups.
            // Prefixes are pushed at arbitrary depths, so they come off
            // while the combined depth still exceeds the level.
            while tree.len() + prefixes.len() > level && !prefixes.is_empty() {
                prefixes.pop();
            }
            while tree.len() > level {
                tree.pop();
            }

            match statement::classify(line.trim()) {
                Some(Statement::Selector(group)) => {
                    tree.push(group);
                    selectors_changed = true;
                }
                Some(Statement::PropertyPrefix(prefix)) => {
                    prefixes.push(prefix);
                }
                Some(Statement::Definition { name, value }) => {
                    if tree.is_empty() {
                        return Err(ParserError::MissingSelector { line: lineno });
                    }
                    if selectors_changed {
                        rules.push(Rule::open(flatten_scope(&tree)));
                        selectors_changed = false;
                    }

                    let prefix = properties::prefix_concat(&prefixes);
                    let rule = rules.last_mut().expect("rule opened for current scope");
                    for (name, value) in properties::apply_callbacks(&self.callbacks, &name, &value)
                    {
                        rule.declarations
                            .push(properties::render_declaration(&prefix, &name, &value));
                    }
                }
                None => return Err(ParserError::UnexpectedStatement { line: lineno }),
            }
        }

        Ok(rules)
    }
}

/// Flattens the current scope stack into a rule selector, reinterpreting
/// an outermost `@media` selector as a block header for the inner scopes.
fn flatten_scope(tree: &[Vec<String>]) -> RuleSelector {
    let is_media = tree
        .first()
        .and_then(|group| group.first())
        .is_some_and(|sel| sel.starts_with("@media"));

    if is_media {
        RuleSelector::Media {
            query: tree[0][0].clone(),
            selectors: flatten_selectors(&tree[1..]).join(",\n"),
        }
    } else {
        RuleSelector::Plain(flatten_selectors(tree).join(",\n"))
    }
}
