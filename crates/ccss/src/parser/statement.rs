//! Statement classification for normalized CCSS lines.
//!
//! A trimmed, comment-free line is one of three things, tried in order:
//!
//! 1. A selector header: `selector[, selector...]:`
//! 2. A property-prefix header: `identifier->`
//! 3. A property definition: `name: value`
//!
//! Anything else is an unexpected statement.

use nom::bytes::complete::take_while1;
use nom::combinator::all_consuming;

/// One classified source statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `a, b.c:` — opens a selector scope with the comma-split group.
    Selector(Vec<String>),
    /// `font->` — opens a property-prefix scope.
    PropertyPrefix(String),
    /// `margin: 0` — a raw property definition.
    Definition { name: String, value: String },
}

/// Classifies a trimmed line, or returns `None` when it matches no
/// statement shape.
pub fn classify(line: &str) -> Option<Statement> {
    if let Some(selectors) = parse_selector_header(line) {
        return Some(Statement::Selector(selectors));
    }
    if let Some(prefix) = parse_prefix_header(line) {
        return Some(Statement::PropertyPrefix(prefix.to_string()));
    }
    parse_definition(line).map(|(name, value)| Statement::Definition {
        name: name.to_string(),
        value: value.to_string(),
    })
}

/// A selector header is any non-empty text ending in a bare `:`; the text
/// before the colon is split on commas and each piece trimmed.
fn parse_selector_header(line: &str) -> Option<Vec<String>> {
    let body = line.strip_suffix(':')?;
    if body.is_empty() {
        return None;
    }
    Some(body.split(',').map(|sel| sel.trim().to_string()).collect())
}

/// A prefix header is a single token of anything but `:`, `>`, and
/// whitespace, immediately followed by `->` at end of line.
fn parse_prefix_header(line: &str) -> Option<&str> {
    let name = line.strip_suffix("->")?;
    all_consuming(take_while1::<_, _, nom::error::Error<&str>>(|c: char| {
        c != ':' && c != '>' && !c.is_whitespace()
    }))(name)
    .ok()
    .map(|(_, name)| name)
}

/// Splits `name: value`. The name is the longest leading non-whitespace
/// run that still leaves a colon and a non-empty value, so `a:b: c`
/// yields the name `a:b`.
fn parse_definition(line: &str) -> Option<(&str, &str)> {
    let token_end = line.find(char::is_whitespace).unwrap_or(line.len());
    if token_end == 0 {
        return None;
    }

    // Longest-name case: the colon is the first thing after the token.
    let rest = line[token_end..].trim_start();
    if let Some(value) = rest.strip_prefix(':') {
        let value = value.trim_start();
        if !value.is_empty() {
            return Some((&line[..token_end], value));
        }
    }

    // Backtrack inside the token to the rightmost colon with a non-empty
    // tail.
    for idx in (1..token_end).rev() {
        if line.as_bytes()[idx] == b':' {
            let value = line[idx + 1..].trim_start();
            if !value.is_empty() {
                return Some((&line[..idx], value));
            }
        }
    }
    None
}
