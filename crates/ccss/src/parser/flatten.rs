//! Selector flattening for nested CCSS scopes.
//!
//! A nested source block:
//!
//! ```css
//! #header, #footer:
//!     a:
//!         &:hover:
//!             color: red
//! ```
//!
//! flattens to the selector group `#header a:hover, #footer a:hover`.
//!
//! ## Combination rules
//!
//! - A tail starting with `&` drops the sigil and concatenates directly to
//!   its parent (parent-reference combination).
//! - Any other tail joins its parent with a single space (descendant
//!   combination).

/// Computes the Cartesian combination of a stack of selector groups,
/// outermost first.
///
/// The result is ordered with the head group's selectors as the outer
/// loop and the flattened tail as the inner loop, so output order is
/// deterministic and stable.
pub fn flatten_selectors(tree: &[Vec<String>]) -> Vec<String> {
    let Some((base, rest)) = tree.split_first() else {
        return Vec::new();
    };
    if rest.is_empty() {
        return base.clone();
    }

    let tails = flatten_selectors(rest);
    let mut selectors = Vec::with_capacity(base.len() * tails.len());
    for sel in base {
        for tail in &tails {
            match tail.strip_prefix('&') {
                // CASE: &:hover — concatenate directly to the parent
                Some(stripped) => selectors.push(format!("{}{}", sel, stripped)),
                // CASE: plain descendant — a single separating space
                None => selectors.push(format!("{} {}", sel, tail)),
            }
        }
    }
    selectors
}
