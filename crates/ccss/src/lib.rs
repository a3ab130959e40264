//! # CCSS - an indentation-based CSS preprocessor
//!
//! CCSS is a simple indentation-structured language for CSS, compiled to
//! flat, standards-compliant stylesheets consumable by any browser. This
//! crate provides:
//!
//! - **Conversion**: turn CCSS source into CSS text with [`convert`] or
//!   the reusable [`Parser`]
//! - **Nesting**: indentation-driven selector scopes, flattened with
//!   descendant combination and the `&` parent reference
//! - **Prefixing**: `name->` scopes that dash-prefix every property
//!   declared under them
//! - **Rewriting**: pluggable property callbacks for vendor-prefix
//!   expansion and similar transforms
//!
//! ## Quick Start
//!
//! ```rust
//! let source = "\
//! #header, #footer:
//!     margin: 0
//!     a:
//!         &:hover:
//!             color: red
//! ";
//!
//! let css = ccss::convert(source).expect("valid CCSS");
//! assert_eq!(
//!     css,
//!     "#header,\n#footer {\n\tmargin: 0;\n}\n\
//!      #header a:hover,\n#footer a:hover {\n\tcolor: red;\n}\n"
//! );
//! ```
//!
//! ## Source language
//!
//! - Indentation defines nesting; the first indented line fixes the unit
//!   for the file.
//! - `selector[, selector...]:` opens a selector scope.
//! - `identifier->` opens a property-prefix scope (`font->` turns
//!   `size: .9em` into `font-size: .9em;`).
//! - `property: value` is a declaration.
//! - A leading `&` in a nested selector concatenates directly to the
//!   parent instead of descending.
//! - `//` starts a line comment (unless directly after a `:`, so URLs
//!   survive); `/* ... */` block comments may span lines.
//! - A top-level selector starting with `@media` groups its descendants
//!   inside one wrapping block.
//!
//! ## Modules
//!
//! - [`parser`]: the conversion pipeline and [`Parser`]
//! - [`emitter`]: CSS text rendering
//! - [`error`]: conversion error types

pub mod emitter;
pub mod error;
pub mod parser;

pub use error::ParserError;
pub use parser::{Parser, PropertyCallback};

/// Converts a CCSS source into a normal stylesheet.
///
/// Equivalent to running a fresh [`Parser`] with no callbacks over
/// `source.lines()`.
pub fn convert(source: &str) -> Result<String, ParserError> {
    Parser::new().to_css(source.lines())
}

/// Converts a CCSS source with one property callback registered.
///
/// # Examples
///
/// ```rust
/// let css = ccss::convert_with("a:\n    size: 10px\n", |name, value| {
///     vec![(format!("font-{}", name), value.to_string())]
/// })
/// .unwrap();
/// assert_eq!(css, "a {\n\tfont-size: 10px;\n}\n");
/// ```
pub fn convert_with<F>(source: &str, callback: F) -> Result<String, ParserError>
where
    F: Fn(&str, &str) -> Vec<(String, String)> + 'static,
{
    let mut parser = Parser::new();
    parser.register_property_callback(callback);
    parser.to_css(source.lines())
}
