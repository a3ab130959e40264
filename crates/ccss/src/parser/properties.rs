//! The property pipeline: callback rewriting, prefix stacking, and
//! declaration rendering.

/// An ordered property-rewriting hook.
///
/// A callback receives one `(name, value)` pair and returns zero or more
/// replacement pairs. Registered callbacks chain: each one consumes the
/// pairs produced by the callback before it.
pub type PropertyCallback = Box<dyn Fn(&str, &str) -> Vec<(String, String)>>;

/// Pipes one raw pair through every callback in registration order.
pub fn apply_callbacks(
    callbacks: &[PropertyCallback],
    name: &str,
    value: &str,
) -> Vec<(String, String)> {
    let mut pairs = vec![(name.to_string(), value.to_string())];
    for callback in callbacks {
        pairs = pairs
            .iter()
            .flat_map(|(name, value)| callback(name, value))
            .collect();
    }
    pairs
}

/// The active prefix concatenation: stack entries dash-joined with a
/// trailing dash, or empty when no prefix scope is open.
pub fn prefix_concat(prefixes: &[String]) -> String {
    if prefixes.is_empty() {
        String::new()
    } else {
        format!("{}-", prefixes.join("-"))
    }
}

/// Renders one rewritten pair as a `name: value;` declaration.
pub fn render_declaration(prefix: &str, name: &str, value: &str) -> String {
    format!("{}{}: {};", prefix, name, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_prefix_stack_renders_bare_name() {
        assert_eq!(prefix_concat(&[]), "");
        assert_eq!(render_declaration("", "margin", "0"), "margin: 0;");
    }

    #[test]
    fn prefixes_join_with_dashes() {
        let prefixes = vec!["font".to_string()];
        assert_eq!(prefix_concat(&prefixes), "font-");

        let stacked = vec!["a".to_string(), "b".to_string()];
        assert_eq!(prefix_concat(&stacked), "a-b-");
    }

    #[test]
    fn callbacks_chain_in_registration_order() {
        let callbacks: Vec<PropertyCallback> = vec![
            Box::new(|name, value| vec![(format!("{}-one", name), value.to_string())]),
            Box::new(|name, value| vec![(format!("{}-two", name), value.to_string())]),
        ];
        assert_eq!(
            apply_callbacks(&callbacks, "margin", "0"),
            vec![("margin-one-two".to_string(), "0".to_string())]
        );
    }

    #[test]
    fn a_callback_may_expand_one_pair_into_several() {
        let callbacks: Vec<PropertyCallback> = vec![Box::new(|name, value| {
            vec![
                (format!("-moz-{}", name), value.to_string()),
                (name.to_string(), value.to_string()),
            ]
        })];
        assert_eq!(
            apply_callbacks(&callbacks, "border-radius", "3px"),
            vec![
                ("-moz-border-radius".to_string(), "3px".to_string()),
                ("border-radius".to_string(), "3px".to_string()),
            ]
        );
    }
}
