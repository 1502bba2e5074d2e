//! Static utility tables and trie population.
//!
//! Each submodule enumerates one family of utilities and inserts one trie
//! entry per concrete class string. [`build_trie`] runs them all;
//! [`default_trie`] keeps one built instance for the whole process.

mod effects;
mod flexbox;
mod interactivity;
mod layout;
mod motion;
mod palette;
mod sizing;
mod spacing;
mod typography;

pub(crate) use motion::keyframes_css;
pub(crate) use spacing::{Family, SPACING_FAMILIES};

use crate::rule::{Declaration, Utility};
use crate::trie::UtilityTrie;
use once_cell::sync::Lazy;

/// Spacing-scale steps that get a static entry. Other numeric steps are
/// synthesized by the recipe resolver.
pub(crate) const SPACING_STEPS: &[&str] = &[
    "0", "0.5", "1", "1.5", "2", "2.5", "3", "3.5", "4", "5", "6", "7", "8", "9", "10", "11",
    "12", "14", "16", "20", "24", "28", "32", "36", "40", "44", "48", "52", "56", "60", "64",
    "72", "80", "96",
];

/// Fractional sizes shared by sizing, inset and basis utilities.
pub(crate) const FRACTIONS: &[(&str, &str)] = &[
    ("1/2",  "50%"),
    ("1/3",  "33.333333%"),
    ("2/3",  "66.666667%"),
    ("1/4",  "25%"),
    ("2/4",  "50%"),
    ("3/4",  "75%"),
    ("1/5",  "20%"),
    ("2/5",  "40%"),
    ("3/5",  "60%"),
    ("4/5",  "80%"),
    ("1/6",  "16.666667%"),
    ("2/6",  "33.333333%"),
    ("3/6",  "50%"),
    ("4/6",  "66.666667%"),
    ("5/6",  "83.333333%"),
    ("1/12", "8.333333%"),
    ("5/12", "41.666667%"),
    ("7/12", "58.333333%"),
    ("11/12", "91.666667%"),
];

/// `calc(var(--spacing) * N)` for a scale step.
pub(crate) fn spacing_value(step: &str) -> String {
    format!("calc(var(--spacing) * {step})")
}

/// Inserts a utility from static property pairs.
fn add(trie: &mut UtilityTrie, key: &str, props: &[(&str, &str)]) {
    trie.insert(key, Utility::new(props));
}

/// Inserts a utility that sets every property in `props` to `value`.
fn add_each(trie: &mut UtilityTrie, key: &str, props: &[&str], value: &str) {
    let decls = props
        .iter()
        .map(|p| Declaration::new(*p, value))
        .collect();
    trie.insert(key, Utility::from_declarations(decls));
}

/// Inserts `<prefix>-<name>` for every `(name, value)` pair, all setting `props`.
fn add_scale(trie: &mut UtilityTrie, prefix: &str, props: &[&str], scale: &[(&str, &str)]) {
    for (name, value) in scale {
        add_each(trie, &format!("{prefix}-{name}"), props, value);
    }
}

/// Builds a trie holding every static utility.
pub fn build_trie() -> UtilityTrie {
    let mut trie = UtilityTrie::new();
    layout::register(&mut trie);
    flexbox::register(&mut trie);
    spacing::register(&mut trie);
    sizing::register(&mut trie);
    typography::register(&mut trie);
    palette::register(&mut trie);
    effects::register(&mut trie);
    motion::register(&mut trie);
    interactivity::register(&mut trie);
    tracing::debug!(utilities = trie.len(), "static utility trie built");
    trie
}

static DEFAULT_TRIE: Lazy<UtilityTrie> = Lazy::new(build_trie);

/// Process-wide trie, built on first use. Initialization completes before any
/// caller observes the reference.
pub fn default_trie() -> &'static UtilityTrie {
    &DEFAULT_TRIE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::render_body;

    fn body(key: &str) -> String {
        let trie = default_trie();
        let utility = trie
            .search(key)
            .unwrap_or_else(|| panic!("{key} missing from trie"));
        render_body(&utility.declarations)
    }

    #[test]
    fn display_classes() {
        assert_eq!(body("flex"), "display: flex;");
        assert_eq!(body("hidden"), "display: none;");
        assert_eq!(body("inline-grid"), "display: inline-grid;");
    }

    #[test]
    fn padding_scale() {
        assert_eq!(body("p-4"), "padding: calc(var(--spacing) * 4);");
        assert_eq!(body("px-0.5"), "padding-inline: calc(var(--spacing) * 0.5);");
        assert_eq!(body("p-px"), "padding: 1px;");
    }

    #[test]
    fn margin_auto_and_negative() {
        assert_eq!(body("mx-auto"), "margin-inline: auto;");
        assert_eq!(body("-mt-2"), "margin-top: calc(var(--spacing) * -2);");
    }

    #[test]
    fn width_fraction_and_keywords() {
        assert_eq!(body("w-1/2"), "width: 50%;");
        assert_eq!(body("w-full"), "width: 100%;");
        assert_eq!(body("h-screen"), "height: 100vh;");
        assert_eq!(body("max-w-md"), "max-width: var(--container-md);");
        assert_eq!(
            body("size-8"),
            "width: calc(var(--spacing) * 8); height: calc(var(--spacing) * 8);"
        );
    }

    #[test]
    fn colors_reference_theme() {
        assert_eq!(body("bg-white"), "background-color: var(--color-white);");
        assert_eq!(body("text-primary"), "color: var(--color-primary);");
        assert_eq!(body("border-t-red-500"), "border-top-color: var(--color-red-500);");
        assert_eq!(body("fill-current"), "fill: currentColor;");
    }

    #[test]
    fn typography_scale() {
        assert_eq!(
            body("text-xl"),
            "font-size: var(--text-xl); line-height: var(--text-xl--line-height);"
        );
        assert_eq!(body("font-bold"), "font-weight: var(--font-weight-bold);");
        assert_eq!(body("font-mono"), "font-family: var(--font-mono);");
    }

    #[test]
    fn space_between_has_suffix() {
        let utility = default_trie().search("space-x-4").unwrap();
        assert_eq!(utility.selector_suffix, Some(" > :not(:last-child)"));
    }

    #[test]
    fn animations_carry_keyframes() {
        let utility = default_trie().search("animate-spin").unwrap();
        assert_eq!(utility.keyframes, Some("spin"));
        assert!(keyframes_css("spin").is_some());
    }

    #[test]
    fn unknown_class_is_absent() {
        assert!(default_trie().search("nonexistent-class-xyz").is_none());
        assert!(default_trie().search("p-13").is_none());
    }

    #[test]
    fn build_is_deterministic() {
        assert_eq!(build_trie().len(), default_trie().len());
    }
}
