use super::{add_each, FRACTIONS};
use crate::theme::DEFAULT_CONTAINERS;
use crate::trie::UtilityTrie;

/// Width-like families: (prefix, properties, viewport unit for `screen`).
const WIDTH_FAMILIES: &[(&str, &[&str], &str)] = &[
    ("w",     &["width"],      "100vw"),
    ("min-w", &["min-width"],  "100vw"),
    ("max-w", &["max-width"],  "100vw"),
    ("h",     &["height"],     "100vh"),
    ("min-h", &["min-height"], "100vh"),
    ("max-h", &["max-height"], "100vh"),
    ("size",  &["width", "height"], "100vw"),
    ("basis", &["flex-basis"], "100vw"),
];

const KEYWORDS: &[(&str, &str)] = &[
    ("auto", "auto"),
    ("full", "100%"),
    ("min",  "min-content"),
    ("max",  "max-content"),
    ("fit",  "fit-content"),
];

const VIEWPORT_WIDTHS: &[(&str, &str)] = &[
    ("svw", "100svw"),
    ("lvw", "100lvw"),
    ("dvw", "100dvw"),
];

const VIEWPORT_HEIGHTS: &[(&str, &str)] = &[
    ("svh", "100svh"),
    ("lvh", "100lvh"),
    ("dvh", "100dvh"),
    ("lh",  "1lh"),
];

pub(super) fn register(trie: &mut UtilityTrie) {
    for (prefix, props, screen) in WIDTH_FAMILIES {
        for (name, value) in KEYWORDS {
            add_each(trie, &format!("{prefix}-{name}"), props, value);
        }
        add_each(trie, &format!("{prefix}-screen"), props, screen);
        for (fraction, value) in FRACTIONS {
            add_each(trie, &format!("{prefix}-{fraction}"), props, value);
        }
        let viewport = if prefix.ends_with('h') { VIEWPORT_HEIGHTS } else { VIEWPORT_WIDTHS };
        for (name, value) in viewport {
            add_each(trie, &format!("{prefix}-{name}"), props, value);
        }
    }

    // Container-scale widths: w-md, max-w-3xl, basis-xs, ...
    for prefix in ["w", "min-w", "max-w", "basis"] {
        let props: &[&str] = match prefix {
            "w" => &["width"],
            "min-w" => &["min-width"],
            "max-w" => &["max-width"],
            _ => &["flex-basis"],
        };
        for (name, _) in DEFAULT_CONTAINERS {
            add_each(trie, &format!("{prefix}-{name}"), props, &format!("var(--container-{name})"));
        }
    }

    add_each(trie, "max-w-none", &["max-width"], "none");
    add_each(trie, "max-h-none", &["max-height"], "none");
    add_each(trie, "max-w-prose", &["max-width"], "65ch");
    add_each(trie, "min-h-0", &["min-height"], "0");
    add_each(trie, "min-w-0", &["min-width"], "0");
}
