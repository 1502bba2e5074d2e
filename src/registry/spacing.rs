use super::{add_each, spacing_value, FRACTIONS, SPACING_STEPS};
use crate::rule::{Declaration, Utility};
use crate::trie::UtilityTrie;

/// A utility family whose values come from the spacing scale.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Family {
    pub prefix: &'static str,
    pub props: &'static [&'static str],
    /// Accepts a leading `-` (`-mt-4`).
    pub negative: bool,
}

impl Family {
    const fn new(prefix: &'static str, props: &'static [&'static str]) -> Self {
        Self {
            prefix,
            props,
            negative: false,
        }
    }

    const fn signed(prefix: &'static str, props: &'static [&'static str]) -> Self {
        Self {
            prefix,
            props,
            negative: true,
        }
    }
}

/// Every family that multiplies `--spacing`. Shared with the numeric recipe
/// table so statically listed and synthesized steps agree.
pub(crate) const SPACING_FAMILIES: &[Family] = &[
    // Padding
    Family::new("p",  &["padding"]),
    Family::new("px", &["padding-inline"]),
    Family::new("py", &["padding-block"]),
    Family::new("ps", &["padding-inline-start"]),
    Family::new("pe", &["padding-inline-end"]),
    Family::new("pt", &["padding-top"]),
    Family::new("pr", &["padding-right"]),
    Family::new("pb", &["padding-bottom"]),
    Family::new("pl", &["padding-left"]),
    // Margin
    Family::signed("m",  &["margin"]),
    Family::signed("mx", &["margin-inline"]),
    Family::signed("my", &["margin-block"]),
    Family::signed("ms", &["margin-inline-start"]),
    Family::signed("me", &["margin-inline-end"]),
    Family::signed("mt", &["margin-top"]),
    Family::signed("mr", &["margin-right"]),
    Family::signed("mb", &["margin-bottom"]),
    Family::signed("ml", &["margin-left"]),
    // Gap
    Family::new("gap",   &["gap"]),
    Family::new("gap-x", &["column-gap"]),
    Family::new("gap-y", &["row-gap"]),
    // Inset
    Family::signed("inset",   &["inset"]),
    Family::signed("inset-x", &["inset-inline"]),
    Family::signed("inset-y", &["inset-block"]),
    Family::signed("start",   &["inset-inline-start"]),
    Family::signed("end",     &["inset-inline-end"]),
    Family::signed("top",     &["top"]),
    Family::signed("right",   &["right"]),
    Family::signed("bottom",  &["bottom"]),
    Family::signed("left",    &["left"]),
    // Sizing
    Family::new("w",     &["width"]),
    Family::new("h",     &["height"]),
    Family::new("min-w", &["min-width"]),
    Family::new("max-w", &["max-width"]),
    Family::new("min-h", &["min-height"]),
    Family::new("max-h", &["max-height"]),
    Family::new("size",  &["width", "height"]),
    Family::new("basis", &["flex-basis"]),
    // Typography
    Family::new("leading",   &["line-height"]),
    Family::signed("indent", &["text-indent"]),
    // Scrolling
    Family::signed("scroll-m", &["scroll-margin"]),
    Family::new("scroll-p",    &["scroll-padding"]),
];

const INSET_PREFIXES: &[&str] = &[
    "inset", "inset-x", "inset-y", "start", "end", "top", "right", "bottom", "left",
];

const MARGIN_PREFIXES: &[&str] = &["m", "mx", "my", "ms", "me", "mt", "mr", "mb", "ml"];

pub(super) fn register(trie: &mut UtilityTrie) {
    for family in SPACING_FAMILIES {
        for step in SPACING_STEPS {
            add_each(trie, &format!("{}-{step}", family.prefix), family.props, &spacing_value(step));
            if family.negative && *step != "0" {
                add_each(
                    trie,
                    &format!("-{}-{step}", family.prefix),
                    family.props,
                    &spacing_value(&format!("-{step}")),
                );
            }
        }
        add_each(trie, &format!("{}-px", family.prefix), family.props, "1px");
        if family.negative {
            add_each(trie, &format!("-{}-px", family.prefix), family.props, "-1px");
        }
    }

    for prefix in MARGIN_PREFIXES {
        let props = props_of(prefix);
        add_each(trie, &format!("{prefix}-auto"), props, "auto");
    }

    for prefix in INSET_PREFIXES {
        let props = props_of(prefix);
        add_each(trie, &format!("{prefix}-auto"), props, "auto");
        add_each(trie, &format!("{prefix}-full"), props, "100%");
        add_each(trie, &format!("-{prefix}-full"), props, "-100%");
        for (fraction, value) in FRACTIONS {
            add_each(trie, &format!("{prefix}-{fraction}"), props, value);
            add_each(trie, &format!("-{prefix}-{fraction}"), props, &format!("-{value}"));
        }
    }

    // ── space-x / space-y (margins between children) ──
    for step in SPACING_STEPS.iter().copied().chain(["px"]) {
        let value = if step == "px" { "1px".to_string() } else { spacing_value(step) };
        for (axis, prop) in [("x", "margin-inline-end"), ("y", "margin-block-end")] {
            trie.insert(
                &format!("space-{axis}-{step}"),
                Utility::from_declarations(vec![Declaration::new(prop, value.clone())])
                    .with_suffix(" > :not(:last-child)"),
            );
        }
    }
}

fn props_of(prefix: &str) -> &'static [&'static str] {
    SPACING_FAMILIES
        .iter()
        .find(|f| f.prefix == prefix)
        .map(|f| f.props)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::render_body;

    fn trie() -> UtilityTrie {
        let mut trie = UtilityTrie::new();
        register(&mut trie);
        trie
    }

    #[test]
    fn every_family_has_every_step() {
        let trie = trie();
        for family in SPACING_FAMILIES {
            for step in SPACING_STEPS {
                assert!(trie.contains(&format!("{}-{step}", family.prefix)));
            }
        }
    }

    #[test]
    fn negatives_only_for_signed_families() {
        let trie = trie();
        assert!(trie.contains("-m-4"));
        assert!(trie.contains("-top-1/2"));
        assert!(!trie.contains("-p-4"));
        assert!(!trie.contains("-m-0"));
    }

    #[test]
    fn inset_keywords() {
        let trie = trie();
        assert_eq!(render_body(&trie.search("inset-0").unwrap().declarations), "inset: calc(var(--spacing) * 0);");
        assert_eq!(render_body(&trie.search("top-full").unwrap().declarations), "top: 100%;");
        assert_eq!(render_body(&trie.search("-left-1/2").unwrap().declarations), "left: -50%;");
    }
}
