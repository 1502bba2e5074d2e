use super::{add, add_each, add_scale};
use crate::theme::{DEFAULT_RADIUS, DEFAULT_SHADOWS};
use crate::trie::UtilityTrie;

// ─── Borders ────────────────────────────────────────────────────────────────

const BORDER_SIDES: &[(&str, &[&str])] = &[
    ("border",   &["border-width"]),
    ("border-x", &["border-inline-width"]),
    ("border-y", &["border-block-width"]),
    ("border-s", &["border-inline-start-width"]),
    ("border-e", &["border-inline-end-width"]),
    ("border-t", &["border-top-width"]),
    ("border-r", &["border-right-width"]),
    ("border-b", &["border-bottom-width"]),
    ("border-l", &["border-left-width"]),
];

const BORDER_WIDTHS: &[&str] = &["0", "2", "4", "8"];

const LINE_STYLES: &[(&str, &str)] = &[
    ("solid",  "solid"),
    ("dashed", "dashed"),
    ("dotted", "dotted"),
    ("double", "double"),
    ("hidden", "hidden"),
    ("none",   "none"),
];

const RADIUS_CORNERS: &[(&str, &[&str])] = &[
    ("rounded",    &["border-radius"]),
    ("rounded-s",  &["border-start-start-radius", "border-end-start-radius"]),
    ("rounded-e",  &["border-start-end-radius", "border-end-end-radius"]),
    ("rounded-t",  &["border-top-left-radius", "border-top-right-radius"]),
    ("rounded-r",  &["border-top-right-radius", "border-bottom-right-radius"]),
    ("rounded-b",  &["border-bottom-right-radius", "border-bottom-left-radius"]),
    ("rounded-l",  &["border-top-left-radius", "border-bottom-left-radius"]),
    ("rounded-tl", &["border-top-left-radius"]),
    ("rounded-tr", &["border-top-right-radius"]),
    ("rounded-br", &["border-bottom-right-radius"]),
    ("rounded-bl", &["border-bottom-left-radius"]),
];

// ─── Backgrounds ────────────────────────────────────────────────────────────

const GRADIENT_DIRECTIONS: &[(&str, &str)] = &[
    ("t",  "to top"),
    ("tr", "to top right"),
    ("r",  "to right"),
    ("br", "to bottom right"),
    ("b",  "to bottom"),
    ("bl", "to bottom left"),
    ("l",  "to left"),
    ("tl", "to top left"),
];

const BG_SIZE: &[(&str, &str)] = &[
    ("auto",    "auto"),
    ("cover",   "cover"),
    ("contain", "contain"),
];

const BG_POSITION: &[(&str, &str)] = &[
    ("bottom",       "bottom"),
    ("center",       "center"),
    ("left",         "left"),
    ("left-bottom",  "left bottom"),
    ("left-top",     "left top"),
    ("right",        "right"),
    ("right-bottom", "right bottom"),
    ("right-top",    "right top"),
    ("top",          "top"),
];

const BG_REPEAT: &[(&str, &str)] = &[
    ("repeat",       "repeat"),
    ("no-repeat",    "no-repeat"),
    ("repeat-x",     "repeat-x"),
    ("repeat-y",     "repeat-y"),
    ("repeat-round", "round"),
    ("repeat-space", "space"),
];

const BG_ATTACHMENT: &[(&str, &str)] = &[
    ("fixed",  "fixed"),
    ("local",  "local"),
    ("scroll", "scroll"),
];

const BG_CLIP: &[(&str, &str)] = &[
    ("border",  "border-box"),
    ("padding", "padding-box"),
    ("content", "content-box"),
    ("text",    "text"),
];

// ─── Filters ────────────────────────────────────────────────────────────────

const BLUR: &[(&str, &str)] = &[
    ("none", ""),
    ("xs",   "4px"),
    ("sm",   "8px"),
    ("md",   "12px"),
    ("lg",   "16px"),
    ("xl",   "24px"),
    ("2xl",  "40px"),
    ("3xl",  "64px"),
];

const RING_WIDTHS: &[&str] = &["0", "1", "2", "4", "8"];

pub(super) fn register(trie: &mut UtilityTrie) {
    register_borders(trie);
    register_radius(trie);
    register_outline_ring(trie);
    register_shadows(trie);

    for n in (0..=100).step_by(5) {
        let value = format!("{n}%");
        add(trie, &format!("opacity-{n}"), &[("opacity", value.as_str())]);
    }

    for (name, width) in BLUR {
        if width.is_empty() {
            add(trie, &format!("blur-{name}"), &[("filter", "none")]);
            continue;
        }
        let value = format!("blur({width})");
        add(trie, &format!("blur-{name}"), &[("filter", value.as_str())]);
        add(trie, &format!("backdrop-blur-{name}"), &[("backdrop-filter", value.as_str())]);
    }

    register_backgrounds(trie);
}

fn register_borders(trie: &mut UtilityTrie) {
    for (prefix, props) in BORDER_SIDES {
        add_each(trie, prefix, props, "1px");
        for width in BORDER_WIDTHS {
            add_each(trie, &format!("{prefix}-{width}"), props, &format!("{width}px"));
        }
    }
    add_scale(trie, "border", &["border-style"], LINE_STYLES);
    add(trie, "border-collapse", &[("border-collapse", "collapse")]);
    add(trie, "border-separate", &[("border-collapse", "separate")]);
}

fn register_radius(trie: &mut UtilityTrie) {
    for (prefix, props) in RADIUS_CORNERS {
        add_each(trie, prefix, props, "0.25rem");
        add_each(trie, &format!("{prefix}-none"), props, "0");
        add_each(trie, &format!("{prefix}-full"), props, "calc(infinity * 1px)");
        for (name, _) in DEFAULT_RADIUS {
            add_each(trie, &format!("{prefix}-{name}"), props, &format!("var(--radius-{name})"));
        }
    }
}

fn register_outline_ring(trie: &mut UtilityTrie) {
    add(trie, "outline-none", &[("outline", "2px solid transparent"), ("outline-offset", "2px")]);
    add(trie, "outline-hidden", &[("outline", "2px solid transparent"), ("outline-offset", "2px")]);
    add(trie, "outline", &[("outline-style", "solid"), ("outline-width", "1px")]);
    for width in ["0", "1", "2", "4", "8"] {
        let px = format!("{width}px");
        add(trie, &format!("outline-{width}"), &[("outline-width", px.as_str())]);
        add(trie, &format!("outline-offset-{width}"), &[("outline-offset", px.as_str())]);
    }
    add_scale(trie, "outline", &["outline-style"], &LINE_STYLES[..4]);

    let ring = |width: &str| format!("0 0 0 {width}px var(--tw-ring-color, currentColor)");
    add(trie, "ring", &[("box-shadow", ring("1").as_str())]);
    add(trie, "ring-inset", &[("--tw-ring-inset", "inset")]);
    for width in RING_WIDTHS {
        add(trie, &format!("ring-{width}"), &[("box-shadow", ring(*width).as_str())]);
    }
}

fn register_shadows(trie: &mut UtilityTrie) {
    for (name, _) in DEFAULT_SHADOWS {
        let value = format!("var(--shadow-{name})");
        add(trie, &format!("shadow-{name}"), &[("box-shadow", value.as_str())]);
    }
    add(trie, "shadow", &[("box-shadow", "var(--shadow-sm)")]);
    add(trie, "shadow-none", &[("box-shadow", "0 0 #0000")]);
}

fn register_backgrounds(trie: &mut UtilityTrie) {
    for (suffix, direction) in GRADIENT_DIRECTIONS {
        let image = format!(
            "linear-gradient({direction}, var(--tw-gradient-from, transparent), var(--tw-gradient-to, transparent))"
        );
        add(trie, &format!("bg-linear-to-{suffix}"), &[("background-image", image.as_str())]);
        add(trie, &format!("bg-gradient-to-{suffix}"), &[("background-image", image.as_str())]);
    }
    add(trie, "bg-none", &[("background-image", "none")]);
    add_scale(trie, "bg", &["background-size"], BG_SIZE);
    add_scale(trie, "bg", &["background-position"], BG_POSITION);
    add_scale(trie, "bg", &["background-repeat"], BG_REPEAT);
    add_scale(trie, "bg", &["background-attachment"], BG_ATTACHMENT);
    add_scale(trie, "bg-clip", &["background-clip"], BG_CLIP);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::render_body;

    fn body(trie: &UtilityTrie, key: &str) -> String {
        render_body(&trie.search(key).unwrap().declarations)
    }

    #[test]
    fn border_and_radius_tokens() {
        let mut trie = UtilityTrie::new();
        register(&mut trie);
        assert_eq!(body(&trie, "border"), "border-width: 1px;");
        assert_eq!(body(&trie, "border-t-2"), "border-top-width: 2px;");
        assert_eq!(body(&trie, "border-dashed"), "border-style: dashed;");
        assert_eq!(body(&trie, "rounded-lg"), "border-radius: var(--radius-lg);");
        assert_eq!(
            body(&trie, "rounded-t-md"),
            "border-top-left-radius: var(--radius-md); border-top-right-radius: var(--radius-md);"
        );
        assert_eq!(body(&trie, "rounded-full"), "border-radius: calc(infinity * 1px);");
    }

    #[test]
    fn shadow_opacity_blur() {
        let mut trie = UtilityTrie::new();
        register(&mut trie);
        assert_eq!(body(&trie, "shadow-md"), "box-shadow: var(--shadow-md);");
        assert_eq!(body(&trie, "opacity-50"), "opacity: 50%;");
        assert_eq!(body(&trie, "blur-sm"), "filter: blur(8px);");
        assert_eq!(body(&trie, "blur-none"), "filter: none;");
        assert!(trie.contains("bg-linear-to-r"));
        assert!(!trie.contains("opacity-7"));
    }
}
