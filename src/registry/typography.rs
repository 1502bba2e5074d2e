use super::{add, add_scale};
use crate::theme::{DEFAULT_FONTS, DEFAULT_FONT_WEIGHTS, DEFAULT_TEXT};
use crate::trie::UtilityTrie;

// ─── Text style tables ──────────────────────────────────────────────────────

const TEXT_ALIGN: &[(&str, &str)] = &[
    ("left",    "left"),
    ("center",  "center"),
    ("right",   "right"),
    ("justify", "justify"),
    ("start",   "start"),
    ("end",     "end"),
];

const TRANSFORM: &[(&str, &str)] = &[
    ("uppercase",   "uppercase"),
    ("lowercase",   "lowercase"),
    ("capitalize",  "capitalize"),
    ("normal-case", "none"),
];

const DECORATION_LINE: &[(&str, &str)] = &[
    ("underline",    "underline"),
    ("overline",     "overline"),
    ("line-through", "line-through"),
    ("no-underline", "none"),
];

const DECORATION_STYLE: &[(&str, &str)] = &[
    ("solid",  "solid"),
    ("double", "double"),
    ("dotted", "dotted"),
    ("dashed", "dashed"),
    ("wavy",   "wavy"),
];

const DECORATION_THICKNESS: &[(&str, &str)] = &[
    ("auto",      "auto"),
    ("from-font", "from-font"),
    ("0",         "0px"),
    ("1",         "1px"),
    ("2",         "2px"),
    ("4",         "4px"),
    ("8",         "8px"),
];

const UNDERLINE_OFFSET: &[(&str, &str)] = &[
    ("auto", "auto"),
    ("0",    "0px"),
    ("1",    "1px"),
    ("2",    "2px"),
    ("4",    "4px"),
    ("8",    "8px"),
];

const WHITESPACE: &[(&str, &str)] = &[
    ("normal",       "normal"),
    ("nowrap",       "nowrap"),
    ("pre",          "pre"),
    ("pre-line",     "pre-line"),
    ("pre-wrap",     "pre-wrap"),
    ("break-spaces", "break-spaces"),
];

const TEXT_WRAP: &[(&str, &str)] = &[
    ("wrap",    "wrap"),
    ("nowrap",  "nowrap"),
    ("balance", "balance"),
    ("pretty",  "pretty"),
];

const LEADING: &[(&str, &str)] = &[
    ("none",    "1"),
    ("tight",   "1.25"),
    ("snug",    "1.375"),
    ("normal",  "1.5"),
    ("relaxed", "1.625"),
    ("loose",   "2"),
];

const TRACKING: &[(&str, &str)] = &[
    ("tighter", "-0.05em"),
    ("tight",   "-0.025em"),
    ("normal",  "0em"),
    ("wide",    "0.025em"),
    ("wider",   "0.05em"),
    ("widest",  "0.1em"),
];

const LIST_TYPE: &[(&str, &str)] = &[
    ("none",    "none"),
    ("disc",    "disc"),
    ("decimal", "decimal"),
];

const LIST_POSITION: &[(&str, &str)] = &[
    ("inside",  "inside"),
    ("outside", "outside"),
];

const VERTICAL_ALIGN: &[(&str, &str)] = &[
    ("baseline",    "baseline"),
    ("top",         "top"),
    ("middle",      "middle"),
    ("bottom",      "bottom"),
    ("text-top",    "text-top"),
    ("text-bottom", "text-bottom"),
    ("sub",         "sub"),
    ("super",       "super"),
];

pub(super) fn register(trie: &mut UtilityTrie) {
    for (name, _, _) in DEFAULT_TEXT {
        let size = format!("var(--text-{name})");
        let line_height = format!("var(--text-{name}--line-height)");
        add(trie, &format!("text-{name}"), &[
            ("font-size", size.as_str()),
            ("line-height", line_height.as_str()),
        ]);
    }
    for (name, _) in DEFAULT_FONT_WEIGHTS {
        let value = format!("var(--font-weight-{name})");
        add(trie, &format!("font-{name}"), &[("font-weight", value.as_str())]);
    }
    for (name, _) in DEFAULT_FONTS {
        let value = format!("var(--font-{name})");
        add(trie, &format!("font-{name}"), &[("font-family", value.as_str())]);
    }

    add(trie, "italic", &[("font-style", "italic")]);
    add(trie, "not-italic", &[("font-style", "normal")]);

    add_scale(trie, "text", &["text-align"], TEXT_ALIGN);
    for (class, value) in TRANSFORM {
        add(trie, class, &[("text-transform", *value)]);
    }
    for (class, value) in DECORATION_LINE {
        add(trie, class, &[("text-decoration-line", *value)]);
    }
    add_scale(trie, "decoration", &["text-decoration-style"], DECORATION_STYLE);
    add_scale(trie, "decoration", &["text-decoration-thickness"], DECORATION_THICKNESS);
    add_scale(trie, "underline-offset", &["text-underline-offset"], UNDERLINE_OFFSET);

    add(trie, "truncate", &[
        ("overflow", "hidden"),
        ("text-overflow", "ellipsis"),
        ("white-space", "nowrap"),
    ]);
    add(trie, "text-ellipsis", &[("text-overflow", "ellipsis")]);
    add(trie, "text-clip", &[("text-overflow", "clip")]);

    add_scale(trie, "whitespace", &["white-space"], WHITESPACE);
    add_scale(trie, "text", &["text-wrap"], TEXT_WRAP);
    add(trie, "break-normal", &[("overflow-wrap", "normal"), ("word-break", "normal")]);
    add(trie, "break-words", &[("overflow-wrap", "break-word")]);
    add(trie, "break-all", &[("word-break", "break-all")]);
    add(trie, "break-keep", &[("word-break", "keep-all")]);
    add(trie, "wrap-anywhere", &[("overflow-wrap", "anywhere")]);

    add_scale(trie, "leading", &["line-height"], LEADING);
    add_scale(trie, "tracking", &["letter-spacing"], TRACKING);

    add(trie, "antialiased", &[
        ("-webkit-font-smoothing", "antialiased"),
        ("-moz-osx-font-smoothing", "grayscale"),
    ]);
    add(trie, "subpixel-antialiased", &[
        ("-webkit-font-smoothing", "auto"),
        ("-moz-osx-font-smoothing", "auto"),
    ]);

    add_scale(trie, "list", &["list-style-type"], LIST_TYPE);
    add_scale(trie, "list", &["list-style-position"], LIST_POSITION);
    add_scale(trie, "align", &["vertical-align"], VERTICAL_ALIGN);

    add(trie, "content-none", &[("content", "none")]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::render_body;

    #[test]
    fn text_helpers() {
        let mut trie = UtilityTrie::new();
        register(&mut trie);
        let body = |k: &str| render_body(&trie.search(k).unwrap().declarations);
        assert_eq!(body("text-center"), "text-align: center;");
        assert_eq!(body("text-balance"), "text-wrap: balance;");
        assert_eq!(
            body("truncate"),
            "overflow: hidden; text-overflow: ellipsis; white-space: nowrap;"
        );
        assert_eq!(body("leading-tight"), "line-height: 1.25;");
        assert_eq!(body("uppercase"), "text-transform: uppercase;");
        assert_eq!(body("font-semibold"), "font-weight: var(--font-weight-semibold);");
    }
}
