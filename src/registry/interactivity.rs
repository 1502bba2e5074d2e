use super::{add, add_scale};
use crate::trie::UtilityTrie;

const CURSORS: &[&str] = &[
    "auto", "default", "pointer", "wait", "text", "move", "help", "not-allowed", "none",
    "context-menu", "progress", "cell", "crosshair", "vertical-text", "alias", "copy",
    "no-drop", "grab", "grabbing", "all-scroll", "col-resize", "row-resize", "n-resize",
    "e-resize", "s-resize", "w-resize", "ne-resize", "nw-resize", "se-resize", "sw-resize",
    "ew-resize", "ns-resize", "nesw-resize", "nwse-resize", "zoom-in", "zoom-out",
];

const USER_SELECT: &[(&str, &str)] = &[
    ("none", "none"),
    ("text", "text"),
    ("all",  "all"),
    ("auto", "auto"),
];

const RESIZE: &[(&str, &str)] = &[
    ("none", "none"),
    ("y",    "vertical"),
    ("x",    "horizontal"),
];

const WILL_CHANGE: &[(&str, &str)] = &[
    ("auto",      "auto"),
    ("scroll",    "scroll-position"),
    ("contents",  "contents"),
    ("transform", "transform"),
];

const SCROLL_SNAP: &[(&str, &str, &str)] = &[
    ("snap-start",      "scroll-snap-align", "start"),
    ("snap-end",        "scroll-snap-align", "end"),
    ("snap-center",     "scroll-snap-align", "center"),
    ("snap-align-none", "scroll-snap-align", "none"),
    ("snap-normal",     "scroll-snap-stop",  "normal"),
    ("snap-always",     "scroll-snap-stop",  "always"),
    ("snap-none",       "scroll-snap-type",  "none"),
    ("snap-x",          "scroll-snap-type",  "x var(--tw-scroll-snap-strictness, proximity)"),
    ("snap-y",          "scroll-snap-type",  "y var(--tw-scroll-snap-strictness, proximity)"),
    ("snap-both",       "scroll-snap-type",  "both var(--tw-scroll-snap-strictness, proximity)"),
    ("snap-mandatory",  "--tw-scroll-snap-strictness", "mandatory"),
    ("snap-proximity",  "--tw-scroll-snap-strictness", "proximity"),
];

pub(super) fn register(trie: &mut UtilityTrie) {
    for cursor in CURSORS {
        add(trie, &format!("cursor-{cursor}"), &[("cursor", *cursor)]);
    }
    add(trie, "pointer-events-none", &[("pointer-events", "none")]);
    add(trie, "pointer-events-auto", &[("pointer-events", "auto")]);

    add_scale(trie, "select", &["-webkit-user-select", "user-select"], USER_SELECT);
    add_scale(trie, "resize", &["resize"], RESIZE);
    add(trie, "resize", &[("resize", "both")]);
    add(trie, "appearance-none", &[("appearance", "none")]);
    add(trie, "appearance-auto", &[("appearance", "auto")]);
    add_scale(trie, "will-change", &["will-change"], WILL_CHANGE);

    add(trie, "scroll-auto", &[("scroll-behavior", "auto")]);
    add(trie, "scroll-smooth", &[("scroll-behavior", "smooth")]);
    for (class, prop, value) in SCROLL_SNAP {
        add(trie, class, &[(*prop, *value)]);
    }
    add(trie, "touch-auto", &[("touch-action", "auto")]);
    add(trie, "touch-none", &[("touch-action", "none")]);
    add(trie, "touch-manipulation", &[("touch-action", "manipulation")]);

    // Tables
    add(trie, "table-auto", &[("table-layout", "auto")]);
    add(trie, "table-fixed", &[("table-layout", "fixed")]);
    add(trie, "caption-top", &[("caption-side", "top")]);
    add(trie, "caption-bottom", &[("caption-side", "bottom")]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::render_body;

    #[test]
    fn cursor_and_select() {
        let mut trie = UtilityTrie::new();
        register(&mut trie);
        assert_eq!(
            render_body(&trie.search("cursor-pointer").unwrap().declarations),
            "cursor: pointer;"
        );
        assert_eq!(
            render_body(&trie.search("select-none").unwrap().declarations),
            "-webkit-user-select: none; user-select: none;"
        );
        assert!(trie.contains("table-fixed"));
    }
}
