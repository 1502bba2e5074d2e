use super::{add, add_scale};
use crate::trie::UtilityTrie;

// ─── Display ────────────────────────────────────────────────────────────────

const DISPLAY: &[(&str, &str)] = &[
    ("block",              "block"),
    ("inline-block",       "inline-block"),
    ("inline",             "inline"),
    ("flex",               "flex"),
    ("inline-flex",        "inline-flex"),
    ("grid",               "grid"),
    ("inline-grid",        "inline-grid"),
    ("contents",           "contents"),
    ("flow-root",          "flow-root"),
    ("table",              "table"),
    ("inline-table",       "inline-table"),
    ("table-caption",      "table-caption"),
    ("table-cell",         "table-cell"),
    ("table-column",       "table-column"),
    ("table-column-group", "table-column-group"),
    ("table-footer-group", "table-footer-group"),
    ("table-header-group", "table-header-group"),
    ("table-row-group",    "table-row-group"),
    ("table-row",          "table-row"),
    ("list-item",          "list-item"),
    ("hidden",             "none"),
];

// ─── Position / Visibility ──────────────────────────────────────────────────

const POSITION: &[&str] = &["static", "fixed", "absolute", "relative", "sticky"];

const VISIBILITY: &[(&str, &str)] = &[
    ("visible",   "visible"),
    ("invisible", "hidden"),
    ("collapse",  "collapse"),
];

// ─── Float / Clear ──────────────────────────────────────────────────────────

const FLOAT: &[(&str, &str)] = &[
    ("start", "inline-start"),
    ("end",   "inline-end"),
    ("left",  "left"),
    ("right", "right"),
    ("none",  "none"),
];

const CLEAR: &[(&str, &str)] = &[
    ("start", "inline-start"),
    ("end",   "inline-end"),
    ("left",  "left"),
    ("right", "right"),
    ("both",  "both"),
    ("none",  "none"),
];

// ─── Overflow ───────────────────────────────────────────────────────────────

const OVERFLOW: &[(&str, &str)] = &[
    ("auto",    "auto"),
    ("hidden",  "hidden"),
    ("clip",    "clip"),
    ("visible", "visible"),
    ("scroll",  "scroll"),
];

const OVERSCROLL: &[(&str, &str)] = &[
    ("auto",    "auto"),
    ("contain", "contain"),
    ("none",    "none"),
];

// ─── Object fit / position ──────────────────────────────────────────────────

const OBJECT: &[(&str, &str, &str)] = &[
    ("contain",      "object-fit",      "contain"),
    ("cover",        "object-fit",      "cover"),
    ("fill",         "object-fit",      "fill"),
    ("none",         "object-fit",      "none"),
    ("scale-down",   "object-fit",      "scale-down"),
    ("center",       "object-position", "center"),
    ("top",          "object-position", "top"),
    ("bottom",       "object-position", "bottom"),
    ("left",         "object-position", "left"),
    ("right",        "object-position", "right"),
    ("left-top",     "object-position", "left top"),
    ("left-bottom",  "object-position", "left bottom"),
    ("right-top",    "object-position", "right top"),
    ("right-bottom", "object-position", "right bottom"),
];

// ─── Z-index / Aspect / Columns / Breaks ────────────────────────────────────

const Z_INDEX: &[(&str, &str)] = &[
    ("0",    "0"),
    ("10",   "10"),
    ("20",   "20"),
    ("30",   "30"),
    ("40",   "40"),
    ("50",   "50"),
    ("auto", "auto"),
];

const ASPECT: &[(&str, &str)] = &[
    ("auto",   "auto"),
    ("square", "1 / 1"),
    ("video",  "16 / 9"),
];

const BREAKS: &[(&str, &str)] = &[
    ("auto",         "auto"),
    ("avoid",        "avoid"),
    ("all",          "all"),
    ("avoid-page",   "avoid-page"),
    ("page",         "page"),
    ("left",         "left"),
    ("right",        "right"),
    ("column",       "column"),
    ("avoid-column", "avoid-column"),
];

pub(super) fn register(trie: &mut UtilityTrie) {
    for (class, value) in DISPLAY {
        add(trie, class, &[("display", *value)]);
    }
    for pos in POSITION {
        add(trie, pos, &[("position", *pos)]);
    }
    for (class, value) in VISIBILITY {
        add(trie, class, &[("visibility", *value)]);
    }

    add(trie, "isolate", &[("isolation", "isolate")]);
    add(trie, "isolation-auto", &[("isolation", "auto")]);
    add(trie, "box-border", &[("box-sizing", "border-box")]);
    add(trie, "box-content", &[("box-sizing", "content-box")]);
    add(trie, "box-decoration-clone", &[
        ("-webkit-box-decoration-break", "clone"),
        ("box-decoration-break", "clone"),
    ]);
    add(trie, "box-decoration-slice", &[
        ("-webkit-box-decoration-break", "slice"),
        ("box-decoration-break", "slice"),
    ]);

    add_scale(trie, "float", &["float"], FLOAT);
    add_scale(trie, "clear", &["clear"], CLEAR);

    add_scale(trie, "overflow", &["overflow"], OVERFLOW);
    add_scale(trie, "overflow-x", &["overflow-x"], OVERFLOW);
    add_scale(trie, "overflow-y", &["overflow-y"], OVERFLOW);
    add_scale(trie, "overscroll", &["overscroll-behavior"], OVERSCROLL);
    add_scale(trie, "overscroll-x", &["overscroll-behavior-x"], OVERSCROLL);
    add_scale(trie, "overscroll-y", &["overscroll-behavior-y"], OVERSCROLL);

    for (name, prop, value) in OBJECT {
        add(trie, &format!("object-{name}"), &[(*prop, *value)]);
    }

    add_scale(trie, "z", &["z-index"], Z_INDEX);
    add_scale(trie, "aspect", &["aspect-ratio"], ASPECT);

    for n in 1..=12 {
        add(trie, &format!("columns-{n}"), &[("columns", n.to_string().as_str())]);
    }
    add(trie, "columns-auto", &[("columns", "auto")]);

    add_scale(trie, "break-before", &["break-before"], BREAKS);
    add_scale(trie, "break-after", &["break-after"], BREAKS);
    add_scale(trie, "break-inside", &["break-inside"], &BREAKS[..4]);

    add(trie, "@container", &[("container-type", "inline-size")]);
    add(trie, "@container-normal", &[("container-type", "normal")]);

    add(trie, "sr-only", &[
        ("position", "absolute"),
        ("width", "1px"),
        ("height", "1px"),
        ("padding", "0"),
        ("margin", "-1px"),
        ("overflow", "hidden"),
        ("clip", "rect(0, 0, 0, 0)"),
        ("white-space", "nowrap"),
        ("border-width", "0"),
    ]);
    add(trie, "not-sr-only", &[
        ("position", "static"),
        ("width", "auto"),
        ("height", "auto"),
        ("padding", "0"),
        ("margin", "0"),
        ("overflow", "visible"),
        ("clip", "auto"),
        ("white-space", "normal"),
    ]);
}
