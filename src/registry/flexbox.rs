use super::{add, add_scale};
use crate::trie::UtilityTrie;

// ─── Flex ───────────────────────────────────────────────────────────────────

const FLEX_DIRECTION: &[(&str, &str)] = &[
    ("row",         "row"),
    ("row-reverse", "row-reverse"),
    ("col",         "column"),
    ("col-reverse", "column-reverse"),
];

const FLEX_WRAP: &[(&str, &str)] = &[
    ("wrap",         "wrap"),
    ("wrap-reverse", "wrap-reverse"),
    ("nowrap",       "nowrap"),
];

const FLEX_SHORTHAND: &[(&str, &str)] = &[
    ("1",       "1 1 0%"),
    ("auto",    "1 1 auto"),
    ("initial", "0 1 auto"),
    ("none",    "none"),
];

// ─── Grid ───────────────────────────────────────────────────────────────────

const GRID_FLOW: &[(&str, &str)] = &[
    ("row",       "row"),
    ("col",       "column"),
    ("dense",     "dense"),
    ("row-dense", "row dense"),
    ("col-dense", "column dense"),
];

const AUTO_TRACKS: &[(&str, &str)] = &[
    ("auto", "auto"),
    ("min",  "min-content"),
    ("max",  "max-content"),
    ("fr",   "minmax(0, 1fr)"),
];

// ─── Alignment ──────────────────────────────────────────────────────────────

const JUSTIFY_CONTENT: &[(&str, &str)] = &[
    ("normal",  "normal"),
    ("start",   "flex-start"),
    ("end",     "flex-end"),
    ("center",  "center"),
    ("between", "space-between"),
    ("around",  "space-around"),
    ("evenly",  "space-evenly"),
    ("stretch", "stretch"),
];

const JUSTIFY_ITEMS: &[(&str, &str)] = &[
    ("start",   "start"),
    ("end",     "end"),
    ("center",  "center"),
    ("stretch", "stretch"),
    ("normal",  "normal"),
];

const JUSTIFY_SELF: &[(&str, &str)] = &[
    ("auto",    "auto"),
    ("start",   "start"),
    ("end",     "end"),
    ("center",  "center"),
    ("stretch", "stretch"),
];

const ALIGN_ITEMS: &[(&str, &str)] = &[
    ("start",    "flex-start"),
    ("end",      "flex-end"),
    ("center",   "center"),
    ("baseline", "baseline"),
    ("stretch",  "stretch"),
];

const ALIGN_CONTENT: &[(&str, &str)] = &[
    ("normal",   "normal"),
    ("center",   "center"),
    ("start",    "flex-start"),
    ("end",      "flex-end"),
    ("between",  "space-between"),
    ("around",   "space-around"),
    ("evenly",   "space-evenly"),
    ("baseline", "baseline"),
    ("stretch",  "stretch"),
];

const ALIGN_SELF: &[(&str, &str)] = &[
    ("auto",     "auto"),
    ("start",    "flex-start"),
    ("end",      "flex-end"),
    ("center",   "center"),
    ("stretch",  "stretch"),
    ("baseline", "baseline"),
];

const PLACE: &[(&str, &str)] = &[
    ("start",   "start"),
    ("end",     "end"),
    ("center",  "center"),
    ("stretch", "stretch"),
];

const PLACE_CONTENT_EXTRA: &[(&str, &str)] = &[
    ("between",  "space-between"),
    ("around",   "space-around"),
    ("evenly",   "space-evenly"),
    ("baseline", "baseline"),
];

pub(super) fn register(trie: &mut UtilityTrie) {
    add_scale(trie, "flex", &["flex-direction"], FLEX_DIRECTION);
    add_scale(trie, "flex", &["flex-wrap"], FLEX_WRAP);
    add_scale(trie, "flex", &["flex"], FLEX_SHORTHAND);

    add(trie, "grow", &[("flex-grow", "1")]);
    add(trie, "grow-0", &[("flex-grow", "0")]);
    add(trie, "shrink", &[("flex-shrink", "1")]);
    add(trie, "shrink-0", &[("flex-shrink", "0")]);

    for n in 1..=12 {
        let value = n.to_string();
        add(trie, &format!("order-{n}"), &[("order", value.as_str())]);
    }
    add(trie, "order-first", &[("order", "-9999")]);
    add(trie, "order-last", &[("order", "9999")]);
    add(trie, "order-none", &[("order", "0")]);

    register_grid(trie);

    add_scale(trie, "justify", &["justify-content"], JUSTIFY_CONTENT);
    add_scale(trie, "justify-items", &["justify-items"], JUSTIFY_ITEMS);
    add_scale(trie, "justify-self", &["justify-self"], JUSTIFY_SELF);
    add_scale(trie, "items", &["align-items"], ALIGN_ITEMS);
    add_scale(trie, "content", &["align-content"], ALIGN_CONTENT);
    add_scale(trie, "self", &["align-self"], ALIGN_SELF);
    add_scale(trie, "place-content", &["place-content"], PLACE);
    add_scale(trie, "place-content", &["place-content"], PLACE_CONTENT_EXTRA);
    add_scale(trie, "place-items", &["place-items"], PLACE);
    add_scale(trie, "place-self", &["place-self"], PLACE);
    add(trie, "place-self-auto", &[("place-self", "auto")]);
}

fn register_grid(trie: &mut UtilityTrie) {
    for n in 1..=12 {
        let template = format!("repeat({n}, minmax(0, 1fr))");
        let span = format!("span {n} / span {n}");
        add(trie, &format!("grid-cols-{n}"), &[("grid-template-columns", template.as_str())]);
        add(trie, &format!("grid-rows-{n}"), &[("grid-template-rows", template.as_str())]);
        add(trie, &format!("col-span-{n}"), &[("grid-column", span.as_str())]);
        add(trie, &format!("row-span-{n}"), &[("grid-row", span.as_str())]);
    }
    for n in 1..=13 {
        let line = n.to_string();
        add(trie, &format!("col-start-{n}"), &[("grid-column-start", line.as_str())]);
        add(trie, &format!("col-end-{n}"), &[("grid-column-end", line.as_str())]);
        add(trie, &format!("row-start-{n}"), &[("grid-row-start", line.as_str())]);
        add(trie, &format!("row-end-{n}"), &[("grid-row-end", line.as_str())]);
    }

    for axis in ["cols", "rows"] {
        let prop = if axis == "cols" { "grid-template-columns" } else { "grid-template-rows" };
        add(trie, &format!("grid-{axis}-none"), &[(prop, "none")]);
        add(trie, &format!("grid-{axis}-subgrid"), &[(prop, "subgrid")]);
    }

    add(trie, "col-auto", &[("grid-column", "auto")]);
    add(trie, "col-span-full", &[("grid-column", "1 / -1")]);
    add(trie, "col-start-auto", &[("grid-column-start", "auto")]);
    add(trie, "col-end-auto", &[("grid-column-end", "auto")]);
    add(trie, "row-auto", &[("grid-row", "auto")]);
    add(trie, "row-span-full", &[("grid-row", "1 / -1")]);
    add(trie, "row-start-auto", &[("grid-row-start", "auto")]);
    add(trie, "row-end-auto", &[("grid-row-end", "auto")]);

    add_scale(trie, "grid-flow", &["grid-auto-flow"], GRID_FLOW);
    add_scale(trie, "auto-cols", &["grid-auto-columns"], AUTO_TRACKS);
    add_scale(trie, "auto-rows", &["grid-auto-rows"], AUTO_TRACKS);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::render_body;

    #[test]
    fn grid_templates_and_spans() {
        let mut trie = UtilityTrie::new();
        register(&mut trie);
        let body = |k: &str| render_body(&trie.search(k).unwrap().declarations);
        assert_eq!(body("grid-cols-3"), "grid-template-columns: repeat(3, minmax(0, 1fr));");
        assert_eq!(body("col-span-2"), "grid-column: span 2 / span 2;");
        assert_eq!(body("col-span-full"), "grid-column: 1 / -1;");
        assert_eq!(body("flex-col"), "flex-direction: column;");
        assert_eq!(body("flex-1"), "flex: 1 1 0%;");
        assert_eq!(body("justify-between"), "justify-content: space-between;");
        assert_eq!(body("items-center"), "align-items: center;");
    }
}
