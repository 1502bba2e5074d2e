use super::{add, add_scale};
use crate::rule::{declarations, Utility};
use crate::theme::{DEFAULT_DURATIONS, DEFAULT_EASINGS};
use crate::trie::UtilityTrie;

// ─── Transitions ────────────────────────────────────────────────────────────

const TIMING: &str = "var(--default-transition-timing-function, cubic-bezier(0.4, 0, 0.2, 1))";
const DURATION: &str = "var(--default-transition-duration, 150ms)";

const TRANSITIONS: &[(&str, &str)] = &[
    ("transition", "color, background-color, border-color, outline-color, text-decoration-color, fill, stroke, --tw-gradient-from, --tw-gradient-to, opacity, box-shadow, transform, translate, scale, rotate, filter, backdrop-filter"),
    ("transition-all", "all"),
    ("transition-colors", "color, background-color, border-color, outline-color, text-decoration-color, fill, stroke, --tw-gradient-from, --tw-gradient-to"),
    ("transition-opacity", "opacity"),
    ("transition-shadow", "box-shadow"),
    ("transition-transform", "transform, translate, scale, rotate"),
];

const DELAYS: &[&str] = &["0", "75", "100", "150", "200", "300", "500", "700", "1000"];

// ─── Animations ─────────────────────────────────────────────────────────────

/// `(utility suffix, animation value, keyframes name)`.
const ANIMATIONS: &[(&str, &str, &str)] = &[
    ("spin",   "spin 1s linear infinite",                             "spin"),
    ("ping",   "ping 1s cubic-bezier(0, 0, 0.2, 1) infinite",         "ping"),
    ("pulse",  "pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite",      "pulse"),
    ("bounce", "bounce 1s infinite",                                  "bounce"),
];

const KEYFRAMES: &[(&str, &str)] = &[
    ("spin", "@keyframes spin { to { transform: rotate(360deg); } }"),
    ("ping", "@keyframes ping { 75%, 100% { transform: scale(2); opacity: 0; } }"),
    ("pulse", "@keyframes pulse { 50% { opacity: 0.5; } }"),
    ("bounce", "@keyframes bounce { 0%, 100% { transform: translateY(-25%); animation-timing-function: cubic-bezier(0.8, 0, 1, 1); } 50% { transform: none; animation-timing-function: cubic-bezier(0, 0, 0.2, 1); } }"),
];

/// The `@keyframes` block for a built-in animation.
pub(crate) fn keyframes_css(name: &str) -> Option<&'static str> {
    KEYFRAMES.iter().find(|(n, _)| *n == name).map(|(_, css)| *css)
}

// ─── Transforms ─────────────────────────────────────────────────────────────

const ROTATIONS: &[&str] = &["0", "1", "2", "3", "6", "12", "45", "90", "180"];
const SCALES: &[&str] = &["0", "50", "75", "90", "95", "100", "105", "110", "125", "150"];
const TRANSLATE_STEPS: &[&str] = &["0", "0.5", "1", "2", "3", "4", "5", "6", "8", "10", "12", "16"];

pub(super) fn register(trie: &mut UtilityTrie) {
    for (class, properties) in TRANSITIONS {
        add(trie, class, &[
            ("transition-property", *properties),
            ("transition-timing-function", TIMING),
            ("transition-duration", DURATION),
        ]);
    }
    add(trie, "transition-none", &[("transition-property", "none")]);

    for (name, _) in DEFAULT_DURATIONS {
        let value = format!("var(--duration-{name})");
        add(trie, &format!("duration-{name}"), &[("transition-duration", value.as_str())]);
    }
    for delay in DELAYS {
        let value = format!("{delay}ms");
        add(trie, &format!("delay-{delay}"), &[("transition-delay", value.as_str())]);
    }
    for (name, _) in DEFAULT_EASINGS {
        let value = format!("var(--ease-{name})");
        add(trie, &format!("ease-{name}"), &[("transition-timing-function", value.as_str())]);
    }
    add(trie, "ease-linear", &[("transition-timing-function", "linear")]);

    for (suffix, value, keyframes) in ANIMATIONS {
        trie.insert(
            &format!("animate-{suffix}"),
            Utility::from_declarations(declarations(&[("animation", *value)]))
                .with_keyframes(*keyframes),
        );
    }
    add(trie, "animate-none", &[("animation", "none")]);

    register_transforms(trie);
}

fn register_transforms(trie: &mut UtilityTrie) {
    for step in TRANSLATE_STEPS {
        for axis in ["x", "y"] {
            translate(trie, &format!("translate-{axis}-{step}"), axis, &format!("calc(var(--spacing) * {step})"));
            if *step != "0" {
                translate(trie, &format!("-translate-{axis}-{step}"), axis, &format!("calc(var(--spacing) * -{step})"));
            }
        }
    }
    for axis in ["x", "y"] {
        translate(trie, &format!("translate-{axis}-full"), axis, "100%");
        translate(trie, &format!("-translate-{axis}-full"), axis, "-100%");
        translate(trie, &format!("translate-{axis}-1/2"), axis, "50%");
        translate(trie, &format!("-translate-{axis}-1/2"), axis, "-50%");
    }

    for deg in ROTATIONS {
        let value = format!("{deg}deg");
        add(trie, &format!("rotate-{deg}"), &[("rotate", value.as_str())]);
        if *deg != "0" {
            let negative = format!("-{deg}deg");
            add(trie, &format!("-rotate-{deg}"), &[("rotate", negative.as_str())]);
        }
    }

    for scale in SCALES {
        let value = format!("{scale}%");
        add(trie, &format!("scale-{scale}"), &[
            ("--tw-scale-x", value.as_str()),
            ("--tw-scale-y", value.as_str()),
            ("scale", "var(--tw-scale-x) var(--tw-scale-y)"),
        ]);
        add(trie, &format!("scale-x-{scale}"), &[
            ("--tw-scale-x", value.as_str()),
            ("scale", "var(--tw-scale-x) var(--tw-scale-y)"),
        ]);
        add(trie, &format!("scale-y-{scale}"), &[
            ("--tw-scale-y", value.as_str()),
            ("scale", "var(--tw-scale-x) var(--tw-scale-y)"),
        ]);
    }

    add_scale(trie, "origin", &["transform-origin"], &[
        ("center",       "center"),
        ("top",          "top"),
        ("top-right",    "top right"),
        ("right",        "right"),
        ("bottom-right", "bottom right"),
        ("bottom",       "bottom"),
        ("bottom-left",  "bottom left"),
        ("left",         "left"),
        ("top-left",     "top left"),
    ]);
    add(trie, "transform-none", &[("transform", "none")]);
}

fn translate(trie: &mut UtilityTrie, key: &str, axis: &str, value: &str) {
    let var = format!("--tw-translate-{axis}");
    add(trie, key, &[
        (var.as_str(), value),
        ("translate", "var(--tw-translate-x, 0) var(--tw-translate-y, 0)"),
    ]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::render_body;

    #[test]
    fn every_animation_has_keyframes() {
        for (_, _, name) in ANIMATIONS {
            assert!(keyframes_css(name).is_some(), "{name} has no keyframes");
        }
        assert!(keyframes_css("wiggle").is_none());
    }

    #[test]
    fn transforms_and_timing() {
        let mut trie = UtilityTrie::new();
        register(&mut trie);
        let body = |k: &str| render_body(&trie.search(k).unwrap().declarations);
        assert_eq!(
            body("-translate-x-1/2"),
            "--tw-translate-x: -50%; translate: var(--tw-translate-x, 0) var(--tw-translate-y, 0);"
        );
        assert_eq!(body("rotate-45"), "rotate: 45deg;");
        assert_eq!(body("duration-300"), "transition-duration: var(--duration-300);");
        assert_eq!(body("ease-in-out"), "transition-timing-function: var(--ease-in-out);");
        assert_eq!(body("animate-none"), "animation: none;");
    }
}
