//! Dynamic utilities synthesized on a trie miss.
//!
//! [`resolve`] walks an ordered table of recipes. Each recipe pairs a cheap
//! shape test with a builder; the first builder that returns declarations
//! wins. A malformed arbitrary value (empty, unbalanced, or containing `;`,
//! `{`, `}`) makes the builder return `None`.

use crate::colors::{is_color_like, resolve_color, split_color_prefix, COLOR_PREFIXES};
use crate::registry::{spacing_value, Family, SPACING_FAMILIES};
use crate::rule::{Declaration, COLOR_MIX_SUPPORTS};
use once_cell::sync::Lazy;
use regex::Regex;

struct Recipe {
    name: &'static str,
    matches: fn(&str) -> bool,
    build: fn(&str) -> Option<Vec<Declaration>>,
}

const RECIPES: &[Recipe] = &[
    Recipe {
        name: "custom-property-opacity",
        matches: |b: &str| b.starts_with("[--") && b.contains("]/"),
        build: custom_property_opacity,
    },
    Recipe {
        name: "color-opacity",
        matches: |b: &str| b.contains('/') && split_color_prefix(b).is_some(),
        build: color_opacity,
    },
    Recipe {
        name: "arbitrary-value",
        matches: |b: &str| b.ends_with(']'),
        build: arbitrary_value,
    },
    Recipe {
        name: "custom-property",
        matches: |b: &str| b.ends_with(')') && b.contains("-(--"),
        build: custom_property,
    },
    Recipe {
        name: "numeric",
        matches: |b: &str| b.ends_with(|c: char| c.is_ascii_digit()),
        build: numeric,
    },
    Recipe {
        name: "typed-custom-property",
        matches: |b: &str| b.ends_with(')') && b.contains("-("),
        build: typed_custom_property,
    },
];

/// Synthesizes declarations for a base utility the static trie does not know.
pub fn resolve(base: &str) -> Option<Vec<Declaration>> {
    if base.is_empty() {
        return None;
    }
    RECIPES.iter().find_map(|recipe| {
        if !(recipe.matches)(base) {
            return None;
        }
        let decls = (recipe.build)(base)?;
        tracing::trace!(recipe = recipe.name, base, "recipe resolved");
        Some(decls)
    })
}

// ─── Value helpers ──────────────────────────────────────────────────────────

/// Bracket and paren nesting never goes negative and ends at zero.
fn balanced(value: &str) -> bool {
    let mut square = 0i32;
    let mut round = 0i32;
    for ch in value.chars() {
        match ch {
            '[' => square += 1,
            ']' => square -= 1,
            '(' => round += 1,
            ')' => round -= 1,
            _ => {}
        }
        if square < 0 || round < 0 {
            return false;
        }
    }
    square == 0 && round == 0
}

/// Validates an authored arbitrary value and decodes `_` to a space.
/// `\_` stays a literal underscore; `url(...)` values keep underscores.
fn arbitrary(raw: &str) -> Option<String> {
    if raw.trim().is_empty() || raw.contains([';', '{', '}']) || !balanced(raw) {
        return None;
    }
    if raw.starts_with("url(") {
        return Some(raw.to_string());
    }
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' if chars.peek() == Some(&'_') => {
                out.push('_');
                chars.next();
            }
            '_' => out.push(' '),
            _ => out.push(ch),
        }
    }
    Some(out)
}

/// Splits on the last `/` outside brackets and parens.
fn split_last_slash(value: &str) -> Option<(&str, &str)> {
    let mut depth = 0i32;
    let mut split = None;
    for (i, ch) in value.char_indices() {
        match ch {
            '[' | '(' => depth += 1,
            ']' | ')' => depth -= 1,
            '/' if depth == 0 => split = Some(i),
            _ => {}
        }
    }
    let i = split?;
    let (left, right) = (&value[..i], &value[i + 1..]);
    (!left.is_empty() && !right.is_empty()).then_some((left, right))
}

fn is_ident(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// `(--name)` to `var(--name)`.
fn paren_var(value: &str) -> Option<String> {
    let inner = value.strip_prefix('(')?.strip_suffix(')')?;
    let name = inner.strip_prefix("--")?;
    is_ident(name).then(|| format!("var({inner})"))
}

fn is_number(value: &str) -> bool {
    !value.is_empty()
        && value.chars().all(|c| c.is_ascii_digit() || c == '.')
        && value.matches('.').count() <= 1
        && !value.starts_with('.')
        && !value.ends_with('.')
}

/// Opacity modifier as a percentage: `50`, `12.5`, `[0.35]`, `[35%]`, `(--a)`.
fn opacity(value: &str) -> Option<String> {
    if is_number(value) {
        let n: f64 = value.parse().ok()?;
        return (n <= 100.0).then(|| format!("{value}%"));
    }
    if let Some(inner) = value.strip_prefix('[').and_then(|v| v.strip_suffix(']')) {
        if let Some(pct) = inner.strip_suffix('%') {
            return is_number(pct).then(|| inner.to_string());
        }
        let n: f64 = inner.parse().ok()?;
        if !(0.0..=1.0).contains(&n) {
            return None;
        }
        let pct = (n * 10000.0).round() / 100.0;
        return Some(format!("{pct}%"));
    }
    paren_var(value)
}

pub(crate) fn color_mix(color: &str, pct: &str) -> String {
    format!("color-mix(in oklab, {color} {pct}, transparent)")
}

/// Replaces every `{}` in each template value.
fn fill(template: &[(&str, &str)], value: &str) -> Vec<Declaration> {
    template
        .iter()
        .map(|(prop, pattern)| Declaration::new(*prop, pattern.replace("{}", value)))
        .collect()
}

fn each(props: &[&str], value: &str) -> Vec<Declaration> {
    props.iter().map(|p| Declaration::new(*p, value)).collect()
}

/// Splits `name/50` into the color part and its opacity percentage.
pub(crate) fn split_opacity(value: &str) -> Option<(&str, String)> {
    let (color, alpha) = split_last_slash(value)?;
    Some((color, opacity(alpha)?))
}

// ─── 1. Custom property with opacity ────────────────────────────────────────

static CUSTOM_PROPERTY_OPACITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\[(--[A-Za-z0-9_-]+):(.+)\]/(.+)$")
        .unwrap_or_else(|e| panic!("invalid custom property pattern: {e}"))
});

fn custom_property_opacity(base: &str) -> Option<Vec<Declaration>> {
    let caps = CUSTOM_PROPERTY_OPACITY.captures(base)?;
    let name = caps.get(1)?.as_str();
    let value = arbitrary(caps.get(2)?.as_str())?;
    let pct = opacity(caps.get(3)?.as_str())?;
    Some(vec![
        Declaration::new(name, value.clone()),
        Declaration::supports(
            COLOR_MIX_SUPPORTS,
            vec![(name.to_string(), color_mix(&value, &pct))],
        ),
    ])
}

// ─── 2. Color with opacity ──────────────────────────────────────────────────

fn color_opacity(base: &str) -> Option<Vec<Declaration>> {
    let (props, rest) = split_color_prefix(base)?;
    let (color, pct) = split_opacity(rest)?;
    let color = if let Some(inner) = color.strip_prefix('[').and_then(|c| c.strip_suffix(']')) {
        let value = arbitrary(inner)?;
        if !is_color_like(&value) && !value.starts_with("var(") {
            return None;
        }
        value
    } else if color.starts_with('(') {
        paren_var(color)?
    } else {
        resolve_color(color)?
    };
    Some(each(props, &color_mix(&color, &pct)))
}

// ─── 3. Bracket arbitrary values ────────────────────────────────────────────

/// Prefixes taking an arbitrary value, beyond the spacing families.
const TEMPLATES: &[(&str, &[(&str, &str)])] = &[
    ("rounded",          &[("border-radius", "{}")]),
    ("rounded-t",        &[("border-top-left-radius", "{}"), ("border-top-right-radius", "{}")]),
    ("rounded-r",        &[("border-top-right-radius", "{}"), ("border-bottom-right-radius", "{}")]),
    ("rounded-b",        &[("border-bottom-right-radius", "{}"), ("border-bottom-left-radius", "{}")]),
    ("rounded-l",        &[("border-top-left-radius", "{}"), ("border-bottom-left-radius", "{}")]),
    ("rounded-tl",       &[("border-top-left-radius", "{}")]),
    ("rounded-tr",       &[("border-top-right-radius", "{}")]),
    ("rounded-br",       &[("border-bottom-right-radius", "{}")]),
    ("rounded-bl",       &[("border-bottom-left-radius", "{}")]),
    ("shadow",           &[("box-shadow", "{}")]),
    ("opacity",          &[("opacity", "{}")]),
    ("z",                &[("z-index", "{}")]),
    ("order",            &[("order", "{}")]),
    ("flex",             &[("flex", "{}")]),
    ("grow",             &[("flex-grow", "{}")]),
    ("shrink",           &[("flex-shrink", "{}")]),
    ("grid-cols",        &[("grid-template-columns", "{}")]),
    ("grid-rows",        &[("grid-template-rows", "{}")]),
    ("col",              &[("grid-column", "{}")]),
    ("row",              &[("grid-row", "{}")]),
    ("auto-cols",        &[("grid-auto-columns", "{}")]),
    ("auto-rows",        &[("grid-auto-rows", "{}")]),
    ("columns",          &[("columns", "{}")]),
    ("aspect",           &[("aspect-ratio", "{}")]),
    ("object",           &[("object-position", "{}")]),
    ("content",          &[("content", "{}")]),
    ("tracking",         &[("letter-spacing", "{}")]),
    ("list",             &[("list-style-type", "{}")]),
    ("underline-offset", &[("text-underline-offset", "{}")]),
    ("outline-offset",   &[("outline-offset", "{}")]),
    ("duration",         &[("transition-duration", "{}")]),
    ("delay",            &[("transition-delay", "{}")]),
    ("ease",             &[("transition-timing-function", "{}")]),
    ("transition",       &[("transition-property", "{}")]),
    ("animate",          &[("animation", "{}")]),
    ("rotate",           &[("rotate", "{}")]),
    ("scale",            &[("scale", "{}")]),
    ("origin",           &[("transform-origin", "{}")]),
    ("translate-x",      &[("--tw-translate-x", "{}"), ("translate", "var(--tw-translate-x, 0) var(--tw-translate-y, 0)")]),
    ("translate-y",      &[("--tw-translate-y", "{}"), ("translate", "var(--tw-translate-x, 0) var(--tw-translate-y, 0)")]),
    ("blur",             &[("filter", "blur({})")]),
    ("brightness",       &[("filter", "brightness({})")]),
    ("backdrop-blur",    &[("backdrop-filter", "blur({})")]),
    ("cursor",           &[("cursor", "{}")]),
    ("will-change",      &[("will-change", "{}")]),
    ("line-clamp",       &[
        ("overflow", "hidden"),
        ("display", "-webkit-box"),
        ("-webkit-box-orient", "vertical"),
        ("-webkit-line-clamp", "{}"),
    ]),
];

/// Templates that accept a leading `-` besides the signed spacing families.
const NEGATABLE: &[&str] = &["rotate", "translate-x", "translate-y"];

/// `(prefix, type hint)` to template, for `prefix-[type:value]` and
/// `prefix-(type:--var)`.
const TYPED: &[(&str, &str, &[(&str, &str)])] = &[
    ("bg",         "color",       &[("background-color", "{}")]),
    ("bg",         "image",       &[("background-image", "{}")]),
    ("bg",         "url",         &[("background-image", "{}")]),
    ("bg",         "size",        &[("background-size", "{}")]),
    ("bg",         "length",      &[("background-size", "{}")]),
    ("bg",         "position",    &[("background-position", "{}")]),
    ("text",       "color",       &[("color", "{}")]),
    ("text",       "length",      &[("font-size", "{}")]),
    ("text",       "size",        &[("font-size", "{}")]),
    ("border",     "color",       &[("border-color", "{}")]),
    ("border",     "length",      &[("border-width", "{}")]),
    ("outline",    "color",       &[("outline-color", "{}")]),
    ("outline",    "length",      &[("outline-width", "{}")]),
    ("decoration", "color",       &[("text-decoration-color", "{}")]),
    ("decoration", "length",      &[("text-decoration-thickness", "{}")]),
    ("stroke",     "color",       &[("stroke", "{}")]),
    ("stroke",     "length",      &[("stroke-width", "{}")]),
    ("stroke",     "number",      &[("stroke-width", "{}")]),
    ("fill",       "color",       &[("fill", "{}")]),
    ("ring",       "color",       &[("--tw-ring-color", "{}")]),
    ("ring",       "length",      &[("box-shadow", "0 0 0 {} var(--tw-ring-color, currentColor)")]),
    ("font",       "family-name", &[("font-family", "{}")]),
    ("font",       "weight",      &[("font-weight", "{}")]),
    ("font",       "number",      &[("font-weight", "{}")]),
    ("grid-cols",  "template",    &[("grid-template-columns", "{}")]),
    ("grid-rows",  "template",    &[("grid-template-rows", "{}")]),
    ("w",          "length",      &[("width", "{}")]),
    ("h",          "length",      &[("height", "{}")]),
];

/// Non-color property set by each ambiguous color prefix.
const WIDTHS: &[(&str, &[(&str, &str)])] = &[
    ("border",     &[("border-width", "{}")]),
    ("border-x",   &[("border-inline-width", "{}")]),
    ("border-y",   &[("border-block-width", "{}")]),
    ("border-t",   &[("border-top-width", "{}")]),
    ("border-r",   &[("border-right-width", "{}")]),
    ("border-b",   &[("border-bottom-width", "{}")]),
    ("border-l",   &[("border-left-width", "{}")]),
    ("outline",    &[("outline-width", "{}")]),
    ("decoration", &[("text-decoration-thickness", "{}")]),
    ("stroke",     &[("stroke-width", "{}")]),
    ("fill",       &[("fill", "{}")]),
    ("text",       &[("font-size", "{}")]),
    ("ring",       &[("box-shadow", "0 0 0 {} var(--tw-ring-color, currentColor)")]),
];

fn typed(prefix: &str, hint: &str, value: &str) -> Option<Vec<Declaration>> {
    TYPED
        .iter()
        .find(|(p, h, _)| *p == prefix && *h == hint)
        .map(|(_, _, template)| fill(template, value))
}

fn is_hint(hint: &str) -> bool {
    TYPED.iter().any(|(_, h, _)| *h == hint)
}

/// Color prefixes pick a property by sniffing the value.
fn sniff(prefix: &str, value: &str) -> Option<Vec<Declaration>> {
    let is_color = is_color_like(value) || value.starts_with("var(");
    if prefix == "bg" {
        let prop = if is_color {
            "background-color"
        } else if value.starts_with("url(") || value.contains("gradient(") {
            "background-image"
        } else {
            "background-position"
        };
        return Some(vec![Declaration::new(prop, value)]);
    }
    if prefix == "font" {
        let prop = if is_number(value) { "font-weight" } else { "font-family" };
        return Some(vec![Declaration::new(prop, value)]);
    }
    let props = COLOR_PREFIXES
        .iter()
        .find(|(p, _)| *p == prefix)
        .map(|(_, props)| *props)?;
    if is_color {
        return Some(each(props, value));
    }
    match WIDTHS.iter().find(|(p, _)| *p == prefix) {
        Some((_, template)) => Some(fill(template, value)),
        None => Some(each(props, value)),
    }
}

fn spacing_family(prefix: &str) -> Option<&'static Family> {
    SPACING_FAMILIES.iter().find(|f| f.prefix == prefix)
}

/// Applies a decoded value to whatever `prefix` sets. Unknown prefixes
/// become a custom property named after the prefix.
fn apply(prefix: &str, value: &str, hint: Option<&str>) -> Option<Vec<Declaration>> {
    if let Some(hint) = hint {
        return typed(prefix, hint, value);
    }

    if let Some(positive) = prefix.strip_prefix('-').filter(|p| !p.starts_with('-')) {
        let negated = format!("calc({value} * -1)");
        if let Some(family) = spacing_family(positive).filter(|f| f.negative) {
            return Some(each(family.props, &negated));
        }
        if NEGATABLE.contains(&positive) {
            return TEMPLATES
                .iter()
                .find(|(p, _)| *p == positive)
                .map(|(_, template)| fill(template, &negated));
        }
        return None;
    }

    if let Some(decls) = sniff(prefix, value) {
        return Some(decls);
    }
    if let Some((_, template)) = TEMPLATES.iter().find(|(p, _)| *p == prefix) {
        return Some(fill(template, value));
    }
    if let Some(family) = spacing_family(prefix) {
        return Some(each(family.props, value));
    }

    if !is_ident(prefix) {
        return None;
    }
    let name = if prefix.starts_with("--") {
        prefix.to_string()
    } else {
        format!("--{prefix}")
    };
    Some(vec![Declaration::new(name, value)])
}

/// Splits `type:value` when `type` is a known hint.
fn split_hint(raw: &str) -> (Option<&str>, &str) {
    match raw.split_once(':') {
        Some((hint, value)) if is_hint(hint) => (Some(hint), value),
        _ => (None, raw),
    }
}

fn arbitrary_value(base: &str) -> Option<Vec<Declaration>> {
    if let Some(inner) = base.strip_prefix('[').and_then(|b| b.strip_suffix(']')) {
        return arbitrary_property(inner);
    }
    let open = base.find("-[")?;
    let prefix = &base[..open];
    let raw = &base[open + 2..base.len() - 1];
    if prefix.is_empty() {
        return None;
    }
    let (hint, raw) = split_hint(raw);
    let value = arbitrary(raw)?;
    apply(prefix, &value, hint)
}

/// `[name:value]` sets any property directly.
fn arbitrary_property(inner: &str) -> Option<Vec<Declaration>> {
    let (name, value) = inner.split_once(':')?;
    if !is_ident(name) || name.starts_with('_') {
        return None;
    }
    let value = arbitrary(value)?;
    Some(vec![Declaration::new(name, value)])
}

// ─── 4. Paren custom properties ─────────────────────────────────────────────

fn custom_property(base: &str) -> Option<Vec<Declaration>> {
    let open = base.find("-(")?;
    let prefix = &base[..open];
    if prefix.is_empty() {
        return None;
    }
    let value = paren_var(&base[open + 1..])?;
    apply(prefix, &value, None)
}

// ─── 5. Numeric suffixes ────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
enum Unit {
    Integer,
    Number,
    Percent,
    Millis,
    Degrees,
    Pixels,
}

/// Prefixes whose trailing number fills a template, beyond the spacing
/// families. `signed` permits a leading `-`.
const NUMERIC: &[(&str, Unit, bool, &[(&str, &str)])] = &[
    ("z",              Unit::Integer, false, &[("z-index", "{}")]),
    ("order",          Unit::Integer, false, &[("order", "{}")]),
    ("columns",        Unit::Integer, false, &[("columns", "{}")]),
    ("grid-cols",      Unit::Integer, false, &[("grid-template-columns", "repeat({}, minmax(0, 1fr))")]),
    ("grid-rows",      Unit::Integer, false, &[("grid-template-rows", "repeat({}, minmax(0, 1fr))")]),
    ("col-span",       Unit::Integer, false, &[("grid-column", "span {} / span {}")]),
    ("row-span",       Unit::Integer, false, &[("grid-row", "span {} / span {}")]),
    ("col-start",      Unit::Integer, false, &[("grid-column-start", "{}")]),
    ("col-end",        Unit::Integer, false, &[("grid-column-end", "{}")]),
    ("row-start",      Unit::Integer, false, &[("grid-row-start", "{}")]),
    ("row-end",        Unit::Integer, false, &[("grid-row-end", "{}")]),
    ("line-clamp",     Unit::Integer, false, &[
        ("overflow", "hidden"),
        ("display", "-webkit-box"),
        ("-webkit-box-orient", "vertical"),
        ("-webkit-line-clamp", "{}"),
    ]),
    ("grow",           Unit::Number,  false, &[("flex-grow", "{}")]),
    ("shrink",         Unit::Number,  false, &[("flex-shrink", "{}")]),
    ("stroke",         Unit::Number,  false, &[("stroke-width", "{}")]),
    ("opacity",        Unit::Percent, false, &[("opacity", "{}")]),
    ("scale",          Unit::Percent, false, &[("--tw-scale-x", "{}"), ("--tw-scale-y", "{}"), ("scale", "var(--tw-scale-x) var(--tw-scale-y)")]),
    ("scale-x",        Unit::Percent, false, &[("--tw-scale-x", "{}"), ("scale", "var(--tw-scale-x) var(--tw-scale-y)")]),
    ("scale-y",        Unit::Percent, false, &[("--tw-scale-y", "{}"), ("scale", "var(--tw-scale-x) var(--tw-scale-y)")]),
    ("brightness",     Unit::Percent, false, &[("filter", "brightness({})")]),
    ("contrast",       Unit::Percent, false, &[("filter", "contrast({})")]),
    ("saturate",       Unit::Percent, false, &[("filter", "saturate({})")]),
    ("duration",       Unit::Millis,  false, &[("transition-duration", "{}")]),
    ("delay",          Unit::Millis,  false, &[("transition-delay", "{}")]),
    ("rotate",         Unit::Degrees, true,  &[("rotate", "{}")]),
    ("skew-x",         Unit::Degrees, true,  &[("transform", "skewX({})")]),
    ("skew-y",         Unit::Degrees, true,  &[("transform", "skewY({})")]),
    ("hue-rotate",     Unit::Degrees, true,  &[("filter", "hue-rotate({})")]),
    ("border",         Unit::Pixels,  false, &[("border-width", "{}")]),
    ("border-x",       Unit::Pixels,  false, &[("border-inline-width", "{}")]),
    ("border-y",       Unit::Pixels,  false, &[("border-block-width", "{}")]),
    ("border-t",       Unit::Pixels,  false, &[("border-top-width", "{}")]),
    ("border-r",       Unit::Pixels,  false, &[("border-right-width", "{}")]),
    ("border-b",       Unit::Pixels,  false, &[("border-bottom-width", "{}")]),
    ("border-l",       Unit::Pixels,  false, &[("border-left-width", "{}")]),
    ("outline",        Unit::Pixels,  false, &[("outline-width", "{}")]),
    ("outline-offset", Unit::Pixels,  false, &[("outline-offset", "{}")]),
    ("ring",           Unit::Pixels,  false, &[("box-shadow", "0 0 0 {} var(--tw-ring-color, currentColor)")]),
    ("decoration",     Unit::Pixels,  false, &[("text-decoration-thickness", "{}")]),
    ("underline-offset", Unit::Pixels, false, &[("text-underline-offset", "{}")]),
];

/// Spacing families (and translate) that also accept `a/b` fractions.
const FRACTIONAL: &[&str] = &[
    "w", "h", "min-w", "max-w", "min-h", "max-h", "size", "basis", "inset", "inset-x",
    "inset-y", "start", "end", "top", "right", "bottom", "left", "translate-x", "translate-y",
];

const TRANSLATE: &[(&str, &str)] = &[
    ("translate-x", "--tw-translate-x"),
    ("translate-y", "--tw-translate-y"),
];

fn numeric(base: &str) -> Option<Vec<Declaration>> {
    let (negative, unsigned) = match base.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, base),
    };
    let dash = unsigned.rfind('-')?;
    let (prefix, step) = (&unsigned[..dash], &unsigned[dash + 1..]);
    if prefix.is_empty() {
        return None;
    }

    if let Some((_, unit, signed, template)) = NUMERIC.iter().find(|(p, ..)| *p == prefix) {
        if negative && !signed {
            return None;
        }
        let value = unit_value(*unit, step)?;
        let value = if negative { format!("-{value}") } else { value };
        return Some(fill(template, &value));
    }

    let value = spacing_step(prefix, step, negative)?;
    if let Some((_, var)) = TRANSLATE.iter().find(|(p, _)| *p == prefix) {
        return Some(vec![
            Declaration::new(*var, value),
            Declaration::new("translate", "var(--tw-translate-x, 0) var(--tw-translate-y, 0)"),
        ]);
    }
    let family = spacing_family(prefix)?;
    if negative && !family.negative {
        return None;
    }
    Some(each(family.props, &value))
}

fn unit_value(unit: Unit, step: &str) -> Option<String> {
    if !is_number(step) {
        return None;
    }
    let integer = !step.contains('.');
    match unit {
        Unit::Integer => integer.then(|| step.to_string()),
        Unit::Number => Some(step.to_string()),
        Unit::Percent => Some(format!("{step}%")),
        Unit::Millis => integer.then(|| format!("{step}ms")),
        Unit::Degrees => Some(format!("{step}deg")),
        Unit::Pixels => integer.then(|| format!("{step}px")),
    }
}

/// `calc(var(--spacing) * N)` for quarter steps; `calc(a/b * 100%)` for
/// fractions on fractional families.
fn spacing_step(prefix: &str, step: &str, negative: bool) -> Option<String> {
    if let Some((numerator, denominator)) = step.split_once('/') {
        let numerator: u32 = numerator.parse().ok()?;
        let denominator: u32 = denominator.parse().ok()?;
        if denominator == 0 || !FRACTIONAL.contains(&prefix) {
            return None;
        }
        let sign = if negative { "-" } else { "" };
        return Some(format!("calc({numerator}/{denominator} * {sign}100%)"));
    }
    if !is_number(step) {
        return None;
    }
    let n: f64 = step.parse().ok()?;
    if (n * 4.0).fract() != 0.0 {
        return None;
    }
    Some(if negative {
        spacing_value(&format!("-{step}"))
    } else {
        spacing_value(step)
    })
}

// ─── 6. Typed paren custom properties ───────────────────────────────────────

fn typed_custom_property(base: &str) -> Option<Vec<Declaration>> {
    let open = base.find("-(")?;
    let prefix = &base[..open];
    let inner = base[open + 2..].strip_suffix(')')?;
    let (hint, var) = inner.split_once(':')?;
    let value = paren_var(&format!("({var})"))?;
    typed(prefix, hint, &value)
}
