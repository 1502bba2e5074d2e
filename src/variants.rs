//! Variant modifiers (responsive, state, group/peer, dark, container, ...).
//!
//! [`decompose`] splits a class token into its variant prefixes and base
//! utility; [`build_selector`] turns the prefixes into an escaped selector plus
//! optional media and container wrappers.

use crate::rule::MediaQuery;
use crate::theme::ThemeConfig;

/// Pseudo-class variants, usable bare, after `group-`/`peer-`/`has-`, or under `not-`.
const PSEUDO_CLASSES: &[(&str, &str)] = &[
    ("hover",             ":hover"),
    ("focus",             ":focus"),
    ("focus-within",      ":focus-within"),
    ("focus-visible",     ":focus-visible"),
    ("active",            ":active"),
    ("visited",           ":visited"),
    ("target",            ":target"),
    ("disabled",          ":disabled"),
    ("enabled",           ":enabled"),
    ("checked",           ":checked"),
    ("indeterminate",     ":indeterminate"),
    ("default",           ":default"),
    ("required",          ":required"),
    ("optional",          ":optional"),
    ("valid",             ":valid"),
    ("invalid",           ":invalid"),
    ("user-valid",        ":user-valid"),
    ("user-invalid",      ":user-invalid"),
    ("in-range",          ":in-range"),
    ("out-of-range",      ":out-of-range"),
    ("placeholder-shown", ":placeholder-shown"),
    ("autofill",          ":autofill"),
    ("read-only",         ":read-only"),
    ("open",              ":is([open], :popover-open)"),
    ("first",             ":first-child"),
    ("last",              ":last-child"),
    ("only",              ":only-child"),
    ("odd",               ":nth-child(odd)"),
    ("even",              ":nth-child(even)"),
    ("first-of-type",     ":first-of-type"),
    ("last-of-type",      ":last-of-type"),
    ("only-of-type",      ":only-of-type"),
    ("empty",             ":empty"),
    ("inert",             ":is([inert], [inert] *)"),
];

/// Pseudo-element variants, always appended after everything else.
const PSEUDO_ELEMENTS: &[(&str, &str)] = &[
    ("before",       "::before"),
    ("after",        "::after"),
    ("placeholder",  "::placeholder"),
    ("file",         "::file-selector-button"),
    ("marker",       "::marker"),
    ("selection",    "::selection"),
    ("first-line",   "::first-line"),
    ("first-letter", "::first-letter"),
    ("backdrop",     "::backdrop"),
];

/// Variants that map to a fixed media query.
const MEDIA_VARIANTS: &[(&str, &str)] = &[
    ("dark",          "@media (prefers-color-scheme: dark)"),
    ("print",         "@media print"),
    ("motion-safe",   "@media (prefers-reduced-motion: no-preference)"),
    ("motion-reduce", "@media (prefers-reduced-motion: reduce)"),
    ("contrast-more", "@media (prefers-contrast: more)"),
    ("contrast-less", "@media (prefers-contrast: less)"),
    ("portrait",      "@media (orientation: portrait)"),
    ("landscape",     "@media (orientation: landscape)"),
    ("forced-colors", "@media (forced-colors: active)"),
];

/// Emission order of media blocks; anything unlisted sorts last.
const MEDIA_PRIORITY: &[(&str, u8)] = &[
    ("print", 0),
    ("sm",    1),
    ("md",    2),
    ("lg",    3),
    ("xl",    4),
    ("2xl",   5),
    ("3xl",   6),
];

const DEFAULT_PRIORITY: u8 = 7;

/// Escaped selector plus the at-rules wrapping it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    pub selector: String,
    pub media: Option<MediaQuery>,
    pub container: Option<String>,
}

// ─── Decomposition ──────────────────────────────────────────────────────────

/// Splits `md:hover:bg-red-500` into `(["md", "hover"], "bg-red-500")`.
///
/// Colons inside `[...]` or `(...)` never split, so
/// `[--pattern-fg:var(--color-gray-950)]` stays one base utility.
pub fn decompose(token: &str) -> (Vec<&str>, &str) {
    let mut prefixes = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;
    for (i, ch) in token.char_indices() {
        match ch {
            '[' | '(' => depth += 1,
            ']' | ')' => depth -= 1,
            ':' if depth == 0 => {
                prefixes.push(&token[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    (prefixes, &token[start..])
}

// ─── Selector building ──────────────────────────────────────────────────────

fn lookup(table: &[(&'static str, &'static str)], name: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == name).map(|(_, v)| *v)
}

fn media_priority(name: &str) -> u8 {
    MEDIA_PRIORITY
        .iter()
        .find(|(k, _)| *k == name)
        .map_or(DEFAULT_PRIORITY, |(_, p)| *p)
}

/// Decodes `_` to a space in an arbitrary variant, keeping `\_`.
fn decode_arbitrary(raw: &str) -> String {
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
    out
}

fn bracketed(value: &str) -> Option<&str> {
    value
        .strip_prefix('[')?
        .strip_suffix(']')
        .filter(|inner| !inner.is_empty())
}

/// `k=v` to `[prefix-k="v"]`, `k` to `[prefix-k]`. An empty key is rejected.
fn attribute(prefix: &str, raw: &str) -> Option<String> {
    let raw = decode_arbitrary(raw);
    let (key, value) = match raw.split_once('=') {
        Some((key, value)) => (key, Some(value)),
        None => (raw.as_str(), None),
    };
    if !is_attribute_name(key) {
        return None;
    }
    Some(match value {
        Some(value) if value.starts_with(['"', '\'']) => format!("[{prefix}-{key}={value}]"),
        Some(value) => format!("[{prefix}-{key}=\"{value}\"]"),
        None => format!("[{prefix}-{key}]"),
    })
}

fn is_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// `aria-<name>` or `data-<name>` to an attribute selector.
fn attribute_variant(prefix: &str, name: &str) -> Option<String> {
    match bracketed(name) {
        Some(raw) => attribute(prefix, raw),
        None if is_attribute_name(name) => Some(format!("[{prefix}-{name}=\"true\"]")),
        None => None,
    }
}

/// A condition that can decorate the element itself or a group/peer ancestor:
/// pseudo-classes, `aria-*`, `data-*` and bracketed selectors.
fn condition(variant: &str) -> Option<String> {
    if let Some(pseudo) = lookup(PSEUDO_CLASSES, variant) {
        return Some(pseudo.to_string());
    }
    if let Some(name) = variant.strip_prefix("aria-") {
        return attribute_variant("aria", name);
    }
    if let Some(name) = variant.strip_prefix("data-") {
        return attribute_variant("data", name);
    }
    bracketed(variant).map(decode_arbitrary)
}

/// Splits `hover/sidebar` into `("hover", Some("sidebar"))`.
fn named(variant: &str) -> (&str, Option<&str>) {
    match variant.rsplit_once('/') {
        Some((state, name)) if !name.is_empty() && !name.contains(']') => (state, Some(name)),
        _ => (variant, None),
    }
}

/// Builds the selector and wrappers for `token` from its variant prefixes.
/// Returns `None` when any prefix is unknown. `suffix` comes from the base
/// utility (e.g. ` > :not(:last-child)`).
pub fn build_selector(
    token: &str,
    prefixes: &[&str],
    theme: &ThemeConfig,
    suffix: Option<&str>,
) -> Option<Selector> {
    let mut ancestors = String::new();
    let mut compound = format!(".{}", escape_selector(token));
    let mut element: Option<&str> = None;
    let mut media: Option<MediaQuery> = None;
    let mut container: Option<String> = None;

    for &variant in prefixes {
        if let Some(pseudo) = lookup(PSEUDO_ELEMENTS, variant) {
            element = Some(pseudo);
            continue;
        }
        if let Some(query) = lookup(MEDIA_VARIANTS, variant) {
            media = Some(MediaQuery {
                query: query.to_string(),
                priority: media_priority(variant),
            });
            continue;
        }
        if let Some(cond) = condition(variant).filter(|_| !variant.starts_with('[')) {
            compound.push_str(&cond);
            continue;
        }

        if variant == "*" {
            compound = format!(":is({ancestors}{compound} > *)");
            ancestors.clear();
        } else if let Some(raw) = bracketed(variant) {
            let raw = decode_arbitrary(raw);
            if raw.starts_with('@') {
                media = Some(MediaQuery {
                    query: raw,
                    priority: DEFAULT_PRIORITY,
                });
            } else if raw.contains('&') {
                compound = raw.replace('&', &format!("{ancestors}{compound}"));
                ancestors.clear();
            } else {
                return None;
            }
        } else if let Some(rest) = variant.strip_prefix("group-") {
            let (state, name) = named(rest);
            let cond = condition(state)?;
            match name {
                Some(name) => ancestors.push_str(&format!(".group\\/{}{cond} ", escape_selector(name))),
                None => ancestors.push_str(&format!(".group{cond} ")),
            }
        } else if let Some(rest) = variant.strip_prefix("peer-") {
            let (state, name) = named(rest);
            let cond = condition(state)?;
            match name {
                Some(name) => ancestors.push_str(&format!(".peer\\/{}{cond} ~ ", escape_selector(name))),
                None => ancestors.push_str(&format!(".peer{cond} ~ ")),
            }
        } else if let Some(rest) = variant.strip_prefix("has-") {
            let cond = match bracketed(rest) {
                Some(raw) => decode_arbitrary(raw),
                None => condition(rest)?,
            };
            compound.push_str(&format!(":has({cond})"));
        } else if let Some(rest) = variant.strip_prefix("not-") {
            if rest == "dark" {
                media = Some(MediaQuery {
                    query: "@media not (prefers-color-scheme: dark)".to_string(),
                    priority: DEFAULT_PRIORITY,
                });
            } else if lookup(MEDIA_VARIANTS, rest).is_some() || theme.breakpoint(rest).is_some() {
                tracing::trace!(variant, "media-valued not- variant ignored");
            } else {
                let cond = condition(rest)?;
                compound.push_str(&format!(":not({cond})"));
            }
        } else if let Some(rest) = variant.strip_prefix("max-") {
            let width = match bracketed(rest) {
                Some(raw) => decode_arbitrary(raw),
                None => theme.breakpoint(rest)?.to_string(),
            };
            media = Some(MediaQuery {
                query: format!("@media not all and (min-width: {width})"),
                priority: DEFAULT_PRIORITY,
            });
        } else if let Some(rest) = variant.strip_prefix("min-") {
            let width = decode_arbitrary(bracketed(rest)?);
            media = Some(MediaQuery {
                query: format!("@media (min-width: {width})"),
                priority: DEFAULT_PRIORITY,
            });
        } else if let Some(size) = variant.strip_prefix('@') {
            container = Some(container_query(size, theme)?);
        } else if let Some(width) = theme.breakpoint(variant) {
            media = Some(MediaQuery {
                query: format!("@media (min-width: {width})"),
                priority: media_priority(variant),
            });
        } else {
            return None;
        }
    }

    let mut selector = ancestors;
    selector.push_str(&compound);
    if let Some(suffix) = suffix {
        selector.push_str(suffix);
    }
    if let Some(element) = element {
        selector.push_str(element);
    }
    Some(Selector {
        selector,
        media,
        container,
    })
}

/// `@md` to `@container (min-width: 28rem)`; `@max-md` negates it;
/// `@[30rem]` takes an arbitrary width.
fn container_query(size: &str, theme: &ThemeConfig) -> Option<String> {
    if let Some(raw) = bracketed(size) {
        return Some(format!("@container (min-width: {})", decode_arbitrary(raw)));
    }
    if let Some(rest) = size.strip_prefix("max-") {
        let width = theme.container(rest)?;
        return Some(format!("@container not (min-width: {width})"));
    }
    let width = theme.container(size)?;
    Some(format!("@container (min-width: {width})"))
}

/// Escapes a class token for use after `.` in a selector.
///
/// A leading digit is written as a code point (`2xl:flex` to `\32 xl\:flex`).
pub fn escape_selector(class: &str) -> String {
    let mut out = String::with_capacity(class.len() + 4);
    for (i, ch) in class.chars().enumerate() {
        match ch {
            '0'..='9' if i == 0 => {
                out.push_str(&format!("\\{:x} ", ch as u32));
            }
            '.' | '/' | '[' | ']' | '(' | ')' | '%' | '#' | ':' | '@' | '!' | ',' | '~'
            | '^' | '$' | '&' | '+' | '=' | '<' | '>' | '|' | '\'' | '"' | ';' | '{'
            | '}' | '\\' | '*' | '?' => {
                out.push('\\');
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn build(token: &str) -> Option<Selector> {
        let (prefixes, _) = decompose(token);
        build_selector(token, &prefixes, &ThemeConfig::default(), None)
    }

    fn selector(token: &str) -> String {
        build(token).unwrap_or_else(|| panic!("{token} unresolved")).selector
    }

    #[test]
    fn decompose_splits_top_level_colons_only() {
        assert_eq!(decompose("flex"), (vec![], "flex"));
        assert_eq!(decompose("md:hover:bg-red-500/50"), (vec!["md", "hover"], "bg-red-500/50"));
        assert_eq!(
            decompose("[--pattern-fg:var(--color-gray-950)]"),
            (vec![], "[--pattern-fg:var(--color-gray-950)]")
        );
        assert_eq!(
            decompose("dark:[&:hover]:bg-(color:--x)"),
            (vec!["dark", "[&:hover]"], "bg-(color:--x)")
        );
    }

    #[test]
    fn escapes_specials_and_leading_digit() {
        assert_eq!(escape_selector("sm:hover:bg-red-500/50"), "sm\\:hover\\:bg-red-500\\/50");
        assert_eq!(escape_selector("2xl:flex"), "\\32 xl\\:flex");
        assert_eq!(escape_selector("w-[calc(100%-1rem)]"), "w-\\[calc\\(100\\%-1rem\\)\\]");
        assert_eq!(escape_selector("*:p-2"), "\\*\\:p-2");
    }

    #[test]
    fn breakpoint_and_state() {
        let sel = build("sm:hover:bg-red-500/50").unwrap();
        assert_eq!(sel.selector, ".sm\\:hover\\:bg-red-500\\/50:hover");
        assert_eq!(
            sel.media,
            Some(MediaQuery {
                query: "@media (min-width: 40rem)".to_string(),
                priority: 1,
            })
        );
        assert_eq!(sel.container, None);
    }

    #[test]
    fn pseudo_element_goes_last() {
        assert_eq!(selector("before:hover:flex"), ".before\\:hover\\:flex:hover::before");
    }

    #[test]
    fn group_and_peer() {
        assert_eq!(selector("group-hover:flex"), ".group:hover .group-hover\\:flex");
        assert_eq!(
            selector("group-focus/nav:flex"),
            ".group\\/nav:focus .group-focus\\/nav\\:flex"
        );
        assert_eq!(selector("peer-checked:flex"), ".peer:checked ~ .peer-checked\\:flex");
        assert_eq!(
            selector("group-aria-expanded:flex"),
            ".group[aria-expanded=\"true\"] .group-aria-expanded\\:flex"
        );
    }

    #[test]
    fn aria_and_data_attributes() {
        assert_eq!(selector("aria-checked:flex"), ".aria-checked\\:flex[aria-checked=\"true\"]");
        assert_eq!(
            selector("aria-[sort=ascending]:flex"),
            ".aria-\\[sort\\=ascending\\]\\:flex[aria-sort=\"ascending\"]"
        );
        assert_eq!(selector("data-active:flex"), ".data-active\\:flex[data-active=\"true\"]");
        assert_eq!(selector("data-[open]:flex"), ".data-\\[open\\]\\:flex[data-open]");
    }

    #[test]
    fn empty_attribute_names_are_unresolved() {
        for token in [
            "aria-:flex",
            "data-:block",
            "group-aria-:flex",
            "peer-data-:flex",
            "not-aria-:flex",
            "data-[=open]:flex",
        ] {
            assert!(build(token).is_none(), "{token} should not resolve");
        }
    }

    #[test]
    fn not_variants() {
        assert_eq!(selector("not-hover:flex"), ".not-hover\\:flex:not(:hover)");
        assert_eq!(selector("not-[.x]:flex"), ".not-\\[\\.x\\]\\:flex:not(.x)");
        let dark = build("not-dark:flex").unwrap();
        assert_eq!(dark.media.unwrap().query, "@media not (prefers-color-scheme: dark)");
        let print = build("not-print:flex").unwrap();
        assert_eq!(print.media, None);
    }

    #[test]
    fn arbitrary_variants() {
        assert_eq!(selector("[&>li]:flex"), ".\\[\\&\\>li\\]\\:flex>li");
        assert_eq!(selector("*:flex"), ":is(.\\*\\:flex > *)");
        let media = build("[@media_(min-width:900px)]:flex").unwrap();
        assert_eq!(media.media.unwrap().query, "@media (min-width:900px)");
    }

    #[test]
    fn media_and_container_variants() {
        assert_eq!(build("dark:flex").unwrap().media.unwrap().query, "@media (prefers-color-scheme: dark)");
        assert_eq!(build("print:flex").unwrap().media.unwrap().priority, 0);
        assert_eq!(
            build("max-md:flex").unwrap().media.unwrap().query,
            "@media not all and (min-width: 48rem)"
        );
        assert_eq!(
            build("min-[600px]:flex").unwrap().media.unwrap().query,
            "@media (min-width: 600px)"
        );
        assert_eq!(
            build("@md:flex").unwrap().container.unwrap(),
            "@container (min-width: 28rem)"
        );
    }

    #[test]
    fn last_query_of_a_kind_wins_and_kinds_coexist() {
        let sel = build("sm:lg:@md:flex").unwrap();
        assert_eq!(sel.media.unwrap().query, "@media (min-width: 64rem)");
        assert_eq!(sel.container.unwrap(), "@container (min-width: 28rem)");
    }

    #[test]
    fn theme_breakpoints_override_defaults() {
        let mut theme = ThemeConfig::default();
        theme.breakpoints.insert("md".to_string(), "50rem".to_string());
        theme.breakpoints.insert("tablet".to_string(), "44rem".to_string());
        let sel = build_selector("md:flex", &["md"], &theme, None).unwrap();
        assert_eq!(sel.media.unwrap().query, "@media (min-width: 50rem)");
        let sel = build_selector("tablet:flex", &["tablet"], &theme, None).unwrap();
        assert_eq!(sel.media.unwrap().priority, 7);
    }

    #[test]
    fn unknown_variant_is_unresolved() {
        assert!(build("wat:flex").is_none());
        assert!(build("group-wat:flex").is_none());
        assert!(build("[nope]:flex").is_none());
    }

    #[test]
    fn suffix_precedes_pseudo_element() {
        let sel = build_selector(
            "hover:space-x-4",
            &["hover"],
            &ThemeConfig::default(),
            Some(" > :not(:last-child)"),
        )
        .unwrap();
        assert_eq!(sel.selector, ".hover\\:space-x-4:hover > :not(:last-child)");
    }
}
