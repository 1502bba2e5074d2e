//! Cascade assembly: resolves tokens to rules, buckets them by wrapper,
//! collapses identical bodies and emits layered CSS.

use crate::colors::split_color_prefix;
use crate::components::ComponentLibrary;
use crate::recipes;
use crate::registry::keyframes_css;
use crate::rule::{Declaration, Rule};
use crate::theme::ThemeConfig;
use crate::trie::UtilityTrie;
use crate::variants::{build_selector, decompose};
use indexmap::{IndexMap, IndexSet};
use std::fmt::Write;

/// First line of every generated stylesheet.
pub const LAYER_ORDER: &str = "@layer theme, base, components, utilities;";

/// Rule body to the selectors sharing it, both in first-seen order.
type Bucket = IndexMap<String, IndexSet<String>>;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct ContainerBlock {
    rules: Bucket,
    /// Media queries nested inside the container query.
    media: IndexMap<String, Bucket>,
}

/// Bucketed output of one assembly pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Stylesheet {
    utilities: Bucket,
    keyframes: IndexSet<&'static str>,
    media: IndexMap<String, (u8, Bucket)>,
    containers: IndexMap<String, ContainerBlock>,
    components: Vec<String>,
}

fn push(bucket: &mut Bucket, rule: &Rule) {
    bucket
        .entry(rule.body())
        .or_default()
        .insert(rule.selector.clone());
}

fn write_bucket(css: &mut String, bucket: &Bucket, indent: &str) {
    for (body, selectors) in bucket {
        let selectors: Vec<&str> = selectors.iter().map(String::as_str).collect();
        let _ = writeln!(css, "{indent}{} {{ {body} }}", selectors.join(", "));
    }
}

impl Stylesheet {
    fn add(&mut self, rule: Rule) {
        if let Some(name) = rule.keyframes {
            self.keyframes.insert(name);
        }
        match (&rule.container, &rule.media) {
            (Some(container), media) => {
                let block = self.containers.entry(container.clone()).or_default();
                match media {
                    Some(media) => push(block.media.entry(media.query.clone()).or_default(), &rule),
                    None => push(&mut block.rules, &rule),
                }
                tracing::trace!(selector = %rule.selector, container = %container, "container bucket");
            }
            (None, Some(media)) => {
                let (priority, bucket) = self
                    .media
                    .entry(media.query.clone())
                    .or_insert_with(|| (media.priority, Bucket::new()));
                // A query reached through both a named and an arbitrary
                // variant sorts by the named one.
                *priority = (*priority).min(media.priority);
                push(bucket, &rule);
                tracing::trace!(selector = %rule.selector, media = %media.query, "media bucket");
            }
            (None, None) => push(&mut self.utilities, &rule),
        }
    }

    /// True when no utility, keyframes or component was emitted.
    pub fn is_empty(&self) -> bool {
        self.utilities.is_empty()
            && self.keyframes.is_empty()
            && self.media.is_empty()
            && self.containers.is_empty()
            && self.components.is_empty()
    }

    /// Utilities and components without the layer-order header.
    pub fn render_body(&self) -> String {
        let mut css = String::new();

        if !self.utilities.is_empty() || !self.keyframes.is_empty() {
            css.push_str("@layer utilities {\n");
            write_bucket(&mut css, &self.utilities, "  ");
            for name in &self.keyframes {
                if let Some(block) = keyframes_css(name) {
                    let _ = writeln!(css, "  {block}");
                }
            }
            css.push_str("}\n");
        }

        let mut media: Vec<(&String, &(u8, Bucket))> = self.media.iter().collect();
        media.sort_by_key(|(_, (priority, _))| *priority);
        for (query, (_, bucket)) in media {
            let _ = writeln!(css, "@layer utilities {{\n  {query} {{");
            write_bucket(&mut css, bucket, "    ");
            css.push_str("  }\n}\n");
        }

        for (query, block) in &self.containers {
            let _ = writeln!(css, "@layer utilities {{\n  {query} {{");
            write_bucket(&mut css, &block.rules, "    ");
            for (media, bucket) in &block.media {
                let _ = writeln!(css, "    {media} {{");
                write_bucket(&mut css, bucket, "      ");
                css.push_str("    }\n");
            }
            css.push_str("  }\n}\n");
        }

        if !self.components.is_empty() {
            css.push_str("@layer components {\n");
            for fragment in &self.components {
                for line in fragment.trim_end().lines() {
                    let _ = writeln!(css, "  {line}");
                }
            }
            css.push_str("}\n");
        }

        css
    }

    /// The full stylesheet, starting with the layer-order statement.
    pub fn render(&self) -> String {
        format!("{LAYER_ORDER}\n{}", self.render_body())
    }
}

/// Strips a leading or trailing `!` important marker.
fn strip_important(base: &str) -> (&str, bool) {
    if let Some(rest) = base.strip_prefix('!') {
        (rest, true)
    } else if let Some(rest) = base.strip_suffix('!') {
        (rest, true)
    } else {
        (base, false)
    }
}

/// Runs the token pipeline against one trie, theme and component library.
#[derive(Debug, Clone, Copy)]
pub struct Assembler<'a> {
    trie: &'a UtilityTrie,
    theme: &'a ThemeConfig,
    components: Option<&'a ComponentLibrary>,
}

impl<'a> Assembler<'a> {
    pub fn new(trie: &'a UtilityTrie, theme: &'a ThemeConfig) -> Self {
        Self {
            trie,
            theme,
            components: None,
        }
    }

    pub fn with_components(mut self, components: &'a ComponentLibrary) -> Self {
        self.components = Some(components);
        self
    }

    /// Resolves one class token, or `None` when its base utility or any of
    /// its variants is unknown.
    pub fn resolve_token(&self, token: &str) -> Option<Rule> {
        let (prefixes, base) = decompose(token);
        let (base, important) = strip_important(base);
        if base.is_empty() {
            return None;
        }

        let (declarations, suffix, keyframes) = match self.trie.search(base) {
            Some(utility) => (
                utility.declarations.clone(),
                utility.selector_suffix,
                utility.keyframes,
            ),
            None => (
                recipes::resolve(base).or_else(|| self.theme_color(base))?,
                None,
                None,
            ),
        };
        let declarations: Vec<Declaration> = if important {
            declarations.into_iter().map(Declaration::important).collect()
        } else {
            declarations
        };

        let selector = build_selector(token, &prefixes, self.theme, suffix)?;
        Some(Rule {
            selector: selector.selector,
            declarations,
            media: selector.media,
            container: selector.container,
            keyframes,
        })
    }

    /// `<color-prefix>-<name>` (optionally `/<opacity>`) for a color added by
    /// the theme overlay.
    fn theme_color(&self, base: &str) -> Option<Vec<Declaration>> {
        let (props, rest) = split_color_prefix(base)?;
        let (name, pct) = match recipes::split_opacity(rest) {
            Some((name, pct)) => (name, Some(pct)),
            None => (rest, None),
        };
        if !self.theme.colors.contains_key(name) {
            return None;
        }
        let color = format!("var(--color-{name})");
        let value = match pct {
            Some(pct) => recipes::color_mix(&color, &pct),
            None => color,
        };
        Some(props.iter().map(|p| Declaration::new(*p, value.as_str())).collect())
    }

    /// Resolves every unique token and buckets the results.
    pub fn assemble<S: AsRef<str>>(&self, tokens: &[S]) -> Stylesheet {
        let mut sheet = Stylesheet::default();
        let mut seen = IndexSet::new();
        let mut used = IndexSet::new();

        for token in tokens {
            let token = token.as_ref();
            if !seen.insert(token) {
                continue;
            }

            if let Some(library) = self.components {
                let (_, base) = decompose(token);
                if let Some(name) = library.match_base(strip_important(base).0) {
                    used.insert(name);
                }
            }

            match self.resolve_token(token) {
                Some(rule) => sheet.add(rule),
                None => {
                    if crate::debug_enabled() {
                        tracing::debug!(token, "unresolved class");
                    }
                }
            }
        }

        if let Some(library) = self.components {
            sheet.components = used
                .into_iter()
                .filter_map(|name| library.fragment(name))
                .map(str::to_string)
                .collect();
        }
        sheet
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::default_trie;
    use pretty_assertions::assert_eq;

    fn css(tokens: &[&str]) -> String {
        let theme = ThemeConfig::default();
        Assembler::new(default_trie(), &theme).assemble(tokens).render()
    }

    #[test]
    fn header_is_always_present() {
        assert_eq!(css(&[]), format!("{LAYER_ORDER}\n"));
        assert_eq!(css(&["totally-bogus-class"]), format!("{LAYER_ORDER}\n"));
    }

    #[test]
    fn plain_utilities_share_one_block() {
        assert_eq!(
            css(&["flex", "p-4"]),
            "@layer theme, base, components, utilities;\n\
             @layer utilities {\n  \
             .flex { display: flex; }\n  \
             .p-4 { padding: calc(var(--spacing) * 4); }\n\
             }\n"
        );
    }

    #[test]
    fn identical_bodies_are_grouped() {
        let out = css(&["hidden", "flex", "hidden", "max-md:hidden"]);
        assert!(out.contains("  .hidden { display: none; }\n"));
        assert_eq!(out.matches(".hidden {").count(), 1);

        let out = css(&["w-1/2", "w-2/4"]);
        assert!(out.contains("  .w-1\\/2, .w-2\\/4 { width: 50%; }\n"));
    }

    #[test]
    fn media_blocks_follow_priority_order() {
        let out = css(&["xl:flex", "print:hidden", "sm:block", "md:grid", "flex"]);
        let at = |needle: &str| out.find(needle).unwrap_or_else(|| panic!("{needle} missing"));
        assert!(at(".flex {") < at("@media print"));
        assert!(at("@media print") < at("@media (min-width: 40rem)"));
        assert!(at("@media (min-width: 40rem)") < at("@media (min-width: 48rem)"));
        assert!(at("@media (min-width: 48rem)") < at("@media (min-width: 80rem)"));
    }

    #[test]
    fn media_block_layout() {
        assert_eq!(
            css(&["md:flex"]),
            "@layer theme, base, components, utilities;\n\
             @layer utilities {\n  \
             @media (min-width: 48rem) {\n    \
             .md\\:flex { display: flex; }\n  \
             }\n\
             }\n"
        );
    }

    #[test]
    fn container_with_nested_media() {
        let out = css(&["@md:flex", "@md:dark:hidden"]);
        assert!(out.contains(
            "@layer utilities {\n  @container (min-width: 28rem) {\n    \
             .\\@md\\:flex { display: flex; }\n    \
             @media (prefers-color-scheme: dark) {\n      \
             .\\@md\\:dark\\:hidden { display: none; }\n    }\n  }\n}\n"
        ));
    }

    #[test]
    fn arbitrary_query_first_keeps_breakpoint_order() {
        let out = css(&["min-[48rem]:flex", "lg:block", "md:grid"]);
        let md = out.find("@media (min-width: 48rem)").unwrap();
        let lg = out.find("@media (min-width: 64rem)").unwrap();
        assert!(md < lg);
        assert_eq!(out.matches("@media (min-width: 48rem)").count(), 1);
        assert!(out.contains("    .min-\\[48rem\\]\\:flex { display: flex; }\n"));
        assert!(out.contains("    .md\\:grid { display: grid; }\n"));

        let out = css(&["[@media_(min-width:_48rem)]:block", "lg:flex", "md:grid"]);
        let md = out.find("@media (min-width: 48rem)").unwrap();
        assert!(md < out.find("@media (min-width: 64rem)").unwrap());
        assert_eq!(out.matches("@media (min-width: 48rem)").count(), 1);
    }

    #[test]
    fn container_blocks_keep_insertion_order() {
        let out = css(&["@lg:flex", "@sm:block", "@lg:hidden"]);
        let lg = out.find("@container (min-width: 32rem)").unwrap();
        let sm = out.find("@container (min-width: 24rem)").unwrap();
        assert!(lg < sm);
        assert_eq!(out.matches("@container (min-width: 32rem)").count(), 1);
        let lg_block = &out[lg..sm];
        assert!(lg_block.contains(".\\@lg\\:flex { display: flex; }"));
        assert!(lg_block.contains(".\\@lg\\:hidden { display: none; }"));
    }

    #[test]
    fn keyframes_follow_main_rules() {
        let out = css(&["animate-spin", "flex"]);
        let spin = out.find("@keyframes spin").unwrap();
        assert!(out.find(".flex {").unwrap() < spin);
        assert!(out.find(".animate-spin {").unwrap() < spin);
        assert_eq!(out.matches("@keyframes spin").count(), 1);
    }

    #[test]
    fn important_marker() {
        let out = css(&["!flex", "hidden!"]);
        assert!(out.contains(".\\!flex { display: flex !important; }"));
        assert!(out.contains(".hidden\\! { display: none !important; }"));
    }

    #[test]
    fn components_spliced_once_in_first_seen_order() {
        let theme = ThemeConfig::default();
        let library = ComponentLibrary::builtin();
        let sheet = Assembler::new(default_trie(), &theme)
            .with_components(&library)
            .assemble(&["card", "btn-primary", "btn", "hover:card", "flex"]);
        let out = sheet.render();
        let block = &out[out.find("@layer components {").unwrap()..];
        assert_eq!(block.matches(".card {").count(), 1);
        assert_eq!(block.matches(".btn {").count(), 1);
        assert!(block.find(".card {").unwrap() < block.find(".btn {").unwrap());
        assert!(out.find(".flex {").unwrap() < out.find("@layer components").unwrap());
    }

    #[test]
    fn theme_overlay_colors_resolve() {
        let theme = ThemeConfig::from_yaml_str("colors:\n  brand: '#123456'\n").unwrap();
        let assembler = Assembler::new(default_trie(), &theme);
        let rule = assembler.resolve_token("md:border-brand").unwrap();
        assert_eq!(rule.body(), "border-color: var(--color-brand);");
        assert_eq!(rule.media.unwrap().priority, 2);

        let rule = assembler.resolve_token("bg-brand/50").unwrap();
        assert_eq!(
            rule.body(),
            "background-color: color-mix(in oklab, var(--color-brand) 50%, transparent);"
        );
        assert!(assembler.resolve_token("bg-brand/500").is_none());
        assert!(assembler.resolve_token("bg-nobrand/50").is_none());
    }

    #[test]
    fn resolve_token_uses_recipes_on_trie_miss() {
        let theme = ThemeConfig::default();
        let assembler = Assembler::new(default_trie(), &theme);
        let rule = assembler.resolve_token("hover:bg-red-500/50").unwrap();
        assert_eq!(rule.selector, ".hover\\:bg-red-500\\/50:hover");
        assert_eq!(
            rule.body(),
            "background-color: color-mix(in oklab, var(--color-red-500) 50%, transparent);"
        );
        assert!(assembler.resolve_token("wat:flex").is_none());
        assert!(assembler.resolve_token("text-brand").is_none());
        assert!(assembler.resolve_token("!").is_none());
    }
}
