//! # utilcss
//!
//! Compiles utility-class markup into layered CSS.
//!
//! Class tokens are pulled from `class="..."` attributes, split into variant
//! prefixes and a base utility, resolved against a static utility trie (or
//! synthesized from arbitrary and dynamic values), and emitted inside
//! `@layer theme, base, components, utilities`.
//!
//! ## Example
//! ```ignore
//! use utilcss::{generate, default_trie, Source, ThemeConfig};
//!
//! let theme = ThemeConfig::default();
//! let css = generate(
//!     Source::Html(r#"<div class="flex p-4 md:hover:bg-red-500/50"></div>"#),
//!     &theme,
//!     default_trie(),
//! );
//! assert!(css.contains(".flex { display: flex; }"));
//! ```
//!
//! ## Theme overrides
//! ```ignore
//! let theme = utilcss::ThemeConfig::from_yaml_str("colors:\n  primary: '#ff0000'\n")?;
//! let css = utilcss::generate_with_base_theme(Source::Classes(&["text-primary"]), &theme, default_trie());
//! ```

pub mod cascade;
pub mod colors;
pub mod components;
pub mod error;
pub mod layers;
pub mod parser;
pub mod recipes;
pub mod registry;
pub mod rule;
pub mod theme;
pub mod trie;
pub mod variants;

pub use cascade::{Assembler, Stylesheet, LAYER_ORDER};
pub use components::ComponentLibrary;
pub use error::{UtilCssError, UtilCssResult};
pub use layers::{generate_base_layer, generate_theme_layer};
pub use parser::extract_classes;
pub use registry::{build_trie, default_trie};
pub use rule::{Declaration, MediaQuery, Rule, Utility};
pub use theme::{TextSize, ThemeConfig};
pub use trie::UtilityTrie;

use once_cell::sync::Lazy;

/// Environment variable that turns on logging of unresolved classes.
pub const DEBUG_ENV: &str = "UTILCSS_DEBUG";

static DEBUG: Lazy<bool> = Lazy::new(|| {
    std::env::var(DEBUG_ENV)
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(false)
});

/// Whether `UTILCSS_DEBUG` was set when first checked.
pub fn debug_enabled() -> bool {
    *DEBUG
}

/// Where class tokens come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source<'a> {
    /// Markup scanned for `class` attributes.
    Html(&'a str),
    /// Tokens supplied directly.
    Classes(&'a [&'a str]),
}

impl<'a> From<&'a str> for Source<'a> {
    fn from(html: &'a str) -> Self {
        Source::Html(html)
    }
}

impl<'a> From<&'a [&'a str]> for Source<'a> {
    fn from(classes: &'a [&'a str]) -> Self {
        Source::Classes(classes)
    }
}

impl Source<'_> {
    /// Unique tokens in first-seen order.
    pub fn tokens(&self) -> Vec<String> {
        match self {
            Source::Html(html) => extract_classes(html),
            Source::Classes(classes) => {
                let mut seen = indexmap::IndexSet::new();
                for class in classes.iter().flat_map(|c| c.split_whitespace()) {
                    seen.insert(class.to_string());
                }
                seen.into_iter().collect()
            }
        }
    }
}

/// Header plus utilities and used built-in components.
pub fn generate(source: Source<'_>, theme: &ThemeConfig, trie: &UtilityTrie) -> String {
    generate_with_components(source, theme, trie, ComponentLibrary::shared())
}

/// Like [`generate`], splicing fragments from `components`.
pub fn generate_with_components(
    source: Source<'_>,
    theme: &ThemeConfig,
    trie: &UtilityTrie,
    components: &ComponentLibrary,
) -> String {
    assemble(source, theme, trie, components).render()
}

/// Header, base layer, theme layer, then the same output as [`generate`].
pub fn generate_with_base_theme(source: Source<'_>, theme: &ThemeConfig, trie: &UtilityTrie) -> String {
    generate_with_base_theme_and_components(source, theme, trie, ComponentLibrary::shared())
}

pub fn generate_with_base_theme_and_components(
    source: Source<'_>,
    theme: &ThemeConfig,
    trie: &UtilityTrie,
    components: &ComponentLibrary,
) -> String {
    let sheet = assemble(source, theme, trie, components);
    format!(
        "{LAYER_ORDER}\n{}{}{}",
        generate_base_layer(),
        generate_theme_layer(theme),
        sheet.render_body()
    )
}

/// Utilities for the classes in `html` with the default theme and trie.
pub fn generate_css(html: &str) -> String {
    generate(Source::Html(html), &ThemeConfig::default(), default_trie())
}

fn assemble(
    source: Source<'_>,
    theme: &ThemeConfig,
    trie: &UtilityTrie,
    components: &ComponentLibrary,
) -> Stylesheet {
    let tokens = source.tokens();
    Assembler::new(trie, theme)
        .with_components(components)
        .assemble(&tokens)
}
