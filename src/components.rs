//! Pre-authored component CSS, spliced into `@layer components` when a page
//! uses the component's base class.

use crate::error::{UtilCssError, UtilCssResult};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use std::path::Path;

const BUILTIN: &[(&str, &str)] = &[
    ("btn",   include_str!("css/components/btn.css")),
    ("card",  include_str!("css/components/card.css")),
    ("modal", include_str!("css/components/modal.css")),
    ("badge", include_str!("css/components/badge.css")),
    ("alert", include_str!("css/components/alert.css")),
    ("input", include_str!("css/components/input.css")),
];

/// Component name to CSS fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentLibrary {
    fragments: IndexMap<String, String>,
}

static SHARED: Lazy<ComponentLibrary> = Lazy::new(ComponentLibrary::builtin);

impl ComponentLibrary {
    /// A library with no fragments.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        let mut library = Self::new();
        for (name, css) in BUILTIN {
            library.insert(*name, *css);
        }
        library
    }

    /// Process-wide built-in library.
    pub fn shared() -> &'static ComponentLibrary {
        &SHARED
    }

    /// Built-ins plus every `*.css` file in `dir`, keyed by file stem.
    /// A file named after a built-in replaces it.
    pub fn load_dir(dir: impl AsRef<Path>) -> UtilCssResult<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(UtilCssError::ComponentDir {
                path: dir.display().to_string(),
                reason: "not a directory".to_string(),
            });
        }

        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(|e| UtilCssError::io(dir, e))? {
            let path = entry.map_err(|e| UtilCssError::io(dir, e))?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "css") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut library = Self::builtin();
        for path in paths {
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                return Err(UtilCssError::ComponentDir {
                    path: path.display().to_string(),
                    reason: "file name is not valid UTF-8".to_string(),
                });
            };
            let css = std::fs::read_to_string(&path).map_err(|e| UtilCssError::io(&path, e))?;
            tracing::debug!(component = name, path = %path.display(), "loaded component fragment");
            library.insert(name, css);
        }
        Ok(library)
    }

    pub fn insert(&mut self, name: impl Into<String>, css: impl Into<String>) {
        self.fragments.insert(name.into(), css.into());
    }

    pub fn fragment(&self, name: &str) -> Option<&str> {
        self.fragments.get(name).map(String::as_str)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fragments.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// The component a base utility belongs to: `btn` and `btn-primary` both
    /// match `btn`. The longest matching name wins.
    pub fn match_base(&self, base: &str) -> Option<&str> {
        self.fragments
            .keys()
            .filter(|name| {
                base == name.as_str()
                    || base
                        .strip_prefix(name.as_str())
                        .is_some_and(|rest| rest.starts_with('-'))
            })
            .max_by_key(|name| name.len())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_has_every_component() {
        let library = ComponentLibrary::builtin();
        let names: Vec<&str> = library.names().collect();
        assert_eq!(names, vec!["btn", "card", "modal", "badge", "alert", "input"]);
        assert!(library.fragment("btn").unwrap().contains(".btn-primary"));
        assert_eq!(ComponentLibrary::shared().len(), 6);
    }

    #[test]
    fn match_base_prefers_longest_name() {
        let mut library = ComponentLibrary::builtin();
        library.insert("btn-group", ".btn-group { display: inline-flex; }");
        assert_eq!(library.match_base("btn"), Some("btn"));
        assert_eq!(library.match_base("btn-primary"), Some("btn"));
        assert_eq!(library.match_base("btn-group"), Some("btn-group"));
        assert_eq!(library.match_base("btn-group-item"), Some("btn-group"));
        assert_eq!(library.match_base("btnx"), None);
        assert_eq!(library.match_base("flex"), None);
    }

    #[test]
    fn load_dir_layers_files_over_builtins() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("tabs.css"), ".tabs { display: flex; }").unwrap();
        std::fs::write(dir.path().join("btn.css"), ".btn { color: red; }").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let library = ComponentLibrary::load_dir(dir.path()).unwrap();
        assert_eq!(library.fragment("tabs"), Some(".tabs { display: flex; }"));
        assert_eq!(library.fragment("btn"), Some(".btn { color: red; }"));
        assert!(library.fragment("notes").is_none());
        assert_eq!(library.len(), 7);
    }

    #[test]
    fn load_dir_rejects_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = ComponentLibrary::load_dir(&missing).unwrap_err();
        assert!(matches!(err, UtilCssError::ComponentDir { .. }));
    }
}
