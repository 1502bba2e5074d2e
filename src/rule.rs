//! Resolved CSS building blocks shared by the trie, the recipe resolver and the
//! cascade assembler.

use std::fmt::Write;

/// `@supports` condition guarding color-mix upgrades.
pub const COLOR_MIX_SUPPORTS: &str = "(color: color-mix(in lab, red, red))";

/// A single CSS declaration, or a nested `@supports` block of declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    Property {
        name: String,
        value: String,
    },
    Supports {
        condition: String,
        properties: Vec<(String, String)>,
    },
}

impl Declaration {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Declaration::Property {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn supports(condition: impl Into<String>, properties: Vec<(String, String)>) -> Self {
        Declaration::Supports {
            condition: condition.into(),
            properties,
        }
    }

    /// Marks every value `!important`.
    pub fn important(self) -> Self {
        match self {
            Declaration::Property { name, value } => Declaration::Property {
                name,
                value: format!("{value} !important"),
            },
            Declaration::Supports {
                condition,
                properties,
            } => Declaration::Supports {
                condition,
                properties: properties
                    .into_iter()
                    .map(|(n, v)| (n, format!("{v} !important")))
                    .collect(),
            },
        }
    }

    fn write_to(&self, out: &mut String) {
        match self {
            Declaration::Property { name, value } => {
                let _ = write!(out, "{name}: {value};");
            }
            Declaration::Supports {
                condition,
                properties,
            } => {
                let _ = write!(out, "@supports {condition} {{");
                for (name, value) in properties {
                    let _ = write!(out, " {name}: {value};");
                }
                out.push_str(" }");
            }
        }
    }
}

/// Builds a declaration list from static `(property, value)` pairs.
pub fn declarations(props: &[(&str, &str)]) -> Vec<Declaration> {
    props.iter().map(|(k, v)| Declaration::new(*k, *v)).collect()
}

/// Renders declarations as a single-line rule body, e.g. `display: flex;`.
pub fn render_body(decls: &[Declaration]) -> String {
    let mut out = String::new();
    for (i, decl) in decls.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        decl.write_to(&mut out);
    }
    out
}

/// Value stored in the static trie for one base utility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utility {
    pub declarations: Vec<Declaration>,
    /// Appended to the class selector, e.g. ` > :not(:last-child)`.
    pub selector_suffix: Option<&'static str>,
    /// Name of a built-in `@keyframes` block the utility depends on.
    pub keyframes: Option<&'static str>,
}

impl Utility {
    pub fn new(props: &[(&str, &str)]) -> Self {
        Self::from_declarations(declarations(props))
    }

    pub fn from_declarations(declarations: Vec<Declaration>) -> Self {
        Self {
            declarations,
            selector_suffix: None,
            keyframes: None,
        }
    }

    pub fn with_suffix(mut self, suffix: &'static str) -> Self {
        self.selector_suffix = Some(suffix);
        self
    }

    pub fn with_keyframes(mut self, name: &'static str) -> Self {
        self.keyframes = Some(name);
        self
    }
}

/// A media query wrapper plus its position in the fixed ordering table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaQuery {
    pub query: String,
    pub priority: u8,
}

/// Fully resolved rule for one class token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub selector: String,
    pub declarations: Vec<Declaration>,
    pub media: Option<MediaQuery>,
    pub container: Option<String>,
    pub keyframes: Option<&'static str>,
}

impl Rule {
    pub fn body(&self) -> String {
        render_body(&self.declarations)
    }

    /// `selector { body }` on one line, without any wrapper.
    pub fn to_css(&self) -> String {
        format!("{} {{ {} }}", self.selector, self.body())
    }
}
