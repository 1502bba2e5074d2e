use crate::colors;
use crate::error::{UtilCssError, UtilCssResult};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One entry of the type scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSize {
    #[serde(deserialize_with = "scalar::string")]
    pub size: String,
    #[serde(rename = "lineHeight", deserialize_with = "scalar::string")]
    pub line_height: String,
}

impl TextSize {
    fn new(size: &str, line_height: &str) -> Self {
        Self {
            size: size.to_string(),
            line_height: line_height.to_string(),
        }
    }
}

/// Design tokens rendered into the `theme` layer and consulted for
/// breakpoint and container sizes.
///
/// An empty category emits nothing; lookups that miss fall back to the
/// built-in tables where one exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub colors: IndexMap<String, String>,
    pub spacing: Option<String>,
    pub radius: IndexMap<String, String>,
    pub text: IndexMap<String, TextSize>,
    pub fonts: IndexMap<String, String>,
    #[serde(rename = "fontWeights")]
    pub font_weights: IndexMap<String, String>,
    pub breakpoints: IndexMap<String, String>,
    pub shadows: IndexMap<String, String>,
    #[serde(rename = "zIndex")]
    pub z_index: IndexMap<String, String>,
    pub easings: IndexMap<String, String>,
    pub durations: IndexMap<String, String>,
    pub containers: IndexMap<String, String>,
}

/// Fallback breakpoints when the theme does not define one.
pub const DEFAULT_BREAKPOINTS: &[(&str, &str)] = &[
    ("sm",  "40rem"),
    ("md",  "48rem"),
    ("lg",  "64rem"),
    ("xl",  "80rem"),
    ("2xl", "96rem"),
    ("3xl", "120rem"),
];

/// Fallback container sizes when the theme does not define one.
pub const DEFAULT_CONTAINERS: &[(&str, &str)] = &[
    ("3xs", "16rem"),
    ("2xs", "18rem"),
    ("xs",  "20rem"),
    ("sm",  "24rem"),
    ("md",  "28rem"),
    ("lg",  "32rem"),
    ("xl",  "36rem"),
    ("2xl", "42rem"),
    ("3xl", "48rem"),
    ("4xl", "56rem"),
    ("5xl", "64rem"),
    ("6xl", "72rem"),
    ("7xl", "80rem"),
];

pub(crate) const DEFAULT_RADIUS: &[(&str, &str)] = &[
    ("xs",  "0.125rem"),
    ("sm",  "0.25rem"),
    ("md",  "0.375rem"),
    ("lg",  "0.5rem"),
    ("xl",  "0.75rem"),
    ("2xl", "1rem"),
    ("3xl", "1.5rem"),
    ("4xl", "2rem"),
];

pub(crate) const DEFAULT_TEXT: &[(&str, &str, &str)] = &[
    ("xs",   "0.75rem",  "calc(1 / 0.75)"),
    ("sm",   "0.875rem", "calc(1.25 / 0.875)"),
    ("base", "1rem",     "calc(1.5 / 1)"),
    ("lg",   "1.125rem", "calc(1.75 / 1.125)"),
    ("xl",   "1.25rem",  "calc(1.75 / 1.25)"),
    ("2xl",  "1.5rem",   "calc(2 / 1.5)"),
    ("3xl",  "1.875rem", "calc(2.25 / 1.875)"),
    ("4xl",  "2.25rem",  "calc(2.5 / 2.25)"),
    ("5xl",  "3rem",     "1"),
    ("6xl",  "3.75rem",  "1"),
    ("7xl",  "4.5rem",   "1"),
    ("8xl",  "6rem",     "1"),
    ("9xl",  "8rem",     "1"),
];

pub(crate) const DEFAULT_FONTS: &[(&str, &str)] = &[
    ("sans", "ui-sans-serif, system-ui, sans-serif, \"Apple Color Emoji\", \"Segoe UI Emoji\", \"Segoe UI Symbol\", \"Noto Color Emoji\""),
    ("serif", "ui-serif, Georgia, Cambria, \"Times New Roman\", Times, serif"),
    ("mono", "ui-monospace, SFMono-Regular, Menlo, Monaco, Consolas, \"Liberation Mono\", \"Courier New\", monospace"),
];

pub(crate) const DEFAULT_FONT_WEIGHTS: &[(&str, &str)] = &[
    ("thin",       "100"),
    ("extralight", "200"),
    ("light",      "300"),
    ("normal",     "400"),
    ("medium",     "500"),
    ("semibold",   "600"),
    ("bold",       "700"),
    ("extrabold",  "800"),
    ("black",      "900"),
];

pub(crate) const DEFAULT_SHADOWS: &[(&str, &str)] = &[
    ("2xs",   "0 1px rgb(0 0 0 / 0.05)"),
    ("xs",    "0 1px 2px 0 rgb(0 0 0 / 0.05)"),
    ("sm",    "0 1px 3px 0 rgb(0 0 0 / 0.1), 0 1px 2px -1px rgb(0 0 0 / 0.1)"),
    ("md",    "0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1)"),
    ("lg",    "0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1)"),
    ("xl",    "0 20px 25px -5px rgb(0 0 0 / 0.1), 0 8px 10px -6px rgb(0 0 0 / 0.1)"),
    ("2xl",   "0 25px 50px -12px rgb(0 0 0 / 0.25)"),
    ("inner", "inset 0 2px 4px 0 rgb(0 0 0 / 0.05)"),
];

pub(crate) const DEFAULT_Z_INDEX: &[(&str, &str)] = &[
    ("0",  "0"),
    ("10", "10"),
    ("20", "20"),
    ("30", "30"),
    ("40", "40"),
    ("50", "50"),
];

pub(crate) const DEFAULT_EASINGS: &[(&str, &str)] = &[
    ("in",     "cubic-bezier(0.4, 0, 1, 1)"),
    ("out",    "cubic-bezier(0, 0, 0.2, 1)"),
    ("in-out", "cubic-bezier(0.4, 0, 0.2, 1)"),
];

pub(crate) const DEFAULT_DURATIONS: &[(&str, &str)] = &[
    ("75",   "75ms"),
    ("100",  "100ms"),
    ("150",  "150ms"),
    ("200",  "200ms"),
    ("300",  "300ms"),
    ("500",  "500ms"),
    ("700",  "700ms"),
    ("1000", "1000ms"),
];

fn table(entries: &[(&str, &str)]) -> IndexMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            colors: colors::default_theme_colors(),
            spacing: Some("0.25rem".to_string()),
            radius: table(DEFAULT_RADIUS),
            text: DEFAULT_TEXT
                .iter()
                .map(|(k, size, lh)| (k.to_string(), TextSize::new(size, lh)))
                .collect(),
            fonts: table(DEFAULT_FONTS),
            font_weights: table(DEFAULT_FONT_WEIGHTS),
            breakpoints: table(DEFAULT_BREAKPOINTS),
            shadows: table(DEFAULT_SHADOWS),
            z_index: table(DEFAULT_Z_INDEX),
            easings: table(DEFAULT_EASINGS),
            durations: table(DEFAULT_DURATIONS),
            containers: table(DEFAULT_CONTAINERS),
        }
    }
}

/// Partial theme read from YAML. Every category is optional; present keys
/// override (or extend) the defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeOverrides {
    #[serde(default, deserialize_with = "scalar::map", skip_serializing_if = "Option::is_none")]
    pub colors: Option<IndexMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "scalar::optional")]
    pub spacing: Option<String>,
    #[serde(default, deserialize_with = "scalar::map", skip_serializing_if = "Option::is_none")]
    pub radius: Option<IndexMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<IndexMap<String, TextSize>>,
    #[serde(default, deserialize_with = "scalar::map", skip_serializing_if = "Option::is_none")]
    pub fonts: Option<IndexMap<String, String>>,
    #[serde(default, deserialize_with = "scalar::map", skip_serializing_if = "Option::is_none", rename = "fontWeights")]
    pub font_weights: Option<IndexMap<String, String>>,
    #[serde(default, deserialize_with = "scalar::map", skip_serializing_if = "Option::is_none")]
    pub breakpoints: Option<IndexMap<String, String>>,
    #[serde(default, deserialize_with = "scalar::map", skip_serializing_if = "Option::is_none")]
    pub shadows: Option<IndexMap<String, String>>,
    #[serde(default, deserialize_with = "scalar::map", skip_serializing_if = "Option::is_none", rename = "zIndex")]
    pub z_index: Option<IndexMap<String, String>>,
    #[serde(default, deserialize_with = "scalar::map", skip_serializing_if = "Option::is_none")]
    pub easings: Option<IndexMap<String, String>>,
    #[serde(default, deserialize_with = "scalar::map", skip_serializing_if = "Option::is_none")]
    pub durations: Option<IndexMap<String, String>>,
    #[serde(default, deserialize_with = "scalar::map", skip_serializing_if = "Option::is_none")]
    pub containers: Option<IndexMap<String, String>>,
}

/// YAML scalars (strings, numbers, booleans) read as strings, so `60` and
/// `"60"` are equivalent theme values.
mod scalar {
    use indexmap::IndexMap;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};
    use serde_yaml::Value;

    fn text(value: Value) -> Result<String, String> {
        match value {
            Value::String(s) => Ok(s),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            other => Err(format!("expected a scalar, found {:?}", other)),
        }
    }

    pub fn string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        text(Value::deserialize(d)?).map_err(D::Error::custom)
    }

    pub fn optional<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        match Option::<Value>::deserialize(d)? {
            None | Some(Value::Null) => Ok(None),
            Some(value) => text(value).map(Some).map_err(D::Error::custom),
        }
    }

    pub fn map<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<IndexMap<String, String>>, D::Error> {
        let Some(raw) = Option::<IndexMap<Value, Value>>::deserialize(d)? else {
            return Ok(None);
        };
        raw.into_iter()
            .map(|(k, v)| Ok((text(k)?, text(v)?)))
            .collect::<Result<IndexMap<_, _>, String>>()
            .map(Some)
            .map_err(D::Error::custom)
    }
}

fn merge<V>(target: &mut IndexMap<String, V>, overrides: Option<IndexMap<String, V>>) {
    if let Some(entries) = overrides {
        target.extend(entries);
    }
}

impl ThemeConfig {
    /// A theme with no tokens at all. Every category renders as nothing.
    pub fn empty() -> Self {
        Self {
            colors: IndexMap::new(),
            spacing: None,
            radius: IndexMap::new(),
            text: IndexMap::new(),
            fonts: IndexMap::new(),
            font_weights: IndexMap::new(),
            breakpoints: IndexMap::new(),
            shadows: IndexMap::new(),
            z_index: IndexMap::new(),
            easings: IndexMap::new(),
            durations: IndexMap::new(),
            containers: IndexMap::new(),
        }
    }

    /// Parse a YAML overlay and merge it onto the default theme.
    pub fn from_yaml_str(yaml: &str) -> UtilCssResult<Self> {
        let overrides: ThemeOverrides = if yaml.trim().is_empty() {
            ThemeOverrides::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        let mut theme = Self::default();
        theme.apply(overrides);
        theme.validate()?;
        Ok(theme)
    }

    /// Read a YAML overlay from disk.
    pub fn from_file(path: impl AsRef<Path>) -> UtilCssResult<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|e| UtilCssError::io(path, e))?;
        Self::from_yaml_str(&yaml)
    }

    /// Merge an overlay into this theme, key by key.
    pub fn apply(&mut self, overrides: ThemeOverrides) {
        merge(&mut self.colors, overrides.colors);
        if overrides.spacing.is_some() {
            self.spacing = overrides.spacing;
        }
        merge(&mut self.radius, overrides.radius);
        merge(&mut self.text, overrides.text);
        merge(&mut self.fonts, overrides.fonts);
        merge(&mut self.font_weights, overrides.font_weights);
        merge(&mut self.breakpoints, overrides.breakpoints);
        merge(&mut self.shadows, overrides.shadows);
        merge(&mut self.z_index, overrides.z_index);
        merge(&mut self.easings, overrides.easings);
        merge(&mut self.durations, overrides.durations);
        merge(&mut self.containers, overrides.containers);
    }

    /// Rejects keys that are not plain identifiers and values that would
    /// break out of a declaration.
    pub fn validate(&self) -> UtilCssResult<()> {
        let check = |category: &str, key: &str, value: &str| -> UtilCssResult<()> {
            if key.is_empty()
                || !key
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
            {
                return Err(UtilCssError::InvalidThemeValue {
                    category: category.to_string(),
                    key: key.to_string(),
                    reason: "key must contain only letters, digits, '-' or '_'".to_string(),
                });
            }
            if value.trim().is_empty() {
                return Err(UtilCssError::InvalidThemeValue {
                    category: category.to_string(),
                    key: key.to_string(),
                    reason: "value is empty".to_string(),
                });
            }
            if value.contains([';', '{', '}']) {
                return Err(UtilCssError::InvalidThemeValue {
                    category: category.to_string(),
                    key: key.to_string(),
                    reason: "value must not contain ';', '{' or '}'".to_string(),
                });
            }
            Ok(())
        };

        for (category, map) in [
            ("colors", &self.colors),
            ("radius", &self.radius),
            ("fonts", &self.fonts),
            ("fontWeights", &self.font_weights),
            ("breakpoints", &self.breakpoints),
            ("shadows", &self.shadows),
            ("zIndex", &self.z_index),
            ("easings", &self.easings),
            ("durations", &self.durations),
            ("containers", &self.containers),
        ] {
            for (key, value) in map {
                check(category, key, value)?;
            }
        }
        for (key, entry) in &self.text {
            check("text", key, &entry.size)?;
            check("text", key, &entry.line_height)?;
        }
        if let Some(spacing) = &self.spacing {
            check("spacing", "spacing", spacing)?;
        }
        Ok(())
    }

    /// Min-width for a responsive breakpoint name.
    pub fn breakpoint(&self, name: &str) -> Option<&str> {
        self.breakpoints.get(name).map(String::as_str).or_else(|| {
            DEFAULT_BREAKPOINTS
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| *v)
        })
    }

    /// Min-width for a container-query size name.
    pub fn container(&self, name: &str) -> Option<&str> {
        self.containers.get(name).map(String::as_str).or_else(|| {
            DEFAULT_CONTAINERS
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| *v)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_has_all_categories() {
        let theme = ThemeConfig::default();
        assert_eq!(theme.spacing.as_deref(), Some("0.25rem"));
        assert_eq!(theme.breakpoint("md"), Some("48rem"));
        assert_eq!(theme.container("xs"), Some("20rem"));
        assert_eq!(theme.text["xl"].size, "1.25rem");
        assert_eq!(theme.colors["primary"], "#4f46e5");
    }

    #[test]
    fn test_yaml_overrides_merge_onto_defaults() {
        let yaml = r##"
colors:
  primary: "#ff0000"
  brand: "#123456"
spacing: 0.3rem
breakpoints:
  md: 50rem
zIndex:
  60: 60
text:
  xl:
    size: 1.3rem
    lineHeight: "1.6"
"##;
        let theme = ThemeConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(theme.colors["primary"], "#ff0000");
        assert_eq!(theme.colors["brand"], "#123456");
        assert_eq!(theme.colors["red-500"], "#ef4444");
        assert_eq!(theme.spacing.as_deref(), Some("0.3rem"));
        assert_eq!(theme.breakpoint("md"), Some("50rem"));
        assert_eq!(theme.breakpoint("lg"), Some("64rem"));
        assert_eq!(theme.text["xl"].line_height, "1.6");
        assert_eq!(theme.z_index["60"], "60");
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(ThemeConfig::from_yaml_str("  \n").unwrap(), ThemeConfig::default());
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let err = ThemeConfig::from_yaml_str("colours:\n  primary: red\n").unwrap_err();
        assert!(matches!(err, UtilCssError::ThemeParse(_)));
    }

    #[test]
    fn test_injection_is_rejected() {
        let err = ThemeConfig::from_yaml_str("colors:\n  primary: \"red; } body { color: red\"\n")
            .unwrap_err();
        assert!(matches!(err, UtilCssError::InvalidThemeValue { .. }));
    }

    #[test]
    fn test_malformed_keys_are_rejected() {
        for yaml in [
            "colors:\n  \"x;}\": red\n",
            "breakpoints:\n  \"a b\": 10rem\n",
            "text:\n  \"x{\": { size: 1rem, lineHeight: '1' }\n",
        ] {
            let err = ThemeConfig::from_yaml_str(yaml).unwrap_err();
            assert!(matches!(err, UtilCssError::InvalidThemeValue { .. }), "{yaml}");
        }
        assert!(ThemeConfig::from_yaml_str("colors:\n  brand_2-dark: red\n").is_ok());
    }

    #[test]
    fn test_empty_theme_falls_back_for_lookups() {
        let theme = ThemeConfig::empty();
        assert!(theme.colors.is_empty());
        assert_eq!(theme.breakpoint("sm"), Some("40rem"));
        assert_eq!(theme.container("7xl"), Some("80rem"));
        assert_eq!(theme.breakpoint("4xl"), None);
    }
}
