//! Theme and base cascade layers.

use crate::theme::ThemeConfig;
use indexmap::IndexMap;
use std::fmt::Write;

const BASE_RESET: &str = include_str!("css/base.css");

fn push_category(out: &mut Vec<(String, String)>, prefix: &str, entries: &IndexMap<String, String>) {
    for (key, value) in entries {
        out.push((format!("--{prefix}-{key}"), value.clone()));
    }
}

/// Every custom property the theme defines, in category order.
pub fn theme_properties(config: &ThemeConfig) -> Vec<(String, String)> {
    let mut props = Vec::new();
    push_category(&mut props, "color", &config.colors);
    if let Some(spacing) = &config.spacing {
        props.push(("--spacing".to_string(), spacing.clone()));
    }
    push_category(&mut props, "radius", &config.radius);
    for (key, text) in &config.text {
        props.push((format!("--text-{key}"), text.size.clone()));
        props.push((format!("--text-{key}--line-height"), text.line_height.clone()));
    }
    push_category(&mut props, "font", &config.fonts);
    push_category(&mut props, "font-weight", &config.font_weights);
    push_category(&mut props, "breakpoint", &config.breakpoints);
    push_category(&mut props, "shadow", &config.shadows);
    push_category(&mut props, "z", &config.z_index);
    push_category(&mut props, "ease", &config.easings);
    push_category(&mut props, "duration", &config.durations);
    push_category(&mut props, "container", &config.containers);
    props
}

/// `@layer theme { :root { ... } }`, or nothing for a theme without tokens.
pub fn generate_theme_layer(config: &ThemeConfig) -> String {
    let props = theme_properties(config);
    if props.is_empty() {
        return String::new();
    }
    let mut css = String::from("@layer theme {\n  :root {\n");
    for (name, value) in props {
        let _ = writeln!(css, "    {name}: {value};");
    }
    css.push_str("  }\n}\n");
    css
}

/// The fixed element reset inside `@layer base`.
pub fn generate_base_layer() -> String {
    format!("@layer base {{\n{BASE_RESET}}}\n")
}
