//! Color-name table shared by the trie population, the recipe resolver and the
//! default theme.
//!
//! Every theme-backed color resolves to `var(--color-<name>)`; the theme layer
//! defines the custom property. Keywords (`transparent`, `current`, `inherit`)
//! resolve to literal CSS values.

use indexmap::IndexMap;

/// Shade steps for every palette family.
pub const SHADES: [&str; 11] = [
    "50", "100", "200", "300", "400", "500", "600", "700", "800", "900", "950",
];

/// Palette families and their hex value per shade, in [`SHADES`] order.
pub const PALETTE: &[(&str, [&str; 11])] = &[
    ("slate",   ["#f8fafc", "#f1f5f9", "#e2e8f0", "#cbd5e1", "#94a3b8", "#64748b", "#475569", "#334155", "#1e293b", "#0f172a", "#020617"]),
    ("gray",    ["#f9fafb", "#f3f4f6", "#e5e7eb", "#d1d5db", "#9ca3af", "#6b7280", "#4b5563", "#374151", "#1f2937", "#111827", "#030712"]),
    ("zinc",    ["#fafafa", "#f4f4f5", "#e4e4e7", "#d4d4d8", "#a1a1aa", "#71717a", "#52525b", "#3f3f46", "#27272a", "#18181b", "#09090b"]),
    ("neutral", ["#fafafa", "#f5f5f5", "#e5e5e5", "#d4d4d4", "#a3a3a3", "#737373", "#525252", "#404040", "#262626", "#171717", "#0a0a0a"]),
    ("stone",   ["#fafaf9", "#f5f5f4", "#e7e5e4", "#d6d3d1", "#a8a29e", "#78716c", "#57534e", "#44403c", "#292524", "#1c1917", "#0c0a09"]),
    ("red",     ["#fef2f2", "#fee2e2", "#fecaca", "#fca5a5", "#f87171", "#ef4444", "#dc2626", "#b91c1c", "#991b1b", "#7f1d1d", "#450a0a"]),
    ("orange",  ["#fff7ed", "#ffedd5", "#fed7aa", "#fdba74", "#fb923c", "#f97316", "#ea580c", "#c2410c", "#9a3412", "#7c2d12", "#431407"]),
    ("amber",   ["#fffbeb", "#fef3c7", "#fde68a", "#fcd34d", "#fbbf24", "#f59e0b", "#d97706", "#b45309", "#92400e", "#78350f", "#451a03"]),
    ("yellow",  ["#fefce8", "#fef9c3", "#fef08a", "#fde047", "#facc15", "#eab308", "#ca8a04", "#a16207", "#854d0e", "#713f12", "#422006"]),
    ("lime",    ["#f7fee7", "#ecfccb", "#d9f99d", "#bef264", "#a3e635", "#84cc16", "#65a30d", "#4d7c0f", "#3f6212", "#365314", "#1a2e05"]),
    ("green",   ["#f0fdf4", "#dcfce7", "#bbf7d0", "#86efac", "#4ade80", "#22c55e", "#16a34a", "#15803d", "#166534", "#14532d", "#052e16"]),
    ("emerald", ["#ecfdf5", "#d1fae5", "#a7f3d0", "#6ee7b7", "#34d399", "#10b981", "#059669", "#047857", "#065f46", "#064e3b", "#022c22"]),
    ("teal",    ["#f0fdfa", "#ccfbf1", "#99f6e4", "#5eead4", "#2dd4bf", "#14b8a6", "#0d9488", "#0f766e", "#115e59", "#134e4a", "#042f2e"]),
    ("cyan",    ["#ecfeff", "#cffafe", "#a5f3fc", "#67e8f9", "#22d3ee", "#06b6d4", "#0891b2", "#0e7490", "#155e75", "#164e63", "#083344"]),
    ("sky",     ["#f0f9ff", "#e0f2fe", "#bae6fd", "#7dd3fc", "#38bdf8", "#0ea5e9", "#0284c7", "#0369a1", "#075985", "#0c4a6e", "#082f49"]),
    ("blue",    ["#eff6ff", "#dbeafe", "#bfdbfe", "#93c5fd", "#60a5fa", "#3b82f6", "#2563eb", "#1d4ed8", "#1e40af", "#1e3a8a", "#172554"]),
    ("indigo",  ["#eef2ff", "#e0e7ff", "#c7d2fe", "#a5b4fc", "#818cf8", "#6366f1", "#4f46e5", "#4338ca", "#3730a3", "#312e81", "#1e1b4b"]),
    ("violet",  ["#f5f3ff", "#ede9fe", "#ddd6fe", "#c4b5fd", "#a78bfa", "#8b5cf6", "#7c3aed", "#6d28d9", "#5b21b6", "#4c1d95", "#2e1065"]),
    ("purple",  ["#faf5ff", "#f3e8ff", "#e9d5ff", "#d8b4fe", "#c084fc", "#a855f7", "#9333ea", "#7e22ce", "#6b21a8", "#581c87", "#3b0764"]),
    ("fuchsia", ["#fdf4ff", "#fae8ff", "#f5d0fe", "#f0abfc", "#e879f9", "#d946ef", "#c026d3", "#a21caf", "#86198f", "#701a75", "#4a044e"]),
    ("pink",    ["#fdf2f8", "#fce7f3", "#fbcfe8", "#f9a8d4", "#f472b6", "#ec4899", "#db2777", "#be185d", "#9d174d", "#831843", "#500724"]),
    ("rose",    ["#fff1f2", "#ffe4e6", "#fecdd3", "#fda4af", "#fb7185", "#f43f5e", "#e11d48", "#be123c", "#9f1239", "#881337", "#4c0519"]),
];

/// Single-value colors backed by the theme (`--color-black`, `--color-primary`, ...).
pub const NAMED: &[(&str, &str)] = &[
    ("black",             "#000000"),
    ("white",             "#ffffff"),
    ("primary",           "#4f46e5"),
    ("primary-content",   "#ffffff"),
    ("secondary",         "#db2777"),
    ("secondary-content", "#ffffff"),
    ("accent",            "#0d9488"),
    ("accent-content",    "#ffffff"),
    ("neutral",           "#2b3440"),
    ("neutral-content",   "#d7dde4"),
    ("base-100",          "#ffffff"),
    ("base-200",          "#f2f2f2"),
    ("base-300",          "#e5e6e6"),
    ("base-content",      "#1f2937"),
    ("info",              "#3abff8"),
    ("info-content",      "#002b3d"),
    ("success",           "#36d399"),
    ("success-content",   "#003320"),
    ("warning",           "#fbbd23"),
    ("warning-content",   "#382800"),
    ("error",             "#f87272"),
    ("error-content",     "#470000"),
];

/// Color keywords that bypass the theme.
pub const KEYWORDS: &[(&str, &str)] = &[
    ("transparent", "transparent"),
    ("current",     "currentColor"),
    ("inherit",     "inherit"),
];

/// Utility prefixes that take a color, and the properties they set.
/// Side-specific border prefixes precede `border`.
pub const COLOR_PREFIXES: &[(&str, &[&str])] = &[
    ("decoration", &["text-decoration-color"]),
    ("border-x",   &["border-inline-color"]),
    ("border-y",   &["border-block-color"]),
    ("border-t",   &["border-top-color"]),
    ("border-r",   &["border-right-color"]),
    ("border-b",   &["border-bottom-color"]),
    ("border-l",   &["border-left-color"]),
    ("outline",    &["outline-color"]),
    ("border",     &["border-color"]),
    ("accent",     &["accent-color"]),
    ("stroke",     &["stroke"]),
    ("caret",      &["caret-color"]),
    ("text",       &["color"]),
    ("ring",       &["--tw-ring-color"]),
    ("fill",       &["fill"]),
    ("from",       &["--tw-gradient-from"]),
    ("bg",         &["background-color"]),
    ("to",         &["--tw-gradient-to"]),
];

/// Every theme-backed color name: palette shades first, then named colors.
pub fn theme_color_names() -> impl Iterator<Item = String> {
    PALETTE
        .iter()
        .flat_map(|(family, _)| SHADES.iter().map(move |shade| format!("{family}-{shade}")))
        .chain(NAMED.iter().map(|(name, _)| name.to_string()))
}

/// Every name a color utility accepts (theme colors plus keywords).
pub fn all_color_names() -> impl Iterator<Item = String> {
    theme_color_names().chain(KEYWORDS.iter().map(|(name, _)| name.to_string()))
}

/// Default `--color-*` tokens for the theme layer.
pub fn default_theme_colors() -> IndexMap<String, String> {
    let mut colors = IndexMap::new();
    for (family, values) in PALETTE {
        for (shade, hex) in SHADES.iter().zip(values.iter()) {
            colors.insert(format!("{family}-{shade}"), hex.to_string());
        }
    }
    for (name, hex) in NAMED {
        colors.insert(name.to_string(), hex.to_string());
    }
    colors
}

fn is_palette_color(name: &str) -> bool {
    let Some((family, shade)) = name.rsplit_once('-') else {
        return false;
    };
    PALETTE.iter().any(|(f, _)| *f == family) && SHADES.contains(&shade)
}

/// Resolves a color name (`red-500`, `primary`, `current`) to a CSS value.
pub fn resolve_color(name: &str) -> Option<String> {
    if let Some((_, value)) = KEYWORDS.iter().find(|(k, _)| *k == name) {
        return Some(value.to_string());
    }
    if NAMED.iter().any(|(n, _)| *n == name) || is_palette_color(name) {
        return Some(format!("var(--color-{name})"));
    }
    None
}

/// Finds the color prefix a utility starts with, returning its properties and
/// the remainder after `<prefix>-`.
pub fn split_color_prefix(base: &str) -> Option<(&'static [&'static str], &str)> {
    COLOR_PREFIXES.iter().find_map(|(prefix, props)| {
        base.strip_prefix(prefix)
            .and_then(|rest| rest.strip_prefix('-'))
            .map(|rest| (*props, rest))
    })
}

const CSS_COLOR_FUNCTIONS: &[&str] = &[
    "rgb(", "rgba(", "hsl(", "hsla(", "hwb(", "lab(", "lch(", "oklab(", "oklch(", "color(",
    "color-mix(", "light-dark(",
];

const CSS_NAMED_COLORS: &[&str] = &[
    "transparent", "currentcolor", "black", "white", "red", "green", "blue", "yellow",
    "orange", "purple", "pink", "gray", "grey", "silver", "navy", "teal", "maroon", "olive",
    "lime", "aqua", "fuchsia", "cyan", "magenta", "brown", "gold", "indigo", "violet",
    "crimson", "coral", "salmon", "tomato", "khaki", "beige", "ivory", "tan",
];

/// Sniffs whether an arbitrary value is a color.
pub fn is_color_like(value: &str) -> bool {
    let lower = value.trim().to_ascii_lowercase();
    if lower.starts_with('#') {
        let hex = &lower[1..];
        return matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit());
    }
    if lower.starts_with("var(--color-") {
        return true;
    }
    CSS_COLOR_FUNCTIONS.iter().any(|f| lower.starts_with(f))
        || CSS_NAMED_COLORS.contains(&lower.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_and_named_colors_resolve_to_theme_vars() {
        assert_eq!(resolve_color("red-500").as_deref(), Some("var(--color-red-500)"));
        assert_eq!(resolve_color("primary").as_deref(), Some("var(--color-primary)"));
        assert_eq!(resolve_color("base-100").as_deref(), Some("var(--color-base-100)"));
    }

    #[test]
    fn keywords_resolve_to_literals() {
        assert_eq!(resolve_color("current").as_deref(), Some("currentColor"));
        assert_eq!(resolve_color("transparent").as_deref(), Some("transparent"));
    }

    #[test]
    fn unknown_names_do_not_resolve() {
        assert_eq!(resolve_color("red-550"), None);
        assert_eq!(resolve_color("chartreuse-500"), None);
        assert_eq!(resolve_color("neutral-"), None);
    }

    #[test]
    fn prefix_split_prefers_longest() {
        let (props, rest) = split_color_prefix("border-t-red-500").unwrap();
        assert_eq!(props, &["border-top-color"]);
        assert_eq!(rest, "red-500");
    }

    #[test]
    fn default_theme_has_every_palette_shade() {
        let colors = default_theme_colors();
        assert_eq!(colors.len(), PALETTE.len() * SHADES.len() + NAMED.len());
        assert_eq!(colors.get("blue-500").map(String::as_str), Some("#3b82f6"));
    }

    #[test]
    fn color_sniffing() {
        assert!(is_color_like("#fff"));
        assert!(is_color_like("rgb(0 0 0 / 50%)"));
        assert!(is_color_like("var(--color-gray-950)"));
        assert!(!is_color_like("10px"));
        assert!(!is_color_like("#ggg"));
    }
}
