use indexmap::IndexSet;
use once_cell::sync::Lazy;
use regex::Regex;

/// `class="..."` or `class='...'`, not `data-class=...`.
static CLASS_ATTR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?:^|[\s<])(?i:class)\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
        .unwrap_or_else(|e| panic!("invalid class attribute pattern: {e}"))
});

/// Extracts all unique CSS class tokens from an HTML string.
///
/// Scans for `class="..."` and `class='...'` attributes and returns
/// each whitespace-separated token exactly once, in order of first appearance.
pub fn extract_classes(html: &str) -> Vec<String> {
    let mut seen = IndexSet::new();
    for caps in CLASS_ATTR.captures_iter(html) {
        let Some(value) = caps.get(1).or_else(|| caps.get(2)) else {
            continue;
        };
        for token in value.as_str().split_whitespace() {
            if !seen.contains(token) {
                seen.insert(token.to_string());
            }
        }
    }
    seen.into_iter().collect()
}
