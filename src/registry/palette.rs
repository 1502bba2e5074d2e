use super::add_each;
use crate::colors::{all_color_names, resolve_color, COLOR_PREFIXES};
use crate::trie::UtilityTrie;

/// Every color prefix crossed with every color name.
pub(super) fn register(trie: &mut UtilityTrie) {
    let colors: Vec<(String, String)> = all_color_names()
        .filter_map(|name| resolve_color(&name).map(|value| (name, value)))
        .collect();
    for (prefix, props) in COLOR_PREFIXES {
        for (name, value) in &colors {
            add_each(trie, &format!("{prefix}-{name}"), props, value);
        }
    }
}
