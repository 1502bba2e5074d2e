use pretty_assertions::assert_eq;
use utilcss::{
    default_trie, generate, generate_css, generate_with_base_theme, generate_with_components,
    ComponentLibrary, Source, ThemeConfig,
};

const HEADER: &str = "@layer theme, base, components, utilities;\n";

fn classes(list: &[&str]) -> String {
    generate(Source::Classes(list), &ThemeConfig::default(), default_trie())
}

fn position(css: &str, needle: &str) -> usize {
    css.find(needle)
        .unwrap_or_else(|| panic!("`{needle}` not found in:\n{css}"))
}

#[test]
fn simple_utilities() {
    let css = generate_css(r#"<div class="flex p-4 bg-white"></div>"#);
    assert_eq!(
        css,
        format!(
            "{HEADER}@layer utilities {{\n  \
             .flex {{ display: flex; }}\n  \
             .p-4 {{ padding: calc(var(--spacing) * 4); }}\n  \
             .bg-white {{ background-color: var(--color-white); }}\n\
             }}\n"
        )
    );
}

#[test]
fn bogus_class_is_dropped() {
    assert_eq!(classes(&["totally-bogus-class"]), HEADER);
    assert_eq!(
        classes(&["totally-bogus-class", "flex"]),
        classes(&["flex"])
    );
}

#[test]
fn empty_attribute_variants_are_dropped() {
    assert_eq!(classes(&["aria-:flex", "data-:block", "group-data-:hidden"]), HEADER);
}

#[test]
fn dark_variant() {
    let css = classes(&["dark:text-primary"]);
    assert_eq!(
        css,
        format!(
            "{HEADER}@layer utilities {{\n  \
             @media (prefers-color-scheme: dark) {{\n    \
             .dark\\:text-primary {{ color: var(--color-primary); }}\n  \
             }}\n\
             }}\n"
        )
    );
}

#[test]
fn output_is_deterministic() {
    let html = r#"<div class="md:flex hover:bg-red-500/50 p-[13px] animate-spin @lg:grid card"></div>"#;
    let theme = ThemeConfig::default();
    let first = generate(Source::Html(html), &theme, default_trie());
    for _ in 0..5 {
        assert_eq!(generate(Source::Html(html), &theme, default_trie()), first);
    }
}

#[test]
fn duplicates_emit_once() {
    let css = generate_css(r#"<p class="flex flex"></p><span class="flex p-2"></span>"#);
    assert_eq!(css.matches(".flex {").count(), 1);
    assert_eq!(css.matches(".p-2 {").count(), 1);
}

#[test]
fn identical_bodies_share_a_selector_list() {
    let css = classes(&["w-1/2", "w-2/4", "w-3/6"]);
    assert!(css.contains("  .w-1\\/2, .w-2\\/4, .w-3\\/6 { width: 50%; }\n"));
}

#[test]
fn media_blocks_follow_breakpoint_order() {
    let css = classes(&[
        "3xl:flex", "2xl:flex", "xl:flex", "lg:flex", "md:flex", "sm:flex", "print:flex", "block",
    ]);
    let order = [
        ".block {",
        "@media print",
        "@media (min-width: 40rem)",
        "@media (min-width: 48rem)",
        "@media (min-width: 64rem)",
        "@media (min-width: 80rem)",
        "@media (min-width: 96rem)",
        "@media (min-width: 120rem)",
    ];
    let positions: Vec<usize> = order.iter().map(|n| position(&css, n)).collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn unlisted_media_sorts_after_breakpoints() {
    let css = classes(&["motion-safe:animate-spin", "sm:flex"]);
    assert!(position(&css, "@media (min-width: 40rem)") < position(&css, "@media (prefers-reduced-motion"));
}

#[test]
fn bracket_colon_is_not_a_variant_separator() {
    let css = classes(&["[--pattern-fg:var(--color-gray-950)]/5"]);
    assert!(css.contains(
        ".\\[--pattern-fg\\:var\\(--color-gray-950\\)\\]\\/5 { \
         --pattern-fg: var(--color-gray-950); \
         @supports (color: color-mix(in lab, red, red)) { \
         --pattern-fg: color-mix(in oklab, var(--color-gray-950) 5%, transparent); } }"
    ));
    assert!(!css.contains("@media"));
}

#[test]
fn escapes_variant_and_opacity_token() {
    let css = classes(&["sm:hover:bg-red-500/50"]);
    assert_eq!(
        css,
        format!(
            "{HEADER}@layer utilities {{\n  \
             @media (min-width: 40rem) {{\n    \
             .sm\\:hover\\:bg-red-500\\/50:hover {{ background-color: color-mix(in oklab, var(--color-red-500) 50%, transparent); }}\n  \
             }}\n\
             }}\n"
        )
    );
}

#[test]
fn arbitrary_values_and_properties() {
    let css = classes(&["p-[13px]", "[mask-type:luminance]", "bg-[url(/img/hero.png)]", "w-[calc(100%_-_2rem)]"]);
    assert!(css.contains(".p-\\[13px\\] { padding: 13px; }"));
    assert!(css.contains(".\\[mask-type\\:luminance\\] { mask-type: luminance; }"));
    assert!(css.contains("background-image: url(/img/hero.png);"));
    assert!(css.contains("width: calc(100% - 2rem);"));
}

#[test]
fn group_peer_and_pseudo_elements() {
    let css = classes(&["group-hover:text-white", "peer-checked:hidden", "before:content-none"]);
    assert!(css.contains(".group:hover .group-hover\\:text-white { color: var(--color-white); }"));
    assert!(css.contains(".peer:checked ~ .peer-checked\\:hidden { display: none; }"));
    assert!(css.contains(".before\\:content-none::before { content: none; }"));
}

#[test]
fn theme_layer_with_yaml_overrides() {
    let theme = ThemeConfig::from_yaml_str(
        "colors:\n  primary: '#ff0000'\n  brand: '#123456'\nspacing: 0.5rem\n",
    )
    .unwrap();
    let css = generate_with_base_theme(Source::Classes(&["text-brand"]), &theme, default_trie());

    assert!(css.starts_with(HEADER));
    let theme_at = position(&css, "@layer theme {");
    let base_at = position(&css, "@layer base {");
    let utilities_at = position(&css, "@layer utilities {");
    assert!(base_at < theme_at && theme_at < utilities_at);

    assert!(css.contains("    --color-primary: #ff0000;\n"));
    assert!(css.contains("    --color-brand: #123456;\n"));
    assert!(css.contains("    --color-red-500: #ef4444;\n"));
    assert!(css.contains("    --spacing: 0.5rem;\n"));
    assert!(css.contains(".text-brand { color: var(--color-brand); }"));
}

#[test]
fn empty_theme_emits_no_theme_layer() {
    let css = generate_with_base_theme(Source::Classes(&[]), &ThemeConfig::empty(), default_trie());
    assert!(!css.contains("@layer theme {"));
    assert!(css.contains("@layer base {"));
}

#[test]
fn invalid_theme_yaml_is_rejected() {
    assert!(ThemeConfig::from_yaml_str("colors: [1, 2]").is_err());
    assert!(ThemeConfig::from_yaml_str("unknown: {}").is_err());
}

#[test]
fn theme_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("theme.yaml");
    std::fs::write(&path, "breakpoints:\n  tablet: 50rem\n").unwrap();

    let theme = ThemeConfig::from_file(&path).unwrap();
    let css = generate(Source::Classes(&["tablet:flex"]), &theme, default_trie());
    assert!(css.contains("@media (min-width: 50rem) {\n    .tablet\\:flex { display: flex; }"));
}

#[test]
fn components_are_spliced_once() {
    let css = generate_css(r#"<button class="btn btn-primary"></button><a class="btn card"></a>"#);
    let components_at = position(&css, "@layer components {\n");
    let block = &css[components_at..];
    assert_eq!(block.matches("  .btn {").count(), 1);
    assert_eq!(block.matches("  .card {").count(), 1);
    assert!(position(block, ".btn {") < position(block, ".card {"));
    assert!(!css.contains("modal"));
}

#[test]
fn component_directory_overrides_builtins() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("tabs.css"), ".tabs { display: flex; }\n.tabs-item { padding: 0; }\n").unwrap();
    std::fs::write(dir.path().join("btn.css"), ".btn { color: red; }\n").unwrap();

    let library = ComponentLibrary::load_dir(dir.path()).unwrap();
    let css = generate_with_components(
        Source::Html(r#"<div class="tabs-item btn"></div>"#),
        &ThemeConfig::default(),
        default_trie(),
        &library,
    );
    assert!(css.ends_with(
        "@layer components {\n  \
         .tabs { display: flex; }\n  \
         .tabs-item { padding: 0; }\n  \
         .btn { color: red; }\n\
         }\n"
    ));
}

#[test]
fn base_theme_output_wraps_the_same_utilities() {
    let theme = ThemeConfig::default();
    let source = Source::Classes(&["flex", "md:hidden"]);
    let plain = generate(source, &theme, default_trie());
    let full = generate_with_base_theme(source, &theme, default_trie());
    let body = plain.strip_prefix(HEADER).unwrap();
    assert!(full.ends_with(body));
}
