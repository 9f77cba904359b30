#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure the selectors the portal components emit (header, nav, sections, cards,
  language switcher, footer) remain present in the shared theme:
  ui/assets/theme/main.css
- Fail fast if a refactor drops or renames a class, preventing a silent styling
  regression in packaged (embedded) desktop builds.

If you intentionally rename or remove a selector:
    1. Update the Dioxus component markup under ui/src.
    2. Adjust REQUIRED_SELECTORS accordingly.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Selectors / tokens the portal components rely on.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".portal {",
    ".portal-error",
    // Primitives
    ".button {",
    ".button--primary",
    ".button--outline",
    ".button--link",
    ".button--sm",
    ".button--lg",
    ".card {",
    ".card--interactive",
    ".card-grid--three",
    ".card-grid--four",
    ".icon {",
    // Header & navigation
    ".site-header",
    ".govt-logo",
    ".language-switcher",
    ".portal-nav",
    ".portal-nav__item",
    // Sections
    ".hero",
    ".hero__title",
    ".portal-section",
    ".portal-section__title",
    ".service-card",
    ".scheme-card__more",
    ".document-search__input",
    ".document-card",
    ".update-card__date",
    // Footer
    ".site-footer",
    ".site-footer__social",
    ".site-footer__copyright",
    // Responsive block
    "@media (min-width: 768px)",
];

/// Every glyph the `Icon` primitive can render.
const GLYPHS: &[&str] = &[
    "building",
    "file-text",
    "indian-rupee",
    "user-check",
    "message-square",
    "chevron-right",
    "facebook",
    "twitter",
    "youtube",
    "instagram",
    "file",
    "download",
    "search",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let mut missing = Vec::new();
    for sel in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(sel) {
            missing.push(*sel);
        }
    }

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn every_glyph_has_a_modifier() {
    let missing: Vec<_> = GLYPHS
        .iter()
        .filter(|name| !THEME_CSS.contains(&format!(".icon--{name}")))
        .collect();
    assert!(missing.is_empty(), "Glyphs without an .icon-- rule: {missing:?}");
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 3_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}
