#![cfg(test)]
//! Lint for the theme embedded into desktop builds (`ui/assets/theme/main.css`).
//!
//! Desktop inlines the shared stylesheet at compile time, so a renamed selector
//! only shows up as broken styling at runtime. These checks keep the classes
//! used by the dashboard components present.

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Classes emitted by `ui::components`, `ui::views` and `ui::export`.
const REQUIRED_SELECTORS: &[&str] = &[
    ":root",
    "body {",
    ".page {",
    ".visually-hidden",
    ".button {",
    ".button--primary",
    ".button--ghost",
    ".tabs {",
    ".tabs__tab {",
    ".tabs__tab--active",
    ".tabs__content",
    ".tab-panel {",
    ".tab-panel__row",
    ".state-dropdown {",
    ".state-dropdown__select",
    ".state-dropdown__clear",
    ".chart {",
    ".chart__title",
    ".chart__plot",
    ".chart__svg",
    ".chart__grid",
    ".chart__tick",
    ".chart__axis-title",
    ".chart__crosshair",
    ".chart__marker--active",
    ".chart__empty",
    ".chart__tooltip {",
    ".chart__tooltip-year",
    ".chart__tooltip-value",
    ".chart-export {",
    ".chart-export__status--success",
    ".chart-export__status--error",
    "@media (max-width: 720px)",
];

#[test]
fn theme_contains_component_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .filter(|sel| !THEME_CSS.contains(**sel))
        .collect();
    assert!(
        missing.is_empty(),
        "theme is missing {} selector(s): {missing:?}",
        missing.len()
    );
}

#[test]
fn theme_is_not_truncated() {
    let non_ws = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws > 3_000,
        "embedded theme unexpectedly small ({non_ws} non-whitespace chars)"
    );
}

#[test]
fn custom_properties_are_defined_before_use() {
    for token in ["--color-accent-strong", "--color-border", "--radius"] {
        let defined = THEME_CSS.find(&format!("{token}:"));
        let used = THEME_CSS.find(&format!("var({token})"));
        assert!(
            matches!((defined, used), (Some(d), Some(u)) if d < u),
            "`{token}` should be declared in :root before it is used"
        );
    }
}
