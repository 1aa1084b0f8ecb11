//! Fixed inline-SVG icon library used by the advanced components
//! (feature grids, stats dashboards, timelines).
//!
//! Icons are developer-authored markup and are embedded without escaping.

const CHART_BAR: &str = r#"<svg class="hero-icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round"><path d="M3 13.5v6.75h3.75V13.5H3zM10.125 8.25v12h3.75v-12h-3.75zM17.25 3.75V20.25H21V3.75h-3.75z"/></svg>"#;

const ARROW_TRENDING_UP: &str = r#"<svg class="hero-icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round"><path d="M2.25 18L9 11.25l4.306 4.306a11.95 11.95 0 015.814-5.519L21.75 9M21.75 9l-4.5-.75M21.75 9l.75 4.5"/></svg>"#;

const CHECK_CIRCLE: &str = r#"<svg class="hero-icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round"><circle cx="12" cy="12" r="9"/><path d="M9 12.75L11.25 15 15 9.75"/></svg>"#;

const LIGHTNING_BOLT: &str = r#"<svg class="hero-icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round"><path d="M13.5 3L4.5 13.5h6L10.5 21l9-10.5h-6L13.5 3z"/></svg>"#;

const CLOCK: &str = r#"<svg class="hero-icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round"><circle cx="12" cy="12" r="9"/><path d="M12 6v6l3.75 2.25"/></svg>"#;

const USERS: &str = r#"<svg class="hero-icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round"><circle cx="9" cy="8" r="3.25"/><path d="M3 19.5a6 6 0 0112 0"/><circle cx="16.5" cy="9.5" r="2.5"/><path d="M15.5 14.5a5 5 0 015.5 5"/></svg>"#;

const ROCKET_LAUNCH: &str = r#"<svg class="hero-icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round"><path d="M15.59 14.37a6 6 0 01-5.84 7.38v-4.8m5.84-2.58a14.98 14.98 0 006.16-12.12A14.98 14.98 0 009.63 8.41m5.96 5.96a14.926 14.926 0 01-5.841 2.58m-.119-8.54a6 6 0 00-7.381 5.84h4.8m2.581-5.84a14.927 14.927 0 00-2.58 5.84"/><circle cx="15.75" cy="8.25" r="1.5"/></svg>"#;

const SPARKLES: &str = r#"<svg class="hero-icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round"><path d="M9.813 15.904L9 18.75l-.813-2.846a4.5 4.5 0 00-3.09-3.09L2.25 12l2.846-.813a4.5 4.5 0 003.09-3.09L9 5.25l.813 2.846a4.5 4.5 0 003.09 3.09L15.75 12l-2.846.813a4.5 4.5 0 00-3.091 3.091z"/><path d="M18 4.5l.375 1.5L19.875 6.375 18.375 6.75 18 8.25l-.375-1.5-1.5-.375 1.5-.375L18 4.5z"/><path d="M17.25 15l.5 1.75 1.75.5-1.75.5-.5 1.75-.5-1.75-1.75-.5 1.75-.5.5-1.75z"/></svg>"#;

const COG: &str = r#"<svg class="hero-icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round"><circle cx="12" cy="12" r="3"/><path d="M19.4 15a1.65 1.65 0 00.33 1.82l.06.06a2 2 0 11-2.83 2.83l-.06-.06a1.65 1.65 0 00-1.82-.33 1.65 1.65 0 00-1 1.51V21a2 2 0 11-4 0v-.09a1.65 1.65 0 00-1-1.51 1.65 1.65 0 00-1.82.33l-.06.06a2 2 0 11-2.83-2.83l.06-.06a1.65 1.65 0 00.33-1.82 1.65 1.65 0 00-1.51-1H3a2 2 0 110-4h.09a1.65 1.65 0 001.51-1 1.65 1.65 0 00-.33-1.82l-.06-.06a2 2 0 112.83-2.83l.06.06a1.65 1.65 0 001.82.33h.01a1.65 1.65 0 001-1.51V3a2 2 0 114 0v.09a1.65 1.65 0 001 1.51 1.65 1.65 0 001.82-.33l.06-.06a2 2 0 112.83 2.83l-.06.06a1.65 1.65 0 00-.33 1.82v.01a1.65 1.65 0 001.51 1H21a2 2 0 110 4h-.09a1.65 1.65 0 00-1.51 1z"/></svg>"#;

const SHIELD_CHECK: &str = r#"<svg class="hero-icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round"><path d="M12 3l7.5 3v5.25c0 4.42-3.2 8.14-7.5 9.75-4.3-1.61-7.5-5.33-7.5-9.75V6L12 3z"/><path d="M9 12l2.25 2.25L15 9.75"/></svg>"#;

const ARROW_RIGHT: &str = r#"<svg class="hero-icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round"><path d="M4.5 12h15m0 0l-6.75-6.75M19.5 12l-6.75 6.75"/></svg>"#;

const CUBE: &str = r#"<svg class="hero-icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round"><path d="M21 7.5l-9-4.5-9 4.5m18 0l-9 4.5m9-4.5V16.5l-9 4.5m0-9L3 7.5m9 4.5v9m-9-13.5V16.5l9 4.5"/></svg>"#;

const DOCUMENT_TEXT: &str = r#"<svg class="hero-icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round"><path d="M19.5 14.25v-2.625a3.375 3.375 0 00-3.375-3.375h-1.5A1.125 1.125 0 0113.5 7.125v-1.5a3.375 3.375 0 00-3.375-3.375H8.25m0 12.75h7.5m-7.5 3H12M10.5 2.25H5.625c-.621 0-1.125.504-1.125 1.125v17.25c0 .621.504 1.125 1.125 1.125h12.75c.621 0 1.125-.504 1.125-1.125V11.25a9 9 0 00-9-9z"/></svg>"#;

/// Look up a named icon. Unknown names fall back to `sparkles` so an icon
/// reference never breaks a render.
pub fn hero_icon(name: &str) -> &'static str {
    match name {
        "chart-bar" => CHART_BAR,
        "arrow-trending-up" => ARROW_TRENDING_UP,
        "check-circle" => CHECK_CIRCLE,
        "lightning-bolt" => LIGHTNING_BOLT,
        "clock" => CLOCK,
        "users" => USERS,
        "rocket-launch" => ROCKET_LAUNCH,
        "sparkles" => SPARKLES,
        "cog" => COG,
        "shield-check" => SHIELD_CHECK,
        "arrow-right" => ARROW_RIGHT,
        "cube" => CUBE,
        "document-text" => DOCUMENT_TEXT,
        _ => SPARKLES,
    }
}

/// Names of all icons in the library, in no particular order.
pub const ICON_NAMES: [&str; 13] = [
    "chart-bar",
    "arrow-trending-up",
    "check-circle",
    "lightning-bolt",
    "clock",
    "users",
    "rocket-launch",
    "sparkles",
    "cog",
    "shield-check",
    "arrow-right",
    "cube",
    "document-text",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_icons_are_svg() {
        for name in ICON_NAMES {
            let svg = hero_icon(name);
            assert!(svg.starts_with("<svg"), "{name} is not an svg");
            assert!(svg.contains("viewBox"), "{name} has no viewBox");
        }
    }

    #[test]
    fn test_unknown_icon_falls_back_to_sparkles() {
        assert_eq!(hero_icon("no-such-icon"), hero_icon("sparkles"));
    }
}
