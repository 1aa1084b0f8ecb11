use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::sanitize::TrustedSvg;

/// Background grid pattern variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridStyle {
    #[default]
    Lines,
    Dots,
}

impl GridStyle {
    /// Parse a grid style name, falling back to lines for anything unrecognized.
    pub fn parse(value: &str) -> GridStyle {
        match value {
            "dots" => GridStyle::Dots,
            _ => GridStyle::Lines,
        }
    }
}

/// Theme configuration: the flat set of style tokens every component and the
/// generated stylesheet draw from.
///
/// A `Theme` is resolved once per document build. Overrides from a config
/// produce a new value via [`Theme::with_overrides`]; the base theme is never
/// mutated, so one builder can safely serve many builds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    // Colors
    pub background: String,
    pub surface: String,
    pub text_primary: String,
    pub text_secondary: String,
    pub text_muted: String,
    pub accent: String,
    pub accent_secondary: String,
    pub border: String,
    pub border_light: String,

    // Gradients
    pub gradient_primary: String,
    pub gradient_text: String,

    // Fonts
    pub font_family: String,
    pub font_headline: String,
    pub font_subheadline: String,
    pub font_body: String,

    // Spacing
    pub padding_large: String,
    pub padding_medium: String,
    pub padding_small: String,
    pub gap_large: String,
    pub gap_medium: String,
    pub gap_small: String,

    // Border radius
    pub radius_large: String,
    pub radius_medium: String,
    pub radius_small: String,
    pub radius_pill: String,

    // Shadows, multi-layered for depth
    pub shadow_small: String,
    pub shadow_medium: String,
    pub shadow_large: String,

    // Grid pattern
    pub grid_enabled: bool,
    pub grid_color: String,
    pub grid_size: String,
    pub grid_style: GridStyle,
    pub grid_dot_size: String,

    // Theme-level background silhouette (distinct from the background_svg component)
    pub background_svg: Option<TrustedSvg>,
    pub background_svg_color: String,
    pub background_svg_position: String,

    // Glassmorphism
    pub glass_blur: String,
    pub glass_opacity: String,

    // Typography refinements
    pub letter_spacing_tight: String,
    pub letter_spacing_normal: String,
    pub line_height_tight: String,
    pub line_height_normal: String,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: "#f8f8f8".into(),
            surface: "#ffffff".into(),
            text_primary: "#1a1a1a".into(),
            text_secondary: "#6b7280".into(),
            text_muted: "#b0b0b0".into(),
            accent: "#6366f1".into(),
            accent_secondary: "#8b5cf6".into(),
            border: "#e8e8e8".into(),
            border_light: "#f0f0f0".into(),

            gradient_primary: "linear-gradient(135deg, #6366f1, #8b5cf6)".into(),
            gradient_text: "linear-gradient(135deg, #6366f1, #8b5cf6)".into(),

            font_family: "'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif"
                .into(),
            font_headline: "800".into(),
            font_subheadline: "600".into(),
            font_body: "500".into(),

            padding_large: "72px".into(),
            padding_medium: "48px".into(),
            padding_small: "28px".into(),
            gap_large: "48px".into(),
            gap_medium: "28px".into(),
            gap_small: "18px".into(),

            radius_large: "32px".into(),
            radius_medium: "24px".into(),
            radius_small: "16px".into(),
            radius_pill: "100px".into(),

            shadow_small: "0 1px 2px rgba(0,0,0,0.04), 0 4px 8px rgba(0,0,0,0.04)".into(),
            shadow_medium: "0 4px 6px rgba(0,0,0,0.05), 0 12px 24px rgba(99, 102, 241, 0.15)"
                .into(),
            shadow_large: "0 8px 16px rgba(0,0,0,0.08), 0 24px 48px rgba(0,0,0,0.12)".into(),

            grid_enabled: false,
            grid_color: "rgba(0,0,0,0.025)".into(),
            grid_size: "20px".into(),
            grid_style: GridStyle::Lines,
            grid_dot_size: "2px".into(),

            background_svg: None,
            background_svg_color: "rgba(255,255,255,0.05)".into(),
            background_svg_position: "right bottom".into(),

            glass_blur: "20px".into(),
            glass_opacity: "0.85".into(),

            letter_spacing_tight: "-0.04em".into(),
            letter_spacing_normal: "-0.01em".into(),
            line_height_tight: "1.1".into(),
            line_height_normal: "1.5".into(),
        }
    }
}

impl Theme {
    pub fn new() -> Self {
        Theme::default()
    }

    /// Dark preset: near-black canvas, cyan accents, dot grid colors.
    pub fn dark() -> Self {
        Theme {
            background: "#0a0a0b".into(),
            surface: "rgba(255, 255, 255, 0.03)".into(),
            text_primary: "#f5f5f5".into(),
            text_secondary: "rgba(255, 255, 255, 0.6)".into(),
            text_muted: "rgba(255, 255, 255, 0.4)".into(),
            accent: "#22d3ee".into(),
            accent_secondary: "#06b6d4".into(),
            border: "rgba(255, 255, 255, 0.06)".into(),
            border_light: "rgba(255, 255, 255, 0.03)".into(),
            gradient_primary: "linear-gradient(135deg, #22d3ee, #06b6d4)".into(),
            gradient_text: "linear-gradient(135deg, #22d3ee, #06b6d4)".into(),
            shadow_small: "0 1px 4px rgba(0,0,0,0.3)".into(),
            shadow_medium: "0 4px 20px rgba(34, 211, 238, 0.2)".into(),
            grid_color: "rgba(34, 211, 238, 0.3)".into(),
            grid_style: GridStyle::Dots,
            grid_dot_size: "2px".into(),
            ..Theme::default()
        }
    }

    /// Clean professional preset parameterized by a single accent color
    /// (LinkedIn blue by default; greens, purples and oranges work well too).
    pub fn linkedin(accent: &str) -> Self {
        Theme {
            background: "#ffffff".into(),
            surface: "#f8fafc".into(),
            text_primary: "#0f172a".into(),
            text_secondary: "#475569".into(),
            text_muted: "#94a3b8".into(),
            accent: accent.into(),
            accent_secondary: accent.into(),
            border: "#e2e8f0".into(),
            border_light: "#f1f5f9".into(),
            gradient_primary: format!("linear-gradient(135deg, {accent}, {accent})"),
            gradient_text: format!("linear-gradient(135deg, {accent}, {accent})"),
            shadow_small: "0 1px 3px rgba(0,0,0,0.08)".into(),
            shadow_medium: "0 4px 12px rgba(0,0,0,0.1)".into(),
            grid_enabled: false,
            ..Theme::default()
        }
    }

    /// Merge a partial override map into this theme, returning the merged copy.
    ///
    /// Only keys naming an existing token are applied; everything else is
    /// ignored, so a config cannot inject non-schema fields. Values must
    /// already have the token's type (no coercion); a wrong-typed value is
    /// ignored rather than failing the build.
    pub fn with_overrides(&self, overrides: &Map<String, Value>) -> Theme {
        let mut theme = self.clone();
        for (key, value) in overrides {
            theme.apply_override(key, value);
        }
        theme
    }

    fn apply_override(&mut self, key: &str, value: &Value) {
        match key {
            "background" => set_string(&mut self.background, key, value),
            "surface" => set_string(&mut self.surface, key, value),
            "text_primary" => set_string(&mut self.text_primary, key, value),
            "text_secondary" => set_string(&mut self.text_secondary, key, value),
            "text_muted" => set_string(&mut self.text_muted, key, value),
            "accent" => set_string(&mut self.accent, key, value),
            "accent_secondary" => set_string(&mut self.accent_secondary, key, value),
            "border" => set_string(&mut self.border, key, value),
            "border_light" => set_string(&mut self.border_light, key, value),
            "gradient_primary" => set_string(&mut self.gradient_primary, key, value),
            "gradient_text" => set_string(&mut self.gradient_text, key, value),
            "font_family" => set_string(&mut self.font_family, key, value),
            "font_headline" => set_string(&mut self.font_headline, key, value),
            "font_subheadline" => set_string(&mut self.font_subheadline, key, value),
            "font_body" => set_string(&mut self.font_body, key, value),
            "padding_large" => set_string(&mut self.padding_large, key, value),
            "padding_medium" => set_string(&mut self.padding_medium, key, value),
            "padding_small" => set_string(&mut self.padding_small, key, value),
            "gap_large" => set_string(&mut self.gap_large, key, value),
            "gap_medium" => set_string(&mut self.gap_medium, key, value),
            "gap_small" => set_string(&mut self.gap_small, key, value),
            "radius_large" => set_string(&mut self.radius_large, key, value),
            "radius_medium" => set_string(&mut self.radius_medium, key, value),
            "radius_small" => set_string(&mut self.radius_small, key, value),
            "radius_pill" => set_string(&mut self.radius_pill, key, value),
            "shadow_small" => set_string(&mut self.shadow_small, key, value),
            "shadow_medium" => set_string(&mut self.shadow_medium, key, value),
            "shadow_large" => set_string(&mut self.shadow_large, key, value),
            "grid_enabled" => match value.as_bool() {
                Some(enabled) => self.grid_enabled = enabled,
                None => log::warn!("ignoring theme token '{key}': expected a boolean"),
            },
            "grid_color" => set_string(&mut self.grid_color, key, value),
            "grid_size" => set_string(&mut self.grid_size, key, value),
            "grid_style" => match value.as_str() {
                Some(style) => self.grid_style = GridStyle::parse(style),
                None => log::warn!("ignoring theme token '{key}': expected a string"),
            },
            "grid_dot_size" => set_string(&mut self.grid_dot_size, key, value),
            // Trusted channel: theme backgrounds are developer-supplied SVG markup.
            "background_svg" => match value.as_str() {
                Some(svg) => self.background_svg = Some(TrustedSvg::new(svg)),
                None => log::warn!("ignoring theme token '{key}': expected a string"),
            },
            "background_svg_color" => set_string(&mut self.background_svg_color, key, value),
            "background_svg_position" => set_string(&mut self.background_svg_position, key, value),
            "glass_blur" => set_string(&mut self.glass_blur, key, value),
            "glass_opacity" => set_string(&mut self.glass_opacity, key, value),
            "letter_spacing_tight" => set_string(&mut self.letter_spacing_tight, key, value),
            "letter_spacing_normal" => set_string(&mut self.letter_spacing_normal, key, value),
            "line_height_tight" => set_string(&mut self.line_height_tight, key, value),
            "line_height_normal" => set_string(&mut self.line_height_normal, key, value),
            _ => log::warn!("ignoring unknown theme token '{key}'"),
        }
    }
}

fn set_string(slot: &mut String, key: &str, value: &Value) {
    match value.as_str() {
        Some(s) => *slot = s.to_string(),
        None => log::warn!("ignoring theme token '{key}': expected a string"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn overrides(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_dark_preset_values() {
        let theme = Theme::dark();
        assert_eq!(theme.background, "#0a0a0b");
        assert_eq!(theme.text_primary, "#f5f5f5");
        assert_eq!(theme.grid_style, GridStyle::Dots);
    }

    #[test]
    fn test_linkedin_preset_values() {
        let theme = Theme::linkedin("#0077b5");
        assert_eq!(theme.background, "#ffffff");
        assert_eq!(theme.accent, "#0077b5");
        assert!(!theme.grid_enabled);

        let green = Theme::linkedin("#10b981");
        assert_eq!(green.accent, "#10b981");
        assert_eq!(
            green.gradient_primary,
            "linear-gradient(135deg, #10b981, #10b981)"
        );
    }

    #[test]
    fn test_override_applies_known_token() {
        let base = Theme::default();
        let merged = base.with_overrides(&overrides(json!({"accent": "#ff0000"})));
        assert_eq!(merged.accent, "#ff0000");
        // Base theme is untouched.
        assert_eq!(base.accent, "#6366f1");
        // Every other token keeps its default.
        assert_eq!(merged.background, base.background);
        assert_eq!(merged.shadow_large, base.shadow_large);
    }

    #[test]
    fn test_override_ignores_unknown_key() {
        let base = Theme::default();
        let merged = base.with_overrides(&overrides(json!({"no_such_token": "x"})));
        assert_eq!(merged, base);
    }

    #[test]
    fn test_override_ignores_wrong_typed_value() {
        let base = Theme::default();
        let merged = base.with_overrides(&overrides(json!({"accent": 42, "grid_enabled": "yes"})));
        assert_eq!(merged, base);
    }

    #[test]
    fn test_override_grid_and_background_svg() {
        let base = Theme::default();
        let merged = base.with_overrides(&overrides(json!({
            "grid_enabled": true,
            "grid_style": "dots",
            "background_svg": "<svg></svg>"
        })));
        assert!(merged.grid_enabled);
        assert_eq!(merged.grid_style, GridStyle::Dots);
        assert_eq!(merged.background_svg.unwrap().as_str(), "<svg></svg>");
    }

    #[test]
    fn test_grid_style_parse_fallback() {
        assert_eq!(GridStyle::parse("dots"), GridStyle::Dots);
        assert_eq!(GridStyle::parse("hexagons"), GridStyle::Lines);
    }
}
