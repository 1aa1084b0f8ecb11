//! Document assembly: theme resolution, stylesheet generation and component
//! rendering combined into one complete HTML document string.

use serde::{Deserialize, Serialize};

use crate::config::GraphicsConfig;
use crate::error::ConfigResult;
use crate::render::render_component;
use crate::stylesheet::stylesheet;
use crate::theme::Theme;

/// Output canvas size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Dimensions { width, height }
    }

    /// 1080x1080, square social post.
    pub const SQUARE: Dimensions = Dimensions::new(1080, 1080);

    /// 1080x1350, portrait feed post.
    pub const PORTRAIT: Dimensions = Dimensions::new(1080, 1350);

    /// 1920x1080, landscape slide.
    pub const LANDSCAPE: Dimensions = Dimensions::new(1920, 1080);
}

impl Default for Dimensions {
    fn default() -> Self {
        Dimensions::LANDSCAPE
    }
}

/// Builds complete HTML documents from parsed configs.
///
/// The builder owns the base theme; per-config overrides are applied on top
/// of it at build time without mutating the base, so one builder can serve
/// many configs.
#[derive(Debug, Clone, Default)]
pub struct GraphicsBuilder {
    base_theme: Theme,
}

impl GraphicsBuilder {
    /// A builder over the default light theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// A builder over the given base theme.
    pub fn with_theme(theme: Theme) -> Self {
        GraphicsBuilder { base_theme: theme }
    }

    pub fn base_theme(&self) -> &Theme {
        &self.base_theme
    }

    /// Build the full document for a parsed config.
    pub fn build(&self, config: &GraphicsConfig, dimensions: Dimensions) -> String {
        let theme = match &config.theme {
            Some(overrides) => self.base_theme.with_overrides(overrides),
            None => self.base_theme.clone(),
        };

        log::debug!(
            "building {}x{} document with {} component(s)",
            dimensions.width,
            dimensions.height,
            config.components.len()
        );

        let body = config
            .components
            .iter()
            .map(render_component)
            .collect::<Vec<_>>()
            .join("\n  ");

        let css = stylesheet(&theme, dimensions);

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Graphic</title>
  <link rel="preconnect" href="https://fonts.googleapis.com">
  <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
  <link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700;800;900&display=swap" rel="stylesheet">
  <style>{css}</style>
</head>
<body>
  {body}
</body>
</html>"#
        )
    }

    /// Parse JSON config text and build the document in one step.
    pub fn build_json(&self, json: &str, dimensions: Dimensions) -> ConfigResult<String> {
        let config = GraphicsConfig::from_json(json)?;
        Ok(self.build(&config, dimensions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_still_yields_full_document() {
        let html = GraphicsBuilder::new().build(&GraphicsConfig::default(), Dimensions::default());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<body>"));
        assert!(html.contains("</html>"));
        assert_eq!(html.matches("<style>").count(), 1);
    }

    #[test]
    fn test_default_dimensions_are_landscape() {
        let html = GraphicsBuilder::new().build(&GraphicsConfig::default(), Dimensions::default());
        assert!(html.contains("width: 1920px"));
        assert!(html.contains("height: 1080px"));
    }

    #[test]
    fn test_config_theme_overrides_do_not_mutate_builder() {
        let builder = GraphicsBuilder::new();
        let config = GraphicsConfig::from_json(r##"{"theme": {"accent": "#ff0000"}}"##).unwrap();

        let html = builder.build(&config, Dimensions::SQUARE);
        assert!(html.contains("#ff0000"));
        assert_eq!(builder.base_theme().accent, Theme::default().accent);
    }

    #[test]
    fn test_build_json_parse_failure_surfaces() {
        let err = GraphicsBuilder::new()
            .build_json("not json", Dimensions::default())
            .unwrap_err();
        assert!(matches!(err, crate::error::ConfigError::Json(_)));
    }
}
