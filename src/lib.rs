//! cardsmith — declarative social-graphics templating.
//!
//! A config (JSON or pre-parsed) describes a theme plus an ordered list of
//! typed components; the builder turns it into one self-contained HTML
//! document with all styling inlined, sized to an exact pixel canvas and
//! ready to hand to a rasterizer.
//!
//! ```
//! use cardsmith::{Dimensions, GraphicsBuilder};
//!
//! let config = r##"{
//!   "theme": {"accent": "#22d3ee"},
//!   "components": [
//!     {"type": "badge", "content": {"text": "Case Study", "icon": "case-study"}},
//!     {"type": "headline", "content": {"text": "Ship faster", "bold_parts": ["faster"]}}
//!   ]
//! }"##;
//!
//! let html = GraphicsBuilder::new()
//!     .build_json(config, Dimensions::SQUARE)
//!     .unwrap();
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! Free text in component content is HTML-escaped; the only raw-markup
//! channel is [`TrustedSvg`], which callers opt into explicitly.

mod builder;
mod component;
mod config;
mod error;
mod export;
mod icons;
mod render;
mod sanitize;
mod stylesheet;
mod theme;

pub use builder::{Dimensions, GraphicsBuilder};
pub use component::{
    Align, BackgroundSvgContent, BadgeContent, BarChartContent, BarDatum, ComparisonContent,
    ComparisonSide, Component, Corner, CtaCardContent, EventPosterContent, Feature,
    FeatureGridContent, HeadlineContent, HeadlineSize, InfographicCardContent, LogoCardContent,
    MetricCardContent, Orientation, PositionedLogoContent, PosterLine, ProcessFlowContent,
    ProgressBarContent, QuoteCardContent, Stat, StatsDashboardContent, SubtitleContent,
    TimelineContent, TimelineEvent, Trend,
};
pub use config::GraphicsConfig;
pub use error::{ConfigError, ConfigResult};
pub use export::Rasterizer;
pub use icons::{hero_icon, ICON_NAMES};
pub use render::render_component;
pub use sanitize::{escape_html, TrustedSvg};
pub use stylesheet::stylesheet;
pub use theme::{GridStyle, Theme};

/// Build a document from JSON config text with the default theme.
///
/// Shorthand for [`GraphicsBuilder::new`] + [`GraphicsBuilder::build_json`].
pub fn build_graphic(json: &str, dimensions: Dimensions) -> ConfigResult<String> {
    GraphicsBuilder::new().build_json(json, dimensions)
}
