use serde::{Deserialize, Deserializer, Serialize};

use crate::sanitize::TrustedSvg;

/// One declaratively-configured visual block.
///
/// The enum is closed: an unknown variant cannot be constructed. Configs with
/// unrecognized `type` strings are filtered out at the JSON decode boundary
/// ([`crate::config::GraphicsConfig`]), never here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "snake_case")]
pub enum Component {
    Badge(BadgeContent),
    Headline(HeadlineContent),
    QuoteCard(QuoteCardContent),
    MetricCard(MetricCardContent),
    CtaCard(CtaCardContent),
    InfographicCard(InfographicCardContent),
    LogoCard(LogoCardContent),
    EventPoster(EventPosterContent),
    Subtitle(SubtitleContent),
    PositionedLogo(PositionedLogoContent),
    BackgroundSvg(BackgroundSvgContent),
    ProcessFlow(ProcessFlowContent),
    BarChart(BarChartContent),
    Timeline(TimelineContent),
    Comparison(ComparisonContent),
    FeatureGrid(FeatureGridContent),
    StatsDashboard(StatsDashboardContent),
    ProgressBar(ProgressBarContent),
}

impl Component {
    /// The config-facing type string for this component.
    pub fn kind(&self) -> &'static str {
        match self {
            Component::Badge(_) => "badge",
            Component::Headline(_) => "headline",
            Component::QuoteCard(_) => "quote_card",
            Component::MetricCard(_) => "metric_card",
            Component::CtaCard(_) => "cta_card",
            Component::InfographicCard(_) => "infographic_card",
            Component::LogoCard(_) => "logo_card",
            Component::EventPoster(_) => "event_poster",
            Component::Subtitle(_) => "subtitle",
            Component::PositionedLogo(_) => "positioned_logo",
            Component::BackgroundSvg(_) => "background_svg",
            Component::ProcessFlow(_) => "process_flow",
            Component::BarChart(_) => "bar_chart",
            Component::Timeline(_) => "timeline",
            Component::Comparison(_) => "comparison",
            Component::FeatureGrid(_) => "feature_grid",
            Component::StatsDashboard(_) => "stats_dashboard",
            Component::ProgressBar(_) => "progress_bar",
        }
    }
}

// ─── Enum-like content values ────────────────────────────────────────────────
//
// These deserialize from plain strings and fall back to a documented default
// for anything unrecognized, so a stale config still renders.

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    fn parse(value: &str) -> Align {
        match value {
            "center" => Align::Center,
            "right" => Align::Right,
            _ => Align::Left,
        }
    }

    pub fn as_css(&self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        }
    }
}

impl<'de> Deserialize<'de> for Align {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Align::parse(&String::deserialize(deserializer)?))
    }
}

/// Headline size step. Absent defaults to large; an unrecognized name falls
/// back to medium (the middle of the scale).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadlineSize {
    Small,
    Medium,
    #[default]
    Large,
    Xlarge,
}

impl HeadlineSize {
    fn parse(value: &str) -> HeadlineSize {
        match value {
            "small" => HeadlineSize::Small,
            "medium" => HeadlineSize::Medium,
            "large" => HeadlineSize::Large,
            "xlarge" => HeadlineSize::Xlarge,
            _ => HeadlineSize::Medium,
        }
    }

    /// Fixed pixel font size for this step.
    pub fn px(&self) -> u32 {
        match self {
            HeadlineSize::Small => 48,
            HeadlineSize::Medium => 56,
            HeadlineSize::Large => 64,
            HeadlineSize::Xlarge => 72,
        }
    }
}

impl<'de> Deserialize<'de> for HeadlineSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(HeadlineSize::parse(&String::deserialize(deserializer)?))
    }
}

/// Corner placement for the positioned logo. Invalid values fall back to the
/// bottom-right corner and are never interpolated into markup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
}

impl Corner {
    fn parse(value: &str) -> Corner {
        match value {
            "top-left" => Corner::TopLeft,
            "top-right" => Corner::TopRight,
            "bottom-left" => Corner::BottomLeft,
            "bottom-right" => Corner::BottomRight,
            _ => Corner::BottomRight,
        }
    }

    pub fn as_css_class(&self) -> &'static str {
        match self {
            Corner::TopLeft => "top-left",
            Corner::TopRight => "top-right",
            Corner::BottomLeft => "bottom-left",
            Corner::BottomRight => "bottom-right",
        }
    }
}

impl<'de> Deserialize<'de> for Corner {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Corner::parse(&String::deserialize(deserializer)?))
    }
}

/// Layout direction for process flows and timelines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    fn parse(value: &str) -> Orientation {
        match value {
            "vertical" => Orientation::Vertical,
            _ => Orientation::Horizontal,
        }
    }
}

impl<'de> Deserialize<'de> for Orientation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Orientation::parse(&String::deserialize(deserializer)?))
    }
}

/// Direction class for a change/delta string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    #[default]
    Neutral,
}

impl Trend {
    fn parse(value: &str) -> Trend {
        match value {
            "up" => Trend::Up,
            "down" => Trend::Down,
            _ => Trend::Neutral,
        }
    }

    pub fn as_css_class(&self) -> &'static str {
        match self {
            Trend::Up => "trend-up",
            Trend::Down => "trend-down",
            Trend::Neutral => "trend-neutral",
        }
    }
}

impl<'de> Deserialize<'de> for Trend {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Trend::parse(&String::deserialize(deserializer)?))
    }
}

// ─── Content records ─────────────────────────────────────────────────────────
//
// Every field is optional in the config; missing fields take the struct's
// Default values. Unknown content fields are ignored.

/// Pill-shaped label, optionally with one of the built-in badge icons
/// (`case-study`, `process`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BadgeContent {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Large headline with optional per-word emphasis.
///
/// `bold_parts` and `muted_parts` are matched against the headline words
/// case-insensitively after stripping punctuation; a word appearing in both
/// lists is rendered bold (bold is checked first). With neither list supplied
/// the entire text is bold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadlineContent {
    pub text: String,
    pub size: HeadlineSize,
    pub align: Align,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bold_parts: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub muted_parts: Vec<String>,
}

impl Default for HeadlineContent {
    fn default() -> Self {
        HeadlineContent {
            text: String::new(),
            size: HeadlineSize::Large,
            align: Align::Center,
            bold_parts: Vec::new(),
            muted_parts: Vec::new(),
        }
    }
}

/// Testimonial card. Each `emphasis` phrase is wrapped in `<strong>` at its
/// first literal occurrence (case-sensitive).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteCardContent {
    pub quote: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub emphasis: Vec<String>,
}

/// Single large metric. The value is opaque text, never parsed numerically.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricCardContent {
    pub value: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change: Option<String>,
    pub trend: Trend,
}

/// Call-to-action card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CtaCardContent {
    pub headline: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub button_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_url: Option<String>,
}

impl Default for CtaCardContent {
    fn default() -> Self {
        CtaCardContent {
            headline: String::new(),
            description: None,
            button_text: "Get Started".into(),
            button_url: None,
        }
    }
}

/// Titled, numbered list of items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InfographicCardContent {
    pub title: String,
    pub items: Vec<String>,
}

/// Two brand names rendered uppercased with a divider between them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoCardContent {
    pub client_name: String,
    pub provider_name: String,
}

/// One stacked line of an event poster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PosterLine {
    pub number: String,
    pub text: String,
    pub size: String,
}

impl Default for PosterLine {
    fn default() -> Self {
        PosterLine {
            number: String::new(),
            text: String::new(),
            size: "120px".into(),
        }
    }
}

/// Poster of independently-sized metric lines, stacked vertically.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventPosterContent {
    pub lines: Vec<PosterLine>,
    pub align: Align,
}

/// Tagline text with one optional highlighted phrase (first literal
/// occurrence).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubtitleContent {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<String>,
    pub align: Align,
}

/// Small logo pinned to one of the four document corners.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionedLogoContent {
    pub text: String,
    pub position: Corner,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_svg: Option<TrustedSvg>,
}

/// Full-bleed decorative SVG layer behind the components.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundSvgContent {
    pub svg: TrustedSvg,
}

/// Sequentially numbered steps with arrow or connector decorations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessFlowContent {
    pub steps: Vec<String>,
    pub orientation: Orientation,
    pub show_arrows: bool,
}

impl Default for ProcessFlowContent {
    fn default() -> Self {
        ProcessFlowContent {
            steps: Vec::new(),
            orientation: Orientation::Horizontal,
            show_arrows: true,
        }
    }
}

/// One bar of a bar chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarDatum {
    pub label: String,
    pub value: f64,
}

/// Vertical bar chart. When `max_value` is absent the largest datum sets the
/// scale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarChartContent {
    pub data: Vec<BarDatum>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,
}

/// One timeline entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineEvent {
    pub date: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Ordered sequence of dated events along a connecting rail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineContent {
    pub events: Vec<TimelineEvent>,
    pub orientation: Orientation,
}

impl Default for TimelineContent {
    fn default() -> Self {
        TimelineContent {
            events: Vec::new(),
            orientation: Orientation::Vertical,
        }
    }
}

/// One side of a comparison.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonSide {
    pub label: String,
    pub content: String,
    pub stats: String,
}

/// Side-by-side before/after comparison; the right side is visually
/// highlighted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonContent {
    pub left: ComparisonSide,
    pub right: ComparisonSide,
}

/// One cell of a feature grid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Feature {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub title: String,
    pub description: String,
}

/// Icon + text cells in a fixed-column grid (2 to 4 columns).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureGridContent {
    pub features: Vec<Feature>,
    pub columns: u32,
}

impl Default for FeatureGridContent {
    fn default() -> Self {
        FeatureGridContent {
            features: Vec::new(),
            columns: 3,
        }
    }
}

/// One dashboard stat.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stat {
    pub value: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change: Option<String>,
    pub trend: Trend,
}

/// Grid of stat cards with trend-classified change chips.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsDashboardContent {
    pub stats: Vec<Stat>,
}

/// Labeled progress indicator. The fill ratio is clamped to [0, 100] so the
/// emitted CSS width is always valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressBarContent {
    pub label: String,
    pub value: f64,
    pub max_value: f64,
    pub show_percentage: bool,
}

impl Default for ProgressBarContent {
    fn default() -> Self {
        ProgressBarContent {
            label: String::new(),
            value: 0.0,
            max_value: 100.0,
            show_percentage: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_corner_parse_fallback() {
        assert_eq!(Corner::parse("top-left"), Corner::TopLeft);
        assert_eq!(Corner::parse("middle-out"), Corner::BottomRight);
    }

    #[test]
    fn test_headline_size_scale() {
        assert_eq!(HeadlineSize::Small.px(), 48);
        assert_eq!(HeadlineSize::Medium.px(), 56);
        assert_eq!(HeadlineSize::Large.px(), 64);
        assert_eq!(HeadlineSize::Xlarge.px(), 72);
        // Unrecognized names land on the middle of the scale.
        assert_eq!(HeadlineSize::parse("gigantic"), HeadlineSize::Medium);
    }

    #[test]
    fn test_content_defaults_from_empty_object() {
        let cta: CtaCardContent = serde_json::from_str("{}").unwrap();
        assert_eq!(cta.button_text, "Get Started");
        assert!(cta.button_url.is_none());

        let bar: ProgressBarContent = serde_json::from_str("{}").unwrap();
        assert_eq!(bar.max_value, 100.0);
        assert!(bar.show_percentage);

        let line: PosterLine = serde_json::from_str("{}").unwrap();
        assert_eq!(line.size, "120px");
    }

    #[test]
    fn test_enum_fallbacks_deserialize() {
        let logo: PositionedLogoContent =
            serde_json::from_str(r#"{"text": "x", "position": "sideways"}"#).unwrap();
        assert_eq!(logo.position, Corner::BottomRight);

        let headline: HeadlineContent =
            serde_json::from_str(r#"{"text": "x", "size": "colossal", "align": "middle"}"#)
                .unwrap();
        assert_eq!(headline.size, HeadlineSize::Medium);
        assert_eq!(headline.align, Align::Left);
    }

    #[test]
    fn test_unknown_content_fields_ignored() {
        let badge: BadgeContent =
            serde_json::from_str(r#"{"text": "hi", "flavor": "grape"}"#).unwrap();
        assert_eq!(badge.text, "hi");
    }

    #[test]
    fn test_component_kind_strings() {
        let c = Component::Badge(BadgeContent::default());
        assert_eq!(c.kind(), "badge");
        let c = Component::StatsDashboard(StatsDashboardContent::default());
        assert_eq!(c.kind(), "stats_dashboard");
    }

    #[test]
    fn test_component_serialize_shape() {
        let c = Component::Badge(BadgeContent {
            text: "Case Study".into(),
            icon: None,
        });
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["type"], "badge");
        assert_eq!(json["content"]["text"], "Case Study");
    }
}
