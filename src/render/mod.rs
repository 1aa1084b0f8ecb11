//! Component renderers.
//!
//! Each renderer is a pure function from a typed content record to one markup
//! fragment. All theming flows through the generated stylesheet
//! ([`crate::stylesheet`]): fragments carry class names only, so renderers do
//! not take the theme. Free text is escaped on the way in; only
//! [`crate::sanitize::TrustedSvg`] values are embedded raw.

mod advanced;
mod basic;

use crate::component::Component;

/// Render one component to its markup fragment. Dispatch is exhaustive over
/// the closed component set; there is no fallthrough case.
pub fn render_component(component: &Component) -> String {
    match component {
        Component::Badge(content) => basic::badge(content),
        Component::Headline(content) => basic::headline(content),
        Component::QuoteCard(content) => basic::quote_card(content),
        Component::MetricCard(content) => basic::metric_card(content),
        Component::CtaCard(content) => basic::cta_card(content),
        Component::InfographicCard(content) => basic::infographic_card(content),
        Component::LogoCard(content) => basic::logo_card(content),
        Component::EventPoster(content) => basic::event_poster(content),
        Component::Subtitle(content) => basic::subtitle(content),
        Component::PositionedLogo(content) => basic::positioned_logo(content),
        Component::BackgroundSvg(content) => basic::background_svg(content),
        Component::ProcessFlow(content) => advanced::process_flow(content),
        Component::BarChart(content) => advanced::bar_chart(content),
        Component::Timeline(content) => advanced::timeline(content),
        Component::Comparison(content) => advanced::comparison(content),
        Component::FeatureGrid(content) => advanced::feature_grid(content),
        Component::StatsDashboard(content) => advanced::stats_dashboard(content),
        Component::ProgressBar(content) => advanced::progress_bar(content),
    }
}
