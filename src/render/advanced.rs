//! Renderers for the advanced component tier: flows, charts, timelines,
//! comparisons, grids and dashboards.

use crate::component::*;
use crate::icons::hero_icon;
use crate::sanitize::escape_html;

/// Format a numeric value for display, dropping the fraction when it is whole.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Percentage of `value` against `max`, clamped to the valid CSS range.
fn clamped_percent(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        return 0.0;
    }
    (value / max * 100.0).clamp(0.0, 100.0)
}

pub fn process_flow(content: &ProcessFlowContent) -> String {
    let vertical = content.orientation == Orientation::Vertical;
    let flow_class = if vertical {
        "process-flow vertical"
    } else {
        "process-flow"
    };
    let step_class = if vertical { "flow-step vertical" } else { "flow-step" };

    let mut parts = Vec::new();
    for (i, step) in content.steps.iter().enumerate() {
        if i > 0 {
            if vertical {
                parts.push("<div class=\"flow-connector\"></div>".to_string());
            } else if content.show_arrows {
                parts.push(format!(
                    "<div class=\"flow-arrow\">{}</div>",
                    hero_icon("arrow-right")
                ));
            }
        }
        parts.push(format!(
            "<div class=\"{}\"><div class=\"step-number\">{}</div><div class=\"step-text\">{}</div></div>",
            step_class,
            i + 1,
            escape_html(step)
        ));
    }

    format!(
        "<div class=\"{}\">\n    {}\n  </div>",
        flow_class,
        parts.join("\n    ")
    )
}

pub fn bar_chart(content: &BarChartContent) -> String {
    let data_max = content
        .data
        .iter()
        .fold(0.0_f64, |acc, datum| acc.max(datum.value));
    let max = match content.max_value {
        Some(max) if max > 0.0 => max,
        _ => {
            if data_max > 0.0 {
                data_max
            } else {
                1.0
            }
        }
    };

    let bars_html: String = content
        .data
        .iter()
        .map(|datum| {
            format!(
                "<div class=\"bar-item\">\n      <div class=\"bar-container\"><div class=\"bar-fill\" style=\"height: {}%;\"><span class=\"bar-value\">{}</span></div></div>\n      <div class=\"bar-label\">{}</div>\n    </div>",
                format_number(clamped_percent(datum.value, max)),
                format_number(datum.value),
                escape_html(&datum.label)
            )
        })
        .collect();

    format!("<div class=\"bar-chart\">\n    {bars_html}\n  </div>")
}

pub fn timeline(content: &TimelineContent) -> String {
    let timeline_class = match content.orientation {
        Orientation::Horizontal => "timeline horizontal",
        Orientation::Vertical => "timeline",
    };

    let events_html: String = content
        .events
        .iter()
        .map(|event| {
            let marker_icon = match event.icon.as_deref() {
                Some(icon) => hero_icon(icon),
                None => "",
            };
            let date_html = if event.date.is_empty() {
                String::new()
            } else {
                format!("<div class=\"timeline-date\">{}</div>", escape_html(&event.date))
            };
            let desc_html = match event.description.as_deref() {
                Some(desc) => {
                    format!("<div class=\"timeline-desc\">{}</div>", escape_html(desc))
                }
                None => String::new(),
            };
            format!(
                "<div class=\"timeline-event\">\n      <div class=\"timeline-marker\">{}</div>\n      <div class=\"timeline-content\">\n        {}\n        <div class=\"timeline-title\">{}</div>\n        {}\n      </div>\n    </div>",
                marker_icon,
                date_html,
                escape_html(&event.title),
                desc_html
            )
        })
        .collect();

    format!("<div class=\"{timeline_class}\">\n    {events_html}\n  </div>")
}

fn comparison_side(side: &ComparisonSide, highlight: bool) -> String {
    let side_class = if highlight {
        "comparison-side right"
    } else {
        "comparison-side left"
    };
    let stats_class = if highlight {
        "comparison-stats highlight"
    } else {
        "comparison-stats"
    };
    format!(
        "<div class=\"{}\">\n      <div class=\"comparison-label\">{}</div>\n      <div class=\"comparison-content\">{}</div>\n      <div class=\"{}\">{}</div>\n    </div>",
        side_class,
        escape_html(&side.label),
        escape_html(&side.content),
        stats_class,
        escape_html(&side.stats)
    )
}

pub fn comparison(content: &ComparisonContent) -> String {
    format!(
        "<div class=\"comparison\">\n    {}\n    <div class=\"comparison-divider\"><div class=\"vs-badge\">VS</div></div>\n    {}\n  </div>",
        comparison_side(&content.left, false),
        comparison_side(&content.right, true)
    )
}

pub fn feature_grid(content: &FeatureGridContent) -> String {
    let columns = content.columns.clamp(2, 4);

    let features_html: String = content
        .features
        .iter()
        .map(|feature| {
            let icon_html = match feature.icon.as_deref() {
                Some(icon) => format!("<div class=\"feature-icon\">{}</div>", hero_icon(icon)),
                None => String::new(),
            };
            let desc_html = if feature.description.is_empty() {
                String::new()
            } else {
                format!(
                    "<div class=\"feature-desc\">{}</div>",
                    escape_html(&feature.description)
                )
            };
            format!(
                "<div class=\"feature-item\">\n      {}\n      <div class=\"feature-title\">{}</div>\n      {}\n    </div>",
                icon_html,
                escape_html(&feature.title),
                desc_html
            )
        })
        .collect();

    format!("<div class=\"feature-grid cols-{columns}\">\n    {features_html}\n  </div>")
}

pub fn stats_dashboard(content: &StatsDashboardContent) -> String {
    let stats_html: String = content
        .stats
        .iter()
        .map(|stat| {
            let icon_html = match stat.icon.as_deref() {
                Some(icon) => format!("<div class=\"stat-icon\">{}</div>", hero_icon(icon)),
                None => String::new(),
            };
            let change_html = match stat.change.as_deref() {
                Some(change) => format!(
                    "<div class=\"stat-change {}\">{}</div>",
                    stat.trend.as_css_class(),
                    escape_html(change)
                ),
                None => String::new(),
            };
            format!(
                "<div class=\"stat-card\">\n      <div class=\"stat-header\">\n        {}\n        {}\n      </div>\n      <div class=\"stat-value\">{}</div>\n      <div class=\"stat-label\">{}</div>\n    </div>",
                icon_html,
                change_html,
                escape_html(&stat.value),
                escape_html(&stat.label)
            )
        })
        .collect();

    format!("<div class=\"stats-dashboard\">\n    {stats_html}\n  </div>")
}

pub fn progress_bar(content: &ProgressBarContent) -> String {
    let percent = clamped_percent(content.value, content.max_value);
    let percent_html = if content.show_percentage {
        format!(
            "<span class=\"progress-percentage\">{}%</span>",
            format_number(percent)
        )
    } else {
        String::new()
    };
    format!(
        "<div class=\"progress-bar-container\">\n    <div class=\"progress-label\"><span>{}</span>{}</div>\n    <div class=\"progress-track\"><div class=\"progress-fill\" style=\"width: {}%;\"></div></div>\n  </div>",
        escape_html(&content.label),
        percent_html,
        format_number(percent)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_process_flow_horizontal_arrows_between_steps() {
        let html = process_flow(&ProcessFlowContent {
            steps: vec!["One".into(), "Two".into(), "Three".into()],
            ..Default::default()
        });
        assert_eq!(html.matches("flow-step").count(), 3);
        assert_eq!(html.matches("flow-arrow").count(), 2);
        assert!(!html.contains("flow-connector"));
    }

    #[test]
    fn test_process_flow_vertical_connectors() {
        let html = process_flow(&ProcessFlowContent {
            steps: vec!["One".into(), "Two".into()],
            orientation: Orientation::Vertical,
            show_arrows: true,
        });
        assert!(html.contains("process-flow vertical"));
        assert_eq!(html.matches("flow-connector").count(), 1);
        assert!(!html.contains("flow-arrow"));
    }

    #[test]
    fn test_bar_chart_scales_to_largest_datum() {
        let html = bar_chart(&BarChartContent {
            data: vec![
                BarDatum { label: "A".into(), value: 50.0 },
                BarDatum { label: "B".into(), value: 25.0 },
            ],
            max_value: None,
        });
        assert!(html.contains("height: 100%"));
        assert!(html.contains("height: 50%"));
    }

    #[test]
    fn test_bar_chart_clamps_above_explicit_max() {
        let html = bar_chart(&BarChartContent {
            data: vec![BarDatum { label: "A".into(), value: 150.0 }],
            max_value: Some(100.0),
        });
        assert!(html.contains("height: 100%"));
        assert!(!html.contains("height: 150%"));
    }

    #[test]
    fn test_timeline_renders_events_with_icons() {
        let html = timeline(&TimelineContent {
            events: vec![TimelineEvent {
                date: "Jan 2025".into(),
                title: "Kickoff".into(),
                description: Some("First post".into()),
                icon: Some("rocket-launch".into()),
            }],
            ..Default::default()
        });
        assert!(html.contains("timeline-marker"));
        assert!(html.contains("Jan 2025"));
        assert!(html.contains("Kickoff"));
        assert!(html.contains("<svg"));
        assert!(!html.contains("timeline horizontal"));
    }

    #[test]
    fn test_comparison_highlights_right_side() {
        let html = comparison(&ComparisonContent {
            left: ComparisonSide { label: "Before".into(), ..Default::default() },
            right: ComparisonSide { label: "After".into(), ..Default::default() },
        });
        assert!(html.contains("comparison-side left"));
        assert!(html.contains("comparison-side right"));
        assert!(html.contains("comparison-stats highlight"));
        assert!(html.contains("vs-badge"));
    }

    #[test]
    fn test_feature_grid_clamps_columns() {
        let html = feature_grid(&FeatureGridContent {
            features: vec![Feature { title: "F".into(), ..Default::default() }],
            columns: 9,
        });
        assert!(html.contains("cols-4"));
    }

    #[test]
    fn test_stats_dashboard_trend_classes() {
        let html = stats_dashboard(&StatsDashboardContent {
            stats: vec![Stat {
                value: "500+".into(),
                label: "Startups".into(),
                icon: Some("rocket-launch".into()),
                change: Some("+127%".into()),
                trend: Trend::Up,
            }],
        });
        assert!(html.contains("stat-change trend-up"));
        assert!(html.contains("500+"));
    }

    #[test]
    fn test_progress_bar_clamps_fill() {
        let over = progress_bar(&ProgressBarContent {
            label: "Done".into(),
            value: 250.0,
            max_value: 100.0,
            show_percentage: true,
        });
        assert!(over.contains("width: 100%"));
        assert!(over.contains(">100%</span>"));

        let negative = progress_bar(&ProgressBarContent {
            label: "Done".into(),
            value: -5.0,
            max_value: 100.0,
            show_percentage: false,
        });
        assert!(negative.contains("width: 0%"));
        assert!(!negative.contains("progress-percentage"));
    }

    #[test]
    fn test_format_number_trims_whole_values() {
        assert_eq!(format_number(50.0), "50");
        assert_eq!(format_number(33.5), "33.5");
    }
}
