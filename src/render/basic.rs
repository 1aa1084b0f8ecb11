//! Renderers for the basic component tier: text, cards and branding blocks.

use std::sync::OnceLock;

use regex::Regex;

use crate::component::*;
use crate::sanitize::escape_html;

const BADGE_ICON_CASE_STUDY: &str = r#"<svg viewBox="0 0 24 24" fill="currentColor">
      <rect x="3" y="3" width="7" height="7" rx="1"/>
      <rect x="14" y="3" width="7" height="7" rx="1"/>
      <rect x="3" y="14" width="7" height="7" rx="1"/>
      <rect x="14" y="14" width="7" height="7" rx="1"/>
    </svg>"#;

const BADGE_ICON_PROCESS: &str = r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
      <path d="M4 6h16M4 12h16M4 18h10"/>
    </svg>"#;

pub fn badge(content: &BadgeContent) -> String {
    let icon_svg = match content.icon.as_deref() {
        Some("case-study") => BADGE_ICON_CASE_STUDY,
        Some("process") => BADGE_ICON_PROCESS,
        _ => "",
    };
    format!(
        "<div class=\"badge\">\n    {}\n    {}\n  </div>",
        icon_svg,
        escape_html(&content.text)
    )
}

/// Strip punctuation and lowercase a word for emphasis matching.
fn normalize_word(word: &str) -> String {
    static NON_WORD: OnceLock<Regex> = OnceLock::new();
    let re = NON_WORD.get_or_init(|| Regex::new(r"[^\w]").expect("static pattern"));
    re.replace_all(&word.to_lowercase(), "").into_owned()
}

fn matches_part(word: &str, parts: &[String]) -> bool {
    let normalized = normalize_word(word);
    parts
        .iter()
        .any(|part| normalize_word(part).contains(&normalized))
}

pub fn headline(content: &HeadlineContent) -> String {
    let safe_text = escape_html(&content.text);

    let formatted = if content.bold_parts.is_empty() && content.muted_parts.is_empty() {
        format!("<span class=\"bold\">{safe_text}</span>")
    } else {
        // Whole-word emphasis: bold wins over muted, anything unmatched is bold.
        safe_text
            .split(' ')
            .map(|word| {
                if !content.bold_parts.is_empty() && matches_part(word, &content.bold_parts) {
                    format!("<span class=\"bold\">{word}</span>")
                } else if !content.muted_parts.is_empty()
                    && matches_part(word, &content.muted_parts)
                {
                    format!("<span class=\"muted\">{word}</span>")
                } else {
                    format!("<span class=\"bold\">{word}</span>")
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    };

    format!(
        "<h1 class=\"headline\" style=\"font-size: {}px; text-align: {};\">\n    {}\n  </h1>",
        content.size.px(),
        content.align.as_css(),
        formatted
    )
}

pub fn quote_card(content: &QuoteCardContent) -> String {
    let mut formatted_quote = escape_html(&content.quote);
    for phrase in &content.emphasis {
        if phrase.is_empty() {
            continue;
        }
        let safe_phrase = escape_html(phrase);
        formatted_quote = formatted_quote.replacen(
            &safe_phrase,
            &format!("<strong>{safe_phrase}</strong>"),
            1,
        );
    }

    let author = content.author.as_deref().filter(|a| !a.is_empty());
    let role = content.role.as_deref().filter(|r| !r.is_empty());

    let author_html = match author {
        Some(author) => {
            let safe_author = escape_html(author);
            let avatar_html = match content.avatar.as_deref().filter(|a| !a.is_empty()) {
                Some(avatar) => format!(
                    "<div class=\"author-avatar\"><img src=\"{}\" alt=\"{}\"></div>",
                    escape_html(avatar),
                    safe_author
                ),
                None => {
                    let initials: String = author
                        .split_whitespace()
                        .take(2)
                        .filter_map(|name| name.chars().next())
                        .flat_map(char::to_uppercase)
                        .collect();
                    let initials = if initials.is_empty() {
                        "?".to_string()
                    } else {
                        escape_html(&initials)
                    };
                    format!(
                        "<div class=\"author-avatar\"><div class=\"avatar-placeholder\">{initials}</div></div>"
                    )
                }
            };
            let role_html = match role {
                Some(role) => format!("<div class=\"author-role\">{}</div>", escape_html(role)),
                None => String::new(),
            };
            format!(
                "<div class=\"quote-author\">\n      {avatar_html}\n      <div class=\"author-info\">\n        <div class=\"author-name\">{safe_author}</div>\n        {role_html}\n      </div>\n    </div>"
            )
        }
        None => String::new(),
    };

    format!(
        "<div class=\"quote-card\">\n    <p class=\"quote-text\">&quot;{formatted_quote}&quot;</p>\n    {author_html}\n  </div>"
    )
}

pub fn metric_card(content: &MetricCardContent) -> String {
    let change_html = match content.change.as_deref() {
        Some(change) => format!(
            "<div class=\"metric-change {}\">{}</div>",
            content.trend.as_css_class(),
            escape_html(change)
        ),
        None => String::new(),
    };
    format!(
        "<div class=\"metric-card\">\n    <div class=\"metric-value\">{}</div>\n    <div class=\"metric-label\">{}</div>\n    {}\n  </div>",
        escape_html(&content.value),
        escape_html(&content.label),
        change_html
    )
}

pub fn cta_card(content: &CtaCardContent) -> String {
    let desc_html = match content.description.as_deref() {
        Some(desc) => format!("<p class=\"cta-description\">{}</p>", escape_html(desc)),
        None => String::new(),
    };
    let button_url = match content.button_url.as_deref() {
        Some(url) => escape_html(url),
        None => "#".to_string(),
    };
    format!(
        "<div class=\"cta-card\">\n    <h1 class=\"cta-headline\">{}</h1>\n    {}\n    <a href=\"{}\" class=\"cta-button\">{}</a>\n  </div>",
        escape_html(&content.headline),
        desc_html,
        button_url,
        escape_html(&content.button_text)
    )
}

pub fn infographic_card(content: &InfographicCardContent) -> String {
    let items_html: String = content
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            format!(
                "<div class=\"infographic-item\"><div class=\"item-number\">{}</div><div class=\"item-text\">{}</div></div>",
                i + 1,
                escape_html(item)
            )
        })
        .collect();
    format!(
        "<div class=\"infographic-card\">\n    <h1 class=\"infographic-title\">{}</h1>\n    <div class=\"infographic-items\">\n      {}\n    </div>\n  </div>",
        escape_html(&content.title),
        items_html
    )
}

pub fn logo_card(content: &LogoCardContent) -> String {
    format!(
        "<div class=\"logos-card\">\n    <div class=\"logo\">\n      <svg class=\"logo-icon\" viewBox=\"0 0 24 24\" fill=\"none\" stroke=\"currentColor\" stroke-width=\"2.5\">\n        <path d=\"M4 6h16M4 12h16M4 18h10\"/>\n      </svg>\n      {}\n    </div>\n    <div class=\"logo-divider\"></div>\n    <div class=\"logo\">\n      <div class=\"brand-icon\"></div>\n      {}\n    </div>\n  </div>",
        escape_html(&content.client_name.to_uppercase()),
        escape_html(&content.provider_name.to_uppercase())
    )
}

pub fn event_poster(content: &EventPosterContent) -> String {
    let lines_html: String = content
        .lines
        .iter()
        .map(|line| {
            format!(
                "<div class=\"poster-line\" style=\"font-size: {};\">\n        <span class=\"poster-number\">{}</span>\n        <span class=\"poster-text\">{}</span>\n      </div>",
                escape_html(&line.size),
                escape_html(&line.number),
                escape_html(&line.text)
            )
        })
        .collect();
    format!(
        "<div class=\"event-poster\" style=\"text-align: {};\">\n    {}\n  </div>",
        content.align.as_css(),
        lines_html
    )
}

pub fn subtitle(content: &SubtitleContent) -> String {
    let safe_text = escape_html(&content.text);
    let formatted = match content.highlight.as_deref().filter(|h| !h.is_empty()) {
        Some(highlight) => {
            let safe_highlight = escape_html(highlight);
            safe_text.replacen(
                &safe_highlight,
                &format!("<span class=\"subtitle-highlight\">{safe_highlight}</span>"),
                1,
            )
        }
        None => safe_text,
    };
    format!(
        "<div class=\"subtitle\" style=\"text-align: {};\">\n    {}\n  </div>",
        content.align.as_css(),
        formatted
    )
}

pub fn positioned_logo(content: &PositionedLogoContent) -> String {
    // content.position is already a validated corner; only its fixed CSS class
    // name ever reaches the markup.
    let icon_html = match &content.icon_svg {
        Some(icon) if !icon.is_empty() => {
            format!("<span class=\"positioned-logo-icon\">{}</span>", icon.as_str())
        }
        _ => String::new(),
    };
    format!(
        "<div class=\"positioned-logo {}\">\n    {}\n    <span class=\"positioned-logo-text\">{}</span>\n  </div>",
        content.position.as_css_class(),
        icon_html,
        escape_html(&content.text)
    )
}

pub fn background_svg(content: &BackgroundSvgContent) -> String {
    format!("<div class=\"background-svg\">{}</div>", content.svg.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sanitize::TrustedSvg;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_badge_escapes_text() {
        let html = badge(&BadgeContent {
            text: "<script>alert('xss')</script>".into(),
            icon: None,
        });
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_badge_known_icon_embedded() {
        let html = badge(&BadgeContent {
            text: "Case Study".into(),
            icon: Some("case-study".into()),
        });
        assert!(html.contains("<svg"));
        assert!(html.contains("Case Study"));
    }

    #[test]
    fn test_headline_whole_text_bold_by_default() {
        let html = headline(&HeadlineContent {
            text: "Ship faster".into(),
            ..Default::default()
        });
        assert!(html.contains("<span class=\"bold\">Ship faster</span>"));
        assert!(html.contains("font-size: 64px"));
        assert!(html.contains("text-align: center"));
    }

    #[test]
    fn test_headline_bold_wins_over_muted() {
        let html = headline(&HeadlineContent {
            text: "ship it today".into(),
            bold_parts: vec!["ship".into()],
            muted_parts: vec!["ship it".into()],
            ..Default::default()
        });
        assert!(html.contains("<span class=\"bold\">ship</span>"));
        assert!(html.contains("<span class=\"muted\">it</span>"));
    }

    #[test]
    fn test_headline_matching_ignores_case_and_punctuation() {
        let html = headline(&HeadlineContent {
            text: "Faster, better.".into(),
            muted_parts: vec!["faster".into()],
            ..Default::default()
        });
        assert!(html.contains("<span class=\"muted\">Faster,</span>"));
        assert!(html.contains("<span class=\"bold\">better.</span>"));
    }

    #[test]
    fn test_quote_emphasis_wraps_first_occurrence_only() {
        let html = quote_card(&QuoteCardContent {
            quote: "fast is fast".into(),
            emphasis: vec!["fast".into()],
            ..Default::default()
        });
        assert_eq!(html.matches("<strong>fast</strong>").count(), 1);
    }

    #[test]
    fn test_quote_author_initials() {
        let html = quote_card(&QuoteCardContent {
            quote: "Great".into(),
            author: Some("ada lovelace byron".into()),
            ..Default::default()
        });
        // First letters of the first two name tokens, uppercased.
        assert!(html.contains("<div class=\"avatar-placeholder\">AL</div>"));
    }

    #[test]
    fn test_quote_avatar_url_used_when_present() {
        let html = quote_card(&QuoteCardContent {
            quote: "Great".into(),
            author: Some("Ada".into()),
            avatar: Some("https://example.com/ada.png".into()),
            ..Default::default()
        });
        assert!(html.contains("img src=\"https://example.com/ada.png\""));
        assert!(!html.contains("avatar-placeholder"));
    }

    #[test]
    fn test_cta_defaults() {
        let html = cta_card(&CtaCardContent::default());
        assert!(html.contains("href=\"#\""));
        assert!(html.contains(">Get Started</a>"));
    }

    #[test]
    fn test_infographic_numbers_items_in_order() {
        let html = infographic_card(&InfographicCardContent {
            title: "Steps".into(),
            items: vec!["a".into(), "b".into(), "c".into()],
        });
        let positions: Vec<usize> = (1..=3)
            .map(|n| {
                html.find(&format!("<div class=\"item-number\">{n}</div>"))
                    .unwrap_or_else(|| panic!("missing item number {n}"))
            })
            .collect();
        assert!(positions[0] < positions[1] && positions[1] < positions[2]);
    }

    #[test]
    fn test_logo_card_uppercases() {
        let html = logo_card(&LogoCardContent {
            client_name: "acme".into(),
            provider_name: "studio".into(),
        });
        assert!(html.contains("ACME"));
        assert!(html.contains("STUDIO"));
        assert!(html.contains("logo-divider"));
    }

    #[test]
    fn test_subtitle_highlight_first_occurrence() {
        let html = subtitle(&SubtitleContent {
            text: "go go go".into(),
            highlight: Some("go".into()),
            ..Default::default()
        });
        assert_eq!(
            html.matches("<span class=\"subtitle-highlight\">go</span>").count(),
            1
        );
    }

    #[test]
    fn test_positioned_logo_trusted_icon_not_escaped() {
        let html = positioned_logo(&PositionedLogoContent {
            text: "pioneers".into(),
            icon_svg: Some(TrustedSvg::new("<svg><rect/></svg>")),
            ..Default::default()
        });
        assert!(html.contains("<svg><rect/></svg>"));
        assert!(html.contains("bottom-right"));
    }

    #[test]
    fn test_background_svg_raw_passthrough() {
        let html = background_svg(&BackgroundSvgContent {
            svg: TrustedSvg::new("<svg viewBox=\"0 0 800 600\"></svg>"),
        });
        assert!(html.contains("<svg viewBox=\"0 0 800 600\"></svg>"));
    }
}
