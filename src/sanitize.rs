use serde::{Deserialize, Serialize};

/// Escape the five HTML-significant characters in free-text content.
///
/// Every string sourced from a content record passes through here before it
/// is interpolated into markup. The only values that bypass escaping are
/// [`TrustedSvg`] wrappers.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Raw SVG markup that is embedded into the document without escaping.
///
/// This is the sole trusted channel through the sanitization boundary:
/// icon SVGs and background silhouettes supplied by the config author.
/// Inside the crate a plain `String` cannot be passed where `TrustedSvg`
/// is expected, so accidentally trusting a free-text field is a type error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrustedSvg(String);

impl TrustedSvg {
    pub fn new(markup: impl Into<String>) -> Self {
        TrustedSvg(markup.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for TrustedSvg {
    fn from(markup: &str) -> Self {
        TrustedSvg::new(markup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escape_html_all_significant_chars() {
        assert_eq!(
            escape_html(r#"<a href="x" title='y'>&</a>"#),
            "&lt;a href=&quot;x&quot; title=&#x27;y&#x27;&gt;&amp;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_html_plain_text_unchanged() {
        assert_eq!(escape_html("Case Study 2026"), "Case Study 2026");
    }

    #[test]
    fn test_escape_html_neutralizes_script() {
        let escaped = escape_html("<script>alert('xss')</script>");
        assert!(!escaped.contains("<script>"));
    }

    #[test]
    fn test_trusted_svg_passes_through() {
        let svg = TrustedSvg::new("<svg viewBox=\"0 0 24 24\"></svg>");
        assert!(svg.as_str().contains("<svg"));
    }
}
