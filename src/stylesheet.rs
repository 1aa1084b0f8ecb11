//! Stylesheet generation: a pure function of (theme, dimensions).
//!
//! The document is a fixed-size canvas, not a responsive page; the requested
//! pixel dimensions are substituted directly into the root sizing rules.
//! Everything else is straight token substitution, except two conditional
//! blocks: the background grid pattern and the theme-level background SVG.

use crate::builder::Dimensions;
use crate::theme::{GridStyle, Theme};

pub fn stylesheet(theme: &Theme, dimensions: Dimensions) -> String {
    let t = theme;
    let mut css = String::with_capacity(12 * 1024);

    css.push_str(
        "\n    * { margin: 0; padding: 0; box-sizing: border-box; }\n\n    /* Anti-aliasing for crisp text */\n    html {\n      -webkit-font-smoothing: antialiased;\n      -moz-osx-font-smoothing: grayscale;\n      text-rendering: optimizeLegibility;\n    }\n",
    );

    css.push_str(&format!(
        "\n    body {{\n      font-family: {font_family};\n      background: {background};\n      width: {width}px;\n      height: {height}px;\n      display: flex;\n      flex-direction: column;\n      padding: {padding_large};\n      position: relative;\n      justify-content: center;\n      gap: {gap_large};\n      overflow: hidden;\n    }}\n",
        font_family = t.font_family,
        background = t.background,
        width = dimensions.width,
        height = dimensions.height,
        padding_large = t.padding_large,
        gap_large = t.gap_large,
    ));

    if t.grid_enabled {
        match t.grid_style {
            GridStyle::Dots => css.push_str(&format!(
                "\n    body::before {{\n      content: '';\n      position: absolute;\n      inset: 0;\n      background-image: radial-gradient(circle, {grid_color} {grid_dot_size}, transparent {grid_dot_size});\n      background-size: {grid_size} {grid_size};\n      pointer-events: none;\n      z-index: 0;\n    }}\n",
                grid_color = t.grid_color,
                grid_dot_size = t.grid_dot_size,
                grid_size = t.grid_size,
            )),
            GridStyle::Lines => css.push_str(&format!(
                "\n    body::before {{\n      content: '';\n      position: absolute;\n      inset: 0;\n      background-image:\n        linear-gradient({grid_color} 1px, transparent 1px),\n        linear-gradient(90deg, {grid_color} 1px, transparent 1px);\n      background-size: {grid_size} {grid_size};\n      pointer-events: none;\n      z-index: 0;\n    }}\n",
                grid_color = t.grid_color,
                grid_size = t.grid_size,
            )),
        }
    }

    // Theme-level background silhouette. Independent of the background_svg
    // component, which ships its own full-bleed rules further down.
    if t.background_svg.is_some() {
        css.push_str(&format!(
            "\n    .theme-background-svg {{\n      position: absolute;\n      inset: 0;\n      pointer-events: none;\n      z-index: 1;\n      display: flex;\n      align-items: flex-end;\n      justify-content: flex-end;\n      background-position: {background_svg_position};\n    }}\n    .theme-background-svg svg {{\n      width: auto;\n      height: 80%;\n      opacity: 0.15;\n      fill: {background_svg_color};\n    }}\n",
            background_svg_position = t.background_svg_position,
            background_svg_color = t.background_svg_color,
        ));
    }

    css.push_str("\n    body > * {\n      position: relative;\n      z-index: 2;\n    }\n");

    // Badge: refined pill style
    css.push_str(&format!(
        "\n    .badge {{\n      display: inline-flex;\n      align-items: center;\n      gap: 10px;\n      background: {surface};\n      backdrop-filter: blur({glass_blur});\n      -webkit-backdrop-filter: blur({glass_blur});\n      border: 1.5px solid {border};\n      border-radius: {radius_pill};\n      padding: 14px 28px;\n      font-size: 13px;\n      font-weight: 700;\n      letter-spacing: 0.08em;\n      text-transform: uppercase;\n      color: {accent};\n      box-shadow: {shadow_small};\n      width: fit-content;\n      margin-bottom: {gap_small};\n    }}\n    .badge svg {{ width: 18px; height: 18px; }}\n",
        surface = t.surface,
        glass_blur = t.glass_blur,
        border = t.border,
        radius_pill = t.radius_pill,
        accent = t.accent,
        shadow_small = t.shadow_small,
        gap_small = t.gap_small,
    ));

    // Headline: bold, impactful typography
    css.push_str(&format!(
        "\n    .headline {{\n      font-weight: {font_headline};\n      line-height: {line_height_tight};\n      letter-spacing: {letter_spacing_tight};\n    }}\n    .headline .bold {{\n      color: {text_primary};\n      display: inline;\n    }}\n    .headline .muted {{\n      color: {text_muted};\n      display: inline;\n    }}\n",
        font_headline = t.font_headline,
        line_height_tight = t.line_height_tight,
        letter_spacing_tight = t.letter_spacing_tight,
        text_primary = t.text_primary,
        text_muted = t.text_muted,
    ));

    // Quote card: elegant, spacious
    css.push_str(&format!(
        "\n    .quote-card {{\n      background: {surface};\n      backdrop-filter: blur({glass_blur});\n      -webkit-backdrop-filter: blur({glass_blur});\n      border-radius: {radius_large};\n      padding: {padding_large};\n      border: 1px solid {border};\n      box-shadow: {shadow_medium};\n      flex: 1;\n      display: flex;\n      flex-direction: column;\n      justify-content: center;\n    }}\n    .quote-text {{\n      font-size: 38px;\n      font-weight: 500;\n      line-height: 1.5;\n      color: {text_secondary};\n      margin-bottom: {gap_large};\n      letter-spacing: {letter_spacing_normal};\n    }}\n    .quote-text strong {{\n      color: {text_primary};\n      font-weight: 700;\n    }}\n    .quote-author {{\n      display: flex;\n      align-items: center;\n      gap: 20px;\n      padding-top: {gap_medium};\n      border-top: 1px solid {border};\n    }}\n    .author-avatar {{\n      width: 64px;\n      height: 64px;\n      border-radius: 50%;\n      background: {border_light};\n      overflow: hidden;\n      flex-shrink: 0;\n      border: 2px solid {border};\n    }}\n    .author-avatar img {{\n      width: 100%;\n      height: 100%;\n      object-fit: cover;\n    }}\n    .avatar-placeholder {{\n      width: 100%;\n      height: 100%;\n      display: flex;\n      align-items: center;\n      justify-content: center;\n      font-size: 24px;\n      font-weight: 700;\n      background: {gradient_primary};\n      color: white;\n    }}\n    .author-name {{\n      font-size: 20px;\n      font-weight: 700;\n      color: {text_primary};\n      letter-spacing: {letter_spacing_normal};\n    }}\n    .author-role {{\n      font-size: 16px;\n      color: {text_secondary};\n      margin-top: 4px;\n      font-weight: 500;\n    }}\n",
        surface = t.surface,
        glass_blur = t.glass_blur,
        radius_large = t.radius_large,
        padding_large = t.padding_large,
        border = t.border,
        shadow_medium = t.shadow_medium,
        text_secondary = t.text_secondary,
        gap_large = t.gap_large,
        letter_spacing_normal = t.letter_spacing_normal,
        text_primary = t.text_primary,
        gap_medium = t.gap_medium,
        border_light = t.border_light,
        gradient_primary = t.gradient_primary,
    ));

    // Metric card: bold, centered
    css.push_str(&format!(
        "\n    .metric-card {{\n      background: {surface};\n      backdrop-filter: blur({glass_blur});\n      -webkit-backdrop-filter: blur({glass_blur});\n      border-radius: {radius_large};\n      padding: {padding_large};\n      border: 1px solid {border};\n      box-shadow: {shadow_medium};\n      flex: 1;\n      display: flex;\n      flex-direction: column;\n      justify-content: center;\n      text-align: center;\n    }}\n    .metric-value {{\n      font-size: 140px;\n      font-weight: {font_headline};\n      background: {gradient_text};\n      -webkit-background-clip: text;\n      -webkit-text-fill-color: transparent;\n      background-clip: text;\n      letter-spacing: -0.05em;\n      line-height: 1;\n      margin-bottom: {gap_medium};\n    }}\n    .metric-label {{\n      font-size: 24px;\n      font-weight: 600;\n      color: {text_primary};\n      letter-spacing: 0.02em;\n      margin-bottom: {gap_small};\n    }}\n    .metric-change {{\n      font-size: 18px;\n      font-weight: 600;\n      color: {accent};\n      padding: 10px 20px;\n      background: {border_light};\n      border-radius: {radius_pill};\n      display: inline-block;\n    }}\n",
        surface = t.surface,
        glass_blur = t.glass_blur,
        radius_large = t.radius_large,
        padding_large = t.padding_large,
        border = t.border,
        shadow_medium = t.shadow_medium,
        font_headline = t.font_headline,
        gradient_text = t.gradient_text,
        gap_medium = t.gap_medium,
        text_primary = t.text_primary,
        gap_small = t.gap_small,
        accent = t.accent,
        border_light = t.border_light,
        radius_pill = t.radius_pill,
    ));

    // CTA card: compelling, action-oriented
    css.push_str(&format!(
        "\n    .cta-card {{\n      background: {surface};\n      backdrop-filter: blur({glass_blur});\n      -webkit-backdrop-filter: blur({glass_blur});\n      border-radius: {radius_large};\n      padding: {padding_large};\n      border: 1px solid {border};\n      box-shadow: {shadow_medium};\n      flex: 1;\n      display: flex;\n      flex-direction: column;\n      justify-content: center;\n      align-items: center;\n      text-align: center;\n    }}\n    .cta-headline {{\n      font-size: 64px;\n      font-weight: {font_headline};\n      color: {text_primary};\n      margin-bottom: {gap_medium};\n      line-height: {line_height_tight};\n      letter-spacing: {letter_spacing_tight};\n    }}\n    .cta-description {{\n      font-size: 24px;\n      color: {text_secondary};\n      margin-bottom: {gap_large};\n      line-height: {line_height_normal};\n      max-width: 600px;\n      font-weight: 500;\n    }}\n    .cta-button {{\n      display: inline-block;\n      background: {gradient_primary};\n      color: white;\n      padding: 20px 48px;\n      border-radius: {radius_pill};\n      font-size: 18px;\n      font-weight: 700;\n      text-decoration: none;\n      letter-spacing: 0.02em;\n      box-shadow: {shadow_medium}, 0 0 0 0 {accent};\n      transition: all 0.2s ease;\n    }}\n",
        surface = t.surface,
        glass_blur = t.glass_blur,
        radius_large = t.radius_large,
        padding_large = t.padding_large,
        border = t.border,
        shadow_medium = t.shadow_medium,
        font_headline = t.font_headline,
        text_primary = t.text_primary,
        gap_medium = t.gap_medium,
        line_height_tight = t.line_height_tight,
        letter_spacing_tight = t.letter_spacing_tight,
        text_secondary = t.text_secondary,
        gap_large = t.gap_large,
        line_height_normal = t.line_height_normal,
        gradient_primary = t.gradient_primary,
        radius_pill = t.radius_pill,
        accent = t.accent,
    ));

    // Infographic card: structured, readable
    css.push_str(&format!(
        "\n    .infographic-card {{\n      background: {surface};\n      backdrop-filter: blur({glass_blur});\n      -webkit-backdrop-filter: blur({glass_blur});\n      border-radius: {radius_large};\n      padding: {padding_large};\n      border: 1px solid {border};\n      box-shadow: {shadow_medium};\n      flex: 1;\n      display: flex;\n      flex-direction: column;\n    }}\n    .infographic-title {{\n      font-size: 42px;\n      font-weight: {font_headline};\n      color: {text_primary};\n      margin-bottom: {gap_large};\n      text-align: center;\n      letter-spacing: {letter_spacing_tight};\n      line-height: {line_height_tight};\n    }}\n    .infographic-items {{\n      display: flex;\n      flex-direction: column;\n      gap: {gap_small};\n      flex: 1;\n      justify-content: center;\n    }}\n    .infographic-item {{\n      display: flex;\n      align-items: center;\n      gap: 24px;\n      padding: 24px 28px;\n      background: {border_light};\n      border-radius: {radius_medium};\n      border: 1px solid {border};\n      transition: all 0.2s ease;\n    }}\n    .item-number {{\n      width: 48px;\n      height: 48px;\n      border-radius: 50%;\n      background: {gradient_primary};\n      display: flex;\n      align-items: center;\n      justify-content: center;\n      font-size: 20px;\n      font-weight: 700;\n      color: white;\n      flex-shrink: 0;\n      box-shadow: {shadow_small};\n    }}\n    .item-text {{\n      font-size: 20px;\n      font-weight: 600;\n      color: {text_primary};\n      line-height: 1.4;\n      letter-spacing: {letter_spacing_normal};\n    }}\n",
        surface = t.surface,
        glass_blur = t.glass_blur,
        radius_large = t.radius_large,
        padding_large = t.padding_large,
        border = t.border,
        shadow_medium = t.shadow_medium,
        font_headline = t.font_headline,
        text_primary = t.text_primary,
        gap_large = t.gap_large,
        letter_spacing_tight = t.letter_spacing_tight,
        line_height_tight = t.line_height_tight,
        gap_small = t.gap_small,
        border_light = t.border_light,
        radius_medium = t.radius_medium,
        gradient_primary = t.gradient_primary,
        shadow_small = t.shadow_small,
        letter_spacing_normal = t.letter_spacing_normal,
    ));

    // Logos card
    css.push_str(&format!(
        "\n    .logos-card {{\n      background: {border_light};\n      border-radius: {radius_large};\n      padding: 20px {padding_medium};\n      display: flex;\n      align-items: center;\n      justify-content: center;\n      gap: {padding_small};\n      margin-top: {gap_medium};\n      border: 1px solid {border};\n    }}\n    .logo {{\n      display: flex;\n      align-items: center;\n      gap: 12px;\n      font-size: 22px;\n      font-weight: {font_headline};\n      color: {text_primary};\n      letter-spacing: 0.02em;\n    }}\n    .logo-icon {{ width: 28px; height: 28px; }}\n    .logo-divider {{\n      width: 1px;\n      height: 32px;\n      background: {border};\n    }}\n    .brand-icon {{\n      width: 28px;\n      height: 28px;\n      background: {gradient_primary};\n      border-radius: 8px;\n    }}\n",
        border_light = t.border_light,
        radius_large = t.radius_large,
        padding_medium = t.padding_medium,
        padding_small = t.padding_small,
        gap_medium = t.gap_medium,
        border = t.border,
        font_headline = t.font_headline,
        text_primary = t.text_primary,
        gradient_primary = t.gradient_primary,
    ));

    // Advanced components
    css.push_str("\n    .hero-icon {\n      flex-shrink: 0;\n      width: 32px;\n      height: 32px;\n    }\n");

    // Process flow: clean, connected steps
    css.push_str(&format!(
        "\n    .process-flow {{\n      display: flex;\n      align-items: center;\n      justify-content: center;\n      gap: 16px;\n      flex: 1;\n    }}\n    .process-flow.vertical {{\n      flex-direction: column;\n      gap: 0;\n    }}\n    .flow-step {{\n      background: {surface};\n      backdrop-filter: blur({glass_blur});\n      -webkit-backdrop-filter: blur({glass_blur});\n      border-radius: {radius_large};\n      padding: {padding_medium};\n      border: 1px solid {border};\n      display: flex;\n      flex-direction: column;\n      align-items: center;\n      gap: 16px;\n      min-width: 200px;\n      text-align: center;\n      box-shadow: {shadow_medium};\n    }}\n    .flow-step.vertical {{\n      flex-direction: row;\n      min-width: 500px;\n      text-align: left;\n    }}\n    .step-number {{\n      width: 56px;\n      height: 56px;\n      border-radius: 50%;\n      background: {gradient_primary};\n      display: flex;\n      align-items: center;\n      justify-content: center;\n      font-size: 24px;\n      font-weight: 800;\n      color: white;\n      box-shadow: 0 4px 12px rgba(0,0,0,0.15);\n      flex-shrink: 0;\n    }}\n    .step-text {{\n      font-size: 18px;\n      font-weight: 600;\n      color: {text_primary};\n      line-height: 1.4;\n      letter-spacing: {letter_spacing_normal};\n    }}\n    .flow-arrow {{\n      color: {accent};\n      flex-shrink: 0;\n      opacity: 0.6;\n    }}\n    .flow-connector {{\n      width: 2px;\n      height: 32px;\n      background: {gradient_primary};\n      margin: 0 auto;\n      opacity: 0.5;\n    }}\n",
        surface = t.surface,
        glass_blur = t.glass_blur,
        radius_large = t.radius_large,
        padding_medium = t.padding_medium,
        border = t.border,
        shadow_medium = t.shadow_medium,
        gradient_primary = t.gradient_primary,
        text_primary = t.text_primary,
        letter_spacing_normal = t.letter_spacing_normal,
        accent = t.accent,
    ));

    // Bar chart: refined data visualization
    css.push_str(&format!(
        "\n    .bar-chart {{\n      display: flex;\n      align-items: flex-end;\n      justify-content: space-around;\n      gap: {gap_medium};\n      background: {surface};\n      backdrop-filter: blur({glass_blur});\n      -webkit-backdrop-filter: blur({glass_blur});\n      border-radius: {radius_large};\n      padding: {padding_large};\n      height: 420px;\n      border: 1px solid {border};\n      box-shadow: {shadow_medium};\n    }}\n    .bar-item {{\n      display: flex;\n      flex-direction: column;\n      align-items: center;\n      gap: 16px;\n      flex: 1;\n      max-width: 120px;\n    }}\n    .bar-container {{\n      width: 100%;\n      height: 320px;\n      background: {border_light};\n      border-radius: {radius_small};\n      position: relative;\n      display: flex;\n      align-items: flex-end;\n      overflow: hidden;\n    }}\n    .bar-fill {{\n      width: 100%;\n      background: {gradient_primary};\n      border-radius: {radius_small} {radius_small} 0 0;\n      display: flex;\n      align-items: flex-start;\n      justify-content: center;\n      padding-top: 12px;\n      box-shadow: 0 -4px 20px rgba(0,0,0,0.1);\n    }}\n    .bar-value {{\n      font-size: 18px;\n      font-weight: 800;\n      color: white;\n      text-shadow: 0 1px 2px rgba(0,0,0,0.2);\n    }}\n    .bar-label {{\n      font-size: 16px;\n      font-weight: 600;\n      color: {text_primary};\n      text-align: center;\n      letter-spacing: 0.02em;\n    }}\n",
        gap_medium = t.gap_medium,
        surface = t.surface,
        glass_blur = t.glass_blur,
        radius_large = t.radius_large,
        padding_large = t.padding_large,
        border = t.border,
        shadow_medium = t.shadow_medium,
        border_light = t.border_light,
        radius_small = t.radius_small,
        gradient_primary = t.gradient_primary,
        text_primary = t.text_primary,
    ));

    // Timeline: elegant vertical progression
    css.push_str(&format!(
        "\n    .timeline {{\n      display: flex;\n      flex-direction: column;\n      gap: 0;\n      position: relative;\n      padding-left: 80px;\n    }}\n    .timeline::before {{\n      content: '';\n      position: absolute;\n      left: 28px;\n      top: 32px;\n      bottom: 32px;\n      width: 3px;\n      background: {gradient_primary};\n      border-radius: 2px;\n      opacity: 0.4;\n    }}\n    .timeline.horizontal {{\n      flex-direction: row;\n      gap: {gap_medium};\n      padding-left: 0;\n    }}\n    .timeline.horizontal::before {{\n      display: none;\n    }}\n    .timeline.horizontal .timeline-marker {{\n      position: static;\n    }}\n    .timeline-event {{\n      display: flex;\n      gap: 32px;\n      padding: 24px 0;\n      position: relative;\n    }}\n    .timeline-marker {{\n      position: absolute;\n      left: -68px;\n      top: 24px;\n      width: 48px;\n      height: 48px;\n      border-radius: 50%;\n      background: {surface};\n      border: 3px solid {accent};\n      display: flex;\n      align-items: center;\n      justify-content: center;\n      box-shadow: {shadow_small};\n      z-index: 1;\n      color: {accent};\n    }}\n    .timeline-marker .hero-icon {{\n      width: 24px;\n      height: 24px;\n    }}\n    .timeline-content {{\n      background: {surface};\n      backdrop-filter: blur({glass_blur});\n      -webkit-backdrop-filter: blur({glass_blur});\n      border-radius: {radius_medium};\n      padding: {padding_medium};\n      border: 1px solid {border};\n      flex: 1;\n      box-shadow: {shadow_small};\n    }}\n    .timeline-date {{\n      font-size: 14px;\n      font-weight: 700;\n      color: {accent};\n      margin-bottom: 8px;\n      letter-spacing: 0.05em;\n      text-transform: uppercase;\n    }}\n    .timeline-title {{\n      font-size: 22px;\n      font-weight: 700;\n      color: {text_primary};\n      margin-bottom: 8px;\n      letter-spacing: {letter_spacing_normal};\n    }}\n    .timeline-desc {{\n      font-size: 16px;\n      color: {text_secondary};\n      line-height: {line_height_normal};\n    }}\n",
        gradient_primary = t.gradient_primary,
        gap_medium = t.gap_medium,
        surface = t.surface,
        accent = t.accent,
        shadow_small = t.shadow_small,
        glass_blur = t.glass_blur,
        radius_medium = t.radius_medium,
        padding_medium = t.padding_medium,
        border = t.border,
        text_primary = t.text_primary,
        letter_spacing_normal = t.letter_spacing_normal,
        text_secondary = t.text_secondary,
        line_height_normal = t.line_height_normal,
    ));

    // Comparison: clear side-by-side
    css.push_str(&format!(
        "\n    .comparison {{\n      display: flex;\n      align-items: stretch;\n      gap: {gap_medium};\n    }}\n    .comparison-side {{\n      flex: 1;\n      background: {surface};\n      backdrop-filter: blur({glass_blur});\n      -webkit-backdrop-filter: blur({glass_blur});\n      border-radius: {radius_large};\n      padding: {padding_large};\n      border: 1px solid {border};\n      display: flex;\n      flex-direction: column;\n      gap: {gap_medium};\n      box-shadow: {shadow_small};\n    }}\n    .comparison-side.right {{\n      border-color: {accent};\n      border-width: 2px;\n      box-shadow: {shadow_medium};\n    }}\n    .comparison-label {{\n      font-size: 14px;\n      font-weight: 700;\n      color: {text_secondary};\n      text-transform: uppercase;\n      letter-spacing: 0.1em;\n    }}\n    .comparison-content {{\n      font-size: 26px;\n      font-weight: 600;\n      color: {text_primary};\n      line-height: 1.4;\n      letter-spacing: {letter_spacing_normal};\n    }}\n    .comparison-stats {{\n      font-size: 56px;\n      font-weight: 800;\n      color: {text_muted};\n      letter-spacing: -0.03em;\n    }}\n    .comparison-stats.highlight {{\n      background: {gradient_text};\n      -webkit-background-clip: text;\n      -webkit-text-fill-color: transparent;\n      background-clip: text;\n    }}\n    .comparison-divider {{\n      display: flex;\n      align-items: center;\n      justify-content: center;\n      position: relative;\n    }}\n    .vs-badge {{\n      width: 64px;\n      height: 64px;\n      border-radius: 50%;\n      background: {gradient_primary};\n      display: flex;\n      align-items: center;\n      justify-content: center;\n      font-size: 20px;\n      font-weight: 800;\n      color: white;\n      box-shadow: {shadow_medium};\n    }}\n",
        gap_medium = t.gap_medium,
        surface = t.surface,
        glass_blur = t.glass_blur,
        radius_large = t.radius_large,
        padding_large = t.padding_large,
        border = t.border,
        shadow_small = t.shadow_small,
        accent = t.accent,
        shadow_medium = t.shadow_medium,
        text_secondary = t.text_secondary,
        text_primary = t.text_primary,
        letter_spacing_normal = t.letter_spacing_normal,
        text_muted = t.text_muted,
        gradient_text = t.gradient_text,
        gradient_primary = t.gradient_primary,
    ));

    // Feature grid: balanced icon cards
    css.push_str(&format!(
        "\n    .feature-grid {{\n      display: grid;\n      gap: {gap_medium};\n    }}\n    .feature-grid.cols-2 {{ grid-template-columns: repeat(2, 1fr); }}\n    .feature-grid.cols-3 {{ grid-template-columns: repeat(3, 1fr); }}\n    .feature-grid.cols-4 {{ grid-template-columns: repeat(4, 1fr); }}\n    .feature-item {{\n      background: {surface};\n      backdrop-filter: blur({glass_blur});\n      -webkit-backdrop-filter: blur({glass_blur});\n      border-radius: {radius_medium};\n      padding: {padding_medium};\n      border: 1px solid {border};\n      display: flex;\n      flex-direction: column;\n      align-items: center;\n      gap: 16px;\n      text-align: center;\n      box-shadow: {shadow_small};\n    }}\n    .feature-icon {{\n      width: 64px;\n      height: 64px;\n      border-radius: {radius_medium};\n      background: {border_light};\n      display: flex;\n      align-items: center;\n      justify-content: center;\n      color: {accent};\n    }}\n    .feature-title {{\n      font-size: 20px;\n      font-weight: 700;\n      color: {text_primary};\n      letter-spacing: {letter_spacing_normal};\n    }}\n    .feature-desc {{\n      font-size: 15px;\n      color: {text_secondary};\n      line-height: {line_height_normal};\n    }}\n",
        gap_medium = t.gap_medium,
        surface = t.surface,
        glass_blur = t.glass_blur,
        radius_medium = t.radius_medium,
        padding_medium = t.padding_medium,
        border = t.border,
        shadow_small = t.shadow_small,
        border_light = t.border_light,
        accent = t.accent,
        text_primary = t.text_primary,
        letter_spacing_normal = t.letter_spacing_normal,
        text_secondary = t.text_secondary,
        line_height_normal = t.line_height_normal,
    ));

    // Stats dashboard: compact, informative
    css.push_str(&format!(
        "\n    .stats-dashboard {{\n      display: grid;\n      grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));\n      gap: {gap_medium};\n    }}\n    .stat-card {{\n      background: {surface};\n      backdrop-filter: blur({glass_blur});\n      -webkit-backdrop-filter: blur({glass_blur});\n      border-radius: {radius_large};\n      padding: {padding_medium};\n      border: 1px solid {border};\n      display: flex;\n      flex-direction: column;\n      gap: 16px;\n      box-shadow: {shadow_medium};\n    }}\n    .stat-header {{\n      display: flex;\n      align-items: center;\n      justify-content: space-between;\n    }}\n    .stat-icon {{\n      width: 48px;\n      height: 48px;\n      border-radius: {radius_small};\n      background: {border_light};\n      display: flex;\n      align-items: center;\n      justify-content: center;\n      color: {accent};\n    }}\n    .stat-change {{\n      font-size: 14px;\n      font-weight: 700;\n      padding: 6px 14px;\n      border-radius: {radius_pill};\n    }}\n    .stat-change.trend-up, .metric-change.trend-up {{\n      background: rgba(34, 197, 94, 0.15);\n      color: #16a34a;\n    }}\n    .stat-change.trend-down, .metric-change.trend-down {{\n      background: rgba(239, 68, 68, 0.15);\n      color: #dc2626;\n    }}\n    .stat-change.trend-neutral, .metric-change.trend-neutral {{\n      background: {border_light};\n      color: {text_secondary};\n    }}\n    .stat-value {{\n      font-size: 48px;\n      font-weight: 800;\n      background: {gradient_text};\n      -webkit-background-clip: text;\n      -webkit-text-fill-color: transparent;\n      background-clip: text;\n      letter-spacing: -0.03em;\n      line-height: 1;\n    }}\n    .stat-label {{\n      font-size: 16px;\n      font-weight: 600;\n      color: {text_secondary};\n    }}\n",
        gap_medium = t.gap_medium,
        surface = t.surface,
        glass_blur = t.glass_blur,
        radius_large = t.radius_large,
        padding_medium = t.padding_medium,
        border = t.border,
        shadow_medium = t.shadow_medium,
        radius_small = t.radius_small,
        border_light = t.border_light,
        accent = t.accent,
        radius_pill = t.radius_pill,
        text_secondary = t.text_secondary,
        gradient_text = t.gradient_text,
    ));

    // Progress bar
    css.push_str(&format!(
        "\n    .progress-bar-container {{\n      display: flex;\n      flex-direction: column;\n      gap: 12px;\n      padding: {padding_small} 0;\n    }}\n    .progress-label {{\n      display: flex;\n      justify-content: space-between;\n      align-items: center;\n      font-size: 20px;\n      font-weight: 600;\n      color: {text_primary};\n    }}\n    .progress-percentage {{\n      font-size: 18px;\n      font-weight: 700;\n      color: {accent};\n    }}\n    .progress-track {{\n      width: 100%;\n      height: 16px;\n      background: {border_light};\n      border-radius: {radius_pill};\n      overflow: hidden;\n    }}\n    .progress-fill {{\n      height: 100%;\n      background: {gradient_primary};\n      border-radius: {radius_pill};\n      transition: width 0.3s ease;\n      box-shadow: {shadow_medium};\n    }}\n",
        padding_small = t.padding_small,
        text_primary = t.text_primary,
        accent = t.accent,
        border_light = t.border_light,
        radius_pill = t.radius_pill,
        gradient_primary = t.gradient_primary,
        shadow_medium = t.shadow_medium,
    ));

    // Event poster
    css.push_str(&format!(
        "\n    .event-poster {{\n      display: flex;\n      flex-direction: column;\n      gap: 0;\n    }}\n    .poster-line {{\n      display: flex;\n      align-items: baseline;\n      gap: 24px;\n      font-weight: {font_headline};\n      line-height: 1.0;\n      letter-spacing: -0.04em;\n    }}\n    .poster-number {{\n      color: {text_primary};\n      font-style: italic;\n    }}\n    .poster-text {{\n      color: {text_primary};\n      font-style: normal;\n    }}\n",
        font_headline = t.font_headline,
        text_primary = t.text_primary,
    ));

    // Subtitle
    css.push_str(&format!(
        "\n    .subtitle {{\n      font-size: 24px;\n      font-weight: {font_body};\n      color: {text_secondary};\n      letter-spacing: 0.02em;\n      margin-top: {gap_large};\n    }}\n    .subtitle-highlight {{\n      color: {text_primary};\n      font-weight: {font_subheadline};\n      background: {surface};\n      padding: 4px 12px;\n      border-radius: 4px;\n    }}\n",
        font_body = t.font_body,
        text_secondary = t.text_secondary,
        gap_large = t.gap_large,
        text_primary = t.text_primary,
        font_subheadline = t.font_subheadline,
        surface = t.surface,
    ));

    // Positioned logo
    css.push_str(&format!(
        "\n    .positioned-logo {{\n      position: absolute;\n      display: flex;\n      align-items: center;\n      gap: 8px;\n      font-size: 20px;\n      font-weight: {font_subheadline};\n      color: {text_secondary};\n      z-index: 10;\n    }}\n    .positioned-logo.bottom-right {{\n      bottom: {padding_medium};\n      right: {padding_large};\n    }}\n    .positioned-logo.bottom-left {{\n      bottom: {padding_medium};\n      left: {padding_large};\n    }}\n    .positioned-logo.top-right {{\n      top: {padding_medium};\n      right: {padding_large};\n    }}\n    .positioned-logo.top-left {{\n      top: {padding_medium};\n      left: {padding_large};\n    }}\n    .positioned-logo-icon {{\n      display: flex;\n      align-items: center;\n    }}\n    .positioned-logo-icon svg {{\n      width: 24px;\n      height: 24px;\n    }}\n    .positioned-logo-text {{\n      letter-spacing: 0.05em;\n    }}\n",
        font_subheadline = t.font_subheadline,
        text_secondary = t.text_secondary,
        padding_medium = t.padding_medium,
        padding_large = t.padding_large,
    ));

    // Background SVG component (full-bleed decorative layer)
    css.push_str(&format!(
        "\n    .background-svg {{\n      position: absolute;\n      inset: 0;\n      pointer-events: none;\n      z-index: 1;\n      display: flex;\n      align-items: flex-end;\n      justify-content: flex-end;\n      overflow: hidden;\n    }}\n    .background-svg svg {{\n      width: auto;\n      height: 90%;\n      max-width: 60%;\n      fill: {text_primary};\n      opacity: 0.08;\n    }}\n  ",
        text_primary = t.text_primary,
    ));

    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_substituted_into_body() {
        let css = stylesheet(&Theme::default(), Dimensions::new(1080, 1350));
        assert!(css.contains("width: 1080px"));
        assert!(css.contains("height: 1350px"));
    }

    #[test]
    fn test_grid_disabled_by_default() {
        let css = stylesheet(&Theme::default(), Dimensions::default());
        assert!(!css.contains("body::before"));
    }

    #[test]
    fn test_dot_grid_uses_radial_gradient() {
        let theme = Theme {
            grid_enabled: true,
            grid_style: GridStyle::Dots,
            ..Theme::default()
        };
        let css = stylesheet(&theme, Dimensions::default());
        assert!(css.contains("radial-gradient"));
    }

    #[test]
    fn test_line_grid_uses_linear_gradient_pattern() {
        let theme = Theme {
            grid_enabled: true,
            grid_style: GridStyle::Lines,
            ..Theme::default()
        };
        let css = stylesheet(&theme, Dimensions::default());
        assert!(css.contains("linear-gradient(90deg"));
        assert!(!css.contains("radial-gradient(circle"));
    }

    #[test]
    fn test_theme_background_svg_block_is_conditional() {
        let plain = stylesheet(&Theme::default(), Dimensions::default());
        assert!(!plain.contains(".theme-background-svg"));

        let theme = Theme {
            background_svg: Some(crate::sanitize::TrustedSvg::new("<svg></svg>")),
            ..Theme::default()
        };
        let css = stylesheet(&theme, Dimensions::default());
        assert!(css.contains(".theme-background-svg"));
    }

    #[test]
    fn test_accent_token_substituted() {
        let theme = Theme {
            accent: "#ff0000".into(),
            ..Theme::default()
        };
        let css = stylesheet(&theme, Dimensions::default());
        assert!(css.contains("#ff0000"));
    }
}
