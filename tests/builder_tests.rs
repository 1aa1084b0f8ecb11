//! Integration tests over the public API: JSON config in, full document out.

use cardsmith::{build_graphic, Dimensions, GraphicsBuilder, GraphicsConfig, Theme};
use pretty_assertions::assert_eq;

#[test]
fn test_empty_components_still_produce_complete_document() {
    let html = build_graphic(r#"{"components": []}"#, Dimensions::default()).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert_eq!(html.matches("<!DOCTYPE html>").count(), 1);
    assert_eq!(html.matches("<style>").count(), 1);
    assert!(html.contains("<body>"));
    assert!(html.contains("</html>"));
}

#[test]
fn test_badge_document_end_to_end() {
    let html = build_graphic(
        r#"{"components": [{"type": "badge", "content": {"text": "Case Study", "icon": "case-study"}}]}"#,
        Dimensions::SQUARE,
    )
    .unwrap();
    assert!(html.contains(r#"<div class="badge">"#));
    assert!(html.contains("Case Study"));
    assert!(html.contains("width: 1080px"));
    assert!(html.contains("height: 1080px"));
}

#[test]
fn test_unknown_component_type_does_not_fail_the_build() {
    let html = build_graphic(
        r#"{"components": [
            {"type": "hologram", "content": {"anything": true}},
            {"type": "subtitle", "content": {"text": "still here"}}
        ]}"#,
        Dimensions::default(),
    )
    .unwrap();
    assert!(html.contains("still here"));
    assert!(!html.contains("hologram"));
}

#[test]
fn test_free_text_cannot_inject_markup() {
    let html = build_graphic(
        r#"{"components": [
            {"type": "headline", "content": {"text": "<script>alert(1)</script>"}},
            {"type": "quote_card", "content": {"quote": "a <b>bold</b> claim", "author": "<img src=x>"}}
        ]}"#,
        Dimensions::default(),
    )
    .unwrap();
    assert!(!html.contains("<script>"));
    assert!(!html.contains("<b>bold</b>"));
    assert!(!html.contains("<img src=x>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn test_trusted_svg_channel_passes_markup_through() {
    let html = build_graphic(
        r#"{"components": [{"type": "background_svg", "content": {"svg": "<svg viewBox=\"0 0 10 10\"><circle r=\"4\"/></svg>"}}]}"#,
        Dimensions::default(),
    )
    .unwrap();
    assert!(html.contains("<circle r=\"4\"/>"));
}

#[test]
fn test_theme_override_is_partial() {
    let html = build_graphic(
        r##"{"theme": {"accent": "#ff0000"}, "components": []}"##,
        Dimensions::default(),
    )
    .unwrap();
    let default_theme = Theme::default();
    assert!(html.contains("#ff0000"));
    // untouched tokens keep their defaults
    assert!(html.contains(&default_theme.background));
    assert!(html.contains(&default_theme.gradient_primary));
}

#[test]
fn test_unknown_theme_key_is_inert() {
    let with_junk = build_graphic(
        r##"{"theme": {"not_a_token": "#123456"}, "components": []}"##,
        Dimensions::default(),
    )
    .unwrap();
    let without = build_graphic(r#"{"components": []}"#, Dimensions::default()).unwrap();
    assert_eq!(with_junk, without);
}

#[test]
fn test_dark_preset_base_theme() {
    let builder = GraphicsBuilder::with_theme(Theme::dark());
    let html = builder
        .build_json(r#"{"components": []}"#, Dimensions::default())
        .unwrap();
    assert!(html.contains("#0a0a0b"));
    assert!(html.contains("#22d3ee"));
}

#[test]
fn test_portrait_dimensions_flow_into_stylesheet() {
    let html = build_graphic(r#"{"components": []}"#, Dimensions::PORTRAIT).unwrap();
    assert!(html.contains("width: 1080px"));
    assert!(html.contains("height: 1350px"));
}

#[test]
fn test_infographic_items_are_numbered_in_order() {
    let html = build_graphic(
        r#"{"components": [{"type": "infographic_card", "content": {
            "title": "Plan",
            "items": ["Research", "Draft", "Publish"]
        }}]}"#,
        Dimensions::default(),
    )
    .unwrap();
    let pos1 = html.find(r#"<div class="item-number">1</div>"#).unwrap();
    let pos3 = html.find(r#"<div class="item-number">3</div>"#).unwrap();
    assert!(pos1 < pos3);
    assert!(html.contains("Research"));
    assert!(html.contains("Publish"));
}

#[test]
fn test_positioned_logo_unrecognized_corner_falls_back() {
    let html = build_graphic(
        r#"{"components": [{"type": "positioned_logo", "content": {
            "text": "acme", "position": "center-stage"
        }}]}"#,
        Dimensions::default(),
    )
    .unwrap();
    assert!(html.contains("positioned-logo bottom-right"));
}

#[test]
fn test_progress_bar_values_clamp_into_range() {
    let html = build_graphic(
        r#"{"components": [
            {"type": "progress_bar", "content": {"label": "Over", "value": 150}},
            {"type": "progress_bar", "content": {"label": "Under", "value": -3}}
        ]}"#,
        Dimensions::default(),
    )
    .unwrap();
    assert!(html.contains("width: 100%"));
    assert!(html.contains("width: 0%"));
    assert!(!html.contains("width: 150%"));
}

#[test]
fn test_components_render_in_config_order() {
    let html = build_graphic(
        r#"{"components": [
            {"type": "badge", "content": {"text": "first"}},
            {"type": "subtitle", "content": {"text": "second"}}
        ]}"#,
        Dimensions::default(),
    )
    .unwrap();
    assert!(html.find("first").unwrap() < html.find("second").unwrap());
}

#[test]
fn test_parsed_config_reusable_across_dimensions() {
    let config = GraphicsConfig::from_json(
        r#"{"components": [{"type": "metric_card", "content": {"value": "3x", "label": "Faster"}}]}"#,
    )
    .unwrap();
    let builder = GraphicsBuilder::new();

    let square = builder.build(&config, Dimensions::SQUARE);
    let wide = builder.build(&config, Dimensions::LANDSCAPE);
    assert!(square.contains("3x"));
    assert!(wide.contains("3x"));
    assert!(square.contains("width: 1080px"));
    assert!(wide.contains("width: 1920px"));
}
