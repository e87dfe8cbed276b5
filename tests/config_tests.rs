use frieze::TimelineError;
use frieze::api::TimelineEditor;
use frieze::core::TimelineConfig;
use frieze::render::NullRenderer;

#[test]
fn default_config_is_valid() {
    let config = TimelineConfig::default().validate().expect("valid default");

    assert_eq!((config.start_year, config.end_year, config.scale), (1400, 2000, 50));
    assert_eq!(config.pages_h, 1);
    assert_eq!(config.pages_v, 1);
}

#[test]
fn end_before_start_is_degenerate() {
    let result = TimelineConfig::new(2000, 1400, 50).validate();
    assert!(matches!(result, Err(TimelineError::DegenerateRange { .. })));
}

#[test]
fn equal_years_are_degenerate() {
    let result = TimelineConfig::new(1500, 1500, 50).validate();
    assert!(matches!(result, Err(TimelineError::DegenerateRange { .. })));
}

#[test]
fn non_positive_scale_is_degenerate() {
    for scale in [0, -10] {
        let result = TimelineConfig::new(1400, 2000, scale).validate();
        assert!(matches!(
            result,
            Err(TimelineError::DegenerateRange { scale: s, .. }) if s == scale
        ));
    }
}

#[test]
fn zero_page_count_is_rejected() {
    let result = TimelineConfig::default()
        .with_pages(1123.0, 794.0, 0, 1)
        .validate();
    assert!(matches!(result, Err(TimelineError::InvalidData(_))));
}

#[test]
fn canvas_covers_all_pages() {
    let config = TimelineConfig::default().with_pages(1000.0, 700.0, 3, 2);
    let canvas = config.canvas();

    assert_eq!(canvas.width, 3000.0);
    assert_eq!(canvas.height, 1400.0);
}

#[test]
fn json_document_fills_missing_keys_with_defaults() {
    let config =
        TimelineConfig::from_json_str(r#"{ "start_year": -500, "end_year": 200, "scale": 100 }"#)
            .expect("valid document");

    assert_eq!(config.start_year, -500);
    assert_eq!(config.end_year, 200);
    assert_eq!(config.page_width, TimelineConfig::default().page_width);
    assert_eq!(config.timeline_offset_y, 400.0);
}

#[test]
fn json_round_trip_preserves_config() {
    let config = TimelineConfig::new(1800, 2000, 25)
        .with_pages(900.0, 600.0, 2, 3)
        .with_timeline_offset_y(320.0);

    let json = config.to_json_pretty().expect("serialize");
    let parsed = TimelineConfig::from_json_str(&json).expect("parse");

    assert_eq!(parsed, config);
}

#[test]
fn malformed_json_is_a_config_error() {
    let result = TimelineConfig::from_json_str("{ start_year: ");
    assert!(matches!(result, Err(TimelineError::Config(_))));
}

#[test]
fn degenerate_json_document_is_rejected() {
    let result = TimelineConfig::from_json_str(r#"{ "start_year": 2000, "end_year": 1000 }"#);
    assert!(matches!(result, Err(TimelineError::DegenerateRange { .. })));
}

#[test]
fn editor_rejects_degenerate_config_at_construction() {
    let result = TimelineEditor::new(NullRenderer::default(), TimelineConfig::new(1900, 1900, 10));
    assert!(matches!(result, Err(TimelineError::DegenerateRange { .. })));
}

#[test]
fn rejected_config_replacement_keeps_previous_config() {
    let initial = TimelineConfig::new(1800, 2000, 50);
    let mut editor = TimelineEditor::new(NullRenderer::default(), initial).expect("editor init");

    let result = editor.set_config(TimelineConfig::new(1800, 2000, 0));

    assert!(result.is_err());
    assert_eq!(editor.config(), initial);
    assert_eq!(editor.year_scale().year_range(), (1800, 2000));
}

#[test]
fn config_replacement_remaps_years() {
    let mut editor = TimelineEditor::new(
        NullRenderer::default(),
        TimelineConfig::new(1800, 2000, 50).with_pages(1000.0, 800.0, 1, 1),
    )
    .expect("editor init");
    assert_eq!(editor.map_year_to_x(1900.0).expect("map"), 500.0);

    editor
        .set_config(TimelineConfig::new(1900, 2000, 10).with_pages(1000.0, 800.0, 1, 1))
        .expect("replace config");

    assert_eq!(editor.map_year_to_x(1900.0).expect("map"), 0.0);
    assert_eq!(editor.map_x_to_year(1000.0).expect("map"), 2000.0);
}
