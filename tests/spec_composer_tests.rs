use serde_json::json;
use vegalite_rs::ChartError;
use vegalite_rs::core::{
    FALLBACK_BG_COLOR, FALLBACK_BODY_TEXT_COLOR, Theme, VisualSpec, compose,
};

fn dark_theme() -> Theme {
    Theme::new("#0e1117", "#fafafa")
}

const BAR_SPEC: &str = r#"{
    "data": {"values": [{"a": "A", "b": 28}, {"a": "B", "b": 55}]},
    "mark": "bar",
    "encoding": {
        "x": {"field": "a", "type": "ordinal"},
        "y": {"field": "b", "type": "quantitative"}
    }
}"#;

#[test]
fn pulls_default_config_values_from_theme() {
    let spec = compose(BAR_SPEC, &dark_theme(), &VisualSpec::default()).expect("compose");

    let config = spec.config().expect("merged config present");
    assert_eq!(config["background"], json!("#0e1117"));
    assert_eq!(config["axis"]["labelColor"], json!("#fafafa"));
    assert_eq!(config["axis"]["titleColor"], json!("#fafafa"));
    assert_eq!(config["legend"]["labelColor"], json!("#fafafa"));
    assert_eq!(config["title"]["color"], json!("#fafafa"));
}

#[test]
fn user_specified_config_takes_priority() {
    let raw = r#"{
        "mark": "bar",
        "config": {"background": "purple", "axis": {"labelColor": "blue"}}
    }"#;
    let spec = compose(raw, &dark_theme(), &VisualSpec::default()).expect("compose");

    let config = spec.config().expect("merged config present");
    assert_eq!(config["background"], json!("purple"));
    assert_eq!(config["axis"]["labelColor"], json!("blue"));
    // Things not overwritten by the user still fall back to the theme default.
    assert_eq!(config["axis"]["titleColor"], json!("#fafafa"));
}

#[test]
fn library_defaults_sit_below_theme_and_user() {
    let library = VisualSpec::from_json_str(
        r#"{"config": {"background": "gray", "axis": {"grid": false, "titleColor": "black"}}}"#,
    )
    .expect("library defaults");
    let raw = r#"{"mark": "line", "config": {"axis": {"labelColor": "blue"}}}"#;

    let spec = compose(raw, &dark_theme(), &library).expect("compose");
    let config = spec.config().expect("merged config present");

    // Theme wins over library for themed keys.
    assert_eq!(config["background"], json!("#0e1117"));
    assert_eq!(config["axis"]["titleColor"], json!("#fafafa"));
    // User wins over both.
    assert_eq!(config["axis"]["labelColor"], json!("blue"));
    // Library keys no upper layer touches survive the merge.
    assert_eq!(config["axis"]["grid"], json!(false));
}

#[test]
fn data_block_passes_through_unchanged() {
    let spec = compose(BAR_SPEC, &dark_theme(), &VisualSpec::default()).expect("compose");
    assert_eq!(
        spec.data(),
        Some(&json!({"values": [{"a": "A", "b": 28}, {"a": "B", "b": 55}]}))
    );
    assert_eq!(spec.as_value()["mark"], json!("bar"));
}

#[test]
fn malformed_spec_is_a_fatal_parse_error() {
    let err = compose("{not json", &dark_theme(), &VisualSpec::default())
        .expect_err("malformed spec must fail");
    assert!(matches!(err, ChartError::InvalidSpecFormat(_)));
}

#[test]
fn non_object_spec_root_is_rejected() {
    let err = compose("[1, 2, 3]", &dark_theme(), &VisualSpec::default())
        .expect_err("array root must fail");
    assert!(matches!(err, ChartError::InvalidSpecFormat(_)));
}

#[test]
fn compose_is_idempotent_for_identical_inputs() {
    let theme = dark_theme();
    let library = VisualSpec::from_json_str(r#"{"config": {"view": {"stroke": null}}}"#)
        .expect("library defaults");
    let first = compose(BAR_SPEC, &theme, &library).expect("compose");
    let second = compose(BAR_SPEC, &theme, &library).expect("compose");
    assert_eq!(first, second);
}

#[test]
fn missing_theme_tokens_fall_back_to_built_in_defaults() {
    let spec = compose(BAR_SPEC, &Theme::default(), &VisualSpec::default()).expect("compose");
    let config = spec.config().expect("merged config present");
    assert_eq!(config["background"], json!(FALLBACK_BG_COLOR));
    assert_eq!(config["axis"]["labelColor"], json!(FALLBACK_BODY_TEXT_COLOR));
}

#[test]
fn theme_round_trips_through_serde() {
    let parsed: Theme = serde_json::from_str(
        r##"{"colors": {"bg_color": "#0e1117", "body_text": "#fafafa"}}"##,
    )
    .expect("parse theme");
    assert_eq!(parsed, dark_theme());
    assert_eq!(parsed.bg_color(), "#0e1117");
    assert_eq!(parsed.body_text_color(), "#fafafa");
}

#[test]
fn user_scalar_override_replaces_object_default() {
    // A user may flatten a group the theme expresses as an object; the user
    // layer still wins wholesale at that key.
    let raw = r#"{"config": {"axis": null}}"#;
    let spec = compose(raw, &dark_theme(), &VisualSpec::default()).expect("compose");
    let config = spec.config().expect("merged config present");
    assert_eq!(config["axis"], json!(null));
    // Sibling groups are untouched.
    assert_eq!(config["legend"]["labelColor"], json!("#fafafa"));
}
