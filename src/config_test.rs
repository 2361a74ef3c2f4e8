#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn defaults() {
    let config = EngineConfig::default();
    assert_eq!(config.animation_speed, 2.0);
    assert_eq!(config.lazy_radius, 12.0);
    assert_eq!(config.brush_radius, 10.0);
    assert_eq!(config.brush_color, "#444");
    assert_eq!(config.catenary_color, "#0a0302");
    assert!(!config.hide_grid);
    assert!(!config.immediate_draw);
    assert!(!config.disabled);
}

#[test]
fn empty_json_is_default() {
    assert_eq!(EngineConfig::from_json("{}").unwrap(), EngineConfig::default());
}

#[test]
fn camel_case_fields_override() {
    let config = EngineConfig::from_json(
        r##"{"animationSpeed": 0.5, "brushColor": "#f00", "immediateDraw": true, "hideGrid": true}"##,
    )
    .unwrap();
    assert_eq!(config.animation_speed, 0.5);
    assert_eq!(config.brush_color, "#f00");
    assert!(config.immediate_draw);
    assert!(config.hide_grid);
    assert_eq!(config.lazy_radius, 12.0);
}

#[test]
fn wrong_type_is_config_error() {
    let err = EngineConfig::from_json(r#"{"brushRadius": "big"}"#).unwrap_err();
    assert!(matches!(err, EngineError::Config(_)));
    assert!(err.to_string().starts_with("invalid config"));
}

#[test]
fn malformed_json_is_config_error() {
    assert!(matches!(EngineConfig::from_json("{"), Err(EngineError::Config(_))));
}

#[test]
fn chain_length_scales_with_pixel_ratio() {
    let config = EngineConfig { lazy_radius: 10.0, device_pixel_ratio: 2.0, ..EngineConfig::default() };
    assert_eq!(config.chain_length(), 20.0);
}
