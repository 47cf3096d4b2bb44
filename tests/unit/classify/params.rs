use super::*;

#[test]
fn defaults_carry_stock_patterns() {
    let params = ConvertParams::default();
    assert_eq!(params.save_folder, "assets/ui");
    assert_eq!(params.label_pattern, "label_.*");
    assert_eq!(params.button.pattern, ".*button.*");
    assert_eq!(params.button.pressed, ".*pressed");
    assert_eq!(params.button.highlighted, ".*highlighted");
    assert_eq!(params.button.disabled, ".*disabled");
    assert_eq!(params.toggle.pattern, ".*toggle.*");
    assert_eq!(params.toggle.background, ".*background");
    assert_eq!(params.toggle.checkmark, ".*checkmark");
}

#[test]
fn stock_patterns_compile() {
    CompiledPatterns::compile(&ConvertParams::default()).unwrap();
}

#[test]
fn invalid_pattern_is_a_config_error() {
    let mut params = ConvertParams::default();
    params.button.pattern = "(".to_string();

    let err = CompiledPatterns::compile(&params).unwrap_err();
    assert!(matches!(err, ConvertError::Config(_)));
    assert!(err.to_string().contains("button pattern"));
}

#[test]
fn invalid_role_pattern_names_the_role() {
    let mut params = ConvertParams::default();
    params.toggle.checkmark = "[".to_string();

    let err = CompiledPatterns::compile(&params).unwrap_err();
    assert!(err.to_string().contains("toggle checkmark"));
}

#[test]
fn json_round_trip_preserves_params() {
    let mut params = ConvertParams::default();
    params.save_folder = "out/sprites".to_string();
    params.default_font = "NotoSans".to_string();
    params.button.pressed = "down_.*".to_string();

    let json = params.to_json().unwrap();
    let back = ConvertParams::from_json(&json).unwrap();
    assert_eq!(back, params);
}

#[test]
fn omitted_json_fields_fall_back_to_stock() {
    let params = ConvertParams::from_json(r#"{"default_font":"NotoSans"}"#).unwrap();
    assert_eq!(params.default_font, "NotoSans");
    assert_eq!(params.button.pattern, ".*button.*");
    assert_eq!(params.save_folder, "assets/ui");
}

#[test]
fn malformed_json_is_a_config_error() {
    let err = ConvertParams::from_json("{not json").unwrap_err();
    assert!(matches!(err, ConvertError::Config(_)));
}
