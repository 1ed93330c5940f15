//! 대화형 메뉴 입력 해석 테스트.
use std::collections::HashMap;

use fluid_mechanics_toolbox::ui_cli::{
    parse_layer_count, parse_phase_name, parse_question_number, PhaseInput, MAX_LAYERS,
};

#[test]
fn layer_count_within_bounds() {
    assert_eq!(parse_layer_count("3\n"), Some(3));
    assert_eq!(parse_layer_count(" 1 "), Some(1));
    assert_eq!(parse_layer_count(&MAX_LAYERS.to_string()), Some(MAX_LAYERS));
}

#[test]
fn huge_layer_count_is_rejected_not_allocated() {
    assert_eq!(parse_layer_count("18446744073709551615"), None);
    assert_eq!(parse_layer_count("100000000000"), None);
    assert_eq!(parse_layer_count(&(MAX_LAYERS + 1).to_string()), None);
}

#[test]
fn layer_count_rejects_zero_and_garbage() {
    assert_eq!(parse_layer_count("0"), None);
    assert_eq!(parse_layer_count("-2"), None);
    assert_eq!(parse_layer_count("two"), None);
    assert_eq!(parse_layer_count(""), None);
}

#[test]
fn question_number_parses_as_integer() {
    assert_eq!(parse_question_number("4\n"), Some(4));
    assert_eq!(parse_question_number("0"), None);
    assert_eq!(parse_question_number("2.5"), None);
    assert_eq!(parse_question_number("-1"), None);
}

#[test]
fn question_number_above_u32_does_not_saturate() {
    assert_eq!(parse_question_number("4294967296"), None);
    assert_eq!(parse_question_number("99999999999"), None);
    assert_eq!(parse_question_number("4294967295"), Some(u32::MAX));
}

#[test]
fn repeated_phase_name_is_not_overwritten() {
    let mut entered = HashMap::new();
    assert_eq!(parse_phase_name("water\n", &entered), PhaseInput::New("water".to_string()));
    entered.insert("water".to_string(), 0.3);
    assert_eq!(
        parse_phase_name(" water ", &entered),
        PhaseInput::Duplicate("water".to_string())
    );
    assert_eq!(parse_phase_name("oil", &entered), PhaseInput::New("oil".to_string()));
    assert_eq!(parse_phase_name("  \n", &entered), PhaseInput::Done);
    assert_eq!(entered.get("water"), Some(&0.3));
}
