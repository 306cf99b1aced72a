use super::*;

#[test]
fn css_text_matches_inline_style_syntax() {
    assert_eq!(
        StyleValue::scalar(StyleProperty::Transform, 12.5).to_css(),
        "translateY(12.5px)"
    );
    assert_eq!(
        StyleValue::Transform(Vec2::new(3.0, -4.0)).to_css(),
        "translate(3px, -4px)"
    );
    assert_eq!(StyleValue::Opacity(0.6).to_css(), "0.6");
    assert_eq!(StyleValue::MarginBottom(-37.5).to_css(), "-37.5px");
    assert_eq!(StyleValue::MarginTop(-0.0).to_css(), "0px");
}

#[test]
fn scalar_values_report_their_property() {
    for prop in [
        StyleProperty::Transform,
        StyleProperty::Opacity,
        StyleProperty::MarginTop,
        StyleProperty::MarginBottom,
    ] {
        assert_eq!(StyleValue::scalar(prop, 1.0).property(), prop);
    }
    assert_eq!(StyleProperty::MarginBottom.css_name(), "margin-bottom");
}

#[test]
fn non_finite_values_are_detected() {
    assert!(!StyleValue::Opacity(f64::NAN).is_finite());
    assert!(!StyleValue::scalar(StyleProperty::Transform, f64::INFINITY).is_finite());
    assert!(StyleValue::MarginTop(0.0).is_finite());
}

#[test]
fn serde_shape_is_tagged() {
    let v = serde_json::to_value(StyleValue::Opacity(0.4)).unwrap();
    assert_eq!(v, serde_json::json!({ "property": "opacity", "value": 0.4 }));
}
