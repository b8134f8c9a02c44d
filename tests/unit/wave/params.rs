use serde_json::json;

use super::*;

fn canvas() -> WaveParams {
    WaveParams {
        width: 1440.0,
        height: 320.0,
        intensity: 0.5,
        base_height: 160.0,
        seed: 1,
        position: Position::Bottom,
        shape: Shape::Smooth,
    }
}

#[test]
fn validate_rejects_degenerate_canvas() {
    let mut p = canvas();
    assert!(p.validate().is_ok());

    p.width = 0.0;
    assert!(matches!(p.validate(), Err(WaveError::Validation(_))));

    p.width = 10.0;
    p.height = f64::NAN;
    assert!(p.validate().is_err());

    p.height = f64::INFINITY;
    assert!(p.validate().is_err());
}

#[test]
fn intensity_is_clamped_before_range() {
    let mut p = canvas();
    p.intensity = 4.0;
    assert_eq!(p.clamped_intensity(), 1.0);
    assert!((p.vertical_range() - 320.0 * 0.18 * 2.0).abs() < 1e-9);

    p.intensity = f64::NAN;
    assert_eq!(p.clamped_intensity(), 0.5);
}

#[test]
fn base_height_follows_anchor_and_clamps() {
    assert_eq!(base_height_for(100.0, Position::Bottom), 220.0);
    assert_eq!(base_height_for(100.0, Position::Top), 100.0);
    assert_eq!(base_height_for(10.0, Position::Bottom), 240.0);
    assert_eq!(base_height_for(900.0, Position::Top), 320.0);
    assert_eq!(base_height_for(f64::NAN, Position::Bottom), 160.0);
}

#[test]
fn params_use_camel_case_and_lowercase_enums() {
    let v = serde_json::to_value(canvas()).unwrap();
    assert_eq!(v["baseHeight"], json!(160.0));
    assert_eq!(v["position"], json!("bottom"));
    assert_eq!(v["shape"], json!("smooth"));
    assert_eq!(Position::default(), Position::Bottom);
    assert_eq!(Shape::default(), Shape::Smooth);
}
