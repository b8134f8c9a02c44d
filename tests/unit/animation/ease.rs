use super::*;

const ALL: [Ease; 3] = [Ease::Linear, Ease::InOutQuad, Ease::InOutCubic];

#[test]
fn endpoints_are_exact() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
        assert_eq!(ease.apply(-2.0), 0.0);
        assert_eq!(ease.apply(7.0), 1.0);
    }
}

#[test]
fn symmetric_curves_hit_half_at_midpoint() {
    for ease in ALL {
        assert!((ease.apply(0.5) - 0.5).abs() < 1e-12);
    }
}

#[test]
fn in_out_quad_matches_piecewise_formula() {
    assert!((Ease::InOutQuad.apply(0.25) - 0.125).abs() < 1e-12);
    assert!((Ease::InOutQuad.apply(0.75) - 0.875).abs() < 1e-12);
}

#[test]
fn monotonic_spot_check() {
    for ease in ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b && b < c);
    }
}
