use crate::MembershipFunction;

#[test]
fn test_triangular_anchor_points() {
    let mf = MembershipFunction::triangular(0.0, 5.0, 10.0);

    assert_eq!(mf.fuzzify(0.0), 0.0);
    assert_eq!(mf.fuzzify(5.0), 1.0);
    assert_eq!(mf.fuzzify(10.0), 0.0);
    assert_eq!(mf.fuzzify(2.5), 0.5);
    assert_eq!(mf.fuzzify(7.5), 0.5);
}

#[test]
fn test_triangular_outside_support_is_zero() {
    let mf = MembershipFunction::triangular(0.0, 5.0, 10.0);

    assert_eq!(mf.fuzzify(-1.0), 0.0);
    assert_eq!(mf.fuzzify(11.0), 0.0);
}

#[test]
fn test_triangular_left_shoulder() {
    // a == b: the peak check runs before the rising branch, so the
    // degenerate edge never divides by zero.
    let mf = MembershipFunction::triangular(0.0, 0.0, 5.0);

    assert_eq!(mf.fuzzify(0.0), 1.0);
    assert_eq!(mf.fuzzify(2.5), 0.5);
    assert_eq!(mf.fuzzify(5.0), 0.0);
    assert_eq!(mf.fuzzify(-1.0), 0.0);
}

#[test]
fn test_triangular_right_shoulder() {
    let mf = MembershipFunction::triangular(5.0, 10.0, 10.0);

    assert_eq!(mf.fuzzify(10.0), 1.0);
    assert_eq!(mf.fuzzify(7.5), 0.5);
    assert_eq!(mf.fuzzify(5.0), 0.0);
    assert_eq!(mf.fuzzify(11.0), 0.0);
}

#[test]
fn test_trapezoidal_plateau() {
    let mf = MembershipFunction::trapezoidal(0.0, 2.0, 8.0, 10.0);

    assert_eq!(mf.fuzzify(2.0), 1.0);
    assert_eq!(mf.fuzzify(5.0), 1.0);
    assert_eq!(mf.fuzzify(8.0), 1.0);
}

#[test]
fn test_trapezoidal_slopes_and_feet() {
    let mf = MembershipFunction::trapezoidal(0.0, 2.0, 8.0, 10.0);

    assert_eq!(mf.fuzzify(0.0), 0.0);
    assert_eq!(mf.fuzzify(1.0), 0.5);
    assert_eq!(mf.fuzzify(9.0), 0.5);
    assert_eq!(mf.fuzzify(10.0), 0.0);
    assert_eq!(mf.fuzzify(-1.0), 0.0);
    assert_eq!(mf.fuzzify(11.0), 0.0);
}

#[test]
fn test_trapezoidal_degenerate_shoulders() {
    // b == a and d == c: both sloping branches have empty guards, the
    // plateau and the outer zeros cover everything.
    let mf = MembershipFunction::trapezoidal(0.0, 0.0, 5.0, 5.0);

    assert_eq!(mf.fuzzify(0.0), 1.0);
    assert_eq!(mf.fuzzify(5.0), 1.0);
    assert_eq!(mf.fuzzify(-0.5), 0.0);
    assert_eq!(mf.fuzzify(5.5), 0.0);
}

#[test]
fn test_rectangular_band_is_a_single_point() {
    // Membership is 1.0 only at exactly `start`; `end` does not widen the
    // band.
    let mf = MembershipFunction::rectangular(2.0, 6.0);

    assert_eq!(mf.fuzzify(2.0), 1.0);
    assert_eq!(mf.fuzzify(4.0), 0.0);
    assert_eq!(mf.fuzzify(6.0), 0.0);
    assert_eq!(mf.fuzzify(1.9), 0.0);
}

#[test]
fn test_membership_function_serialization() {
    let mf = MembershipFunction::triangular(0.0, 5.0, 10.0);

    let json = serde_json::to_string(&mf).unwrap();
    let back: MembershipFunction = serde_json::from_str(&json).unwrap();

    assert_eq!(back, mf);
    assert_eq!(back.fuzzify(5.0), 1.0);
}
