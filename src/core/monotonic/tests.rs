use super::*;
use approx::assert_relative_eq;

fn coefficients(a: f32, b: f32, c: f32) -> DerivativeCoefficients {
    DerivativeCoefficients { a, b, c }
}

// ── Koeffizienten ──

#[test]
fn test_coefficients_from_x_coordinates() {
    let coeffs = DerivativeCoefficients::from_x_coordinates(-0.5, -0.2, 0.2, 0.5);
    assert_relative_eq!(coeffs.a, -0.6, epsilon = 1e-5);
    assert_relative_eq!(coeffs.b, 0.6, epsilon = 1e-5);
    assert_relative_eq!(coeffs.c, 0.9, epsilon = 1e-5);
    assert_relative_eq!(coeffs.discriminant(), 2.52, epsilon = 1e-4);
}

#[test]
fn test_derivative_eval_at_bounds() {
    let coeffs = coefficients(2.0, -3.0, 1.0);
    assert_relative_eq!(coeffs.eval(0.0), 1.0);
    assert_relative_eq!(coeffs.eval(1.0), 0.0);
    assert_relative_eq!(coeffs.eval(0.5), 0.0);
}

// ── a == 0 ──

#[test]
fn test_linear_derivative_is_always_invalid() {
    // x'(t) = t + 1 wäre überall positiv, bleibt aber ungültig (bekannte Lücke)
    let report = classify(coefficients(0.0, 1.0, 1.0));
    assert_eq!(report.branch, ClassificationBranch::LinearDerivative);
    assert!(!report.is_valid());
}

#[test]
fn test_all_zero_coefficients_do_not_panic() {
    let report = classify(coefficients(0.0, 0.0, 0.0));
    assert_eq!(report.branch, ClassificationBranch::LinearDerivative);
    assert!(!report.is_valid());
}

// ── Δ < 0 ──

#[test]
fn test_no_real_roots_upward_is_valid() {
    let report = classify(coefficients(1.0, 0.0, 1.0));
    assert!(matches!(
        report.branch,
        ClassificationBranch::NoRealRoots { discriminant } if discriminant < 0.0
    ));
    assert!(report.opens_upward());
    assert!(report.is_valid());
}

#[test]
fn test_no_real_roots_downward_is_invalid() {
    let report = classify(coefficients(-1.0, 0.0, -1.0));
    assert!(matches!(
        report.branch,
        ClassificationBranch::NoRealRoots { .. }
    ));
    assert!(!report.is_valid());
}

// ── Δ > 0, a > 0 ──

#[test]
fn test_upward_roots_beyond_one_is_valid() {
    // (t - 2)(t - 4)
    let report = classify(coefficients(1.0, -6.0, 8.0));
    let ClassificationBranch::TwoRoots { root1, root2, .. } = report.branch else {
        panic!("Zwei Nullstellen erwartet, erhalten: {:?}", report.branch);
    };
    assert_relative_eq!(root1, 2.0, epsilon = 1e-5);
    assert_relative_eq!(root2, 4.0, epsilon = 1e-5);
    assert!(report.is_valid());
}

#[test]
fn test_upward_roots_below_zero_is_valid() {
    // (t + 1)(t + 3)
    let report = classify(coefficients(1.0, 4.0, 3.0));
    assert!(report.is_valid());
}

#[test]
fn test_upward_roots_inside_unit_interval_is_invalid() {
    // (t - 0.25)(t - 0.75)
    let report = classify(coefficients(1.0, -1.0, 0.1875));
    let ClassificationBranch::TwoRoots { root1, root2, .. } = report.branch else {
        panic!("Zwei Nullstellen erwartet, erhalten: {:?}", report.branch);
    };
    assert_relative_eq!(root1, 0.25, epsilon = 1e-5);
    assert_relative_eq!(root2, 0.75, epsilon = 1e-5);
    assert!(!report.is_valid());
}

#[test]
fn test_upward_root_touching_zero_is_valid() {
    // t·(t + 1): Nullstellen -1 und 0, negativ nur auf (-1, 0)
    let report = classify(coefficients(1.0, 1.0, 0.0));
    assert!(report.is_valid());
}

// ── Δ > 0, a < 0 ──

#[test]
fn test_downward_roots_enclosing_unit_interval_is_valid() {
    // -(t + 1)(t - 2)
    let report = classify(coefficients(-1.0, 1.0, 2.0));
    let ClassificationBranch::TwoRoots { root1, root2, .. } = report.branch else {
        panic!("Zwei Nullstellen erwartet, erhalten: {:?}", report.branch);
    };
    assert_relative_eq!(root1, -1.0, epsilon = 1e-5);
    assert_relative_eq!(root2, 2.0, epsilon = 1e-5);
    assert!(report.is_valid());
}

#[test]
fn test_downward_roots_inside_unit_interval_is_invalid() {
    // -(t + 0.5)(t - 0.5)
    let report = classify(coefficients(-1.0, 0.0, 0.25));
    assert!(!report.is_valid());
}

#[test]
fn test_roots_are_ordered_for_both_signs() {
    for coeffs in [coefficients(1.0, -6.0, 8.0), coefficients(-1.0, 1.0, 2.0)] {
        if let ClassificationBranch::TwoRoots { root1, root2, .. } = classify(coeffs).branch {
            assert!(root1 <= root2, "root1 {root1} > root2 {root2}");
        } else {
            panic!("Zwei Nullstellen erwartet");
        }
    }
}

// ── Δ == 0 ──

#[test]
fn test_double_root_is_valid_for_upward_parabola() {
    // 3·(2t - 1)²
    let report = classify(coefficients(12.0, -12.0, 3.0));
    assert_eq!(report.branch, ClassificationBranch::DoubleRoot);
    assert!(report.is_valid());
}

#[test]
fn test_double_root_is_valid_even_for_downward_parabola() {
    // -3·(2t - 1)² ist überall <= 0, gilt aber als gültig (bekannte Lücke)
    let report = classify(coefficients(-12.0, 12.0, -3.0));
    assert_eq!(report.branch, ClassificationBranch::DoubleRoot);
    assert!(report.is_valid());
}
