use super::*;
use crate::core::ClassificationBranch;
use approx::assert_relative_eq;
use glam::Vec2;

// ── Auswertung ──

#[test]
fn test_evaluate_hits_anchors_exactly() {
    let curve = CubicBezier::new([
        Vec2::new(-0.7, 0.3),
        Vec2::new(0.13, 0.91),
        Vec2::new(0.42, -0.66),
        Vec2::new(0.81, 0.17),
    ]);

    assert_eq!(curve.evaluate(0.0), curve.point(ControlPoint::Start));
    assert_eq!(curve.evaluate(1.0), curve.point(ControlPoint::End));
}

#[test]
fn test_evaluate_midpoint_of_initial_curve() {
    // B(0.5) = (P0 + 3·P1 + 3·P2 + P3) / 8
    let curve = CubicBezier::initial();
    let mid = curve.evaluate(0.5);
    assert_relative_eq!(mid.x, 0.0, epsilon = 1e-6);
    assert_relative_eq!(mid.y, 0.25, epsilon = 1e-6);
}

#[test]
fn test_evaluate_is_not_clamped() {
    let curve = CubicBezier::initial();
    let outside = curve.evaluate(1.5);
    assert!(outside.x > curve.point(ControlPoint::End).x);
}

// ── Klassifikation über Kontrollpunkte ──

#[test]
fn test_initial_curve_coefficients_and_verdict() {
    let curve = CubicBezier::initial();
    let report = curve.classify_monotonic();

    assert_relative_eq!(report.coefficients.a, -0.6, epsilon = 1e-5);
    assert_relative_eq!(report.coefficients.b, 0.6, epsilon = 1e-5);
    assert_relative_eq!(report.coefficients.c, 0.9, epsilon = 1e-5);

    let ClassificationBranch::TwoRoots {
        discriminant,
        root1,
        root2,
    } = report.branch
    else {
        panic!("Zwei Nullstellen erwartet, erhalten: {:?}", report.branch);
    };
    assert_relative_eq!(discriminant, 2.52, epsilon = 1e-4);
    assert_relative_eq!(root1, -0.822_876, epsilon = 1e-4);
    assert_relative_eq!(root2, 1.822_876, epsilon = 1e-4);

    // x-Koordinaten -0.5 < -0.2 < 0.2 < 0.5 → monoton steigend
    assert!(report.is_valid());
    assert!(curve.is_valid_function());
}

#[test]
fn test_constant_x_line_is_invalid_without_panic() {
    let curve = CubicBezier::new([
        Vec2::new(0.5, -0.5),
        Vec2::new(0.5, -0.2),
        Vec2::new(0.5, 0.2),
        Vec2::new(0.5, 0.5),
    ]);
    let report = curve.classify_monotonic();

    assert_eq!(report.coefficients.a, 0.0);
    assert_eq!(report.coefficients.b, 0.0);
    assert_eq!(report.coefficients.c, 0.0);
    assert_eq!(report.branch, ClassificationBranch::LinearDerivative);
    assert!(!report.is_valid());
}

#[test]
fn test_strictly_increasing_x_is_valid() {
    let curve = CubicBezier::new([
        Vec2::new(0.0, 0.0),
        Vec2::new(0.1, 0.8),
        Vec2::new(0.5, -0.4),
        Vec2::new(1.0, 0.2),
    ]);
    assert!(curve.is_valid_function());
}

#[test]
fn test_handle_pulled_backwards_is_invalid() {
    // StartHandle links vom Start: x(t) fällt zunächst
    let curve = CubicBezier::new([
        Vec2::new(0.0, 0.0),
        Vec2::new(-0.6, 0.5),
        Vec2::new(0.6, 0.5),
        Vec2::new(1.0, 0.0),
    ]);
    assert!(!curve.is_valid_function());
}

#[test]
fn test_s_curve_with_double_root_is_valid() {
    // x'(t) = 3·(2t - 1)² ≥ 0
    let curve = CubicBezier::new([
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(0.0, 1.0),
        Vec2::new(1.0, 1.0),
    ]);
    let report = curve.classify_monotonic();
    assert_eq!(report.branch, ClassificationBranch::DoubleRoot);
    assert!(report.is_valid());
}

// ── Punktzugriff ──

#[test]
fn test_control_point_indices_follow_all_order() {
    for (i, point) in ControlPoint::ALL.into_iter().enumerate() {
        assert_eq!(point.index(), i);
        assert_eq!(curve_point_by_index(i), CubicBezier::initial().point(point));
    }
}

fn curve_point_by_index(i: usize) -> Vec2 {
    CubicBezier::initial().points()[i]
}

#[test]
fn test_coupled_handles() {
    assert_eq!(
        ControlPoint::Start.coupled_handle(),
        Some(ControlPoint::StartHandle)
    );
    assert_eq!(
        ControlPoint::End.coupled_handle(),
        Some(ControlPoint::EndHandle)
    );
    assert_eq!(ControlPoint::StartHandle.coupled_handle(), None);
    assert_eq!(ControlPoint::EndHandle.coupled_handle(), None);
}

#[test]
fn test_translate_point_moves_only_that_point() {
    let mut curve = CubicBezier::initial();
    curve.translate_point(ControlPoint::EndHandle, Vec2::new(0.1, -0.1));

    let points = curve.points();
    assert_eq!(points[0], CubicBezier::INITIAL_POINTS[0]);
    assert_eq!(points[1], CubicBezier::INITIAL_POINTS[1]);
    assert_relative_eq!(points[2].x, 0.3, epsilon = 1e-6);
    assert_relative_eq!(points[2].y, 0.4, epsilon = 1e-6);
    assert_eq!(points[3], CubicBezier::INITIAL_POINTS[3]);
}

// ── Abtastung ──

#[test]
fn test_sample_segments_spans_whole_curve() {
    let curve = CubicBezier::initial();
    let segments = curve.sample_segments(150);

    assert_eq!(segments.len(), 150);
    assert_eq!(segments[0].from, curve.point(ControlPoint::Start));
    assert_eq!(
        segments.last().map(|s| s.to),
        Some(curve.point(ControlPoint::End))
    );
    for pair in segments.windows(2) {
        assert_eq!(pair[0].to, pair[1].from);
    }
}

#[test]
fn test_sample_segments_marks_decreasing_parts() {
    let curve = CubicBezier::new([
        Vec2::new(0.0, 0.0),
        Vec2::new(-0.6, 0.5),
        Vec2::new(0.6, 0.5),
        Vec2::new(1.0, 0.0),
    ]);
    let segments = curve.sample_segments(100);

    assert!(!segments[0].increasing);
    assert!(segments.last().is_some_and(|s| s.increasing));
}

#[test]
fn test_sample_zero_segments_is_empty() {
    assert!(CubicBezier::initial().sample_segments(0).is_empty());
}
