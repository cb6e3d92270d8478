use approx::assert_abs_diff_eq;
use quadrature::prelude::*;

mod common;
use common::{cube, sine, square};

#[test]
fn cubic_polynomials_are_exact() {
    // Simpson's rule is exact up to rounding for polynomials of degree <= 3,
    // independent of the (even, positive) step count.
    for step_count in [2, 10, 100, 1000] {
        let simpson = Simpson::new(step_count);
        let estimate = simpson.integrate(&cube, 0.0, 1.0);
        assert_abs_diff_eq!(estimate, 0.25, epsilon = 1e-9);
    }
}

#[test]
fn smooth_function_converges_at_default_step_count() {
    let simpson = Simpson::default();
    assert_eq!(simpson.step_count(), 100);
    let estimate = simpson.integrate(&sine, 0.0, std::f64::consts::PI);
    assert_abs_diff_eq!(estimate, 2.0, epsilon = 1e-7);
}

#[test]
fn reversed_bounds_negate_exactly() {
    let simpson = Simpson::default();
    let forward = simpson.integrate(&square, 0.0, 2.0);
    let backward = simpson.integrate(&square, 2.0, 0.0);
    // Structural identity, not an approximation: the flipped call runs the
    // same computation and negates it.
    assert_eq!(backward, -forward);
}

#[test]
fn zero_width_interval_is_zero() {
    let simpson = Simpson::default();
    assert_eq!(simpson.integrate(&square, 1.5, 1.5), 0.0);
}

#[test]
fn single_precision_variant_matches() {
    let simpson = Simpson::new(300);
    let estimate = simpson.integrate_f32(&|x: f32| x * x, 0.0, 3.0);
    assert_abs_diff_eq!(estimate, 9.0, epsilon = 1e-3);

    let forward = simpson.integrate_f32(&|x: f32| x * x, 0.0, 3.0);
    let backward = simpson.integrate_f32(&|x: f32| x * x, 3.0, 0.0);
    assert_eq!(backward, -forward);
}

#[test]
fn duplicate_behaves_identically() {
    let original = Simpson::new(50);
    let duplicate = original.clone();
    assert_eq!(duplicate.step_count(), 50);
    assert_eq!(
        original.integrate(&sine, 0.0, 1.0),
        duplicate.integrate(&sine, 0.0, 1.0)
    );
}
