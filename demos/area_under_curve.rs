//! Example comparing the fixed-step and adaptive integrators on sin(x).

use quadrature::prelude::*;
use std::f64::consts::PI;

fn main() {
    let f = |x: f64| x.sin();
    let exact = 2.0; // integral of sin over [0, pi]

    let simpson = Simpson::default();
    let fixed = simpson.integrate(&f, 0.0, PI);
    println!(
        "Simpson ({} steps):   {:.10}  (error {:.3e})",
        simpson.step_count(),
        fixed,
        (fixed - exact).abs()
    );

    let adaptive = AdaptiveTrapezoid::builder()
        .accuracy(1e-7)
        .max_iterations(30)
        .build();
    for method in [Method::Trapezoid, Method::MidPoint] {
        let mut adaptive = adaptive.clone();
        adaptive.method = method;
        match adaptive.integrate(&f, 0.0, PI) {
            Ok(estimate) => println!(
                "Adaptive {:?}: {:.10}  (error {:.3e})",
                method,
                estimate,
                (estimate - exact).abs()
            ),
            Err(err) => eprintln!("Adaptive {:?} failed: {}", method, err),
        }
    }
}
