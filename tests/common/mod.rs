//! Shared integrands for the quadrature test suite.
#![allow(dead_code)]

pub fn square(x: f64) -> f64 {
    x * x
}

pub fn cube(x: f64) -> f64 {
    x * x * x
}

pub fn sine(x: f64) -> f64 {
    x.sin()
}

pub fn exponential(x: f64) -> f64 {
    x.exp()
}
