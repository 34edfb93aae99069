//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use epicycles::{
    EngineConfig, EpicycleEngine, RecordingSurface,
    float_types::Real,
    term::Coefficient,
    viewport::{Bounds, Viewport},
};
use nalgebra::Point2;

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

pub fn approx_point(a: Point2<Real>, b: Point2<Real>, eps: Real) -> bool {
    (a - b).norm() < eps
}

/// Builds one curve from `[re, im]` pairs.
pub fn curve(coeffs: &[[Real; 2]]) -> Vec<Coefficient> {
    coeffs.iter().copied().map(Coefficient::from).collect()
}

/// Engine on a 100x100 viewport whose unit bounds map to scale 100.
pub fn unit_engine(curves: Vec<Vec<Coefficient>>) -> EpicycleEngine {
    EpicycleEngine::initialize(
        curves,
        Bounds::new([0.0, 1.0], [0.0, 1.0]),
        Viewport::new(100.0, 100.0),
        EngineConfig::default().with_margin_factor(1.0),
    )
    .expect("valid unit engine")
}

pub fn surfaces() -> (RecordingSurface, RecordingSurface) {
    (RecordingSurface::new(), RecordingSurface::new())
}
