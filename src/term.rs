//! A single rotating vector of the series.

use crate::float_types::{Real, TAU};
use crate::frequency::FrequencyOrder;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Complex Fourier coefficient, stored as `(re, im)`.
///
/// On the wire this is a two element array `[re, im]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[Real; 2]", into = "[Real; 2]")]
pub struct Coefficient {
    pub re: Real,
    pub im: Real,
}

impl Coefficient {
    #[inline]
    pub const fn new(re: Real, im: Real) -> Self {
        Self { re, im }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }
}

impl From<[Real; 2]> for Coefficient {
    fn from([re, im]: [Real; 2]) -> Self {
        Self { re, im }
    }
}

impl From<Coefficient> for [Real; 2] {
    fn from(c: Coefficient) -> Self {
        [c.re, c.im]
    }
}

/// One epicycle: a coefficient spinning at an integer frequency.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EpicycleTerm {
    coefficient: Coefficient,
    frequency: i64,
    magnitude: Real,
}

impl EpicycleTerm {
    pub fn new(coefficient: Coefficient, frequency: i64) -> Self {
        let mut term = Self {
            coefficient,
            frequency,
            magnitude: 0.0,
        };
        // rotation preserves length, so t = 0 is as good as any
        term.magnitude = term.evaluate(0.0).norm();
        term
    }

    #[inline]
    pub const fn coefficient(&self) -> Coefficient {
        self.coefficient
    }

    #[inline]
    pub const fn frequency(&self) -> i64 {
        self.frequency
    }

    #[inline]
    pub const fn magnitude(&self) -> Real {
        self.magnitude
    }

    /// Value of `c * e^(i 2π n t)` as a 2D vector.
    pub fn evaluate(&self, t: Real) -> Vector2<Real> {
        let theta = TAU * self.frequency as Real * t;
        let (sin, cos) = theta.sin_cos();
        let Coefficient { re, im } = self.coefficient;
        Vector2::new(re * cos - im * sin, im * cos + re * sin)
    }
}

/// Pairs each coefficient of one curve with its centered frequency.
pub fn terms_for_curve(coefficients: &[Coefficient]) -> Vec<EpicycleTerm> {
    coefficients
        .iter()
        .zip(FrequencyOrder::new())
        .map(|(c, n)| EpicycleTerm::new(*c, n))
        .collect()
}
