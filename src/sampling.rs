//! Sampling a whole period of a curve at once.
//!
//! The engine only ever knows the newest trace segment. For export, or to
//! preview what a term count will draw, the full outline can be sampled
//! directly over `t` in `[0, 1)`.

use crate::float_types::{Real, tolerance};
use crate::term::EpicycleTerm;
use nalgebra::{Point2, Vector2};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[inline]
fn tip(terms: &[EpicycleTerm], t: Real) -> Point2<Real> {
    Point2::from(terms.iter().fold(Vector2::zeros(), |sum, term| sum + term.evaluate(t)))
}

/// Cartesian tips of the first `term_count` terms at `samples` evenly spaced
/// times over one period.
///
/// Consecutive points closer than [`tolerance`] are merged, so the result may
/// be shorter than `samples`. The outline is closed implicitly: the last
/// point connects back to the first.
#[cfg(not(feature = "parallel"))]
pub fn sample_outline(terms: &[EpicycleTerm], term_count: usize, samples: usize) -> Vec<Point2<Real>> {
    let terms = &terms[..term_count.min(terms.len())];
    let points: Vec<Point2<Real>> = (0..samples)
        .map(|k| tip(terms, k as Real / samples as Real))
        .collect();
    dedup_close(points)
}

/// Parallel version of `sample_outline`.
#[cfg(feature = "parallel")]
pub fn sample_outline(terms: &[EpicycleTerm], term_count: usize, samples: usize) -> Vec<Point2<Real>> {
    let terms = &terms[..term_count.min(terms.len())];
    let points: Vec<Point2<Real>> = (0..samples)
        .into_par_iter()
        .map(|k| tip(terms, k as Real / samples as Real))
        .collect();
    dedup_close(points)
}

fn dedup_close(mut points: Vec<Point2<Real>>) -> Vec<Point2<Real>> {
    let eps = tolerance();
    points.dedup_by(|b, a| (*b - *a).norm() < eps);
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::{Coefficient, terms_for_curve};

    #[test]
    fn circle_outline() {
        // constant offset plus a unit circle
        let terms = terms_for_curve(&[Coefficient::new(2.0, 2.0), Coefficient::new(1.0, 0.0)]);
        let points = sample_outline(&terms, 2, 64);
        assert_eq!(points.len(), 64);
        for p in &points {
            let r = (p - Point2::new(2.0, 2.0)).norm();
            assert!((r - 1.0).abs() < 1e-9);
        }
        assert!((points[16] - Point2::new(2.0, 3.0)).norm() < 1e-9);
    }

    #[test]
    fn constant_outline_collapses() {
        let terms = terms_for_curve(&[Coefficient::new(2.0, 2.0), Coefficient::new(1.0, 0.0)]);
        let points = sample_outline(&terms, 1, 32);
        assert_eq!(points, vec![Point2::new(2.0, 2.0)]);
    }

    #[test]
    fn empty_inputs() {
        let terms = terms_for_curve(&[Coefficient::new(1.0, 0.0)]);
        assert!(sample_outline(&terms, 1, 0).is_empty());
        assert_eq!(sample_outline(&terms, 0, 3), vec![Point2::origin()]);
    }
}
