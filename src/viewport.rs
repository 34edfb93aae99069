//! Fitting input coordinates into the drawing surface.

use crate::errors::EpicycleError;
use crate::float_types::Real;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Extent of the input curves, as reported by the coefficient source.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: [Real; 2],
    pub y: [Real; 2],
}

impl Bounds {
    pub const fn new(x: [Real; 2], y: [Real; 2]) -> Self {
        Self { x, y }
    }

    /// Upper limits must be finite and strictly positive; the scale divides by them.
    pub fn validate(&self) -> Result<(), EpicycleError> {
        let (x_max, y_max) = (self.x[1], self.y[1]);
        if x_max.is_finite() && y_max.is_finite() && x_max > 0.0 && y_max > 0.0 {
            Ok(())
        } else {
            Err(EpicycleError::InvalidBounds { x_max, y_max })
        }
    }
}

/// Pixel size of both drawing layers.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: Real,
    pub height: Real,
}

impl Viewport {
    pub const fn new(width: Real, height: Real) -> Self {
        Self { width, height }
    }

    pub fn validate(&self) -> Result<(), EpicycleError> {
        let Self { width, height } = *self;
        if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
            Ok(())
        } else {
            Err(EpicycleError::InvalidViewport { width, height })
        }
    }

    /// Cartesian (y up) to screen (y down). Only y is flipped; x is shared.
    #[inline]
    pub fn to_screen(&self, p: Point2<Real>) -> Point2<Real> {
        Point2::new(p.x, self.height - p.y)
    }
}

/// Uniform scale mapping `bounds` into `width x height`, shrunk by `margin_factor`.
///
/// ```
/// # use epicycles::viewport::{Bounds, compute_scale};
/// let bounds = Bounds::new([0.0, 100.0], [0.0, 50.0]);
/// let scale = compute_scale(&bounds, 900.0, 900.0, 0.9).unwrap();
/// assert!((scale - 8.1).abs() < 1e-9);
/// ```
pub fn compute_scale(
    bounds: &Bounds,
    width: Real,
    height: Real,
    margin_factor: Real,
) -> Result<Real, EpicycleError> {
    bounds.validate()?;
    Viewport::new(width, height).validate()?;
    if !(margin_factor > 0.0 && margin_factor <= 1.0) {
        return Err(EpicycleError::InvalidMargin(margin_factor));
    }
    let x_ratio = width / bounds.x[1];
    let y_ratio = height / bounds.y[1];
    Ok(x_ratio.min(y_ratio) * margin_factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_the_tighter_axis() {
        let bounds = Bounds::new([0.0, 10.0], [0.0, 40.0]);
        let scale = compute_scale(&bounds, 200.0, 200.0, 1.0).unwrap();
        assert_eq!(scale, 5.0);
    }

    #[test]
    fn rejects_degenerate_bounds() {
        let bounds = Bounds::new([0.0, 0.0], [0.0, 10.0]);
        assert_eq!(
            compute_scale(&bounds, 100.0, 100.0, 0.9),
            Err(EpicycleError::InvalidBounds { x_max: 0.0, y_max: 10.0 })
        );
        let bounds = Bounds::new([0.0, 10.0], [0.0, Real::NAN]);
        assert!(matches!(
            compute_scale(&bounds, 100.0, 100.0, 0.9),
            Err(EpicycleError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn rejects_bad_margin_and_viewport() {
        let bounds = Bounds::new([0.0, 10.0], [0.0, 10.0]);
        assert_eq!(
            compute_scale(&bounds, 100.0, 100.0, 0.0),
            Err(EpicycleError::InvalidMargin(0.0))
        );
        assert_eq!(
            compute_scale(&bounds, 100.0, 100.0, 1.5),
            Err(EpicycleError::InvalidMargin(1.5))
        );
        assert!(matches!(
            compute_scale(&bounds, -1.0, 100.0, 1.0),
            Err(EpicycleError::InvalidViewport { .. })
        ));
    }

    #[test]
    fn screen_flip() {
        let viewport = Viewport::new(300.0, 200.0);
        assert_eq!(viewport.to_screen(Point2::new(10.0, 0.0)), Point2::new(10.0, 200.0));
        assert_eq!(viewport.to_screen(Point2::new(10.0, 50.0)), Point2::new(10.0, 150.0));
    }
}
