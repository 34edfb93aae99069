//! Frame-to-frame stitching of the traced path.

use crate::float_types::Real;
use nalgebra::Point2;

/// Last drawn screen-space tip of every curve.
///
/// One slot per curve, indexed by the curve's input position. A slot is
/// `None` until the first frame after initialization or after [`clear`](Self::clear).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TraceState {
    slots: Vec<Option<Point2<Real>>>,
}

impl TraceState {
    pub fn new(curve_count: usize) -> Self {
        Self {
            slots: vec![None; curve_count],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    pub fn get(&self, curve: usize) -> Option<Point2<Real>> {
        self.slots.get(curve).copied().flatten()
    }

    /// Records `tip` for `curve` and returns the segment to append to the
    /// trace, if the curve had a previous tip.
    pub fn advance(&mut self, curve: usize, tip: Point2<Real>) -> Option<(Point2<Real>, Point2<Real>)> {
        let slot = self.slots.get_mut(curve)?;
        let segment = slot.map(|previous| (previous, tip));
        *slot = Some(tip);
        segment
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }

    pub fn is_clear(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}
