//! Centered harmonic ordering of Fourier terms.
//!
//! Term `i` of a curve rotates at frequency `n(i)`, where
//! `n(0), n(1), n(2), ... = 0, 1, -1, 2, -2, 3, -3, ...`.
//! Truncating a term list therefore always drops the fastest rotations first.

/// Lazy iterator over the centered frequency sequence.
///
/// ```
/// # use epicycles::frequency::FrequencyOrder;
/// let first: Vec<i64> = FrequencyOrder::new().take(5).collect();
/// assert_eq!(first, vec![0, 1, -1, 2, -2]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct FrequencyOrder {
    index: u64,
    current: i64,
}

impl FrequencyOrder {
    pub const fn new() -> Self {
        Self { index: 0, current: 0 }
    }
}

impl Iterator for FrequencyOrder {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.current;
        if self.index % 2 == 0 {
            self.current += self.index as i64 + 1;
        } else {
            self.current = -self.current;
        }
        self.index += 1;
        Some(n)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Frequency of the term at `index`, without walking the sequence.
#[inline]
pub const fn frequency_at(index: usize) -> i64 {
    let half = index.div_ceil(2) as i64;
    if index % 2 == 0 { -half } else { half }
}
