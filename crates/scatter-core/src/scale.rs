// File: crates/scatter-core/src/scale.rs
// Summary: Linear value-to-pixel scales with padded domains built from record extents.

use crate::record::{Record, XField, YField};

/// Fractional padding applied to the data extent: domain = [min*0.8, max*1.2].
pub const DOMAIN_PAD_LO: f64 = 0.8;
pub const DOMAIN_PAD_HI: f64 = 1.2;

/// Monotonic linear mapping from a value domain to a pixel range.
///
/// Pure data; recomputed on selection change or rebuild, never mutated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f32,
    r1: f32,
}

impl LinearScale {
    pub fn new(d0: f64, d1: f64, r0: f32, r1: f32) -> Self {
        Self { d0, d1, r0, r1 }
    }

    /// Map a value into pixel space. A zero-width domain yields a constant
    /// output (epsilon span guard); NaN input yields NaN output.
    #[inline]
    pub fn position(&self, v: f64) -> f32 {
        let span = self.d1 - self.d0;
        let span = if span.abs() < 1e-12 { 1e-12 } else { span };
        self.r0 + (((v - self.d0) / span) as f32) * (self.r1 - self.r0)
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.d0, self.d1)
    }

    pub fn range(&self) -> (f32, f32) {
        (self.r0, self.r1)
    }
}

/// Build the X scale for `field`: domain [min*0.8, max*1.2] → [0, extent].
pub fn x_scale(records: &[Record], field: XField, extent: f32) -> LinearScale {
    let (min, max) = extent_of(records.iter().map(|r| r.x_value(field)));
    LinearScale::new(min * DOMAIN_PAD_LO, max * DOMAIN_PAD_HI, 0.0, extent)
}

/// Build the Y scale for `field`: domain [min*0.8, max*1.2] → [extent, 0]
/// (inverted so larger values plot higher).
pub fn y_scale(records: &[Record], field: YField, extent: f32) -> LinearScale {
    let (min, max) = extent_of(records.iter().map(|r| r.y_value(field)));
    LinearScale::new(min * DOMAIN_PAD_LO, max * DOMAIN_PAD_HI, extent, 0.0)
}

/// Min/max over the values. NaN values drop out of f64::min/f64::max folds.
fn extent_of(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }
    (min, max)
}
