// File: crates/scatter-core/src/axis.rs
// Summary: Tick layout helpers for axis rendering.

use crate::scale::LinearScale;

/// One axis tick: the domain value and its pixel position along the axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub position: f32,
}

/// Evenly spaced tick values across the scale's current domain.
///
/// Computed from the (possibly interpolated) scale each frame, so tick
/// positions morph continuously during a transition.
pub fn ticks(scale: &LinearScale, count: usize) -> Vec<Tick> {
    let (d0, d1) = scale.domain();
    linspace(d0, d1, count)
        .into_iter()
        .map(|value| Tick { value, position: scale.position(value) })
        .collect()
}

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}
