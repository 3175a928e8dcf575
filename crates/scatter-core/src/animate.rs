// File: crates/scatter-core/src/animate.rs
// Summary: Time-based scale transitions sampled per frame by the render loop.

use std::time::{Duration, Instant};

use crate::scale::LinearScale;
use crate::types::TRANSITION_MS;

/// Interpolates a scale's domain from a start scale to a target over a fixed
/// duration, cubic in-out eased. Axis ticks and marks both read the
/// interpolated scale, so they animate in parallel.
#[derive(Clone, Copy, Debug)]
pub struct ScaleTransition {
    from: LinearScale,
    to: LinearScale,
    started: Instant,
    duration: Duration,
}

impl ScaleTransition {
    pub fn new(from: LinearScale, to: LinearScale, now: Instant) -> Self {
        Self { from, to, started: now, duration: Duration::from_millis(TRANSITION_MS) }
    }

    pub fn with_duration(from: LinearScale, to: LinearScale, now: Instant, duration_ms: u64) -> Self {
        Self { from, to, started: now, duration: Duration::from_millis(duration_ms) }
    }

    pub fn target(&self) -> LinearScale {
        self.to
    }

    /// The interpolated scale at `now`. The range is taken from the target;
    /// only the domain morphs.
    pub fn current(&self, now: Instant) -> LinearScale {
        let t = self.progress(now);
        if t >= 1.0 {
            return self.to;
        }
        let e = ease_cubic_in_out(t);
        let (f0, f1) = self.from.domain();
        let (t0, t1) = self.to.domain();
        let (r0, r1) = self.to.range();
        LinearScale::new(lerp(f0, t0, e), lerp(f1, t1, e), r0, r1)
    }

    pub fn finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Supersede this transition with a new target: the new transition starts
    /// from the interpolated current scale, so a selection made mid-flight
    /// picks up where the animation is instead of jumping.
    pub fn retarget(&self, to: LinearScale, now: Instant) -> Self {
        Self::new(self.current(now), to, now)
    }

    fn progress(&self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.started);
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Symmetric cubic easing, matching the default easing of the original
/// rendering runtime.
#[inline]
fn ease_cubic_in_out(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = 2.0 * t - 2.0;
        0.5 * u * u * u + 1.0
    }
}
