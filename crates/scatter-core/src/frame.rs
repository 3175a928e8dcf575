// File: crates/scatter-core/src/frame.rs
// Summary: Chart frame derived from the viewport; replaced wholesale on load and resize.

use crate::types::Insets;

/// Plot-area pixel extent plus the surrounding margins.
///
/// A frame is never resized in place. Layout changes create a new frame and
/// rebuild everything derived from it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartFrame {
    /// Plot width in pixels (viewport width minus horizontal insets).
    pub width: f32,
    /// Plot height in pixels (viewport height minus vertical insets).
    pub height: f32,
    pub insets: Insets,
}

impl ChartFrame {
    /// Compute the frame for a viewport. Extents are clamped to at least 1 px
    /// so degenerate windows still produce a usable scale range.
    pub fn from_viewport(viewport_w: u32, viewport_h: u32, insets: Insets) -> Self {
        let width = viewport_w.saturating_sub(insets.hsum()).max(1) as f32;
        let height = viewport_h.saturating_sub(insets.vsum()).max(1) as f32;
        Self { width, height, insets }
    }

    /// Full surface width including margins.
    pub fn surface_width(&self) -> i32 {
        self.width as i32 + self.insets.hsum() as i32
    }

    /// Full surface height including margins.
    pub fn surface_height(&self) -> i32 {
        self.height as i32 + self.insets.vsum() as i32
    }
}
