// File: crates/scatter-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub tick_label: skia::Color,
    pub marker_fill: skia::Color,
    pub marker_stroke: skia::Color,
    pub marker_label: skia::Color,
    pub caption_active: skia::Color,
    pub caption_inactive: skia::Color,
    pub tooltip_background: skia::Color,
    pub tooltip_text: skia::Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            tick_label: skia::Color::from_argb(255, 150, 150, 160),
            // Half-opaque fill with a grey stroke; marker visuals are fixed.
            marker_fill: skia::Color::from_argb(128, 64, 160, 255),
            marker_stroke: skia::Color::from_argb(255, 128, 128, 128),
            marker_label: skia::Color::from_argb(255, 235, 235, 245),
            caption_active: skia::Color::from_argb(255, 235, 235, 245),
            caption_inactive: skia::Color::from_argb(255, 110, 110, 120),
            tooltip_background: skia::Color::from_argb(230, 40, 40, 48),
            tooltip_text: skia::Color::from_argb(255, 235, 235, 245),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            tick_label: skia::Color::from_argb(255, 100, 100, 110),
            marker_fill: skia::Color::from_argb(128, 32, 120, 200),
            marker_stroke: skia::Color::from_argb(255, 128, 128, 128),
            marker_label: skia::Color::from_argb(255, 255, 255, 255),
            caption_active: skia::Color::from_argb(255, 20, 20, 30),
            caption_inactive: skia::Color::from_argb(255, 160, 160, 170),
            tooltip_background: skia::Color::from_argb(230, 255, 255, 255),
            tooltip_text: skia::Color::from_argb(255, 20, 20, 30),
        }
    }
}

/// Return the list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::dark()
}
