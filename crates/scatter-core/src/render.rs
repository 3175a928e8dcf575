// File: crates/scatter-core/src/render.rs
// Summary: Skia CPU raster rendering of a chart session: axes, marks, captions, tooltip.

use anyhow::Result;
use skia_safe as skia;

use crate::axis::ticks;
use crate::scale::LinearScale;
use crate::session::{Caption, ChartSession};
use crate::theme::Theme;
use crate::tooltip::tooltip_text;
use crate::types::MARKER_RADIUS;

const X_TICKS: usize = 10;
const Y_TICKS: usize = 6;
const CAPTION_FONT_SIZE: f32 = 14.0;
const TICK_FONT_SIZE: f32 = 12.0;
const MARK_FONT_SIZE: f32 = 11.0;
/// Tooltip offset from the marker, in pixels (matches the original popup).
const TOOLTIP_OFFSET: (f32, f32) = (-70.0, 50.0);

pub struct RenderOptions {
    pub theme: Theme,
    /// Disable text for deterministic pixel tests.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { theme: Theme::dark(), draw_labels: true }
    }
}

/// One frame's view of a session: the session plus the scales to draw with.
/// During a transition the scales are interpolated; otherwise they are the
/// session's own.
pub struct ChartView<'a> {
    pub session: &'a ChartSession,
    pub x_scale: LinearScale,
    pub y_scale: LinearScale,
}

/// Axis-aligned caption bounds in surface coordinates, used both for
/// painting anchors and for click hit testing.
#[derive(Clone, Copy, Debug)]
pub struct CaptionPlacement {
    pub caption: Caption,
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl CaptionPlacement {
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

impl<'a> ChartView<'a> {
    /// View with no transition in flight.
    pub fn stable(session: &'a ChartSession) -> Self {
        Self { session, x_scale: session.x_scale(), y_scale: session.y_scale() }
    }

    /// Render to a tightly packed RGBA8 buffer: (pixels, width, height, stride).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let frame = self.session.frame();
        let (w, h) = (frame.surface_width(), frame.surface_height());
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.paint(surface.canvas(), opts);

        let info = skia::ImageInfo::new(
            (w, h),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("failed to read back surface pixels");
        }
        Ok((pixels, w, h, stride))
    }

    /// Render to PNG-encoded bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let frame = self.session.frame();
        let (w, h) = (frame.surface_width(), frame.surface_height());
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.paint(surface.canvas(), opts);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to a PNG file, creating parent directories as needed.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    fn paint(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let frame = self.session.frame();
        let l = frame.insets.left as f32;
        let t = frame.insets.top as f32;
        let r = l + frame.width;
        let b = t + frame.height;

        let x_ticks = ticks(&self.x_scale, X_TICKS);
        let y_ticks = ticks(&self.y_scale, Y_TICKS);

        // Grid at tick positions
        let mut grid = skia::Paint::default();
        grid.set_color(theme.grid);
        grid.set_anti_alias(true);
        grid.set_stroke_width(1.0);
        for tick in &x_ticks {
            let x = l + tick.position;
            canvas.draw_line((x, t), (x, b), &grid);
        }
        for tick in &y_ticks {
            let y = t + tick.position;
            canvas.draw_line((l, y), (r, y), &grid);
        }

        // Axis lines and tick marks
        let mut axis_paint = skia::Paint::default();
        axis_paint.set_color(theme.axis_line);
        axis_paint.set_anti_alias(true);
        axis_paint.set_stroke_width(1.5);
        canvas.draw_line((l, b), (r, b), &axis_paint);
        canvas.draw_line((l, t), (l, b), &axis_paint);
        for tick in &x_ticks {
            let x = l + tick.position;
            canvas.draw_line((x, b), (x, b + 6.0), &axis_paint);
        }
        for tick in &y_ticks {
            let y = t + tick.position;
            canvas.draw_line((l - 6.0, y), (l, y), &axis_paint);
        }

        let mut text_paint = skia::Paint::default();
        text_paint.set_anti_alias(true);

        if opts.draw_labels {
            // Tick value labels
            let mut font = skia::Font::default();
            font.set_size(TICK_FONT_SIZE);
            text_paint.set_color(theme.tick_label);
            for tick in &x_ticks {
                let label = format_tick(tick.value);
                let (w, _) = font.measure_str(&label, Some(&text_paint));
                canvas.draw_str(&label, (l + tick.position - w * 0.5, b + 20.0), &font, &text_paint);
            }
            for tick in &y_ticks {
                let label = format_tick(tick.value);
                let (w, _) = font.measure_str(&label, Some(&text_paint));
                canvas.draw_str(&label, (l - 10.0 - w, t + tick.position + 4.0), &font, &text_paint);
            }
        }

        // Markers and abbreviation labels
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(theme.marker_fill);
        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(1.0);
        stroke.set_color(theme.marker_stroke);

        let records = self.session.records();
        let mut mark_font = skia::Font::default();
        mark_font.set_size(MARK_FONT_SIZE);
        for record in records {
            let x = self.x_scale.position(record.x_value(self.session.chosen_x()));
            let y = self.y_scale.position(record.y_value(self.session.chosen_y()));
            // NaN metrics never reach the canvas
            if !x.is_finite() || !y.is_finite() {
                continue;
            }
            let (cx, cy) = (l + x, t + y);
            canvas.draw_circle((cx, cy), MARKER_RADIUS, &fill);
            canvas.draw_circle((cx, cy), MARKER_RADIUS, &stroke);
            if opts.draw_labels {
                text_paint.set_color(theme.marker_label);
                let (w, _) = mark_font.measure_str(&record.abbr, Some(&text_paint));
                canvas.draw_str(&record.abbr, (cx - w * 0.5, cy + MARK_FONT_SIZE * 0.35), &mark_font, &text_paint);
            }
        }

        if opts.draw_labels {
            self.paint_captions(canvas, theme);
            self.paint_tooltip(canvas, theme);
        }
    }

    fn paint_captions(&self, canvas: &skia::Canvas, theme: &Theme) {
        let mut font = skia::Font::default();
        font.set_size(CAPTION_FONT_SIZE);
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);

        let frame = self.session.frame();
        for placement in caption_layout(self.session) {
            let caption = placement.caption;
            paint.set_color(if caption.active { theme.caption_active } else { theme.caption_inactive });
            let (w, _) = font.measure_str(caption.text, Some(&paint));
            match caption.kind {
                crate::session::CaptionKind::X(_) => {
                    let cx = (placement.left + placement.right) * 0.5;
                    canvas.draw_str(caption.text, (cx - w * 0.5, placement.bottom - 4.0), &font, &paint);
                }
                crate::session::CaptionKind::Y(_) => {
                    // Rotated 90° CCW, centered on the plot's vertical midline
                    let strip_x = placement.right - 4.0;
                    let cy = frame.insets.top as f32 + frame.height * 0.5;
                    canvas.save();
                    canvas.translate((strip_x, cy));
                    canvas.rotate(-90.0, None);
                    canvas.draw_str(caption.text, (-w * 0.5, 0.0), &font, &paint);
                    canvas.restore();
                }
            }
        }
    }

    fn paint_tooltip(&self, canvas: &skia::Canvas, theme: &Theme) {
        let Some(index) = self.session.hovered() else { return };
        let record = &self.session.records()[index];
        let (mx, my) = self.session.marker_position(index);
        if !mx.is_finite() || !my.is_finite() {
            return;
        }
        let frame = self.session.frame();
        let text = tooltip_text(record, self.session.chosen_x(), self.session.chosen_y());
        let lines: Vec<&str> = text.lines().collect();

        let mut font = skia::Font::default();
        font.set_size(TICK_FONT_SIZE);
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);

        let line_height = TICK_FONT_SIZE + 5.0;
        let pad = 8.0;
        let width = lines
            .iter()
            .map(|line| font.measure_str(line, Some(&paint)).0)
            .fold(0.0f32, f32::max)
            + pad * 2.0;
        let height = line_height * lines.len() as f32 + pad * 2.0;

        let bx = (frame.insets.left as f32 + mx + TOOLTIP_OFFSET.0)
            .clamp(0.0, (frame.surface_width() as f32 - width).max(0.0));
        let by = (frame.insets.top as f32 + my + TOOLTIP_OFFSET.1)
            .clamp(0.0, (frame.surface_height() as f32 - height).max(0.0));

        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(theme.tooltip_background);
        let rect = skia::Rect::from_xywh(bx, by, width, height);
        canvas.draw_round_rect(rect, 4.0, 4.0, &paint);

        paint.set_color(theme.tooltip_text);
        for (i, line) in lines.iter().enumerate() {
            let y = by + pad + line_height * (i as f32 + 1.0) - 5.0;
            canvas.draw_str(*line, (bx + pad, y), &font, &paint);
        }
    }
}

/// Caption bounds for the session's six captions, in surface coordinates.
///
/// X captions stack under the plot's bottom edge; Y captions sit rotated in
/// the left margin. The window demo hit-tests clicks against these rects.
pub fn caption_layout(session: &ChartSession) -> Vec<CaptionPlacement> {
    let frame = session.frame();
    let font = {
        let mut f = skia::Font::default();
        f.set_size(CAPTION_FONT_SIZE);
        f
    };
    let l = frame.insets.left as f32;
    let t = frame.insets.top as f32;
    let mid_x = l + frame.width * 0.5;
    let mid_y = t + frame.height * 0.5;
    let below = t + frame.height + 20.0;

    session
        .captions()
        .into_iter()
        .map(|caption| {
            let (w, _) = font.measure_str(caption.text, None);
            match caption.kind {
                crate::session::CaptionKind::X(_) => {
                    // Slots at 20/40/60 px under the axis caption group
                    let baseline = below + 20.0 * (caption.slot as f32 + 1.0);
                    CaptionPlacement {
                        caption,
                        left: mid_x - w * 0.5,
                        top: baseline - CAPTION_FONT_SIZE - 2.0,
                        right: mid_x + w * 0.5,
                        bottom: baseline + 4.0,
                    }
                }
                crate::session::CaptionKind::Y(_) => {
                    // Slots at -70/-50/-30 px left of the plot edge
                    let strip_x = l - 70.0 + 20.0 * caption.slot as f32;
                    CaptionPlacement {
                        caption,
                        left: strip_x - CAPTION_FONT_SIZE - 2.0,
                        top: mid_y - w * 0.5,
                        right: strip_x + 4.0,
                        bottom: mid_y + w * 0.5,
                    }
                }
            }
        })
        .collect()
}

fn format_tick(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }
    if value.abs() >= 1000.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}
