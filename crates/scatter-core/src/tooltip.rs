// File: crates/scatter-core/src/tooltip.rs
// Summary: Tooltip text derivation and marker hover hit testing.

use crate::record::{Record, XField, YField};
use crate::session::ChartSession;
use crate::types::MARKER_RADIUS;

/// Tooltip body for one record under the current selection: state name plus
/// one line per chosen axis with its fixed label/suffix.
///
/// Derived at show time from the live selection, so content can never go
/// stale across an axis change.
pub fn tooltip_text(record: &Record, chosen_x: XField, chosen_y: YField) -> String {
    let x_value = record.x_value(chosen_x);
    let y_value = record.y_value(chosen_y);
    let mut x_line = format!("{} {}", chosen_x.tip_label(), x_value);
    let suffix = chosen_x.tip_suffix();
    if !suffix.is_empty() {
        x_line.push(' ');
        x_line.push_str(suffix);
    }
    format!(
        "{}\n{}\n{} {} %",
        record.state,
        x_line,
        chosen_y.tip_label(),
        y_value
    )
}

/// Index of the marker under the cursor, if any. Coordinates are in plot
/// space; a marker is hit within its circle radius. Markers with non-finite
/// positions never match.
pub fn hit_test(session: &ChartSession, px: f32, py: f32) -> Option<usize> {
    for index in 0..session.records().len() {
        let (mx, my) = session.marker_position(index);
        if !mx.is_finite() || !my.is_finite() {
            continue;
        }
        if distance_sq(px, py, mx, my) <= MARKER_RADIUS * MARKER_RADIUS {
            return Some(index);
        }
    }
    None
}

#[inline]
fn distance_sq(ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    let dx = ax - bx;
    let dy = ay - by;
    dx * dx + dy * dy
}
