// File: crates/scatter-core/src/session.rs
// Summary: Chart session state machine: axis selection, hover, resize, and render commands.

use std::mem;

use tracing::debug;

use crate::frame::ChartFrame;
use crate::record::{Record, XField, YField};
use crate::scale::{x_scale, y_scale, LinearScale};
use crate::tooltip;
use crate::types::TRANSITION_MS;

/// Which axis a command or caption refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisSide {
    X,
    Y,
}

/// External events fed to the session. All interleave on one event queue;
/// the session is single-threaded by construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChartEvent {
    /// Click on an X-axis caption carrying this field.
    SelectX(XField),
    /// Click on a Y-axis caption carrying this field.
    SelectY(YField),
    /// Cursor moved to a surface position (pixels).
    PointerMoved { x: f32, y: f32 },
    /// Cursor left the surface.
    PointerLeft,
    /// Viewport resized; triggers a full teardown/rebuild.
    Resized { width: u32, height: u32 },
}

/// Render work requested by a state transition, in the order it must run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderCommand {
    /// Animate the X axis ticks/line to the new scale.
    TransitionXAxis { duration_ms: u64 },
    /// Animate the Y axis ticks/line to the new scale.
    TransitionYAxis { duration_ms: u64 },
    /// Animate markers and abbreviation labels to their new positions.
    TransitionMarks { duration_ms: u64 },
    /// Re-derive tooltip content from the current selection.
    RebindTooltip,
    /// Update active/inactive emphasis across the captions of one axis.
    RestyleCaptions { axis: AxisSide },
    /// Show the tooltip for this record index.
    ShowTooltip { record: usize },
    /// Hide the tooltip.
    HideTooltip,
    /// The frame changed; discard the old surface and redraw everything.
    Rebuild,
}

/// Which metric a caption selects when clicked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaptionKind {
    X(XField),
    Y(YField),
}

/// One clickable axis caption with its current emphasis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Caption {
    pub kind: CaptionKind,
    pub text: &'static str,
    /// Exactly one caption per axis is active at any time.
    pub active: bool,
    /// Position within its axis group (0..3), outermost first.
    pub slot: usize,
}

/// All chart state for one built chart: records, frame, axis selection,
/// scales, and hover. Replaces the original's ambient closure variables.
pub struct ChartSession {
    records: Vec<Record>,
    frame: ChartFrame,
    chosen_x: XField,
    chosen_y: YField,
    x_scale: LinearScale,
    y_scale: LinearScale,
    hovered: Option<usize>,
}

impl ChartSession {
    /// Build a fresh session with the default selection (poverty/obesity)
    /// and scales computed from the record extents.
    pub fn new(records: Vec<Record>, frame: ChartFrame) -> Self {
        let chosen_x = XField::Poverty;
        let chosen_y = YField::Obesity;
        let x_scale = x_scale(&records, chosen_x, frame.width);
        let y_scale = y_scale(&records, chosen_y, frame.height);
        Self { records, frame, chosen_x, chosen_y, x_scale, y_scale, hovered: None }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn frame(&self) -> ChartFrame {
        self.frame
    }

    pub fn chosen_x(&self) -> XField {
        self.chosen_x
    }

    pub fn chosen_y(&self) -> YField {
        self.chosen_y
    }

    pub fn x_scale(&self) -> LinearScale {
        self.x_scale
    }

    pub fn y_scale(&self) -> LinearScale {
        self.y_scale
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Marker position for one record in plot coordinates (origin at the
    /// top-left plot corner). NaN metrics yield non-finite positions.
    pub fn marker_position(&self, index: usize) -> (f32, f32) {
        let r = &self.records[index];
        (
            self.x_scale.position(r.x_value(self.chosen_x)),
            self.y_scale.position(r.y_value(self.chosen_y)),
        )
    }

    /// The six axis captions. Emphasis is derived from the chosen fields,
    /// so per-axis exclusivity holds structurally.
    pub fn captions(&self) -> Vec<Caption> {
        let mut out = Vec::with_capacity(6);
        for (slot, f) in XField::ALL.into_iter().enumerate() {
            out.push(Caption {
                kind: CaptionKind::X(f),
                text: f.caption(),
                active: f == self.chosen_x,
                slot,
            });
        }
        for (slot, f) in YField::ALL.into_iter().enumerate() {
            out.push(Caption {
                kind: CaptionKind::Y(f),
                text: f.caption(),
                active: f == self.chosen_y,
                slot,
            });
        }
        out
    }

    /// Apply one event and return the render work it requires, in order.
    /// Returns an empty list when the event is a no-op.
    pub fn handle(&mut self, event: ChartEvent) -> Vec<RenderCommand> {
        match event {
            ChartEvent::SelectX(field) => {
                if field == self.chosen_x {
                    return Vec::new();
                }
                self.chosen_x = field;
                self.x_scale = x_scale(&self.records, field, self.frame.width);
                debug!(field = field.column(), "x axis selection changed");
                vec![
                    RenderCommand::TransitionXAxis { duration_ms: TRANSITION_MS },
                    RenderCommand::TransitionMarks { duration_ms: TRANSITION_MS },
                    RenderCommand::RebindTooltip,
                    RenderCommand::RestyleCaptions { axis: AxisSide::X },
                ]
            }
            ChartEvent::SelectY(field) => {
                if field == self.chosen_y {
                    return Vec::new();
                }
                self.chosen_y = field;
                self.y_scale = y_scale(&self.records, field, self.frame.height);
                debug!(field = field.column(), "y axis selection changed");
                vec![
                    RenderCommand::TransitionYAxis { duration_ms: TRANSITION_MS },
                    RenderCommand::TransitionMarks { duration_ms: TRANSITION_MS },
                    RenderCommand::RebindTooltip,
                    RenderCommand::RestyleCaptions { axis: AxisSide::Y },
                ]
            }
            ChartEvent::PointerMoved { x, y } => {
                let hit = tooltip::hit_test(self, x, y);
                if hit == self.hovered {
                    return Vec::new();
                }
                self.hovered = hit;
                match hit {
                    Some(record) => vec![RenderCommand::ShowTooltip { record }],
                    None => vec![RenderCommand::HideTooltip],
                }
            }
            ChartEvent::PointerLeft => {
                if self.hovered.take().is_some() {
                    vec![RenderCommand::HideTooltip]
                } else {
                    Vec::new()
                }
            }
            ChartEvent::Resized { width, height } => {
                // Full teardown: selections, scales, and hover all reset.
                let records = mem::take(&mut self.records);
                let frame = ChartFrame::from_viewport(width, height, self.frame.insets);
                *self = ChartSession::new(records, frame);
                debug!(width, height, "chart rebuilt for new viewport");
                vec![RenderCommand::Rebuild]
            }
        }
    }
}
