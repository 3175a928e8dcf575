// File: crates/scatter-core/src/lib.rs
// Summary: Core library entry point; exports the public API for the interactive scatter chart.

pub mod animate;
pub mod axis;
pub mod data;
pub mod frame;
pub mod record;
pub mod render;
pub mod scale;
pub mod session;
pub mod theme;
pub mod tooltip;
pub mod types;

pub use animate::ScaleTransition;
pub use data::{load_records, DataLoadError};
pub use frame::ChartFrame;
pub use record::{Record, XField, YField};
pub use render::{caption_layout, CaptionPlacement, ChartView, RenderOptions};
pub use scale::{x_scale, y_scale, LinearScale};
pub use session::{AxisSide, Caption, CaptionKind, ChartEvent, ChartSession, RenderCommand};
pub use theme::Theme;
pub use types::{Insets, MARKER_RADIUS, TRANSITION_MS};
