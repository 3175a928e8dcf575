// File: crates/scatter-core/tests/session.rs
// Purpose: Validate the session state machine: selection, idempotence, caption
// exclusivity, hover, resize rebuild, and the end-to-end two-record scenario.

use scatter_core::record::{Record, XField, YField};
use scatter_core::session::CaptionKind;
use scatter_core::{
    x_scale, AxisSide, ChartEvent, ChartFrame, ChartSession, Insets, RenderCommand, TRANSITION_MS,
};

fn record(abbr: &str, poverty: f64, age: f64, income: f64, obesity: f64) -> Record {
    Record {
        state: format!("State {abbr}"),
        abbr: abbr.to_string(),
        poverty,
        age,
        income,
        obesity,
        smokes: 18.0,
        healthcare: 10.0,
    }
}

fn two_record_session() -> ChartSession {
    let records = vec![
        record("A", 10.0, 30.0, 40000.0, 20.0),
        record("B", 30.0, 45.0, 70000.0, 40.0),
    ];
    let frame = ChartFrame::from_viewport(800, 600, Insets::default());
    ChartSession::new(records, frame)
}

#[test]
fn initial_selection_is_poverty_obesity() {
    let session = two_record_session();
    assert_eq!(session.chosen_x(), XField::Poverty);
    assert_eq!(session.chosen_y(), YField::Obesity);
}

#[test]
fn repeat_click_on_active_caption_is_a_no_op() {
    let mut session = two_record_session();
    let scale_before = session.x_scale();
    let commands = session.handle(ChartEvent::SelectX(XField::Poverty));
    assert!(commands.is_empty(), "no re-render on a redundant click");
    assert_eq!(session.chosen_x(), XField::Poverty);
    assert_eq!(session.x_scale(), scale_before);
}

#[test]
fn x_selection_rebuilds_scale_and_orders_commands() {
    let mut session = two_record_session();
    let y_before = session.y_scale();
    let commands = session.handle(ChartEvent::SelectX(XField::Income));
    assert_eq!(
        commands,
        vec![
            RenderCommand::TransitionXAxis { duration_ms: TRANSITION_MS },
            RenderCommand::TransitionMarks { duration_ms: TRANSITION_MS },
            RenderCommand::RebindTooltip,
            RenderCommand::RestyleCaptions { axis: AxisSide::X },
        ]
    );
    // Only the clicked axis changed
    assert_eq!(session.chosen_x(), XField::Income);
    assert_eq!(session.chosen_y(), YField::Obesity);
    assert_eq!(session.y_scale(), y_before);
    // New scale derives from income values
    let expected = x_scale(session.records(), XField::Income, session.frame().width);
    assert_eq!(session.x_scale(), expected);
}

#[test]
fn y_selection_emits_y_axis_commands() {
    let mut session = two_record_session();
    let commands = session.handle(ChartEvent::SelectY(YField::Smokes));
    assert_eq!(commands[0], RenderCommand::TransitionYAxis { duration_ms: TRANSITION_MS });
    assert_eq!(
        commands.last(),
        Some(&RenderCommand::RestyleCaptions { axis: AxisSide::Y })
    );
    assert_eq!(session.chosen_y(), YField::Smokes);
}

#[test]
fn exactly_one_caption_per_axis_is_active() {
    let mut session = two_record_session();
    session.handle(ChartEvent::SelectX(XField::Age));
    session.handle(ChartEvent::SelectY(YField::Healthcare));
    let captions = session.captions();
    assert_eq!(captions.len(), 6);

    let x_active: Vec<_> = captions
        .iter()
        .filter(|c| matches!(c.kind, CaptionKind::X(_)) && c.active)
        .collect();
    let y_active: Vec<_> = captions
        .iter()
        .filter(|c| matches!(c.kind, CaptionKind::Y(_)) && c.active)
        .collect();
    assert_eq!(x_active.len(), 1);
    assert_eq!(y_active.len(), 1);
    assert_eq!(x_active[0].kind, CaptionKind::X(XField::Age));
    assert_eq!(y_active[0].kind, CaptionKind::Y(YField::Healthcare));
}

#[test]
fn end_to_end_two_record_scenario() {
    let mut session = two_record_session();

    // Initial render: A left of B on X (poverty), A below B on Y (obesity)
    let (ax, ay) = session.marker_position(0);
    let (bx, by) = session.marker_position(1);
    assert!(ax < bx, "A ({ax}) should plot left of B ({bx})");
    assert!(ay > by, "A ({ay}) should plot below B ({by})");

    // Click the income caption
    let commands = session.handle(ChartEvent::SelectX(XField::Income));
    assert!(commands
        .iter()
        .any(|c| *c == RenderCommand::TransitionMarks { duration_ms: 1000 }));

    // Markers reposition against the income-derived scale
    let expected = x_scale(session.records(), XField::Income, session.frame().width);
    let (ax2, _) = session.marker_position(0);
    assert_eq!(ax2, expected.position(40000.0));

    // Poverty/age captions inactive, income active
    for c in session.captions() {
        match c.kind {
            CaptionKind::X(f) => assert_eq!(c.active, f == XField::Income),
            CaptionKind::Y(f) => assert_eq!(c.active, f == YField::Obesity),
        }
    }
}

#[test]
fn hover_enter_and_leave_emit_tooltip_commands() {
    let mut session = two_record_session();
    let (mx, my) = session.marker_position(0);

    let commands = session.handle(ChartEvent::PointerMoved { x: mx + 2.0, y: my - 2.0 });
    assert_eq!(commands, vec![RenderCommand::ShowTooltip { record: 0 }]);
    assert_eq!(session.hovered(), Some(0));

    // Wiggling inside the same marker changes nothing
    let commands = session.handle(ChartEvent::PointerMoved { x: mx - 1.0, y: my + 1.0 });
    assert!(commands.is_empty());

    let commands = session.handle(ChartEvent::PointerMoved { x: mx + 500.0, y: my });
    assert_eq!(commands, vec![RenderCommand::HideTooltip]);
    assert_eq!(session.hovered(), None);

    // Leaving while nothing is hovered is a no-op
    assert!(session.handle(ChartEvent::PointerLeft).is_empty());
}

#[test]
fn resize_rebuilds_the_session_from_scratch() {
    let mut session = two_record_session();
    session.handle(ChartEvent::SelectX(XField::Age));
    let (mx, my) = session.marker_position(0);
    session.handle(ChartEvent::PointerMoved { x: mx, y: my });
    assert!(session.hovered().is_some());

    let commands = session.handle(ChartEvent::Resized { width: 1200, height: 900 });
    assert_eq!(commands, vec![RenderCommand::Rebuild]);

    // Full teardown: frame, selection, and hover all reconstructed
    assert_eq!(session.frame(), ChartFrame::from_viewport(1200, 900, Insets::default()));
    assert_eq!(session.chosen_x(), XField::Poverty);
    assert_eq!(session.chosen_y(), YField::Obesity);
    assert_eq!(session.hovered(), None);
    assert_eq!(session.records().len(), 2);
}
