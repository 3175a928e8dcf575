// File: crates/window-demo/src/main.rs
// Summary: Interactive scatter chart window: hover tooltips, caption clicks with animated
// transitions, and full rebuild on resize. CPU render blitted via winit + softbuffer.

use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use std::time::Instant;

use scatter_core::{
    caption_layout, theme, CaptionKind, ChartEvent, ChartFrame, ChartSession, ChartView, Insets,
    RenderCommand, RenderOptions, ScaleTransition,
};
use winit::event::{ElementState, Event, MouseButton, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let raw = std::env::args().nth(1);
    let path = match resolve_path(raw.as_deref()) {
        Some(p) => p,
        None => {
            eprintln!("dataset not found; pass a CSV path as the first argument");
            return;
        }
    };

    let records = match scatter_core::load_records(&path) {
        Ok(r) => r,
        Err(e) => {
            // Load failure aborts initialization; no chart is rendered.
            eprintln!("failed to load '{}': {e}", path.display());
            return;
        }
    };

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Scatterscope — Window Demo")
        .with_inner_size(winit::dpi::LogicalSize::new(1024.0, 768.0))
        .build(&event_loop)
        .expect("build window");

    let context = unsafe { softbuffer::Context::new(&window) }.expect("softbuffer context");
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.expect("softbuffer surface");

    let mut size = window.inner_size();
    let insets = Insets::default();
    let mut session = ChartSession::new(
        records,
        ChartFrame::from_viewport(size.width.max(1), size.height.max(1), insets),
    );

    // Live transitions; marks follow the same interpolated scales as the axes.
    let mut x_transition: Option<ScaleTransition> = None;
    let mut y_transition: Option<ScaleTransition> = None;
    let mut cursor: Option<(f64, f64)> = None;
    let themes = theme::presets();
    let mut theme_idx = 0usize;

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *cf = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                    let commands = session.handle(ChartEvent::Resized {
                        width: size.width.max(1),
                        height: size.height.max(1),
                    });
                    apply_commands(&commands, &mut x_transition, &mut y_transition);
                }
                WindowEvent::CursorMoved { position, .. } => {
                    cursor = Some((position.x, position.y));
                    let frame = session.frame();
                    let px = position.x as f32 - frame.insets.left as f32;
                    let py = position.y as f32 - frame.insets.top as f32;
                    let commands = session.handle(ChartEvent::PointerMoved { x: px, y: py });
                    if !commands.is_empty() {
                        window.request_redraw();
                    }
                }
                WindowEvent::CursorLeft { .. } => {
                    cursor = None;
                    if !session.handle(ChartEvent::PointerLeft).is_empty() {
                        window.request_redraw();
                    }
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    if button == MouseButton::Left && state == ElementState::Pressed {
                        if let Some((cx, cy)) = cursor {
                            if let Some(kind) = caption_under(&session, cx as f32, cy as f32) {
                                let now = Instant::now();
                                // Transitions start from the scales currently on screen.
                                let shown_x = x_transition
                                    .map(|tr| tr.current(now))
                                    .unwrap_or_else(|| session.x_scale());
                                let shown_y = y_transition
                                    .map(|tr| tr.current(now))
                                    .unwrap_or_else(|| session.y_scale());
                                let event = match kind {
                                    CaptionKind::X(f) => ChartEvent::SelectX(f),
                                    CaptionKind::Y(f) => ChartEvent::SelectY(f),
                                };
                                let commands = session.handle(event);
                                for cmd in &commands {
                                    match *cmd {
                                        RenderCommand::TransitionXAxis { duration_ms } => {
                                            x_transition = Some(ScaleTransition::with_duration(
                                                shown_x,
                                                session.x_scale(),
                                                now,
                                                duration_ms,
                                            ));
                                        }
                                        RenderCommand::TransitionYAxis { duration_ms } => {
                                            y_transition = Some(ScaleTransition::with_duration(
                                                shown_y,
                                                session.y_scale(),
                                                now,
                                                duration_ms,
                                            ));
                                        }
                                        _ => {}
                                    }
                                }
                                if !commands.is_empty() {
                                    window.request_redraw();
                                }
                            }
                        }
                    }
                }
                WindowEvent::KeyboardInput { input, .. } => {
                    if input.state == ElementState::Pressed {
                        theme_idx = (theme_idx + 1) % themes.len();
                        window.request_redraw();
                    }
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                // Keep redrawing while a transition is live
                let now = Instant::now();
                let animating = x_transition.map(|tr| !tr.finished(now)).unwrap_or(false)
                    || y_transition.map(|tr| !tr.finished(now)).unwrap_or(false);
                if animating {
                    *cf = ControlFlow::Poll;
                    window.request_redraw();
                }
            }
            Event::RedrawRequested(_) => {
                let now = Instant::now();
                if x_transition.map(|tr| tr.finished(now)).unwrap_or(false) {
                    x_transition = None;
                }
                if y_transition.map(|tr| tr.finished(now)).unwrap_or(false) {
                    y_transition = None;
                }

                let view = ChartView {
                    session: &session,
                    x_scale: x_transition
                        .map(|tr| tr.current(now))
                        .unwrap_or_else(|| session.x_scale()),
                    y_scale: y_transition
                        .map(|tr| tr.current(now))
                        .unwrap_or_else(|| session.y_scale()),
                };
                let opts = RenderOptions { theme: themes[theme_idx], draw_labels: true };

                let w = session.frame().surface_width().max(1) as u32;
                let h = session.frame().surface_height().max(1) as u32;
                surface
                    .resize(NonZeroU32::new(w).unwrap(), NonZeroU32::new(h).unwrap())
                    .ok();

                match view.render_to_rgba8(&opts) {
                    Ok((rgba, _, _, _)) => {
                        let mut frame = surface.buffer_mut().expect("frame");
                        let max_px = frame.len().min(rgba.len() / 4);
                        for (i, px) in rgba.chunks_exact(4).take(max_px).enumerate() {
                            let r = px[0] as u32;
                            let g = px[1] as u32;
                            let b = px[2] as u32;
                            let a = px[3] as u32;
                            frame[i] = (a << 24) | (r << 16) | (g << 8) | b;
                        }
                        if let Err(e) = frame.present() {
                            eprintln!("present error: {e:?}");
                        }
                    }
                    Err(e) => eprintln!("render error: {e:#}"),
                }
            }
            _ => {}
        }
    });
}

/// React to rebuild commands: a rebuilt chart starts with no live transitions.
fn apply_commands(
    commands: &[RenderCommand],
    x_transition: &mut Option<ScaleTransition>,
    y_transition: &mut Option<ScaleTransition>,
) {
    if commands.contains(&RenderCommand::Rebuild) {
        *x_transition = None;
        *y_transition = None;
    }
}

/// Caption under a surface-space cursor position, if any.
fn caption_under(session: &ChartSession, x: f32, y: f32) -> Option<CaptionKind> {
    caption_layout(session)
        .into_iter()
        .find(|p| p.contains(x, y))
        .map(|p| p.caption.kind)
}

fn resolve_path(raw: Option<&str>) -> Option<PathBuf> {
    if let Some(raw) = raw {
        let p = Path::new(raw);
        if p.exists() {
            return Some(p.to_path_buf());
        }
        return None;
    }
    let bundled = Path::new(env!("CARGO_MANIFEST_DIR")).join("../demo/assets/data.csv");
    bundled.exists().then_some(bundled)
}
