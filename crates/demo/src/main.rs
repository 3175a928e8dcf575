// File: crates/demo/src/main.rs
// Summary: Demo loads the health/demographics CSV and renders the scatter chart to PNGs.

use anyhow::{Context, Result};
use scatter_core::{
    ChartEvent, ChartFrame, ChartSession, ChartView, Insets, RenderOptions, XField,
};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Accept path from CLI or fall back to the bundled sample dataset
    let raw = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "crates/demo/assets/data.csv".to_string());
    let path = resolve_path(&raw)?;
    println!("Using input file: {}", path.display());

    let records = scatter_core::load_records(&path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    println!("Loaded {} records", records.len());

    let frame = ChartFrame::from_viewport(
        scatter_core::types::WIDTH as u32,
        scatter_core::types::HEIGHT as u32,
        Insets::default(),
    );
    let mut session = ChartSession::new(records, frame);
    let opts = RenderOptions::default();

    // 1) Initial selection: poverty vs obesity
    let out_initial = out_name("initial");
    ChartView::stable(&session).render_to_png(&opts, &out_initial)?;
    println!("Wrote {}", out_initial.display());

    // 2) After an income caption click (final transition state)
    let commands = session.handle(ChartEvent::SelectX(XField::Income));
    println!("Income selection produced {} render commands", commands.len());
    let out_income = out_name("income");
    ChartView::stable(&session).render_to_png(&opts, &out_income)?;
    println!("Wrote {}", out_income.display());

    Ok(())
}

/// Resolve the input path, also trying it relative to the crate directory so
/// the demo works from the workspace root or from `crates/demo`.
fn resolve_path(raw: &str) -> Result<PathBuf> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok(p.to_path_buf());
    }
    let local = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/data.csv");
    if raw.ends_with("data.csv") && local.exists() {
        return Ok(local);
    }
    anyhow::bail!("file not found: {}", p.display());
}

/// Produce an output file name like target/out/scatter_<suffix>.png
fn out_name(suffix: &str) -> PathBuf {
    let out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.join(format!("scatter_{suffix}.png"))
}
