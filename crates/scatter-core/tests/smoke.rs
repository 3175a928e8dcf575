// File: crates/scatter-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use scatter_core::record::Record;
use scatter_core::{ChartFrame, ChartSession, ChartView, Insets, RenderOptions};

fn records() -> Vec<Record> {
    vec![
        Record {
            state: "Alabama".into(),
            abbr: "AL".into(),
            poverty: 19.3,
            age: 38.1,
            income: 42830.0,
            obesity: 33.5,
            smokes: 21.1,
            healthcare: 13.9,
        },
        Record {
            state: "Colorado".into(),
            abbr: "CO".into(),
            poverty: 12.0,
            age: 36.1,
            income: 58823.0,
            obesity: 21.3,
            smokes: 15.7,
            healthcare: 14.5,
        },
        Record {
            state: "Texas".into(),
            abbr: "TX".into(),
            poverty: 17.2,
            age: 34.3,
            income: 53035.0,
            obesity: 32.4,
            smokes: 14.5,
            healthcare: 19.1,
        },
    ]
}

#[test]
fn render_smoke_png() {
    let frame = ChartFrame::from_viewport(800, 600, Insets::default());
    let session = ChartSession::new(records(), frame);

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    ChartView::stable(&session)
        .render_to_png(&opts, &out)
        .expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify the in-memory API works
    let bytes = ChartView::stable(&session)
        .render_to_png_bytes(&opts)
        .expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn nan_metrics_do_not_break_rendering() {
    let mut rs = records();
    rs[1].poverty = f64::NAN;
    let frame = ChartFrame::from_viewport(640, 480, Insets::default());
    let session = ChartSession::new(rs, frame);
    // The NaN marker is skipped; everything else still renders
    let bytes = ChartView::stable(&session)
        .render_to_png_bytes(&RenderOptions::default())
        .expect("render bytes");
    assert!(!bytes.is_empty());
}
