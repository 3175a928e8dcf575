// File: crates/scatter-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic small chart to PNG bytes (labels off).
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use scatter_core::record::Record;
use scatter_core::{ChartFrame, ChartSession, ChartView, Insets, RenderOptions};

fn render_bytes() -> Vec<u8> {
    let records = vec![
        Record {
            state: "Alpha".into(),
            abbr: "AA".into(),
            poverty: 10.0,
            age: 32.0,
            income: 45000.0,
            obesity: 22.0,
            smokes: 14.0,
            healthcare: 9.0,
        },
        Record {
            state: "Bravo".into(),
            abbr: "BB".into(),
            poverty: 20.0,
            age: 40.0,
            income: 60000.0,
            obesity: 32.0,
            smokes: 20.0,
            healthcare: 12.0,
        },
        Record {
            state: "Charlie".into(),
            abbr: "CC".into(),
            poverty: 15.0,
            age: 36.0,
            income: 52000.0,
            obesity: 27.0,
            smokes: 17.0,
            healthcare: 10.5,
        },
    ];
    let frame = ChartFrame::from_viewport(640, 480, Insets::default());
    let session = ChartSession::new(records, frame);

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid text nondeterminism across platforms
    ChartView::stable(&session)
        .render_to_png_bytes(&opts)
        .expect("render bytes")
}

#[test]
fn golden_basic_scatter() {
    let bytes = render_bytes();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("basic_scatter.png");

    let update = std::env::var("UPDATE_SNAPSHOTS")
        .ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(
            got_img.as_raw(),
            want_img.as_raw(),
            "rendered pixels differ from golden snapshot: {}",
            snap_path.display()
        );
    } else {
        eprintln!(
            "[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.",
            snap_path.display()
        );
        // Skip without failing on first run
    }
}
