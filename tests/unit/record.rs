use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};

use base64::Engine as _;

use super::*;

static SCRATCH_COUNTER: AtomicU32 = AtomicU32::new(0);

fn scratch_dir(label: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "scenelink_record_{label}_{}_{}",
        std::process::id(),
        SCRATCH_COUNTER.fetch_add(1, Ordering::Relaxed)
    ));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn png_payload(bytes: &[u8]) -> String {
    format!(
        "data:image/png;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(bytes)
    )
}

#[test]
fn clears_stale_frames_and_numbers_from_one() {
    let dir = scratch_dir("sequence");
    std::fs::write(dir.join("1.png"), b"stale").unwrap();

    let recorder = FrameRecorder::new();
    recorder.begin(&dir, FrameFormat::Png).unwrap();
    assert!(recorder.is_armed());

    for bytes in [&b"frame-a"[..], b"frame-b", b"frame-c"] {
        recorder.handle_frame(false, &png_payload(bytes));
    }
    assert_eq!(recorder.stop().unwrap(), 3);

    assert_eq!(std::fs::read(dir.join("1.png")).unwrap(), b"frame-a");
    assert_eq!(std::fs::read(dir.join("2.png")).unwrap(), b"frame-b");
    assert_eq!(std::fs::read(dir.join("3.png")).unwrap(), b"frame-c");
    assert!(!dir.join("4.png").exists());
}

#[test]
fn vector_frames_are_written_verbatim() {
    let dir = scratch_dir("svg");
    let recorder = FrameRecorder::new();
    recorder.begin(&dir, FrameFormat::Svg).unwrap();

    recorder.handle_frame(true, "<svg><rect/></svg>");
    assert_eq!(recorder.stop().unwrap(), 1);

    assert_eq!(
        std::fs::read_to_string(dir.join("1.svg")).unwrap(),
        "<svg><rect/></svg>"
    );
}

#[test]
fn clearing_only_touches_the_active_extension() {
    let dir = scratch_dir("mixed");
    std::fs::write(dir.join("1.svg"), "<svg/>").unwrap();
    std::fs::write(dir.join("notes.txt"), "keep me").unwrap();

    let recorder = FrameRecorder::new();
    recorder.begin(&dir, FrameFormat::Png).unwrap();
    recorder.stop().unwrap();

    assert!(dir.join("1.svg").exists());
    assert!(dir.join("notes.txt").exists());
}

#[test]
fn frames_after_stop_are_dropped() {
    let dir = scratch_dir("stopped");
    let recorder = FrameRecorder::new();
    recorder.begin(&dir, FrameFormat::Png).unwrap();
    recorder.stop().unwrap();

    recorder.handle_frame(false, &png_payload(b"late"));
    assert!(!dir.join("1.png").exists());
    assert!(!recorder.is_armed());
}

#[test]
fn malformed_raster_payload_surfaces_on_stop() {
    let dir = scratch_dir("badpayload");
    let recorder = FrameRecorder::new();
    recorder.begin(&dir, FrameFormat::Png).unwrap();

    recorder.handle_frame(false, "no data uri here");
    recorder.handle_frame(false, &png_payload(b"good"));

    let err = recorder.stop().unwrap_err();
    assert!(matches!(err, ScenelinkError::Recording(_)));

    // The bad frame consumed no number; the good one landed at 1.
    assert_eq!(std::fs::read(dir.join("1.png")).unwrap(), b"good");
    assert!(!dir.join("2.png").exists());
}

#[test]
fn restarting_a_session_renumbers_from_one() {
    let dir = scratch_dir("restart");
    let recorder = FrameRecorder::new();

    recorder.begin(&dir, FrameFormat::Png).unwrap();
    recorder.handle_frame(false, &png_payload(b"first-run"));
    assert_eq!(recorder.stop().unwrap(), 1);

    recorder.begin(&dir, FrameFormat::Png).unwrap();
    recorder.handle_frame(false, &png_payload(b"second-run"));
    assert_eq!(recorder.stop().unwrap(), 1);

    assert_eq!(std::fs::read(dir.join("1.png")).unwrap(), b"second-run");
    assert!(!dir.join("2.png").exists());
}
