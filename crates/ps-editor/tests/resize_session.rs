//! Integration tests: resize session driving the snap engine (ps-editor).
//!
//! Simulates pointer streams against collected anchors and checks that locks
//! persist across frames, Alt bypasses snapping, and the gesture commits or
//! cancels cleanly.

use pretty_assertions::assert_eq;
use ps_core::anchor::AnchorSource;
use ps_core::labels::LabelKind;
use ps_core::{AnchorKind, Rect, SnapConfig, Viewport, collect_anchors};
use ps_editor::commands::CommandStack;
use ps_editor::handle::ResizeHandle;
use ps_editor::input::{InputEvent, Modifiers};
use ps_editor::session::{ResizeOutcome, ResizeSession};

const VIEWPORT: Viewport = Viewport::new(1200.0, 800.0);

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Card at (100,100) 200x100 with a sibling whose left edge is at x=400.
fn card_session(handle: ResizeHandle) -> ResizeSession {
    let sibling = Rect::new(400.0, 300.0, 150.0, 80.0);
    let anchors = collect_anchors(&[sibling], VIEWPORT);
    ResizeSession::begin(
        "#card",
        Rect::new(100.0, 100.0, 200.0, 100.0),
        handle,
        (300.0, 150.0),
        anchors,
        VIEWPORT,
        SnapConfig::default(),
    )
}

fn frame(session: &mut ResizeSession, x: f64, y: f64) -> ps_editor::ResizeFrame {
    match session.handle(&InputEvent::pointer_move(x, y)) {
        ResizeOutcome::Frame(f) => f,
        other => panic!("expected frame, got {other:?}"),
    }
}

// ─── Snapping through the session ────────────────────────────────────────

#[test]
fn east_drag_acquires_and_holds_sibling_lock() {
    init_logging();
    let mut s = card_session(ResizeHandle::E);

    // right edge at 396: within 6px of the sibling's left edge (400)
    let f = frame(&mut s, 396.0, 150.0);
    let lock = f.snap.lock_x.expect("should lock onto sibling edge");
    assert_eq!(lock.kind, AnchorKind::Right);
    assert_eq!(lock.value, 400.0);
    assert_eq!(lock.source, AnchorSource::Sibling);
    assert_eq!(f.snap.snapped_rect.right(), 400.0);

    // 391: outside the acquire threshold but inside the release band
    let f = frame(&mut s, 391.0, 150.0);
    assert_eq!(f.snap.lock_x.map(|l| l.value), Some(400.0));
    assert_eq!(s.current_rect().right(), 400.0);

    // 385: released
    let f = frame(&mut s, 385.0, 150.0);
    assert_eq!(f.snap.lock_x, None);
    assert_eq!(s.current_rect().right(), 385.0);
    assert_eq!(s.locks(), (None, None));
}

#[test]
fn sibling_lock_produces_gap_label() {
    let mut s = card_session(ResizeHandle::E);
    let f = frame(&mut s, 398.0, 150.0);
    assert_eq!(f.labels.len(), 1);
    assert_eq!(f.labels[0].kind, LabelKind::Sibling);
    // card bottom 200, sibling top 300
    assert_eq!(f.labels[0].text, "100px");
}

#[test]
fn alt_bypasses_snapping() {
    let mut s = card_session(ResizeHandle::E);
    frame(&mut s, 398.0, 150.0);
    assert!(s.locks().0.is_some());

    let outcome = s.handle(&InputEvent::PointerMove {
        x: 398.0,
        y: 150.0,
        modifiers: Modifiers::alt(),
    });
    let ResizeOutcome::Frame(f) = outcome else {
        panic!("expected frame");
    };
    assert_eq!(f.snap.lock_x, None);
    assert!(f.snap.guide_lines.is_empty());
    assert!(f.labels.is_empty());
    assert_eq!(f.snap.snapped_rect.right(), 398.0);
}

#[test]
fn corner_handle_snaps_both_axes_to_sibling_edges() {
    // SE drag: right edge towards the sibling's right (550), bottom towards
    // the sibling's bottom (380).
    let mut s = card_session(ResizeHandle::SE);
    let f = frame(&mut s, 547.0, 327.0);
    assert_eq!(f.snap.lock_x.map(|l| (l.kind, l.value)), Some((AnchorKind::Right, 550.0)));
    assert_eq!(f.snap.lock_y.map(|l| (l.kind, l.value)), Some((AnchorKind::Bottom, 380.0)));
    assert_eq!(f.snap.snapped_rect, Rect::new(100.0, 100.0, 450.0, 280.0));
    assert_eq!(f.snap.guide_lines.len(), 2);
}

// ─── Commit / cancel ─────────────────────────────────────────────────────

#[test]
fn pointer_up_commits_snapped_rect() {
    let mut s = card_session(ResizeHandle::E);
    frame(&mut s, 350.0, 150.0);
    let outcome = s.handle(&InputEvent::pointer_up(397.0, 150.0));
    let ResizeOutcome::Finished(cmd) = outcome else {
        panic!("expected finished");
    };
    assert_eq!(cmd.element, "#card");
    assert_eq!(cmd.before, Rect::new(100.0, 100.0, 200.0, 100.0));
    assert_eq!(cmd.after, Rect::new(100.0, 100.0, 300.0, 100.0));
    assert!(s.is_done());
    assert_eq!(s.locks(), (None, None));

    let mut stack = CommandStack::new(50);
    assert!(stack.push(cmd));
    let undo = stack.undo().expect("undo available");
    assert_eq!(undo.rect, Rect::new(100.0, 100.0, 200.0, 100.0));
}

#[test]
fn escape_cancels_to_start_rect() {
    let mut s = card_session(ResizeHandle::W);
    frame(&mut s, 250.0, 150.0);
    let outcome = s.handle(&InputEvent::key("Escape"));
    assert_eq!(
        outcome,
        ResizeOutcome::Cancelled {
            element: "#card".into(),
            rect: Rect::new(100.0, 100.0, 200.0, 100.0),
        }
    );
    assert_eq!(s.handle(&InputEvent::key("Escape")), ResizeOutcome::Ignored);
}

#[test]
fn other_keys_are_ignored() {
    let mut s = card_session(ResizeHandle::N);
    assert_eq!(s.handle(&InputEvent::key("Shift")), ResizeOutcome::Ignored);
    assert!(!s.is_done());
}
