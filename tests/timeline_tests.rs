// Host-side tests for the timeline state machine and snap scheduler.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod geometry {
        include!("../src/core/geometry.rs");
    }
    pub mod transform {
        include!("../src/core/transform.rs");
    }
    pub mod timeline {
        include!("../src/core/timeline.rs");
    }
}

use crate::core::geometry::{SectionRect, ViewportSnapshot};
use crate::core::timeline::*;

fn rect(top: f64, height: f64) -> SectionRect {
    SectionRect { top, height }
}

/// Three full-height sections a viewport apart; section 0 slightly above
/// center, the others below.
fn three_sections() -> ViewportSnapshot {
    ViewportSnapshot {
        scroll_y: 500.0,
        viewport_height: 800.0,
        rects: vec![
            Some(rect(-100.0, 800.0)),
            Some(rect(900.0, 800.0)),
            Some(rect(1900.0, 800.0)),
        ],
    }
}

#[test]
fn fresh_state_is_idle_with_section_zero_active() {
    let state = TimelineState::new(3);
    assert_eq!(state.section_count(), 3);
    assert_eq!(state.active_section(), 0);
    assert!(!state.is_visible(0));
    assert!(!state.is_visible(2));
    assert!(!state.is_auto_scrolling(0.0));
}

#[test]
fn sample_updates_visibility_active_and_styles() {
    let mut state = TimelineState::new(3);
    let updates = state.on_sample(&three_sections());

    assert_eq!(updates.len(), 3);
    assert!(state.is_visible(0));
    assert!(!state.is_visible(1));
    assert!(!state.is_visible(2));
    assert_eq!(state.active_section(), 0);

    // Section 0 sits at d = 0.125: badge opacity 1 - 0.125 * 1.5.
    assert!((updates[0].styles.badge.opacity - 0.8125).abs() < 1e-9);
    // Section 1 is outside the visibility band: badge hidden, image floored.
    assert!(updates[1].styles.badge.opacity.abs() < 1e-9);
    assert!((updates[1].styles.image.opacity - 0.86).abs() < 1e-9);
}

#[test]
fn degenerate_sample_changes_nothing() {
    let mut state = TimelineState::new(3);
    state.on_sample(&three_sections());
    assert!(state.is_visible(0));

    let degenerate = ViewportSnapshot {
        scroll_y: 500.0,
        viewport_height: 0.0,
        rects: vec![Some(rect(5000.0, 800.0)), None, None],
    };
    let updates = state.on_sample(&degenerate);
    assert!(updates.is_empty());
    // Previous bookkeeping survives the bad sample.
    assert!(state.is_visible(0));
    assert_eq!(state.active_section(), 0);
}

#[test]
fn unmounted_sections_are_skipped_for_the_sample() {
    let mut state = TimelineState::new(3);
    state.on_sample(&three_sections());
    assert!(state.is_visible(0));

    let partial = ViewportSnapshot {
        scroll_y: 500.0,
        viewport_height: 800.0,
        rects: vec![None, Some(rect(300.0, 200.0)), Some(rect(1900.0, 800.0))],
    };
    let updates = state.on_sample(&partial);
    let indices: Vec<usize> = updates.iter().map(|u| u.index).collect();
    assert_eq!(indices, vec![1, 2]);
    // Section 0 keeps its last known visibility.
    assert!(state.is_visible(0));
    assert_eq!(state.active_section(), 1);
}

#[test]
fn debounce_collapses_a_scroll_burst_to_one_snap() {
    let mut state = TimelineState::new(3);
    let snapshot = three_sections();
    state.on_sample(&snapshot);

    // Three events under 100ms apart: the deadline tracks the last one.
    state.note_scroll(0.0);
    state.note_scroll(50.0);
    state.note_scroll(90.0);

    assert!(state.on_quiesce(140.0, &snapshot).is_none()); // 90 + 100 > 140
    let request = state.on_quiesce(190.0, &snapshot);
    assert!(request.is_some());

    // The trigger is consumed; firing again does nothing.
    assert!(state.on_quiesce(200.0, &snapshot).is_none());
}

#[test]
fn quiesce_snap_centers_the_active_section() {
    let mut state = TimelineState::new(3);
    let snapshot = three_sections();
    state.on_sample(&snapshot);

    state.note_scroll(0.0);
    let request = state.on_quiesce(100.0, &snapshot).expect("snap");
    assert_eq!(request.section, 0);
    // top -100 + scroll 500 - (400 - 400)
    assert!((request.target_y - 400.0).abs() < 1e-9);
}

#[test]
fn lock_suppresses_further_snaps_for_its_full_window() {
    let mut state = TimelineState::new(3);
    let snapshot = three_sections();
    state.on_sample(&snapshot);

    state.note_scroll(0.0);
    assert!(state.on_quiesce(100.0, &snapshot).is_some());
    assert!(state.is_auto_scrolling(100.0));
    assert!(state.is_auto_scrolling(899.0));

    // Quiesce triggers and manual jumps are both dropped while locked.
    state.note_scroll(300.0);
    assert!(state.on_quiesce(420.0, &snapshot).is_none());
    assert!(state.go_to_section(1, 500.0, &snapshot).is_none());
    assert_eq!(state.active_section(), 0);

    // The window is exactly 800ms from the lock's start.
    assert!(!state.is_auto_scrolling(900.0));
    state.note_scroll(950.0);
    assert!(state.on_quiesce(1050.0, &snapshot).is_some());
}

#[test]
fn go_to_section_moves_the_active_index_immediately() {
    let mut state = TimelineState::new(3);
    let snapshot = three_sections();
    state.on_sample(&snapshot);

    let request = state.go_to_section(2, 0.0, &snapshot).expect("snap");
    assert_eq!(state.active_section(), 2);
    assert_eq!(request.section, 2);
    // top 1900 + scroll 500 - (400 - 400)
    assert!((request.target_y - 2400.0).abs() < 1e-9);
    assert!(state.is_auto_scrolling(1.0));

    // A second jump 50ms later is a no-op; the first target stands.
    assert!(state.go_to_section(0, 50.0, &snapshot).is_none());
    assert_eq!(state.active_section(), 2);

    // 900ms on, the scheduler is idle again and quiesce snaps resume,
    // now targeting the manually chosen section.
    assert!(!state.is_auto_scrolling(900.0));
    state.note_scroll(900.0);
    let request = state.on_quiesce(1000.0, &snapshot).expect("snap");
    assert_eq!(request.section, 2);
}

#[test]
fn go_to_section_rejects_bad_input_without_locking() {
    let mut state = TimelineState::new(3);
    let snapshot = three_sections();
    state.on_sample(&snapshot);

    assert!(state.go_to_section(3, 0.0, &snapshot).is_none());
    assert_eq!(state.active_section(), 0);

    let degenerate = ViewportSnapshot {
        scroll_y: 0.0,
        viewport_height: 0.0,
        rects: vec![None, None, None],
    };
    assert!(state.go_to_section(1, 0.0, &degenerate).is_none());

    let missing = ViewportSnapshot {
        rects: vec![Some(rect(0.0, 800.0)), None, Some(rect(1900.0, 800.0))],
        ..three_sections()
    };
    assert!(state.go_to_section(1, 0.0, &missing).is_none());

    // None of the rejected calls burned the lock window.
    assert!(!state.is_auto_scrolling(1.0));
    assert!(state.go_to_section(2, 1.0, &snapshot).is_some());
}

#[test]
fn missing_active_rect_keeps_the_quiesce_trigger_unlocked() {
    let mut state = TimelineState::new(3);
    let snapshot = three_sections();
    state.on_sample(&snapshot);

    let missing_active = ViewportSnapshot {
        rects: vec![None, Some(rect(900.0, 800.0)), Some(rect(1900.0, 800.0))],
        ..three_sections()
    };
    state.note_scroll(0.0);
    assert!(state.on_quiesce(100.0, &missing_active).is_none());
    assert!(!state.is_auto_scrolling(101.0));

    // Once the section is back, the pending trigger still fires.
    assert!(state.on_quiesce(110.0, &snapshot).is_some());
}
