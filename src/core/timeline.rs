// Scroll-synchronized timeline state.
//
// `TimelineState` folds viewport samples into per-section visibility, the
// active section, and style updates; `SnapScheduler` decides when a
// programmatic scroll may recentre the active section. Both are
// time-parametrized in absolute milliseconds so the state machine runs
// unchanged under native tests with a synthetic clock.

use super::constants::{SNAP_DEBOUNCE_MS, SNAP_LOCK_MS, VISIBILITY_OFFSET_PX};
use super::geometry::{active_section, is_in_viewport, snap_target_y, ViewportSnapshot};
use super::transform::{compute_styles, SectionStyles};

/// One programmatic smooth scroll the host should issue.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapRequest {
    pub section: usize,
    pub target_y: f64,
}

/// Styles to apply to one section's sub-elements.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionUpdate {
    pub index: usize,
    pub styles: SectionStyles,
}

/// Idle/Locked snap state machine.
///
/// A scroll burst re-arms the quiesce deadline on every event, so only the
/// last event survives to fire. Once a snap is issued the scheduler locks for
/// a fixed window; the underlying smooth scroll has no completion callback,
/// so time-boxing is the only synchronization available. While locked, every
/// trigger is dropped silently.
#[derive(Clone, Copy, Debug, Default)]
pub struct SnapScheduler {
    quiesce_deadline_ms: Option<f64>,
    locked_until_ms: Option<f64>,
}

impl SnapScheduler {
    pub fn note_scroll(&mut self, now_ms: f64) {
        self.quiesce_deadline_ms = Some(now_ms + SNAP_DEBOUNCE_MS);
    }

    pub fn is_locked(&self, now_ms: f64) -> bool {
        matches!(self.locked_until_ms, Some(until) if now_ms < until)
    }

    fn lock(&mut self, now_ms: f64) {
        self.locked_until_ms = Some(now_ms + SNAP_LOCK_MS);
        self.quiesce_deadline_ms = None;
    }

    /// Consume the pending quiesce trigger. True exactly when a deadline was
    /// armed, has elapsed, and no lock is active; the scheduler then locks.
    pub fn try_fire(&mut self, now_ms: f64) -> bool {
        let Some(deadline) = self.quiesce_deadline_ms else {
            return false;
        };
        if now_ms < deadline {
            // A later scroll event pushed the deadline out; keep waiting.
            return false;
        }
        self.quiesce_deadline_ms = None;
        if self.is_locked(now_ms) {
            return false;
        }
        self.lock(now_ms);
        true
    }

    /// Manual navigation trigger; locks on success.
    pub fn try_go_to(&mut self, now_ms: f64) -> bool {
        if self.is_locked(now_ms) {
            return false;
        }
        self.lock(now_ms);
        true
    }
}

/// The only state that persists between events: per-section visibility, the
/// active section index, and the snap scheduler. Exclusively owned by the
/// coordinator; the host only reads it through the accessors.
#[derive(Clone, Debug)]
pub struct TimelineState {
    visible: Vec<bool>,
    active: usize,
    scheduler: SnapScheduler,
}

impl TimelineState {
    /// All sections start invisible with section 0 active and no lock held.
    pub fn new(section_count: usize) -> Self {
        Self {
            visible: vec![false; section_count],
            active: 0,
            scheduler: SnapScheduler::default(),
        }
    }

    pub fn section_count(&self) -> usize {
        self.visible.len()
    }

    pub fn active_section(&self) -> usize {
        self.active
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    pub fn is_auto_scrolling(&self, now_ms: f64) -> bool {
        self.scheduler.is_locked(now_ms)
    }

    /// Fold one viewport sample into the state and emit style updates.
    ///
    /// Degenerate samples return no updates and change nothing; sections
    /// without a rect are skipped for this sample only.
    pub fn on_sample(&mut self, snapshot: &ViewportSnapshot) -> Vec<SectionUpdate> {
        if snapshot.is_degenerate() {
            return Vec::new();
        }

        for (index, rect) in snapshot.rects.iter().enumerate().take(self.visible.len()) {
            if let Some(rect) = rect {
                self.visible[index] =
                    is_in_viewport(*rect, snapshot.viewport_height, VISIBILITY_OFFSET_PX);
            }
        }
        self.active = active_section(&snapshot.rects, snapshot.viewport_height);

        let mut updates = Vec::with_capacity(self.visible.len());
        for (index, rect) in snapshot.rects.iter().enumerate().take(self.visible.len()) {
            let Some(rect) = rect else { continue };
            updates.push(SectionUpdate {
                index,
                styles: compute_styles(
                    *rect,
                    snapshot.viewport_height,
                    self.visible[index],
                    index == self.active,
                ),
            });
        }
        updates
    }

    /// Record scroll activity; re-arms the quiesce deadline.
    pub fn note_scroll(&mut self, now_ms: f64) {
        self.scheduler.note_scroll(now_ms);
    }

    /// The debounce timer fired: snap to the active section if allowed.
    pub fn on_quiesce(&mut self, now_ms: f64, snapshot: &ViewportSnapshot) -> Option<SnapRequest> {
        if snapshot.is_degenerate() {
            return None;
        }
        // Resolve the rect before consuming the trigger so a missing section
        // does not burn the lock window.
        let rect = snapshot.rects.get(self.active).copied().flatten()?;
        if !self.scheduler.try_fire(now_ms) {
            return None;
        }
        Some(SnapRequest {
            section: self.active,
            target_y: snap_target_y(rect, snapshot.scroll_y, snapshot.viewport_height),
        })
    }

    /// Navigation entry point. Silent no-op for an out-of-range index, a
    /// missing section, or while locked; otherwise the active index moves
    /// immediately and a snap is issued.
    pub fn go_to_section(
        &mut self,
        index: usize,
        now_ms: f64,
        snapshot: &ViewportSnapshot,
    ) -> Option<SnapRequest> {
        if index >= self.visible.len() || snapshot.is_degenerate() {
            return None;
        }
        let rect = snapshot.rects.get(index).copied().flatten()?;
        if !self.scheduler.try_go_to(now_ms) {
            return None;
        }
        self.active = index;
        Some(SnapRequest {
            section: index,
            target_y: snap_target_y(rect, snapshot.scroll_y, snapshot.viewport_height),
        })
    }
}
