// Viewport geometry sampled once per scroll/resize event.
//
// These types intentionally avoid referencing platform-specific APIs and are
// suitable for use on both native and web targets. The web frontend fills a
// `ViewportSnapshot` from live DOM rects and feeds it to the timeline state;
// tests build snapshots by hand.

use super::constants::NAVBAR_HIDE_MIN_Y;

/// Bounding box of one timeline section, in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionRect {
    pub top: f64,
    pub height: f64,
}

impl SectionRect {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Vertical midpoint in viewport coordinates.
    pub fn center(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Everything one sample of the viewport needs: scroll offset, window height,
/// and each section's rect (`None` while a section is not mounted).
///
/// A fresh snapshot fully supersedes the prior one; nothing here is cached
/// across events.
#[derive(Clone, Debug, Default)]
pub struct ViewportSnapshot {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub rects: Vec<Option<SectionRect>>,
}

impl ViewportSnapshot {
    /// A zero or negative window height means geometry reads failed; callers
    /// keep previous styles rather than acting on such a sample.
    pub fn is_degenerate(&self) -> bool {
        !(self.viewport_height > 0.0)
    }
}

/// Visibility with a symmetric margin: the rect must overlap the viewport
/// shrunk by `offset` at both ends. A larger `offset` strictly narrows the
/// visible band.
pub fn is_in_viewport(rect: SectionRect, viewport_height: f64, offset: f64) -> bool {
    rect.top <= viewport_height - offset && rect.bottom() >= offset
}

/// Index of the section whose center is nearest the viewport center.
///
/// Exact ties keep the first-encountered (lowest) index. Sections without a
/// rect are skipped; with no rects at all this falls back to 0.
pub fn active_section(rects: &[Option<SectionRect>], viewport_height: f64) -> usize {
    let viewport_center = viewport_height / 2.0;
    let mut closest = 0usize;
    let mut closest_distance = f64::INFINITY;

    for (index, rect) in rects.iter().enumerate() {
        if let Some(rect) = rect {
            let distance = (rect.center() - viewport_center).abs();
            if distance < closest_distance {
                closest_distance = distance;
                closest = index;
            }
        }
    }
    closest
}

/// Absolute document offset that centers `rect` in the viewport.
pub fn snap_target_y(rect: SectionRect, scroll_y: f64, viewport_height: f64) -> f64 {
    rect.top + scroll_y - (viewport_height / 2.0 - rect.height / 2.0)
}

/// The header stays visible while scrolling up or near the top of the page.
pub fn navbar_visible(scroll_y: f64, last_scroll_y: f64) -> bool {
    !(scroll_y > last_scroll_y && scroll_y > NAVBAR_HIDE_MIN_Y)
}
