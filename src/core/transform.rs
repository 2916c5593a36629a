// Parallax style computation for the badge, image, and content block of a
// timeline section.
//
// Every function here is pure in `(d, visible, active)` where `d` is the
// signed, viewport-height-normalized distance of the section center from the
// viewport center (positive once the section has risen above it). That keeps
// each sub-element independently testable without a live DOM.

use super::constants::*;
use super::geometry::SectionRect;

/// Inline style values the rendering layer applies to one element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementStyle {
    pub opacity: f64,
    pub translate_y: f64,
    pub scale: Option<f64>,
}

/// Styles for all three sub-elements of a section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionStyles {
    pub badge: ElementStyle,
    pub image: ElementStyle,
    pub content: ElementStyle,
}

/// Signed distance from the viewport center, normalized by viewport height.
pub fn distance_from_center(rect: SectionRect, viewport_height: f64) -> f64 {
    (viewport_height / 2.0 - rect.center()) / viewport_height
}

fn clamp01(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}

/// Year badge: fades with distance, travels with the scroll direction.
pub fn badge_style(d: f64, visible: bool) -> ElementStyle {
    let opacity = if visible {
        clamp01(1.0 - d.abs() * BADGE_FADE_RATE)
    } else {
        0.0
    };
    ElementStyle {
        opacity,
        translate_y: d * BADGE_TRAVEL_PX,
        scale: None,
    }
}

/// Image: counter-scrolls (note the `-d`), grows slightly off-center, and
/// keeps a 0.8 opacity floor so it never fully disappears.
pub fn image_style(d: f64, visible: bool) -> ElementStyle {
    let fade = if visible {
        clamp01(1.0 - d.abs() * IMAGE_FADE_RATE)
    } else {
        IMAGE_HIDDEN_FADE
    };
    ElementStyle {
        opacity: IMAGE_OPACITY_FLOOR + fade * IMAGE_OPACITY_SPAN,
        translate_y: -d * IMAGE_TRAVEL_PX,
        scale: Some(1.0 + d.abs() * IMAGE_SCALE_RATE),
    }
}

/// Content block: the active section fades gently; the rest fade faster and
/// are dampened on top of that.
pub fn content_style(d: f64, visible: bool, active: bool) -> ElementStyle {
    let rate = if active {
        CONTENT_FADE_RATE_ACTIVE
    } else {
        CONTENT_FADE_RATE_INACTIVE
    };
    let base = if visible {
        clamp01(1.0 - d.abs() * rate)
    } else {
        0.0
    };
    let opacity = if active {
        base
    } else {
        base * CONTENT_INACTIVE_DAMPEN
    };
    ElementStyle {
        opacity,
        translate_y: d * CONTENT_TRAVEL_PX,
        scale: None,
    }
}

/// All three sub-element styles for one section at one sample.
pub fn compute_styles(
    rect: SectionRect,
    viewport_height: f64,
    visible: bool,
    active: bool,
) -> SectionStyles {
    let d = distance_from_center(rect, viewport_height);
    SectionStyles {
        badge: badge_style(d, visible),
        image: image_style(d, visible),
        content: content_style(d, visible, active),
    }
}
