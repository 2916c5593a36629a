/// Timeline tuning constants.
///
/// These constants express intended visual behavior (fade rates, parallax
/// travel, snap timing) and keep magic numbers out of the code.
// Visibility band margin in CSS pixels. A section counts as visible when it
// overlaps the viewport shrunk by this margin at both ends.
pub const VISIBILITY_OFFSET_PX: f64 = 250.0;

// Snap timing (milliseconds)
pub const SNAP_DEBOUNCE_MS: f64 = 100.0; // scroll must pause this long
pub const SNAP_LOCK_MS: f64 = 800.0; // exceeds the smooth-scroll animation

// Year badge
pub const BADGE_FADE_RATE: f64 = 1.5;
pub const BADGE_TRAVEL_PX: f64 = 100.0;

// Parallax image. Images counter-scroll and never fade out fully: opacity
// stays within [floor, floor + span].
pub const IMAGE_TRAVEL_PX: f64 = 120.0;
pub const IMAGE_SCALE_RATE: f64 = 0.1;
pub const IMAGE_FADE_RATE: f64 = 2.0;
pub const IMAGE_HIDDEN_FADE: f64 = 0.3;
pub const IMAGE_OPACITY_FLOOR: f64 = 0.8;
pub const IMAGE_OPACITY_SPAN: f64 = 0.2;

// Content block. Non-active sections fade faster and are dampened on top.
pub const CONTENT_FADE_RATE_ACTIVE: f64 = 1.2;
pub const CONTENT_FADE_RATE_INACTIVE: f64 = 2.5;
pub const CONTENT_INACTIVE_DAMPEN: f64 = 0.6;
pub const CONTENT_TRAVEL_PX: f64 = 60.0;

// Header only hides once the page is scrolled past this offset.
pub const NAVBAR_HIDE_MIN_Y: f64 = 100.0;
