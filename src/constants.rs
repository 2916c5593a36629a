/// DOM hooks the frontend binds to.
///
/// Class names for the timeline match the markup in `web/index.html`; the
/// coordinator only ever sees elements through these selectors.
// Timeline section and its role-tagged sub-elements
pub const TIMELINE_SECTION_CLASS: &str = "timeline-section";
pub const YEAR_BADGE_CLASS: &str = "year-badge";
pub const PARALLAX_IMAGE_CLASS: &str = "parallax-image";
pub const CONTENT_BLOCK_CLASS: &str = "content-block";

// Navigation dots, one per section
pub const NAV_DOT_CLASS: &str = "timeline-dot";
pub const NAV_DOT_ACTIVE_CLASS: &str = "active";

// Site header (hide-on-scroll)
pub const SITE_HEADER_ID: &str = "site-header";
pub const HEADER_HIDDEN_CLASS: &str = "header-hidden";

// Contact form
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const CONTACT_STATUS_ID: &str = "contact-status";
pub const CONTACT_FIRST_NAME_ID: &str = "contact-first-name";
pub const CONTACT_LAST_NAME_ID: &str = "contact-last-name";
pub const CONTACT_EMAIL_ID: &str = "contact-email";
pub const CONTACT_SUBJECT_ID: &str = "contact-subject";
pub const CONTACT_MESSAGE_ID: &str = "contact-message";
pub const CONTACT_DATE_ID: &str = "contact-date";
pub const CONTACT_TIME_ID: &str = "contact-time";
pub const CONTACT_ENDPOINT: &str = "/api/contact";
