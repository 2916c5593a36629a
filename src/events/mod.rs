pub mod nav;
pub mod scroll;

pub use scroll::TimelineBinding;
