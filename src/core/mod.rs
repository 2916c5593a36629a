pub mod constants;
pub mod contact;
pub mod geometry;
pub mod timeline;
pub mod transform;

pub use geometry::*;
pub use timeline::*;
pub use transform::*;
