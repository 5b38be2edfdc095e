//! Debug visualization of collision bounds

pub mod draw;

pub use draw::{OutlineDrawList, OutlineId, OutlineSegment};
