//! Concrete shapes that own a bounding polygon
//!
//! Each shape keeps the state an external renderer needs (rect, text,
//! center) and derives its outline from it in [`Updatable::do_update`].
//! Collision code sees them only through [`Polygon`](crate::physics::Polygon).

pub mod updatable;
pub mod image;
pub mod text;
pub mod circle;

pub use updatable::{update_all, Updatable, UpdateFlag};
pub use image::ImageShape;
pub use text::{MonospaceMetrics, TextMetrics, TextShape};
pub use circle::CircleShape;
