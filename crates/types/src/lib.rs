pub mod color;
pub mod geometry;
pub mod ids;
pub mod permit;

pub use color::Color;
pub use geometry::{Point, Rect, Size};
pub use ids::{CategoryName, PermitNumber};
pub use permit::{Item, Permit, PermitError, SIGNATURE_CATEGORY};
