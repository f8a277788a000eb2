pub(crate) mod convex;
pub(crate) mod rect;

pub use convex::ConvexPolyCmd;
pub use rect::RectCmd;
