pub mod capability;
pub mod cursor;
pub mod pinned;

pub use capability::{DisabledReason, MotionCapability};
pub use cursor::{cursor_shade, cursor_transform, shade_css};
pub use pinned::{PinnedLayout, translate_x};
