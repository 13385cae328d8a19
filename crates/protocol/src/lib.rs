pub mod class;
pub mod commands;
pub mod types;

pub use class::ClassToken;
pub use commands::{Figure, GalleryCommand};
pub use types::{Container, Decoding, FetchPriority, Loading, Orientation, Viewport};
