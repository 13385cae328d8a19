pub mod gallery;
pub mod rows;
pub mod sink;
pub mod strategy;

pub use gallery::{GalleryOptions, render_gallery};
pub use rows::{LEFTOVER_ROW_LEN, partition_rows};
pub use sink::{GallerySink, apply_commands};
pub use strategy::{LoadHints, LoadStrategy};
