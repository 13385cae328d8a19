use serde::{Deserialize, Serialize};

use crate::types::{Container, Decoding, FetchPriority, Loading, Orientation};

/// Everything a renderer needs to create one image element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    /// 1-based position across the whole gallery, horizontal first.
    pub index: usize,
    pub src: String,
    pub alt: String,
    pub orientation: Orientation,
    pub loading: Loading,
    pub decoding: Decoding,
    pub fetch_priority: FetchPriority,
}

/// A single, stateless gallery instruction.
///
/// Rendering a series yields a `Vec<GalleryCommand>`. A renderer applies
/// the list in order and needs nothing beyond what the commands hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GalleryCommand {
    /// Remove every child of a container.
    Clear { target: Container },

    /// Open a grid row. Figures until the matching `EndRow` belong to it.
    BeginRow { row: usize, len: usize },

    /// Append an image. Inside a row it goes into the row, otherwise
    /// directly into `target`.
    Figure { target: Container, figure: Figure },

    /// Close the current row and append it to the grid.
    EndRow,
}

impl GalleryCommand {
    pub fn figure(&self) -> Option<&Figure> {
        match self {
            GalleryCommand::Figure { figure, .. } => Some(figure),
            _ => None,
        }
    }
}
