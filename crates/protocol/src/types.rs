use serde::{Deserialize, Serialize};

/// Visible browser viewport in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// The two page containers a gallery is rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Container {
    /// The horizontally scrolling filmstrip.
    Track,
    /// The wrapped grid of rows below the filmstrip.
    Grid,
}

/// Which source list a figure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Maps to the `loading` attribute of an image element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Loading {
    Eager,
    Lazy,
}

impl Loading {
    pub fn as_attr(self) -> &'static str {
        match self {
            Loading::Eager => "eager",
            Loading::Lazy => "lazy",
        }
    }
}

/// Maps to the `decoding` attribute of an image element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decoding {
    Sync,
    Async,
    Auto,
}

impl Decoding {
    pub fn as_attr(self) -> &'static str {
        match self {
            Decoding::Sync => "sync",
            Decoding::Async => "async",
            Decoding::Auto => "auto",
        }
    }
}

/// Maps to the `fetchpriority` attribute of an image element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchPriority {
    High,
    Auto,
}

impl FetchPriority {
    pub fn as_attr(self) -> &'static str {
        match self {
            FetchPriority::High => "high",
            FetchPriority::Auto => "auto",
        }
    }
}
