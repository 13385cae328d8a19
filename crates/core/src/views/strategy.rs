use folio_protocol::{Decoding, FetchPriority, Loading, Orientation};

/// Image attributes chosen for one figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadHints {
    pub loading: Loading,
    pub decoding: Decoding,
    pub fetch_priority: FetchPriority,
}

/// How the browser should prioritise gallery images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStrategy {
    /// Filmstrip images eager, grid images lazy. Used on page load.
    #[default]
    Standard,
    /// The first `eager` figures (in render order) load eagerly and decode
    /// synchronously, the first `high_priority` of those are fetched with
    /// high priority, the rest are lazy. Used after a series switch so the
    /// visible part of the new series paints quickly.
    Prioritized { eager: usize, high_priority: usize },
}

impl LoadStrategy {
    pub const SERIES_SWITCH: Self = LoadStrategy::Prioritized {
        eager: 12,
        high_priority: 4,
    };

    /// Hints for the figure at `position` (0-based, render order).
    pub fn hints(self, position: usize, orientation: Orientation) -> LoadHints {
        match self {
            LoadStrategy::Standard => LoadHints {
                loading: match orientation {
                    Orientation::Horizontal => Loading::Eager,
                    Orientation::Vertical => Loading::Lazy,
                },
                decoding: Decoding::Auto,
                fetch_priority: FetchPriority::Auto,
            },
            LoadStrategy::Prioritized {
                eager,
                high_priority,
            } => {
                if position < eager {
                    LoadHints {
                        loading: Loading::Eager,
                        decoding: Decoding::Sync,
                        fetch_priority: if position < high_priority {
                            FetchPriority::High
                        } else {
                            FetchPriority::Auto
                        },
                    }
                } else {
                    LoadHints {
                        loading: Loading::Lazy,
                        decoding: Decoding::Async,
                        fetch_priority: FetchPriority::Auto,
                    }
                }
            }
        }
    }
}
