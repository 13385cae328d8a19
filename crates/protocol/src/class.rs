use serde::{Deserialize, Serialize};

/// Semantic class tokens shared between the layout core and the page's
/// stylesheet. Renderers resolve them with [`ClassToken::class_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassToken {
    // Gallery
    TrackFigure,
    GridRow,
    GridFigure,

    // Series buttons
    ActiveSeries,

    /// Set on the root element when the pinned scroll effect is off.
    ReduceMotion,
}

impl ClassToken {
    pub fn class_name(self) -> &'static str {
        match self {
            ClassToken::TrackFigure => "h-item",
            ClassToken::GridRow => "v-row",
            ClassToken::GridFigure => "v-item",
            ClassToken::ActiveSeries => "is-active",
            ClassToken::ReduceMotion => "reduce-motion",
        }
    }
}
