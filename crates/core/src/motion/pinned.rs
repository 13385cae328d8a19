use folio_protocol::Viewport;

/// Geometry of the pinned horizontal section.
///
/// The section is made exactly tall enough that scrolling through it
/// vertically covers the distance the track has to travel sideways.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinnedLayout {
    pub track_width: f64,
    pub viewport: Viewport,
    /// Rendered height of the sticky wrapper; the viewport height when the
    /// page has none.
    pub sticky_height: f64,
}

impl PinnedLayout {
    pub fn new(track_width: f64, viewport: Viewport, sticky_height: Option<f64>) -> Self {
        Self {
            track_width,
            viewport,
            sticky_height: sticky_height.unwrap_or(viewport.height),
        }
    }

    /// How far the track overflows the viewport.
    pub fn scroll_length(&self) -> f64 {
        (self.track_width - self.viewport.width).max(0.0)
    }

    /// Height to give the section element.
    pub fn section_height(&self) -> f64 {
        self.scroll_length() + self.sticky_height
    }

    /// Fraction of the pinned range scrolled through, given the section's
    /// current top (relative to the viewport) and rendered height.
    ///
    /// `None` when the section has no vertical room to scroll.
    pub fn progress(&self, section_top: f64, section_height: f64) -> Option<f64> {
        let scroll_distance = section_height - self.sticky_height;
        if scroll_distance <= 0.0 {
            return None;
        }
        Some((-section_top / scroll_distance).clamp(0.0, 1.0))
    }

    /// Horizontal offset to apply to the track, or `None` to leave it alone.
    pub fn track_offset(&self, section_top: f64, section_height: f64) -> Option<f64> {
        self.progress(section_top, section_height)
            .map(|progress| -progress * self.scroll_length())
    }
}

/// CSS transform for a track offset. Negative zero is printed as `0`.
pub fn translate_x(offset: f64) -> String {
    format!("translateX({}px)", offset + 0.0)
}
