use thiserror::Error;

use folio_protocol::GalleryCommand;

use super::portfolio::PortfolioData;
use super::series::{SeriesData, SeriesName};
use crate::parsers::{PayloadError, parse_payload_str};
use crate::views::gallery::{GalleryOptions, render_gallery};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SwitchError {
    #[error("portfolio has no series")]
    Empty,
    #[error("unknown series: {0}")]
    UnknownSeries(String),
}

/// Proof of a switch request. Only the most recent ticket is current;
/// work finishing under an older one is stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchTicket {
    version: u64,
    series: SeriesName,
}

impl SwitchTicket {
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn series(&self) -> &SeriesName {
        &self.series
    }
}

/// Owns the portfolio for a page load and sequences series switches.
///
/// Every request bumps a version counter. Async follow-up work (waiting
/// for images, recomputing scroll geometry) checks its ticket with
/// [`SeriesSwitcher::is_current`] before touching the page, so overlapping
/// switches resolve to the last one requested.
#[derive(Debug, Clone)]
pub struct SeriesSwitcher {
    data: PortfolioData,
    active: SeriesName,
    version: u64,
}

impl SeriesSwitcher {
    pub fn new(data: PortfolioData) -> Result<Self, SwitchError> {
        let active = data
            .initial()
            .map(|(name, _)| name.clone())
            .ok_or(SwitchError::Empty)?;
        Ok(Self {
            data,
            active,
            version: 0,
        })
    }

    /// Build a switcher from the page's embedded payload text.
    pub fn from_payload(text: &str) -> Result<Self, PayloadError> {
        let data = parse_payload_str(text)?;
        Self::new(data).map_err(|_| PayloadError::NoSeries)
    }

    pub fn active(&self) -> &SeriesName {
        &self.active
    }

    pub fn active_series(&self) -> &SeriesData {
        // `active` is only ever set to a key of `data.series`.
        self.data.get(self.active.as_str()).unwrap_or(&EMPTY_SERIES)
    }

    /// Ticket for the series shown on page load.
    pub fn initial_ticket(&self) -> SwitchTicket {
        SwitchTicket {
            version: self.version,
            series: self.active.clone(),
        }
    }

    /// Ticket and commands for the page-load render.
    pub fn initial(&self, options: &GalleryOptions) -> (SwitchTicket, Vec<GalleryCommand>) {
        (
            self.initial_ticket(),
            render_gallery(self.active_series(), options),
        )
    }

    /// Record a switch to `name` and return its ticket.
    pub fn request(&mut self, name: &str) -> Result<SwitchTicket, SwitchError> {
        let (key, _) = self
            .data
            .series
            .get_key_value(name)
            .ok_or_else(|| SwitchError::UnknownSeries(name.to_string()))?;
        self.active = key.clone();
        self.version += 1;
        Ok(SwitchTicket {
            version: self.version,
            series: self.active.clone(),
        })
    }

    pub fn is_current(&self, ticket: &SwitchTicket) -> bool {
        ticket.version == self.version
    }

    /// Request a switch and render the newly active series.
    pub fn switch(
        &mut self,
        name: &str,
        options: &GalleryOptions,
    ) -> Result<(SwitchTicket, Vec<GalleryCommand>), SwitchError> {
        let ticket = self.request(name)?;
        let commands = render_gallery(self.active_series(), options);
        Ok((ticket, commands))
    }
}

static EMPTY_SERIES: SeriesData = SeriesData {
    horizontal: Vec::new(),
    rows: Vec::new(),
    vertical: Vec::new(),
};
