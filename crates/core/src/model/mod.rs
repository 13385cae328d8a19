pub mod portfolio;
pub mod series;
pub mod switcher;

pub use portfolio::{DEFAULT_SERIES, PortfolioData};
pub use series::{SeriesData, SeriesName, usable_filename};
pub use switcher::{SeriesSwitcher, SwitchError, SwitchTicket};
