pub mod model;
pub mod motion;
pub mod parsers;
pub mod views;
