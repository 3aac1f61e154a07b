pub mod config;
pub mod csv_io;
pub mod rows;
pub mod scraping;

pub use rows::{Row, TitleOutcome, MISSING_TITLE};
