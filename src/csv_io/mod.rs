pub mod read_urls;
pub mod write_rows;

pub use read_urls::read_urls;
pub use write_rows::write_rows;
