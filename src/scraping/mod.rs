pub mod extract_title;
pub mod fetch_page;
pub mod resolve_title;

pub use extract_title::extract_title;
pub use fetch_page::fetch_page;
pub use resolve_title::resolve_title;
