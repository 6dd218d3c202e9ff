pub mod error_banner;
pub mod page_header;
