pub mod console;
pub mod footer;
pub mod header;
pub mod numbers;
pub mod page_view;
