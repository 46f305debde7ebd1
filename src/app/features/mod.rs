pub mod admin;
pub mod console;
pub mod handler;
pub mod navigation;
pub mod ui;
