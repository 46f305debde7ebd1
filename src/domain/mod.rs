pub mod console;
pub mod models;
pub mod navigation;
pub mod submission;
