pub mod app;
pub mod compose;
pub mod config;
pub mod logging;
