pub mod app;
pub mod chart;
pub mod config;
pub mod core;
pub mod errors;
pub mod extensions;
pub mod logging;
pub mod schedule;
pub mod theme;
pub mod ui;
