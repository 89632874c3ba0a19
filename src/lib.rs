pub mod ai;
pub mod assistant;
pub mod config;
pub mod demo;
pub mod settings;
pub mod timeline;
pub mod toast;
pub mod timer;
pub mod types;
pub mod ui;
pub mod views;
