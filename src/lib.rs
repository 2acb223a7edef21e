pub mod app;
pub mod config;
pub mod core;
pub mod features;
pub mod notifications;
pub mod pages;

pub use app::App;
