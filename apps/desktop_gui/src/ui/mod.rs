//! UI layer: app shell, page renderers, and display formatting helpers.

pub mod app;
pub mod format;
pub mod pages;

pub use app::SiteApp;
