//! UI layer: the single-page console and its toast overlay.

pub mod app;
pub mod toasts;

pub use app::ConsoleApp;
