//! Studymate - a terminal study assistant
//!
//! Paste or select your notes, then turn them into a summary, flashcards
//! or a quiz, ask questions about them, or save them as a PDF. Generation
//! is delegated to a study API reached over HTTP.

pub mod app;
pub mod config;
pub mod export;
pub mod study;
pub mod theme;
pub mod ui;
pub mod view;

pub use app::App;
pub use config::Config;
pub use theme::Theme;
