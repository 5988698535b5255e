//! View-state controller
//!
//! Owns the upload gate, the active top-level section and the active tab.
//! Rendering reads from here; nothing in this module touches the terminal.

pub mod controller;
pub mod error;
pub mod ids;

pub use controller::{SidebarEntry, TabSelector, ViewState, require_question};
pub use error::{GateError, WiringError};
pub use ids::{SectionId, TabId};
