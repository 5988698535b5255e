//! Error types for view-state transitions

use thiserror::Error;

use super::ids::TabId;

/// Validation failures raised as a blocking alert
///
/// The `Display` text is exactly what the user sees in the alert overlay.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateError {
    /// A gated section or tab was requested before notes were supplied
    #[error("Please upload your notes first!")]
    NotesRequired,

    /// Unlock was attempted with neither text nor a file
    #[error("Please paste notes or upload a file!")]
    NothingToUpload,

    /// Q&A was requested with an empty question
    #[error("Please type a question first!")]
    QuestionRequired,
}

/// Errors detected while wiring the view together
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WiringError {
    /// Two selector controls target the same tab
    #[error("Duplicate tab selector for '{0}'")]
    DuplicateSelector(TabId),
}
