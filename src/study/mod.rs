//! Remote study-aid integration
//!
//! Posts the note text to the study API, unpacks the one JSON field each
//! endpoint answers with, and turns any failure into a friendly fallback
//! message instead of an error.

pub mod cards;
pub mod client;
pub mod error;
pub mod fallback;
pub mod models;
pub mod service;

// Re-export commonly used types
pub use cards::split_cards;
pub use client::StudyClient;
pub use error::StudyError;
pub use fallback::{FALLBACK_MESSAGES, FallbackPolicy, FixedFallback, RandomFallback};
pub use models::{Capability, Rendered, StudyRequest};
pub use service::{OutputSink, StudyAid};
