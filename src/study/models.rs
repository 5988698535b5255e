//! Request and response shapes for the study API

use serde_json::{Map, Value};

use super::error::StudyError;

/// The four things the study API can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Summary,
    Flashcards,
    Qa,
    Quiz,
}

impl Capability {
    pub const ALL: [Capability; 4] = [Self::Summary, Self::Flashcards, Self::Qa, Self::Quiz];

    /// Endpoint path relative to the base URL
    pub fn path(&self) -> &'static str {
        match self {
            Self::Summary => "/summary",
            Self::Flashcards => "/flashcards",
            Self::Qa => "/qa",
            Self::Quiz => "/quiz",
        }
    }

    /// JSON field carrying the result
    pub fn response_field(&self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::Flashcards => "flashcards",
            Self::Qa => "answer",
            Self::Quiz => "quiz",
        }
    }

    /// Whether the result is a blank-line separated batch of cards
    pub fn renders_cards(&self) -> bool {
        matches!(self, Self::Flashcards | Self::Quiz)
    }

    /// Human-readable name for logs and loading hints
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::Flashcards => "flashcards",
            Self::Qa => "answer",
            Self::Quiz => "quiz",
        }
    }
}

/// One call to the study API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyRequest {
    /// Which endpoint to call
    pub capability: Capability,
    /// The note text, sent as the `text` form field
    pub text: String,
    /// Sent as the `question` form field, Q&A only
    pub question: Option<String>,
}

impl StudyRequest {
    pub fn summary(text: impl Into<String>) -> Self {
        Self { capability: Capability::Summary, text: text.into(), question: None }
    }

    pub fn flashcards(text: impl Into<String>) -> Self {
        Self { capability: Capability::Flashcards, text: text.into(), question: None }
    }

    pub fn quiz(text: impl Into<String>) -> Self {
        Self { capability: Capability::Quiz, text: text.into(), question: None }
    }

    pub fn question(text: impl Into<String>, question: impl Into<String>) -> Self {
        Self { capability: Capability::Qa, text: text.into(), question: Some(question.into()) }
    }

    /// Form fields in the order they are appended
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![("text", self.text.clone())];
        if let Some(question) = &self.question {
            fields.push(("question", question.clone()));
        }
        fields
    }
}

/// What ends up in an output area
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    /// Plain text, written verbatim
    Text(String),
    /// One entry per card, replacing any earlier cards
    Cards(Vec<String>),
    /// A cosmetic message shown in place of a failure
    Fallback(String),
}

impl Rendered {
    /// Text of every rendered element, joined by blank lines
    pub fn to_plain_text(&self) -> String {
        match self {
            Rendered::Text(text) | Rendered::Fallback(text) => text.clone(),
            Rendered::Cards(cards) => cards.join("\n\n"),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Rendered::Fallback(_))
    }
}

/// Pull the capability's field out of a JSON response body
pub fn extract_field(capability: Capability, body: &str) -> Result<String, StudyError> {
    let field = capability.response_field();
    let envelope: Map<String, Value> = serde_json::from_str(body)?;

    match envelope.get(field) {
        Some(Value::String(value)) if !value.is_empty() => Ok(value.clone()),
        _ => Err(StudyError::MissingField(field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_and_fields() {
        assert_eq!(Capability::Summary.path(), "/summary");
        assert_eq!(Capability::Qa.path(), "/qa");
        assert_eq!(Capability::Qa.response_field(), "answer");
        assert_eq!(Capability::Quiz.response_field(), "quiz");
    }

    #[test]
    fn only_flashcards_and_quiz_render_cards() {
        assert!(Capability::Flashcards.renders_cards());
        assert!(Capability::Quiz.renders_cards());
        assert!(!Capability::Summary.renders_cards());
        assert!(!Capability::Qa.renders_cards());
    }

    #[test]
    fn question_request_carries_both_fields() {
        let request = StudyRequest::question("notes", "why?");
        assert_eq!(
            request.form_fields(),
            vec![("text", "notes".to_string()), ("question", "why?".to_string())]
        );
        assert_eq!(StudyRequest::summary("notes").form_fields().len(), 1);
    }

    #[test]
    fn extract_present_field() {
        let value = extract_field(Capability::Summary, r#"{"summary": "X"}"#).unwrap();
        assert_eq!(value, "X");
    }

    #[test]
    fn extract_empty_field_fails() {
        let err = extract_field(Capability::Summary, r#"{"summary": ""}"#).unwrap_err();
        assert!(matches!(err, StudyError::MissingField("summary")));
    }

    #[test]
    fn extract_absent_field_fails() {
        let err = extract_field(Capability::Qa, "{}").unwrap_err();
        assert!(matches!(err, StudyError::MissingField("answer")));
    }

    #[test]
    fn extract_non_string_field_fails() {
        let err = extract_field(Capability::Quiz, r#"{"quiz": null}"#).unwrap_err();
        assert!(matches!(err, StudyError::MissingField("quiz")));
    }

    #[test]
    fn extract_from_non_json_fails() {
        let err = extract_field(Capability::Summary, "Internal Server Error").unwrap_err();
        assert!(matches!(err, StudyError::JsonError(_)));
    }
}
