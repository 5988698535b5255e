//! Request issuance with fallback rendering

use std::sync::Arc;

use super::cards::split_cards;
use super::client::StudyClient;
use super::fallback::{FallbackPolicy, RandomFallback};
use super::models::{Capability, Rendered, StudyRequest};

/// Somewhere a capability's result can be written
pub trait OutputSink {
    /// Replace whatever was shown before
    fn set_content(&mut self, content: Rendered);
}

impl OutputSink for Option<Rendered> {
    fn set_content(&mut self, content: Rendered) {
        *self = Some(content);
    }
}

/// Study API client paired with a fallback policy
///
/// Every call resolves to something renderable. Failures are logged and
/// replaced by a fallback message; they are never returned to the caller.
#[derive(Clone)]
pub struct StudyAid {
    client: StudyClient,
    fallback: Arc<dyn FallbackPolicy>,
}

impl StudyAid {
    /// Create with random fallback messages
    pub fn new(client: StudyClient) -> Self {
        Self::with_fallback(client, Arc::new(RandomFallback))
    }

    pub fn with_fallback(client: StudyClient, fallback: Arc<dyn FallbackPolicy>) -> Self {
        Self { client, fallback }
    }

    pub fn client(&self) -> &StudyClient {
        &self.client
    }

    /// Issue one request and turn the outcome into renderable content
    pub async fn run(&self, request: &StudyRequest) -> Rendered {
        match self.client.fetch(request).await {
            Ok(value) => render(request.capability, &value),
            Err(e) => {
                tracing::warn!(
                    capability = request.capability.display_name(),
                    error = %e,
                    "study request failed"
                );
                Rendered::Fallback(self.fallback.pick().to_string())
            }
        }
    }

    /// Issue one request and write the outcome into a sink
    pub async fn run_into(&self, request: &StudyRequest, sink: &mut impl OutputSink) {
        let content = self.run(request).await;
        sink.set_content(content);
    }

    pub async fn generate_summary(&self, text: &str) -> Rendered {
        self.run(&StudyRequest::summary(text)).await
    }

    pub async fn generate_flashcards(&self, text: &str) -> Rendered {
        self.run(&StudyRequest::flashcards(text)).await
    }

    pub async fn ask_question(&self, text: &str, question: &str) -> Rendered {
        self.run(&StudyRequest::question(text, question)).await
    }

    pub async fn generate_quiz(&self, text: &str) -> Rendered {
        self.run(&StudyRequest::quiz(text)).await
    }
}

/// Shape a successful result for its output area
pub fn render(capability: Capability, value: &str) -> Rendered {
    if capability.renders_cards() {
        Rendered::Cards(split_cards(value))
    } else {
        Rendered::Text(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::study::fallback::{FALLBACK_MESSAGES, FixedFallback};

    #[test]
    fn render_text_is_verbatim() {
        assert_eq!(
            render(Capability::Summary, "  five points\n"),
            Rendered::Text("  five points\n".to_string())
        );
    }

    #[test]
    fn render_batches_as_cards() {
        assert_eq!(
            render(Capability::Quiz, "A\n\nB\n\n\n\n"),
            Rendered::Cards(vec!["A".to_string(), "B".to_string()])
        );
    }

    #[test]
    fn option_sink_keeps_last_write() {
        let mut sink: Option<Rendered> = None;
        sink.set_content(Rendered::Text("first".to_string()));
        sink.set_content(Rendered::Text("second".to_string()));
        assert_eq!(sink, Some(Rendered::Text("second".to_string())));
    }

    #[tokio::test]
    async fn unreachable_service_falls_back() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client = StudyClient::new(format!("http://127.0.0.1:{port}")).unwrap();
        let aid = StudyAid::with_fallback(client, Arc::new(FixedFallback(3)));

        let rendered = aid.generate_summary("notes").await;
        assert_eq!(rendered, Rendered::Fallback(FALLBACK_MESSAGES[3].to_string()));
    }
}
