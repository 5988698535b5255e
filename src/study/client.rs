//! HTTP client for the study API

use reqwest::Client;
use reqwest::multipart::Form;

use super::error::StudyError;
use super::models::{StudyRequest, extract_field};

/// Study API client
///
/// No timeout is configured: a request stays pending until the server
/// answers or the connection drops.
#[derive(Debug, Clone)]
pub struct StudyClient {
    /// HTTP client
    client: Client,
    /// Base URL without a trailing slash
    base_url: String,
}

impl StudyClient {
    /// Create a client for the given base URL
    pub fn new(base_url: impl Into<String>) -> Result<Self, StudyError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(StudyError::InvalidBaseUrl(base_url));
        }

        let client = Client::builder()
            .user_agent(concat!("studymate/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for a request's endpoint
    pub fn endpoint(&self, request: &StudyRequest) -> String {
        format!("{}{}", self.base_url, request.capability.path())
    }

    /// Post the request as a multipart form and return the result field
    pub async fn fetch(&self, request: &StudyRequest) -> Result<String, StudyError> {
        let form = request
            .form_fields()
            .into_iter()
            .fold(Form::new(), |form, (name, value)| form.text(name, value));

        let url = self.endpoint(request);
        tracing::debug!(%url, "posting study request");

        let response = self.client.post(&url).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StudyError::ApiError { status: status.as_u16(), message });
        }

        let body = response.text().await?;
        extract_field(request.capability, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation_strips_trailing_slash() {
        let client = StudyClient::new("http://localhost:8000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn endpoint_joins_path() {
        let client = StudyClient::new("http://localhost:8000").unwrap();
        assert_eq!(
            client.endpoint(&StudyRequest::question("n", "q")),
            "http://localhost:8000/qa"
        );
    }

    #[test]
    fn rejects_non_http_base() {
        assert!(matches!(
            StudyClient::new("localhost:8000"),
            Err(StudyError::InvalidBaseUrl(_))
        ));
    }
}
