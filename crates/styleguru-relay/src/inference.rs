//! HTTP client for the hosted text-generation inference API.
//!
//! Wraps `reqwest` with bearer-credential handling and a tolerant decode of
//! the upstream reply, whose shape varies between models (array-wrapped or
//! bare object). The credential is optional at construction; its absence
//! surfaces per request as [`RelayError::MissingApiKey`] so the process can
//! still start and serve the apology path.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";

/// Fixed reply used when the upstream answered but no text could be extracted.
pub const NO_GENERATION_REPLY: &str = "Sorry, I could not generate a response.";

/// Errors returned by the inference client.
#[derive(Debug, Error)]
pub enum RelayError {
    /// No upstream credential was configured.
    #[error("missing HUGGING_FACE_API_KEY")]
    MissingApiKey,

    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The inference API answered with a non-success status.
    #[error("inference API error {status}: {body}")]
    UpstreamStatus { status: StatusCode, body: String },

    /// The response body could not be deserialized as JSON.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Serialize)]
struct GenerationRequest<'a> {
    inputs: &'a str,
    parameters: GenerationParameters,
    options: GenerationOptions,
}

#[derive(Debug, Serialize)]
struct GenerationParameters {
    max_new_tokens: u32,
    temperature: f64,
    top_p: f64,
    return_full_text: bool,
}

#[derive(Debug, Serialize)]
struct GenerationOptions {
    wait_for_model: bool,
}

impl GenerationRequest<'_> {
    fn for_prompt(prompt: &str) -> GenerationRequest<'_> {
        GenerationRequest {
            inputs: prompt,
            parameters: GenerationParameters {
                max_new_tokens: 512,
                temperature: 0.3,
                top_p: 0.9,
                return_full_text: false,
            },
            options: GenerationOptions {
                wait_for_model: true,
            },
        }
    }
}

/// The two reply shapes the inference API is known to produce. A body that
/// matches neither decodes to no text at all, which callers fold into
/// [`NO_GENERATION_REPLY`].
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum GenerationResponse {
    Batch(Vec<Generation>),
    Single(Generation),
}

#[derive(Debug, Deserialize)]
struct Generation {
    #[serde(default)]
    generated_text: String,
}

impl GenerationResponse {
    fn into_text(self) -> String {
        match self {
            GenerationResponse::Batch(generations) => generations
                .into_iter()
                .next()
                .map_or_else(String::new, |generation| generation.generated_text),
            GenerationResponse::Single(generation) => generation.generated_text,
        }
    }
}

/// Client for the hosted text-generation API.
///
/// Manages the HTTP client, bearer credential, and target model. Use
/// [`InferenceClient::new`] for production or
/// [`InferenceClient::with_base_url`] to point at a mock server in tests.
#[derive(Clone)]
pub struct InferenceClient {
    client: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl InferenceClient {
    /// Creates a new client pointed at the production inference API.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        api_key: Option<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, RelayError> {
        Self::with_base_url(api_key, model, timeout, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_base_url(
        api_key: Option<String>,
        model: impl Into<String>,
        timeout: Duration,
        base_url: &str,
    ) -> Result<Self, RelayError> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent("styleguru/0.1 (chat-relay)")
            .build()?;

        Ok(Self {
            client,
            api_key,
            model: model.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Sends a prompt to the model and returns the generated text.
    ///
    /// The upstream holds the connection while the model loads
    /// (`wait_for_model`), so cold starts surface as latency rather than
    /// errors. A successful answer that carries no usable text yields
    /// [`NO_GENERATION_REPLY`], not an error.
    ///
    /// # Errors
    ///
    /// - [`RelayError::MissingApiKey`] if no credential is configured.
    /// - [`RelayError::Http`] on network failure.
    /// - [`RelayError::UpstreamStatus`] if the API answers with a non-success
    ///   status.
    /// - [`RelayError::Deserialize`] if the response body is not JSON.
    pub async fn generate(&self, prompt: &str) -> Result<String, RelayError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(RelayError::MissingApiKey);
        };

        let url = format!("{}/models/{}", self.base_url, self.model);
        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&GenerationRequest::for_prompt(prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RelayError::UpstreamStatus { status, body });
        }

        let body = response.text().await?;
        let value: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| RelayError::Deserialize {
                context: format!("generate(model={})", self.model),
                source: e,
            })?;

        let text = serde_json::from_value::<GenerationResponse>(value)
            .map(GenerationResponse::into_text)
            .unwrap_or_default();

        if text.is_empty() {
            return Ok(NO_GENERATION_REPLY.to_string());
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> InferenceClient {
        InferenceClient::with_base_url(
            Some("hf_test_key".to_string()),
            "test-org/test-model",
            Duration::from_secs(5),
            base_url,
        )
        .expect("client construction should not fail")
    }

    #[test]
    fn with_base_url_strips_the_trailing_slash() {
        let client = test_client("http://localhost:8080/");
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[tokio::test]
    async fn generate_sends_the_fixed_sampling_configuration() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/test-org/test-model"))
            .and(header("authorization", "Bearer hf_test_key"))
            .and(body_partial_json(serde_json::json!({
                "inputs": "hi",
                "parameters": {
                    "max_new_tokens": 512,
                    "temperature": 0.3,
                    "top_p": 0.9,
                    "return_full_text": false
                },
                "options": { "wait_for_model": true }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "generated_text": "hello world" }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let reply = test_client(&server.uri())
            .generate("hi")
            .await
            .expect("generate");
        assert_eq!(reply, "hello world");
    }

    #[tokio::test]
    async fn generate_decodes_the_object_shape() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "generated_text": "object reply"
            })))
            .mount(&server)
            .await;

        let reply = test_client(&server.uri())
            .generate("hi")
            .await
            .expect("generate");
        assert_eq!(reply, "object reply");
    }

    #[tokio::test]
    async fn generate_falls_back_on_an_unrecognized_shape() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "estimated_time": 20.0
            })))
            .mount(&server)
            .await;

        let reply = test_client(&server.uri())
            .generate("hi")
            .await
            .expect("generate");
        assert_eq!(reply, NO_GENERATION_REPLY);
    }

    #[tokio::test]
    async fn generate_treats_empty_text_as_no_generation() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "generated_text": "" }
            ])))
            .mount(&server)
            .await;

        let reply = test_client(&server.uri())
            .generate("hi")
            .await
            .expect("generate");
        assert_eq!(reply, NO_GENERATION_REPLY);
    }

    #[tokio::test]
    async fn generate_surfaces_upstream_error_statuses() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("model overloaded"))
            .mount(&server)
            .await;

        let result = test_client(&server.uri()).generate("hi").await;
        assert!(
            matches!(
                result,
                Err(RelayError::UpstreamStatus { status, ref body })
                    if status == StatusCode::SERVICE_UNAVAILABLE && body == "model overloaded"
            ),
            "expected UpstreamStatus, got: {result:?}"
        );
    }

    #[tokio::test]
    async fn generate_requires_a_credential() {
        // The bogus base URL proves no request is attempted.
        let client = InferenceClient::with_base_url(
            None,
            "test-org/test-model",
            Duration::from_secs(5),
            "http://localhost:9",
        )
        .expect("client construction should not fail");

        let result = client.generate("hi").await;
        assert!(matches!(result, Err(RelayError::MissingApiKey)));
    }
}
