//! Client for the chat relay.

use std::time::Duration;

use futures::StreamExt;
use reqwest::{Client, Url};
use styleguru_core::chat::{ChatReply, ChatRequest};

use crate::error::ClientError;

const DEFAULT_BASE_URL: &str = "http://localhost:5001";

/// Client for the chat relay's `/chat` and `/chat-stream` routes.
pub struct ChatClient {
    client: Client,
    base_url: String,
}

impl ChatClient {
    /// Creates a client pointed at the default local relay.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Connect`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new() -> Result<Self, ClientError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Connect`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ClientError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(base_url: &str) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(180))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("styleguru/0.1 (chat-client)")
            .build()
            .map_err(ClientError::Connect)?;

        let trimmed = base_url.trim_end_matches('/');
        Url::parse(trimmed).map_err(|_| ClientError::InvalidBaseUrl(base_url.to_string()))?;

        Ok(Self {
            client,
            base_url: trimmed.to_string(),
        })
    }

    /// Sends a prompt and returns the relay's reply.
    ///
    /// The relay answers rejected prompts with a reply-shaped body too, so
    /// any JSON response is surfaced as a reply rather than an error.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Connect`] on transport failure and
    /// [`ClientError::Deserialize`] if the response is not reply-shaped.
    pub async fn reply(&self, prompt: &str) -> Result<String, ClientError> {
        let url = format!("{}/chat", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&ChatRequest {
                prompt: Some(prompt.to_string()),
            })
            .send()
            .await
            .map_err(ClientError::Connect)?;

        let reply: ChatReply = response
            .json()
            .await
            .map_err(|e| ClientError::Deserialize {
                context: url,
                source: e,
            })?;
        Ok(reply.reply)
    }

    /// Streams a reply, invoking `on_chunk` for each received fragment.
    ///
    /// If the stream request fails outright, this degrades to the
    /// single-shot [`ChatClient::reply`] and delivers the whole reply as
    /// one chunk.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Connect`] if the stream breaks mid-read or
    /// the degraded single-shot request fails too.
    pub async fn stream_reply<F>(&self, prompt: &str, mut on_chunk: F) -> Result<(), ClientError>
    where
        F: FnMut(&str),
    {
        let url = format!("{}/chat-stream", self.base_url);
        let request = self
            .client
            .post(&url)
            .json(&ChatRequest {
                prompt: Some(prompt.to_string()),
            })
            .send()
            .await;

        let response = match request {
            Ok(response) if response.status().is_success() => response,
            Ok(_) | Err(_) => {
                tracing::debug!("stream request failed, degrading to single-shot chat");
                let text = self.reply(prompt).await?;
                on_chunk(&text);
                return Ok(());
            }
        };

        let mut body = response.bytes_stream();
        while let Some(chunk) = body.next().await {
            let bytes = chunk.map_err(ClientError::Connect)?;
            let text = String::from_utf8_lossy(&bytes);
            if !text.is_empty() {
                on_chunk(&text);
            }
        }
        Ok(())
    }
}
