//! Typed client for the recommendation gateway.
//!
//! Wraps `reqwest` with the error normalization the rest of the application
//! relies on: server-provided `error` strings pass through, everything else
//! collapses into a small set of display-ready messages.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use styleguru_core::recommendations::{
    AccessorySuggestions, CareRoutine, DietPlan, EyewearRecommendations, OutfitSuggestions,
    ProductSuggestions, WorkoutPlan,
};
use styleguru_core::{ProductRequest, Profile};

use crate::error::ClientError;

const DEFAULT_BASE_URL: &str = "http://localhost:3001/api";

/// Error envelope the gateway attaches to non-success responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Client for the recommendation gateway.
///
/// Use [`RecommendationClient::new`] against a locally running gateway or
/// [`RecommendationClient::with_base_url`] to point at a mock server in
/// tests.
pub struct RecommendationClient {
    client: Client,
    base_url: String,
}

impl RecommendationClient {
    /// Creates a client pointed at the default local gateway.
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
            .timeout(Duration::from_secs(10))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("styleguru/0.1 (recommendation-client)")
            .build()
            .map_err(ClientError::Connect)?;

        let trimmed = base_url.trim_end_matches('/');
        Url::parse(trimmed).map_err(|_| ClientError::InvalidBaseUrl(base_url.to_string()))?;

        Ok(Self {
            client,
            base_url: trimmed.to_string(),
        })
    }

    /// Requests a curated outfit for the profile.
    ///
    /// # Errors
    ///
    /// See [`ClientError`] for the failure classes.
    pub async fn outfit_suggestions(
        &self,
        profile: &Profile,
    ) -> Result<OutfitSuggestions, ClientError> {
        self.post_json("/outfit-suggestions", profile).await
    }

    /// Requests accessory picks for the profile.
    ///
    /// # Errors
    ///
    /// See [`ClientError`] for the failure classes.
    pub async fn accessory_suggestions(
        &self,
        profile: &Profile,
    ) -> Result<AccessorySuggestions, ClientError> {
        self.post_json("/accessories-suggestions", profile).await
    }

    /// Requests frame recommendations for the profile's face shape.
    ///
    /// # Errors
    ///
    /// See [`ClientError`] for the failure classes.
    pub async fn eyewear_recommendations(
        &self,
        profile: &Profile,
    ) -> Result<EyewearRecommendations, ClientError> {
        self.post_json("/eyewear-recommendations", profile).await
    }

    /// Requests skincare or haircare products for the profile.
    ///
    /// # Errors
    ///
    /// See [`ClientError`] for the failure classes.
    pub async fn product_suggestions(
        &self,
        profile: &Profile,
        product_type: &str,
    ) -> Result<ProductSuggestions, ClientError> {
        let body = ProductRequest {
            profile: Some(profile.clone()),
            product_type: Some(product_type.to_string()),
        };
        self.post_json("/product-suggestions", &body).await
    }

    /// Requests a one-day diet plan for the profile.
    ///
    /// # Errors
    ///
    /// See [`ClientError`] for the failure classes.
    pub async fn diet_plan(&self, profile: &Profile) -> Result<DietPlan, ClientError> {
        self.post_json("/diet-plan", profile).await
    }

    /// Requests a skin and hair care routine for the profile.
    ///
    /// # Errors
    ///
    /// See [`ClientError`] for the failure classes.
    pub async fn care_routine(&self, profile: &Profile) -> Result<CareRoutine, ClientError> {
        self.post_json("/care-routine", profile).await
    }

    /// Requests a three-day workout plan for the profile.
    ///
    /// # Errors
    ///
    /// See [`ClientError`] for the failure classes.
    pub async fn workout_plan(&self, profile: &Profile) -> Result<WorkoutPlan, ClientError> {
        self.post_json("/workout-plan", profile).await
    }

    /// Posts `body` to `endpoint` and decodes the JSON response.
    ///
    /// Non-success statuses become [`ClientError::Api`] carrying the
    /// server's `error` string when the body has one, otherwise a generic
    /// `API Error: {status}` message mirroring what the status line says.
    async fn post_json<T, B>(&self, endpoint: &str, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{endpoint}", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(ClientError::Connect)?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|envelope| envelope.error)
                .unwrap_or_else(|| {
                    format!(
                        "API Error: {} {}",
                        status.as_u16(),
                        status.canonical_reason().unwrap_or("Unknown")
                    )
                });
            return Err(ClientError::Api { status, message });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::Deserialize {
                context: url,
                source: e,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_stripped() {
        let client = RecommendationClient::with_base_url("http://localhost:3001/api/")
            .expect("client construction should not fail");
        assert_eq!(client.base_url, "http://localhost:3001/api");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = RecommendationClient::with_base_url("not a url");
        assert!(matches!(result, Err(ClientError::InvalidBaseUrl(_))));
    }
}
