//! Request layer for the StyleGuru services.
//!
//! [`RecommendationClient`] talks to the recommendation gateway with
//! normalized, display-ready error messages; [`deliver_or_fallback`] races
//! each request against [`RECOMMENDATION_TIMEOUT`] and commits a canned
//! payload from [`canned`] when the gateway loses; [`ChatClient`] talks to
//! the chat relay, with streaming degrading to single-shot on failure.

pub mod canned;
mod chat;
mod error;
mod fallback;
mod http;

pub use chat::ChatClient;
pub use error::ClientError;
pub use fallback::{deliver_or_fallback, Delivery, HasContent, RECOMMENDATION_TIMEOUT};
pub use http::RecommendationClient;
