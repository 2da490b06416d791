//! Deadline policy for recommendation requests.
//!
//! The intake pages promise a result within a few seconds, so every request
//! races a fixed timer. Whichever side loses is discarded: a late gateway
//! response is never applied over an already-committed fallback.

use std::future::Future;
use std::time::Duration;

use styleguru_core::recommendations::{
    AccessorySuggestions, CareRoutine, DietPlan, EyewearRecommendations, OutfitSuggestions,
    ProductSuggestions, WorkoutPlan,
};

use crate::error::ClientError;

/// How long a recommendation request may run before the canned payload is
/// committed instead.
pub const RECOMMENDATION_TIMEOUT: Duration = Duration::from_millis(3000);

/// The payload handed to the caller, tagged with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery<T> {
    /// The gateway answered in time with a usable payload.
    Live(T),
    /// The canned payload stood in for a slow, failed, or empty response.
    Fallback(T),
}

impl<T> Delivery<T> {
    /// Unwraps the payload, whichever side produced it.
    pub fn into_inner(self) -> T {
        match self {
            Delivery::Live(payload) | Delivery::Fallback(payload) => payload,
        }
    }

    /// Whether the gateway's own response was delivered.
    #[must_use]
    pub fn is_live(&self) -> bool {
        matches!(self, Delivery::Live(_))
    }
}

/// Whether a decoded payload actually carries something to render.
///
/// A gateway response can be well-formed yet empty; such a response loses
/// the race just like an error does.
pub trait HasContent {
    fn has_content(&self) -> bool;
}

impl HasContent for OutfitSuggestions {
    fn has_content(&self) -> bool {
        !self.outfits.is_empty()
    }
}

impl HasContent for AccessorySuggestions {
    fn has_content(&self) -> bool {
        !self.accessories.is_empty()
    }
}

impl HasContent for EyewearRecommendations {
    fn has_content(&self) -> bool {
        !self.eyewear.is_empty()
    }
}

impl HasContent for ProductSuggestions {
    fn has_content(&self) -> bool {
        !self.products.is_empty()
    }
}

impl HasContent for DietPlan {
    fn has_content(&self) -> bool {
        !self.plan.breakfast.title.is_empty()
    }
}

impl HasContent for CareRoutine {
    fn has_content(&self) -> bool {
        !self.skin_routine.is_empty() && !self.hair_routine.is_empty()
    }
}

impl HasContent for WorkoutPlan {
    fn has_content(&self) -> bool {
        !self.workout_split.is_empty()
    }
}

/// Runs `request` against `deadline` and commits whichever side wins.
///
/// The request is spawned so a missed deadline leaves it running detached;
/// its eventual result is dropped. An in-time response still falls back
/// when it is an error or fails [`HasContent::has_content`]. One attempt,
/// no retry.
pub async fn deliver_or_fallback<T, F>(deadline: Duration, request: F, canned: T) -> Delivery<T>
where
    T: HasContent + Send + 'static,
    F: Future<Output = Result<T, ClientError>> + Send + 'static,
{
    let in_flight = tokio::spawn(request);
    match tokio::time::timeout(deadline, in_flight).await {
        Ok(Ok(Ok(payload))) if payload.has_content() => Delivery::Live(payload),
        Ok(Ok(Ok(_))) => {
            tracing::warn!("gateway response was empty, committing fallback");
            Delivery::Fallback(canned)
        }
        Ok(Ok(Err(error))) => {
            tracing::warn!(error = %error, "gateway request failed, committing fallback");
            Delivery::Fallback(canned)
        }
        Ok(Err(join_error)) => {
            tracing::warn!(error = %join_error, "gateway request panicked, committing fallback");
            Delivery::Fallback(canned)
        }
        Err(_elapsed) => {
            tracing::warn!(?deadline, "gateway missed the deadline, committing fallback");
            Delivery::Fallback(canned)
        }
    }
}
