//! Recommendation engine for styleguru.
//!
//! Each operation resolves missing profile fields to sensible defaults,
//! pulls candidate entries from a [`Catalog`](styleguru_catalog::Catalog)
//! implementation, and assembles a payload with a human-readable tip.
//! Operations that pick between candidates take a caller-supplied random
//! number generator so tests can run them deterministically.

mod accessories;
mod care;
mod diet;
mod eyewear;
mod outfit;
mod products;
mod workout;

pub use accessories::accessory_suggestions;
pub use care::care_routine;
pub use diet::diet_plan;
pub use eyewear::eyewear_recommendations;
pub use outfit::outfit_suggestions;
pub use products::product_suggestions;
pub use workout::workout_plan;
