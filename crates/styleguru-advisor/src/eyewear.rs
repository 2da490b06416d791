//! Frame recommendations by face shape.

use styleguru_catalog::{Catalog, CatalogError};
use styleguru_core::recommendations::{EyewearRecommendations, RecommendedItem};
use styleguru_core::Profile;

const STYLE_TIP: &str = "The right pair of glasses can be a defining feature. \
     Choose a frame that reflects your personality.";

/// Recommends every frame stocked for the profile's face shape, each
/// annotated with the same shape-specific reason.
///
/// # Errors
/// Returns an error if the catalog cannot serve the eyewear shelf.
pub async fn eyewear_recommendations(
    catalog: &dyn Catalog,
    profile: &Profile,
) -> Result<EyewearRecommendations, CatalogError> {
    let face_shape = profile.face_shape.as_deref().unwrap_or("Oval");

    let frames = catalog.eyewear(face_shape).await?;
    let reason = format!(
        "This shape provides a flattering contrast to your {} face shape.",
        face_shape.to_lowercase()
    );

    Ok(EyewearRecommendations {
        eyewear: frames
            .into_iter()
            .map(|item| RecommendedItem {
                item,
                reason: reason.clone(),
            })
            .collect(),
        style_tip: STYLE_TIP.to_string(),
    })
}
