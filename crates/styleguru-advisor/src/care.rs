//! Skin and hair routine advice.

use styleguru_catalog::{Catalog, CatalogError};
use styleguru_core::recommendations::CareRoutine;
use styleguru_core::Profile;

/// Builds skin and hair routine sentences from the advice matching the
/// profile's gender and skin type.
///
/// # Errors
/// Returns an error if the catalog cannot serve the care advice.
pub async fn care_routine(
    catalog: &dyn Catalog,
    profile: &Profile,
) -> Result<CareRoutine, CatalogError> {
    let gender = profile.gender.as_deref().unwrap_or("Other");
    let skin_type = profile.skin_type.as_deref().unwrap_or("Dry");
    let hair_type = profile.hair_type.as_deref().unwrap_or("Straight");

    let advice = catalog.care_advice(gender, skin_type).await?;

    Ok(CareRoutine {
        skin_routine: format!("For your {skin_type} skin, we recommend {}", advice.skin),
        hair_routine: format!("For your {hair_type} hair, we recommend {}", advice.hair),
        care_tip: format!(
            "For a {}-focused routine, consistency is key. Stick to your routine for \
             at least a few weeks to see results, and always remember to wear \
             sunscreen daily!",
            gender.to_lowercase()
        ),
    })
}
