//! Accessory pairing.

use rand::seq::SliceRandom;
use rand::Rng;
use styleguru_catalog::{Catalog, CatalogError};
use styleguru_core::recommendations::{AccessorySuggestions, RecommendedItem};
use styleguru_core::Profile;

const STYLE_TIP: &str =
    "Choose accessories that complement your outfit. Don't be afraid to mix metals.";

const REASON: &str = "Adds a finishing touch to your outfit.";

/// Picks up to two accessories from the shelf matching the profile's
/// gender.
///
/// # Errors
/// Returns an error if the catalog cannot serve the accessory shelf.
pub async fn accessory_suggestions<R: Rng>(
    catalog: &dyn Catalog,
    rng: &mut R,
    profile: &Profile,
) -> Result<AccessorySuggestions, CatalogError> {
    let gender = profile.gender.as_deref().unwrap_or("Other");

    let mut shelf = catalog.accessories(gender).await?;
    // Shuffle so repeat calls surface different pairings.
    shelf.shuffle(rng);
    shelf.truncate(2);

    Ok(AccessorySuggestions {
        accessories: shelf
            .into_iter()
            .map(|item| RecommendedItem {
                item,
                reason: REASON.to_string(),
            })
            .collect(),
        style_tip: STYLE_TIP.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use styleguru_catalog::StaticCatalog;

    #[tokio::test]
    async fn picks_two_distinct_accessories_for_known_genders() {
        let catalog = StaticCatalog::new();
        let mut rng = StdRng::seed_from_u64(3);
        let profile = Profile {
            gender: Some("Female".to_string()),
            ..Profile::default()
        };

        let suggestions = accessory_suggestions(&catalog, &mut rng, &profile)
            .await
            .unwrap();

        assert_eq!(suggestions.accessories.len(), 2);
        assert_ne!(
            suggestions.accessories[0].item.name,
            suggestions.accessories[1].item.name
        );
        for picked in &suggestions.accessories {
            assert_eq!(picked.reason, "Adds a finishing touch to your outfit.");
        }
        assert_eq!(
            suggestions.style_tip,
            "Choose accessories that complement your outfit. Don't be afraid to mix metals."
        );
    }

    #[tokio::test]
    async fn short_shelves_yield_fewer_than_two() {
        let catalog = StaticCatalog::new();
        let mut rng = StdRng::seed_from_u64(3);

        // The neutral shelf stocks a single item.
        let suggestions = accessory_suggestions(&catalog, &mut rng, &Profile::default())
            .await
            .unwrap();

        assert_eq!(suggestions.accessories.len(), 1);
        assert_eq!(
            suggestions.accessories[0].item.name,
            "Ray-Ban Aviator Sunglasses"
        );
    }
}
