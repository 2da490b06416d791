//! Head-to-toe outfit assembly.

use rand::seq::IndexedRandom;
use rand::Rng;
use styleguru_catalog::{Catalog, CatalogError};
use styleguru_core::recommendations::{Outfit, OutfitSuggestions};
use styleguru_core::Profile;

const STYLE_TIP: &str = "Mix and match textures and layers to create a dynamic look. \
     A statement piece can elevate a simple outfit.";

/// Builds a single curated outfit from one top, one bottom, and one pair
/// of shoes drawn from the rack matching the profile's gender.
///
/// # Errors
/// Returns an error if the catalog cannot serve the clothing rack.
pub async fn outfit_suggestions<R: Rng>(
    catalog: &dyn Catalog,
    rng: &mut R,
    profile: &Profile,
) -> Result<OutfitSuggestions, CatalogError> {
    let gender = profile.gender.as_deref().unwrap_or("Other");
    let preferred_style = profile.preferred_style.as_deref().unwrap_or("Casual");
    let season = profile.season.as_deref().unwrap_or("Summer");

    let rack = catalog.clothing_rack(gender).await?;

    let mut pieces = Vec::with_capacity(3);
    for group in [&rack.tops, &rack.bottoms, &rack.shoes] {
        if let Some(piece) = group.choose(rng) {
            pieces.push(piece.clone());
        }
    }

    Ok(OutfitSuggestions {
        outfits: vec![Outfit {
            name: format!("{preferred_style} {season} Look"),
            description: format!(
                "A curated {} look for the {} season.",
                preferred_style.to_lowercase(),
                season.to_lowercase()
            ),
            pieces,
        }],
        style_tip: STYLE_TIP.to_string(),
    })
}
