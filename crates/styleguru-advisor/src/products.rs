//! Skincare and haircare product suggestions.

use styleguru_catalog::{Catalog, CatalogError, ProductKind};
use styleguru_core::recommendations::ProductSuggestions;
use styleguru_core::Profile;

const CARE_TIP: &str = "Introduce one new product at a time and give it a \
     couple of weeks before judging results. Patch-test anything unfamiliar.";

/// Suggests care products for the requested product type. Skin requests
/// are keyed by the profile's skin type, hair requests by its hair type.
///
/// # Errors
/// Returns an error if the catalog cannot serve the product shelves.
pub async fn product_suggestions(
    catalog: &dyn Catalog,
    profile: &Profile,
    product_type: &str,
) -> Result<ProductSuggestions, CatalogError> {
    let gender = profile.gender.as_deref().unwrap_or("Other");
    let skin_type = profile.skin_type.as_deref().unwrap_or("Oily");
    let hair_type = profile.hair_type.as_deref().unwrap_or("Wavy");

    let kind = ProductKind::from_key(product_type);
    let type_key = match kind {
        ProductKind::Skin => skin_type,
        ProductKind::Hair => hair_type,
    };

    let products = catalog.care_products(kind, gender, type_key).await?;

    Ok(ProductSuggestions {
        products,
        care_tip: CARE_TIP.to_string(),
    })
}
