use axum::{extract::State, Extension, Json};
use rand::{rngs::StdRng, SeedableRng};
use styleguru_core::recommendations::{
    AccessorySuggestions, CareRoutine, DietPlan, EyewearRecommendations, OutfitSuggestions,
    ProductSuggestions, WorkoutPlan,
};
use styleguru_core::{ProductRequest, Profile};

use crate::middleware::RequestId;

use super::{map_catalog_error, ApiError, AppState};

fn require_profile(profile: Option<Profile>) -> Result<Profile, ApiError> {
    profile.ok_or_else(|| ApiError::validation("Profile data is required."))
}

pub(super) async fn outfit_suggestions(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(profile): Json<Option<Profile>>,
) -> Result<Json<OutfitSuggestions>, ApiError> {
    let profile = require_profile(profile)?;
    let mut rng = StdRng::from_os_rng();
    let payload = styleguru_advisor::outfit_suggestions(state.catalog.as_ref(), &mut rng, &profile)
        .await
        .map_err(|e| map_catalog_error(&req_id.0, &e))?;
    Ok(Json(payload))
}

pub(super) async fn eyewear_recommendations(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(profile): Json<Option<Profile>>,
) -> Result<Json<EyewearRecommendations>, ApiError> {
    let profile = require_profile(profile)?;
    let payload = styleguru_advisor::eyewear_recommendations(state.catalog.as_ref(), &profile)
        .await
        .map_err(|e| map_catalog_error(&req_id.0, &e))?;
    Ok(Json(payload))
}

pub(super) async fn accessory_suggestions(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(profile): Json<Option<Profile>>,
) -> Result<Json<AccessorySuggestions>, ApiError> {
    let profile = require_profile(profile)?;
    let mut rng = StdRng::from_os_rng();
    let payload =
        styleguru_advisor::accessory_suggestions(state.catalog.as_ref(), &mut rng, &profile)
            .await
            .map_err(|e| map_catalog_error(&req_id.0, &e))?;
    Ok(Json(payload))
}

pub(super) async fn product_suggestions(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(request): Json<ProductRequest>,
) -> Result<Json<ProductSuggestions>, ApiError> {
    // An empty productType counts as missing, same as the absent field.
    let product_type = request.product_type.filter(|t| !t.is_empty());
    let (Some(profile), Some(product_type)) = (request.profile, product_type) else {
        return Err(ApiError::validation("Profile and productType are required."));
    };

    let payload =
        styleguru_advisor::product_suggestions(state.catalog.as_ref(), &profile, &product_type)
            .await
            .map_err(|e| map_catalog_error(&req_id.0, &e))?;
    Ok(Json(payload))
}

pub(super) async fn diet_plan(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(profile): Json<Option<Profile>>,
) -> Result<Json<DietPlan>, ApiError> {
    let profile = require_profile(profile)?;
    let mut rng = StdRng::from_os_rng();
    let payload = styleguru_advisor::diet_plan(state.catalog.as_ref(), &mut rng, &profile)
        .await
        .map_err(|e| map_catalog_error(&req_id.0, &e))?;
    Ok(Json(payload))
}

pub(super) async fn care_routine(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(profile): Json<Option<Profile>>,
) -> Result<Json<CareRoutine>, ApiError> {
    let profile = require_profile(profile)?;
    let payload = styleguru_advisor::care_routine(state.catalog.as_ref(), &profile)
        .await
        .map_err(|e| map_catalog_error(&req_id.0, &e))?;
    Ok(Json(payload))
}

pub(super) async fn workout_plan(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(profile): Json<Option<Profile>>,
) -> Result<Json<WorkoutPlan>, ApiError> {
    let profile = require_profile(profile)?;
    let payload = styleguru_advisor::workout_plan(state.catalog.as_ref(), &profile)
        .await
        .map_err(|e| map_catalog_error(&req_id.0, &e))?;
    Ok(Json(payload))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_profile_rejects_a_missing_profile() {
        let result = require_profile(None);
        assert!(result.is_err());
    }

    #[test]
    fn require_profile_passes_an_empty_profile_through() {
        let result = require_profile(Some(Profile::default()));
        assert!(result.is_ok());
    }
}
