//! Per-kind recommendation payloads as they appear on the wire.
//!
//! Field names are camelCase to match the front-end contract. Every payload
//! carries a human-readable tip alongside its items.

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogItem;

/// A single composed outfit: one top, one bottom, one pair of shoes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outfit {
    pub name: String,
    pub description: String,
    pub pieces: Vec<CatalogItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutfitSuggestions {
    pub outfits: Vec<Outfit>,
    pub style_tip: String,
}

/// Catalog item annotated with why it was recommended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendedItem {
    #[serde(flatten)]
    pub item: CatalogItem,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessorySuggestions {
    pub accessories: Vec<RecommendedItem>,
    pub style_tip: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EyewearRecommendations {
    pub eyewear: Vec<RecommendedItem>,
    pub style_tip: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSuggestions {
    pub products: Vec<CatalogItem>,
    pub care_tip: String,
}

/// One selected meal, rendered for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealCard {
    pub title: String,
    pub description: String,
    /// Display string, e.g. `"450 kcal"`.
    pub calories: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPlan {
    pub breakfast: MealCard,
    pub lunch: MealCard,
    pub dinner: MealCard,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietPlan {
    pub plan: DailyPlan,
    pub nutrition_tip: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareRoutine {
    pub skin_routine: String,
    pub hair_routine: String,
    pub care_tip: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutDay {
    pub day: u8,
    pub title: String,
    pub exercises: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    pub plan_title: String,
    pub weekly_focus: String,
    pub workout_split: Vec<WorkoutDay>,
    pub pro_tip: String,
}
