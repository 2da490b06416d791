use serde::{Deserialize, Serialize};

/// One purchasable item from the static catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub name: String,
    pub category: String,
    /// Display price, e.g. `"₹1240"` or `"₹200-₹300"`. Never used for arithmetic.
    pub price: String,
    pub image: String,
    /// Retailer search URL for the item.
    pub link: String,
}

/// Meal slot within a daily plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

impl std::fmt::Display for MealSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MealSlot::Breakfast => write!(f, "breakfast"),
            MealSlot::Lunch => write!(f, "lunch"),
            MealSlot::Dinner => write!(f, "dinner"),
        }
    }
}

/// Dietary property tags used when filtering the meal table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DietTag {
    Vegetarian,
    Vegan,
    Keto,
    GlutenFree,
    NonVeg,
    HighProtein,
    LowCarb,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    pub slot: MealSlot,
    pub name: String,
    pub description: String,
    pub calories: u32,
    pub tags: Vec<DietTag>,
}

impl Meal {
    #[must_use]
    pub fn has_tag(&self, tag: DietTag) -> bool {
        self.tags.contains(&tag)
    }
}

/// Paired skin and hair advice for one gender and skin type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareAdvice {
    pub skin: String,
    pub hair: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diet_tags_use_kebab_case_names() {
        assert_eq!(
            serde_json::to_value(DietTag::GlutenFree).unwrap(),
            serde_json::json!("gluten-free")
        );
        assert_eq!(
            serde_json::to_value(DietTag::NonVeg).unwrap(),
            serde_json::json!("non-veg")
        );
        assert_eq!(
            serde_json::to_value(DietTag::HighProtein).unwrap(),
            serde_json::json!("high-protein")
        );
    }

    #[test]
    fn meal_slot_displays_lowercase() {
        assert_eq!(MealSlot::Breakfast.to_string(), "breakfast");
        assert_eq!(MealSlot::Dinner.to_string(), "dinner");
    }

    #[test]
    fn has_tag_matches_membership() {
        let meal = Meal {
            slot: MealSlot::Lunch,
            name: "Quinoa Power Bowl".to_string(),
            description: String::new(),
            calories: 500,
            tags: vec![DietTag::Vegetarian, DietTag::GlutenFree],
        };
        assert!(meal.has_tag(DietTag::Vegetarian));
        assert!(!meal.has_tag(DietTag::NonVeg));
    }
}
