//! Daily meal planning.

use rand::seq::IndexedRandom;
use rand::Rng;
use styleguru_catalog::{Catalog, CatalogError};
use styleguru_core::catalog::{DietTag, Meal, MealSlot};
use styleguru_core::recommendations::{DailyPlan, DietPlan, MealCard};
use styleguru_core::Profile;

/// Assembles a one-day plan of breakfast, lunch, and dinner honoring the
/// profile's dietary restriction and goal, plus a calorie-total tip.
///
/// Slots with no meal passing the filters fall back to any meatless meal
/// of that slot, and finally to a placeholder card asking the user to
/// loosen their preferences.
///
/// # Errors
/// Returns an error if the catalog cannot serve the meal table.
pub async fn diet_plan<R: Rng>(
    catalog: &dyn Catalog,
    rng: &mut R,
    profile: &Profile,
) -> Result<DietPlan, CatalogError> {
    let restrictions = profile.restrictions.as_deref().unwrap_or("None");
    let goal = profile.goal.as_deref().unwrap_or("General Fitness");
    let gender = profile.gender.as_deref().unwrap_or("individual");

    let table = catalog.meals().await?;
    let applicable: Vec<Meal> = table
        .iter()
        .filter(|meal| satisfies(meal, restrictions, goal))
        .cloned()
        .collect();

    let breakfast = select_meal(rng, &table, &applicable, MealSlot::Breakfast);
    let lunch = select_meal(rng, &table, &applicable, MealSlot::Lunch);
    let dinner = select_meal(rng, &table, &applicable, MealSlot::Dinner);
    let total_calories = breakfast.calories + lunch.calories + dinner.calories;

    Ok(DietPlan {
        plan: DailyPlan {
            breakfast: card(breakfast),
            lunch: card(lunch),
            dinner: card(dinner),
        },
        nutrition_tip: format!(
            "This {} plan for a {} is about {total_calories} kcal. Remember to adjust \
             portion sizes based on your activity level and specific needs. Staying \
             hydrated is key!",
            goal.to_lowercase(),
            gender.to_lowercase()
        ),
    })
}

/// Whether a meal passes the restriction and goal filters.
fn satisfies(meal: &Meal, restrictions: &str, goal: &str) -> bool {
    if restrictions == "Vegetarian" && !meal.has_tag(DietTag::Vegetarian) {
        return false;
    }
    if restrictions == "Vegan" && !meal.has_tag(DietTag::Vegan) {
        return false;
    }
    if restrictions == "Keto" && !meal.has_tag(DietTag::Keto) {
        return false;
    }
    if restrictions == "Gluten-Free" && !meal.has_tag(DietTag::GlutenFree) {
        return false;
    }
    if restrictions == "Non-Vegetarian"
        && (meal.has_tag(DietTag::Vegetarian) || meal.has_tag(DietTag::Vegan))
    {
        return false;
    }
    if goal == "Weight Loss" && meal.calories > 550 {
        return false;
    }
    if goal == "Muscle Gain" && !meal.has_tag(DietTag::HighProtein) {
        return false;
    }
    true
}

fn select_meal<R: Rng>(rng: &mut R, table: &[Meal], applicable: &[Meal], slot: MealSlot) -> Meal {
    let options: Vec<&Meal> = applicable.iter().filter(|meal| meal.slot == slot).collect();
    if let Some(meal) = options.choose(rng) {
        return (*meal).clone();
    }

    let meatless: Vec<&Meal> = table
        .iter()
        .filter(|meal| meal.slot == slot && !meal.has_tag(DietTag::NonVeg))
        .collect();
    meatless
        .choose(rng)
        .map_or_else(|| placeholder(slot), |meal| (*meal).clone())
}

fn placeholder(slot: MealSlot) -> Meal {
    Meal {
        slot,
        name: format!("No Suitable {slot}"),
        description: "Please adjust your dietary preferences for more options.".to_string(),
        calories: 0,
        tags: Vec::new(),
    }
}

fn card(meal: Meal) -> MealCard {
    MealCard {
        title: meal.name,
        description: meal.description,
        calories: format!("{} kcal", meal.calories),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use styleguru_catalog::{ClothingRack, ProductKind, StaticCatalog};
    use styleguru_core::catalog::{CareAdvice, CatalogItem};

    fn meal_named(table: &[Meal], title: &str) -> Meal {
        table
            .iter()
            .find(|meal| meal.name == title)
            .cloned()
            .unwrap()
    }

    #[test]
    fn restriction_filters_match_the_tags() {
        let grilled_chicken = Meal {
            slot: MealSlot::Lunch,
            name: "Grilled Chicken Salad".to_string(),
            description: String::new(),
            calories: 450,
            tags: vec![DietTag::NonVeg, DietTag::HighProtein, DietTag::LowCarb],
        };
        let lentil_soup = Meal {
            slot: MealSlot::Dinner,
            name: "Hearty Lentil Soup".to_string(),
            description: String::new(),
            calories: 400,
            tags: vec![DietTag::Vegetarian, DietTag::Vegan],
        };

        assert!(!satisfies(&grilled_chicken, "Vegetarian", "General Fitness"));
        assert!(satisfies(&lentil_soup, "Vegetarian", "General Fitness"));
        assert!(satisfies(&lentil_soup, "Vegan", "General Fitness"));
        assert!(satisfies(&grilled_chicken, "Non-Vegetarian", "General Fitness"));
        assert!(!satisfies(&lentil_soup, "Non-Vegetarian", "General Fitness"));
        // Unknown restriction labels filter nothing.
        assert!(satisfies(&grilled_chicken, "Pescatarian", "General Fitness"));
    }

    #[test]
    fn weight_loss_admits_exactly_550_calories() {
        let at_limit = Meal {
            slot: MealSlot::Lunch,
            name: "At Limit".to_string(),
            description: String::new(),
            calories: 550,
            tags: Vec::new(),
        };
        let over_limit = Meal {
            calories: 551,
            ..at_limit.clone()
        };

        assert!(satisfies(&at_limit, "None", "Weight Loss"));
        assert!(!satisfies(&over_limit, "None", "Weight Loss"));
    }

    #[tokio::test]
    async fn vegetarian_plans_only_serve_vegetarian_meals() {
        let catalog = StaticCatalog::new();
        let table = catalog.meals().await.unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let profile = Profile {
            restrictions: Some("Vegetarian".to_string()),
            ..Profile::default()
        };

        let plan = diet_plan(&catalog, &mut rng, &profile).await.unwrap();

        for title in [
            &plan.plan.breakfast.title,
            &plan.plan.lunch.title,
            &plan.plan.dinner.title,
        ] {
            let meal = meal_named(&table, title);
            assert!(meal.has_tag(DietTag::Vegetarian), "{title} is not vegetarian");
        }
    }

    #[tokio::test]
    async fn exhausted_slots_fall_back_to_meatless_meals() {
        let catalog = StaticCatalog::new();
        let table = catalog.meals().await.unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        // No vegan lunch is also high-protein, so the lunch slot must fall
        // back past the filters.
        let profile = Profile {
            restrictions: Some("Vegan".to_string()),
            goal: Some("Muscle Gain".to_string()),
            ..Profile::default()
        };

        let plan = diet_plan(&catalog, &mut rng, &profile).await.unwrap();

        let lunch = meal_named(&table, &plan.plan.lunch.title);
        assert!(!lunch.has_tag(DietTag::NonVeg));
        let breakfast = meal_named(&table, &plan.plan.breakfast.title);
        assert!(breakfast.has_tag(DietTag::Vegan));
        assert!(breakfast.has_tag(DietTag::HighProtein));
    }

    #[tokio::test]
    async fn nutrition_tip_reports_the_plan_total() {
        let catalog = StaticCatalog::new();
        let mut rng = StdRng::seed_from_u64(5);
        let profile = Profile {
            goal: Some("Weight Loss".to_string()),
            gender: Some("Female".to_string()),
            ..Profile::default()
        };

        let plan = diet_plan(&catalog, &mut rng, &profile).await.unwrap();

        let total: u32 = [
            &plan.plan.breakfast.calories,
            &plan.plan.lunch.calories,
            &plan.plan.dinner.calories,
        ]
        .iter()
        .map(|c| c.trim_end_matches(" kcal").parse::<u32>().unwrap())
        .sum();
        assert!(total <= 1650);
        assert!(plan
            .nutrition_tip
            .starts_with(&format!("This weight loss plan for a female is about {total} kcal.")));
    }

    struct BareCatalog;

    #[async_trait]
    impl Catalog for BareCatalog {
        async fn clothing_rack(&self, _gender: &str) -> Result<ClothingRack, CatalogError> {
            Ok(ClothingRack {
                tops: Vec::new(),
                bottoms: Vec::new(),
                shoes: Vec::new(),
            })
        }

        async fn accessories(&self, _gender: &str) -> Result<Vec<CatalogItem>, CatalogError> {
            Ok(Vec::new())
        }

        async fn eyewear(&self, _face_shape: &str) -> Result<Vec<CatalogItem>, CatalogError> {
            Ok(Vec::new())
        }

        async fn meals(&self) -> Result<Vec<Meal>, CatalogError> {
            Ok(Vec::new())
        }

        async fn care_advice(
            &self,
            _gender: &str,
            _skin_type: &str,
        ) -> Result<CareAdvice, CatalogError> {
            Ok(CareAdvice {
                skin: String::new(),
                hair: String::new(),
            })
        }

        async fn care_products(
            &self,
            _kind: ProductKind,
            _gender: &str,
            _type_key: &str,
        ) -> Result<Vec<CatalogItem>, CatalogError> {
            Ok(Vec::new())
        }

        async fn workout_exercises(
            &self,
            _gender: &str,
            _goal: &str,
            _level: &str,
        ) -> Result<Vec<String>, CatalogError> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn an_empty_table_yields_placeholder_cards() {
        let mut rng = StdRng::seed_from_u64(1);

        let plan = diet_plan(&BareCatalog, &mut rng, &Profile::default())
            .await
            .unwrap();

        assert_eq!(plan.plan.breakfast.title, "No Suitable breakfast");
        assert_eq!(plan.plan.lunch.title, "No Suitable lunch");
        assert_eq!(plan.plan.dinner.title, "No Suitable dinner");
        assert_eq!(plan.plan.dinner.calories, "0 kcal");
        assert_eq!(
            plan.plan.dinner.description,
            "Please adjust your dietary preferences for more options."
        );
        assert!(plan
            .nutrition_tip
            .starts_with("This general fitness plan for a individual is about 0 kcal."));
    }
}
