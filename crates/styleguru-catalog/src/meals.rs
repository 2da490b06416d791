//! The flat meal table backing diet plans.

use styleguru_core::catalog::{DietTag, Meal, MealSlot};

use DietTag::{GlutenFree, HighProtein, Keto, LowCarb, NonVeg, Vegan, Vegetarian};

fn meal(slot: MealSlot, name: &str, description: &str, calories: u32, tags: &[DietTag]) -> Meal {
    Meal {
        slot,
        name: name.to_string(),
        description: description.to_string(),
        calories,
        tags: tags.to_vec(),
    }
}

pub(crate) fn meal_table() -> Vec<Meal> {
    vec![
        meal(
            MealSlot::Breakfast,
            "Tofu Scramble",
            "Protein-packed tofu scramble with spinach, turmeric, and black salt, served with whole-wheat toast.",
            350,
            &[Vegan, Vegetarian, HighProtein],
        ),
        meal(
            MealSlot::Breakfast,
            "Greek Yogurt Parfait",
            "Layers of high-protein Greek yogurt, mixed berries, and a sprinkle of nuts for healthy fats.",
            300,
            &[Vegetarian, LowCarb, GlutenFree],
        ),
        meal(
            MealSlot::Breakfast,
            "Muscle-Builder Oatmeal",
            "Rolled oats cooked with a scoop of whey or plant-based protein, topped with almonds and banana.",
            450,
            &[Vegetarian, HighProtein],
        ),
        meal(
            MealSlot::Breakfast,
            "Avocado Toast with Eggs",
            "Two slices of whole-grain toast with smashed avocado and two poached or fried eggs.",
            400,
            &[Vegetarian],
        ),
        meal(
            MealSlot::Breakfast,
            "Keto Scrambled Eggs",
            "Creamy scrambled eggs with cheddar cheese and a side of avocado.",
            380,
            &[Vegetarian, Keto, LowCarb, GlutenFree],
        ),
        meal(
            MealSlot::Breakfast,
            "Vegan Protein Smoothie",
            "A delicious smoothie with banana, spinach, almond milk, chia seeds, and vegan protein powder.",
            320,
            &[Vegan, Vegetarian, GlutenFree, HighProtein],
        ),
        meal(
            MealSlot::Breakfast,
            "High-Protein Chicken Sausage & Eggs",
            "Scrambled eggs with two chicken sausages for a high-protein start.",
            420,
            &[NonVeg, HighProtein, LowCarb, GlutenFree],
        ),
        meal(
            MealSlot::Lunch,
            "Grilled Chicken Salad",
            "Grilled chicken breast over mixed greens, with cherry tomatoes, cucumbers, and a light vinaigrette.",
            450,
            &[NonVeg, HighProtein, LowCarb, GlutenFree],
        ),
        meal(
            MealSlot::Lunch,
            "Hearty Chickpea Salad",
            "A refreshing salad with chickpeas, chopped vegetables, and a lemon-tahini dressing.",
            400,
            &[Vegan, Vegetarian, GlutenFree],
        ),
        meal(
            MealSlot::Lunch,
            "Quinoa Power Bowl",
            "Quinoa with black beans, corn, avocado, and a sprinkle of feta cheese or vegan alternative.",
            500,
            &[Vegetarian, GlutenFree, HighProtein],
        ),
        meal(
            MealSlot::Lunch,
            "Lean Turkey Wrap",
            "Sliced turkey breast with lettuce, tomato, and hummus in a whole-wheat wrap.",
            380,
            &[NonVeg],
        ),
        meal(
            MealSlot::Lunch,
            "Keto Salmon Salad",
            "Flaked salmon mixed with mayonnaise and celery, served on lettuce cups.",
            420,
            &[NonVeg, Keto, LowCarb, GlutenFree],
        ),
        meal(
            MealSlot::Lunch,
            "Paneer Tikka Bowl",
            "Cubes of marinated paneer with sauteed peppers and onions over a bed of quinoa.",
            480,
            &[Vegetarian, HighProtein, GlutenFree],
        ),
        meal(
            MealSlot::Dinner,
            "Baked Salmon & Asparagus",
            "A fillet of salmon baked with lemon and dill, served with roasted asparagus.",
            550,
            &[NonVeg, HighProtein, LowCarb, Keto, GlutenFree],
        ),
        meal(
            MealSlot::Dinner,
            "Lentil and Vegetable Curry",
            "A rich and flavorful curry with lentils, potatoes, carrots, and peas, served with brown rice.",
            500,
            &[Vegan, Vegetarian, GlutenFree],
        ),
        meal(
            MealSlot::Dinner,
            "Lean Steak & Veggies",
            "A 6oz sirloin steak with a side of steamed broccoli and a small baked sweet potato.",
            600,
            &[NonVeg, HighProtein],
        ),
        meal(
            MealSlot::Dinner,
            "Tofu and Broccoli Stir-Fry",
            "Crispy tofu and broccoli florets in a savory garlic-ginger sauce.",
            450,
            &[Vegan, Vegetarian, HighProtein],
        ),
        meal(
            MealSlot::Dinner,
            "Cauliflower Crust Veggie Pizza",
            "A low-carb pizza with a cauliflower crust, topped with mozzarella and your favorite vegetables.",
            400,
            &[Vegetarian, Keto, LowCarb, GlutenFree],
        ),
        meal(
            MealSlot::Dinner,
            "Chicken and Veggie Skewers",
            "Skewers of chicken, bell peppers, onions, and zucchini, grilled to perfection.",
            480,
            &[NonVeg, HighProtein, LowCarb, GlutenFree],
        ),
    ]
}
