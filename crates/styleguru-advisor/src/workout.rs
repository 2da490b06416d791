//! Three-day workout split planning.

use styleguru_catalog::{Catalog, CatalogError};
use styleguru_core::recommendations::{WorkoutDay, WorkoutPlan};
use styleguru_core::Profile;

/// Lays the exercise list for the profile's gender, goal, and level out
/// over a three-day split with an active-recovery middle day.
///
/// # Errors
/// Returns an error if the catalog cannot serve the exercise lists.
pub async fn workout_plan(
    catalog: &dyn Catalog,
    profile: &Profile,
) -> Result<WorkoutPlan, CatalogError> {
    let gender = profile.gender.as_deref().unwrap_or("Other");
    let goal = profile.goal.as_deref().unwrap_or("General Fitness");
    let level = profile.level.as_deref().unwrap_or("Beginner");

    let exercises = catalog.workout_exercises(gender, goal, level).await?;

    Ok(WorkoutPlan {
        plan_title: format!("{gender} {level} {goal} Plan"),
        weekly_focus: format!(
            "This plan is designed for a {level} {} individual to achieve their \
             goal of {goal} through targeted exercises.",
            gender.to_lowercase()
        ),
        workout_split: vec![
            WorkoutDay {
                day: 1,
                title: format!("{goal} Focus A"),
                exercises: window(&exercises, 0, 3),
            },
            WorkoutDay {
                day: 2,
                title: "Active Recovery".to_string(),
                exercises: vec!["Light walking, stretching, or yoga".to_string()],
            },
            WorkoutDay {
                day: 3,
                title: format!("{goal} Focus B"),
                exercises: window(&exercises, 1, 4),
            },
        ],
        pro_tip: format!(
            "For a {} focusing on {goal}, ensure you have proper form to prevent \
             injury and maximize results. Consider a dynamic warm-up before each \
             session.",
            gender.to_lowercase()
        ),
    })
}

/// Copies `items[start..end]`, clamping both bounds to the list length.
fn window(items: &[String], start: usize, end: usize) -> Vec<String> {
    let start = start.min(items.len());
    let end = end.min(items.len()).max(start);
    items[start..end].to_vec()
}
