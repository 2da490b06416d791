//! Exercise lists keyed by gender, goal, and experience level.

use crate::keys::Gender;

/// Goal bucket reached for when a gender's set lacks the requested goal.
const FALLBACK_GOAL: &str = "Strength Training";
/// Final fallback, always present in the gender-neutral set.
const DEFAULT_GOAL: &str = "General Fitness";

#[derive(Debug)]
struct GoalPlan {
    goal: &'static str,
    beginner: Vec<String>,
    intermediate: Vec<String>,
}

impl GoalPlan {
    fn new(goal: &'static str, beginner: &[&str], intermediate: &[&str]) -> Self {
        Self {
            goal,
            beginner: beginner.iter().map(ToString::to_string).collect(),
            intermediate: intermediate.iter().map(ToString::to_string).collect(),
        }
    }

    /// Unknown levels resolve to the beginner list.
    fn for_level(&self, level: &str) -> &[String] {
        match level {
            "Intermediate" => &self.intermediate,
            _ => &self.beginner,
        }
    }
}

#[derive(Debug)]
struct GoalSet {
    goals: Vec<GoalPlan>,
}

impl GoalSet {
    fn find(&self, goal: &str) -> Option<&GoalPlan> {
        self.goals.iter().find(|plan| plan.goal == goal)
    }
}

#[derive(Debug)]
pub(crate) struct WorkoutTable {
    male: GoalSet,
    female: GoalSet,
    other: GoalSet,
}

impl WorkoutTable {
    pub(crate) fn build() -> Self {
        Self {
            male: GoalSet {
                goals: vec![
                    GoalPlan::new(
                        "Strength Training",
                        &["3x5 Squats", "3x5 Bench Press", "3x5 Barbell Rows", "Push-ups"],
                        &["5x5 Squats", "5x5 Bench Press", "1x5 Deadlifts", "3x8 Pull-ups"],
                    ),
                    GoalPlan::new(
                        "Cardio Endurance",
                        &["30 minutes of steady-state jogging", "3x1 min plank"],
                        &["5km run for time", "20 minutes of HIIT (sprints, burpees)"],
                    ),
                ],
            },
            female: GoalSet {
                goals: vec![
                    GoalPlan::new(
                        "Strength Training",
                        &[
                            "3x8 Goblet Squats",
                            "3x10 Dumbbell Bench Press",
                            "3x10 Glute Bridges",
                            "Dumbbell Rows",
                        ],
                        &[
                            "3x8 Barbell Hip Thrusts",
                            "3x8 Overhead Press",
                            "Assisted Pull-ups",
                            "Romanian Deadlifts",
                        ],
                    ),
                    GoalPlan::new(
                        "Cardio Endurance",
                        &["30-minute incline walk on treadmill", "15 minutes on elliptical"],
                        &[
                            "HIIT session with jump rope and bodyweight exercises",
                            "45-minute spin class",
                        ],
                    ),
                ],
            },
            other: GoalSet {
                goals: vec![
                    GoalPlan::new(
                        "General Fitness",
                        &[
                            "Full-body circuit (squats, push-ups, planks, jumping jacks)",
                            "20-minute yoga flow",
                        ],
                        &["Circuit training with weights", "30-minute rowing machine session"],
                    ),
                    GoalPlan::new(
                        "Flexibility",
                        &[
                            "Basic static stretching (hamstrings, quads, chest)",
                            "15-minute yoga for beginners",
                        ],
                        &[
                            "Dynamic stretching routine",
                            "30-minute Vinyasa flow yoga",
                            "Foam rolling",
                        ],
                    ),
                ],
            },
        }
    }

    /// Exercise list for the resolved gender, goal, and level.
    ///
    /// Goals missing from the gender's set degrade in two steps: the set's
    /// strength-training bucket first, then the gender-neutral general
    /// fitness bucket.
    pub(crate) fn exercises(&self, gender: Gender, goal: &str, level: &str) -> Vec<String> {
        let set = match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
            Gender::Other => &self.other,
        };
        set.find(goal)
            .or_else(|| set.find(FALLBACK_GOAL))
            .or_else(|| self.other.find(DEFAULT_GOAL))
            .or_else(|| self.other.goals.first())
            .map(|plan| plan.for_level(level).to_vec())
            .unwrap_or_default()
    }
}
