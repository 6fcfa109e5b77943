//! Exercise catalogue - muscle groups and their default exercises

use serde::{Deserialize, Serialize};

/// Muscle groups, in the order they are listed everywhere
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Traps,
    Shoulders,
    Chest,
    Back,
    Triceps,
    Biceps,
    Forearms,
    Legs,
    Calves,
}

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Category::Traps => "Traps",
            Category::Shoulders => "Shoulders",
            Category::Chest => "Chest",
            Category::Back => "Back",
            Category::Triceps => "Triceps",
            Category::Biceps => "Biceps",
            Category::Forearms => "Forearms",
            Category::Legs => "Legs",
            Category::Calves => "Calves",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Category::Traps => "🔺",
            Category::Shoulders => "🏋️",
            Category::Chest => "💪",
            Category::Back => "🔙",
            Category::Triceps => "🔨",
            Category::Biceps => "💪",
            Category::Forearms => "✊",
            Category::Legs => "🦵",
            Category::Calves => "🦶",
        }
    }

    /// All muscle groups for iteration
    pub fn all() -> &'static [Category] {
        &[
            Category::Traps,
            Category::Shoulders,
            Category::Chest,
            Category::Back,
            Category::Triceps,
            Category::Biceps,
            Category::Forearms,
            Category::Legs,
            Category::Calves,
        ]
    }

    /// Case-insensitive lookup by name
    pub fn from_name(name: &str) -> Option<Category> {
        Category::all()
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Exercises offered until the user saves their own list
    pub fn default_exercises(&self) -> &'static [&'static str] {
        match self {
            Category::Traps => &[
                "Barbell Shrugs",
                "Dumbbell Shrugs",
                "Behind-the-Back Smith Machine Shrugs",
                "Rack Pulls",
                "Face Pulls",
            ],
            Category::Shoulders => &[
                "Military Press",
                "Lateral Raises",
                "Front Raises",
                "Reverse Flyes",
                "Arnold Press",
            ],
            Category::Chest => &[
                "Bench Press",
                "Incline Dumbbell Press",
                "Dips",
                "Cable Flyes",
                "Push-Ups",
            ],
            Category::Back => &[
                "Pull-Ups",
                "Barbell Rows",
                "Lat Pulldowns",
                "Deadlifts",
                "T-Bar Rows",
            ],
            Category::Triceps => &[
                "Tricep Pushdowns",
                "Skull Crushers",
                "Close-Grip Bench Press",
                "Overhead Tricep Extensions",
                "Diamond Push-Ups",
            ],
            Category::Biceps => &[
                "Barbell Curls",
                "Hammer Curls",
                "Preacher Curls",
                "Incline Dumbbell Curls",
                "Concentration Curls",
            ],
            Category::Forearms => &[
                "Wrist Curls",
                "Reverse Wrist Curls",
                "Farmers Walks",
                "Plate Pinches",
                "Behind-the-Back Wrist Curls",
            ],
            Category::Legs => &[
                "Squats",
                "Romanian Deadlifts",
                "Leg Press",
                "Lunges",
                "Leg Extensions",
            ],
            Category::Calves => &[
                "Standing Calf Raises",
                "Seated Calf Raises",
                "Donkey Calf Raises",
                "Jump Rope",
                "Single-Leg Calf Raises",
            ],
        }
    }
}

/// Muscle group a default exercise belongs to
pub fn find_category_of(exercise: &str) -> Option<Category> {
    Category::all()
        .iter()
        .copied()
        .find(|c| c.default_exercises().contains(&exercise))
}

/// Case-insensitive search filter used by the exercise list
pub fn filter_exercises<'a>(names: &'a [String], query: &str) -> Vec<&'a String> {
    let query = query.to_lowercase();
    names
        .iter()
        .filter(|name| name.to_lowercase().contains(&query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nine_categories_in_order() {
        let names: Vec<&str> = Category::all().iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            vec!["Traps", "Shoulders", "Chest", "Back", "Triceps", "Biceps", "Forearms", "Legs", "Calves"]
        );
    }

    #[test]
    fn test_every_category_has_five_defaults() {
        for category in Category::all() {
            assert_eq!(category.default_exercises().len(), 5, "{:?}", category);
        }
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Category::from_name("legs"), Some(Category::Legs));
        assert_eq!(Category::from_name(" Calves "), Some(Category::Calves));
        assert_eq!(Category::from_name("Neck"), None);
    }

    #[test]
    fn test_find_category_of() {
        assert_eq!(find_category_of("Face Pulls"), Some(Category::Traps));
        assert_eq!(find_category_of("Jump Rope"), Some(Category::Calves));
        assert_eq!(find_category_of("Yoga"), None);
    }

    #[test]
    fn test_filter_exercises_case_insensitive() {
        let names: Vec<String> = Category::Biceps.default_exercises().iter().map(|s| s.to_string()).collect();
        let found = filter_exercises(&names, "CURL");
        assert_eq!(found.len(), 5);
        let found = filter_exercises(&names, "hammer");
        assert_eq!(found, vec!["Hammer Curls"]);
        assert_eq!(filter_exercises(&names, "").len(), 5);
    }
}
