//! Screens and their routes

use chrono::NaiveDate;

use crate::exercises::Category;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Start,
    WorkoutCategories,
    Exercises(Category),
    ExerciseDetails(String),
    Workout(NaiveDate),
    Calendar,
    HelpMuscleGroups,
    HelpExercises(Category),
    ExerciseInstructions(String),
    WeeklyReport,
}

impl Screen {
    /// Route pattern with `{placeholder}` segments
    pub fn pattern(&self) -> &'static str {
        match self {
            Screen::Start => "start",
            Screen::WorkoutCategories => "workout_categories",
            Screen::Exercises(_) => "exercises/{category}",
            Screen::ExerciseDetails(_) => "exercise_details/{exercise}",
            Screen::Workout(_) => "workout/{date}",
            Screen::Calendar => "calendar",
            Screen::HelpMuscleGroups => "help_muscle_groups",
            Screen::HelpExercises(_) => "help_exercises/{category}",
            Screen::ExerciseInstructions(_) => "exercise_instructions/{exercise}",
            Screen::WeeklyReport => "weekly_report",
        }
    }

    /// Concrete route, placeholders substituted
    pub fn route(&self) -> String {
        let pattern = self.pattern();
        match self {
            Screen::Exercises(c) | Screen::HelpExercises(c) => pattern.replace("{category}", c.name()),
            Screen::ExerciseDetails(e) | Screen::ExerciseInstructions(e) => {
                pattern.replace("{exercise}", e)
            }
            Screen::Workout(d) => pattern.replace("{date}", &d.format("%Y-%m-%d").to_string()),
            _ => pattern.to_string(),
        }
    }

    pub fn parse(route: &str) -> Option<Screen> {
        let (head, arg) = match route.split_once('/') {
            Some((head, arg)) => (head, Some(arg)),
            None => (route, None),
        };

        let screen = match (head, arg) {
            ("start", None) => Screen::Start,
            ("workout_categories", None) => Screen::WorkoutCategories,
            ("calendar", None) => Screen::Calendar,
            ("help_muscle_groups", None) => Screen::HelpMuscleGroups,
            ("weekly_report", None) => Screen::WeeklyReport,
            ("exercises", Some(c)) => Screen::Exercises(Category::from_name(c)?),
            ("help_exercises", Some(c)) => Screen::HelpExercises(Category::from_name(c)?),
            ("exercise_details", Some(e)) if !e.is_empty() => Screen::ExerciseDetails(e.to_string()),
            ("exercise_instructions", Some(e)) if !e.is_empty() => {
                Screen::ExerciseInstructions(e.to_string())
            }
            ("workout", Some(d)) => Screen::Workout(NaiveDate::parse_from_str(d, "%Y-%m-%d").ok()?),
            _ => return None,
        };
        Some(screen)
    }

    pub fn title(&self) -> String {
        match self {
            Screen::Start => "Progress Keeper".to_string(),
            Screen::WorkoutCategories => "Muscle Groups".to_string(),
            Screen::Exercises(c) => c.name().to_string(),
            Screen::ExerciseDetails(e) | Screen::ExerciseInstructions(e) => e.clone(),
            Screen::Workout(d) => d.format("%A, %B %-d, %Y").to_string(),
            Screen::Calendar => "Calendar".to_string(),
            Screen::HelpMuscleGroups => "Help - Muscle Groups".to_string(),
            Screen::HelpExercises(c) => format!("Help - {}", c.name()),
            Screen::WeeklyReport => "This weeks stats".to_string(),
        }
    }
}
