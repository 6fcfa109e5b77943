//! Workout records as they are stored in the preferences table

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One set of an exercise. Weight and reps are kept as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseSet {
    pub set_number: u32,
    pub weight: String,
    pub reps: String,
}

impl ExerciseSet {
    pub fn new(set_number: u32, weight: impl Into<String>, reps: impl Into<String>) -> Self {
        Self {
            set_number,
            weight: weight.into(),
            reps: reps.into(),
        }
    }
}

/// Exercise logged within a workout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutExercise {
    pub name: String,
    pub sets: Vec<ExerciseSet>,
}

impl WorkoutExercise {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sets: Vec::new(),
        }
    }
}

/// Everything logged on one calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workout {
    /// Serialized as `yyyy-MM-dd`
    pub date: NaiveDate,
    pub exercises: Vec<WorkoutExercise>,
}

impl Workout {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            exercises: Vec::new(),
        }
    }

    pub fn find_exercise(&self, name: &str) -> Option<&WorkoutExercise> {
        self.exercises.iter().find(|e| e.name == name)
    }

    pub fn has_exercise(&self, name: &str) -> bool {
        self.find_exercise(name).is_some()
    }

    pub fn total_sets(&self) -> usize {
        self.exercises.iter().map(|e| e.sets.len()).sum()
    }
}

/// Append a new set numbered after the existing ones
pub fn append_set(sets: &mut Vec<ExerciseSet>, weight: &str, reps: &str) {
    let number = sets.len() as u32 + 1;
    sets.push(ExerciseSet::new(number, weight, reps));
}

/// Replace weight and reps of a set, keeping its number.
/// Returns false if the index is out of range.
pub fn update_set(sets: &mut [ExerciseSet], index: usize, weight: &str, reps: &str) -> bool {
    match sets.get_mut(index) {
        Some(set) => {
            set.weight = weight.to_string();
            set.reps = reps.to_string();
            true
        }
        None => false,
    }
}

/// Remove a set and renumber the rest 1..n
pub fn delete_set(sets: &mut Vec<ExerciseSet>, index: usize) -> bool {
    if index >= sets.len() {
        return false;
    }
    sets.remove(index);
    for (i, set) in sets.iter_mut().enumerate() {
        set.set_number = i as u32 + 1;
    }
    true
}

/// Input filter for the weight/reps fields: digits with at most one `.` or `,`
pub fn is_numeric_input(text: &str) -> bool {
    let mut separators = 0;
    for c in text.chars() {
        match c {
            '0'..='9' => {}
            '.' | ',' => {
                separators += 1;
                if separators > 1 {
                    return false;
                }
            }
            _ => return false,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_sets(count: u32) -> Vec<ExerciseSet> {
        (1..=count)
            .map(|n| ExerciseSet::new(n, format!("{}", n * 10), "8"))
            .collect()
    }

    #[test]
    fn test_workout_json_format() {
        let workout = Workout {
            date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            exercises: vec![WorkoutExercise {
                name: "Bench Press".to_string(),
                sets: vec![ExerciseSet::new(1, "60", "10")],
            }],
        };
        let json = serde_json::to_string(&workout).unwrap();
        assert_eq!(
            json,
            r#"{"date":"2024-03-05","exercises":[{"name":"Bench Press","sets":[{"setNumber":1,"weight":"60","reps":"10"}]}]}"#
        );
    }

    #[test]
    fn test_workout_total_sets() {
        let mut workout = Workout::empty(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        workout.exercises.push(WorkoutExercise { name: "Squats".into(), sets: create_sets(3) });
        workout.exercises.push(WorkoutExercise::new("Lunges"));
        assert_eq!(workout.total_sets(), 3);
        assert!(workout.has_exercise("Lunges"));
        assert!(!workout.has_exercise("lunges"));
    }

    #[test]
    fn test_append_set_numbers_after_last() {
        let mut sets = create_sets(2);
        append_set(&mut sets, "50", "12");
        assert_eq!(sets[2], ExerciseSet::new(3, "50", "12"));
    }

    #[test]
    fn test_update_set_keeps_number() {
        let mut sets = create_sets(2);
        assert!(update_set(&mut sets, 1, "25", "6"));
        assert_eq!(sets[1], ExerciseSet::new(2, "25", "6"));
        assert!(!update_set(&mut sets, 5, "1", "1"));
    }

    #[test]
    fn test_delete_set_renumbers() {
        let mut sets = create_sets(4);
        assert!(delete_set(&mut sets, 1));
        let numbers: Vec<u32> = sets.iter().map(|s| s.set_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(sets[1].weight, "30");
        assert!(!delete_set(&mut sets, 3));
    }

    #[test]
    fn test_numeric_input_filter() {
        assert!(is_numeric_input(""));
        assert!(is_numeric_input("62"));
        assert!(is_numeric_input("62.5"));
        assert!(is_numeric_input("62,5"));
        assert!(is_numeric_input(".5"));
        assert!(!is_numeric_input("6.2.5"));
        assert!(!is_numeric_input("1,2.3"));
        assert!(!is_numeric_input("abc"));
        assert!(!is_numeric_input("-5"));
    }
}
