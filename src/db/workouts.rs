//! Date-keyed workout records

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use tracing::info;

use super::{
    Database, ExerciseSet, WORKOUT_PREFIX, Workout, WorkoutExercise, append_set, workout_key,
};

impl Database {
    /// Store a workout under its date, replacing any previous record
    pub fn save_workout(&self, workout: &Workout) -> Result<()> {
        self.put_json(&workout_key(workout.date), workout)
    }

    pub fn load_workout(&self, date: NaiveDate) -> Result<Option<Workout>> {
        self.get_json(&workout_key(date))
    }

    /// All stored workouts, oldest first
    pub fn load_all_workouts(&self) -> Result<Vec<Workout>> {
        self.scan_prefix(WORKOUT_PREFIX)?
            .into_iter()
            .map(|(key, json)| {
                serde_json::from_str::<Workout>(&json)
                    .with_context(|| format!("malformed record under key {}", key))
            })
            .collect()
    }

    /// Delete the workout of a day. Returns whether one existed.
    pub fn delete_workout(&self, date: NaiveDate) -> Result<bool> {
        let existed = self.remove(&workout_key(date))?;
        if existed {
            info!("Deleted workout {}", date);
        }
        Ok(existed)
    }

    /// Add an exercise without sets to the workout of `date`,
    /// creating the workout if this is the first exercise of the day.
    pub fn add_exercise(&self, date: NaiveDate, name: &str) -> Result<Workout> {
        let mut workout = self.load_workout(date)?.unwrap_or_else(|| Workout::empty(date));

        if !workout.has_exercise(name) {
            workout.exercises.push(WorkoutExercise::new(name));
            self.save_workout(&workout)?;
            info!("Added {} to workout {}", name, date);
        }

        Ok(workout)
    }

    /// Save the sets entered for an exercise.
    ///
    /// The set history of the exercise is always written. The workout of
    /// `date` is only touched when it already contains the exercise.
    pub fn record_sets(&self, date: NaiveDate, name: &str, sets: &[ExerciseSet]) -> Result<()> {
        self.save_exercise_sets(name, sets)?;

        let Some(mut workout) = self.load_workout(date)? else {
            return Ok(());
        };
        let Some(exercise) = workout.exercises.iter_mut().find(|e| e.name == name) else {
            return Ok(());
        };
        exercise.sets = sets.to_vec();
        self.save_workout(&workout)
    }

    /// Append one set to an exercise of the workout of `date`, adding the
    /// exercise (and the workout) first when needed. The new set follows the
    /// sets already logged that day, not the set history. Returns the sets
    /// of the exercise for that day.
    pub fn log_set(
        &self,
        date: NaiveDate,
        name: &str,
        weight: &str,
        reps: &str,
    ) -> Result<Vec<ExerciseSet>> {
        let workout = self.add_exercise(date, name)?;
        let mut sets = workout
            .find_exercise(name)
            .map(|e| e.sets.clone())
            .unwrap_or_default();

        append_set(&mut sets, weight, reps);
        self.record_sets(date, name, &sets)?;
        info!("Logged {} set {} on {}", name, sets.len(), date);
        Ok(sets)
    }

    /// Drop an exercise from a workout. The workout stays stored even when
    /// it has no exercises left. Returns whether the exercise was present.
    pub fn remove_exercise(&self, date: NaiveDate, name: &str) -> Result<bool> {
        let Some(mut workout) = self.load_workout(date)? else {
            return Ok(false);
        };

        let before = workout.exercises.len();
        workout.exercises.retain(|e| e.name != name);
        if workout.exercises.len() == before {
            return Ok(false);
        }

        self.save_workout(&workout)?;
        info!("Removed {} from workout {}", name, date);
        Ok(true)
    }

    /// Copy the workout of `from` to `to`, replacing whatever `to` held
    pub fn copy_workout(&self, from: NaiveDate, to: NaiveDate) -> Result<Workout> {
        let source = self
            .load_workout(from)?
            .ok_or_else(|| anyhow!("No workout on {}", from))?;

        let copy = Workout {
            date: to,
            exercises: source.exercises,
        };
        self.save_workout(&copy)?;
        info!("Copied workout {} to {}", from, to);
        Ok(copy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_workout(day: NaiveDate) -> Workout {
        Workout {
            date: day,
            exercises: vec![
                WorkoutExercise {
                    name: "Bench Press".to_string(),
                    sets: vec![ExerciseSet::new(1, "60", "10"), ExerciseSet::new(2, "65", "8")],
                },
                WorkoutExercise {
                    name: "Dips".to_string(),
                    sets: vec![ExerciseSet::new(1, "0", "12")],
                },
            ],
        }
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let db = Database::open_in_memory().unwrap();
        let workout = create_workout(date(2024, 3, 5));
        db.save_workout(&workout).unwrap();

        assert_eq!(db.load_workout(date(2024, 3, 5)).unwrap(), Some(workout));
        assert!(db.get("workout_2024-03-05").unwrap().is_some());
    }

    #[test]
    fn test_load_missing_workout() {
        let db = Database::open_in_memory().unwrap();
        assert_eq!(db.load_workout(date(2024, 3, 5)).unwrap(), None);
    }

    #[test]
    fn test_load_all_workouts_sorted() {
        let db = Database::open_in_memory().unwrap();
        db.save_workout(&create_workout(date(2024, 3, 9))).unwrap();
        db.save_workout(&create_workout(date(2023, 12, 31))).unwrap();
        db.save_exercise_sets("Dips", &[]).unwrap();

        let dates: Vec<NaiveDate> = db.load_all_workouts().unwrap().iter().map(|w| w.date).collect();
        assert_eq!(dates, vec![date(2023, 12, 31), date(2024, 3, 9)]);
    }

    #[test]
    fn test_load_all_workouts_malformed_is_error() {
        let db = Database::open_in_memory().unwrap();
        db.save_workout(&create_workout(date(2024, 3, 9))).unwrap();
        db.put("workout_2024-03-10", "[1, 2").unwrap();

        let err = db.load_all_workouts().unwrap_err();
        assert!(format!("{:#}", err).contains("workout_2024-03-10"));
    }

    #[test]
    fn test_delete_workout() {
        let db = Database::open_in_memory().unwrap();
        db.save_workout(&create_workout(date(2024, 3, 5))).unwrap();

        assert!(db.delete_workout(date(2024, 3, 5)).unwrap());
        assert!(!db.delete_workout(date(2024, 3, 5)).unwrap());
        assert_eq!(db.load_workout(date(2024, 3, 5)).unwrap(), None);
    }

    #[test]
    fn test_add_exercise_creates_workout() {
        let db = Database::open_in_memory().unwrap();
        let day = date(2024, 3, 5);

        let workout = db.add_exercise(day, "Squats").unwrap();
        assert_eq!(workout.exercises, vec![WorkoutExercise::new("Squats")]);
        assert_eq!(db.load_workout(day).unwrap(), Some(workout));
    }

    #[test]
    fn test_add_exercise_twice_keeps_one() {
        let db = Database::open_in_memory().unwrap();
        let day = date(2024, 3, 5);
        db.save_workout(&create_workout(day)).unwrap();

        let workout = db.add_exercise(day, "Dips").unwrap();
        assert_eq!(workout.exercises.len(), 2);
        assert_eq!(workout.exercises[1].sets.len(), 1);
    }

    #[test]
    fn test_record_sets_updates_workout_and_history() {
        let db = Database::open_in_memory().unwrap();
        let day = date(2024, 3, 5);
        db.add_exercise(day, "Squats").unwrap();

        let sets = vec![ExerciseSet::new(1, "100", "5")];
        db.record_sets(day, "Squats", &sets).unwrap();

        assert_eq!(db.load_exercise_sets("Squats").unwrap(), sets);
        let workout = db.load_workout(day).unwrap().unwrap();
        assert_eq!(workout.find_exercise("Squats").unwrap().sets, sets);
    }

    #[test]
    fn test_record_sets_for_absent_exercise_only_writes_history() {
        let db = Database::open_in_memory().unwrap();
        let day = date(2024, 3, 5);
        db.save_workout(&create_workout(day)).unwrap();

        let sets = vec![ExerciseSet::new(1, "20", "15")];
        db.record_sets(day, "Lunges", &sets).unwrap();

        assert_eq!(db.load_exercise_sets("Lunges").unwrap(), sets);
        assert_eq!(db.load_workout(day).unwrap(), Some(create_workout(day)));
    }

    #[test]
    fn test_log_first_set_creates_workout() {
        let db = Database::open_in_memory().unwrap();
        let day = date(2024, 3, 6);

        let sets = db.log_set(day, "Squats", "100", "5").unwrap();
        assert_eq!(sets, vec![ExerciseSet::new(1, "100", "5")]);

        let workout = db.load_workout(day).unwrap().unwrap();
        assert_eq!(workout.find_exercise("Squats").unwrap().sets, sets);
        assert_eq!(db.load_exercise_sets("Squats").unwrap(), sets);
    }

    #[test]
    fn test_log_second_set_ignores_earlier_history() {
        let db = Database::open_in_memory().unwrap();
        db.log_set(date(2024, 3, 4), "Squats", "90", "5").unwrap();
        db.log_set(date(2024, 3, 4), "Squats", "95", "5").unwrap();

        let day = date(2024, 3, 6);
        db.log_set(day, "Squats", "100", "5").unwrap();
        let sets = db.log_set(day, "Squats", "105", "3").unwrap();

        assert_eq!(
            sets,
            vec![ExerciseSet::new(1, "100", "5"), ExerciseSet::new(2, "105", "3")]
        );
        let earlier = db.load_workout(date(2024, 3, 4)).unwrap().unwrap();
        assert_eq!(earlier.find_exercise("Squats").unwrap().sets.len(), 2);
    }

    #[test]
    fn test_remove_only_exercise_leaves_empty_workout() {
        let db = Database::open_in_memory().unwrap();
        let day = date(2024, 3, 5);
        db.add_exercise(day, "Squats").unwrap();

        assert!(db.remove_exercise(day, "Squats").unwrap());
        assert_eq!(db.load_workout(day).unwrap(), Some(Workout::empty(day)));
    }

    #[test]
    fn test_remove_missing_exercise() {
        let db = Database::open_in_memory().unwrap();
        let day = date(2024, 3, 5);
        assert!(!db.remove_exercise(day, "Squats").unwrap());
        db.add_exercise(day, "Squats").unwrap();
        assert!(!db.remove_exercise(day, "Dips").unwrap());
    }

    #[test]
    fn test_copy_workout_to_today() {
        let db = Database::open_in_memory().unwrap();
        let past = date(2024, 3, 1);
        let today = date(2024, 3, 5);
        db.save_workout(&create_workout(past)).unwrap();

        let copy = db.copy_workout(past, today).unwrap();
        assert_eq!(copy.date, today);
        assert_eq!(copy.exercises, create_workout(past).exercises);
        assert_eq!(db.load_workout(today).unwrap(), Some(copy));
        assert_eq!(db.load_workout(past).unwrap(), Some(create_workout(past)));
    }

    #[test]
    fn test_copy_missing_workout_fails() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.copy_workout(date(2024, 3, 1), date(2024, 3, 5)).is_err());
        assert_eq!(db.load_workout(date(2024, 3, 5)).unwrap(), None);
    }
}
