//! Database module - key-value preferences store on SQLite
//!
//! Every record is a JSON string under a string key:
//! - `workout_<yyyy-MM-dd>` - one [`Workout`] per day
//! - `exercises_<category>` - exercise names of a muscle group
//! - `sets_<exercise>` - last entered sets of an exercise

mod models;
mod workouts;

pub use models::{
    ExerciseSet, Workout, WorkoutExercise, append_set, delete_set, is_numeric_input, update_set,
};

use anyhow::{Context, Result, bail};
use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::exercises::Category;

const WORKOUT_PREFIX: &str = "workout_";
const EXERCISES_PREFIX: &str = "exercises_";
const SETS_PREFIX: &str = "sets_";

pub fn workout_key(date: chrono::NaiveDate) -> String {
    format!("{}{}", WORKOUT_PREFIX, date.format("%Y-%m-%d"))
}

pub fn exercises_key(category: Category) -> String {
    format!("{}{}", EXERCISES_PREFIX, category.name())
}

pub fn sets_key(exercise: &str) -> String {
    format!("{}{}", SETS_PREFIX, exercise)
}

/// Database wrapper
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create database
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("cannot open database {}", path))?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    /// Throwaway database, used by tests
    pub fn open_in_memory() -> Result<Self> {
        let db = Self { conn: Connection::open_in_memory()? };
        db.init_schema()?;
        Ok(db)
    }

    /// Initialize database schema
    fn init_schema(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS preferences (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self.conn
            .query_row(
                "SELECT value FROM preferences WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    pub fn put(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO preferences (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        debug!("stored {} ({} bytes)", key, value.len());
        Ok(())
    }

    /// Remove a key. Returns whether it existed.
    pub fn remove(&self, key: &str) -> Result<bool> {
        let changed = self.conn.execute("DELETE FROM preferences WHERE key = ?1", params![key])?;
        Ok(changed > 0)
    }

    /// All entries whose key starts with `prefix`, ordered by key
    pub fn scan_prefix(&self, prefix: &str) -> Result<Vec<(String, String)>> {
        let mut stmt = self.conn.prepare(
            "SELECT key, value FROM preferences
             WHERE substr(key, 1, length(?1)) = ?1
             ORDER BY key",
        )?;

        let entries = stmt
            .query_map(params![prefix], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(entries)
    }

    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.get(key)? {
            Some(json) => {
                let value = serde_json::from_str(&json)
                    .with_context(|| format!("malformed record under key {}", key))?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    fn put_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)?;
        self.put(key, &json)
    }

    /// Save the set history of an exercise
    pub fn save_exercise_sets(&self, exercise: &str, sets: &[ExerciseSet]) -> Result<()> {
        self.put_json(&sets_key(exercise), sets)
    }

    /// Set history of an exercise, empty if nothing was saved
    pub fn load_exercise_sets(&self, exercise: &str) -> Result<Vec<ExerciseSet>> {
        Ok(self.get_json(&sets_key(exercise))?.unwrap_or_default())
    }

    pub fn save_exercise_names(&self, category: Category, names: &[String]) -> Result<()> {
        self.put_json(&exercises_key(category), names)
    }

    /// Saved exercise names of a category, empty if nothing was saved
    pub fn load_exercise_names(&self, category: Category) -> Result<Vec<String>> {
        Ok(self.get_json(&exercises_key(category))?.unwrap_or_default())
    }

    /// Exercises shown for a category: the saved list, or the defaults
    pub fn category_exercises(&self, category: Category) -> Result<Vec<String>> {
        let saved = self.load_exercise_names(category)?;
        if saved.is_empty() {
            return Ok(category.default_exercises().iter().map(|s| s.to_string()).collect());
        }
        Ok(saved)
    }

    /// Add a user-defined exercise to a category.
    /// Blank names and case-insensitive duplicates are rejected.
    pub fn add_custom_exercise(&self, category: Category, name: &str) -> Result<Vec<String>> {
        let name = name.trim();
        if name.is_empty() {
            bail!("Exercise name cannot be empty");
        }

        let mut names = self.category_exercises(category)?;
        let lowered = name.to_lowercase();
        if names.iter().any(|n| n.to_lowercase() == lowered) {
            bail!("This exercise already exists");
        }

        names.push(name.to_string());
        self.save_exercise_names(category, &names)?;
        info!("Added exercise {} to {}", name, category.name());
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_key() {
        let db = Database::open_in_memory().unwrap();
        assert_eq!(db.get("nothing").unwrap(), None);
    }

    #[test]
    fn test_put_overwrites() {
        let db = Database::open_in_memory().unwrap();
        db.put("k", "1").unwrap();
        db.put("k", "2").unwrap();
        assert_eq!(db.get("k").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_remove() {
        let db = Database::open_in_memory().unwrap();
        db.put("k", "1").unwrap();
        assert!(db.remove("k").unwrap());
        assert!(!db.remove("k").unwrap());
        assert_eq!(db.get("k").unwrap(), None);
    }

    #[test]
    fn test_scan_prefix_ordered_and_filtered() {
        let db = Database::open_in_memory().unwrap();
        db.put("workout_2024-03-10", "b").unwrap();
        db.put("workout_2024-03-01", "a").unwrap();
        db.put("sets_Squats", "[]").unwrap();
        db.put("workout", "too short").unwrap();

        let keys: Vec<String> = db.scan_prefix("workout_").unwrap()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, vec!["workout_2024-03-01", "workout_2024-03-10"]);
    }

    #[test]
    fn test_scan_prefix_treats_wildcards_literally() {
        let db = Database::open_in_memory().unwrap();
        db.put("sets_a_b", "[]").unwrap();
        db.put("sets_axb", "[]").unwrap();
        assert_eq!(db.scan_prefix("sets_a_").unwrap().len(), 1);
    }

    #[test]
    fn test_exercise_sets_roundtrip() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.load_exercise_sets("Dips").unwrap().is_empty());

        let sets = vec![ExerciseSet::new(1, "0", "12"), ExerciseSet::new(2, "10", "8")];
        db.save_exercise_sets("Dips", &sets).unwrap();
        assert_eq!(db.load_exercise_sets("Dips").unwrap(), sets);
        assert_eq!(
            db.get("sets_Dips").unwrap().unwrap(),
            r#"[{"setNumber":1,"weight":"0","reps":"12"},{"setNumber":2,"weight":"10","reps":"8"}]"#
        );
    }

    #[test]
    fn test_malformed_sets_is_error() {
        let db = Database::open_in_memory().unwrap();
        db.put("sets_Dips", "{not json").unwrap();
        let err = db.load_exercise_sets("Dips").unwrap_err();
        assert!(err.to_string().contains("sets_Dips"));
    }

    #[test]
    fn test_category_exercises_defaults() {
        let db = Database::open_in_memory().unwrap();
        let names = db.category_exercises(Category::Chest).unwrap();
        assert_eq!(names.len(), 5);
        assert_eq!(names[0], "Bench Press");
    }

    #[test]
    fn test_add_custom_exercise() {
        let db = Database::open_in_memory().unwrap();
        let names = db.add_custom_exercise(Category::Legs, "Hack Squat").unwrap();
        assert_eq!(names.len(), 6);
        assert_eq!(db.load_exercise_names(Category::Legs).unwrap(), names);
        assert_eq!(db.get("exercises_Legs").unwrap().unwrap().chars().next(), Some('['));
    }

    #[test]
    fn test_add_custom_exercise_rejects_blank() {
        let db = Database::open_in_memory().unwrap();
        let err = db.add_custom_exercise(Category::Legs, "   ").unwrap_err();
        assert_eq!(err.to_string(), "Exercise name cannot be empty");
    }

    #[test]
    fn test_add_custom_exercise_rejects_duplicate() {
        let db = Database::open_in_memory().unwrap();
        let err = db.add_custom_exercise(Category::Legs, "squats").unwrap_err();
        assert_eq!(err.to_string(), "This exercise already exists");
        assert!(db.load_exercise_names(Category::Legs).unwrap().is_empty());
    }
}
