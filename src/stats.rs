//! Weekly report - workouts, sets and volume since Sunday

use chrono::{Datelike, Duration, NaiveDate};

use crate::db::{ExerciseSet, Workout};

/// Sunday of the week containing `today`
pub fn week_start(today: NaiveDate) -> NaiveDate {
    today - Duration::days(today.weekday().num_days_from_sunday() as i64)
}

/// Parse a weight or reps entry. Unlike plain `f64` parsing, a comma
/// decimal such as "62,5" counts. Anything unparsable or non-finite
/// ("nan", "inf") counts as zero.
pub fn parse_amount(text: &str) -> f64 {
    text.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Weight times reps of one set
pub fn set_volume(set: &ExerciseSet) -> f64 {
    parse_amount(&set.weight) * parse_amount(&set.reps)
}

/// Aggregate of the current calendar week
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeeklyReport {
    pub week_start: NaiveDate,
    pub workouts: usize,
    pub total_sets: usize,
    pub total_weight: f64,
}

impl WeeklyReport {
    /// Single pass over all workouts dated on or after the Sunday of `today`'s week
    pub fn compute(workouts: &[Workout], today: NaiveDate) -> Self {
        let start = week_start(today);
        let mut report = WeeklyReport {
            week_start: start,
            ..Default::default()
        };

        for workout in workouts.iter().filter(|w| w.date >= start) {
            report.workouts += 1;
            for exercise in &workout.exercises {
                report.total_sets += exercise.sets.len();
                report.total_weight += exercise.sets.iter().map(set_volume).sum::<f64>();
            }
        }

        report
    }

    /// Total weight as displayed: truncated to whole kilograms
    pub fn total_weight_kg(&self) -> i64 {
        self.total_weight as i64
    }

    pub fn format(&self) -> String {
        format!(
            "This week's stats (since {})\n\
            Workouts completed: {}\n\
            Total weight lifted: {} kg\n\
            Total sets performed: {}",
            self.week_start.format("%Y-%m-%d"),
            self.workouts,
            self.total_weight_kg(),
            self.total_sets
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::WorkoutExercise;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_workout(day: NaiveDate, sets: &[(&str, &str)]) -> Workout {
        Workout {
            date: day,
            exercises: vec![WorkoutExercise {
                name: "Squats".to_string(),
                sets: sets
                    .iter()
                    .enumerate()
                    .map(|(i, (w, r))| ExerciseSet::new(i as u32 + 1, *w, *r))
                    .collect(),
            }],
        }
    }

    #[test]
    fn test_week_start_is_sunday() {
        // 2024-03-06 is a Wednesday
        assert_eq!(week_start(date(2024, 3, 6)), date(2024, 3, 3));
        assert_eq!(week_start(date(2024, 3, 3)), date(2024, 3, 3));
        assert_eq!(week_start(date(2024, 3, 9)), date(2024, 3, 3));
        assert_eq!(week_start(date(2024, 1, 2)), date(2023, 12, 31));
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("62.5"), 62.5);
        assert_eq!(parse_amount("62,5"), 62.5);
        assert_eq!(parse_amount(" 10 "), 10.0);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("heavy"), 0.0);
        assert_eq!(parse_amount("nan"), 0.0);
        assert_eq!(parse_amount("inf"), 0.0);
    }

    #[test]
    fn test_report_empty() {
        let report = WeeklyReport::compute(&[], date(2024, 3, 6));
        assert_eq!(report.workouts, 0);
        assert_eq!(report.total_sets, 0);
        assert_eq!(report.total_weight, 0.0);
    }

    #[test]
    fn test_report_filters_by_week_start() {
        let workouts = vec![
            create_workout(date(2024, 3, 2), &[("100", "5")]), // Saturday before
            create_workout(date(2024, 3, 3), &[("50", "10"), ("60", "8")]),
            create_workout(date(2024, 3, 6), &[("20", "12")]),
        ];
        let report = WeeklyReport::compute(&workouts, date(2024, 3, 6));

        assert_eq!(report.workouts, 2);
        assert_eq!(report.total_sets, 3);
        assert_eq!(report.total_weight, 500.0 + 480.0 + 240.0);
    }

    #[test]
    fn test_total_sets_is_sum_of_set_lists() {
        let workouts = vec![
            create_workout(date(2024, 3, 4), &[("1", "1"), ("1", "1")]),
            create_workout(date(2024, 3, 5), &[("1", "1"), ("1", "1"), ("1", "1")]),
        ];
        let expected: usize = workouts.iter().map(|w| w.total_sets()).sum();
        let report = WeeklyReport::compute(&workouts, date(2024, 3, 7));
        assert_eq!(report.total_sets, expected);
    }

    #[test]
    fn test_non_numeric_contributes_zero() {
        let workouts = vec![create_workout(
            date(2024, 3, 4),
            &[("bodyweight", "10"), ("40", "many"), ("40", "10")],
        )];
        let report = WeeklyReport::compute(&workouts, date(2024, 3, 4));
        assert_eq!(report.total_sets, 3);
        assert_eq!(report.total_weight, 400.0);

        for weight in ["nan", "inf", "infinity", "-inf", "NaN"] {
            let workouts = vec![create_workout(date(2024, 3, 4), &[(weight, "10"), ("40", "10")])];
            let report = WeeklyReport::compute(&workouts, date(2024, 3, 4));
            assert_eq!(report.total_weight, 400.0, "weight {:?}", weight);
            assert_eq!(report.total_weight_kg(), 400, "weight {:?}", weight);
        }
    }

    #[test]
    fn test_total_weight_truncated() {
        let workouts = vec![create_workout(date(2024, 3, 4), &[("22.5", "3")])];
        let report = WeeklyReport::compute(&workouts, date(2024, 3, 4));
        assert_eq!(report.total_weight_kg(), 67);
        assert!(report.format().contains("Total weight lifted: 67 kg"));
    }
}
