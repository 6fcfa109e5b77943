//! Calendar helpers - month grids and stepping between workout days

use chrono::{Datelike, NaiveDate};

use crate::db::Workout;

/// Latest workout strictly before `selected`
pub fn previous_workout_date(workouts: &[Workout], selected: NaiveDate) -> Option<NaiveDate> {
    workouts
        .iter()
        .map(|w| w.date)
        .filter(|d| *d < selected)
        .max()
}

/// Earliest workout strictly after `selected`, falling back to `today`
pub fn next_workout_date(workouts: &[Workout], selected: NaiveDate, today: NaiveDate) -> NaiveDate {
    workouts
        .iter()
        .map(|w| w.date)
        .filter(|d| *d > selected)
        .min()
        .unwrap_or(today)
}

pub fn has_workout(workouts: &[Workout], date: NaiveDate) -> bool {
    workouts.iter().any(|w| w.date == date)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    match (
        NaiveDate::from_ymd_opt(year, month, 1),
        NaiveDate::from_ymd_opt(next_year, next_month, 1),
    ) {
        (Some(first), Some(next)) => (next - first).num_days() as u32,
        _ => 0,
    }
}

/// Weeks of a month, Sunday first. Cells outside the month are `None`.
pub fn month_grid(year: i32, month: u32) -> Vec<[Option<u32>; 7]> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let offset = first.weekday().num_days_from_sunday();
    let days = days_in_month(year, month);

    let mut weeks = Vec::new();
    let mut week = [None; 7];
    for day in 1..=days {
        let slot = ((offset + day - 1) % 7) as usize;
        week[slot] = Some(day);
        if slot == 6 {
            weeks.push(week);
            week = [None; 7];
        }
    }
    if week.iter().any(Option::is_some) {
        weeks.push(week);
    }
    weeks
}

/// First day of the month `delta` months away from the month of `date`
pub fn shift_month(date: NaiveDate, delta: i32) -> NaiveDate {
    let index = date.year() * 12 + date.month0() as i32 + delta;
    let year = index.div_euclid(12);
    let month = index.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(date)
}

pub fn day_suffix(day: u32) -> &'static str {
    match day {
        1 | 21 | 31 => "st",
        2 | 22 => "nd",
        3 | 23 => "rd",
        _ => "th",
    }
}

/// Heading of the start screen, e.g. "Saturday, October 19th"
pub fn day_heading(date: NaiveDate) -> String {
    format!(
        "{}, {} {}{}",
        date.format("%A"),
        date.format("%B"),
        date.day(),
        day_suffix(date.day())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_workouts(dates: &[NaiveDate]) -> Vec<Workout> {
        dates.iter().map(|d| Workout::empty(*d)).collect()
    }

    #[test]
    fn test_previous_workout_date() {
        let workouts = create_workouts(&[date(2024, 3, 1), date(2024, 3, 8), date(2024, 2, 20)]);
        assert_eq!(previous_workout_date(&workouts, date(2024, 3, 8)), Some(date(2024, 3, 1)));
        assert_eq!(previous_workout_date(&workouts, date(2024, 3, 20)), Some(date(2024, 3, 8)));
        assert_eq!(previous_workout_date(&workouts, date(2024, 2, 20)), None);
    }

    #[test]
    fn test_next_workout_date_falls_back_to_today() {
        let workouts = create_workouts(&[date(2024, 3, 1), date(2024, 3, 8)]);
        let today = date(2024, 3, 12);
        assert_eq!(next_workout_date(&workouts, date(2024, 2, 1), today), date(2024, 3, 1));
        assert_eq!(next_workout_date(&workouts, date(2024, 3, 1), today), date(2024, 3, 8));
        assert_eq!(next_workout_date(&workouts, date(2024, 3, 8), today), today);
    }

    #[test]
    fn test_has_workout() {
        let workouts = create_workouts(&[date(2024, 3, 1)]);
        assert!(has_workout(&workouts, date(2024, 3, 1)));
        assert!(!has_workout(&workouts, date(2024, 3, 2)));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 12), 31);
        assert_eq!(days_in_month(2024, 4), 30);
    }

    #[test]
    fn test_month_grid_sunday_first() {
        // March 2024 starts on a Friday
        let grid = month_grid(2024, 3);
        assert_eq!(grid.len(), 6);
        assert_eq!(grid[0], [None, None, None, None, None, Some(1), Some(2)]);
        assert_eq!(grid[1][0], Some(3));
        assert_eq!(grid[5], [Some(31), None, None, None, None, None, None]);
    }

    #[test]
    fn test_month_grid_exact_weeks() {
        // February 2015 starts on Sunday and has 28 days
        let grid = month_grid(2015, 2);
        assert_eq!(grid.len(), 4);
        assert_eq!(grid[3][6], Some(28));
    }

    #[test]
    fn test_shift_month() {
        assert_eq!(shift_month(date(2024, 1, 15), -1), date(2023, 12, 1));
        assert_eq!(shift_month(date(2024, 12, 31), 1), date(2025, 1, 1));
        assert_eq!(shift_month(date(2024, 3, 3), 0), date(2024, 3, 1));
    }

    #[test]
    fn test_day_suffix() {
        assert_eq!(day_suffix(1), "st");
        assert_eq!(day_suffix(2), "nd");
        assert_eq!(day_suffix(3), "rd");
        assert_eq!(day_suffix(11), "th");
        assert_eq!(day_suffix(12), "th");
        assert_eq!(day_suffix(22), "nd");
        assert_eq!(day_suffix(31), "st");
    }

    #[test]
    fn test_day_heading() {
        assert_eq!(day_heading(date(2024, 10, 19)), "Saturday, October 19th");
        assert_eq!(day_heading(date(2024, 3, 1)), "Friday, March 1st");
    }
}
