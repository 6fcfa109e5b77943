//! Weekly progress notification - Sunday 09:00 local time

use chrono::{Datelike, Duration, NaiveDateTime, NaiveTime};

use crate::db::Workout;
use crate::stats::{WeeklyReport, week_start};

pub const TITLE: &str = "Weekly Workout Progress";
/// Hour of day the weekly notification fires
pub const FIRE_HOUR: u32 = 9;
pub const INTERVAL_DAYS: i64 = 7;

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

impl Notification {
    /// Recompute the week from scratch and build the message
    pub fn weekly(workouts: &[Workout], now: NaiveDateTime) -> Self {
        let report = WeeklyReport::compute(workouts, now.date());
        Self {
            title: TITLE.to_string(),
            body: format!("You've completed {} workouts this week!", report.workouts),
        }
    }

    pub fn text(&self) -> String {
        format!("{}\n{}", self.title, self.body)
    }
}

/// Next firing time strictly after `now`: this week's Sunday 09:00,
/// or the one after if that has already passed
pub fn next_weekly_fire(now: NaiveDateTime) -> NaiveDateTime {
    let fire_time = NaiveTime::from_hms_opt(FIRE_HOUR, 0, 0).unwrap_or_default();
    let this_week = week_start(now.date()).and_time(fire_time);
    if this_week <= now {
        this_week + Duration::days(INTERVAL_DAYS)
    } else {
        this_week
    }
}

/// Human readable weekday/time of the schedule, for logs and bot replies
pub fn describe_schedule(next: NaiveDateTime) -> String {
    format!(
        "every {} at {:02}:00 (next: {})",
        next.weekday(),
        FIRE_HOUR,
        next.format("%Y-%m-%d %H:%M")
    )
}
