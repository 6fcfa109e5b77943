//! progress-keeper - Personal workout log
//!
//! Workouts are stored per calendar day as JSON records in a local
//! key-value store.

pub mod bot;
pub mod calendar;
pub mod db;
pub mod exercises;
pub mod instructions;
pub mod notification;
pub mod stats;
pub mod tui;

pub use db::Database;
