//! progress-keeper - Personal workout log
//!
//! Exercises and sets per day, a calendar of past workouts and a weekly report.

use anyhow::{Result, bail};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

use progress_keeper::bot::format_workout;
use progress_keeper::db::{Database, is_numeric_input};
use progress_keeper::exercises::Category;
use progress_keeper::instructions::format_instruction;
use progress_keeper::notification::{Notification, describe_schedule, next_weekly_fire};
use progress_keeper::stats::WeeklyReport;
use progress_keeper::tui::{App, Screen};

#[derive(Parser)]
#[command(name = "progress-keeper")]
#[command(author, version, about = "Personal workout log")]
struct Cli {
    /// Database file
    #[arg(long, global = true, env = "PROGRESS_KEEPER_DB", default_value = "progress_keeper.db")]
    db: String,

    /// Weekly progress reminder (Sundays 09:00)
    #[arg(long, global = true, env = "PROGRESS_KEEPER_NOTIFICATIONS", default_value_t = true, action = clap::ArgAction::Set)]
    notifications: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open TUI
    Tui {
        /// Screen route to open, e.g. "calendar" or "exercises/Chest"
        #[arg(long)]
        open: Option<String>,
    },

    /// Log a set of an exercise
    Log {
        /// Exercise name (e.g. "Bench Press")
        exercise: String,

        #[arg(short, long)]
        weight: String,

        #[arg(short, long)]
        reps: String,

        /// Day, yyyy-mm-dd (default: today)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// Show the workout of a day
    Show {
        /// Day, yyyy-mm-dd (default: today)
        date: Option<NaiveDate>,
    },

    /// List all workout days
    List,

    /// Copy a workout to another day
    Copy {
        from: NaiveDate,

        /// Target day (default: today)
        #[arg(long)]
        to: Option<NaiveDate>,
    },

    /// Delete the workout of a day
    Delete {
        date: NaiveDate,
    },

    /// Remove an exercise from a workout
    Remove {
        exercise: String,

        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// This week's stats
    Report,

    /// Print the weekly progress notification
    Notify,

    /// List exercises of a muscle group
    Exercises {
        category: Option<String>,
    },

    /// How to perform an exercise
    Instructions {
        exercise: String,
    },

    /// Start Telegram bot
    Bot {
        /// Telegram bot token (or set TELOXIDE_TOKEN env var)
        #[arg(short, long, env = "TELOXIDE_TOKEN")]
        token: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Logs go to stderr, stdout belongs to command output and the TUI
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let db = Database::open(&cli.db)?;
    let today = Local::now().date_naive();

    match cli.command {
        Some(Commands::Tui { open }) => {
            let mut app = App::new(db)?;
            if let Some(route) = open {
                let Some(screen) = Screen::parse(&route) else {
                    bail!("Unknown screen: {}", route);
                };
                app.navigate(screen)?;
            }
            app.run()?;
        }

        Some(Commands::Log { exercise, weight, reps, date }) => {
            if !is_numeric_input(&weight) || !is_numeric_input(&reps) || weight.is_empty() || reps.is_empty() {
                bail!("Weight and reps must be numbers");
            }
            let date = date.unwrap_or(today);
            let sets = db.log_set(date, &exercise, &weight, &reps)?;
            println!("Logged: {} - set {}: {}kg x {} ({})", exercise, sets.len(), weight, reps, date);
        }

        Some(Commands::Show { date }) => {
            let date = date.unwrap_or(today);
            match db.load_workout(date)? {
                Some(workout) => print!("{}", format_workout(&workout)),
                None => println!("No workout for {}", date),
            }
        }

        Some(Commands::List) => {
            let workouts = db.load_all_workouts()?;
            println!("{} workouts in total", workouts.len());
            println!("{:-<50}", "");
            for w in workouts.iter().rev() {
                println!(
                    "{} | {:2} exercises | {:3} sets",
                    w.date.format("%Y-%m-%d %a"),
                    w.exercises.len(),
                    w.total_sets()
                );
            }
        }

        Some(Commands::Copy { from, to }) => {
            let to = to.unwrap_or(today);
            let copy = db.copy_workout(from, to)?;
            println!("Copied {} exercises from {} to {}", copy.exercises.len(), from, to);
        }

        Some(Commands::Delete { date }) => {
            if db.delete_workout(date)? {
                println!("Deleted workout {}", date);
            } else {
                println!("No workout for {}", date);
            }
        }

        Some(Commands::Remove { exercise, date }) => {
            let date = date.unwrap_or(today);
            if db.remove_exercise(date, &exercise)? {
                println!("Removed {} from {}", exercise, date);
            } else {
                println!("{} is not in the workout of {}", exercise, date);
            }
        }

        Some(Commands::Report) => {
            let workouts = db.load_all_workouts()?;
            println!("{}", WeeklyReport::compute(&workouts, today).format());
        }

        Some(Commands::Notify) => {
            let now = Local::now().naive_local();
            let workouts = db.load_all_workouts()?;
            println!("{}", Notification::weekly(&workouts, now).text());
            if cli.notifications {
                println!("\nScheduled {}", describe_schedule(next_weekly_fire(now)));
            }
        }

        Some(Commands::Exercises { category }) => {
            let categories = match category {
                Some(name) => match Category::from_name(&name) {
                    Some(c) => vec![c],
                    None => bail!("Unknown muscle group: {}", name),
                },
                None => Category::all().to_vec(),
            };
            for c in categories {
                println!("{} {}", c.emoji(), c.name());
                for name in db.category_exercises(c)? {
                    println!("  {}", name);
                }
            }
        }

        Some(Commands::Instructions { exercise }) => {
            print!("{}", format_instruction(&exercise));
        }

        Some(Commands::Bot { token }) => {
            println!("Starting Telegram bot...");
            println!("Database: {}", cli.db);
            drop(db);
            progress_keeper::bot::run_bot(token, &cli.db, cli.notifications).await?;
        }

        None => {
            // Default: show TUI
            let mut app = App::new(db)?;
            app.run()?;
        }
    }

    Ok(())
}
