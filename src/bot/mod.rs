//! Telegram bot module - Remote set logging and the weekly progress reminder

use std::collections::HashSet;
use std::sync::Arc;
use chrono::Local;
use teloxide::{
    prelude::*,
    types::{ChatId, InlineKeyboardButton, InlineKeyboardMarkup},
    utils::command::BotCommands,
    dispatching::dialogue::{InMemStorage, Dialogue},
};
use tokio::sync::Mutex;
use tracing::{info, error};

use crate::db::{Database, Workout, is_numeric_input};
use crate::exercises::Category;
use crate::notification::{Notification, describe_schedule, next_weekly_fire};
use crate::stats::WeeklyReport;

type MyDialogue = Dialogue<State, InMemStorage<State>>;
type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;
type Subscribers = Arc<Mutex<HashSet<ChatId>>>;

#[derive(Clone, Default)]
pub enum State {
    #[default]
    Start,
    /// Exercise picked, waiting for the weight
    WaitingForWeight {
        exercise: String,
    },
    /// Waiting for the reps of the set
    WaitingForReps {
        exercise: String,
        weight: String,
    },
}

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Bot commands:")]
pub enum Command {
    #[command(description = "Start")]
    Start,
    #[command(description = "Show help")]
    Help,
    #[command(description = "Log a set")]
    Train,
    #[command(description = "Today's workout")]
    Today,
    #[command(description = "This week's stats")]
    Report,
    #[command(description = "Weekly progress reminder on Sundays")]
    Remind,
    #[command(description = "Turn the reminder off")]
    Stop,
}

/// Create inline keyboard with muscle groups
fn make_categories_keyboard() -> InlineKeyboardMarkup {
    let buttons: Vec<Vec<InlineKeyboardButton>> = Category::all()
        .chunks(3)
        .map(|chunk| {
            chunk.iter().map(|c| {
                InlineKeyboardButton::callback(c.name(), format!("cat:{}", c.name()))
            }).collect()
        })
        .collect();

    InlineKeyboardMarkup::new(buttons)
}

/// Exercises of a category. Buttons carry the list index, names can
/// be longer than callback data allows.
fn make_exercises_keyboard(category: Category, names: &[String]) -> InlineKeyboardMarkup {
    let buttons: Vec<Vec<InlineKeyboardButton>> = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            vec![InlineKeyboardButton::callback(
                name.clone(),
                format!("ex:{}:{}", category.name(), i),
            )]
        })
        .collect();

    InlineKeyboardMarkup::new(buttons)
}

pub fn format_workout(workout: &Workout) -> String {
    let mut text = format!("📅 {}\n", workout.date.format("%A, %B %-d, %Y"));
    if workout.exercises.is_empty() {
        text.push_str("\nNo exercises yet.\n");
    }
    for exercise in &workout.exercises {
        text.push_str(&format!("\n{}\n", exercise.name));
        for set in &exercise.sets {
            text.push_str(&format!("  Set {}: {}kg x {} reps\n", set.set_number, set.weight, set.reps));
        }
    }
    text
}

/// Copy of the subscribed chats. The lock is released before returning,
/// so /remind and /stop are not blocked while the reminder is sent.
async fn subscriber_ids(subscribers: &Subscribers) -> Vec<ChatId> {
    subscribers.lock().await.iter().copied().collect()
}

/// Background task that sends the weekly progress every Sunday morning
async fn reminder_task(bot: Bot, db: Arc<Mutex<Database>>, subscribers: Subscribers) {
    loop {
        let now = Local::now().naive_local();
        let next = next_weekly_fire(now);
        info!("Weekly reminder scheduled {}", describe_schedule(next));

        let wait = (next - now).to_std().unwrap_or_default();
        tokio::time::sleep(wait).await;

        let notification = {
            let db = db.lock().await;
            match db.load_all_workouts() {
                Ok(workouts) => Notification::weekly(&workouts, Local::now().naive_local()),
                Err(e) => {
                    error!("Cannot build weekly notification: {:#}", e);
                    continue;
                }
            }
        };

        let chat_ids = subscriber_ids(&subscribers).await;
        if chat_ids.is_empty() {
            continue;
        }

        info!("Sending weekly progress to {} subscribers", chat_ids.len());
        for chat_id in chat_ids {
            let result = bot.send_message(chat_id, notification.text()).await;

            if let Err(e) = result {
                error!("Failed to send reminder to {}: {}", chat_id, e);
            }
        }
    }
}

/// Start the Telegram bot, with the weekly reminder when enabled
pub async fn run_bot(token: String, db_path: &str, notifications: bool) -> anyhow::Result<()> {
    let bot = Bot::new(token);
    let db = Arc::new(Mutex::new(Database::open(db_path)?));
    let subscribers: Subscribers = Arc::new(Mutex::new(HashSet::new()));

    if notifications {
        let reminder_bot = bot.clone();
        let reminder_db = db.clone();
        let reminder_subs = subscribers.clone();
        tokio::spawn(async move {
            reminder_task(reminder_bot, reminder_db, reminder_subs).await;
        });
    } else {
        info!("Weekly reminder disabled");
    }

    let handler = dptree::entry()
        .enter_dialogue::<Update, InMemStorage<State>, State>()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(handle_command),
        )
        .branch(
            Update::filter_message()
                .endpoint(handle_message),
        )
        .branch(
            Update::filter_callback_query()
                .endpoint(handle_callback),
        );

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![InMemStorage::<State>::new(), db, subscribers])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}

async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    dialogue: MyDialogue,
    db: Arc<Mutex<Database>>,
    subscribers: Subscribers,
) -> HandlerResult {
    match cmd {
        Command::Start => {
            let text = "🏋️ Progress Keeper\n\n\
                /train - log a set\n\
                /today - today's workout\n\
                /report - this week's stats\n\
                /remind - weekly progress on Sundays\n\
                /stop - turn the reminder off";
            bot.send_message(msg.chat.id, text).await?;
        }

        Command::Help => {
            bot.send_message(msg.chat.id, Command::descriptions().to_string())
                .await?;
        }

        Command::Train => {
            dialogue.update(State::Start).await?;
            bot.send_message(msg.chat.id, "Pick a muscle group:")
                .reply_markup(make_categories_keyboard())
                .await?;
        }

        Command::Today => {
            let db = db.lock().await;
            let today = Local::now().date_naive();

            let text = match db.load_workout(today)? {
                Some(workout) => format_workout(&workout),
                None => "No workout for today yet. Try /train!".to_string(),
            };
            bot.send_message(msg.chat.id, text).await?;
        }

        Command::Report => {
            let db = db.lock().await;
            let workouts = db.load_all_workouts()?;
            let report = WeeklyReport::compute(&workouts, Local::now().date_naive());
            bot.send_message(msg.chat.id, format!("📈 {}", report.format())).await?;
        }

        Command::Remind => {
            let mut subs = subscribers.lock().await;
            subs.insert(msg.chat.id);
            let next = next_weekly_fire(Local::now().naive_local());

            bot.send_message(
                msg.chat.id,
                format!(
                    "✅ Reminder on!\n\n\
                    Weekly progress {}.\n\
                    /stop - turn off",
                    describe_schedule(next)
                )
            ).await?;

            info!("User {} subscribed to reminders", msg.chat.id);
        }

        Command::Stop => {
            let mut subs = subscribers.lock().await;
            let was_subscribed = subs.remove(&msg.chat.id);

            if was_subscribed {
                bot.send_message(msg.chat.id, "🔕 Reminder off.\n\n/remind - turn on again")
                    .await?;
                info!("User {} unsubscribed from reminders", msg.chat.id);
            } else {
                bot.send_message(msg.chat.id, "Reminder is already off.\n\n/remind - turn on")
                    .await?;
            }
        }
    }

    Ok(())
}

async fn handle_callback(
    bot: Bot,
    q: CallbackQuery,
    dialogue: MyDialogue,
    db: Arc<Mutex<Database>>,
) -> HandlerResult {
    if let Some(data) = &q.data
        && let Some(msg) = &q.message
    {
        if let Some(category) = data.strip_prefix("cat:").and_then(Category::from_name) {
            let names = db.lock().await.category_exercises(category)?;
            bot.edit_message_text(msg.chat().id, msg.id(), format!("{}:", category.name()))
                .reply_markup(make_exercises_keyboard(category, &names))
                .await?;
        } else if let Some(rest) = data.strip_prefix("ex:")
            && let Some((category, index)) = rest.rsplit_once(':')
            && let Some(category) = Category::from_name(category)
            && let Ok(index) = index.parse::<usize>()
        {
            let db = db.lock().await;
            if let Some(exercise) = db.category_exercises(category)?.get(index).cloned() {
                db.add_exercise(Local::now().date_naive(), &exercise)?;
                dialogue.update(State::WaitingForWeight { exercise: exercise.clone() }).await?;

                bot.edit_message_text(msg.chat().id, msg.id(), format!("{}\n\nWeight (kg)?", exercise))
                    .await?;
            }
        }
    }

    bot.answer_callback_query(q.id).await?;
    Ok(())
}

async fn handle_message(
    bot: Bot,
    msg: Message,
    dialogue: MyDialogue,
    db: Arc<Mutex<Database>>,
) -> HandlerResult {
    let state = dialogue.get().await?.unwrap_or_default();
    let text = msg.text().map(str::trim).unwrap_or_default().to_string();

    match state {
        State::Start => {
            bot.send_message(msg.chat.id, "Use /train to log a set").await?;
        }

        State::WaitingForWeight { exercise } => {
            if text.is_empty() || !is_numeric_input(&text) {
                bot.send_message(msg.chat.id, "Send the weight as a number, e.g. 62.5").await?;
                return Ok(());
            }
            dialogue.update(State::WaitingForReps { exercise, weight: text }).await?;
            bot.send_message(msg.chat.id, "Reps?").await?;
        }

        State::WaitingForReps { exercise, weight } => {
            if text.is_empty() || !is_numeric_input(&text) {
                bot.send_message(msg.chat.id, "Send the reps as a number, e.g. 8").await?;
                return Ok(());
            }

            let db = db.lock().await;
            let today = Local::now().date_naive();
            let sets = db.log_set(today, &exercise, &weight, &text)?;

            dialogue.update(State::Start).await?;
            bot.send_message(
                msg.chat.id,
                format!("✅ {} - set {}: {}kg x {} reps\n\n/train - next set", exercise, sets.len(), weight, text),
            ).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{ExerciseSet, WorkoutExercise};
    use chrono::NaiveDate;

    #[test]
    fn test_format_workout() {
        let workout = Workout {
            date: NaiveDate::from_ymd_opt(2024, 3, 6).unwrap(),
            exercises: vec![WorkoutExercise {
                name: "Squats".to_string(),
                sets: vec![ExerciseSet::new(1, "100", "5")],
            }],
        };
        let text = format_workout(&workout);
        assert!(text.contains("Wednesday, March 6, 2024"));
        assert!(text.contains("Squats\n  Set 1: 100kg x 5 reps"));
    }

    #[test]
    fn test_format_empty_workout() {
        let workout = Workout::empty(NaiveDate::from_ymd_opt(2024, 3, 6).unwrap());
        assert!(format_workout(&workout).contains("No exercises yet."));
    }

    #[test]
    fn test_exercise_keyboard_one_row_per_exercise() {
        let names: Vec<String> = Category::Traps.default_exercises().iter().map(|s| s.to_string()).collect();
        let keyboard = make_exercises_keyboard(Category::Traps, &names);
        assert_eq!(keyboard.inline_keyboard.len(), 5);
    }

    #[tokio::test]
    async fn test_subscriber_ids_releases_lock() {
        let subscribers: Subscribers = Arc::new(Mutex::new(HashSet::from([ChatId(1), ChatId(2)])));

        let mut ids = subscriber_ids(&subscribers).await;
        ids.sort_by_key(|id| id.0);
        assert_eq!(ids, vec![ChatId(1), ChatId(2)]);

        let mut subs = subscribers.try_lock().unwrap();
        subs.remove(&ChatId(1));
        assert_eq!(ids.len(), 2);
    }
}
