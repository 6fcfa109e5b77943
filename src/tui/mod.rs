//! TUI module - Terminal screens with ratatui

mod navigation;
mod render;

pub use navigation::Screen;

use anyhow::Result;
use chrono::{Duration, Local, NaiveDate};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use std::io::{stdout, Stdout};
use tracing::debug;

use crate::calendar::{next_workout_date, previous_workout_date, shift_month};
use crate::db::{
    Database, ExerciseSet, Workout, append_set, delete_set, is_numeric_input, update_set,
};
use crate::exercises::{Category, filter_exercises};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Modal dialogs drawn over the current screen
#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    ConfirmDeleteExercise(String),
    ConfirmDeleteWorkout(NaiveDate),
    AddExercise(String),
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Weight,
    Reps,
}

/// Weight/reps entry of the exercise details screen
#[derive(Debug, Clone, Default)]
pub struct SetForm {
    pub weight: String,
    pub reps: String,
    pub focus: Field,
    /// Index of the set being edited, None when adding
    pub editing: Option<usize>,
    pub sets: Vec<ExerciseSet>,
}

impl SetForm {
    fn field_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Weight => &mut self.weight,
            Field::Reps => &mut self.reps,
        }
    }

    fn clear_inputs(&mut self) {
        self.weight.clear();
        self.reps.clear();
        self.focus = Field::Weight;
        self.editing = None;
    }
}

/// App state for TUI
pub struct App {
    db: Database,
    today: NaiveDate,
    screen: Screen,
    back_stack: Vec<Screen>,
    /// Day shown on the start screen
    selected_date: NaiveDate,
    /// Day under the cursor on the calendar
    calendar_day: NaiveDate,
    workouts: Vec<Workout>,
    cursor: usize,
    search: String,
    form: SetForm,
    dialog: Option<Dialog>,
    status: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(db: Database) -> Result<Self> {
        Self::with_today(db, Local::now().date_naive())
    }

    pub fn with_today(db: Database, today: NaiveDate) -> Result<Self> {
        let workouts = db.load_all_workouts()?;
        Ok(Self {
            db,
            today,
            screen: Screen::Start,
            back_stack: Vec::new(),
            selected_date: today,
            calendar_day: today,
            workouts,
            cursor: 0,
            search: String::new(),
            form: SetForm::default(),
            dialog: None,
            status: None,
            should_quit: false,
        })
    }

    /// Run the TUI application
    pub fn run(&mut self) -> Result<()> {
        let mut terminal = init_terminal()?;

        let result = self.event_loop(&mut terminal);

        restore_terminal()?;
        result
    }

    fn event_loop(&mut self, terminal: &mut Tui) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn handle_events(&mut self) -> Result<()> {
        if event::poll(std::time::Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            self.handle_key(key)?;
        }
        Ok(())
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Switch screens, remembering where we came from
    pub fn navigate(&mut self, screen: Screen) -> Result<()> {
        debug!("navigate {} -> {}", self.screen.route(), screen.route());
        let previous = std::mem::replace(&mut self.screen, screen);
        if previous != self.screen {
            self.back_stack.push(previous);
        }
        if self.screen == Screen::Start {
            self.back_stack.clear();
        }
        self.enter_screen()
    }

    fn go_back(&mut self) -> Result<()> {
        match self.back_stack.pop() {
            Some(screen) => {
                self.screen = screen;
                self.enter_screen()
            }
            None => Ok(()),
        }
    }

    /// Reset per-screen state and reload what the screen shows
    fn enter_screen(&mut self) -> Result<()> {
        self.cursor = 0;
        self.search.clear();
        self.status = None;
        self.workouts = self.db.load_all_workouts()?;

        if let Screen::ExerciseDetails(exercise) = &self.screen {
            self.form = SetForm {
                sets: self.db.load_exercise_sets(exercise)?,
                ..SetForm::default()
            };
        }
        if self.screen == Screen::Calendar {
            self.calendar_day = self.today;
        }
        Ok(())
    }

    fn refresh(&mut self) -> Result<()> {
        self.workouts = self.db.load_all_workouts()?;
        Ok(())
    }

    fn workout_on(&self, date: NaiveDate) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.date == date)
    }

    /// Exercise names listed on the current screen
    fn exercise_names(&self) -> Vec<String> {
        match &self.screen {
            Screen::Start => self
                .workout_on(self.selected_date)
                .map(|w| w.exercises.iter().map(|e| e.name.clone()).collect())
                .unwrap_or_default(),
            Screen::Workout(date) => self
                .workout_on(*date)
                .map(|w| w.exercises.iter().map(|e| e.name.clone()).collect())
                .unwrap_or_default(),
            Screen::Exercises(category) => {
                let names = self.db.category_exercises(*category).unwrap_or_default();
                filter_exercises(&names, &self.search).into_iter().cloned().collect()
            }
            Screen::HelpExercises(category) => {
                category.default_exercises().iter().map(|s| s.to_string()).collect()
            }
            _ => Vec::new(),
        }
    }

    fn list_len(&self) -> usize {
        match &self.screen {
            Screen::WorkoutCategories | Screen::HelpMuscleGroups => Category::all().len(),
            Screen::ExerciseDetails(_) => self.form.sets.len(),
            Screen::ExerciseInstructions(exercise) => render::instruction_lines(exercise).len(),
            _ => self.exercise_names().len(),
        }
    }

    fn move_cursor(&mut self, down: bool) {
        let len = self.list_len();
        if len == 0 {
            return;
        }
        if down {
            self.cursor = (self.cursor + 1).min(len - 1);
        } else {
            self.cursor = self.cursor.saturating_sub(1);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.dialog.is_some() {
            return self.handle_dialog_key(key.code);
        }

        // Screens with text entry get first pick of the key
        let consumed = match self.screen.clone() {
            Screen::Start => self.handle_start_key(key.code)?,
            Screen::Exercises(category) => self.handle_exercises_key(category, key.code)?,
            Screen::ExerciseDetails(exercise) => self.handle_details_key(&exercise, key.code)?,
            Screen::Workout(date) => self.handle_workout_key(date, key.code)?,
            Screen::Calendar => self.handle_calendar_key(key.code)?,
            Screen::WorkoutCategories => self.handle_category_list_key(key.code, Screen::Exercises)?,
            Screen::HelpMuscleGroups => self.handle_category_list_key(key.code, Screen::HelpExercises)?,
            Screen::HelpExercises(_) => self.handle_help_exercises_key(key.code)?,
            Screen::ExerciseInstructions(_) | Screen::WeeklyReport => false,
        };
        if consumed {
            return Ok(());
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc => self.go_back()?,
            KeyCode::Char('h') => self.navigate(Screen::Start)?,
            KeyCode::Char('c') => self.navigate(Screen::Calendar)?,
            KeyCode::Char('a') => self.navigate(Screen::WorkoutCategories)?,
            KeyCode::Char('?') => self.navigate(Screen::HelpMuscleGroups)?,
            KeyCode::Char('w') => self.navigate(Screen::WeeklyReport)?,
            KeyCode::Up => self.move_cursor(false),
            KeyCode::Down => self.move_cursor(true),
            _ => {}
        }
        Ok(())
    }

    fn handle_dialog_key(&mut self, code: KeyCode) -> Result<()> {
        let Some(dialog) = self.dialog.take() else {
            return Ok(());
        };

        match dialog {
            Dialog::ConfirmDeleteExercise(name) => match code {
                KeyCode::Char('y') | KeyCode::Enter => {
                    self.db.remove_exercise(self.selected_date, &name)?;
                    self.refresh()?;
                    self.cursor = self.cursor.min(self.list_len().saturating_sub(1));
                    self.status = Some(format!("Deleted {}", name));
                }
                KeyCode::Char('n') | KeyCode::Esc => {}
                _ => self.dialog = Some(Dialog::ConfirmDeleteExercise(name)),
            },
            Dialog::ConfirmDeleteWorkout(date) => match code {
                KeyCode::Char('y') | KeyCode::Enter => {
                    self.db.delete_workout(date)?;
                    self.refresh()?;
                    self.status = Some(format!("Deleted workout {}", date));
                    self.go_back()?;
                }
                KeyCode::Char('n') | KeyCode::Esc => {}
                _ => self.dialog = Some(Dialog::ConfirmDeleteWorkout(date)),
            },
            Dialog::AddExercise(mut name) => match code {
                KeyCode::Esc => {}
                KeyCode::Enter => {
                    if let Screen::Exercises(category) = self.screen {
                        match self.db.add_custom_exercise(category, &name) {
                            Ok(_) => self.status = Some(format!("Added {}", name.trim())),
                            Err(e) => self.dialog = Some(Dialog::Error(e.to_string())),
                        }
                    }
                }
                KeyCode::Backspace => {
                    name.pop();
                    self.dialog = Some(Dialog::AddExercise(name));
                }
                KeyCode::Char(c) => {
                    name.push(c);
                    self.dialog = Some(Dialog::AddExercise(name));
                }
                _ => self.dialog = Some(Dialog::AddExercise(name)),
            },
            Dialog::Error(_) => {}
        }
        Ok(())
    }

    fn handle_start_key(&mut self, code: KeyCode) -> Result<bool> {
        match code {
            KeyCode::Left => {
                if let Some(date) = previous_workout_date(&self.workouts, self.selected_date) {
                    self.selected_date = date;
                    self.cursor = 0;
                }
            }
            KeyCode::Right => {
                self.selected_date = next_workout_date(&self.workouts, self.selected_date, self.today);
                self.cursor = 0;
            }
            KeyCode::Enter => {
                if let Some(name) = self.exercise_names().get(self.cursor).cloned() {
                    self.navigate(Screen::ExerciseDetails(name))?;
                }
            }
            KeyCode::Char('d') => {
                if let Some(name) = self.exercise_names().get(self.cursor).cloned() {
                    self.dialog = Some(Dialog::ConfirmDeleteExercise(name));
                }
            }
            KeyCode::Char('n') => self.navigate(Screen::WorkoutCategories)?,
            KeyCode::Char('p') => self.navigate(Screen::Calendar)?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn handle_category_list_key(
        &mut self,
        code: KeyCode,
        open: fn(Category) -> Screen,
    ) -> Result<bool> {
        if code != KeyCode::Enter {
            return Ok(false);
        }
        if let Some(category) = Category::all().get(self.cursor) {
            self.navigate(open(*category))?;
        }
        Ok(true)
    }

    fn handle_exercises_key(&mut self, category: Category, code: KeyCode) -> Result<bool> {
        match code {
            KeyCode::Char(c) => {
                self.search.push(c);
                self.cursor = 0;
            }
            KeyCode::Backspace => {
                self.search.pop();
                self.cursor = 0;
            }
            KeyCode::Tab => self.dialog = Some(Dialog::AddExercise(String::new())),
            KeyCode::Enter => {
                if let Some(name) = self.exercise_names().get(self.cursor).cloned() {
                    self.db.add_exercise(self.today, &name)?;
                    debug!("picked {} from {}", name, category.name());
                    self.navigate(Screen::ExerciseDetails(name))?;
                }
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn handle_details_key(&mut self, exercise: &str, code: KeyCode) -> Result<bool> {
        match code {
            KeyCode::Tab => {
                self.form.focus = match self.form.focus {
                    Field::Weight => Field::Reps,
                    Field::Reps => Field::Weight,
                };
            }
            KeyCode::Backspace => {
                self.form.field_mut().pop();
            }
            KeyCode::Char(c) if c.is_ascii_digit() || c == '.' || c == ',' => {
                let mut candidate = self.form.field_mut().clone();
                candidate.push(c);
                if is_numeric_input(&candidate) {
                    *self.form.field_mut() = candidate;
                }
            }
            KeyCode::Enter => self.save_set(exercise)?,
            KeyCode::Char('e') => {
                if let Some(set) = self.form.sets.get(self.cursor) {
                    self.form.weight = set.weight.clone();
                    self.form.reps = set.reps.clone();
                    self.form.focus = Field::Weight;
                    self.form.editing = Some(self.cursor);
                }
            }
            KeyCode::Char('x') => self.form.clear_inputs(),
            KeyCode::Char('d') => {
                if delete_set(&mut self.form.sets, self.cursor) {
                    self.form.editing = None;
                    self.cursor = self.cursor.min(self.form.sets.len().saturating_sub(1));
                    self.db.record_sets(self.today, exercise, &self.form.sets)?;
                    self.refresh()?;
                }
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    /// Add or update a set from the form; ignored until both fields are filled
    fn save_set(&mut self, exercise: &str) -> Result<()> {
        if self.form.weight.is_empty() || self.form.reps.is_empty() {
            return Ok(());
        }

        let weight = self.form.weight.clone();
        let reps = self.form.reps.clone();
        match self.form.editing {
            Some(index) => {
                update_set(&mut self.form.sets, index, &weight, &reps);
            }
            None => append_set(&mut self.form.sets, &weight, &reps),
        }
        self.form.clear_inputs();

        self.db.record_sets(self.today, exercise, &self.form.sets)?;
        self.refresh()?;
        self.status = Some("Saved".to_string());
        Ok(())
    }

    fn handle_workout_key(&mut self, date: NaiveDate, code: KeyCode) -> Result<bool> {
        match code {
            KeyCode::Char('y') => {
                if self.workout_on(date).is_some() {
                    self.db.copy_workout(date, self.today)?;
                    self.selected_date = self.today;
                    self.navigate(Screen::Start)?;
                    self.status = Some(format!("Copied workout from {}", date));
                }
            }
            KeyCode::Char('d') => {
                if self.workout_on(date).is_some() {
                    self.dialog = Some(Dialog::ConfirmDeleteWorkout(date));
                }
            }
            KeyCode::Enter => {
                if let Some(name) = self.exercise_names().get(self.cursor).cloned() {
                    self.navigate(Screen::ExerciseDetails(name))?;
                }
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn handle_calendar_key(&mut self, code: KeyCode) -> Result<bool> {
        match code {
            KeyCode::Left => self.calendar_day -= Duration::days(1),
            KeyCode::Right => self.calendar_day += Duration::days(1),
            KeyCode::Up => self.calendar_day -= Duration::days(7),
            KeyCode::Down => self.calendar_day += Duration::days(7),
            KeyCode::PageUp => self.calendar_day = shift_month(self.calendar_day, -1),
            KeyCode::PageDown => self.calendar_day = shift_month(self.calendar_day, 1),
            KeyCode::Enter => self.navigate(Screen::Workout(self.calendar_day))?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn handle_help_exercises_key(&mut self, code: KeyCode) -> Result<bool> {
        if code != KeyCode::Enter {
            return Ok(false);
        }
        if let Some(name) = self.exercise_names().get(self.cursor).cloned() {
            self.navigate(Screen::ExerciseInstructions(name))?;
        }
        Ok(true)
    }
}

fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    Ok(terminal)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
