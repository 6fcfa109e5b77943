//! Drawing of every screen

use chrono::{Datelike, NaiveDate};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Clear, List, ListItem, ListState, Paragraph, Row, Table, Wrap},
};

use super::{App, Dialog, Field, Screen};
use crate::calendar::{day_heading, has_workout, month_grid};
use crate::db::Workout;
use crate::exercises::Category;
use crate::instructions::{gif_path, instruction_heading, mistakes_lines, steps_lines};
use crate::stats::WeeklyReport;

impl App {
    pub(super) fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(3),
            ])
            .split(area);

        // Header
        let header = Paragraph::new(self.header_text())
            .style(Style::default().fg(Color::White).bold())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(header, chunks[0]);

        match &self.screen {
            Screen::Start => self.render_start(frame, chunks[1]),
            Screen::WorkoutCategories | Screen::HelpMuscleGroups => {
                let names: Vec<String> = Category::all().iter().map(|c| c.name().to_string()).collect();
                self.render_list(frame, chunks[1], &names, "Muscle Groups");
            }
            Screen::Exercises(_) => self.render_exercises(frame, chunks[1]),
            Screen::HelpExercises(_) => {
                self.render_list(frame, chunks[1], &self.exercise_names(), "Exercises");
            }
            Screen::ExerciseDetails(_) => self.render_details(frame, chunks[1]),
            Screen::Workout(date) => self.render_workout_day(frame, chunks[1], *date),
            Screen::Calendar => self.render_calendar(frame, chunks[1]),
            Screen::ExerciseInstructions(exercise) => self.render_instructions(frame, chunks[1], exercise),
            Screen::WeeklyReport => self.render_report(frame, chunks[1]),
        }

        // Footer
        let footer_text = match &self.status {
            Some(status) => format!("{} | {}", status, self.key_hints()),
            None => self.key_hints().to_string(),
        };
        let footer = Paragraph::new(footer_text)
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(footer, chunks[2]);

        if let Some(dialog) = &self.dialog {
            render_dialog(frame, area, dialog);
        }
    }

    fn header_text(&self) -> String {
        match &self.screen {
            Screen::Calendar => format!("Calendar - {} workouts in total", self.workouts.len()),
            screen => screen.title(),
        }
    }

    fn key_hints(&self) -> &'static str {
        match &self.screen {
            Screen::Start => "←/→: prev/next workout | enter: open | d: delete | n: new | p: copy previous | c: calendar | w: report | ?: help | q: quit",
            Screen::Exercises(_) => "type: search | tab: add exercise | enter: pick | esc: back",
            Screen::ExerciseDetails(_) => "digits: input | tab: weight/reps | enter: save | e: edit | d: delete | x: cancel | esc: back",
            Screen::Workout(_) => "y: copy to today | d: delete workout | enter: open | esc: back",
            Screen::Calendar => "arrows: move | pgup/pgdn: month | enter: open day | esc: back",
            _ => "enter: open | esc: back | h: home | q: quit",
        }
    }

    fn render_start(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(5)])
            .split(area);

        let heading = Paragraph::new(format!("◀  {}  ▶", day_heading(self.selected_date)))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White).bg(Color::Black))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(heading, chunks[0]);

        match self.workout_on(self.selected_date) {
            Some(workout) => self.render_workout(frame, chunks[1], workout, "Workout"),
            None => {
                let empty = Paragraph::new(
                    "No workout for this date\n\n\
                    n: Start new workout\n\
                    p: Copy previous workout",
                )
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Gray))
                .block(Block::default().borders(Borders::ALL));
                frame.render_widget(empty, chunks[1]);
            }
        }
    }

    fn render_workout(&self, frame: &mut Frame, area: Rect, workout: &Workout, title: &str) {
        let items: Vec<ListItem> = workout
            .exercises
            .iter()
            .map(|exercise| {
                let mut lines = vec![Line::from(exercise.name.clone()).bold()];
                for set in &exercise.sets {
                    lines.push(Line::from(format!(
                        "    Set {}    {}kg × {} reps",
                        set.set_number, set.weight, set.reps
                    )).fg(Color::Gray));
                }
                ListItem::new(lines)
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(title.to_string()))
            .highlight_style(Style::default().fg(Color::Green));
        let mut state = ListState::default().with_selected(Some(self.cursor));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn render_workout_day(&self, frame: &mut Frame, area: Rect, date: NaiveDate) {
        match self.workout_on(date) {
            Some(workout) => self.render_workout(frame, area, workout, "Preview"),
            None => {
                let empty = Paragraph::new("No workout for this date")
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Color::Gray))
                    .block(Block::default().borders(Borders::ALL));
                frame.render_widget(empty, area);
            }
        }
    }

    fn render_list(&self, frame: &mut Frame, area: Rect, names: &[String], title: &str) {
        let items: Vec<ListItem> = names.iter().map(|n| ListItem::new(n.clone())).collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(title.to_string()))
            .highlight_symbol("> ")
            .highlight_style(Style::default().fg(Color::Green).bold());
        let mut state = ListState::default().with_selected(Some(self.cursor));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn render_exercises(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(5)])
            .split(area);

        let search = Paragraph::new(format!("🔍 {}", self.search))
            .block(Block::default().borders(Borders::ALL).title("Search exercises..."));
        frame.render_widget(search, chunks[0]);

        self.render_list(frame, chunks[1], &self.exercise_names(), "Exercises");
    }

    fn render_details(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(5)])
            .split(area);

        let inputs = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[0]);

        let focused = Style::default().fg(if self.form.editing.is_some() { Color::Yellow } else { Color::Green });
        for (i, (label, value, field)) in [
            ("Weight", &self.form.weight, Field::Weight),
            ("Reps", &self.form.reps, Field::Reps),
        ]
        .into_iter()
        .enumerate()
        {
            let style = if self.form.focus == field { focused } else { Style::default() };
            let input = Paragraph::new(value.as_str())
                .block(Block::default().borders(Borders::ALL).title(label).border_style(style));
            frame.render_widget(input, inputs[i]);
        }

        let rows: Vec<Row> = self.form.sets.iter().map(|set| {
            Row::new(vec![
                Cell::from(format!("Set {}", set.set_number)),
                Cell::from(format!("{}kg", set.weight)),
                Cell::from(format!("{} reps", set.reps)),
            ])
        }).collect();

        let title = if self.form.editing.is_some() { "Sets (editing)" } else { "Sets" };
        let table = Table::new(
            rows,
            [Constraint::Length(10), Constraint::Length(12), Constraint::Min(10)],
        )
        .block(Block::default().borders(Borders::ALL).title(title))
        .row_highlight_style(Style::default().fg(Color::Cyan));

        let mut state = ratatui::widgets::TableState::default().with_selected(Some(self.cursor));
        frame.render_stateful_widget(table, chunks[1], &mut state);
    }

    fn render_calendar(&self, frame: &mut Frame, area: Rect) {
        let year = self.calendar_day.year();
        let month = self.calendar_day.month();

        let header = Row::new(["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]).style(Style::default().bold());
        let rows: Vec<Row> = month_grid(year, month)
            .into_iter()
            .map(|week| {
                Row::new(week.into_iter().map(|day| match day {
                    Some(d) => {
                        let date = NaiveDate::from_ymd_opt(year, month, d).unwrap_or(self.calendar_day);
                        let mut style = Style::default();
                        if has_workout(&self.workouts, date) {
                            style = style.fg(Color::Green).bold();
                        }
                        if date == self.calendar_day {
                            style = style.reversed();
                        }
                        Cell::from(format!("{:>3}", d)).style(style)
                    }
                    None => Cell::from(""),
                }))
            })
            .collect();

        let table = Table::new(rows, [Constraint::Length(5); 7])
            .header(header)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(self.calendar_day.format("%B %Y").to_string()),
            );
        frame.render_widget(table, area);
    }

    fn render_instructions(&self, frame: &mut Frame, area: Rect, exercise: &str) {
        let lines = instruction_lines(exercise);

        let scroll = self.cursor.min(u16::MAX as usize) as u16;
        let text = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .scroll((scroll, 0))
            .block(Block::default().borders(Borders::ALL).title(instruction_heading(exercise)));
        frame.render_widget(text, area);
    }

    fn render_report(&self, frame: &mut Frame, area: Rect) {
        let report = WeeklyReport::compute(&self.workouts, self.today);
        let boxes = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4); 3])
            .split(area);

        let stats = [
            (report.workouts.to_string(), "Workouts completed this week"),
            (format!("{} kg", report.total_weight_kg()), "Total weight lifted this week"),
            (report.total_sets.to_string(), "Total sets performed this week"),
        ];
        for (i, (value, label)) in stats.into_iter().enumerate() {
            let text = vec![Line::from(value).bold(), Line::from(label)];
            let stat = Paragraph::new(text)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(stat, boxes[i]);
        }
    }
}

/// Lines of the instructions page; the cursor scrolls through them
pub(super) fn instruction_lines(exercise: &str) -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = Vec::new();
    if let Some(path) = gif_path(exercise) {
        lines.push(Line::from(format!("Demo: {}", path)).fg(Color::DarkGray));
        lines.push(Line::from(""));
    }
    lines.push(Line::from("Instructions").bold().centered());
    lines.extend(steps_lines(exercise).into_iter().map(Line::from));
    lines.push(Line::from(""));
    lines.push(Line::from("Common Mistakes").bold().centered());
    lines.extend(mistakes_lines(exercise).into_iter().map(Line::from));
    lines
}

fn render_dialog(frame: &mut Frame, area: Rect, dialog: &Dialog) {
    let (title, body) = match dialog {
        Dialog::ConfirmDeleteExercise(name) => (
            "Delete Exercise?".to_string(),
            format!("Are you sure you want to delete {}?\n\ny: Delete   n: Cancel", name),
        ),
        Dialog::ConfirmDeleteWorkout(date) => (
            "Delete Workout?".to_string(),
            format!("Are you sure you want to delete the workout of {}?\n\ny: Delete   n: Cancel", date),
        ),
        Dialog::AddExercise(name) => (
            "Add new exercise".to_string(),
            format!("{}_\n\nenter: Save   esc: Cancel", name),
        ),
        Dialog::Error(message) => ("Error".to_string(), format!("{}\n\nenter: OK", message)),
    };

    let popup = centered_rect(50, 30, area);
    frame.render_widget(Clear, popup);
    let paragraph = Paragraph::new(body)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(paragraph, popup);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;
    use ratatui::backend::TestBackend;

    fn render_to_string(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_start_screen_without_workout() {
        let today = NaiveDate::from_ymd_opt(2024, 10, 19).unwrap();
        let app = App::with_today(Database::open_in_memory().unwrap(), today).unwrap();
        let screen = render_to_string(&app);
        assert!(screen.contains("Saturday, October 19th"));
        assert!(screen.contains("No workout for this date"));
    }

    #[test]
    fn test_report_screen_shows_totals() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 6).unwrap();
        let db = Database::open_in_memory().unwrap();
        db.add_exercise(today, "Squats").unwrap();
        db.record_sets(today, "Squats", &[crate::db::ExerciseSet::new(1, "100", "5")]).unwrap();
        let mut app = App::with_today(db, today).unwrap();
        app.navigate(Screen::WeeklyReport).unwrap();

        let screen = render_to_string(&app);
        assert!(screen.contains("500 kg"));
        assert!(screen.contains("Workouts completed this week"));
    }

    #[test]
    fn test_calendar_header_counts_workouts() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 6).unwrap();
        let db = Database::open_in_memory().unwrap();
        db.add_exercise(today, "Squats").unwrap();
        db.add_exercise(NaiveDate::from_ymd_opt(2024, 2, 6).unwrap(), "Dips").unwrap();
        let mut app = App::with_today(db, today).unwrap();
        app.navigate(Screen::Calendar).unwrap();

        let screen = render_to_string(&app);
        assert!(screen.contains("2 workouts in total"));
        assert!(screen.contains("March 2024"));
    }
}
