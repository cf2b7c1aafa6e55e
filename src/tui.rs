use std::time::Duration;

use chrono::{Days, Months, NaiveDate};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::style::{Color, Modifier, Style};
use ratatui::Frame;

use crate::error::Result;

pub const HEADER_STYLE: Style = Style::new()
    .fg(Color::Yellow)
    .add_modifier(Modifier::BOLD);

pub const FOOTER_STYLE: Style = Style::new().fg(Color::DarkGray);

pub const SECTION_STYLE: Style = Style::new()
    .fg(Color::Yellow)
    .add_modifier(Modifier::BOLD);

pub const KEY_STYLE: Style = Style::new().add_modifier(Modifier::BOLD);

pub const IRR_STYLE: Style = Style::new()
    .fg(Color::Rgb(46, 125, 50))
    .add_modifier(Modifier::BOLD);

pub const SELECTED_STYLE: Style = Style::new()
    .bg(Color::Rgb(40, 40, 60))
    .add_modifier(Modifier::BOLD);

pub const FOCUSED_STYLE: Style = Style::new().fg(Color::Cyan);

/// How long the event loop waits for input before checking for finished fetches.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

// ---------------------------------------------------------------------------
// Date input
// ---------------------------------------------------------------------------

/// A date control bounded above by `max`. Every way of changing the value
/// clamps to `max`, so a later date can never be entered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateField {
    value: NaiveDate,
    max: NaiveDate,
}

impl DateField {
    pub fn new(value: NaiveDate, max: NaiveDate) -> Self {
        Self { value: value.min(max), max }
    }

    pub fn value(&self) -> NaiveDate {
        self.value
    }

    pub fn step_days(&mut self, delta: i64) {
        let magnitude = Days::new(delta.unsigned_abs());
        let next = if delta < 0 {
            self.value.checked_sub_days(magnitude)
        } else {
            self.value.checked_add_days(magnitude)
        };
        if let Some(d) = next {
            self.value = d.min(self.max);
        }
    }

    pub fn step_months(&mut self, delta: i32) {
        let magnitude = Months::new(delta.unsigned_abs());
        let next = if delta < 0 {
            self.value.checked_sub_months(magnitude)
        } else {
            self.value.checked_add_months(magnitude)
        };
        if let Some(d) = next {
            self.value = d.min(self.max);
        }
    }

    /// Typed entry. Later dates land on `max`.
    pub fn set(&mut self, date: NaiveDate) {
        self.value = date.min(self.max);
    }

    pub fn reset_to_max(&mut self) {
        self.value = self.max;
    }

    /// Move the bound. A value beyond a lowered bound is pulled back to it.
    pub fn set_max(&mut self, max: NaiveDate) {
        self.max = max;
        self.value = self.value.min(max);
    }
}

// ---------------------------------------------------------------------------
// Event loop
// ---------------------------------------------------------------------------

pub enum AppAction {
    Continue,
    Quit,
}

pub trait App {
    fn draw(&mut self, frame: &mut Frame);
    fn handle_key(&mut self, code: KeyCode) -> AppAction;
    /// Called between input polls to pick up background work.
    fn tick(&mut self) {}
}

/// Run an interactive ratatui app. Sets up the terminal, event loop,
/// and panic hook, then restores the terminal on exit.
pub fn run_app(app: &mut dyn App) -> Result<()> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        ratatui::restore();
        hook(info);
    }));

    let mut terminal = ratatui::init();

    let result: Result<()> = loop {
        app.tick();

        if let Err(e) = terminal.draw(|frame| app.draw(frame)) {
            break Err(e.into());
        }

        match event::poll(POLL_INTERVAL) {
            Err(e) => break Err(e.into()),
            Ok(false) => continue,
            Ok(true) => {}
        }

        match event::read() {
            Err(e) => break Err(e.into()),
            Ok(Event::Key(key)) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    && key.code == KeyCode::Char('c')
                {
                    break Ok(());
                }
                match app.handle_key(key.code) {
                    AppAction::Quit => break Ok(()),
                    AppAction::Continue => {}
                }
            }
            _ => {}
        }
    };

    drop(terminal);
    ratatui::restore();
    result
}
