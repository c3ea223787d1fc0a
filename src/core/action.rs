//! # Actions
//!
//! Everything that can happen in the app becomes an `Action`.
//! User presses Enter? That's `Action::Key(Key::Enter)`.
//! The startup delay ran out? That's `Action::TimerElapsed(Timer::Startup)`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state, and returns the `Effect`s the runtime should perform. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + [Effect]
//! ```

use log::debug;
use std::time::Duration;

use crate::core::screen::Screen;
use crate::core::state::App;

/// Rows reserved above the content view (border, padding, header, legend, spacer).
pub const HEADER_HEIGHT: u16 = 6;
/// Rows reserved below the content view (spacer, footer, border/padding).
pub const FOOTER_HEIGHT: u16 = 3;
/// Columns reserved around the content view.
pub const SIDE_MARGIN: u16 = 10;

/// UI-agnostic key input. The TUI adapter translates terminal events into these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Enter,
    Esc,
    Backspace,
    Delete,
}

/// One-shot timers. Each fires a single `Action::TimerElapsed` into the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    /// Leaves the loading splash.
    Startup,
    /// Leaves the sending screen after a contact submission.
    Sending,
}

impl Timer {
    pub const fn duration(self) -> Duration {
        match self {
            Timer::Startup => Duration::from_secs(1),
            Timer::Sending => Duration::from_secs(5),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Key(Key),
    /// Bracketed paste. Only the contact screen uses it.
    Paste(String),
    Resize { width: u16, height: u16 },
    TimerElapsed(Timer),
    /// Unconditional quit (Ctrl+C).
    Quit,
}

/// Work for the runtime to perform after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Quit,
    StartTimer(Timer),
    /// Fire-and-forget notification carrying the submitted email.
    Dispatch(String),
    /// A directional key the list cursor did not consume.
    Scroll(ScrollDirection),
    ResizeViewport { width: u16, height: u16 },
}

/// Effects to run once at startup.
pub fn init(_app: &App) -> Vec<Effect> {
    vec![Effect::StartTimer(Timer::Startup)]
}

pub fn update(app: &mut App, action: Action) -> Vec<Effect> {
    let before = app.screen;

    let effects = match action {
        Action::Quit => vec![Effect::Quit],
        Action::Resize { width, height } => resize(app, width, height),
        Action::TimerElapsed(timer) => timer_elapsed(app, timer),
        Action::Paste(text) => {
            if app.screen == Screen::Contact {
                app.email.handle_paste(&text);
            }
            Vec::new()
        }
        Action::Key(key) if app.screen == Screen::Contact => contact_key(app, key),
        Action::Key(key) => navigation_key(app, key),
    };

    if app.screen != Screen::ProjectDetail {
        app.selected_project = None;
    }
    if app.screen != before {
        debug!("Screen transition {:?} -> {:?}", before, app.screen);
    }
    effects
}

fn resize(app: &mut App, width: u16, height: u16) -> Vec<Effect> {
    app.width = width;
    app.height = height;
    app.ready = true;
    vec![Effect::ResizeViewport {
        width: width.saturating_sub(SIDE_MARGIN),
        height: height.saturating_sub(HEADER_HEIGHT + FOOTER_HEIGHT),
    }]
}

fn timer_elapsed(app: &mut App, timer: Timer) -> Vec<Effect> {
    match (timer, app.screen) {
        (Timer::Startup, Screen::Loading) | (Timer::Sending, Screen::Sending) => {
            app.screen = Screen::Menu;
        }
        _ => debug!("Ignoring {:?} timer on {:?}", timer, app.screen),
    }
    Vec::new()
}

/// Contact is modal: only Enter and Esc are interpreted, everything else edits the field.
fn contact_key(app: &mut App, key: Key) -> Vec<Effect> {
    match key {
        Key::Enter => {
            let email = app.email.value().trim().to_string();
            if email.is_empty() {
                return Vec::new();
            }
            app.email.clear();
            app.screen = Screen::Sending;
            vec![
                Effect::Dispatch(email),
                Effect::StartTimer(Timer::Sending),
            ]
        }
        Key::Esc => {
            app.email.blur();
            app.screen = Screen::Menu;
            Vec::new()
        }
        other => {
            app.email.handle_key(&other);
            Vec::new()
        }
    }
}

fn navigation_key(app: &mut App, key: Key) -> Vec<Effect> {
    if key == Key::Char('q') {
        return vec![Effect::Quit];
    }
    if !app.screen.accepts_shortcuts() {
        return Vec::new();
    }

    match key {
        Key::Char('a') => app.screen = Screen::About,
        Key::Char('s') => app.screen = Screen::Skills,
        Key::Char('e') => app.screen = Screen::EasterEgg,
        Key::Char('p') => {
            app.employer_cursor.reset();
            app.project_cursor.reset();
            app.screen = Screen::EmployerSelect;
        }
        Key::Char('c') => {
            app.email.focus();
            app.screen = Screen::Contact;
        }
        Key::Up | Key::Char('k') => return move_cursor(app, ScrollDirection::Up),
        Key::Down | Key::Char('j') => return move_cursor(app, ScrollDirection::Down),
        Key::Enter => select(app),
        Key::Esc => back(app),
        _ => {}
    }
    Vec::new()
}

/// Move the list cursor; at a bound (or off a list screen) the key scrolls the content instead.
fn move_cursor(app: &mut App, direction: ScrollDirection) -> Vec<Effect> {
    let (len, cursor) = match app.screen {
        Screen::EmployerSelect => (app.employer_count(), &mut app.employer_cursor),
        Screen::Projects => {
            let len = app.project_count();
            (len, &mut app.project_cursor)
        }
        _ => return vec![Effect::Scroll(direction)],
    };

    let moved = match direction {
        ScrollDirection::Up => cursor.move_up(len),
        ScrollDirection::Down => cursor.move_down(len),
    };
    if moved {
        Vec::new()
    } else {
        vec![Effect::Scroll(direction)]
    }
}

fn select(app: &mut App) {
    match app.screen {
        Screen::EmployerSelect => {
            if app.employer_count() == 0 {
                debug!("No employers to select");
                return;
            }
            app.project_cursor.reset();
            app.screen = Screen::Projects;
        }
        Screen::Projects => {
            let employer = app.employer_cursor.index();
            let project = app.project_cursor.index();
            if app.catalog().project(employer, project).is_none() {
                debug!("No project to select for employer {}", employer);
                return;
            }
            app.selected_project = Some((employer, project));
            app.screen = Screen::ProjectDetail;
        }
        _ => {}
    }
}

fn back(app: &mut App) {
    app.screen = match app.screen {
        Screen::ProjectDetail => Screen::Projects,
        Screen::Projects => Screen::EmployerSelect,
        Screen::EmployerSelect | Screen::About | Screen::Skills | Screen::EasterEgg => Screen::Menu,
        other => other,
    };
}
