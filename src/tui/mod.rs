//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (loading, sending): draws every ~80ms so the spinner turns.
//! - **Idle** (every other screen): sleeps up to 500ms, only redraws on events,
//!   terminal resize or a background action.
//!
//! ## Background work
//!
//! Timers and notification delivery run as tokio tasks. Timers report back
//! through an `mpsc` channel that the loop drains after each batch of input.
//! Delivery never reports back at all.

mod component;
mod components;
mod event;
pub mod theme;
pub mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::{Action, Effect, Timer, init, update};
use crate::core::catalog::LoadedCatalog;
use crate::core::config::ResolvedConfig;
use crate::core::screen::Screen;
use crate::core::state::App;
use crate::notify::{self, Notifier, TelegramNotifier};
use crate::tui::components::ContentViewState;
use crate::tui::event::{poll_event_immediate, poll_event_timeout};
use crate::tui::theme::Theme;

const ANIMATION_TICK: Duration = Duration::from_millis(80);
const IDLE_TICK: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub content_view: ContentViewState,
    pub theme: Theme,
}

impl TuiState {
    pub fn new(theme: Theme) -> Self {
        Self {
            content_view: ContentViewState::new(),
            theme,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableBracketedPaste, Hide)?;
        info!("Terminal modes enabled (bracketed paste, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, Show);
    }
}

/// Carries out the effects `update` asks for.
pub struct EffectRunner {
    tx: mpsc::Sender<Action>,
    notifier: Arc<dyn Notifier>,
}

impl EffectRunner {
    pub fn new(tx: mpsc::Sender<Action>, notifier: Arc<dyn Notifier>) -> Self {
        Self { tx, notifier }
    }

    /// Apply effects in order. Returns true if the app should quit.
    pub fn run(&self, effects: Vec<Effect>, tui: &mut TuiState) -> bool {
        let mut quit = false;
        for effect in effects {
            match effect {
                Effect::Quit => quit = true,
                Effect::StartTimer(timer) => spawn_timer(timer, self.tx.clone()),
                Effect::Dispatch(email) => notify::dispatch(self.notifier.clone(), email),
                Effect::Scroll(direction) => tui.content_view.scroll(direction),
                Effect::ResizeViewport { width, height } => {
                    tui.content_view.resize(width, height)
                }
            }
        }
        quit
    }
}

/// Sleep on the tokio clock, then report the timer back to the loop.
fn spawn_timer(timer: Timer, tx: mpsc::Sender<Action>) {
    debug!("Starting {:?} timer ({:?})", timer, timer.duration());
    tokio::spawn(async move {
        tokio::time::sleep(timer.duration()).await;
        if tx.send(Action::TimerElapsed(timer)).is_err() {
            warn!("Failed to deliver {:?} timer: receiver dropped", timer);
        }
    });
}

/// Reset the scroll position when the screen changed, then keep the
/// highlighted row of a list screen in view.
fn sync_viewport(app: &App, tui: &mut TuiState, last_screen: &mut Screen) {
    if app.screen != *last_screen {
        tui.content_view.reset();
        *last_screen = app.screen;
    }
    follow_cursor(app, tui);
}

/// Keep the highlighted row on screen for list screens.
fn follow_cursor(app: &App, tui: &mut TuiState) {
    let row = match app.screen {
        Screen::EmployerSelect => app.employer_cursor.index(),
        Screen::Projects => app.project_cursor.index(),
        _ => return,
    };
    tui.content_view
        .ensure_visible(u16::try_from(row).unwrap_or(u16::MAX));
}

pub fn run(config: ResolvedConfig, loaded: LoadedCatalog) -> std::io::Result<()> {
    let notifier: Arc<dyn Notifier> = Arc::new(TelegramNotifier::new(
        config.telegram_base_url.clone(),
        config.bot_token.clone(),
        config.chat_id.clone(),
    ));
    if loaded.status.is_degraded() {
        warn!("Starting with a degraded catalog: {:?}", loaded.status);
    }
    let mut app = App::new(loaded);
    let mut tui = TuiState::new(Theme::default());

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();
    let effects = EffectRunner::new(tx, notifier);

    let mut should_quit = effects.run(init(&app), &mut tui);

    // The first size report makes the app ready to render
    let size = terminal.size()?;
    let resize = Action::Resize {
        width: size.width,
        height: size.height,
    };
    should_quit |= effects.run(update(&mut app, resize), &mut tui);

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame
    let mut last_screen = app.screen;

    while !should_quit {
        let animating = app.screen.is_animated();
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if animating { ANIMATION_TICK } else { IDLE_TICK };
        let mut next = poll_event_timeout(timeout)?;

        // Process first event + drain ALL pending events before next draw
        while let Some(event) = next {
            needs_redraw = true;
            should_quit |= effects.run(update(&mut app, event.into_action()), &mut tui);
            sync_viewport(&app, &mut tui, &mut last_screen);
            if should_quit {
                break;
            }
            next = poll_event_immediate()?;
        }

        // Handle background task actions (timers)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            should_quit |= effects.run(update(&mut app, action), &mut tui);
            sync_viewport(&app, &mut tui, &mut last_screen);
        }
    }

    info!("Exiting from {:?}", app.screen);
    ratatui::restore();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::Key;
    use crate::core::action::ScrollDirection;
    use crate::test_support::{
        NeverNotifier, RecordingNotifier, acme_app, app_with, at_menu, grid_catalog, press,
        type_text,
    };
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn runner(notifier: Arc<dyn Notifier>) -> (EffectRunner, mpsc::Receiver<Action>) {
        let (tx, rx) = mpsc::channel();
        (EffectRunner::new(tx, notifier), rx)
    }

    #[tokio::test(start_paused = true)]
    async fn test_startup_timer_reaches_menu() {
        let (effects, rx) = runner(Arc::new(NeverNotifier));
        let mut app = acme_app();
        let mut tui = TuiState::new(Theme::default());

        assert!(!effects.run(init(&app), &mut tui));
        tokio::time::sleep(Duration::from_millis(900)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(200)).await;
        let action = rx.try_recv().unwrap();
        assert_eq!(action, Action::TimerElapsed(Timer::Startup));
        effects.run(update(&mut app, action), &mut tui);
        assert_eq!(app.screen, Screen::Menu);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stalled_dispatch_still_returns_to_menu() {
        let (effects, rx) = runner(Arc::new(NeverNotifier));
        let mut app = at_menu(acme_app());
        let mut tui = TuiState::new(Theme::default());

        press(&mut app, &[Key::Char('c')]);
        type_text(&mut app, "me@example.com");
        let submitted = press(&mut app, &[Key::Enter]);
        assert!(!effects.run(submitted, &mut tui));
        assert_eq!(app.screen, Screen::Sending);

        tokio::time::sleep(Duration::from_millis(4900)).await;
        assert!(rx.try_recv().is_err());
        assert_eq!(app.screen, Screen::Sending);

        tokio::time::sleep(Duration::from_millis(200)).await;
        let action = rx.try_recv().unwrap();
        assert_eq!(action, Action::TimerElapsed(Timer::Sending));
        effects.run(update(&mut app, action), &mut tui);
        assert_eq!(app.screen, Screen::Menu);
    }

    #[tokio::test]
    async fn test_dispatch_reaches_notifier() {
        let (notifier, mut received) = RecordingNotifier::new();
        let (effects, _rx) = runner(Arc::new(notifier));
        let mut tui = TuiState::new(Theme::default());

        effects.run(vec![Effect::Dispatch("me@example.com".to_string())], &mut tui);
        assert_eq!(received.recv().await.as_deref(), Some("me@example.com"));
    }

    #[test]
    fn test_quit_and_viewport_effects() {
        let (effects, _rx) = runner(Arc::new(NeverNotifier));
        let mut tui = TuiState::new(Theme::default());

        assert!(!effects.run(
            vec![Effect::ResizeViewport {
                width: 60,
                height: 12
            }],
            &mut tui
        ));
        assert_eq!((tui.content_view.width, tui.content_view.height), (60, 12));
        assert!(effects.run(vec![Effect::Quit], &mut tui));
    }

    #[test]
    fn test_follow_cursor_keeps_row_visible() {
        let mut app = at_menu(acme_app());
        let mut tui = TuiState::new(Theme::default());
        tui.content_view.resize(60, 2);
        tui.content_view.set_content_height(10);

        press(&mut app, &[Key::Char('p')]);
        follow_cursor(&app, &mut tui);
        assert_eq!(tui.content_view.offset(), 0);

        // Not a list screen: nothing moves
        app.screen = Screen::About;
        tui.content_view.ensure_visible(5);
        let offset = tui.content_view.offset();
        follow_cursor(&app, &mut tui);
        assert_eq!(tui.content_view.offset(), offset);
    }

    #[test]
    fn test_scroll_effect_moves_and_clamps() {
        let (effects, _rx) = runner(Arc::new(NeverNotifier));
        let mut tui = TuiState::new(Theme::default());
        tui.content_view.resize(60, 4);
        tui.content_view.set_content_height(6);

        assert!(!effects.run(vec![Effect::Scroll(ScrollDirection::Down)], &mut tui));
        assert_eq!(tui.content_view.offset(), 1);

        let down = vec![Effect::Scroll(ScrollDirection::Down); 5];
        effects.run(down, &mut tui);
        assert_eq!(tui.content_view.offset(), 2);

        let up = vec![Effect::Scroll(ScrollDirection::Up); 5];
        effects.run(up, &mut tui);
        assert_eq!(tui.content_view.offset(), 0);
    }

    /// Apply keys one at a time the way the event loop does, then draw.
    fn drive(
        app: &mut App,
        tui: &mut TuiState,
        last_screen: &mut Screen,
        terminal: &mut Terminal<TestBackend>,
        keys: &[Key],
    ) -> String {
        let (effects, _rx) = runner(Arc::new(NeverNotifier));
        for key in keys {
            effects.run(update(app, Action::Key(*key)), tui);
            sync_viewport(app, tui, last_screen);
        }
        terminal.draw(|f| ui::draw_ui(f, app, tui, 0)).unwrap();
        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_cursor_row_visible_after_returning_from_detail() {
        let (effects, _rx) = runner(Arc::new(NeverNotifier));
        let mut app = at_menu(app_with(grid_catalog(1, 30)));
        let mut tui = TuiState::new(Theme::default());
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        let mut last_screen = app.screen;
        effects.run(
            update(&mut app, Action::Resize { width: 100, height: 20 }),
            &mut tui,
        );

        let mut keys = vec![Key::Char('p'), Key::Enter];
        keys.extend(vec![Key::Down; 25]);
        let text = drive(&mut app, &mut tui, &mut last_screen, &mut terminal, &keys);
        assert!(text.contains("> Project 0-25"));

        let text = drive(&mut app, &mut tui, &mut last_screen, &mut terminal, &[Key::Enter]);
        assert_eq!(app.screen, Screen::ProjectDetail);
        assert!(text.contains("Description for 0-25"));

        let text = drive(&mut app, &mut tui, &mut last_screen, &mut terminal, &[Key::Esc]);
        assert_eq!(app.screen, Screen::Projects);
        assert_eq!(app.project_cursor.index(), 25);
        assert!(text.contains("> Project 0-25"));
    }

    #[test]
    fn test_cursor_row_visible_after_returning_to_employers() {
        let (effects, _rx) = runner(Arc::new(NeverNotifier));
        let mut app = at_menu(app_with(grid_catalog(30, 1)));
        let mut tui = TuiState::new(Theme::default());
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        let mut last_screen = app.screen;
        effects.run(
            update(&mut app, Action::Resize { width: 100, height: 20 }),
            &mut tui,
        );

        let mut keys = vec![Key::Char('p')];
        keys.extend(vec![Key::Down; 20]);
        keys.extend([Key::Enter, Key::Esc]);
        let text = drive(&mut app, &mut tui, &mut last_screen, &mut terminal, &keys);
        assert_eq!(app.screen, Screen::EmployerSelect);
        assert!(text.contains("> Employer 20"));
    }

    #[test]
    fn test_screen_change_resets_scroll() {
        let mut app = at_menu(acme_app());
        let mut tui = TuiState::new(Theme::default());
        let mut last_screen = app.screen;
        tui.content_view.resize(60, 2);
        tui.content_view.set_content_height(10);
        tui.content_view.ensure_visible(5);

        press(&mut app, &[Key::Char('a')]);
        sync_viewport(&app, &mut tui, &mut last_screen);
        assert_eq!(last_screen, Screen::About);
        assert_eq!(tui.content_view.offset(), 0);
    }
}
