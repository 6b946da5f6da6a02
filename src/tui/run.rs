//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the state,
//! update and view layers to the real terminal via crossterm and
//! ratatui. Single-threaded: the loop blocks on the next terminal event.

use std::io;
use std::process::{Command, Stdio};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::config::Contact;
use crate::types::Recommendation;

use super::state::{Action, App, Effect, Screen, Transition};
use super::update::update;
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        // Navigation
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Enter | KeyCode::Right => Some(Action::Next),
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Left => Some(Action::Back),

        // Choosing
        KeyCode::Char(' ') => Some(Action::Select),
        KeyCode::Char('s') => Some(Action::AnswerSeller),
        KeyCode::Char('b') => Some(Action::AnswerBuyer),
        KeyCode::Char(c @ '1'..='4') => Some(Action::NumberKey(c as u8 - b'0')),

        // Result screen
        KeyCode::Char('r') => Some(Action::Restart),
        KeyCode::Char('c') => Some(Action::Contact),

        KeyCode::Char('q') => Some(Action::Quit),

        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    Terminal::new(backend)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the full-screen wizard until the user quits.
///
/// Returns the recommendation on screen at exit, if any, so the caller
/// can echo it to the normal terminal.
pub fn run(contact: Contact) -> io::Result<Option<Recommendation>> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let mut app = App::new(contact);

    let outcome = event_loop(&mut terminal, &mut app);

    if let Err(e) = restore_terminal() {
        log::warn!("failed to restore terminal: {}", e);
    }
    outcome?;

    Ok(app.session.recommendation())
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| render(app, frame))?;

        if app.should_quit {
            return Ok(());
        }

        let key = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => key,
            _ => continue, // releases, mouse, resize: just redraw
        };

        if let Some(action) = map_key(key) {
            apply(app, &action);
        }
    }
}

/// Apply one action to the app, interpreting the resulting transition.
fn apply(app: &mut App, action: &Action) {
    app.notice = None;

    match update(app.screen, &mut app.session, action) {
        Transition::Screen(screen) => app.screen = screen,
        Transition::Quit => app.should_quit = true,
        Transition::Effect(effect) => handle_effect(effect, app),
    }

    if app.screen.step() != app.session.step() {
        log::debug!("screen out of step with session, resyncing");
        app.screen = Screen::for_step(app.session.step());
    }
}

// ============================================================================
// EFFECT HANDLING
// ============================================================================

/// Platform command that opens a URI with the default handler.
fn opener() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else if cfg!(target_os = "windows") {
        "explorer"
    } else {
        "xdg-open"
    }
}

/// Handle a side effect requested by a transition.
///
/// The child's output is discarded so it cannot draw over the frame;
/// a failure is reported through `app.notice` instead of stderr.
fn handle_effect(effect: Effect, app: &mut App) {
    match effect {
        Effect::OpenContact => {
            let uri = app.contact.tel_uri();
            if let Err(e) = spawn_opener(opener(), &uri) {
                app.notice = Some(format!("Could not open {}: {}", uri, e));
            }
            // Stay on the current screen; the number is already displayed
        }
    }
}

fn spawn_opener(program: &str, uri: &str) -> io::Result<()> {
    Command::new(program)
        .arg(uri)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
}

// ============================================================================
// TESTS
// ============================================================================
