//! State transitions: (Screen, Session, Action) → Transition.
//!
//! This is the core logic of the TUI. Fully testable without a terminal.
//! Each screen defines which actions it accepts. Unhandled actions
//! return the current screen unchanged (no-op). The only state touched
//! besides the returned screen is the session passed in.

use crate::session::Session;
use crate::types::{Party, Question, TransportCategory};

use super::state::{Action, Effect, Screen, Transition};

/// State transition function.
///
/// Given the current screen, the session it mirrors, and an action,
/// applies the action to the session and produces the next transition.
pub fn update(screen: Screen, session: &mut Session, action: &Action) -> Transition {
    if *action == Action::Quit {
        return Transition::Quit;
    }

    match screen {
        Screen::Transport { cursor } => update_transport(cursor, session, action),
        Screen::Responsibilities { cursor } => update_responsibilities(cursor, session, action),
        Screen::Result => update_result(session, action),
    }
}

// ============================================================================
// PER-SCREEN HANDLERS
// ============================================================================

/// Transport: move, choose, and advance once a category is chosen.
///
/// Next with nothing chosen picks the focused category instead of advancing.
fn update_transport(cursor: usize, session: &mut Session, action: &Action) -> Transition {
    let len = TransportCategory::ALL.len();
    let screen = Screen::Transport { cursor };

    match action {
        Action::MoveUp => Transition::Screen(Screen::Transport {
            cursor: cursor.saturating_sub(1),
        }),
        Action::MoveDown => Transition::Screen(Screen::Transport {
            cursor: (cursor + 1).min(len - 1),
        }),
        Action::Select => {
            if let Some(category) = screen.focused_category() {
                session.select_transport(category);
            }
            Transition::Screen(screen)
        }
        Action::NumberKey(n) => {
            let target = Screen::Transport {
                cursor: usize::from(*n).wrapping_sub(1),
            };
            match target.focused_category() {
                Some(category) => {
                    session.select_transport(category);
                    Transition::Screen(target)
                }
                None => Transition::Screen(screen),
            }
        }
        Action::Next => {
            if session.transport().is_none() {
                if let Some(category) = screen.focused_category() {
                    session.select_transport(category);
                }
                Transition::Screen(screen)
            } else if session.advance() {
                Transition::Screen(Screen::Responsibilities { cursor: 0 })
            } else {
                Transition::Screen(screen)
            }
        }
        _ => Transition::Screen(screen),
    }
}

/// Responsibilities: answer each question, advance when all are answered.
fn update_responsibilities(cursor: usize, session: &mut Session, action: &Action) -> Transition {
    let last = Question::ALL.len() - 1;
    let focused = Screen::Responsibilities { cursor }.focused_question();

    match action {
        Action::MoveUp => Transition::Screen(Screen::Responsibilities {
            cursor: cursor.saturating_sub(1),
        }),
        Action::MoveDown => Transition::Screen(Screen::Responsibilities {
            cursor: (cursor + 1).min(last),
        }),
        Action::AnswerSeller | Action::AnswerBuyer => {
            let party = if *action == Action::AnswerSeller {
                Party::Seller
            } else {
                Party::Buyer
            };
            if let Some(question) = focused {
                session.set_answer(question, party);
            }
            Transition::Screen(Screen::Responsibilities {
                cursor: (cursor + 1).min(last),
            })
        }
        Action::Select => {
            if let Some(question) = focused {
                let party = session
                    .answer(question)
                    .map(Party::other)
                    .unwrap_or(Party::Seller);
                session.set_answer(question, party);
            }
            Transition::Screen(Screen::Responsibilities { cursor })
        }
        Action::Next => {
            if session.advance() {
                Transition::Screen(Screen::Result)
            } else {
                Transition::Screen(Screen::Responsibilities { cursor })
            }
        }
        Action::Back => {
            session.back();
            let cursor = session
                .transport()
                .and_then(|t| TransportCategory::ALL.iter().position(|&c| c == t))
                .unwrap_or(0);
            Transition::Screen(Screen::Transport { cursor })
        }
        _ => Transition::Screen(Screen::Responsibilities { cursor }),
    }
}

/// Result: start over, contact, or revisit the answers.
fn update_result(session: &mut Session, action: &Action) -> Transition {
    match action {
        Action::Restart => {
            session.reset();
            Transition::Screen(Screen::default())
        }
        Action::Contact => Transition::Effect(Effect::OpenContact),
        Action::Back => {
            session.back();
            Transition::Screen(Screen::Responsibilities { cursor: 0 })
        }
        _ => Transition::Screen(Screen::Result),
    }
}

// ============================================================================
// TESTS
// ============================================================================
