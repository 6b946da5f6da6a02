//! TUI state algebra: screens, actions, transitions.
//!
//! Screen variants carry only per-screen transient state (the focused
//! row). Everything the user has chosen lives in the shared
//! [`Session`], which the screen always mirrors: each variant
//! corresponds to exactly one [`Step`].

use crate::config::Contact;
use crate::session::{Session, Step};
use crate::types::{Question, TransportCategory};

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug)]
pub struct App {
    /// Current screen, carrying its cursor.
    pub screen: Screen,

    /// Selections made so far.
    pub session: Session,

    /// Contact affordance shown on the result screen.
    pub contact: Contact,

    /// One-line status shown on the result screen until the next key.
    pub notice: Option<String>,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

impl App {
    /// Fresh wizard on the transport screen.
    pub fn new(contact: Contact) -> Self {
        App {
            screen: Screen::default(),
            session: Session::new(),
            contact,
            notice: None,
            should_quit: false,
        }
    }
}

// ============================================================================
// SCREENS
// ============================================================================

/// The current TUI screen, one per wizard step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Choose a transport category. `cursor` indexes `TransportCategory::ALL`.
    Transport { cursor: usize },

    /// Answer the responsibility questions. `cursor` indexes `Question::ALL`.
    Responsibilities { cursor: usize },

    /// Recommendation and contact affordance.
    Result,
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Transport { cursor: 0 }
    }
}

impl Screen {
    /// Screen for a session step, cursor at the top.
    pub fn for_step(step: Step) -> Self {
        match step {
            Step::Transport => Screen::Transport { cursor: 0 },
            Step::Responsibilities => Screen::Responsibilities { cursor: 0 },
            Step::Result => Screen::Result,
        }
    }

    /// The session step this screen belongs to.
    pub fn step(self) -> Step {
        match self {
            Screen::Transport { .. } => Step::Transport,
            Screen::Responsibilities { .. } => Step::Responsibilities,
            Screen::Result => Step::Result,
        }
    }

    /// Category under the cursor on the transport screen.
    pub fn focused_category(self) -> Option<TransportCategory> {
        match self {
            Screen::Transport { cursor } => TransportCategory::ALL.get(cursor).copied(),
            _ => None,
        }
    }

    /// Question under the cursor on the responsibilities screen.
    pub fn focused_question(self) -> Option<Question> {
        match self {
            Screen::Responsibilities { cursor } => Question::ALL.get(cursor).copied(),
            _ => None,
        }
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Move cursor up.
    MoveUp,
    /// Move cursor down.
    MoveDown,
    /// Choose the focused category, or cycle the focused answer.
    Select,
    /// The "next" button: Next Step / Get Recommendation.
    Next,
    /// Go back one step.
    Back,
    /// Pick a category directly by number (1-4).
    NumberKey(u8),
    /// Answer the focused question with "seller".
    AnswerSeller,
    /// Answer the focused question with "buyer".
    AnswerBuyer,
    /// Start over from an empty session.
    Restart,
    /// Reach the logistics expert.
    Contact,
    /// Quit the application.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a state transition. The event loop interprets it.
#[derive(Debug, PartialEq)]
pub enum Transition {
    /// Render this screen (may be the same screen).
    Screen(Screen),
    /// Quit the application.
    Quit,
    /// Execute a side effect, staying on the current screen.
    Effect(Effect),
}

/// Side effect requested by a transition.
#[derive(Debug, PartialEq)]
pub enum Effect {
    /// Hand the contact's `tel:` URI to the system opener.
    OpenContact,
}

// ============================================================================
// TESTS
// ============================================================================
