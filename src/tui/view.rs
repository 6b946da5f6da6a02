//! Pure rendering: map App state to ratatui widget trees.
//!
//! Each screen has a dedicated render function. The main `render()`
//! dispatches based on the current Screen variant. Widget-building
//! functions are pure (state in, widgets out); the only effect is
//! Frame::render_widget() which writes to the terminal buffer.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;

use crate::config::Contact;
use crate::report::{contact_sentence, recommendation_sentence, ICC_ATTRIBUTION};
use crate::resolver::available_terms;
use crate::session::Session;
use crate::types::{Party, Question, TransportCategory};

use super::state::{App, Screen};
use super::theme;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the current screen to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    // Common layout: title bar at top, content in middle, help at bottom
    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Min(0),    // content
        Constraint::Length(1), // help
    ])
    .split(area);

    frame.render_widget(render_title(&app.screen), chunks[0]);
    frame.render_widget(render_help(&app.screen, &app.session), chunks[2]);

    let content_area = chunks[1];

    match app.screen {
        Screen::Transport { cursor } => {
            render_transport(&app.session, cursor, frame, content_area);
        }
        Screen::Responsibilities { cursor } => {
            render_responsibilities(&app.session, cursor, frame, content_area);
        }
        Screen::Result => {
            render_result(&app.session, &app.contact, app.notice.as_deref(), frame, content_area);
        }
    }
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

/// Title bar showing the app name and the current step.
fn render_title(screen: &Screen) -> Paragraph<'static> {
    let step = screen.step();
    let heading = match screen {
        Screen::Transport { .. } => "Choose Your Transportation Mode",
        Screen::Responsibilities { .. } => "Specify Responsibilities",
        Screen::Result => "Your Recommended Incoterms® 2020 Rule",
    };

    Paragraph::new(Line::from(vec![
        Span::styled("Incoterms® 2020 Calculator", theme::STYLE_TITLE),
        Span::styled(format!("  Step {} of 3 · {}", step.number(), heading), theme::STYLE_DIM),
    ]))
}

/// Help line showing available keybindings for the current screen.
///
/// The "next" hint is only shown while the session allows advancing.
fn render_help(screen: &Screen, session: &Session) -> Paragraph<'static> {
    let ready = session.can_advance();
    let help_text = match screen {
        Screen::Transport { .. } if ready => {
            "[j/k] move  [Space] choose  [1-4] pick  [Enter] next step  [q] quit"
        }
        Screen::Transport { .. } => "[j/k] move  [Space/Enter] choose  [1-4] pick  [q] quit",
        Screen::Responsibilities { .. } if ready => {
            "[j/k] move  [s] seller  [b] buyer  [Enter] get recommendation  [Esc] back  [q] quit"
        }
        Screen::Responsibilities { .. } => {
            "[j/k] move  [s] seller  [b] buyer  [Space] toggle  [Esc] back  [q] quit"
        }
        Screen::Result => "[r] start over  [c] contact expert  [Esc] back  [q] quit",
    };

    Paragraph::new(Span::styled(help_text, theme::STYLE_HELP))
}

/// Radio-button marker: "(•)" when chosen, "( )" otherwise.
fn radio(chosen: bool) -> Span<'static> {
    if chosen {
        Span::styled("(•) ", theme::STYLE_CHECKED)
    } else {
        Span::styled("( ) ", theme::STYLE_UNCHECKED)
    }
}

/// Rows scrolled off the top so the cursor row stays visible.
fn scroll_offset(cursor_row: usize, visible_height: usize) -> u16 {
    if visible_height > 0 && cursor_row >= visible_height {
        (cursor_row - visible_height + 1) as u16
    } else {
        0
    }
}

// ============================================================================
// SCREEN: TRANSPORT
// ============================================================================

fn render_transport(session: &Session, cursor: usize, frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Min(0),    // choices
        Constraint::Length(4), // catalog
    ])
    .split(area);

    let mut lines = vec![
        Line::from(Span::styled(
            "  Select the primary mode of transport for your shipment",
            theme::STYLE_DIM,
        )),
        Line::from(""),
    ];

    for (i, category) in TransportCategory::ALL.iter().enumerate() {
        let chosen = session.transport() == Some(*category);
        let spans = vec![
            Span::styled(format!("  [{}] ", i + 1), theme::STYLE_INTERACTIVE),
            radio(chosen),
            Span::styled(format!("{:<14}", category.name()), theme::STYLE_IMPORTANT),
            Span::styled(category.description(), theme::STYLE_DIM),
        ];

        let line = if i == cursor {
            Line::from(spans).style(theme::STYLE_CURSOR)
        } else {
            Line::from(spans)
        };
        lines.push(line);
    }

    let header_rows = 2;
    let offset = scroll_offset(cursor + header_rows, chunks[0].height as usize);
    frame.render_widget(Paragraph::new(lines).scroll((offset, 0)), chunks[0]);

    frame.render_widget(render_catalog(session.transport()), chunks[1]);
}

/// The informational list of rules for the chosen category.
fn render_catalog(transport: Option<TransportCategory>) -> Paragraph<'static> {
    let Some(category) = transport else {
        return Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "  Choose a mode to see its Incoterms® 2020 rules",
                theme::STYLE_WARNING,
            )),
        ]);
    };

    let mut chips = vec![Span::raw("  ")];
    for term in available_terms(category) {
        chips.push(Span::styled(format!(" {} ", term.code()), theme::STYLE_CHIP));
        chips.push(Span::raw(" "));
    }

    Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "  Available Incoterms® 2020 rules for {} transport:",
                category.id()
            ),
            theme::STYLE_IMPORTANT,
        )),
        Line::from(chips),
    ])
    .wrap(Wrap { trim: false })
}

// ============================================================================
// SCREEN: RESPONSIBILITIES
// ============================================================================

fn render_responsibilities(session: &Session, cursor: usize, frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Min(0),    // questions
        Constraint::Length(1), // tally
    ])
    .split(area);

    let mut lines = vec![
        Line::from(Span::styled(
            "  Define who handles each aspect of the shipment",
            theme::STYLE_DIM,
        )),
        Line::from(""),
    ];

    for (i, question) in Question::ALL.iter().enumerate() {
        let answer = session.answer(*question);

        let prompt = Line::from(Span::styled(
            format!("  {}", question.prompt()),
            theme::STYLE_IMPORTANT,
        ));
        lines.push(if i == cursor {
            prompt.style(theme::STYLE_CURSOR)
        } else {
            prompt
        });

        let mut options = vec![Span::raw("    ")];
        for party in Party::ALL {
            options.push(radio(answer == Some(party)));
            options.push(Span::raw(format!("{:<10}", party.label())));
        }
        lines.push(Line::from(options));
        lines.push(Line::from(""));
    }

    // Each question takes three rows; keep the focused prompt in view
    let header_rows = 2;
    let offset = scroll_offset(header_rows + cursor * 3 + 1, chunks[0].height as usize);
    frame.render_widget(Paragraph::new(lines).scroll((offset, 0)), chunks[0]);

    let answered = session.answers().len();
    let total = Question::ALL.len();
    let tally = if session.is_answer_set_complete() {
        Span::styled(
            "  All answered: press Enter to get your recommendation",
            theme::STYLE_SAFE,
        )
    } else {
        Span::styled(
            format!("  {} of {} answered", answered, total),
            theme::STYLE_WARNING,
        )
    };
    frame.render_widget(Paragraph::new(tally), chunks[1]);
}

// ============================================================================
// SCREEN: RESULT
// ============================================================================

fn render_result(
    session: &Session,
    contact: &Contact,
    notice: Option<&str>,
    frame: &mut Frame,
    area: Rect,
) {
    let Some(term) = session.result() else {
        let err = Paragraph::new("No recommendation computed").style(theme::STYLE_WARNING);
        frame.render_widget(err, area);
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Min(0),    // recommendation
        Constraint::Length(5), // contact box
    ])
    .split(area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {}", term.label()), theme::STYLE_RESULT)),
        Line::from(""),
        Line::from(format!("  {}", recommendation_sentence(term))),
        Line::from(Span::styled(format!("  {}", ICC_ATTRIBUTION), theme::STYLE_DIM)),
    ];
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }),
        chunks[0],
    );

    let mut contact_lines = vec![
        Line::from(Span::styled(contact_sentence(contact), theme::STYLE_SAFE)),
        Line::from(vec![
            Span::styled("Dial: ", theme::STYLE_DIM),
            Span::styled(contact.tel_uri(), theme::STYLE_INTERACTIVE),
        ]),
    ];
    if let Some(notice) = notice {
        contact_lines.push(Line::from(Span::styled(notice.to_string(), theme::STYLE_WARNING)));
    }
    let block = Block::bordered().title(Span::styled(
        format!(" {} ", contact.headline),
        theme::STYLE_IMPORTANT,
    ));
    frame.render_widget(
        Paragraph::new(contact_lines)
            .block(block)
            .wrap(Wrap { trim: false }),
        chunks[1],
    );
}

// ============================================================================
// TESTS
// ============================================================================
