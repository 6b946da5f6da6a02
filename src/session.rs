//! Selection state for one run through the questionnaire.
//!
//! A `Session` owns everything the user has chosen so far. Front-ends
//! (TUI, prompt, one-shot CLI) drive it through the setters and gate
//! progression on `can_advance()`. The holder trusts its caller: inputs
//! come from closed enumerations, so there is nothing to validate.

use crate::resolver::resolve;
use crate::types::{Answers, Incoterm, Party, Question, Recommendation, TransportCategory};

/// The three steps of the wizard, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    /// Choose the transport category.
    #[default]
    Transport,
    /// Assign each responsibility to seller or buyer.
    Responsibilities,
    /// Show the recommended rule.
    Result,
}

impl Step {
    /// 1-based position, for "Step 2 of 3" style headers.
    pub fn number(self) -> usize {
        match self {
            Step::Transport => 1,
            Step::Responsibilities => 2,
            Step::Result => 3,
        }
    }
}

/// In-memory wizard state. Created empty, discarded by `reset()`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    step: Step,
    transport: Option<TransportCategory>,
    answers: Answers,
    result: Option<Incoterm>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn transport(&self) -> Option<TransportCategory> {
        self.transport
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn answer(&self, question: Question) -> Option<Party> {
        self.answers.get(question)
    }

    /// The computed term, set when leaving the Responsibilities step.
    pub fn result(&self) -> Option<Incoterm> {
        self.result
    }

    /// Set the chosen transport category, replacing any earlier choice.
    pub fn select_transport(&mut self, category: TransportCategory) {
        log::debug!("transport selected: {}", category);
        self.transport = Some(category);
    }

    /// Record an answer, replacing any earlier answer for the question.
    pub fn set_answer(&mut self, question: Question, party: Party) {
        log::debug!("answer set: {}={}", question, party);
        self.answers.set(question, party);
    }

    /// True iff all five questions have an answer.
    pub fn is_answer_set_complete(&self) -> bool {
        self.answers.is_complete()
    }

    /// Whether the "next" action is enabled on the current step.
    pub fn can_advance(&self) -> bool {
        match self.step {
            Step::Transport => self.transport.is_some(),
            Step::Responsibilities => self.transport.is_some() && self.is_answer_set_complete(),
            Step::Result => false,
        }
    }

    /// Move to the next step if allowed. Returns whether the step changed.
    ///
    /// Leaving the Responsibilities step runs the resolver once and stores
    /// its result. A refused advance leaves the session untouched.
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            log::debug!("advance refused on {:?}", self.step);
            return false;
        }

        self.step = match self.step {
            Step::Transport => Step::Responsibilities,
            Step::Responsibilities => {
                if let Some(category) = self.transport {
                    self.result = Some(resolve(category, &self.answers));
                }
                Step::Result
            }
            Step::Result => Step::Result,
        };
        log::debug!("advanced to {:?}", self.step);
        true
    }

    /// Step back without discarding selections. Returns whether the step changed.
    ///
    /// Going back from the result clears it; it is recomputed on the next advance.
    pub fn back(&mut self) -> bool {
        let previous = match self.step {
            Step::Transport => return false,
            Step::Responsibilities => Step::Transport,
            Step::Result => Step::Responsibilities,
        };
        self.result = None;
        self.step = previous;
        true
    }

    /// Clear every selection and the result, returning to the first step.
    pub fn reset(&mut self) {
        log::debug!("session reset");
        *self = Session::default();
    }

    /// The completed questionnaire, available only on the Result step.
    pub fn recommendation(&self) -> Option<Recommendation> {
        if self.step != Step::Result {
            return None;
        }
        Some(Recommendation {
            transport: self.transport?,
            answers: self.answers.clone(),
            term: self.result?,
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn answer_all(session: &mut Session, party: Party) {
        for q in Question::ALL {
            session.set_answer(q, party);
        }
    }

    #[test]
    fn new_session_is_empty() {
        let session = Session::new();
        assert_eq!(session.step(), Step::Transport);
        assert!(session.transport().is_none());
        assert!(session.answers().is_empty());
        assert!(session.result().is_none());
        assert!(!session.is_answer_set_complete());
    }

    #[test]
    fn transport_step_gated_on_category() {
        let mut session = Session::new();
        assert!(!session.can_advance());
        assert!(!session.advance());
        assert_eq!(session.step(), Step::Transport);

        session.select_transport(TransportCategory::Rail);
        assert!(session.advance());
        assert_eq!(session.step(), Step::Responsibilities);
    }

    #[test]
    fn reselecting_transport_replaces_choice() {
        let mut session = Session::new();
        session.select_transport(TransportCategory::Sea);
        session.select_transport(TransportCategory::Air);
        assert_eq!(session.transport(), Some(TransportCategory::Air));
    }

    #[test]
    fn responsibilities_step_gated_on_completeness() {
        let mut session = Session::new();
        session.select_transport(TransportCategory::Sea);
        session.advance();

        for q in &Question::ALL[..4] {
            session.set_answer(*q, Party::Seller);
            assert!(!session.advance());
            assert_eq!(session.step(), Step::Responsibilities);
            assert!(session.result().is_none());
        }

        session.set_answer(Question::Unloading, Party::Buyer);
        assert!(session.is_answer_set_complete());
        assert!(session.advance());
        assert_eq!(session.step(), Step::Result);
    }

    #[test]
    fn completeness_ignores_values() {
        let mut session = Session::new();
        answer_all(&mut session, Party::Buyer);
        assert!(session.is_answer_set_complete());
        session.set_answer(Question::Customs, Party::Seller);
        assert!(session.is_answer_set_complete());
    }

    #[test]
    fn advance_stores_resolved_term() {
        let mut session = Session::new();
        session.select_transport(TransportCategory::Sea);
        session.advance();
        answer_all(&mut session, Party::Seller);
        session.advance();

        assert_eq!(session.result(), Some(Incoterm::Cif));
        assert_eq!(
            session.result(),
            Some(resolve(TransportCategory::Sea, session.answers()))
        );
    }

    #[test]
    fn result_step_does_not_advance() {
        let mut session = Session::new();
        session.select_transport(TransportCategory::Road);
        session.advance();
        answer_all(&mut session, Party::Buyer);
        session.advance();
        assert!(!session.can_advance());
        assert!(!session.advance());
        assert_eq!(session.result(), Some(Incoterm::Exw));
    }

    #[test]
    fn back_keeps_selections_and_clears_result() {
        let mut session = Session::new();
        session.select_transport(TransportCategory::Air);
        session.advance();
        answer_all(&mut session, Party::Seller);
        session.advance();

        assert!(session.back());
        assert_eq!(session.step(), Step::Responsibilities);
        assert!(session.result().is_none());
        assert!(session.is_answer_set_complete());

        assert!(session.back());
        assert_eq!(session.step(), Step::Transport);
        assert_eq!(session.transport(), Some(TransportCategory::Air));
        assert!(!session.back());
    }

    #[test]
    fn reset_returns_to_initial_state() {
        let mut session = Session::new();
        session.select_transport(TransportCategory::Air);
        session.advance();
        answer_all(&mut session, Party::Seller);
        session.advance();

        session.reset();

        assert_eq!(session, Session::new());
        assert!(session.transport().is_none());
        assert!(session.answers().is_empty());
        assert!(!session.is_answer_set_complete());
        assert!(session.result().is_none());
    }

    #[test]
    fn recommendation_only_on_result_step() {
        let mut session = Session::new();
        session.select_transport(TransportCategory::Rail);
        assert!(session.recommendation().is_none());
        session.advance();
        answer_all(&mut session, Party::Buyer);
        assert!(session.recommendation().is_none());
        session.advance();

        let rec = session.recommendation().expect("result step");
        assert_eq!(rec.transport, TransportCategory::Rail);
        assert_eq!(rec.term, Incoterm::Exw);
        assert_eq!(rec.answers.len(), 5);
    }

    #[test]
    fn step_numbers_are_sequential() {
        assert_eq!(Step::Transport.number(), 1);
        assert_eq!(Step::Responsibilities.number(), 2);
        assert_eq!(Step::Result.number(), 3);
    }
}
