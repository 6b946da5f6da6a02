//! Property-based tests for the resolver and session.
//!
//! Covers the whole input domain: 4 categories × 3 states (seller, buyer,
//! unanswered) for each of the 5 questions.

use proptest::prelude::*;

use incoterm_wizard::resolver::{available_terms, explain, resolve, rules_for};
use incoterm_wizard::session::{Session, Step};
use incoterm_wizard::types::{Answers, Incoterm, Party, Question, TransportCategory};

fn category_strategy() -> impl Strategy<Value = TransportCategory> {
    prop_oneof![
        Just(TransportCategory::Sea),
        Just(TransportCategory::Road),
        Just(TransportCategory::Rail),
        Just(TransportCategory::Air),
    ]
}

fn party_strategy() -> impl Strategy<Value = Party> {
    prop_oneof![Just(Party::Seller), Just(Party::Buyer)]
}

/// Answers with every question possibly unanswered.
fn partial_answers_strategy() -> impl Strategy<Value = Answers> {
    prop::collection::vec(prop::option::of(party_strategy()), 5).prop_map(|parties| -> Answers {
        Question::ALL
            .into_iter()
            .zip(parties)
            .filter_map(|(q, p)| p.map(|p| (q, p)))
            .collect()
    })
}

/// Answers with all five questions answered.
fn complete_answers_strategy() -> impl Strategy<Value = Answers> {
    prop::collection::vec(party_strategy(), 5)
        .prop_map(|parties| -> Answers { Question::ALL.into_iter().zip(parties).collect() })
}

proptest! {
    /// Every input resolves to one of the catalog terms, never FCA.
    #[test]
    fn resolve_is_total(category in category_strategy(), answers in partial_answers_strategy()) {
        let term = resolve(category, &answers);
        prop_assert!(available_terms(category).contains(&term));
        prop_assert_ne!(term, Incoterm::Fca);
    }

    /// Same inputs, same output.
    #[test]
    fn resolve_is_deterministic(
        category in category_strategy(),
        answers in partial_answers_strategy(),
    ) {
        prop_assert_eq!(resolve(category, &answers), resolve(category, &answers.clone()));
    }

    /// The reported rule is the first one that matches.
    #[test]
    fn first_match_wins(category in category_strategy(), answers in partial_answers_strategy()) {
        let table = rules_for(category);
        let resolution = explain(category, &answers);
        for earlier in &table.rules[..resolution.rule - 1] {
            prop_assert!(!earlier.matches(&answers));
        }
    }

    /// Sea never looks at customs.
    #[test]
    fn sea_ignores_customs(answers in partial_answers_strategy(), party in party_strategy()) {
        let mut flipped = answers.clone();
        flipped.set(Question::Customs, party);
        prop_assert_eq!(
            resolve(TransportCategory::Sea, &answers),
            resolve(TransportCategory::Sea, &flipped)
        );
    }

    /// Road, rail and air always agree.
    #[test]
    fn overland_modes_agree(answers in partial_answers_strategy()) {
        let road = resolve(TransportCategory::Road, &answers);
        prop_assert_eq!(road, resolve(TransportCategory::Rail, &answers));
        prop_assert_eq!(road, resolve(TransportCategory::Air, &answers));
    }

    /// Sea with loading=buyer is always FAS.
    #[test]
    fn sea_buyer_loading_is_fas(answers in complete_answers_strategy()) {
        let mut answers = answers;
        answers.set(Question::Loading, Party::Buyer);
        prop_assert_eq!(resolve(TransportCategory::Sea, &answers), Incoterm::Fas);
    }

    /// Overland with loading=buyer and transport=buyer is always EXW.
    #[test]
    fn overland_buyer_loading_and_transport_is_exw(answers in complete_answers_strategy()) {
        let mut answers = answers;
        answers.set(Question::Loading, Party::Buyer);
        answers.set(Question::Transport, Party::Buyer);
        prop_assert_eq!(resolve(TransportCategory::Road, &answers), Incoterm::Exw);
    }

    /// A session walked to the end stores exactly what the resolver says.
    #[test]
    fn session_result_matches_resolver(
        category in category_strategy(),
        answers in complete_answers_strategy(),
    ) {
        let mut session = Session::new();
        session.select_transport(category);
        prop_assert!(session.advance());
        for (q, p) in answers.iter() {
            session.set_answer(q, p);
        }
        prop_assert!(session.advance());
        prop_assert_eq!(session.step(), Step::Result);
        prop_assert_eq!(session.result(), Some(resolve(category, &answers)));
    }

    /// Incomplete answers never get past the responsibilities step.
    #[test]
    fn incomplete_session_cannot_advance(
        category in category_strategy(),
        answers in partial_answers_strategy(),
    ) {
        prop_assume!(!answers.is_complete());
        let mut session = Session::new();
        session.select_transport(category);
        session.advance();
        for (q, p) in answers.iter() {
            session.set_answer(q, p);
        }
        prop_assert!(!session.advance());
        prop_assert_eq!(session.step(), Step::Responsibilities);
        prop_assert!(session.result().is_none());
    }

    /// Reset always returns to the initial state.
    #[test]
    fn reset_clears_everything(
        category in category_strategy(),
        answers in partial_answers_strategy(),
    ) {
        let mut session = Session::new();
        session.select_transport(category);
        session.advance();
        for (q, p) in answers.iter() {
            session.set_answer(q, p);
        }
        session.advance();
        session.reset();
        prop_assert!(session.transport().is_none());
        prop_assert!(session.answers().is_empty());
        prop_assert!(!session.is_answer_set_complete());
        prop_assert_eq!(session, Session::new());
    }
}

/// Exhaustive check over every complete combination: 4 × 2^5.
#[test]
fn every_complete_combination_resolves() {
    let mut seen = 0;
    for category in TransportCategory::ALL {
        for bits in 0u8..32 {
            let answers: Answers = Question::ALL
                .into_iter()
                .enumerate()
                .map(|(i, q)| {
                    let party = if bits & (1 << i) != 0 { Party::Seller } else { Party::Buyer };
                    (q, party)
                })
                .collect();
            let term = resolve(category, &answers);
            assert!(available_terms(category).contains(&term));
            seen += 1;
        }
    }
    assert_eq!(seen, 128);
}
