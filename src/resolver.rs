//! Incoterm resolution: (TransportCategory, Answers) → Incoterm.
//!
//! Pure functions: no I/O, easily testable.
//!
//! The decision table is an ordered list of rules per branch, evaluated
//! top to bottom, first match wins. Order encodes precedence: a set of
//! answers satisfying several rules resolves to the earliest one.

use crate::types::{Answers, Incoterm, Party, Question, TransportCategory};

use Party::{Buyer, Seller};
use Question::{Customs, Insurance, Loading, Transport, Unloading};

/// One row of the decision table.
///
/// `when` is a conjunction: every (question, party) pair must be answered
/// exactly that way. Unanswered questions match no pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub when: &'static [(Question, Party)],
    pub term: Incoterm,
}

impl Rule {
    pub fn matches(&self, answers: &Answers) -> bool {
        self.when.iter().all(|&(q, p)| answers.is(q, p))
    }

    /// Render the condition as "loading=seller AND transport=seller".
    pub fn describe(&self) -> String {
        self.when
            .iter()
            .map(|(q, p)| format!("{}={}", q.id(), p.id()))
            .collect::<Vec<_>>()
            .join(" AND ")
    }
}

/// An ordered rule list plus the term used when nothing matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleTable {
    pub rules: &'static [Rule],
    pub fallback: Incoterm,
}

/// Sea freight branch. `customs` and `unloading` are never consulted.
static SEA: RuleTable = RuleTable {
    rules: &[
        Rule {
            when: &[(Loading, Seller), (Transport, Seller), (Insurance, Seller)],
            term: Incoterm::Cif,
        },
        Rule {
            when: &[(Loading, Seller), (Transport, Seller)],
            term: Incoterm::Cfr,
        },
        Rule {
            when: &[(Loading, Seller)],
            term: Incoterm::Fob,
        },
    ],
    fallback: Incoterm::Fas,
};

/// Road, rail and air branch.
static OVERLAND: RuleTable = RuleTable {
    rules: &[
        Rule {
            when: &[(Loading, Buyer), (Transport, Buyer)],
            term: Incoterm::Exw,
        },
        Rule {
            when: &[(Transport, Seller), (Insurance, Seller)],
            term: Incoterm::Cip,
        },
        Rule {
            when: &[(Transport, Seller)],
            term: Incoterm::Cpt,
        },
        Rule {
            when: &[(Unloading, Seller)],
            term: Incoterm::Dpu,
        },
        Rule {
            when: &[(Customs, Seller)],
            term: Incoterm::Ddp,
        },
    ],
    fallback: Incoterm::Dap,
};

const SEA_TERMS: &[Incoterm] = &[Incoterm::Fas, Incoterm::Fob, Incoterm::Cfr, Incoterm::Cif];

const OVERLAND_TERMS: &[Incoterm] = &[
    Incoterm::Exw,
    Incoterm::Fca,
    Incoterm::Cpt,
    Incoterm::Cip,
    Incoterm::Dap,
    Incoterm::Dpu,
    Incoterm::Ddp,
];

/// Outcome of a resolution together with the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub term: Incoterm,
    /// 1-based position in the table; the fallback is `rules.len() + 1`.
    pub rule: usize,
}

/// The decision table for a category.
pub fn rules_for(category: TransportCategory) -> &'static RuleTable {
    if category.is_sea() { &SEA } else { &OVERLAND }
}

/// The Incoterms® 2020 rules listed for a category.
///
/// Informational only: the resolver does not consult this list.
pub fn available_terms(category: TransportCategory) -> &'static [Incoterm] {
    if category.is_sea() { SEA_TERMS } else { OVERLAND_TERMS }
}

/// Resolve answers to a term, reporting which rule fired.
pub fn explain(category: TransportCategory, answers: &Answers) -> Resolution {
    let table = rules_for(category);

    let resolution = table
        .rules
        .iter()
        .position(|rule| rule.matches(answers))
        .map(|i| Resolution {
            term: table.rules[i].term,
            rule: i + 1,
        })
        .unwrap_or(Resolution {
            term: table.fallback,
            rule: table.rules.len() + 1,
        });

    log::debug!(
        "resolved {} with {} answer(s) to {} (rule {})",
        category,
        answers.len(),
        resolution.term,
        resolution.rule
    );

    resolution
}

/// Resolve answers to the recommended term.
///
/// Total over its input domain: absent answers never satisfy a condition,
/// and every table ends in a fallback.
pub fn resolve(category: TransportCategory, answers: &Answers) -> Incoterm {
    explain(category, answers).term
}

// ============================================================================
// TESTS
// ============================================================================
