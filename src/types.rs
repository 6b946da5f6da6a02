//! Domain types for incoterm-wizard.
//!
//! Every input to the resolver is drawn from a closed enumeration, so
//! invalid selections are unrepresentable. Text ids (`sea`, `seller`, ...)
//! exist only for the CLI and JSON boundaries.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WizardError;

// ============================================================================
// TRANSPORT
// ============================================================================

/// The broad mode of shipment. Decides the sea vs. non-sea branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportCategory {
    Sea,
    Road,
    Rail,
    Air,
}

impl TransportCategory {
    /// All categories in presentation order.
    pub const ALL: [TransportCategory; 4] = [
        TransportCategory::Sea,
        TransportCategory::Road,
        TransportCategory::Rail,
        TransportCategory::Air,
    ];

    /// Lowercase identifier used on the command line and in JSON.
    pub fn id(self) -> &'static str {
        match self {
            TransportCategory::Sea => "sea",
            TransportCategory::Road => "road",
            TransportCategory::Rail => "rail",
            TransportCategory::Air => "air",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TransportCategory::Sea => "Sea Freight",
            TransportCategory::Road => "Road Freight",
            TransportCategory::Rail => "Rail Freight",
            TransportCategory::Air => "Air Freight",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            TransportCategory::Sea => "Ocean container or bulk shipping",
            TransportCategory::Road => "Truck or road transportation",
            TransportCategory::Rail => "Railway transportation",
            TransportCategory::Air => "Air cargo transportation",
        }
    }

    /// True for the sea branch of the decision table.
    pub fn is_sea(self) -> bool {
        self == TransportCategory::Sea
    }
}

impl fmt::Display for TransportCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for TransportCategory {
    type Err = WizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TransportCategory::ALL
            .into_iter()
            .find(|c| c.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| WizardError::parse("transport category", s))
    }
}

// ============================================================================
// QUESTIONS & ANSWERS
// ============================================================================

/// One shipment-handling duty the user assigns to seller or buyer.
///
/// Declaration order is presentation order; `Ord` follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Question {
    Loading,
    Transport,
    Customs,
    Insurance,
    Unloading,
}

impl Question {
    /// All questions in presentation order.
    pub const ALL: [Question; 5] = [
        Question::Loading,
        Question::Transport,
        Question::Customs,
        Question::Insurance,
        Question::Unloading,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Question::Loading => "loading",
            Question::Transport => "transport",
            Question::Customs => "customs",
            Question::Insurance => "insurance",
            Question::Unloading => "unloading",
        }
    }

    /// The fixed prompt shown to the user.
    pub fn prompt(self) -> &'static str {
        match self {
            Question::Loading => "Who is responsible for loading the goods?",
            Question::Transport => "Who arranges and pays for main transport?",
            Question::Customs => "Who handles export/import customs clearance?",
            Question::Insurance => "Who provides cargo insurance?",
            Question::Unloading => "Who is responsible for unloading at destination?",
        }
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Question {
    type Err = WizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Question::ALL
            .into_iter()
            .find(|q| q.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| WizardError::parse("question", s))
    }
}

/// The answer to a responsibility question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Party {
    Seller,
    Buyer,
}

impl Party {
    /// Both parties in presentation order.
    pub const ALL: [Party; 2] = [Party::Seller, Party::Buyer];

    pub fn id(self) -> &'static str {
        match self {
            Party::Seller => "seller",
            Party::Buyer => "buyer",
        }
    }

    /// Capitalized label for display ("Seller", "Buyer").
    pub fn label(self) -> &'static str {
        match self {
            Party::Seller => "Seller",
            Party::Buyer => "Buyer",
        }
    }

    /// The other party.
    pub fn other(self) -> Party {
        match self {
            Party::Seller => Party::Buyer,
            Party::Buyer => Party::Seller,
        }
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Party {
    type Err = WizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "seller" | "s" => Ok(Party::Seller),
            "buyer" | "b" => Ok(Party::Buyer),
            _ => Err(WizardError::parse("party", s)),
        }
    }
}

/// Responsibility answers collected so far, keyed by question.
///
/// Upsert semantics: setting an answer twice keeps the latest.
/// Serializes as a plain `{ "loading": "seller", ... }` object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answers(BTreeMap<Question, Party>);

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, replacing any earlier one for the same question.
    pub fn set(&mut self, question: Question, party: Party) {
        self.0.insert(question, party);
    }

    pub fn get(&self, question: Question) -> Option<Party> {
        self.0.get(&question).copied()
    }

    /// True iff `question` was answered with exactly `party`.
    ///
    /// An unanswered question matches neither party.
    pub fn is(&self, question: Question, party: Party) -> bool {
        self.get(question) == Some(party)
    }

    /// True iff every question has an answer, whatever its value.
    pub fn is_complete(&self) -> bool {
        Question::ALL.iter().all(|q| self.0.contains_key(q))
    }

    /// Unanswered questions in presentation order.
    pub fn missing(&self) -> Vec<Question> {
        Question::ALL
            .into_iter()
            .filter(|q| !self.0.contains_key(q))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Answered questions in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = (Question, Party)> + '_ {
        self.0.iter().map(|(q, p)| (*q, *p))
    }
}

impl FromIterator<(Question, Party)> for Answers {
    fn from_iter<I: IntoIterator<Item = (Question, Party)>>(iter: I) -> Self {
        Answers(iter.into_iter().collect())
    }
}

// ============================================================================
// INCOTERMS
// ============================================================================

/// The eleven Incoterms® 2020 rules.
///
/// `Fca` appears in the catalog but is never produced by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Incoterm {
    Exw,
    Fca,
    Fas,
    Fob,
    Cfr,
    Cif,
    Cpt,
    Cip,
    Dap,
    Dpu,
    Ddp,
}

impl Incoterm {
    pub const ALL: [Incoterm; 11] = [
        Incoterm::Exw,
        Incoterm::Fca,
        Incoterm::Fas,
        Incoterm::Fob,
        Incoterm::Cfr,
        Incoterm::Cif,
        Incoterm::Cpt,
        Incoterm::Cip,
        Incoterm::Dap,
        Incoterm::Dpu,
        Incoterm::Ddp,
    ];

    /// Three-letter code, e.g. "CIF".
    pub fn code(self) -> &'static str {
        match self {
            Incoterm::Exw => "EXW",
            Incoterm::Fca => "FCA",
            Incoterm::Fas => "FAS",
            Incoterm::Fob => "FOB",
            Incoterm::Cfr => "CFR",
            Incoterm::Cif => "CIF",
            Incoterm::Cpt => "CPT",
            Incoterm::Cip => "CIP",
            Incoterm::Dap => "DAP",
            Incoterm::Dpu => "DPU",
            Incoterm::Ddp => "DDP",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Incoterm::Exw => "Ex Works",
            Incoterm::Fca => "Free Carrier",
            Incoterm::Fas => "Free Alongside Ship",
            Incoterm::Fob => "Free On Board",
            Incoterm::Cfr => "Cost and Freight",
            Incoterm::Cif => "Cost, Insurance and Freight",
            Incoterm::Cpt => "Carriage Paid To",
            Incoterm::Cip => "Carriage and Insurance Paid",
            Incoterm::Dap => "Delivered at Place",
            Incoterm::Dpu => "Delivered at Place Unloaded",
            Incoterm::Ddp => "Delivered Duty Paid",
        }
    }

    /// Display label with the trademark marker: "CIF (Cost, Insurance and Freight)®".
    pub fn label(self) -> String {
        format!("{} ({})®", self.code(), self.name())
    }
}

impl fmt::Display for Incoterm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for Incoterm {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut s = serializer.serialize_struct("Incoterm", 3)?;
        s.serialize_field("code", self.code())?;
        s.serialize_field("name", self.name())?;
        s.serialize_field("label", &self.label())?;
        s.end()
    }
}

// ============================================================================
// RESULTS & CONFIGURATION
// ============================================================================

/// A completed questionnaire: the inputs and the term they resolved to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    /// Chosen transport category.
    pub transport: TransportCategory,
    /// Answers as given by the user.
    pub answers: Answers,
    /// The recommended rule.
    pub term: Incoterm,
}

/// Output format for recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable pretty output.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

// ============================================================================
// TESTS
// ============================================================================
