//! Text formatting for recommendations, the term catalog and the
//! decision table.
//!
//! Pure functions: data in, String out. No I/O.

use serde::Serialize;

use crate::config::Contact;
use crate::error::WizardResult;
use crate::resolver::{available_terms, rules_for};
use crate::types::{Answers, Incoterm, OutputFormat, Recommendation, TransportCategory};

/// Attribution shown under every recommendation.
pub const ICC_ATTRIBUTION: &str =
    "This recommendation is based on the Incoterms® 2020 rules published by the International Chamber of Commerce.";

/// "Based on your selections, we recommend using <label> for your shipment."
pub fn recommendation_sentence(term: Incoterm) -> String {
    format!(
        "Based on your selections, we recommend using {} for your shipment.",
        term.label()
    )
}

/// "Call us at <number> to speak with a logistics expert ..."
pub fn contact_sentence(contact: &Contact) -> String {
    format!(
        "Call us at {} to speak with a logistics expert about your shipping needs.",
        contact.display
    )
}

/// Format a recommendation for output.
pub fn format_recommendation(
    rec: &Recommendation,
    contact: &Contact,
    format: OutputFormat,
) -> WizardResult<String> {
    match format {
        OutputFormat::Human => Ok(format_human(rec, contact)),
        OutputFormat::Json => format_json(rec, contact),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_human(rec: &Recommendation, contact: &Contact) -> String {
    let mut out = String::new();

    out.push_str("=== Your Recommended Incoterms® 2020 Rule ===\n");
    out.push_str(&format!("{}\n\n", rec.term.label()));
    out.push_str(&format!("{}\n", recommendation_sentence(rec.term)));
    out.push_str(&format!("{}\n\n", ICC_ATTRIBUTION));

    out.push_str("=== Your Selections ===\n");
    out.push_str(&format!("{:<11}{}\n", "mode:", rec.transport.name()));
    out.push_str(&format_answers(&rec.answers));
    out.push('\n');

    out.push_str(&format!("=== {} ===\n", contact.headline));
    out.push_str(&format!("{}\n", contact_sentence(contact)));

    out
}

fn format_answers(answers: &Answers) -> String {
    let mut out = String::new();
    for (question, party) in answers.iter() {
        out.push_str(&format!(
            "{:<11}{}\n",
            format!("{}:", question.id()),
            party.label()
        ));
    }
    for question in answers.missing() {
        out.push_str(&format!("{:<11}(not answered)\n", format!("{}:", question.id())));
    }
    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

#[derive(Serialize)]
struct RecommendationJson<'a> {
    transport: TransportCategory,
    answers: &'a Answers,
    term: Incoterm,
    contact: &'a Contact,
}

fn format_json(rec: &Recommendation, contact: &Contact) -> WizardResult<String> {
    let doc = RecommendationJson {
        transport: rec.transport,
        answers: &rec.answers,
        term: rec.term,
        contact,
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

// ============================================================================
// CATALOG & TABLE
// ============================================================================

/// List the Incoterms® 2020 rules available for each category.
pub fn format_terms(categories: &[TransportCategory]) -> String {
    let mut out = String::new();
    for &category in categories {
        out.push_str(&format!("=== {} ({}) ===\n", category.name(), category.id()));
        for term in available_terms(category) {
            out.push_str(&format!("  {:<4}{}\n", term.code(), term.name()));
        }
        out.push('\n');
    }
    out
}

/// Print the ordered decision table for each category.
pub fn format_table(categories: &[TransportCategory]) -> String {
    let mut out = String::new();
    for &category in categories {
        let table = rules_for(category);
        out.push_str(&format!("=== {} ({}) ===\n", category.name(), category.id()));
        for (i, rule) in table.rules.iter().enumerate() {
            out.push_str(&format!("  {}. if {} → {}\n", i + 1, rule.describe(), rule.term));
        }
        out.push_str(&format!(
            "  {}. otherwise → {}\n\n",
            table.rules.len() + 1,
            table.fallback
        ));
    }
    out
}

// ============================================================================
// TESTS
// ============================================================================
