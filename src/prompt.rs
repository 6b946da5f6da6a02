//! Line-based questionnaire for terminals without full-screen support.
//!
//! Walks a `Session` through its three steps, reading one answer per
//! line. Generic over reader and writer so it runs in tests without a
//! terminal. End of input cancels.

use std::io::{BufRead, Write};

use crate::config::Contact;
use crate::error::WizardResult;
use crate::report::format_recommendation;
use crate::resolver::available_terms;
use crate::session::{Session, Step};
use crate::types::{OutputFormat, Party, Question, Recommendation, TransportCategory};

/// Run the questionnaire until the user declines to start over.
///
/// Returns the last recommendation shown, or `None` if input ended first.
pub fn run_prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    contact: &Contact,
) -> WizardResult<Option<Recommendation>> {
    let mut session = Session::new();
    let mut last = None;

    writeln!(out, "Incoterms® 2020 Calculator")?;
    writeln!(out, "Find the right Incoterms® 2020 rule for your international shipment")?;

    loop {
        match session.step() {
            Step::Transport => {
                let Some(category) = ask_transport(input, out)? else {
                    return Ok(last);
                };
                session.select_transport(category);
                let codes: Vec<_> = available_terms(category).iter().map(|t| t.code()).collect();
                writeln!(
                    out,
                    "Available Incoterms® 2020 rules for {} transport: {}",
                    category.id(),
                    codes.join(", ")
                )?;
                session.advance();
            }
            Step::Responsibilities => {
                writeln!(out)?;
                writeln!(out, "Specify Responsibilities")?;
                for question in Question::ALL {
                    let Some(party) = ask_party(input, out, question)? else {
                        return Ok(last);
                    };
                    session.set_answer(question, party);
                }
                session.advance();
            }
            Step::Result => {
                let Some(rec) = session.recommendation() else {
                    session.reset();
                    continue;
                };
                writeln!(out)?;
                write!(out, "{}", format_recommendation(&rec, contact, OutputFormat::Human)?)?;
                last = Some(rec);

                writeln!(out)?;
                match read_answer(input, out, "Start over? (yes/no) [no]: ")? {
                    Some(reply) if is_yes(&reply) => session.reset(),
                    _ => return Ok(last),
                }
            }
        }
    }
}

fn ask_transport<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> WizardResult<Option<TransportCategory>> {
    writeln!(out)?;
    writeln!(out, "Choose Your Transportation Mode")?;
    for (i, category) in TransportCategory::ALL.iter().enumerate() {
        writeln!(out, "  [{}] {:<13} {}", i + 1, category.name(), category.description())?;
    }

    loop {
        let Some(reply) = read_answer(input, out, "Mode (1-4 or sea/road/rail/air): ")? else {
            return Ok(None);
        };
        if let Some(category) = parse_transport(&reply) {
            return Ok(Some(category));
        }
        writeln!(out, "Please choose one of 1-4, sea, road, rail or air.")?;
    }
}

fn parse_transport(reply: &str) -> Option<TransportCategory> {
    if let Ok(n) = reply.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| TransportCategory::ALL.get(i).copied());
    }
    reply.parse().ok()
}

fn ask_party<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    question: Question,
) -> WizardResult<Option<Party>> {
    let prompt = format!("{} [s]eller/[b]uyer: ", question.prompt());
    loop {
        let Some(reply) = read_answer(input, out, &prompt)? else {
            return Ok(None);
        };
        match reply.parse::<Party>() {
            Ok(party) => return Ok(Some(party)),
            Err(_) => writeln!(out, "Please answer seller or buyer.")?,
        }
    }
}

/// Print a prompt and read one trimmed line. `None` on end of input.
fn read_answer<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> WizardResult<Option<String>> {
    write!(out, "{}", prompt)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn is_yes(reply: &str) -> bool {
    reply.eq_ignore_ascii_case("y") || reply.eq_ignore_ascii_case("yes")
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Incoterm;
    use std::io::Cursor;

    fn run(script: &str) -> (Option<Recommendation>, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        let rec = run_prompt(&mut input, &mut out, &Contact::default()).unwrap();
        (rec, String::from_utf8(out).unwrap())
    }

    #[test]
    fn sea_all_seller_recommends_cif() {
        let (rec, out) = run("1\ns\ns\ns\ns\ns\nno\n");
        assert_eq!(rec.unwrap().term, Incoterm::Cif);
        assert!(
            out.contains("Available Incoterms® 2020 rules for sea transport: FAS, FOB, CFR, CIF")
        );
        assert!(out.contains("CIF (Cost, Insurance and Freight)®"));
        assert!(out.contains("833-782-7628 Ext. 1"));
    }

    #[test]
    fn accepts_category_ids_and_full_words() {
        let (rec, _) = run("rail\nseller\nbuyer\nbuyer\nbuyer\nbuyer\n\n");
        let rec = rec.unwrap();
        assert_eq!(rec.transport, TransportCategory::Rail);
        assert_eq!(rec.term, Incoterm::Dap);
    }

    #[test]
    fn reasks_on_invalid_input() {
        let (rec, out) = run("9\nboat\nair\nmaybe\nb\nb\nb\nb\nb\n");
        assert!(out.contains("Please choose one of 1-4"));
        assert!(out.contains("Please answer seller or buyer."));
        assert_eq!(rec.unwrap().term, Incoterm::Exw);
    }

    #[test]
    fn start_over_runs_again() {
        let (rec, out) = run("1\nb\nb\nb\nb\nb\nyes\n2\ns\ns\nb\nb\nb\nn\n");
        assert!(out.contains("FAS (Free Alongside Ship)®"));
        let rec = rec.unwrap();
        assert_eq!(rec.transport, TransportCategory::Road);
        assert_eq!(rec.term, Incoterm::Cpt);
    }

    #[test]
    fn end_of_input_cancels() {
        let (rec, _) = run("1\ns\ns\n");
        assert!(rec.is_none());
    }

    #[test]
    fn parse_transport_bounds() {
        assert_eq!(parse_transport("0"), None);
        assert_eq!(parse_transport("4"), Some(TransportCategory::Air));
        assert_eq!(parse_transport("5"), None);
        assert_eq!(parse_transport("Road"), Some(TransportCategory::Road));
    }
}
