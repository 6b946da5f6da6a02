//! incoterm-wizard CLI
//!
//! Find the right Incoterms® 2020 rule for an international shipment.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use incoterm_wizard::config::Config;
use incoterm_wizard::error::{WizardError, WizardResult};
use incoterm_wizard::prompt::run_prompt;
use incoterm_wizard::report::{format_recommendation, format_table, format_terms};
use incoterm_wizard::resolver::resolve;
use incoterm_wizard::tui;
use incoterm_wizard::types::{
    Answers, OutputFormat, Party, Question, Recommendation, TransportCategory,
};

#[derive(Parser)]
#[command(name = "incoterm-wizard")]
#[command(about = "Find the right Incoterms® 2020 rule for your international shipment")]
#[command(version)]
struct Cli {
    /// Configuration file (default: <config dir>/incoterm-wizard/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Full-screen interactive wizard (default)
    Wizard,

    /// Line-by-line wizard on stdin/stdout
    Prompt,

    /// Resolve a recommendation from flags, without prompting
    Resolve {
        /// Primary mode of transport
        #[arg(long, value_enum)]
        transport: TransportArg,

        /// Who is responsible for loading the goods
        #[arg(long, value_enum)]
        loading: Option<PartyArg>,

        /// Who arranges and pays for main transport
        #[arg(long, value_enum)]
        main_transport: Option<PartyArg>,

        /// Who handles export/import customs clearance
        #[arg(long, value_enum)]
        customs: Option<PartyArg>,

        /// Who provides cargo insurance
        #[arg(long, value_enum)]
        insurance: Option<PartyArg>,

        /// Who is responsible for unloading at destination
        #[arg(long, value_enum)]
        unloading: Option<PartyArg>,

        /// Output format (default: from config, else human)
        #[arg(long, value_enum)]
        format: Option<OutputFormatArg>,

        /// Resolve even if some answers are missing (missing never counts as seller)
        #[arg(long)]
        allow_incomplete: bool,
    },

    /// List the Incoterms® 2020 rules available per transport mode
    Terms {
        /// Only this transport mode
        #[arg(long, value_enum)]
        transport: Option<TransportArg>,
    },

    /// Print the ordered decision table
    Table {
        /// Only this transport mode
        #[arg(long, value_enum)]
        transport: Option<TransportArg>,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum TransportArg {
    Sea,
    Road,
    Rail,
    Air,
}

impl From<TransportArg> for TransportCategory {
    fn from(arg: TransportArg) -> Self {
        match arg {
            TransportArg::Sea => TransportCategory::Sea,
            TransportArg::Road => TransportCategory::Road,
            TransportArg::Rail => TransportCategory::Rail,
            TransportArg::Air => TransportCategory::Air,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum PartyArg {
    Seller,
    Buyer,
}

impl From<PartyArg> for Party {
    fn from(arg: PartyArg) -> Self {
        match arg {
            PartyArg::Seller => Party::Seller,
            PartyArg::Buyer => Party::Buyer,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Initialize the logger: warnings by default, `RUST_LOG` overrides.
fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}

fn main() -> ExitCode {
    init_logger();
    let cli = Cli::parse();

    let result = Config::load(cli.config.as_deref()).and_then(|config| {
        match cli.command.unwrap_or(Commands::Wizard) {
            Commands::Wizard => cmd_wizard(&config),
            Commands::Prompt => cmd_prompt(&config),
            Commands::Resolve {
                transport,
                loading,
                main_transport,
                customs,
                insurance,
                unloading,
                format,
                allow_incomplete,
            } => {
                let answers = collect_answers([
                    (Question::Loading, loading),
                    (Question::Transport, main_transport),
                    (Question::Customs, customs),
                    (Question::Insurance, insurance),
                    (Question::Unloading, unloading),
                ]);
                let format = format.map(OutputFormat::from).unwrap_or(config.format);
                cmd_resolve(&config, transport.into(), answers, format, allow_incomplete)
            }
            Commands::Terms { transport } => {
                print!("{}", format_terms(&categories(transport)));
                Ok(())
            }
            Commands::Table { transport } => {
                print!("{}", format_table(&categories(transport)));
                Ok(())
            }
        }
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// ARGUMENT HELPERS
// ============================================================================

fn collect_answers(flags: [(Question, Option<PartyArg>); 5]) -> Answers {
    flags
        .into_iter()
        .filter_map(|(q, arg)| arg.map(|a| (q, Party::from(a))))
        .collect()
}

/// One category, or all of them.
fn categories(transport: Option<TransportArg>) -> Vec<TransportCategory> {
    match transport {
        Some(t) => vec![t.into()],
        None => TransportCategory::ALL.to_vec(),
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_wizard(config: &Config) -> WizardResult<()> {
    if let Some(rec) = tui::run(config.contact.clone())? {
        println!("Recommended: {}", rec.term.label());
    }
    Ok(())
}

fn cmd_prompt(config: &Config) -> WizardResult<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();
    run_prompt(&mut input, &mut out, &config.contact)?;
    Ok(())
}

fn cmd_resolve(
    config: &Config,
    transport: TransportCategory,
    answers: Answers,
    format: OutputFormat,
    allow_incomplete: bool,
) -> WizardResult<()> {
    if !allow_incomplete && !answers.is_complete() {
        return Err(WizardError::Incomplete {
            missing: answers.missing(),
        });
    }

    let term = resolve(transport, &answers);
    let rec = Recommendation {
        transport,
        answers,
        term,
    };

    print!("{}", format_recommendation(&rec, &config.contact, format)?);
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}
