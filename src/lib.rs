//! incoterm-wizard: recommend an Incoterms® 2020 rule from a short questionnaire.

pub mod config;
pub mod error;
pub mod prompt;
pub mod report;
pub mod resolver;
pub mod session;
pub mod tui;
pub mod types;
