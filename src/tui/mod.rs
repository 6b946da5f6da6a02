//! Full-screen terminal wizard.
//!
//! - `state`: screens, actions, transitions
//! - `update`: applies actions to the session (no terminal needed)
//! - `view`: pure rendering
//! - `run`: effects (event loop, terminal lifecycle)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;

pub use run::run;
