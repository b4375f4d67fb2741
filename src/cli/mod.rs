//! Command-line interface module.

mod args;
pub mod run;

pub use args::Cli;
pub use run::{Job, run};
