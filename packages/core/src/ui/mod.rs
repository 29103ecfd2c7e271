//! Command line caller of the stores.

pub mod cli;
mod report;
mod runner;

pub use cli::Cli;
pub use report::ResultWriter;
pub use runner::{Outcome, RunError, Status, execute, run};
