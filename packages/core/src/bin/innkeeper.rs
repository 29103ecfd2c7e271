//! Hotel reservation record store command line.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin innkeeper -- hotel create H001 "Grand Plaza" Monterrey 10
//! cargo run --bin innkeeper -- customer create C001 Ana ana@example.com
//! cargo run --bin innkeeper -- reservation create H001 C001 --id R001
//! ```

use clap::Parser;
use innkeeper::ui::{Cli, Status};
use innkeeper_shared::logger::setup_logger;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &cli.log_level);

    match innkeeper::run(cli) {
        Ok(outcome) if outcome.status == Status::StorageFailure => std::process::exit(1),
        Ok(_) => {}
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    }
}
