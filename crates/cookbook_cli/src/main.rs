//! Interactive catalog CLI entry point.
//!
//! # Responsibility
//! - Bootstrap optional file logging and the catalog database.
//! - Run the line command loop over stdin/stdout.
//!
//! # Invariants
//! - Initialization failure exits non-zero before the command loop starts.
//! - `quit` (or end of input) exits normally.

mod dispatch;

use cookbook_core::db::open_db;
use cookbook_core::{default_log_level, init_logging};
use dispatch::Dispatcher;
use std::io::{stdin, stdout};
use std::process::ExitCode;

const DEFAULT_DB_PATH: &str = "cookbook.db";

fn main() -> ExitCode {
    // File logging is opt-in; the interactive loop stays usable without it.
    if let Ok(log_dir) = std::env::var("COOKBOOK_LOG_DIR") {
        let level = std::env::var("COOKBOOK_LOG_LEVEL")
            .unwrap_or_else(|_| default_log_level().to_string());
        if let Err(err) = init_logging(&level, &log_dir) {
            eprintln!("warning: logging disabled: {err}");
        }
    }

    let db_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DB_PATH.to_string());

    let conn = match open_db(&db_path) {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("error: failed to open catalog database `{db_path}`: {err}");
            return ExitCode::FAILURE;
        }
    };

    let dispatcher = match Dispatcher::try_new(&conn) {
        Ok(dispatcher) => dispatcher,
        Err(err) => {
            eprintln!("error: failed to initialize catalog: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = dispatcher.run(stdin().lock(), stdout().lock()) {
        eprintln!("error: command loop failed: {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
