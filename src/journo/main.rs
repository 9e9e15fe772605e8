//! # Journo CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file only
//! invokes `cli::run()` and turns errors into a message and an exit status.
//!
//! | outcome              | stream | status |
//! |----------------------|--------|--------|
//! | file created         | stdout | 0      |
//! | file already exists  | stdout | 0      |
//! | invalid year         | stdout | 1      |
//! | invalid month        | stdout | 2      |
//! | anything else        | stderr | 1      |

use colored::Colorize;
use journo::error::JournoError;

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        match e {
            JournoError::InvalidYear(_) | JournoError::InvalidMonth(_) => {
                println!("{}", e.to_string().red())
            }
            _ => eprintln!("Error: {}", e),
        }
        std::process::exit(e.exit_code());
    }
}
