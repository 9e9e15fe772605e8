//! # CLI Behavior
//!
//! `journo <YEAR> <MONTH>` writes `<YEAR>-<MONTH> (<Abbrev>).md` into the current
//! directory (or `--dir`). An existing file of that name is left alone and a
//! warning is printed; the exit status stays 0 in that case.
//!
//! `--print` renders the same content to stdout without touching the disk.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup and the generate/print handlers
//! - `logging`: tracing subscriber setup (stderr)
//! - `render`: Message and content output
//! - `setup`: Argument parsing via clap

mod commands;
mod logging;
mod render;
pub mod setup;

pub use commands::run;
