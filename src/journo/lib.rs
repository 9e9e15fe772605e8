//! # Journo Architecture
//!
//! Journo seeds a monthly Markdown journal file: a `# <Month>, <Year>` title
//! followed by one `### <Weekday> <Nth>` heading per day, most recent day first.
//! It is a small library with a thin CLI client on top.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints messages, sets up logging       │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns store + config           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - validate → headers → content → generate                  │
//! │  - Pure functions except the final store write              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - TemplateStore trait, write-once semantics                │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Pipeline
//!
//! 1. [`commands::validate`]: year inside the accepted range, month one of the
//!    twelve zero-padded codes. Both return plain booleans.
//! 2. [`commands::headers`]: walk the month day by day with chrono and format
//!    each day as a heading.
//! 3. [`commands::content`]: join the headings, each followed by a blank line,
//!    and derive the `<year>-<month> (<Abbrev>).md` filename.
//! 4. [`store`]: write the file unless one with that name already exists.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: The pipeline stages and the generate command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Lookup tables and the accepted year range
//! - [`config`]: Optional per-directory configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
