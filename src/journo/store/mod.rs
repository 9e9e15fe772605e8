//! # Storage Layer
//!
//! Generated templates are written through the [`TemplateStore`] trait so the
//! generate command can be exercised without touching the filesystem.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: writes into a directory on disk (the current working
//!   directory for the CLI)
//! - [`memory::InMemoryStore`]: keeps files in a map, for tests
//!
//! ## Write-Once Contract
//!
//! `write_file` never replaces an existing file. When a file of the same name is
//! already present it returns `Ok(false)` and leaves the store untouched.
//!
//! The existence check and the create are two separate steps, not an atomic
//! create. Two concurrent invocations targeting the same name can both pass the
//! check; the tool is run interactively by one user, so this is accepted.

use crate::error::Result;

pub mod fs;
pub mod memory;

pub trait TemplateStore {
    /// Create `filename` with `content`. Returns `false` if it already exists.
    fn write_file(&mut self, filename: &str, content: &str) -> Result<bool>;

    /// Names of the entries currently in the store.
    fn list_files(&self) -> Result<Vec<String>>;

    /// Human-readable location of the store, for messages and logs.
    fn location(&self) -> String;
}
