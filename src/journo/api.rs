//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for UI
//! clients. It owns the store and the loaded configuration, and hands the
//! configured year range to the commands.
//!
//! The API does no printing and never exits the process; it returns
//! `Result<CmdResult>` and leaves presentation to the caller.
//!
//! `JournoApi<S: TemplateStore>` is generic over the store:
//! - Production: `JournoApi<FileStore>`
//! - Testing: `JournoApi<InMemoryStore>`

use crate::commands;
use crate::config::JournoConfig;
use crate::error::Result;
use crate::store::TemplateStore;

pub struct JournoApi<S: TemplateStore> {
    store: S,
    config: JournoConfig,
}

impl<S: TemplateStore> JournoApi<S> {
    pub fn new(store: S, config: JournoConfig) -> Self {
        Self { store, config }
    }

    /// Build the template for `year`/`month` and write it to the store.
    pub fn generate(&mut self, year: &str, month: &str) -> Result<commands::CmdResult> {
        commands::generate::run(&mut self.store, self.config.year_range(), year, month)
    }

    /// Build the template without writing it.
    pub fn preview(&self, year: &str, month: &str) -> Result<commands::CmdResult> {
        commands::generate::preview(self.config.year_range(), year, month)
    }

    pub fn config(&self) -> &JournoConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
