//! Context setup and per-mode handlers. Everything user-facing is printed
//! here; errors bubble up to `main`, which maps them to exit statuses.

use super::logging::init_cli_logger;
use super::render::{print_content, print_messages};
use super::setup::Cli;
use clap::Parser;
use journo::api::JournoApi;
use journo::commands::validate::check_input;
use journo::config::JournoConfig;
use journo::error::Result;
use journo::store::fs::FileStore;
use std::path::PathBuf;
use tracing::debug;

struct AppContext {
    api: JournoApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_cli_logger(cli.verbose);

    // Malformed input is reported ahead of any configuration problem.
    check_input(&cli.year, &cli.month)?;
    let mut ctx = init_context(&cli)?;

    if cli.print {
        handle_print(&ctx, &cli.year, &cli.month)
    } else {
        handle_generate(&mut ctx, &cli.year, &cli.month)
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let dir = match &cli.dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };

    let config = JournoConfig::load(&dir)?.with_overrides(cli.min_year, cli.max_year)?;
    debug!(dir = %dir.display(), min_year = config.min_year, max_year = config.max_year, "context ready");

    Ok(AppContext {
        api: JournoApi::new(FileStore::new(dir), config),
    })
}

fn handle_generate(ctx: &mut AppContext, year: &str, month: &str) -> Result<()> {
    let result = ctx.api.generate(year, month)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_print(ctx: &AppContext, year: &str, month: &str) -> Result<()> {
    let result = ctx.api.preview(year, month)?;
    if let Some(content) = &result.content {
        print_content(content);
    }
    Ok(())
}
