//! zettel - a zettelkasten whose index and static site follow your edits live

pub mod cli;
pub mod domain;
pub mod export;
pub mod index;
pub mod infra;
pub mod session;

use anyhow::Result;
use clap::Parser;
use tracing::Level;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{handle_edit, handle_list, handle_new, handle_render, handle_view},
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let config = Config::load()?;
    let archive_dir = config.archive_dir(cli.dir.as_ref());
    tracing::debug!(dir = %archive_dir.display(), "using archive");

    match &cli.command {
        Command::New => handle_new(&archive_dir, &config),
        Command::Edit(args) => handle_edit(args, &archive_dir, &config),
        Command::List(args) => handle_list(args, &archive_dir),
        Command::View => handle_view(&archive_dir, &config),
        Command::Render => handle_render(&archive_dir),
    }
}

/// Logs go to stderr; the editor owns the terminal during a session, so only
/// warnings show up unless asked for.
fn init_tracing(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };

    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
