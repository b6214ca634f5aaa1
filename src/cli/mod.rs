//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use output::OutputFormat;

/// zettel - a zettelkasten kept in step with its static site while you edit
#[derive(Parser, Debug)]
#[command(name = "zettel", version, about, long_about = None)]
pub struct Cli {
    /// Archive directory (overrides config file)
    #[arg(short = 'd', long, global = true)]
    pub dir: Option<PathBuf>,

    /// Increase log verbosity on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new note and open it in your editor
    New,

    /// Edit a note by id or alias
    Edit(EditArgs),

    /// List notes, most recently modified first
    #[command(name = "ls", alias = "list")]
    List(ListArgs),

    /// Open the rendered site in the viewer
    View,

    /// Regenerate every page and the index
    Render,
}

/// Arguments for the `edit` command
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Note id or alias
    pub key: String,
}

/// Arguments for the `ls` (list) command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}
