//! CLI module for Neurograph.
//!
//! Subcommands:
//! - `view`: Open the visualizer (default)
//! - `check`: Validate the authored dataset
//! - `list`: Print nodes as text or JSON

mod check;
mod list;
mod view;

use clap::{Parser, Subcommand};

pub use list::ListCommand;

/// Neurograph - interactive 3D map of the roots of AI amnesia
#[derive(Parser)]
#[command(name = "neurograph")]
#[command(about = "Neuro-architectural visualizer for the roots of AI amnesia")]
#[command(version)]
pub struct App {
    /// Run in verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Open the 3D visualizer (default)
    View,

    /// Validate the authored dataset and print a summary
    Check,

    /// List nodes, optionally filtered by category
    List(ListCommand),
}

impl App {
    /// Run the CLI application.
    pub fn run(self) -> color_eyre::Result<()> {
        match self.command {
            None | Some(Command::View) => self.run_view(),
            Some(Command::Check) => self.run_check(),
            Some(Command::List(ref cmd)) => cmd.run(),
        }
    }
}
