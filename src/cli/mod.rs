use std::path::{Path, PathBuf};

use clap::Parser;

use crate::fetch::FetchArgs;

#[derive(Debug, Parser)]
#[command(name = "urdle", about = "daily word-guessing game backend", version)]
pub struct Cli {
    /// Path to the config file (overrides URDLE_TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn config_path(&self) -> Option<&Path> {
        self.config.as_deref()
    }

    /// No subcommand means start the service.
    pub fn command(&self) -> &Command {
        static START: Command = Command::Start;

        self.command.as_ref().unwrap_or(&START)
    }
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Run the HTTP service
    Start,

    /// Print the resolved configuration and exit
    Config,

    /// Build a vocabulary file from the Wiktionary category API
    FetchWords(FetchArgs),
}
