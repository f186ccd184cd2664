mod completions;
mod index;
mod init;
mod new;

use std::path::Path;

use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use forma_manifest::{MANIFEST_FILE, Manifest};
use index::IndexCommand;
use init::InitCommand;
use new::NewCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for forma_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Load the manifest at `path`, or `./forma.toml` when no path is given.
///
/// A missing `./forma.toml` means defaults; a missing explicit path is an error.
pub(crate) fn load_manifest(path: Option<&Path>) -> forma_manifest::Result<Manifest> {
    match path {
        Some(path) => Manifest::open(path),
        None if Path::new(MANIFEST_FILE).exists() => Manifest::open(MANIFEST_FILE),
        None => {
            tracing::debug!("no {} found, using defaults", MANIFEST_FILE);
            Ok(Manifest::default())
        }
    }
}

#[derive(Parser)]
#[command(name = "forma")]
#[command(version)]
#[command(about = "Scaffold React and React Native components")]
pub(crate) struct Cli {
    /// Log what is being generated
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::New(cmd) => cmd.run(),
            Commands::Index(cmd) => cmd.run(),
            Commands::Init(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one component folder per name
    New(NewCommand),

    /// Write an index re-exporting every component folder
    Index(IndexCommand),

    /// Create a forma.toml with default settings
    Init(InitCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
