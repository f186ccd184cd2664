use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use forma_codegen::{FolderIndex, Scaffold};
use forma_core::Language;

use super::{UnwrapOrExit, load_manifest};
use crate::reports::{GenerateReport, Report, TerminalOutput};

#[derive(Args)]
pub struct IndexCommand {
    /// Path to forma.toml (defaults to ./forma.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory holding the component folders (defaults to [output].dir)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write index.ts instead of index.js
    #[arg(long)]
    pub typescript: bool,

    /// Preview the index without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl IndexCommand {
    pub fn run(&self) -> Result<()> {
        let manifest = load_manifest(self.config.as_deref()).unwrap_or_exit();
        let output_dir = self
            .output
            .clone()
            .unwrap_or_else(|| manifest.output.dir.clone());
        let language = if self.typescript {
            Language::TypeScript
        } else {
            manifest.component.language
        };

        let index = FolderIndex::scan(&output_dir, language)?;
        if index.folders().is_empty() {
            eyre::bail!("no component folders found in '{}'", output_dir.display());
        }

        let report = if self.dry_run {
            GenerateReport::preview(index.preview().wrap_err("Failed to render index")?)
        } else {
            let result = index
                .generate(&output_dir)
                .wrap_err("Failed to write index")?;
            GenerateReport::written(output_dir, result)
        };

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
