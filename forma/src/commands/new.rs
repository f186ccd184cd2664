use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use forma_codegen::{ComponentGenerator, FileSet, Scaffold};
use forma_core::{Framework, GenerationConfig, Language, Style};
use forma_manifest::Manifest;

use super::{UnwrapOrExit, load_manifest};
use crate::reports::{GenerateReport, Report, TerminalOutput};

#[derive(Args)]
pub struct NewCommand {
    /// Component names, one folder is generated per name
    #[arg(required = true)]
    pub names: Vec<String>,

    /// Path to forma.toml (defaults to ./forma.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output directory (defaults to [output].dir)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Target framework (web, native)
    #[arg(long, conflicts_with = "native")]
    pub framework: Option<Framework>,

    /// Component style (class, functional)
    #[arg(long, conflicts_with = "functional")]
    pub style: Option<Style>,

    /// Output language (plain, typescript)
    #[arg(long, conflicts_with = "typescript")]
    pub language: Option<Language>,

    /// Shortcut for --language typescript
    #[arg(long)]
    pub typescript: bool,

    /// Shortcut for --framework native
    #[arg(long)]
    pub native: bool,

    /// Shortcut for --style functional
    #[arg(long)]
    pub functional: bool,

    /// Scaffold a documented prop
    #[arg(long)]
    pub props: bool,

    /// Name files after the component identifier (e.g. MyWidget.js)
    #[arg(long)]
    pub uppercase: bool,

    /// Skip the index file
    #[arg(long)]
    pub no_index: bool,

    /// Skip the test file
    #[arg(long)]
    pub no_test: bool,

    /// Also generate a storybook story
    #[arg(long)]
    pub stories: bool,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl NewCommand {
    pub fn run(&self) -> Result<()> {
        let manifest = load_manifest(self.config.as_deref()).unwrap_or_exit();
        let config = self.generation_config(&manifest);
        let generator = ComponentGenerator::new(
            self.names.iter().cloned(),
            config,
            self.file_set(&manifest),
        );

        let report = if self.dry_run {
            let files = generator
                .preview()
                .wrap_err("Failed to render components")?;
            GenerateReport::preview(files)
        } else {
            let output_dir = self.output_dir(&manifest);
            let result = generator
                .generate(&output_dir)
                .wrap_err("Failed to generate components")?;
            GenerateReport::written(output_dir, result)
        };

        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    /// Manifest settings with command line flags applied on top.
    fn generation_config(&self, manifest: &Manifest) -> GenerationConfig {
        let mut config = manifest.generation_config();

        if let Some(framework) = self.framework {
            config = config.framework(framework);
        }
        if self.native {
            config = config.framework(Framework::Native);
        }
        if let Some(style) = self.style {
            config = config.style(style);
        }
        if self.functional {
            config = config.style(Style::Functional);
        }
        if let Some(language) = self.language {
            config = config.language(language);
        }
        if self.typescript {
            config = config.language(Language::TypeScript);
        }
        if self.props {
            config = config.with_props(true);
        }
        if self.uppercase {
            config = config.upper_case_file(true);
        }

        config
    }

    fn file_set(&self, manifest: &Manifest) -> FileSet {
        FileSet {
            index: manifest.files.index && !self.no_index,
            test: manifest.files.test && !self.no_test,
            story: manifest.files.stories || self.stories,
        }
    }

    fn output_dir(&self, manifest: &Manifest) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| manifest.output.dir.clone())
    }
}
