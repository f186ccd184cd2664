use std::path::PathBuf;

use clap::Args;
use dialoguer::{Select, theme::ColorfulTheme};
use eyre::{Context, Result};
use forma_core::{File, Framework, Language};
use forma_manifest::{MANIFEST_FILE, Manifest};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct InitCommand {
    /// Directory to create forma.toml in
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Target framework (prompted for when omitted)
    #[arg(long)]
    pub framework: Option<Framework>,

    /// Generate TypeScript components
    #[arg(long)]
    pub typescript: bool,

    /// Overwrite an existing forma.toml
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let path = self.output.join(MANIFEST_FILE);
        if path.exists() && !self.force {
            eyre::bail!(
                "'{}' already exists, pass --force to overwrite it",
                path.display()
            );
        }

        let framework = match self.framework {
            Some(framework) => framework,
            None => Self::prompt_framework()?,
        };
        let content = self.manifest(framework).to_toml().unwrap_or_exit();
        File::new(&path, content).write()?;

        println!("Created {}", path.display());
        println!();
        println!("Next steps:");
        println!("  forma new <name>");

        Ok(())
    }

    fn manifest(&self, framework: Framework) -> Manifest {
        let mut manifest = Manifest::default();
        manifest.component.framework = framework;
        if self.typescript {
            manifest.component.language = Language::TypeScript;
        }
        manifest
    }

    fn prompt_framework() -> Result<Framework> {
        let frameworks = ["React (web)", "React Native"];
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select a framework")
            .items(&frameworks)
            .default(0)
            .interact()
            .wrap_err("Failed to get framework selection")?;

        Ok(match selection {
            0 => Framework::Web,
            _ => Framework::Native,
        })
    }
}
