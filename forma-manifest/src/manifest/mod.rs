//! Manifest types for forma.toml files.

mod parse;
mod validate;

use std::path::PathBuf;

use forma_core::{Framework, GenerationConfig, Language, Style};
pub use parse::parse_manifest;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Default manifest file name, looked up in the working directory.
pub const MANIFEST_FILE: &str = "forma.toml";

/// Root manifest for forma.toml
///
/// Every section and key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Manifest {
    /// Component template choices
    pub component: ComponentSection,
    /// Companion files generated next to each component
    pub files: FilesSection,
    /// Where components are generated
    pub output: OutputSection,
}

/// `[component]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ComponentSection {
    pub framework: Framework,
    pub style: Style,
    pub language: Language,
    /// Scaffold a single documented prop
    pub props: bool,
    /// Name component files after the identifier instead of the raw name
    pub uppercase: bool,
}

/// `[files]`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilesSection {
    pub index: bool,
    pub test: bool,
    pub stories: bool,
}

impl Default for FilesSection {
    fn default() -> Self {
        Self {
            index: true,
            test: true,
            stories: false,
        }
    }
}

/// `[output]`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSection {
    pub dir: PathBuf,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("src/components"),
        }
    }
}

impl Manifest {
    /// Generation settings described by the `[component]` section.
    pub fn generation_config(&self) -> GenerationConfig {
        let component = &self.component;
        GenerationConfig::new()
            .framework(component.framework)
            .style(component.style)
            .language(component.language)
            .with_props(component.props)
            .upper_case_file(component.uppercase)
    }

    /// Serialize to TOML, e.g. for `forma init`.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|source| Box::new(Error::Serialize { source }))
    }
}
