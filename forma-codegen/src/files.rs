//! Generated files and where they live on disk.
//!
//! Layout for a component named `<name>`:
//!
//! - `<name>/<stem>.<ext>` - component
//! - `<name>/index.<js|ts>` - barrel
//! - `<name>/<stem>.test.<ext>` - test
//! - `<name>/<stem>.stories.<ext>` - story
//!
//! where `<stem>` follows the `upper_case_file` rule and `<ext>` is `js` or
//! `tsx`.

use std::path::{Path, PathBuf};

use eyre::{Context, Result as EyreResult};
use forma_core::{
    FileKind, FileRules, GeneratedFile, GenerationConfig, Language, Result, check_path_segment,
};

use crate::render::{ComponentNames, render, render_folder_index};

/// One file of a component folder.
#[derive(Debug, Clone)]
pub struct ComponentArtifact {
    kind: FileKind,
    names: ComponentNames,
    config: GenerationConfig,
}

impl ComponentArtifact {
    /// Fails when the name is not a single folder name or cannot be turned
    /// into an identifier.
    pub fn new(name: &str, kind: FileKind, config: GenerationConfig) -> Result<Self> {
        check_path_segment(name)?;
        Ok(Self {
            kind,
            names: ComponentNames::resolve(name, config.upper_case_file)?,
            config,
        })
    }

    pub fn kind(&self) -> FileKind {
        self.kind
    }

    /// Path relative to the output directory.
    pub fn relative_path(&self) -> PathBuf {
        PathBuf::from(&self.names.raw).join(self.file_name())
    }

    fn file_name(&self) -> String {
        let stem = &self.names.stem;
        let ext = self.config.language.jsx_extension();
        match self.kind {
            FileKind::Component => format!("{}.{}", stem, ext),
            FileKind::Index => format!("index.{}", self.config.language.module_extension()),
            FileKind::Test => format!("{}.test.{}", stem, ext),
            FileKind::Story => format!("{}.stories.{}", stem, ext),
        }
    }
}

impl GeneratedFile for ComponentArtifact {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.relative_path())
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> Result<String> {
        render(self.kind, &self.names.raw, &self.config)
    }
}

/// Barrel file re-exporting every component folder of a directory.
#[derive(Debug, Clone)]
pub struct FolderIndex {
    folders: Vec<String>,
    language: Language,
}

impl FolderIndex {
    pub fn new(folders: Vec<String>, language: Language) -> Self {
        Self { folders, language }
    }

    /// Collect the sub-directories of `dir`, sorted by name.
    ///
    /// Hidden directories are ignored.
    pub fn scan(dir: &Path, language: Language) -> EyreResult<Self> {
        let entries = std::fs::read_dir(dir)
            .wrap_err_with(|| format!("failed to read directory '{}'", dir.display()))?;

        let mut folders = Vec::new();
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                tracing::warn!(path = %entry.path().display(), "skipping non UTF-8 folder");
                continue;
            };
            if name.starts_with('.') {
                continue;
            }
            folders.push(name);
        }
        folders.sort();

        tracing::debug!(dir = %dir.display(), count = folders.len(), "scanned folders");
        Ok(Self::new(folders, language))
    }

    pub fn folders(&self) -> &[String] {
        &self.folders
    }

    pub fn file_name(&self) -> String {
        format!("index.{}", self.language.module_extension())
    }
}

impl GeneratedFile for FolderIndex {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.file_name())
    }

    fn rules(&self) -> FileRules {
        FileRules::always()
    }

    fn render(&self) -> Result<String> {
        render_folder_index(&self.folders)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use forma_core::{Error, Overwrite, WriteResult};
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_component_layout_lower_case() {
        let config = GenerationConfig::new();
        let paths: Vec<_> = FileKind::ALL
            .into_iter()
            .map(|kind| {
                ComponentArtifact::new("my-widget", kind, config)
                    .unwrap()
                    .relative_path()
            })
            .collect();

        assert_eq!(
            paths,
            vec![
                PathBuf::from("my-widget/my-widget.js"),
                PathBuf::from("my-widget/index.js"),
                PathBuf::from("my-widget/my-widget.test.js"),
                PathBuf::from("my-widget/my-widget.stories.js"),
            ]
        );
    }

    #[test]
    fn test_component_layout_upper_case_typescript() {
        let config = GenerationConfig::new()
            .language(Language::TypeScript)
            .upper_case_file(true);
        let component = ComponentArtifact::new("my-widget", FileKind::Component, config).unwrap();
        let index = ComponentArtifact::new("my-widget", FileKind::Index, config).unwrap();

        assert_eq!(
            component.relative_path(),
            PathBuf::from("my-widget/MyWidget.tsx")
        );
        assert_eq!(index.relative_path(), PathBuf::from("my-widget/index.ts"));
        assert_eq!(component.rules().overwrite, Overwrite::IfMissing);
    }

    #[test]
    fn test_index_points_at_component_file() {
        // The barrel must import the file the component was written to
        for upper_case_file in [false, true] {
            let config = GenerationConfig::new().upper_case_file(upper_case_file);
            let component =
                ComponentArtifact::new("button", FileKind::Component, config).unwrap();
            let index = ComponentArtifact::new("button", FileKind::Index, config).unwrap();

            let stem = component
                .relative_path()
                .file_stem()
                .unwrap()
                .to_string_lossy()
                .into_owned();
            assert!(index.render().unwrap().contains(&format!("'./{}'", stem)));
        }
    }

    #[test]
    fn test_artifact_rejects_degenerate_name() {
        let result = ComponentArtifact::new("!!", FileKind::Component, GenerationConfig::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_artifact_rejects_names_outside_its_folder() {
        for name in ["/tmp/x", "../../outside", "nested/button", r"..\up", "..", "."] {
            for kind in FileKind::ALL {
                let result = ComponentArtifact::new(name, kind, GenerationConfig::new());
                assert!(
                    matches!(result, Err(Error::InvalidName { .. })),
                    "accepted {name:?}"
                );
            }
        }
    }

    #[test]
    fn test_folder_index_scan_sorts_and_skips() {
        let temp = TempDir::new().unwrap();
        for dir in ["gamma", "alpha", ".cache", "beta"] {
            fs::create_dir(temp.path().join(dir)).unwrap();
        }
        fs::write(temp.path().join("index.js"), "").unwrap();

        let index = FolderIndex::scan(temp.path(), Language::Plain).unwrap();
        assert_eq!(index.folders(), ["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_folder_index_always_overwrites() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("index.ts"), "stale").unwrap();

        let index = FolderIndex::new(vec!["card".to_string()], Language::TypeScript);
        assert_eq!(index.write(temp.path()).unwrap(), WriteResult::Written);
        assert_eq!(
            fs::read_to_string(temp.path().join("index.ts")).unwrap(),
            "import card from './card';\n\nexport {\n  card\n};\n"
        );
    }

    #[test]
    fn test_folder_index_scan_missing_dir() {
        let temp = TempDir::new().unwrap();
        assert!(FolderIndex::scan(&temp.path().join("missing"), Language::Plain).is_err());
    }
}
