//! Generators that turn names and a configuration into files on disk.

use std::path::{Path, PathBuf};

use forma_core::{File, FileKind, GeneratedFile, GenerationConfig, Result, WriteResult};

use crate::files::{ComponentArtifact, FolderIndex};

/// Common interface of the generators, used by the CLI for preview and write.
pub trait Scaffold {
    /// Render every file without touching the disk.
    fn preview(&self) -> Result<Vec<PreviewFile>>;

    /// Render every file and write it below `output_dir`.
    ///
    /// Nothing is written when any file fails to render.
    fn generate(&self, output_dir: &Path) -> eyre::Result<GenerateResult>;
}

/// A generated file for preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files that were written
    pub written: Vec<PathBuf>,
    /// Files left untouched because they already exist
    pub skipped: Vec<PathBuf>,
}

impl GenerateResult {
    fn record(&mut self, path: PathBuf, result: WriteResult) {
        match result {
            WriteResult::Written => self.written.push(path),
            WriteResult::Skipped => self.skipped.push(path),
        }
    }
}

/// Companion files generated next to each component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileSet {
    pub index: bool,
    pub test: bool,
    pub story: bool,
}

impl Default for FileSet {
    fn default() -> Self {
        Self {
            index: true,
            test: true,
            story: false,
        }
    }
}

impl FileSet {
    /// File kinds to render, component first.
    pub fn kinds(&self) -> Vec<FileKind> {
        let mut kinds = vec![FileKind::Component];
        if self.index {
            kinds.push(FileKind::Index);
        }
        if self.test {
            kinds.push(FileKind::Test);
        }
        if self.story {
            kinds.push(FileKind::Story);
        }
        kinds
    }
}

/// Generates one folder per component name.
#[derive(Debug, Clone)]
pub struct ComponentGenerator {
    names: Vec<String>,
    config: GenerationConfig,
    files: FileSet,
}

impl ComponentGenerator {
    pub fn new<I, S>(names: I, config: GenerationConfig, files: FileSet) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            config,
            files,
        }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    fn rendered(&self) -> Result<Vec<(ComponentArtifact, String)>> {
        let kinds = self.files.kinds();
        let mut rendered = Vec::with_capacity(self.names.len() * kinds.len());
        for name in &self.names {
            for &kind in &kinds {
                let artifact = ComponentArtifact::new(name, kind, self.config)?;
                let content = artifact.render()?;
                rendered.push((artifact, content));
            }
        }
        Ok(rendered)
    }
}

impl Scaffold for ComponentGenerator {
    fn preview(&self) -> Result<Vec<PreviewFile>> {
        Ok(self
            .rendered()?
            .into_iter()
            .map(|(artifact, content)| PreviewFile {
                path: artifact.relative_path().display().to_string(),
                content,
            })
            .collect())
    }

    fn generate(&self, output_dir: &Path) -> eyre::Result<GenerateResult> {
        let rendered = self.rendered()?;
        let mut result = GenerateResult::default();

        for (artifact, content) in rendered {
            let path = artifact.path(output_dir);
            tracing::debug!(kind = %artifact.kind(), path = %path.display(), "writing");
            let status = File::new(&path, content)
                .with_rules(artifact.rules())
                .write()?;
            result.record(path, status);
        }

        Ok(result)
    }
}

impl Scaffold for FolderIndex {
    fn preview(&self) -> Result<Vec<PreviewFile>> {
        Ok(vec![PreviewFile {
            path: self.file_name(),
            content: self.render()?,
        }])
    }

    fn generate(&self, output_dir: &Path) -> eyre::Result<GenerateResult> {
        let mut result = GenerateResult::default();
        let status = self.write(output_dir)?;
        result.record(self.path(output_dir), status);
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use forma_core::{Framework, Language};
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_file_set_kinds() {
        assert_eq!(
            FileSet::default().kinds(),
            vec![FileKind::Component, FileKind::Index, FileKind::Test]
        );
        let only_component = FileSet {
            index: false,
            test: false,
            story: false,
        };
        assert_eq!(only_component.kinds(), vec![FileKind::Component]);
    }

    #[test]
    fn test_preview_paths() {
        let generator = ComponentGenerator::new(
            ["button", "card"],
            GenerationConfig::new().upper_case_file(true),
            FileSet::default(),
        );
        let paths: Vec<_> = generator
            .preview()
            .unwrap()
            .into_iter()
            .map(|f| PathBuf::from(f.path))
            .collect();

        assert_eq!(
            paths,
            vec![
                PathBuf::from("button/Button.js"),
                PathBuf::from("button/index.js"),
                PathBuf::from("button/Button.test.js"),
                PathBuf::from("card/Card.js"),
                PathBuf::from("card/index.js"),
                PathBuf::from("card/Card.test.js"),
            ]
        );
    }

    #[test]
    fn test_generate_writes_then_skips() {
        let temp = TempDir::new().unwrap();
        let generator = ComponentGenerator::new(
            ["button"],
            GenerationConfig::new().language(Language::TypeScript),
            FileSet::default(),
        );

        let first = generator.generate(temp.path()).unwrap();
        assert_eq!(first.written.len(), 3);
        assert!(first.skipped.is_empty());
        assert!(temp.path().join("button/button.tsx").exists());
        assert!(temp.path().join("button/index.ts").exists());
        assert!(temp.path().join("button/button.test.tsx").exists());

        fs::write(temp.path().join("button/button.tsx"), "// edited").unwrap();
        let second = generator.generate(temp.path()).unwrap();
        assert!(second.written.is_empty());
        assert_eq!(second.skipped.len(), 3);
        assert_eq!(
            fs::read_to_string(temp.path().join("button/button.tsx")).unwrap(),
            "// edited"
        );
    }

    #[test]
    fn test_generate_writes_nothing_on_unsupported_variant() {
        let temp = TempDir::new().unwrap();
        let generator = ComponentGenerator::new(
            ["button"],
            GenerationConfig::new().framework(Framework::Native),
            FileSet {
                story: true,
                ..FileSet::default()
            },
        );

        assert!(generator.generate(temp.path()).is_err());
        assert!(!temp.path().join("button").exists());
    }

    #[test]
    fn test_generate_rejects_degenerate_name_before_writing() {
        let temp = TempDir::new().unwrap();
        let generator =
            ComponentGenerator::new(["button", "***"], GenerationConfig::new(), FileSet::default());

        assert!(generator.preview().is_err());
        assert!(generator.generate(temp.path()).is_err());
        assert!(!temp.path().join("button").exists());
    }

    #[test]
    fn test_generate_keeps_files_inside_output_dir() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("components");
        let generator = ComponentGenerator::new(
            ["button", "../escape"],
            GenerationConfig::new(),
            FileSet::default(),
        );

        assert!(generator.preview().is_err());
        assert!(generator.generate(&output).is_err());
        assert!(!temp.path().join("escape").exists());
        assert!(!output.exists());
    }

    #[test]
    fn test_folder_index_scaffold() {
        let temp = TempDir::new().unwrap();
        let index = FolderIndex::new(vec!["b".into(), "a".into()], Language::Plain);

        let preview = index.preview().unwrap();
        assert_eq!(preview.len(), 1);
        assert_eq!(preview[0].path, "index.js");
        assert!(preview[0].content.starts_with("import b from './b';\nimport a"));

        let result = index.generate(temp.path()).unwrap();
        assert_eq!(result.written, vec![temp.path().join("index.js")]);
    }
}
