//! Report for `forma new` and `forma index`.

use std::path::{Path, PathBuf};

use forma_codegen::{GenerateResult, PreviewFile};

use super::output::{Output, Report};

/// What a generation command did, or would do.
#[derive(Debug)]
pub enum GenerateReport {
    /// Files were written below `output_dir`.
    Written {
        output_dir: PathBuf,
        result: GenerateResult,
    },
    /// Dry-run preview.
    Preview { files: Vec<PreviewFile> },
}

impl GenerateReport {
    pub fn written(output_dir: PathBuf, result: GenerateResult) -> Self {
        Self::Written { output_dir, result }
    }

    pub fn preview(files: Vec<PreviewFile>) -> Self {
        Self::Preview { files }
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match self {
            Self::Written { output_dir, result } => render_written(out, output_dir, result),
            Self::Preview { files } => render_preview(out, files),
        }
    }
}

fn render_written(out: &mut dyn Output, output_dir: &Path, result: &GenerateResult) {
    for path in &result.skipped {
        out.warning(&format!(
            "{} already exists, left untouched",
            relative(output_dir, path)
        ));
    }

    out.key_value("Output", &output_dir.display().to_string());
    if result.written.is_empty() {
        out.preformatted("Nothing to write");
        return;
    }

    out.newline();
    out.section(&format!("Created ({})", result.written.len()));
    for path in &result.written {
        out.added_item(&relative(output_dir, path));
    }
}

fn render_preview(out: &mut dyn Output, files: &[PreviewFile]) {
    for file in files {
        out.divider(&file.path);
        out.preformatted(&file.content);
    }

    out.divider("Summary");
    out.preformatted(&format!("{} files would be generated", files.len()));
}

fn relative(base: &Path, path: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .display()
        .to_string()
}
