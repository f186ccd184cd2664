//! CodeFile abstraction for structured module generation.
//!
//! Every template renders through a [`CodeFile`]: package imports, local
//! imports, body elements and exports, separated by single blank lines.

use crate::{
    ast::{Export, Import},
    builder::{CodeBuilder, CodeFragment, Renderable},
};

/// A structured representation of a JavaScript/TypeScript module.
///
/// # Example
///
/// ```
/// use forma_codegen::{CodeFile, ast::{Export, Import}};
///
/// let code = CodeFile::new()
///     .local_import(Import::new("./Button").default("Button"))
///     .export(Export::default_of("Button"))
///     .render();
///
/// assert_eq!(code, "import Button from './Button';\n\nexport default Button;\n");
/// ```
#[derive(Default)]
pub struct CodeFile {
    imports: Vec<Import>,
    local_imports: Vec<Import>,
    body: Vec<Vec<CodeFragment>>,
    exports: Vec<Export>,
}

impl CodeFile {
    /// Create a new empty CodeFile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a package import.
    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    /// Add a package import when `condition` holds.
    pub fn import_if(self, condition: bool, import: impl FnOnce() -> Import) -> Self {
        if condition { self.import(import()) } else { self }
    }

    /// Add a relative import; these form their own group after package imports.
    pub fn local_import(mut self, import: Import) -> Self {
        self.local_imports.push(import);
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Add body elements from an iterator, each separated by a blank line.
    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        for node in nodes {
            self.body.push(node.to_fragments());
        }
        self
    }

    /// Add an export statement.
    pub fn export(mut self, export: Export) -> Self {
        self.exports.push(export);
        self
    }

    /// Render the file with 2-space indentation.
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::new();
        let has_imports = !self.imports.is_empty() || !self.local_imports.is_empty();
        let has_rest = !self.body.is_empty() || !self.exports.is_empty();

        // 1. Package imports
        for import in &self.imports {
            builder.emit(import);
        }

        // 2. Local imports, separated from package imports
        if !self.imports.is_empty() && !self.local_imports.is_empty() {
            builder.push_blank();
        }
        for import in &self.local_imports {
            builder.emit(import);
        }

        // 3. Blank line between imports and the rest
        if has_imports && has_rest {
            builder.push_blank();
        }

        // 4. Body with blank lines between elements
        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment);
            }
        }

        // 5. Blank line before exports
        if !self.body.is_empty() && !self.exports.is_empty() {
            builder.push_blank();
        }

        // 6. Exports
        for export in &self.exports {
            builder.emit(export);
        }

        builder.build()
    }
}
