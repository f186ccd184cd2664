//! Import statement builder.

use super::string_literal;
use crate::builder::{CodeFragment, Renderable};

/// Builder for `import` statements.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    default: Option<String>,
    namespace: Option<String>,
    named: Vec<String>,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            default: None,
            namespace: None,
            named: Vec::new(),
        }
    }

    /// Import a default export.
    pub fn default(mut self, name: impl Into<String>) -> Self {
        self.default = Some(name.into());
        self
    }

    /// Import the whole module under a name (`import * as name`).
    ///
    /// Takes precedence over default and named imports.
    pub fn namespace(mut self, name: impl Into<String>) -> Self {
        self.namespace = Some(name.into());
        self
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// Render the import statement without a trailing newline.
    pub fn to_statement(&self) -> String {
        let from = string_literal(&self.from);

        if let Some(ns) = &self.namespace {
            return format!("import * as {} from {};", ns, from);
        }

        let mut clauses = Vec::with_capacity(2);
        if let Some(def) = &self.default {
            clauses.push(def.clone());
        }
        if !self.named.is_empty() {
            clauses.push(format!("{{ {} }}", self.named.join(", ")));
        }
        format!("import {} from {};", clauses.join(", "), from)
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.to_statement())]
    }
}
