//! Export statement builder.

use super::string_literal;
use crate::builder::{CodeFragment, Renderable};

/// Builder for `export` statements.
#[derive(Debug, Clone, Default)]
pub struct Export {
    from: Option<String>,
    default: Option<String>,
    named: Vec<String>,
    multiline: bool,
}

impl Export {
    pub fn new() -> Self {
        Self::default()
    }

    /// `export default <name>;`
    pub fn default_of(name: impl Into<String>) -> Self {
        Self {
            default: Some(name.into()),
            ..Self::default()
        }
    }

    /// Re-export from another module.
    pub fn from(mut self, module: impl Into<String>) -> Self {
        self.from = Some(module.into());
        self
    }

    /// Export a named item.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// Export several named items, keeping their order.
    pub fn named_all<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.named.extend(names.into_iter().map(Into::into));
        self
    }

    /// Put every named item on its own line.
    pub fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    fn from_clause(&self) -> String {
        match &self.from {
            Some(from) => format!(" from {}", string_literal(from)),
            None => String::new(),
        }
    }
}

impl Renderable for Export {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if let Some(def) = &self.default {
            return vec![CodeFragment::line(format!("export default {};", def))];
        }

        if self.named.is_empty() {
            return Vec::new();
        }

        if self.multiline {
            let last = self.named.len() - 1;
            let body = self
                .named
                .iter()
                .enumerate()
                .map(|(i, name)| {
                    if i == last {
                        CodeFragment::line(name.as_str())
                    } else {
                        CodeFragment::line(format!("{}, ", name))
                    }
                })
                .collect();
            vec![CodeFragment::block(
                "export {",
                body,
                format!("}}{};", self.from_clause()),
            )]
        } else {
            vec![CodeFragment::line(format!(
                "export {{ {} }}{};",
                self.named.join(", "),
                self.from_clause()
            ))]
        }
    }
}
