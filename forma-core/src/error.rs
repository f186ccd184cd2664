use miette::Diagnostic;
use thiserror::Error;

/// Result type for rendering and naming operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum Error {
    #[error("unsupported variant '{variant}': {reason}")]
    #[diagnostic(code(forma::unsupported_variant))]
    UnsupportedVariant { variant: String, reason: String },

    #[error("'{name}' does not contain any identifier characters")]
    #[diagnostic(
        code(forma::degenerate_name),
        help("component names need at least one letter, digit or underscore")
    )]
    DegenerateName { name: String },

    #[error("invalid component name '{name}': {reason}")]
    #[diagnostic(
        code(forma::invalid_name),
        help("component names become folder names and must be a single path segment")
    )]
    InvalidName { name: String, reason: &'static str },

    #[error("invalid {option} '{value}'")]
    #[diagnostic(code(forma::invalid_option), help("expected one of: {expected}"))]
    InvalidOption {
        option: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl Error {
    /// Create an unsupported variant error.
    pub fn unsupported(variant: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::UnsupportedVariant {
            variant: variant.into(),
            reason: reason.into(),
        }
    }

    /// Create a degenerate name error.
    pub fn degenerate(name: impl Into<String>) -> Self {
        Error::DegenerateName { name: name.into() }
    }

    /// Create an invalid name error.
    pub fn invalid_name(name: impl Into<String>, reason: &'static str) -> Self {
        Error::InvalidName {
            name: name.into(),
            reason,
        }
    }
}
