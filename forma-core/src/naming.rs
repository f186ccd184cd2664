//! Name normalization for generated code.
//!
//! Two transforms live here and must not be conflated:
//! [`normalize_identifier`] produces a safe class/type name, while
//! [`capitalize_first`] produces a display label that may keep
//! special characters.

use std::path::{Component, Path};

use crate::{Error, Result};

/// Convert an arbitrary component name into a valid type identifier
/// (e.g., "my-widget" -> "MyWidget", "date picker.v2" -> "DatePickerV2").
///
/// Every character that is not a letter, ASCII digit or underscore acts as a word
/// separator and is dropped; each word gets its first letter uppercased. A
/// result that would start with a digit is prefixed with `_`.
///
/// Names without a single identifier character fail with
/// [`Error::DegenerateName`].
pub fn normalize_identifier(raw: &str) -> Result<String> {
    let joined = join_words(raw, true);
    if joined.is_empty() {
        return Err(Error::degenerate(raw));
    }
    Ok(guard_leading_digit(joined))
}

/// Uppercase only the first character, keeping the rest verbatim
/// (e.g., "my-widget" -> "My-widget").
pub fn capitalize_first(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Convert a name into an import binding, keeping the case of the first
/// word (e.g., "alpha" -> "alpha", "date-picker" -> "datePicker").
pub fn binding_name(raw: &str) -> Result<String> {
    let joined = join_words(raw, false);
    if joined.is_empty() {
        return Err(Error::degenerate(raw));
    }
    Ok(guard_leading_digit(joined))
}

/// Check that a raw name can be used as a single folder name below the
/// output directory.
///
/// Separators, `.`, `..`, roots and drive prefixes are rejected with
/// [`Error::InvalidName`].
pub fn check_path_segment(raw: &str) -> Result<()> {
    if raw.contains(['/', '\\']) {
        return Err(Error::invalid_name(raw, "contains a path separator"));
    }
    if raw.contains(['\0', ':']) {
        return Err(Error::invalid_name(raw, "contains a reserved path character"));
    }
    let mut components = Path::new(raw).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(segment)), None) if segment == raw => Ok(()),
        (Some(Component::CurDir | Component::ParentDir), None) => {
            Err(Error::invalid_name(raw, "is a relative path component"))
        }
        _ => Err(Error::invalid_name(raw, "is not a single path segment")),
    }
}

/// Letters of any script, ASCII digits and `_`. Other numeric characters
/// (superscripts, fractions, non-Latin digits) are not valid in a JS
/// identifier and act as separators.
fn is_identifier_char(c: char) -> bool {
    c.is_alphabetic() || c.is_ascii_digit() || c == '_'
}

fn join_words(raw: &str, capitalize_leading: bool) -> String {
    raw.split(|c: char| !is_identifier_char(c))
        .filter(|word| !word.is_empty())
        .enumerate()
        .map(|(i, word)| {
            if i == 0 && !capitalize_leading {
                word.to_string()
            } else {
                upper_head(word)
            }
        })
        .collect()
}

/// Uppercase the head of a word when it maps to exactly one character.
///
/// Multi-character mappings (e.g. 'ß' -> "SS") can introduce combining marks,
/// which would break idempotence, so those heads are kept as-is.
fn upper_head(word: &str) -> String {
    let mut chars = word.chars();
    let Some(head) = chars.next() else {
        return String::new();
    };
    let mut upper = head.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => std::iter::once(single).chain(chars).collect(),
        _ => word.to_string(),
    }
}

fn guard_leading_digit(name: String) -> String {
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{}", name)
    } else {
        name
    }
}
