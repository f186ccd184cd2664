//! Core utilities and types for the forma component generator.
//!
//! This crate provides the name normalizer, the configuration space a
//! component is generated from, the error taxonomy shared by every other
//! crate, and the primitives used to write generated files to disk.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod naming;
mod types;

pub use error::{Error, Result};
// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult};
// String utilities
pub use naming::{binding_name, capitalize_first, check_path_segment, normalize_identifier};
// Configuration space
pub use types::{FileKind, Framework, GenerationConfig, Language, Style};
