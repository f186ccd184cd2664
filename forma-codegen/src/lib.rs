//! Template selection and rendering for the forma component generator.
//!
//! # Module Organization
//!
//! - [`builder`] - Indentation-aware line building (CodeBuilder, CodeFragment)
//! - [`ast`] - JavaScript module syntax (Import, Export, string literals)
//! - [`render`] - Variant selection and the four file templates
//! - [`files`] - Generated files and their on-disk layout
//! - [`generator`] - Preview and write for whole components or folder indexes

pub mod ast;
pub mod builder;
mod code_file;
pub mod files;
pub mod generator;
pub mod render;

pub use code_file::CodeFile;
pub use files::{ComponentArtifact, FolderIndex};
pub use generator::{ComponentGenerator, FileSet, GenerateResult, PreviewFile, Scaffold};
pub use render::{ComponentNames, ComponentVariant, Renderer, render, render_folder_index};
