// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! `forma.toml` project configuration.

mod error;
mod manifest;

pub use error::{Error, Result};
pub use manifest::{
    ComponentSection, FilesSection, MANIFEST_FILE, Manifest, OutputSection, parse_manifest,
};
