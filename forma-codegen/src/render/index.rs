//! Barrel file templates.

use std::collections::HashMap;

use forma_core::{Error, Result, binding_name};

use super::ComponentNames;
use crate::{
    CodeFile,
    ast::{Export, Import, is_reserved_word},
};

/// `export { default } from './<stem>';`
pub(crate) fn index_file(names: &ComponentNames) -> CodeFile {
    CodeFile::new().export(Export::new().from(names.module_path()).named("default"))
}

/// One default import per folder followed by a single export list, both in
/// the order the folders were given.
///
/// Fails when a folder binds to a reserved word or to the same name as an
/// earlier folder (`date-picker` and `datePicker`).
pub(crate) fn folder_index_file<S: AsRef<str>>(folders: &[S]) -> Result<CodeFile> {
    if folders.is_empty() {
        return Err(Error::unsupported(
            "folder index",
            "at least one folder name is required",
        ));
    }

    let mut file = CodeFile::new();
    let mut bindings = Vec::with_capacity(folders.len());
    let mut owners: HashMap<String, &str> = HashMap::with_capacity(folders.len());
    for folder in folders {
        let folder = folder.as_ref();
        let binding = binding_name(folder)?;
        if is_reserved_word(&binding) {
            return Err(Error::unsupported(
                folder,
                format!("folder binds to the reserved word '{}'", binding),
            ));
        }
        if let Some(other) = owners.insert(binding.clone(), folder) {
            return Err(Error::unsupported(
                folder,
                format!("binding '{}' is already used by folder '{}'", binding, other),
            ));
        }
        file = file.local_import(Import::new(format!("./{}", folder)).default(binding.as_str()));
        bindings.push(binding);
    }

    Ok(file.export(Export::new().named_all(bindings).multiline()))
}
