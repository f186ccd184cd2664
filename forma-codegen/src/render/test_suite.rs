//! Test file template.

use forma_core::Language;

use super::{ComponentNames, react_import};
use crate::{CodeFile, ast::Import, builder::CodeFragment};

/// Shallow-render smoke test for a component.
pub(crate) fn test_file(names: &ComponentNames, language: Language) -> CodeFile {
    let name = names.identifier.as_str();
    let element = format!("<{} />", name);

    let suite = CodeFragment::block(
        format!("describe('{}', () => {{", element),
        vec![CodeFragment::block(
            "it('renders', () => {",
            vec![CodeFragment::line(format!(
                "expect(shallow({}).exists()).toBe(true);",
                element
            ))],
            "});",
        )],
        "});",
    );

    CodeFile::new()
        .import(react_import(language))
        .import(Import::new("enzyme").named("shallow"))
        .local_import(Import::new(names.module_path()).default(name))
        .add(vec![suite])
}
