//! Storybook registration template.

use forma_core::{Error, Framework, Language, Result};

use super::{ComponentNames, react_import};
use crate::{
    CodeFile,
    ast::{Import, string_literal},
    builder::CodeFragment,
};

/// `storiesOf` registration; the title uses the display label, the element
/// uses the identifier.
pub(crate) fn story_file(
    names: &ComponentNames,
    framework: Framework,
    language: Language,
) -> Result<CodeFile> {
    if framework == Framework::Native {
        return Err(Error::unsupported(
            "story",
            "stories are only generated for web components",
        ));
    }

    let name = names.identifier.as_str();
    let title = string_literal(&names.label);

    let chain = vec![
        CodeFragment::line(format!("storiesOf({}, module)", title)),
        CodeFragment::indent(vec![CodeFragment::block(
            format!(".add({}, () => (", title),
            vec![CodeFragment::block(
                "<React.Fragment>",
                vec![CodeFragment::line(format!("<{} />", name))],
                "</React.Fragment>",
            )],
            "));",
        )]),
    ];

    Ok(CodeFile::new()
        .import(react_import(language))
        .import(Import::new("@storybook/react").named("storiesOf"))
        .local_import(Import::new(names.module_path()).default(name))
        .add(chain))
}
