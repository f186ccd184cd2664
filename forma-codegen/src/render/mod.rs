//! Template selection and rendering.
//!
//! Every call is pure: the same file kind, name and configuration always
//! render byte-identical text.

mod component;
mod index;
mod story;
mod test_suite;
mod variant;

use forma_core::{
    FileKind, GenerationConfig, Language, Result, capitalize_first, normalize_identifier,
};
pub use variant::ComponentVariant;

use crate::ast::Import;

/// The names a template needs, derived once from the raw component name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentNames {
    /// The name exactly as given
    pub raw: String,
    /// Normalized identifier used in code
    pub identifier: String,
    /// Display label used in human-facing titles
    pub label: String,
    /// File name of the component module, without extension
    pub stem: String,
}

impl ComponentNames {
    /// Resolve names for `raw` under the given file naming rule.
    pub fn resolve(raw: &str, upper_case_file: bool) -> Result<Self> {
        let identifier = normalize_identifier(raw)?;
        let stem = if upper_case_file {
            identifier.clone()
        } else {
            raw.to_string()
        };
        Ok(Self {
            raw: raw.to_string(),
            identifier,
            label: capitalize_first(raw),
            stem,
        })
    }

    /// Relative module path of the component file (e.g., `./Button`).
    pub fn module_path(&self) -> String {
        format!("./{}", self.stem)
    }
}

/// Render one file for a component.
pub fn render(kind: FileKind, name: &str, config: &GenerationConfig) -> Result<String> {
    let names = ComponentNames::resolve(name, config.upper_case_file)?;

    let file = match kind {
        FileKind::Component => {
            let variant = ComponentVariant::select(config);
            tracing::debug!(
                name = %names.identifier,
                variant = variant.as_str(),
                language = %config.language,
                "rendering component"
            );
            component::component_file(&names, variant, config.language)
        }
        FileKind::Index => index::index_file(&names),
        FileKind::Test => test_suite::test_file(&names, config.language),
        FileKind::Story => story::story_file(&names, config.framework, config.language)?,
    };

    Ok(file.render())
}

/// Render a barrel file that re-exports every folder, in the given order.
pub fn render_folder_index<S: AsRef<str>>(folders: &[S]) -> Result<String> {
    tracing::debug!(folders = folders.len(), "rendering folder index");
    Ok(index::folder_index_file(folders)?.render())
}

/// Renders files for a fixed configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    config: GenerationConfig,
}

impl Renderer {
    pub fn new(config: GenerationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn render(&self, kind: FileKind, name: &str) -> Result<String> {
        render(kind, name, &self.config)
    }

    pub fn render_folder_index<S: AsRef<str>>(&self, folders: &[S]) -> Result<String> {
        render_folder_index(folders)
    }
}

/// React import used by test and story files.
fn react_import(language: Language) -> Import {
    match language {
        Language::Plain => Import::new("react").default("React"),
        Language::TypeScript => Import::new("react").namespace("React"),
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use forma_core::{Error, Framework, Style};

    use super::*;

    fn ts() -> GenerationConfig {
        GenerationConfig::new().language(Language::TypeScript)
    }

    #[test]
    fn test_component_names() {
        let names = ComponentNames::resolve("my-widget", false).unwrap();
        assert_eq!(names.identifier, "MyWidget");
        assert_eq!(names.label, "My-widget");
        assert_eq!(names.module_path(), "./my-widget");

        let upper = ComponentNames::resolve("my-widget", true).unwrap();
        assert_eq!(upper.module_path(), "./MyWidget");
    }

    #[test]
    fn test_index_respects_upper_case_file() {
        let upper = GenerationConfig::new().upper_case_file(true);
        assert_eq!(
            render(FileKind::Index, "button", &upper).unwrap(),
            "export { default } from './Button';\n"
        );

        let lower = GenerationConfig::new();
        assert_eq!(
            render(FileKind::Index, "button", &lower).unwrap(),
            "export { default } from './button';\n"
        );
    }

    #[test]
    fn test_every_configuration_renders_a_component() {
        for config in GenerationConfig::all() {
            let code = render(FileKind::Component, "my-widget", &config).unwrap();
            let declared = code.contains("class MyWidget extends ")
                || code.contains("const MyWidget = (")
                || code.contains("const MyWidget: React.FC");
            assert!(declared, "no declaration for {config:?}:\n{code}");
            assert!(
                code.ends_with("export default MyWidget;\n"),
                "no export for {config:?}:\n{code}"
            );
        }
    }

    #[test]
    fn test_every_configuration_renders_every_web_kind() {
        for config in GenerationConfig::all().filter(|c| c.framework == Framework::Web) {
            for kind in FileKind::ALL {
                let code = render(kind, "card", &config).unwrap();
                assert!(code.ends_with('\n'));
                assert!(!code.starts_with('\n'));
            }
        }
    }

    #[test]
    fn test_rendering_is_deterministic() {
        for config in GenerationConfig::all() {
            for kind in FileKind::ALL {
                if kind == FileKind::Story && config.framework == Framework::Native {
                    continue;
                }
                let first = render(kind, "date picker", &config).unwrap();
                let second = render(kind, "date picker", &config).unwrap();
                assert_eq!(first, second);
            }
        }
    }

    #[test]
    fn test_web_class_component() {
        let code = render(FileKind::Component, "button", &GenerationConfig::new()).unwrap();
        assert_eq!(
            code,
            "import React, { Component } from 'react';

class Button extends Component {
  render() {
    return (
      <React.Fragment>
        Button
      </React.Fragment>
    );
  }
}

export default Button;
"
        );
    }

    #[test]
    fn test_native_functional_with_props_component() {
        let config = GenerationConfig::new()
            .framework(Framework::Native)
            .style(Style::Functional)
            .with_props(true);
        let code = render(FileKind::Component, "avatar", &config).unwrap();
        assert_eq!(
            code,
            "import React from 'react';
import { View, Text } from 'react-native';
import PropTypes from 'prop-types';

const Avatar = ({ testID }) => {
  return (
    <View testID={testID}>
      <Text>Avatar</Text>
    </View>
  );
};

Avatar.propTypes = {
  testID: PropTypes.string,
};

Avatar.defaultProps = {
  testID: 'Avatar',
};

export default Avatar;
"
        );
    }

    #[test]
    fn test_typescript_only_changes_imports_and_annotations() {
        for plain in GenerationConfig::all().filter(|c| c.language == Language::Plain) {
            let typed = plain.language(Language::TypeScript);
            let plain_code = render(FileKind::Component, "card", &plain).unwrap();
            let typed_code = render(FileKind::Component, "card", &typed).unwrap();

            assert_ne!(plain_code, typed_code);
            assert_eq!(
                logic_lines(&plain_code),
                logic_lines(&typed_code),
                "logic diverged for {plain:?}"
            );
        }
    }

    /// Lines that carry rendering logic: imports, declarations, the props
    /// interface and access modifiers are stripped.
    fn logic_lines(code: &str) -> Vec<String> {
        let mut lines = Vec::new();
        let mut in_interface = false;
        for line in code.lines() {
            let trimmed = line.trim_start();
            if trimmed.starts_with("interface ") {
                in_interface = true;
                continue;
            }
            if in_interface {
                in_interface = trimmed != "}";
                continue;
            }
            if trimmed.starts_with("import ")
                || trimmed.starts_with("class ")
                || trimmed.starts_with("const Card")
                || trimmed.is_empty()
            {
                continue;
            }
            lines.push(trimmed.trim_start_matches("public ").to_string());
        }
        lines
    }

    #[test]
    fn test_test_file_import_syntax() {
        let plain = render(FileKind::Test, "button", &GenerationConfig::new()).unwrap();
        let typed = render(FileKind::Test, "button", &ts()).unwrap();

        assert!(plain.starts_with("import React from 'react';\n"));
        assert!(typed.starts_with("import * as React from 'react';\n"));
        assert_eq!(
            plain.lines().skip(1).collect::<Vec<_>>(),
            typed.lines().skip(1).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_test_file() {
        let config = GenerationConfig::new().upper_case_file(true);
        let code = render(FileKind::Test, "button", &config).unwrap();
        assert_eq!(
            code,
            "import React from 'react';
import { shallow } from 'enzyme';

import Button from './Button';

describe('<Button />', () => {
  it('renders', () => {
    expect(shallow(<Button />).exists()).toBe(true);
  });
});
"
        );
    }

    #[test]
    fn test_story_uses_label_and_identifier() {
        let code = render(FileKind::Story, "my-widget", &GenerationConfig::new()).unwrap();
        assert!(code.contains("import MyWidget from './my-widget';"));
        assert!(code.contains("storiesOf('My-widget', module)"));
        assert!(code.contains("  .add('My-widget', () => ("));
        assert!(code.contains("      <MyWidget />"));
        assert!(!code.contains("<My-widget"));
    }

    #[test]
    fn test_story_escapes_label() {
        let code = render(FileKind::Story, "bob's card", &GenerationConfig::new()).unwrap();
        assert!(code.contains(r"storiesOf('Bob\'s card', module)"));
        assert!(code.contains("<BobSCard />"));
    }

    #[test]
    fn test_native_story_is_unsupported() {
        let config = GenerationConfig::new().framework(Framework::Native);
        let err = render(FileKind::Story, "button", &config).unwrap_err();
        assert!(matches!(err, Error::UnsupportedVariant { .. }));
    }

    #[test]
    fn test_unknown_kind_is_unsupported() {
        let result = FileKind::from_str("stylesheet")
            .and_then(|kind| render(kind, "button", &GenerationConfig::new()));
        assert!(matches!(result, Err(Error::UnsupportedVariant { .. })));
    }

    #[test]
    fn test_degenerate_name() {
        for kind in FileKind::ALL {
            assert_eq!(
                render(kind, "---", &GenerationConfig::new()),
                Err(Error::DegenerateName {
                    name: "---".to_string()
                })
            );
        }
    }

    #[test]
    fn test_folder_index_preserves_order() {
        let code = render_folder_index(&["alpha", "beta", "gamma"]).unwrap();
        assert_eq!(
            code,
            "import alpha from './alpha';\n\
             import beta from './beta';\n\
             import gamma from './gamma';\n\
             \n\
             export {\n  alpha, \n  beta, \n  gamma\n};\n"
        );
    }

    #[test]
    fn test_folder_index_keeps_caller_order() {
        let code = render_folder_index(&["zeta", "alpha"]).unwrap();
        let zeta = code.find("import zeta").unwrap();
        let alpha = code.find("import alpha").unwrap();
        assert!(zeta < alpha);
        assert!(code.contains("  zeta, \n  alpha\n};"));
    }

    #[test]
    fn test_folder_index_binds_non_identifier_folders() {
        let code = render_folder_index(&["date-picker"]).unwrap();
        assert!(code.contains("import datePicker from './date-picker';"));
    }

    #[test]
    fn test_folder_index_rejects_colliding_bindings() {
        let err = render_folder_index(&["date-picker", "datePicker"]).unwrap_err();
        assert_eq!(
            err,
            Error::UnsupportedVariant {
                variant: "datePicker".to_string(),
                reason: "binding 'datePicker' is already used by folder 'date-picker'".to_string(),
            }
        );
    }

    #[test]
    fn test_folder_index_rejects_reserved_bindings() {
        for folder in ["new", "class", "default"] {
            let err = render_folder_index(&["button", folder]).unwrap_err();
            assert!(
                matches!(&err, Error::UnsupportedVariant { variant, .. } if variant == folder),
                "accepted {folder:?}"
            );
        }
        assert!(render_folder_index(&["newsletter", "New"]).is_ok());
    }

    #[test]
    fn test_folder_index_requires_folders() {
        let empty: [&str; 0] = [];
        assert!(matches!(
            render_folder_index(&empty),
            Err(Error::UnsupportedVariant { .. })
        ));
    }

    #[test]
    fn test_renderer_uses_its_config() {
        let renderer = Renderer::new(ts().upper_case_file(true));
        assert_eq!(renderer.config().language, Language::TypeScript);
        assert_eq!(
            renderer.render(FileKind::Index, "card").unwrap(),
            "export { default } from './Card';\n"
        );
        assert!(renderer.render_folder_index(&["card"]).is_ok());
    }
}
