//! The configuration space a component is generated from.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// Target UI framework.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    /// React for the browser
    #[default]
    Web,
    /// React Native
    Native,
}

impl Framework {
    pub const ALL: [Framework; 2] = [Framework::Web, Framework::Native];

    pub fn as_str(&self) -> &'static str {
        match self {
            Framework::Web => "web",
            Framework::Native => "native",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Framework {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "web" | "react" => Ok(Framework::Web),
            "native" | "react-native" => Ok(Framework::Native),
            _ => Err(Error::InvalidOption {
                option: "framework",
                value: s.to_string(),
                expected: "web, native",
            }),
        }
    }
}

/// Component declaration style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// `class Foo extends Component`
    #[default]
    Class,
    /// `const Foo = () => ...`
    Functional,
}

impl Style {
    pub const ALL: [Style; 2] = [Style::Class, Style::Functional];

    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Class => "class",
            Style::Functional => "functional",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Style {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "class" => Ok(Style::Class),
            "functional" | "function" | "fn" => Ok(Style::Functional),
            _ => Err(Error::InvalidOption {
                option: "style",
                value: s.to_string(),
                expected: "class, functional",
            }),
        }
    }
}

/// Output language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Plain JavaScript (JSX)
    #[default]
    Plain,
    /// TypeScript (TSX)
    TypeScript,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Plain, Language::TypeScript];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Plain => "plain",
            Language::TypeScript => "typescript",
        }
    }

    /// Extension for files containing JSX (component, test, story).
    pub fn jsx_extension(&self) -> &'static str {
        match self {
            Language::Plain => "js",
            Language::TypeScript => "tsx",
        }
    }

    /// Extension for files without JSX (index).
    pub fn module_extension(&self) -> &'static str {
        match self {
            Language::Plain => "js",
            Language::TypeScript => "ts",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" | "js" | "javascript" => Ok(Language::Plain),
            "typescript" | "ts" => Ok(Language::TypeScript),
            _ => Err(Error::InvalidOption {
                option: "language",
                value: s.to_string(),
                expected: "plain, typescript",
            }),
        }
    }
}

/// Kind of file rendered for a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Component,
    Index,
    Test,
    Story,
}

impl FileKind {
    pub const ALL: [FileKind; 4] = [
        FileKind::Component,
        FileKind::Index,
        FileKind::Test,
        FileKind::Story,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FileKind::Component => "component",
            FileKind::Index => "index",
            FileKind::Test => "test",
            FileKind::Story => "story",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FileKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "component" => Ok(FileKind::Component),
            "index" => Ok(FileKind::Index),
            "test" => Ok(FileKind::Test),
            "story" | "stories" => Ok(FileKind::Story),
            _ => Err(Error::unsupported(
                s,
                "file kind must be one of: component, index, test, story",
            )),
        }
    }
}

/// Resolved options for rendering a component's files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub framework: Framework,
    pub style: Style,
    pub language: Language,
    /// Emit prop validation scaffolding
    pub with_props: bool,
    /// Whether the component file on disk uses the normalized (capitalized) name
    pub upper_case_file: bool,
}

impl GenerationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn framework(mut self, framework: Framework) -> Self {
        self.framework = framework;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_props(mut self, with_props: bool) -> Self {
        self.with_props = with_props;
        self
    }

    pub fn upper_case_file(mut self, upper_case_file: bool) -> Self {
        self.upper_case_file = upper_case_file;
        self
    }

    pub fn is_typescript(&self) -> bool {
        self.language == Language::TypeScript
    }

    /// Every combination of framework, style, language and props.
    pub fn all() -> impl Iterator<Item = GenerationConfig> {
        Framework::ALL.into_iter().flat_map(|framework| {
            Style::ALL.into_iter().flat_map(move |style| {
                Language::ALL.into_iter().flat_map(move |language| {
                    [false, true].into_iter().map(move |with_props| GenerationConfig {
                        framework,
                        style,
                        language,
                        with_props,
                        upper_case_file: false,
                    })
                })
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framework_from_str() {
        assert_eq!(Framework::from_str("web").unwrap(), Framework::Web);
        assert_eq!(Framework::from_str("React").unwrap(), Framework::Web);
        assert_eq!(Framework::from_str("native").unwrap(), Framework::Native);
        assert_eq!(
            Framework::from_str("react-native").unwrap(),
            Framework::Native
        );
        assert!(Framework::from_str("vue").is_err());
    }

    #[test]
    fn test_style_from_str() {
        assert_eq!(Style::from_str("class").unwrap(), Style::Class);
        assert_eq!(Style::from_str("fn").unwrap(), Style::Functional);
        assert!(Style::from_str("hooks").is_err());
    }

    #[test]
    fn test_language_from_str() {
        assert_eq!(Language::from_str("ts").unwrap(), Language::TypeScript);
        assert_eq!(Language::from_str("JS").unwrap(), Language::Plain);
        let err = Language::from_str("coffee").unwrap_err();
        assert_eq!(err.to_string(), "invalid language 'coffee'");
    }

    #[test]
    fn test_file_kind_from_str_unsupported() {
        assert_eq!(FileKind::from_str("stories").unwrap(), FileKind::Story);
        assert!(matches!(
            FileKind::from_str("styles"),
            Err(Error::UnsupportedVariant { .. })
        ));
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for kind in FileKind::ALL {
            assert_eq!(FileKind::from_str(&kind.to_string()).unwrap(), kind);
        }
        for language in Language::ALL {
            assert_eq!(Language::from_str(&language.to_string()).unwrap(), language);
        }
    }

    #[test]
    fn test_deserialize() {
        let native: Framework = serde_json::from_str(r#""native""#).unwrap();
        assert_eq!(native, Framework::Native);

        let ts: Language = serde_json::from_str(r#""typescript""#).unwrap();
        assert_eq!(ts, Language::TypeScript);
    }

    #[test]
    fn test_config_defaults() {
        let config = GenerationConfig::default();
        assert_eq!(config.framework, Framework::Web);
        assert_eq!(config.style, Style::Class);
        assert_eq!(config.language, Language::Plain);
        assert!(!config.with_props);
        assert!(!config.upper_case_file);
    }

    #[test]
    fn test_config_all_covers_space() {
        let all: Vec<_> = GenerationConfig::all().collect();
        assert_eq!(all.len(), 16);
        let unique: std::collections::HashSet<_> = all.iter().collect();
        assert_eq!(unique.len(), 16);
    }

    #[test]
    fn test_extensions() {
        assert_eq!(Language::Plain.jsx_extension(), "js");
        assert_eq!(Language::TypeScript.jsx_extension(), "tsx");
        assert_eq!(Language::TypeScript.module_extension(), "ts");
    }
}
