//! Closed set of component template variants.

use forma_core::{Framework, GenerationConfig, Style};

/// One component template body.
///
/// Selected from framework, style and the props flag. The output language
/// is not part of the variant: it only changes import syntax and type
/// annotations, which the component template applies on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentVariant {
    WebClass,
    WebClassWithProps,
    WebFunctional,
    WebFunctionalWithProps,
    NativeClass,
    NativeClassWithProps,
    NativeFunctional,
    NativeFunctionalWithProps,
}

impl ComponentVariant {
    pub const ALL: [ComponentVariant; 8] = [
        ComponentVariant::WebClass,
        ComponentVariant::WebClassWithProps,
        ComponentVariant::WebFunctional,
        ComponentVariant::WebFunctionalWithProps,
        ComponentVariant::NativeClass,
        ComponentVariant::NativeClassWithProps,
        ComponentVariant::NativeFunctional,
        ComponentVariant::NativeFunctionalWithProps,
    ];

    /// Resolve the variant for a configuration.
    pub fn select(config: &GenerationConfig) -> Self {
        use ComponentVariant::*;

        match (config.framework, config.style, config.with_props) {
            (Framework::Web, Style::Class, false) => WebClass,
            (Framework::Web, Style::Class, true) => WebClassWithProps,
            (Framework::Web, Style::Functional, false) => WebFunctional,
            (Framework::Web, Style::Functional, true) => WebFunctionalWithProps,
            (Framework::Native, Style::Class, false) => NativeClass,
            (Framework::Native, Style::Class, true) => NativeClassWithProps,
            (Framework::Native, Style::Functional, false) => NativeFunctional,
            (Framework::Native, Style::Functional, true) => NativeFunctionalWithProps,
        }
    }

    pub fn framework(&self) -> Framework {
        use ComponentVariant::*;

        match self {
            WebClass | WebClassWithProps | WebFunctional | WebFunctionalWithProps => {
                Framework::Web
            }
            NativeClass | NativeClassWithProps | NativeFunctional | NativeFunctionalWithProps => {
                Framework::Native
            }
        }
    }

    pub fn style(&self) -> Style {
        use ComponentVariant::*;

        match self {
            WebClass | WebClassWithProps | NativeClass | NativeClassWithProps => Style::Class,
            WebFunctional | WebFunctionalWithProps | NativeFunctional
            | NativeFunctionalWithProps => Style::Functional,
        }
    }

    pub fn has_props(&self) -> bool {
        use ComponentVariant::*;

        match self {
            WebClassWithProps
            | WebFunctionalWithProps
            | NativeClassWithProps
            | NativeFunctionalWithProps => true,
            WebClass | WebFunctional | NativeClass | NativeFunctional => false,
        }
    }

    /// The single prop scaffolded by the props variants.
    ///
    /// Web components get a `className`, native ones a `testID`.
    pub fn prop_name(&self) -> Option<&'static str> {
        if !self.has_props() {
            return None;
        }
        match self.framework() {
            Framework::Web => Some("className"),
            Framework::Native => Some("testID"),
        }
    }

    pub fn as_str(&self) -> &'static str {
        use ComponentVariant::*;

        match self {
            WebClass => "web-class",
            WebClassWithProps => "web-class-props",
            WebFunctional => "web-functional",
            WebFunctionalWithProps => "web-functional-props",
            NativeClass => "native-class",
            NativeClassWithProps => "native-class-props",
            NativeFunctional => "native-functional",
            NativeFunctionalWithProps => "native-functional-props",
        }
    }
}
