//! Component body template.

use forma_core::{Framework, Language, Style};

use super::{ComponentNames, ComponentVariant};
use crate::{
    CodeFile,
    ast::{Export, Import, string_literal},
    builder::CodeFragment,
};

/// Build the component module for a variant in the given language.
pub(crate) fn component_file(
    names: &ComponentNames,
    variant: ComponentVariant,
    language: Language,
) -> CodeFile {
    let name = names.identifier.as_str();

    let mut body = Vec::new();
    if let (Language::TypeScript, Some(prop)) = (language, variant.prop_name()) {
        body.push(props_interface(name, prop));
    }
    match variant.style() {
        Style::Class => body.push(class_declaration(name, variant, language)),
        Style::Functional => {
            body.push(functional_declaration(name, variant, language));
            if let Some(prop) = variant.prop_name() {
                body.push(prop_types_block(&format!("{}.propTypes", name), prop));
                body.push(default_props_block(
                    &format!("{}.defaultProps", name),
                    prop,
                    name,
                ));
            }
        }
    }

    CodeFile::new()
        .import(react_import(variant, language))
        .import_if(variant.framework() == Framework::Native, || {
            Import::new("react-native").named("View").named("Text")
        })
        .import_if(variant.has_props(), || prop_types_import(language))
        .add_all(body)
        .export(Export::default_of(name))
}

fn react_import(variant: ComponentVariant, language: Language) -> Import {
    let react = Import::new("react");
    match language {
        Language::TypeScript => react.namespace("React"),
        Language::Plain => match (variant.style(), variant.has_props()) {
            (Style::Class, false) => react.default("React").named("Component"),
            (Style::Class, true) => react.default("React").named("PureComponent"),
            (Style::Functional, _) => react.default("React"),
        },
    }
}

fn prop_types_import(language: Language) -> Import {
    let prop_types = Import::new("prop-types");
    match language {
        Language::TypeScript => prop_types.namespace("PropTypes"),
        Language::Plain => prop_types.default("PropTypes"),
    }
}

fn props_interface_name(name: &str) -> String {
    format!("{}Props", name)
}

fn props_interface(name: &str, prop: &str) -> Vec<CodeFragment> {
    vec![CodeFragment::block(
        format!("interface {} {{", props_interface_name(name)),
        vec![CodeFragment::line(format!("{}?: string;", prop))],
        "}",
    )]
}

fn prop_types_block(target: &str, prop: &str) -> Vec<CodeFragment> {
    vec![CodeFragment::block(
        format!("{} = {{", target),
        vec![CodeFragment::line(format!("{}: PropTypes.string,", prop))],
        "};",
    )]
}

fn default_props_block(target: &str, prop: &str, name: &str) -> Vec<CodeFragment> {
    vec![CodeFragment::block(
        format!("{} = {{", target),
        vec![CodeFragment::line(format!(
            "{}: {},",
            prop,
            string_literal(name)
        ))],
        "};",
    )]
}

/// The `return` statement shared by class `render()` and function bodies.
fn markup(name: &str, variant: ComponentVariant) -> Vec<CodeFragment> {
    match (variant.framework(), variant.prop_name()) {
        (Framework::Web, None) => vec![CodeFragment::block(
            "return (",
            vec![CodeFragment::block(
                "<React.Fragment>",
                vec![CodeFragment::line(name)],
                "</React.Fragment>",
            )],
            ");",
        )],
        (Framework::Web, Some(prop)) => vec![CodeFragment::line(format!(
            "return <span {prop}={{{prop}}}>{name}</span>;"
        ))],
        (Framework::Native, prop) => {
            let open = match prop {
                Some(prop) => format!("<View {prop}={{{prop}}}>"),
                None => "<View>".to_string(),
            };
            vec![CodeFragment::block(
                "return (",
                vec![CodeFragment::block(
                    open,
                    vec![CodeFragment::line(format!("<Text>{}</Text>", name))],
                    "</View>",
                )],
                ");",
            )]
        }
    }
}

fn class_declaration(
    name: &str,
    variant: ComponentVariant,
    language: Language,
) -> Vec<CodeFragment> {
    let base = match (language, variant.has_props()) {
        (Language::Plain, false) => "Component".to_string(),
        (Language::Plain, true) => "PureComponent".to_string(),
        (Language::TypeScript, false) => "React.Component<any, any>".to_string(),
        (Language::TypeScript, true) => {
            format!("React.PureComponent<{}>", props_interface_name(name))
        }
    };

    let mut members = Vec::new();
    let mut render_body = Vec::new();
    if let Some(prop) = variant.prop_name() {
        members.extend(prop_types_block("static propTypes", prop));
        members.push(CodeFragment::blank());
        members.extend(default_props_block("static defaultProps", prop, name));
        members.push(CodeFragment::blank());
        render_body.push(CodeFragment::line(format!(
            "const {{ {} }} = this.props;",
            prop
        )));
    }
    render_body.extend(markup(name, variant));

    let render_header = match language {
        Language::Plain => "render() {",
        Language::TypeScript => "public render() {",
    };
    members.push(CodeFragment::block(render_header, render_body, "}"));

    vec![CodeFragment::block(
        format!("class {} extends {} {{", name, base),
        members,
        "}",
    )]
}

fn functional_declaration(
    name: &str,
    variant: ComponentVariant,
    language: Language,
) -> Vec<CodeFragment> {
    let header = match (language, variant.prop_name()) {
        (Language::Plain, None) => format!("const {} = () => {{", name),
        (Language::Plain, Some(prop)) => format!("const {} = ({{ {} }}) => {{", name, prop),
        (Language::TypeScript, None) => format!("const {}: React.FC = () => {{", name),
        (Language::TypeScript, Some(prop)) => format!(
            "const {}: React.FC<{}> = ({{ {} }}) => {{",
            name,
            props_interface_name(name),
            prop
        ),
    };

    vec![CodeFragment::block(header, markup(name, variant), "};")]
}
