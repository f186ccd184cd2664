//! Words that cannot be used as a binding in an ES module.

/// Reserved words, strict-mode future reserved words, and the names a
/// module may not bind (`arguments`, `eval`).
const RESERVED: &[&str] = &[
    "arguments", "await", "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "enum", "eval", "export", "extends", "false", "finally",
    "for", "function", "if", "implements", "import", "in", "instanceof", "interface", "let",
    "new", "null", "package", "private", "protected", "public", "return", "static", "super",
    "switch", "this", "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

/// Whether `name` cannot be bound by an `import` in module code.
pub fn is_reserved_word(name: &str) -> bool {
    RESERVED.binary_search(&name).is_ok()
}
