use regex::Regex;
use std::sync::LazyLock;

static NAMESPACE_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bnamespace\s+([A-Za-z_][A-Za-z0-9_]*(?:\.[A-Za-z_][A-Za-z0-9_]*)*)")
        .expect("namespace declaration pattern is valid")
});

static CLASS_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^[ \t]*(?:(?:public|internal|protected|private|abstract|partial|sealed|static)\s+)*class\s+([A-Za-z_][A-Za-z0-9_]*)",
    )
    .expect("class declaration pattern is valid")
});

/// A `namespace` declaration found in source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceDeclaration {
    pub namespace: String,
    /// Byte offset of the `namespace` keyword
    pub offset: usize,
}

/// First `namespace <identifier>` declaration in `text`, with its offset
pub fn find_namespace_declaration(text: &str) -> Option<NamespaceDeclaration> {
    let captures = NAMESPACE_DECLARATION.captures(text)?;
    let keyword = captures.get(0)?;
    let name = captures.get(1)?;
    Some(NamespaceDeclaration {
        namespace: name.as_str().to_string(),
        offset: keyword.start(),
    })
}

/// Namespace declared by `text`, if any
pub fn declaration_namespace(text: &str) -> Option<String> {
    find_namespace_declaration(text).map(|d| d.namespace)
}

/// Name of the first class declared by `text`, if any.
///
/// Only a `class` keyword opening a line (after optional modifiers) counts,
/// so the word inside comments and strings is ignored.
pub fn declared_class_name(text: &str) -> Option<String> {
    CLASS_DECLARATION
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}
