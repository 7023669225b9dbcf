//! Namespace-bearing tokens written by the Avalonia templates

use crate::namespace::NamespacePair;

/// Where a generated file carries its namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamespaceToken {
    /// `x:Class="<namespace>.<Name>"` in a markup file
    MarkupClass,
    /// `xmlns:controls="using:<namespace>"` in a templated control's styles
    ControlsXmlns,
    /// `namespace <namespace>;` in a code file
    CodeNamespace,
}

impl NamespaceToken {
    pub fn start_marker(&self) -> &'static str {
        match self {
            NamespaceToken::MarkupClass => "x:Class=\"",
            NamespaceToken::ControlsXmlns => "xmlns:controls=\"using:",
            NamespaceToken::CodeNamespace => "namespace ",
        }
    }

    pub fn end_marker(&self) -> &'static str {
        match self {
            NamespaceToken::MarkupClass | NamespaceToken::ControlsXmlns => "\"",
            NamespaceToken::CodeNamespace => ";",
        }
    }

    /// Pick the namespace string this token should carry
    pub fn select<'a>(&self, pair: &'a NamespacePair) -> &'a str {
        match self {
            NamespaceToken::MarkupClass => &pair.full_namespace,
            NamespaceToken::ControlsXmlns | NamespaceToken::CodeNamespace => {
                &pair.code_namespace
            }
        }
    }
}
