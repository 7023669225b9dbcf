use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::rewrite::NamespaceToken;

/// The kinds of component the Avalonia templates can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentKind {
    Window,
    UserControl,
    TemplatedControl,
    Styles,
    Resource,
}

/// A file the template generator writes for a component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub file_name: String,
    /// `None` when the file declares no namespace and is left untouched
    pub token: Option<NamespaceToken>,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 5] = [
        ComponentKind::Window,
        ComponentKind::UserControl,
        ComponentKind::TemplatedControl,
        ComponentKind::Styles,
        ComponentKind::Resource,
    ];

    /// Template short name passed to `dotnet new`
    pub fn template_id(&self) -> &'static str {
        match self {
            ComponentKind::Window => "avalonia.window",
            ComponentKind::UserControl => "avalonia.usercontrol",
            ComponentKind::TemplatedControl => "avalonia.templatedcontrol",
            ComponentKind::Styles => "avalonia.styles",
            ComponentKind::Resource => "avalonia.resource",
        }
    }

    pub fn generated_files(&self, name: &str) -> Vec<GeneratedFile> {
        match self {
            ComponentKind::Window | ComponentKind::UserControl => vec![
                GeneratedFile {
                    file_name: format!("{name}.axaml"),
                    token: Some(NamespaceToken::MarkupClass),
                },
                GeneratedFile {
                    file_name: format!("{name}.axaml.cs"),
                    token: Some(NamespaceToken::CodeNamespace),
                },
            ],
            ComponentKind::TemplatedControl => vec![
                GeneratedFile {
                    file_name: format!("{name}.axaml"),
                    token: Some(NamespaceToken::ControlsXmlns),
                },
                GeneratedFile {
                    file_name: format!("{name}.cs"),
                    token: Some(NamespaceToken::CodeNamespace),
                },
            ],
            ComponentKind::Styles | ComponentKind::Resource => vec![GeneratedFile {
                file_name: format!("{name}.axaml"),
                token: None,
            }],
        }
    }

    /// Only windows and user controls get a companion view-model
    pub fn supports_view_model(&self) -> bool {
        matches!(self, ComponentKind::Window | ComponentKind::UserControl)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Window => "window",
            ComponentKind::UserControl => "user-control",
            ComponentKind::TemplatedControl => "templated-control",
            ComponentKind::Styles => "styles",
            ComponentKind::Resource => "resource",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_ascii_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "window" => Ok(ComponentKind::Window),
            "user-control" | "usercontrol" => Ok(ComponentKind::UserControl),
            "templated-control" | "templatedcontrol" => Ok(ComponentKind::TemplatedControl),
            "styles" | "style" => Ok(ComponentKind::Styles),
            "resource" | "resource-dictionary" | "resources" => Ok(ComponentKind::Resource),
            _ => Err(format!(
                "unknown component kind '{s}' (expected one of: {})",
                ComponentKind::ALL
                    .iter()
                    .map(|k| k.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        }
    }
}

/// Whether `name` can be used as a C# class name
pub fn is_valid_component_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_component_kind() {
        assert_eq!("window".parse::<ComponentKind>(), Ok(ComponentKind::Window));
        assert_eq!(
            "UserControl".parse::<ComponentKind>(),
            Ok(ComponentKind::UserControl)
        );
        assert_eq!(
            "templated_control".parse::<ComponentKind>(),
            Ok(ComponentKind::TemplatedControl)
        );
        assert!("page".parse::<ComponentKind>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for kind in ComponentKind::ALL {
            assert_eq!(kind.to_string().parse::<ComponentKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_user_control_files() {
        let files = ComponentKind::UserControl.generated_files("SomeUserControl");
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].file_name, "SomeUserControl.axaml");
        assert_eq!(files[0].token, Some(NamespaceToken::MarkupClass));
        assert_eq!(files[1].file_name, "SomeUserControl.axaml.cs");
        assert_eq!(files[1].token, Some(NamespaceToken::CodeNamespace));
    }

    #[test]
    fn test_templated_control_uses_controls_xmlns() {
        let files = ComponentKind::TemplatedControl.generated_files("Badge");
        assert_eq!(files[0].token, Some(NamespaceToken::ControlsXmlns));
        assert_eq!(files[1].file_name, "Badge.cs");
        assert!(!ComponentKind::TemplatedControl.supports_view_model());
    }

    #[test]
    fn test_styles_are_not_rewritten() {
        let files = ComponentKind::Styles.generated_files("Theme");
        assert_eq!(files, vec![GeneratedFile {
            file_name: "Theme.axaml".to_string(),
            token: None,
        }]);
    }

    #[test]
    fn test_component_names() {
        assert!(is_valid_component_name("MainWindow"));
        assert!(is_valid_component_name("_Internal2"));
        assert!(!is_valid_component_name(""));
        assert!(!is_valid_component_name("2Fast"));
        assert!(!is_valid_component_name("Main.Window"));
        assert!(!is_valid_component_name("my-control"));
    }
}
