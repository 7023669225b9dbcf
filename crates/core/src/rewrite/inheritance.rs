use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::declaration::{declared_class_name, find_namespace_declaration};
use crate::error::{Error, Result};
use crate::interfaces::Logger;

/// What an injection run did to the generated file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum InjectionOutcome {
    /// No base-class file exists, nothing was touched
    NoBaseClass,
    Injected {
        base_class: String,
        /// Namespace imported with a `using` line, when one was added
        import: Option<String>,
    },
}

/// Source text after injection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectedSource {
    pub text: String,
    pub import: Option<String>,
}

/// Makes generated view-models inherit from a conventional base class.
///
/// The class is found by name only and everything between the name and `{`
/// is replaced, so an existing base list is overwritten. Call once per file.
#[derive(Debug, Clone)]
pub struct BaseClassInheritanceInjector {
    base_file_name: String,
}

impl Default for BaseClassInheritanceInjector {
    fn default() -> Self {
        Self::new("ViewModelBase.cs")
    }
}

impl BaseClassInheritanceInjector {
    pub fn new(base_file_name: impl Into<String>) -> Self {
        Self {
            base_file_name: base_file_name.into(),
        }
    }

    pub fn base_file_path(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.base_file_name)
    }

    pub fn inject(
        &self,
        generated_file: &Path,
        class_name: &str,
        base_dir: &Path,
        logger: &dyn Logger,
    ) -> Result<InjectionOutcome> {
        let base_path = self.base_file_path(base_dir);
        if !base_path.is_file() {
            logger.debug(
                "no base class file, skipping inheritance",
                &[("expected", base_path.display().to_string().as_str())],
            );
            return Ok(InjectionOutcome::NoBaseClass);
        }

        let base_text = fs::read_to_string(&base_path)?;
        let base_class = declared_class_name(&base_text).unwrap_or_else(|| {
            base_path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default()
        });
        let base_namespace = find_namespace_declaration(&base_text).map(|d| d.namespace);

        let text = fs::read_to_string(generated_file)?;
        let injected = inject_base_class(&text, class_name, &base_class, base_namespace.as_deref())?;
        fs::write(generated_file, &injected.text)?;

        logger.info(
            "base class injected",
            &[
                ("file", generated_file.display().to_string().as_str()),
                ("class", class_name),
                ("base", base_class.as_str()),
                ("import", injected.import.as_deref().unwrap_or("")),
            ],
        );

        Ok(InjectionOutcome::Injected {
            base_class,
            import: injected.import,
        })
    }
}

/// Add `: <base_class>` to `class <class_name>` and, when the base class
/// lives in another namespace, a `using` line before the namespace
/// declaration.
pub fn inject_base_class(
    text: &str,
    class_name: &str,
    base_class: &str,
    base_namespace: Option<&str>,
) -> Result<InjectedSource> {
    let mut text = text.to_string();
    let mut import = None;

    if let (Some(base_namespace), Some(declaration)) =
        (base_namespace, find_namespace_declaration(&text))
    {
        let using = format!("using {base_namespace};");
        if declaration.namespace != base_namespace && !text.contains(&using) {
            text.insert_str(declaration.offset, &format!("{using}\n\n"));
            import = Some(base_namespace.to_string());
        }
    }

    let not_found = || Error::DeclarationNotFound {
        class_name: class_name.to_string(),
    };
    let start = find_class_declaration(&text, class_name).ok_or_else(not_found)?;
    let brace = text[start..]
        .find('{')
        .map(|index| start + index)
        .ok_or_else(not_found)?;

    // Whitespace right before the brace is kept so the layout survives
    let header = &text[start..brace];
    let trailing = &header[header.trim_end().len()..];

    let mut result = String::with_capacity(text.len() + base_class.len() + 3);
    result.push_str(&text[..start]);
    result.push_str(&format!("class {class_name} : {base_class}"));
    result.push_str(trailing);
    result.push_str(&text[brace..]);

    Ok(InjectedSource {
        text: result,
        import,
    })
}

/// Byte offset of the `class` keyword declaring `class_name`
fn find_class_declaration(text: &str, class_name: &str) -> Option<usize> {
    let mut search_from = 0;
    while let Some(found) = text[search_from..].find("class") {
        let start = search_from + found;
        search_from = start + "class".len();

        let standalone = text[..start]
            .chars()
            .next_back()
            .is_none_or(|c| c.is_whitespace());
        let rest = &text[search_from..];
        let name_part = rest.trim_start();
        if !standalone || name_part.len() == rest.len() {
            continue;
        }

        if let Some(after) = name_part.strip_prefix(class_name) {
            let ends_name = after
                .chars()
                .next()
                .is_none_or(|c| !(c.is_alphanumeric() || c == '_'));
            if ends_name {
                return Some(start);
            }
        }
    }
    None
}
