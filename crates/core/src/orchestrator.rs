//! Drives one scaffold request from root discovery to the view-model

use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::{
    config::Config,
    error::{Error, Result},
    interfaces::{GeneratorOutput, Logger, ScaffoldGenerator},
    namespace::{NamespaceBuilder, NamespacePair},
    project::{ProjectRoot, ProjectRootLocator},
    rewrite::{BaseClassInheritanceInjector, InjectionOutcome, NamespaceToken, rewrite_file},
    types::{ComponentKind, is_valid_component_name},
};

/// Placeholder namespace the companion template is written with
const VIEW_MODEL_TEMPLATE_NAMESPACE: &str = "ViewModels";

#[derive(Debug, Clone)]
pub struct ScaffoldRequest {
    pub kind: ComponentKind,
    pub name: String,
    pub target_dir: PathBuf,
    /// Where the project root search starts, usually the workspace folder
    pub search_root: PathBuf,
    pub with_view_model: bool,
}

/// Everything a request will do, computed without touching the disk
#[derive(Debug, Clone, Serialize)]
pub struct ScaffoldPlan {
    pub project_root: ProjectRoot,
    pub target_dir: PathBuf,
    pub generator_command: String,
    pub namespaces: NamespacePair,
    pub files: Vec<PathBuf>,
    pub view_model: Option<ViewModelPlan>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ViewModelPlan {
    pub class_name: String,
    pub path: PathBuf,
    pub namespaces: NamespacePair,
    /// Folder searched for the base-class file
    pub base_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScaffoldReport {
    pub project_root: ProjectRoot,
    pub namespaces: NamespacePair,
    pub generator_output: GeneratorOutput,
    pub rewritten: Vec<PathBuf>,
    pub view_model: Option<ViewModelReport>,
    /// Set when the view-model step failed after the component was written
    pub view_model_error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ViewModelReport {
    pub path: PathBuf,
    pub namespaces: NamespacePair,
    pub injection: InjectionOutcome,
}

pub struct ScaffoldOrchestrator<G> {
    config: Config,
    generator: G,
    locator: ProjectRootLocator,
    injector: BaseClassInheritanceInjector,
}

impl<G: ScaffoldGenerator> ScaffoldOrchestrator<G> {
    pub fn new(config: Config, generator: G) -> Self {
        let locator = ProjectRootLocator::new(config.markers());
        let injector = BaseClassInheritanceInjector::new(config.base_class_file.clone());
        Self {
            config,
            generator,
            locator,
            injector,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Resolve the root and every namespace the request needs
    pub fn plan(&self, request: &ScaffoldRequest, logger: &dyn Logger) -> Result<ScaffoldPlan> {
        if !is_valid_component_name(&request.name) {
            return Err(Error::InvalidName(request.name.clone()));
        }

        let search_root = absolute(&request.search_root)?;
        let target_dir = absolute(&request.target_dir)?;

        let project_root = self.locator.locate(&search_root, logger)?;
        let namespaces = NamespaceBuilder::build_pair(&target_dir, &project_root, &request.name)?;
        logger.debug(
            "component namespace",
            &[
                ("full", namespaces.full_namespace.as_str()),
                ("code", namespaces.code_namespace.as_str()),
            ],
        );

        let files = request
            .kind
            .generated_files(&request.name)
            .into_iter()
            .map(|f| target_dir.join(f.file_name))
            .collect();

        let view_model = if request.with_view_model && request.kind.supports_view_model() {
            Some(self.plan_view_model(&project_root, &target_dir, &request.name)?)
        } else {
            if request.with_view_model {
                logger.warn(
                    "component kind has no view-model, skipping",
                    &[("kind", request.kind.as_str())],
                );
            }
            None
        };

        Ok(ScaffoldPlan {
            generator_command: self
                .generator
                .describe(request.kind.template_id(), &request.name),
            project_root,
            target_dir,
            namespaces,
            files,
            view_model,
        })
    }

    /// Generate the component, fix its namespaces and add the view-model.
    ///
    /// A failing view-model step is recorded in the report; the component
    /// files written before it stay as they are.
    pub fn scaffold(&self, request: &ScaffoldRequest, logger: &dyn Logger) -> Result<ScaffoldReport> {
        let plan = self.plan(request, logger)?;

        fs::create_dir_all(&plan.target_dir)?;
        let generator_output = self.generator.generate(
            request.kind.template_id(),
            &request.name,
            &plan.target_dir,
            logger,
        )?;

        let mut rewritten = Vec::new();
        for file in request.kind.generated_files(&request.name) {
            let path = plan.target_dir.join(&file.file_name);
            let Some(token) = file.token else {
                logger.debug(
                    "file carries no namespace",
                    &[("file", path.display().to_string().as_str())],
                );
                continue;
            };
            rewrite_file(
                &path,
                token.start_marker(),
                token.end_marker(),
                token.select(&plan.namespaces),
                logger,
            )?;
            rewritten.push(path);
        }

        let (view_model, view_model_error) = match &plan.view_model {
            Some(vm_plan) => match self.create_view_model(vm_plan, logger) {
                Ok(report) => (Some(report), None),
                Err(err) => {
                    logger.warn(
                        "view-model step failed",
                        &[("error", err.to_string().as_str())],
                    );
                    (None, Some(err.to_string()))
                }
            },
            None => (None, None),
        };

        Ok(ScaffoldReport {
            project_root: plan.project_root,
            namespaces: plan.namespaces,
            generator_output,
            rewritten,
            view_model,
            view_model_error,
        })
    }

    fn plan_view_model(
        &self,
        project_root: &ProjectRoot,
        target_dir: &Path,
        name: &str,
    ) -> Result<ViewModelPlan> {
        let (dir, base_dir) = mirror_view_model_dir(
            project_root,
            target_dir,
            &self.config.views_folder,
            &self.config.view_models_folder,
        )?;
        let class_name = format!("{name}{}", self.config.view_model_suffix);
        let namespaces = NamespaceBuilder::build_pair(&dir, project_root, &class_name)?;

        Ok(ViewModelPlan {
            path: dir.join(format!("{class_name}.cs")),
            class_name,
            namespaces,
            base_dir,
        })
    }

    fn create_view_model(&self, plan: &ViewModelPlan, logger: &dyn Logger) -> Result<ViewModelReport> {
        if plan.path.exists() {
            return Err(Error::IoError(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} already exists", plan.path.display()),
            )));
        }

        if let Some(dir) = plan.path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&plan.path, view_model_source(&plan.class_name))?;

        let token = NamespaceToken::CodeNamespace;
        rewrite_file(
            &plan.path,
            token.start_marker(),
            token.end_marker(),
            token.select(&plan.namespaces),
            logger,
        )?;

        let injection = self
            .injector
            .inject(&plan.path, &plan.class_name, &plan.base_dir, logger)?;

        Ok(ViewModelReport {
            path: plan.path.clone(),
            namespaces: plan.namespaces.clone(),
            injection,
        })
    }
}

/// Companion source before its namespace is rewritten
pub fn view_model_source(class_name: &str) -> String {
    format!(
        "namespace {VIEW_MODEL_TEMPLATE_NAMESPACE};\n\npublic partial class {class_name}\n{{\n}}\n"
    )
}

/// Mirror a views folder into the view-models tree.
///
/// The first `views` segment below the root becomes `view_models`; with no
/// such segment the whole relative path is placed under `view_models`.
/// Returns the companion folder and the view-models folder that holds the
/// base class.
pub fn mirror_view_model_dir(
    root: &ProjectRoot,
    target_dir: &Path,
    views: &str,
    view_models: &str,
) -> Result<(PathBuf, PathBuf)> {
    let segments = NamespaceBuilder::relative_segments(target_dir, &root.path)?;

    let (prefix, rest) = match segments.iter().position(|s| s == views) {
        Some(index) => (&segments[..index], &segments[index + 1..]),
        None => (&segments[..0], &segments[..]),
    };

    let mut base_dir = root.path.clone();
    base_dir.extend(prefix);
    base_dir.push(view_models);

    let mut dir = base_dir.clone();
    dir.extend(rest);

    Ok((dir, base_dir))
}

/// Absolute form of `path` with its existing part canonicalized, so it can
/// be compared against a canonical project root even before it is created
fn absolute(path: &Path) -> Result<PathBuf> {
    let path = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    let mut existing = path.as_path();
    let mut missing = Vec::new();
    while !existing.exists() {
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                missing.push(name.to_os_string());
                existing = parent;
            }
            _ => return Ok(path.clone()),
        }
    }

    let mut resolved = existing.canonicalize()?;
    resolved.extend(missing.iter().rev());
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root(path: &str) -> ProjectRoot {
        ProjectRoot {
            path: PathBuf::from(path),
            is_solution_root: false,
            project_name: "App".to_string(),
        }
    }

    #[test]
    fn test_mirror_replaces_views_segment() {
        let (dir, base_dir) = mirror_view_model_dir(
            &root("/proj"),
            Path::new("/proj/Views/UserControls"),
            "Views",
            "ViewModels",
        )
        .unwrap();

        assert_eq!(dir, PathBuf::from("/proj/ViewModels/UserControls"));
        assert_eq!(base_dir, PathBuf::from("/proj/ViewModels"));
    }

    #[test]
    fn test_mirror_keeps_project_folder_under_solution() {
        let (dir, base_dir) = mirror_view_model_dir(
            &root("/repo"),
            Path::new("/repo/App/Views"),
            "Views",
            "ViewModels",
        )
        .unwrap();

        assert_eq!(dir, PathBuf::from("/repo/App/ViewModels"));
        assert_eq!(base_dir, PathBuf::from("/repo/App/ViewModels"));
    }

    #[test]
    fn test_mirror_without_views_segment() {
        let (dir, base_dir) = mirror_view_model_dir(
            &root("/proj"),
            Path::new("/proj/Controls/Cards"),
            "Views",
            "ViewModels",
        )
        .unwrap();

        assert_eq!(dir, PathBuf::from("/proj/ViewModels/Controls/Cards"));
        assert_eq!(base_dir, PathBuf::from("/proj/ViewModels"));
    }

    #[test]
    fn test_view_model_source() {
        insta::assert_snapshot!(view_model_source("MainWindowViewModel"), @r"
        namespace ViewModels;

        public partial class MainWindowViewModel
        {
        }
        ");
    }
}
