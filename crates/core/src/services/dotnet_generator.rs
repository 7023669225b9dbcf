//! `dotnet new` backed template generator

use std::path::Path;

use crate::{
    command::GeneratorCommand,
    config::Config,
    error::{Error, Result},
    interfaces::{GeneratorOutput, Logger, ScaffoldGenerator},
};

/// Output fragments meaning the workspace is not restored yet and the run
/// can be repeated with `--force`. The "existing files" hint that also
/// mentions `--force` must not match: forcing it overwrites user files.
const FORCE_RETRY_SIGNATURES: &[&str] = &["not yet restored", "has not been restored"];

pub struct DotnetGenerator {
    program: String,
    base_args: Vec<String>,
}

impl Default for DotnetGenerator {
    fn default() -> Self {
        Self::new("dotnet", vec!["new".to_string()])
    }
}

impl DotnetGenerator {
    pub fn new(program: impl Into<String>, base_args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            base_args,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.generator_command.clone(), config.generator_args.clone())
    }

    pub fn command(&self, template: &str, name: &str, cwd: &Path) -> GeneratorCommand {
        let mut args = self.base_args.clone();
        args.extend([template.to_string(), "-n".to_string(), name.to_string()]);
        GeneratorCommand::new(self.program.clone(), args).with_working_dir(cwd.to_path_buf())
    }

    fn run(&self, command: &GeneratorCommand, template: &str) -> Result<RunResult> {
        let output = command.execute().map_err(|e| Error::GeneratorFailed {
            template: template.to_string(),
            message: format!("could not start '{}': {e}", self.program),
        })?;

        Ok(RunResult {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

struct RunResult {
    success: bool,
    stdout: String,
    stderr: String,
}

impl RunResult {
    fn message(&self) -> String {
        let stderr = self.stderr.trim();
        if stderr.is_empty() {
            self.stdout.trim().to_string()
        } else {
            stderr.to_string()
        }
    }
}

/// Whether a failed run's output asks for a forced rerun
pub fn needs_forced_retry(stdout: &str, stderr: &str) -> bool {
    let output = format!("{stdout}\n{stderr}").to_lowercase();
    FORCE_RETRY_SIGNATURES
        .iter()
        .any(|signature| output.contains(signature))
}

impl ScaffoldGenerator for DotnetGenerator {
    fn generate(
        &self,
        template: &str,
        name: &str,
        cwd: &Path,
        logger: &dyn Logger,
    ) -> Result<GeneratorOutput> {
        let command = self.command(template, name, cwd);
        let shell_command = command.to_shell_command();
        logger.info(
            "running template generator",
            &[
                ("command", shell_command.as_str()),
                ("cwd", cwd.display().to_string().as_str()),
            ],
        );

        let first = self.run(&command, template)?;
        if first.success {
            return Ok(GeneratorOutput {
                stdout: first.stdout,
                stderr: first.stderr,
                forced: false,
            });
        }

        if !needs_forced_retry(&first.stdout, &first.stderr) {
            return Err(Error::GeneratorFailed {
                template: template.to_string(),
                message: first.message(),
            });
        }

        logger.warn(
            "generator asked for a forced run, retrying once",
            &[("output", first.message().as_str())],
        );
        let forced = self.run(&command.with_arg("--force"), template)?;
        if forced.success {
            Ok(GeneratorOutput {
                stdout: forced.stdout,
                stderr: forced.stderr,
                forced: true,
            })
        } else {
            Err(Error::GeneratorFailed {
                template: template.to_string(),
                message: forced.message(),
            })
        }
    }

    fn describe(&self, template: &str, name: &str) -> String {
        self.command(template, name, Path::new("."))
            .to_shell_command()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::RecordingLogger;
    use std::path::PathBuf;

    #[test]
    fn test_command_layout() {
        let generator = DotnetGenerator::default();
        let cmd = generator.command("avalonia.usercontrol", "Card", Path::new("/proj/Views"));

        assert_eq!(cmd.program, "dotnet");
        assert_eq!(cmd.args, vec!["new", "avalonia.usercontrol", "-n", "Card"]);
        assert_eq!(cmd.working_dir, Some(PathBuf::from("/proj/Views")));
        assert_eq!(
            generator.describe("avalonia.usercontrol", "Card"),
            "dotnet new avalonia.usercontrol -n Card"
        );
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            generator_command: "/opt/dotnet/dotnet".to_string(),
            ..Default::default()
        };
        let cmd = DotnetGenerator::from_config(&config).command("avalonia.window", "W", Path::new("."));
        assert_eq!(cmd.program, "/opt/dotnet/dotnet");
    }

    #[test]
    fn test_retry_signatures() {
        assert!(needs_forced_retry("", "The project has not been restored."));
        assert!(needs_forced_retry("Workspace NOT YET RESTORED", ""));
        assert!(!needs_forced_retry(
            "Creating this template will make changes to existing files.\nRerun the command and pass --force to accept and create.",
            ""
        ));
        assert!(!needs_forced_retry("", "No templates found matching: 'avalonia.window'."));
    }

    #[cfg(unix)]
    mod process {
        use super::*;
        use tempfile::TempDir;

        // `sh -c <script> sh <template> -n <name> [--force]`
        fn shell_generator(script: &str) -> DotnetGenerator {
            DotnetGenerator::new(
                "sh",
                vec!["-c".to_string(), script.to_string(), "sh".to_string()],
            )
        }

        #[test]
        fn test_successful_run() {
            let temp_dir = TempDir::new().unwrap();
            let generator = shell_generator(r#"touch "$3.axaml"; echo created"#);

            let output = generator
                .generate("avalonia.window", "MainWindow", temp_dir.path(), &RecordingLogger::new())
                .unwrap();

            assert!(!output.forced);
            assert_eq!(output.stdout.trim(), "created");
            assert!(temp_dir.path().join("MainWindow.axaml").exists());
        }

        #[test]
        fn test_retries_once_with_force() {
            let temp_dir = TempDir::new().unwrap();
            let generator = shell_generator(
                r#"if [ "$4" = "--force" ]; then touch "$3.axaml"; else echo "project has not been restored" >&2; exit 1; fi"#,
            );
            let logger = RecordingLogger::new();

            let output = generator
                .generate("avalonia.window", "MainWindow", temp_dir.path(), &logger)
                .unwrap();

            assert!(output.forced);
            assert!(temp_dir.path().join("MainWindow.axaml").exists());
            assert_eq!(logger.find("retrying once").len(), 1);
        }

        #[test]
        fn test_forced_retry_failure_is_reported() {
            let temp_dir = TempDir::new().unwrap();
            let generator = shell_generator(r#"echo "has not been restored" >&2; exit 1"#);

            let err = generator
                .generate("avalonia.window", "MainWindow", temp_dir.path(), &RecordingLogger::new())
                .unwrap_err();

            assert!(matches!(err, Error::GeneratorFailed { .. }));
        }

        #[test]
        fn test_other_failures_are_not_retried() {
            let temp_dir = TempDir::new().unwrap();
            let generator = shell_generator(
                r#"echo run >> runs.txt; echo "No templates found" >&2; exit 1"#,
            );

            let err = generator
                .generate("avalonia.window", "MainWindow", temp_dir.path(), &RecordingLogger::new())
                .unwrap_err();

            match err {
                Error::GeneratorFailed { template, message } => {
                    assert_eq!(template, "avalonia.window");
                    assert_eq!(message, "No templates found");
                }
                other => panic!("unexpected error: {other}"),
            }
            let runs = std::fs::read_to_string(temp_dir.path().join("runs.txt")).unwrap();
            assert_eq!(runs.lines().count(), 1);
        }

        #[test]
        fn test_existing_files_are_not_overwritten() {
            let temp_dir = TempDir::new().unwrap();
            let existing = temp_dir.path().join("MainWindow.axaml");
            std::fs::write(&existing, "USER CONTENT").unwrap();
            let generator = shell_generator(
                r#"if [ "$4" = "--force" ]; then echo TEMPLATE > "$3.axaml"; else echo "Creating this template will make changes to existing files:"; echo "Rerun the command and pass --force to accept and create." >&2; exit 73; fi"#,
            );
            let logger = RecordingLogger::new();

            let err = generator
                .generate("avalonia.window", "MainWindow", temp_dir.path(), &logger)
                .unwrap_err();

            assert!(matches!(err, Error::GeneratorFailed { .. }));
            assert_eq!(std::fs::read_to_string(&existing).unwrap(), "USER CONTENT");
            assert!(logger.find("retrying once").is_empty());
        }

        #[test]
        fn test_missing_program() {
            let generator = DotnetGenerator::new("definitely-not-a-real-generator", vec![]);
            let err = generator
                .generate("t", "N", Path::new("."), &RecordingLogger::new())
                .unwrap_err();
            assert!(err.to_string().contains("could not start"));
        }
    }
}
