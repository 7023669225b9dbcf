use std::io;
use std::path::PathBuf;
use std::process::{Command, Output};

/// A fully spelled-out invocation of the template generator
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorCommand {
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: Option<PathBuf>,
}

impl GeneratorCommand {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            working_dir: None,
        }
    }

    pub fn with_working_dir(mut self, dir: PathBuf) -> Self {
        self.working_dir = Some(dir);
        self
    }

    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn to_shell_command(&self) -> String {
        let mut cmd = quote(&self.program);
        for arg in &self.args {
            cmd.push(' ');
            cmd.push_str(&quote(arg));
        }
        cmd
    }

    /// Run to completion and capture stdout/stderr
    pub fn execute(&self) -> io::Result<Output> {
        let mut command = Command::new(&self.program);
        command.args(&self.args);

        if let Some(ref dir) = self.working_dir {
            command.current_dir(dir);
        }

        command.output()
    }
}

/// POSIX single-quoting for display; plain words are left as they are
fn quote(arg: &str) -> String {
    let is_plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=@,+%".contains(c));
    if is_plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_shell_command() {
        let cmd = GeneratorCommand::new(
            "dotnet",
            vec![
                "new".to_string(),
                "avalonia.window".to_string(),
                "-n".to_string(),
                "MainWindow".to_string(),
            ],
        );
        assert_eq!(cmd.to_shell_command(), "dotnet new avalonia.window -n MainWindow");
    }

    #[test]
    fn test_arguments_with_spaces_are_quoted() {
        let cmd = GeneratorCommand::new("dotnet", vec!["new".to_string()])
            .with_arg("my template")
            .with_arg("--force");
        assert_eq!(cmd.to_shell_command(), "dotnet new 'my template' --force");
    }

    #[test]
    fn test_shell_metacharacters_are_quoted() {
        let cmd = GeneratorCommand::new("dotnet", vec![])
            .with_arg("it's")
            .with_arg("a;b")
            .with_arg("$HOME")
            .with_arg("");
        assert_eq!(cmd.to_shell_command(), r"dotnet 'it'\''s' 'a;b' '$HOME' ''");
    }

    #[test]
    fn test_with_working_dir() {
        let cmd = GeneratorCommand::new("dotnet", vec![]).with_working_dir(PathBuf::from("/proj"));
        assert_eq!(cmd.working_dir, Some(PathBuf::from("/proj")));
    }
}
