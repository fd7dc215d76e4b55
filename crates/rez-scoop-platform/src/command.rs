use crate::error::{Error, Result};
use crate::shell::Shell;
use std::ffi::OsStr;
use std::process::{Child, Command as StdCommand, Output, Stdio};

/// Builder over `std::process::Command` that keeps the program name for
/// error reporting.
#[derive(Debug)]
pub struct Command {
    inner: StdCommand,
    program: String,
}

impl Command {
    pub fn new(program: impl Into<String>) -> Self {
        let program = program.into();
        Self {
            inner: StdCommand::new(&program),
            program,
        }
    }

    /// Re-target the command so the original program string runs as a
    /// script inside the given shell.
    pub fn run_in_shell(mut self, shell: Shell) -> Self {
        let script = self.program.clone();
        let mut inner = StdCommand::new(shell.executable());
        inner.args([shell.script_flag(), &script]);
        self.inner = inner;
        self
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.inner.arg(arg);
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.inner.args(args);
        self
    }

    pub fn capture(mut self) -> Result<Output> {
        self.inner.output().map_err(|e| Error::CommandFailed {
            cmd: self.program.clone(),
            source: e,
        })
    }

    /// Spawn with piped stdout and stderr so the caller can consume the
    /// output line by line while the process runs.
    pub fn stream(mut self) -> Result<Child> {
        self.inner.stdout(Stdio::piped()).stderr(Stdio::piped());
        self.inner.spawn().map_err(|e| Error::CommandFailed {
            cmd: self.program.clone(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_new() {
        let cmd = Command::new("echo");
        assert_eq!(cmd.program, "echo");
    }

    #[test]
    fn test_command_args() {
        let cmd = Command::new("echo").arg("hello").args(["a", "b"]);
        let args: Vec<_> = cmd.inner.get_args().collect();
        assert_eq!(args.len(), 3);
    }

    #[test]
    fn test_command_run_in_shell() {
        let cmd = Command::new("echo hello").run_in_shell(Shell::Sh);
        assert_eq!(cmd.inner.get_program().to_string_lossy(), "sh");
        let args: Vec<_> = cmd.inner.get_args().collect();
        assert_eq!(args[0].to_string_lossy(), "-c");
        assert_eq!(args[1].to_string_lossy(), "echo hello");
    }

    #[test]
    fn test_command_run_in_shell_powershell() {
        let cmd = Command::new("scoop list foo").run_in_shell(Shell::Powershell);
        assert_eq!(cmd.inner.get_program().to_string_lossy(), "powershell");
        let args: Vec<_> = cmd.inner.get_args().collect();
        assert_eq!(args[0].to_string_lossy(), "-command");
    }

    #[test]
    fn test_command_stream_missing_program() {
        let result = Command::new("definitely_not_a_real_binary_5151").stream();
        assert!(matches!(result, Err(Error::CommandFailed { .. })));
    }
}
