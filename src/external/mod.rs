//! External process invocation
//!
//! Both the `git diff` call and every rule command go through the [`Runner`]
//! trait, so the rest of the crate never touches `std::process` directly and
//! tests can substitute a scripted runner.

use std::fmt;
use std::io;
use std::process::{Command, ExitStatus, Stdio};

#[cfg(test)]
pub(crate) mod fake;

/// How a child process ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessExit {
    code: Option<i32>,
}

impl ProcessExit {
    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    /// A process killed by a signal has no exit code
    pub fn signaled() -> Self {
        Self { code: None }
    }

    pub fn code(&self) -> Option<i32> {
        self.code
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<ExitStatus> for ProcessExit {
    fn from(status: ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

impl fmt::Display for ProcessExit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit status {code}"),
            None => f.write_str("termination by signal"),
        }
    }
}

/// Exit state and captured streams of a finished process
#[derive(Debug, Clone)]
pub struct CapturedOutput {
    pub exit: ProcessExit,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

/// Capability to run an external program with an explicit argument list
///
/// Arguments are passed verbatim; no shell is involved.
pub trait Runner {
    /// Run to completion, capturing stdout and stderr
    fn capture(&self, program: &str, args: &[String]) -> io::Result<CapturedOutput>;

    /// Run to completion with stdout and stderr inherited from this process
    fn run_inherited(&self, program: &str, args: &[String]) -> io::Result<ProcessExit>;
}

/// [`Runner`] backed by real child processes
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl Runner for ProcessRunner {
    fn capture(&self, program: &str, args: &[String]) -> io::Result<CapturedOutput> {
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()?;

        Ok(CapturedOutput {
            exit: output.status.into(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }

    fn run_inherited(&self, program: &str, args: &[String]) -> io::Result<ProcessExit> {
        let status = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;

        Ok(status.into())
    }
}

/// Render a program and its arguments the way they are reported to the user
pub fn command_line(program: &str, args: &[String]) -> String {
    let mut line = program.to_string();
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}
