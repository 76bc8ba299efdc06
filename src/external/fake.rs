//! Scripted [`Runner`] for unit tests

use std::cell::RefCell;
use std::collections::HashMap;
use std::io;

use super::{CapturedOutput, ProcessExit, Runner};

#[derive(Debug, Clone)]
enum Script {
    Exit(CapturedOutput),
    NotFound,
}

/// Records every invocation and replays a scripted result per program
///
/// Programs without a script exit successfully with empty output.
#[derive(Debug, Default)]
pub struct FakeRunner {
    scripts: HashMap<String, Script>,
    calls: RefCell<Vec<Vec<String>>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stdout(mut self, program: &str, stdout: &[u8]) -> Self {
        self.scripts.insert(
            program.to_string(),
            Script::Exit(CapturedOutput {
                exit: ProcessExit::from_code(0),
                stdout: stdout.to_vec(),
                stderr: Vec::new(),
            }),
        );
        self
    }

    pub fn with_failure(mut self, program: &str, code: i32, stderr: &str) -> Self {
        self.scripts.insert(
            program.to_string(),
            Script::Exit(CapturedOutput {
                exit: ProcessExit::from_code(code),
                stdout: Vec::new(),
                stderr: stderr.as_bytes().to_vec(),
            }),
        );
        self
    }

    pub fn with_missing(mut self, program: &str) -> Self {
        self.scripts.insert(program.to_string(), Script::NotFound);
        self
    }

    /// Each call as the program followed by its arguments
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }

    fn invoke(&self, program: &str, args: &[String]) -> io::Result<CapturedOutput> {
        let mut call = vec![program.to_string()];
        call.extend(args.iter().cloned());
        self.calls.borrow_mut().push(call);

        match self.scripts.get(program) {
            Some(Script::Exit(output)) => Ok(output.clone()),
            Some(Script::NotFound) => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{program}: command not found"),
            )),
            None => Ok(CapturedOutput {
                exit: ProcessExit::from_code(0),
                stdout: Vec::new(),
                stderr: Vec::new(),
            }),
        }
    }
}

impl Runner for FakeRunner {
    fn capture(&self, program: &str, args: &[String]) -> io::Result<CapturedOutput> {
        self.invoke(program, args)
    }

    fn run_inherited(&self, program: &str, args: &[String]) -> io::Result<ProcessExit> {
        self.invoke(program, args).map(|output| output.exit)
    }
}
