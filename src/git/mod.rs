//! Changed-file enumeration through `git diff`
//!
//! Paths come from `git diff -z --name-only <from> <to>`. With `-z` git
//! terminates every path with a NUL byte instead of a newline and does not
//! quote unusual file names, so paths containing newlines survive intact.

use crate::error::VcsError;
use crate::external::{Runner, command_line};

/// Ordered list of changed paths; duplicates are allowed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangedFiles(Vec<String>);

impl ChangedFiles {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

impl From<Vec<String>> for ChangedFiles {
    fn from(paths: Vec<String>) -> Self {
        Self(paths)
    }
}

impl<'a> IntoIterator for &'a ChangedFiles {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Lists changed paths between two refs using a git executable
pub struct GitDiff<'a> {
    runner: &'a dyn Runner,
    program: &'a str,
}

impl<'a> GitDiff<'a> {
    pub fn new(runner: &'a dyn Runner, program: &'a str) -> Self {
        Self { runner, program }
    }

    /// Paths whose content differs between `from` and `to`
    ///
    /// Both refs are handed to git unvalidated; an empty `from` is passed
    /// through as an empty argument.
    pub fn changed_files(&self, from: &str, to: &str) -> Result<ChangedFiles, VcsError> {
        let args = diff_args(from, to);
        let command = command_line(self.program, &args);
        tracing::debug!("Listing changed files: {}", command);

        let output = self
            .runner
            .capture(self.program, &args)
            .map_err(|source| VcsError::Spawn {
                program: self.program.to_string(),
                source,
            })?;

        if !output.exit.success() {
            return Err(VcsError::Failed {
                command,
                exit: output.exit,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let changed = ChangedFiles(parse_nul_separated(&output.stdout));
        tracing::debug!("{} changed files between '{}' and '{}'", changed.len(), from, to);
        for path in &changed {
            tracing::trace!("changed: {}", path);
        }
        Ok(changed)
    }
}

pub fn diff_args(from: &str, to: &str) -> Vec<String> {
    vec![
        "diff".to_string(),
        "-z".to_string(),
        "--name-only".to_string(),
        from.to_string(),
        to.to_string(),
    ]
}

/// Split NUL-terminated records, dropping empty ones
///
/// The final terminator leaves an empty trailing record, which is never a
/// path.
pub fn parse_nul_separated(stdout: &[u8]) -> Vec<String> {
    stdout
        .split(|&byte| byte == 0)
        .filter(|record| !record.is_empty())
        .map(|record| match std::str::from_utf8(record) {
            Ok(path) => path.to_string(),
            Err(_) => {
                let lossy = String::from_utf8_lossy(record).into_owned();
                tracing::warn!("Changed path is not valid UTF-8, matching against {:?}", lossy);
                lossy
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::fake::FakeRunner;

    #[test]
    fn test_parse_drops_trailing_terminator() {
        let paths = parse_nul_separated(b"main.go\0README.md\0");
        assert_eq!(paths, ["main.go", "README.md"]);
    }

    #[test]
    fn test_parse_keeps_order_and_newlines() {
        let paths = parse_nul_separated(b"z.txt\0a\nb.txt\0m/n.rs\0");
        assert_eq!(paths, ["z.txt", "a\nb.txt", "m/n.rs"]);
    }

    #[test]
    fn test_parse_empty_output() {
        assert!(parse_nul_separated(b"").is_empty());
        assert!(parse_nul_separated(b"\0").is_empty());
    }

    #[test]
    fn test_parse_unterminated_last_record() {
        assert_eq!(parse_nul_separated(b"a\0b"), ["a", "b"]);
    }

    #[test]
    fn test_parse_invalid_utf8_is_lossy() {
        let paths = parse_nul_separated(b"ok.txt\0bad\xff.txt\0");
        assert_eq!(paths, ["ok.txt", "bad\u{fffd}.txt"]);
    }

    #[test]
    fn test_changed_files_invokes_git_diff() {
        let runner = FakeRunner::new().with_stdout("git", b"src/lib.rs\0Cargo.toml\0");
        let changed = GitDiff::new(&runner, "git")
            .changed_files("origin/main", "HEAD")
            .unwrap();

        assert_eq!(changed.as_slice(), ["src/lib.rs", "Cargo.toml"]);
        assert_eq!(
            runner.calls(),
            [["git", "diff", "-z", "--name-only", "origin/main", "HEAD"]]
        );
    }

    #[test]
    fn test_empty_from_ref_is_passed_through() {
        let runner = FakeRunner::new();
        let changed = GitDiff::new(&runner, "git").changed_files("", "HEAD").unwrap();

        assert!(changed.is_empty());
        assert_eq!(runner.calls()[0][4], "");
    }

    #[test]
    fn test_git_failure_carries_stderr() {
        let runner = FakeRunner::new().with_failure(
            "git",
            128,
            "fatal: bad revision 'nope'\n",
        );
        let err = GitDiff::new(&runner, "git")
            .changed_files("nope", "HEAD")
            .unwrap_err();

        match err {
            VcsError::Failed { command, exit, stderr } => {
                assert_eq!(command, "git diff -z --name-only nope HEAD");
                assert_eq!(exit.code(), Some(128));
                assert_eq!(stderr, "fatal: bad revision 'nope'");
            }
            other => panic!("expected failed diff, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_git_binary() {
        let runner = FakeRunner::new().with_missing("git");
        let err = GitDiff::new(&runner, "git")
            .changed_files("HEAD~1", "HEAD")
            .unwrap_err();

        assert!(matches!(err, VcsError::Spawn { ref program, .. } if program == "git"));
    }
}
