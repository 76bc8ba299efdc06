use crate::cli::Output;
use crate::config::RunConfig;
use crate::error::{PatternError, Result, RunError};
use crate::external::Runner;
use crate::git::ChangedFiles;

use super::matcher::{Compiler, RegexMatcher, first_match};
use super::{Report, RuleOutcome};

/// Walks the rules in order, running the command of every rule whose
/// pattern matches a changed path
///
/// Evaluation stops at the first error: an uncompilable pattern, a command
/// that cannot be started or a command that exits unsuccessfully.
pub struct Evaluator<'a> {
    runner: &'a dyn Runner,
    output: &'a Output,
    execute: bool,
    compile: Compiler,
}

impl<'a> Evaluator<'a> {
    /// With `execute` false nothing is spawned; matches are only reported
    pub fn new(runner: &'a dyn Runner, output: &'a Output, execute: bool) -> Self {
        Self {
            runner,
            output,
            execute,
            compile: RegexMatcher::compile,
        }
    }

    /// Use a different pattern language
    pub fn with_compiler(mut self, compile: Compiler) -> Self {
        self.compile = compile;
        self
    }

    pub fn evaluate(&self, config: &RunConfig, changed: &ChangedFiles) -> Result<Report> {
        let mut outcomes = Vec::with_capacity(config.len());

        for (index, rule) in config.rules().iter().enumerate() {
            let number = index + 1;
            let matcher = (self.compile)(&rule.pattern).map_err(|source| PatternError {
                rule: number,
                pattern: rule.pattern.clone(),
                source,
            })?;

            let Some(path) = first_match(matcher.as_ref(), changed) else {
                self.output
                    .skipped(&format!("No changes in files matching /{}/", rule.pattern));
                outcomes.push(RuleOutcome::Skipped { rule: number });
                continue;
            };

            let command = rule.command_line();
            tracing::debug!("Rule #{} /{}/ matched {}", number, rule.pattern, path);
            self.output.step(&format!("Running {command}"));
            self.output.verbose(&format!("triggered by {path}"));

            if !self.execute {
                self.output
                    .skipped(&format!("Dry run: not executing {command}"));
                outcomes.push(RuleOutcome::WouldRun {
                    rule: number,
                    matched_path: path.to_string(),
                });
                continue;
            }

            let exit = self
                .runner
                .run_inherited(&rule.command, &rule.args)
                .map_err(|source| RunError::Spawn {
                    rule: number,
                    command: command.clone(),
                    source,
                })?;

            if !exit.success() {
                return Err(RunError::Failed {
                    rule: number,
                    command,
                    exit,
                }
                .into());
            }

            tracing::debug!("Rule #{} finished: {}", number, command);
            outcomes.push(RuleOutcome::Ran {
                rule: number,
                matched_path: path.to_string(),
            });
        }

        Ok(Report::new(outcomes))
    }
}
