//! Rule evaluation
//!
//! Each rule's pattern is compiled into a [`Matcher`] and tested against the
//! changed paths. Rules are visited strictly in configuration order and
//! matched commands run one at a time.

mod evaluator;
pub mod matcher;

pub use evaluator::Evaluator;
pub use matcher::{Matcher, RegexMatcher};

/// What happened to a single rule; `rule` is its 1-based position
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    /// The command ran and exited successfully
    Ran { rule: usize, matched_path: String },
    /// Matched during a dry run, so the command was not executed
    WouldRun { rule: usize, matched_path: String },
    /// No changed path matched
    Skipped { rule: usize },
}

impl RuleOutcome {
    pub fn is_match(&self) -> bool {
        !matches!(self, RuleOutcome::Skipped { .. })
    }
}

/// Outcomes of a completed evaluation, in rule order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    outcomes: Vec<RuleOutcome>,
}

impl Report {
    pub fn new(outcomes: Vec<RuleOutcome>) -> Self {
        Self { outcomes }
    }

    pub fn outcomes(&self) -> &[RuleOutcome] {
        &self.outcomes
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn matched(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_match()).count()
    }

    pub fn executed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, RuleOutcome::Ran { .. }))
            .count()
    }
}
