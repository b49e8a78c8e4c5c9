//!
//! The state tester summary element.
//!

pub mod outcome;

use colored::Colorize;

use self::outcome::Outcome;

///
/// The state tester summary element.
///
#[derive(Debug)]
pub struct Element {
    /// The test name.
    pub name: String,
    /// The test outcome.
    pub outcome: Outcome,
}

impl Element {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(name: String, outcome: Outcome) -> Self {
        Self { name, outcome }
    }

    ///
    /// Prints the element.
    ///
    pub fn print(&self, verbosity: bool) -> Option<String> {
        match self.outcome {
            Outcome::Passed { .. } if !verbosity => return None,
            Outcome::Ignored => return None,
            _ => {}
        }

        let outcome = match self.outcome {
            Outcome::Passed { .. } => "PASSED".green(),
            Outcome::Failed { .. } => "FAILED".bright_red(),
            Outcome::Invalid { .. } => "INVALID".red(),
            Outcome::Ignored => "IGNORED".bright_black(),
        };

        let details = match self.outcome {
            Outcome::Passed {
                ref fork,
                ref coordinate,
            } => format!("(fork {fork}, {coordinate})"),
            Outcome::Failed {
                ref fork,
                ref coordinate,
                ref expected,
                ref actual,
                ref state_dump,
            } => format!(
                "(fork {fork}, {coordinate})\n expected: {expected}\n   actual: {actual}\n state dump: {state_dump}"
            ),
            Outcome::Invalid { ref error } => error.clone(),
            Outcome::Ignored => String::new(),
        };

        Some(format!("{:>7} {} {}", outcome, self.name, details))
    }
}
