//!
//! The state tester filters.
//!

use std::collections::HashSet;

use crate::fork::Fork;

///
/// The state tester filters.
///
#[derive(Debug)]
pub struct Filters {
    /// The test name filters.
    test_filters: HashSet<String>,
    /// The single fork to restrict execution to.
    fork: Option<Fork>,
}

impl Filters {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(test_filters: Vec<String>, fork: Option<Fork>) -> Self {
        Self {
            test_filters: test_filters.into_iter().collect(),
            fork,
        }
    }

    ///
    /// Check if the test name is compatible with the filters.
    ///
    pub fn check_test_name(&self, name: &str) -> bool {
        self.test_filters.is_empty() || self.test_filters.iter().any(|filter| name.contains(filter))
    }

    ///
    /// Check if the fork named in a `post` section is selected for execution.
    ///
    pub fn check_fork(&self, fork_name: &str) -> bool {
        match self.fork {
            Some(fork) => fork.name() == fork_name,
            None => true,
        }
    }
}
