//!
//! The state tester library.
//!

#![allow(clippy::too_many_arguments)]

pub(crate) mod client;
pub(crate) mod filters;
pub(crate) mod fork;
pub(crate) mod summary;
pub(crate) mod test_suits;
pub(crate) mod utils;

use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::Mutex;

use test::Test;

pub use crate::client::chain_params::ChainParams;
pub use crate::client::http::HttpClient;
pub use crate::client::StateTestClient;
pub use crate::client::StateVersion;
pub use crate::filters::Filters;
pub use crate::fork::Fork;
pub use crate::summary::Summary;
pub use crate::test::case::transaction::Transaction;
pub use crate::test_suits::ethereum_general_state::EthereumGeneralStateTestsDirectory;
pub use crate::test_suits::Collection;

///
/// The state tester.
///
pub struct StateTester {
    /// The summary.
    pub summary: Arc<Mutex<Summary>>,
    /// The filters.
    pub filters: Filters,
    /// The tests directory override.
    pub tests_path: Option<PathBuf>,
    /// Whether to include the expensive stress suites.
    pub with_stress: bool,
    /// Whether to validate fixture fillers instead of running tests.
    pub fill_mode: bool,
}

impl StateTester {
    /// The general state transition tests directory.
    const GENERAL_STATE_TESTS: &'static str = "ethereum-tests/GeneralStateTests";
    /// The general state transition test fillers directory.
    const GENERAL_STATE_TESTS_FILLER: &'static str = "ethereum-tests/src/GeneralStateTestsFiller";
}

impl StateTester {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        summary: Arc<Mutex<Summary>>,
        filters: Filters,
        tests_path: Option<PathBuf>,
        with_stress: bool,
        fill_mode: bool,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            summary,
            filters,
            tests_path,
            with_stress,
            fill_mode,
        })
    }

    ///
    /// Runs all tests against the client, one at a time.
    ///
    /// In fill mode the fixtures are only validated: generation is not
    /// implemented, so fillers that pass validation are recorded as ignored.
    ///
    pub fn run<C>(self, client: &mut C) -> anyhow::Result<()>
    where
        C: StateTestClient,
    {
        let tests = self.all_tests()?;

        for test in tests.into_iter() {
            if self.fill_mode {
                Summary::ignored(self.summary.clone(), test.name.clone());
                continue;
            }
            test.run(self.summary.clone(), client, &self.filters)?;
        }

        Ok(())
    }

    ///
    /// Returns all tests from all directories.
    ///
    fn all_tests(&self) -> anyhow::Result<Vec<Test>> {
        let default = if self.fill_mode {
            Self::GENERAL_STATE_TESTS_FILLER
        } else {
            Self::GENERAL_STATE_TESTS
        };
        let path = self
            .tests_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(default));

        self.directory::<EthereumGeneralStateTestsDirectory>(path.as_path())
    }

    ///
    /// Returns all tests from the specified directory.
    ///
    fn directory<T>(&self, path: &Path) -> anyhow::Result<Vec<Test>>
    where
        T: Collection,
    {
        T::read_all(
            path,
            &self.filters,
            self.with_stress,
            self.fill_mode,
            self.summary.clone(),
        )
        .map_err(|error| {
            anyhow::anyhow!(
                "Failed to read the tests directory `{}`: {error}",
                path.display()
            )
        })
    }
}
