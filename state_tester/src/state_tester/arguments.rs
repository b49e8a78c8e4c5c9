//!
//! The state tester arguments.
//!

use std::path::PathBuf;

use structopt::StructOpt;

///
/// The state tester arguments.
///
#[derive(Debug, StructOpt)]
#[structopt(
    name = "state-tester",
    about = "Ethereum general state tests conformance driver"
)]
pub struct Arguments {
    /// The logging level.
    #[structopt(short = "v", long = "verbose")]
    pub verbosity: bool,

    /// Suppresses the output completely.
    #[structopt(short = "q", long = "quiet")]
    pub quiet: bool,

    /// Runs only tests whose name contains any string from the specified ones.
    #[structopt(short = "t", long = "test")]
    pub tests: Vec<String>,

    /// Runs only the specified fork, skipping all other forks a test declares.
    #[structopt(long = "fork")]
    pub fork: Option<state_tester::Fork>,

    /// The tests directory. The default depends on the `--fill` option.
    #[structopt(long = "tests-path", parse(from_os_str))]
    pub tests_path: Option<PathBuf>,

    /// The HTTP JSON-RPC endpoint of the client under test.
    #[structopt(long = "client", default_value = "http://127.0.0.1:8545")]
    pub client: String,

    /// Also runs the expensive stress test suites.
    #[structopt(long = "all")]
    pub all: bool,

    /// Validates test fillers instead of running tests.
    #[structopt(long = "fill")]
    pub fill: bool,
}

impl Arguments {
    ///
    /// A shortcut constructor.
    ///
    pub fn new() -> Self {
        Self::from_args()
    }
}
