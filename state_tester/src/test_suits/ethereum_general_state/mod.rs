//!
//! The Ethereum general state tests directory.
//!

use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::Mutex;

use crate::filters::Filters;
use crate::summary::Summary;
use crate::test::Test;
use crate::test_suits::Collection;

///
/// The Ethereum general state tests directory.
///
pub struct EthereumGeneralStateTestsDirectory;

impl EthereumGeneralStateTestsDirectory {
    /// The suite folders picked up by every run, in registration order.
    const SUITES: &'static [&'static str] = &[
        // Frontier
        "stCallCodes",
        "stCallCreateCallCodeTest",
        "stExample",
        "stInitCodeTest",
        "stLogTests",
        "stMemoryTest",
        "stPreCompiledContracts",
        "stPreCompiledContracts2",
        "stRandom",
        "stRandom2",
        "stRecursiveCreate",
        "stRefundTest",
        "stSolidityTest",
        "stSpecialTest",
        "stSystemOperationsTest",
        "stTransactionTest",
        "stTransitionTest",
        "stWalletTest",
        // Homestead
        "stCallDelegateCodesCallCodeHomestead",
        "stCallDelegateCodesHomestead",
        "stHomesteadSpecific",
        "stDelegatecallTestHomestead",
        // EIP-150
        "stChangedEIP150",
        "stEIP150singleCodeGasPrices",
        "stMemExpandingEIP150Calls",
        "stEIP150Specific",
        // EIP-158
        "stEIP158Specific",
        "stNonZeroCallsTest",
        "stZeroCallsTest",
        "stZeroCallsRevert",
        "stCodeSizeLimit",
        "stCreateTest",
        "stRevertTest",
        // Metropolis
        "stStackTests",
        "stStaticCall",
        "stReturnDataTest",
        "stZeroKnowledge",
        "stZeroKnowledge2",
        "stCodeCopyTest",
        "stBugs",
        // Stress
        "stAttackTest",
        "stMemoryStressTest",
        // Invalid opcodes
        "stBadOpcode",
        // Newer additions
        "stArgsZeroOneBalance",
        "stEWASMTests",
    ];

    /// The suites only picked up with the `--all` option.
    const EXPENSIVE_SUITES: &'static [&'static str] = &["stQuadraticComplexityTest"];

    ///
    /// Collects the fixture file paths of one suite folder, sorted for a
    /// deterministic run order.
    ///
    fn suite_paths(directory_path: &Path, suite: &str) -> anyhow::Result<Vec<PathBuf>> {
        let pattern = format!("{}/{suite}/**/*.json", directory_path.to_string_lossy());
        let mut paths = glob::glob(pattern.as_str())?
            .collect::<Result<Vec<PathBuf>, glob::GlobError>>()?;
        paths.sort();
        Ok(paths)
    }
}

impl Collection for EthereumGeneralStateTestsDirectory {
    fn read_all(
        directory_path: &Path,
        filters: &Filters,
        with_stress: bool,
        fill_mode: bool,
        summary: Arc<Mutex<Summary>>,
    ) -> anyhow::Result<Vec<Test>> {
        let mut suites = Self::SUITES.to_vec();
        if with_stress {
            suites.extend_from_slice(Self::EXPENSIVE_SUITES);
        }

        let mut tests = Vec::new();
        for suite in suites.into_iter() {
            // Checkouts are frequently partial, so absent suites are skipped.
            if !directory_path.join(suite).is_dir() {
                continue;
            }

            for path in Self::suite_paths(directory_path, suite)?.into_iter() {
                let file_stem = path
                    .file_stem()
                    .and_then(std::ffi::OsStr::to_str)
                    .unwrap_or_default()
                    .to_owned();

                let content = match std::fs::read_to_string(path.as_path()) {
                    Ok(content) => content,
                    Err(error) => {
                        Summary::invalid(
                            summary.clone(),
                            path.to_string_lossy().to_string(),
                            error,
                        );
                        continue;
                    }
                };

                match Test::from_general_state(
                    file_stem.as_str(),
                    content.as_str(),
                    fill_mode,
                    filters,
                ) {
                    Ok((file_tests, rejected)) => {
                        for rejection in rejected.into_iter() {
                            Summary::invalid(
                                summary.clone(),
                                rejection.name,
                                format!("{:#}", rejection.error),
                            );
                        }
                        tests.extend(file_tests);
                    }
                    Err(error) => {
                        Summary::invalid(summary.clone(), file_stem, format!("{error:#}"));
                    }
                }
            }
        }

        Ok(tests)
    }
}
