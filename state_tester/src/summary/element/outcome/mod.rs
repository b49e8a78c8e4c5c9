//!
//! The state tester summary element outcome.
//!

///
/// The state tester summary element outcome.
///
#[derive(Debug)]
pub enum Outcome {
    /// The `passed` outcome.
    Passed {
        /// The fork the expectation was declared for.
        fork: String,
        /// The transaction coordinate.
        coordinate: String,
    },
    /// The `failed` outcome. The post-state hash is incorrect.
    Failed {
        /// The fork the expectation was declared for.
        fork: String,
        /// The transaction coordinate.
        coordinate: String,
        /// The expected post-state hash.
        expected: String,
        /// The actual post-state hash.
        actual: String,
        /// The full post-state dump returned by the client.
        state_dump: String,
    },
    /// The `invalid` outcome. The fixture is incorrect.
    Invalid {
        /// The validation error description.
        error: String,
    },
    /// The `ignored` outcome. The test is ignored.
    Ignored,
}

impl Outcome {
    ///
    /// A shortcut constructor.
    ///
    pub fn passed(fork: String, coordinate: String) -> Self {
        Self::Passed { fork, coordinate }
    }

    ///
    /// A shortcut constructor.
    ///
    pub fn failed(
        fork: String,
        coordinate: String,
        expected: web3::types::H256,
        actual: web3::types::H256,
        state_dump: String,
    ) -> Self {
        Self::Failed {
            fork,
            coordinate,
            expected: format!("0x{}", hex::encode(expected.as_bytes())),
            actual: format!("0x{}", hex::encode(actual.as_bytes())),
            state_dump,
        }
    }

    ///
    /// A shortcut constructor.
    ///
    pub fn invalid<S>(error: S) -> Self
    where
        S: ToString,
    {
        Self::Invalid {
            error: error.to_string(),
        }
    }

    ///
    /// A shortcut constructor.
    ///
    pub fn ignored() -> Self {
        Self::Ignored
    }
}
