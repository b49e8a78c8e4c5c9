//!
//! The client under test, driven over the test RPC channel.
//!

pub mod chain_params;
pub mod http;

use chain_params::ChainParams;

use crate::test::case::transaction::Transaction;

///
/// The serialization version of the post-state query.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateVersion {
    /// Version `1`: the state hash, used for the verification itself.
    Hash,
    /// Version `2`: the full state dump, fetched for diagnostics on mismatch.
    FullState,
}

impl StateVersion {
    ///
    /// The version string sent on the wire.
    ///
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hash => "1",
            Self::FullState => "2",
        }
    }
}

///
/// The interface of the client under test.
///
/// One handle is one shared mutable environment: the driver resets the
/// chain, applies a transaction, verifies the state, and rolls back, in
/// that strict order, so implementations are synchronous and the handle is
/// passed by mutable reference through the run.
///
pub trait StateTestClient {
    ///
    /// Loads the chain parameters, resetting the chain to its genesis state.
    ///
    fn set_chain_params(&mut self, params: &ChainParams) -> anyhow::Result<()>;

    ///
    /// Sets the timestamp of the next produced block.
    ///
    fn modify_timestamp(&mut self, timestamp: u64) -> anyhow::Result<()>;

    ///
    /// Submits a transaction to the pending block.
    ///
    fn add_transaction(&mut self, transaction: &Transaction) -> anyhow::Result<()>;

    ///
    /// Produces the given number of blocks.
    ///
    fn mine_blocks(&mut self, count: u64) -> anyhow::Result<()>;

    ///
    /// Returns the post state in the requested serialization version.
    ///
    fn post_state(&mut self, version: StateVersion) -> anyhow::Result<String>;

    ///
    /// Rolls the chain back to the given block number.
    ///
    fn rewind_to_block(&mut self, block: u64) -> anyhow::Result<()>;
}
