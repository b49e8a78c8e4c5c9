//!
//! The chain parameters payload loaded into the client before each fork run.
//!

use serde::Serialize;

use crate::fork::Fork;
use crate::test::fixture::env_section::EnvSection;
use crate::test::fixture::pre_state::PreState;

///
/// The `test_setChainParams` payload: the genesis header, the pre-state
/// accounts, and the sealing parameters with the active fork's rules.
///
#[derive(Debug, Serialize, Clone)]
pub struct ChainParams {
    /// The payload format version.
    pub version: String,
    /// The genesis block header fields.
    pub genesis: GenesisHeader,
    /// The pre-state accounts, passed through as declared in the fixture.
    pub state: PreState,
    /// The sealing parameters.
    pub params: SealingParams,
}

///
/// The genesis block header fields.
///
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GenesisHeader {
    /// The block author, taken from the fixture's coinbase.
    pub author: String,
    /// The block difficulty.
    pub difficulty: String,
    /// The block gas limit.
    pub gas_limit: String,
    /// The block timestamp.
    pub timestamp: String,
}

///
/// The sealing parameters.
///
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SealingParams {
    /// The sealing engine name.
    pub mining_method: String,
    /// The per-block coinbase reward.
    pub block_reward: String,
    /// The name of the fork whose rules are active.
    pub fork_rules: String,
}

impl ChainParams {
    /// The payload format version.
    const VERSION: &'static str = "1";

    /// The sealing engine: blocks are produced on demand, without proof of work.
    const MINING_METHOD: &'static str = "NoProof";

    /// The block reward is zeroed so the coinbase balance stays comparable.
    const BLOCK_REWARD: &'static str = "0x00";

    /// The genesis timestamp; the fixture's timestamp applies to the first
    /// produced block, not to genesis.
    const GENESIS_TIMESTAMP: &'static str = "0x00";

    /// The difficulty substituted when the fixture declares none.
    const DEFAULT_DIFFICULTY: &'static str = "0x20000";

    ///
    /// Builds the payload from a fixture's environment and pre-state.
    ///
    /// Built once per fixture and retargeted per fork with `set_fork`.
    ///
    pub fn new(env: &EnvSection, state: &PreState) -> Self {
        Self {
            version: Self::VERSION.to_owned(),
            genesis: GenesisHeader {
                author: env.current_coinbase.clone(),
                difficulty: env
                    .current_difficulty
                    .clone()
                    .unwrap_or_else(|| Self::DEFAULT_DIFFICULTY.to_owned()),
                gas_limit: env.current_gas_limit.clone(),
                timestamp: Self::GENESIS_TIMESTAMP.to_owned(),
            },
            state: state.clone(),
            params: SealingParams {
                mining_method: Self::MINING_METHOD.to_owned(),
                block_reward: Self::BLOCK_REWARD.to_owned(),
                fork_rules: String::new(),
            },
        }
    }

    ///
    /// Retargets the payload at the given fork.
    ///
    pub fn set_fork(&mut self, fork: Fork) {
        self.params.fork_rules = fork.name().to_owned();
    }
}
