use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EnvSection {
    pub current_coinbase: String,
    pub current_difficulty: Option<String>,
    pub current_random: Option<String>,
    pub current_base_fee: Option<String>,
    pub current_gas_limit: String,
    pub current_number: String,
    pub current_timestamp: String,
    pub previous_hash: Option<String>,
}
