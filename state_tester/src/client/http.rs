//!
//! The HTTP JSON-RPC 2.0 implementation of the client interface.
//!

use anyhow::Context;

use serde::Deserialize;

use super::chain_params::ChainParams;
use super::StateTestClient;
use super::StateVersion;

use crate::test::case::transaction::Transaction;

///
/// The client under test behind an HTTP JSON-RPC 2.0 endpoint.
///
/// Requests are sent one at a time and block until the client responds, so
/// the endpoint observes the calls in exactly the order the driver makes
/// them.
///
#[derive(Debug)]
pub struct HttpClient {
    /// The endpoint URL.
    endpoint: String,
    /// The underlying blocking HTTP client.
    client: reqwest::blocking::Client,
    /// The JSON-RPC request identifier counter.
    request_id: u64,
}

///
/// The JSON-RPC 2.0 response envelope.
///
#[derive(Debug, Deserialize)]
struct RpcResponse {
    /// The successful call result.
    result: Option<serde_json::Value>,
    /// The call error.
    error: Option<RpcError>,
}

///
/// The JSON-RPC 2.0 error object.
///
#[derive(Debug, Deserialize)]
struct RpcError {
    /// The error code.
    code: i64,
    /// The error message.
    message: String,
}

impl HttpClient {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            client: reqwest::blocking::Client::new(),
            request_id: 0,
        }
    }

    ///
    /// Performs a single JSON-RPC call, returning the `result` value.
    ///
    fn request(
        &mut self,
        method: &str,
        params: Vec<serde_json::Value>,
    ) -> anyhow::Result<serde_json::Value> {
        self.request_id += 1;
        let body = Self::request_body(method, params, self.request_id);

        let response = self
            .client
            .post(self.endpoint.as_str())
            .header("Content-Type", "application/json")
            .body(body.to_string())
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .with_context(|| format!("`{method}` request to `{}`", self.endpoint))?;
        let text = response
            .text()
            .with_context(|| format!("`{method}` response from `{}`", self.endpoint))?;

        Self::parse_response(text.as_str()).with_context(|| format!("`{method}` response"))
    }

    ///
    /// Assembles the JSON-RPC 2.0 request envelope.
    ///
    fn request_body(method: &str, params: Vec<serde_json::Value>, id: u64) -> serde_json::Value {
        serde_json::json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        })
    }

    ///
    /// Extracts the `result` value from a JSON-RPC 2.0 response.
    ///
    fn parse_response(text: &str) -> anyhow::Result<serde_json::Value> {
        let response: RpcResponse = serde_json::from_str(text)?;
        if let Some(error) = response.error {
            anyhow::bail!("RPC error {}: {}", error.code, error.message);
        }
        response
            .result
            .ok_or_else(|| anyhow::anyhow!("RPC response contains neither result nor error"))
    }
}

impl StateTestClient for HttpClient {
    fn set_chain_params(&mut self, params: &ChainParams) -> anyhow::Result<()> {
        let params = serde_json::to_value(params).context("Chain params serialization")?;
        self.request("test_setChainParams", vec![params])?;
        Ok(())
    }

    fn modify_timestamp(&mut self, timestamp: u64) -> anyhow::Result<()> {
        self.request("test_modifyTimestamp", vec![timestamp.into()])?;
        Ok(())
    }

    fn add_transaction(&mut self, transaction: &Transaction) -> anyhow::Result<()> {
        let transaction =
            serde_json::to_value(transaction).context("Transaction serialization")?;
        self.request("test_addTransaction", vec![transaction])?;
        Ok(())
    }

    fn mine_blocks(&mut self, count: u64) -> anyhow::Result<()> {
        self.request("test_mineBlocks", vec![count.into()])?;
        Ok(())
    }

    fn post_state(&mut self, version: StateVersion) -> anyhow::Result<String> {
        let result = self.request(
            "test_getPostState",
            vec![serde_json::json!({ "version": version.as_str() })],
        )?;
        Ok(match result {
            serde_json::Value::String(string) => string,
            value => serde_json::to_string_pretty(&value).context("Post state serialization")?,
        })
    }

    fn rewind_to_block(&mut self, block: u64) -> anyhow::Result<()> {
        self.request("test_rewindToBlock", vec![block.into()])?;
        Ok(())
    }
}
