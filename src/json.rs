// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Text-level request and reply records of the adapter.
//!
//! Addresses are checksummed strings, amounts are attoFIL strings and byte payloads are
//! standard base64. Message keys match case-insensitively, which covers both lowercase keys and
//! the capitalised form produced by Lotus JSON.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use fil_actor_multisig::TxnID;
use fil_wlib_shared::{wlib_error, Address, ChainMessage, Context, Error, TokenAmount};
use fvm_ipld_encoding::RawBytes;
use fvm_shared::clock::ChainEpoch;
use fvm_shared::MethodNum;
use serde::{de, Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::proposals;

/// Adapter reply. Serializes as a single-key object: `{"param": ..}`, `{"value": ..}` or
/// `{"err": ..}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reply {
    /// Base64 of produced bytes.
    Param(String),
    /// A textual result, such as an address or a CID string.
    Value(String),
    Err(String),
}

impl Reply {
    pub fn bytes(bz: &[u8]) -> Self {
        Reply::Param(BASE64.encode(bz))
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|e| format!(r#"{{"err":"failed to encode reply: {}"}}"#, e))
    }
}

/// Parses a JSON request body.
pub fn from_json<'de, T: Deserialize<'de>>(input: &'de str) -> Result<T, Error> {
    serde_json::from_str(input)
        .map_err(|e| wlib_error!(illegal_argument; "invalid input json: {}", e))
}

pub fn parse_address(text: &str) -> Result<Address, Error> {
    text.parse::<Address>().with_context(|| format!("invalid address({})", text))
}

pub fn parse_addresses(texts: &[String]) -> Result<Vec<Address>, Error> {
    texts.iter().map(|s| parse_address(s)).collect()
}

/// Parses an attoFIL amount, with `""` and `"0"` meaning zero.
pub fn parse_atto(value: &str) -> Result<TokenAmount, Error> {
    TokenAmount::parse_atto(value).with_context(|| format!("invalid value({})", value))
}

pub fn decode_base64(text: &str) -> Result<Vec<u8>, Error> {
    BASE64
        .decode(text)
        .map_err(|e| wlib_error!(illegal_argument; "invalid base64({}): {}", text, e))
}

/// Request to create a multisig wallet.
#[derive(Clone, Debug, Deserialize)]
pub struct CreateMultisigRequest {
    pub signers: Vec<String>,
    pub threshold: u64,
    pub unlock_duration: ChainEpoch,
    #[serde(default)]
    pub start_epoch: ChainEpoch,
}

impl CreateMultisigRequest {
    pub fn to_params(&self, actors_version: u32) -> Result<RawBytes, Error> {
        proposals::create_multisig(
            parse_addresses(&self.signers)?,
            self.threshold,
            self.unlock_duration,
            self.start_epoch,
            actors_version,
        )
    }
}

/// Request to change a miner's worker and control addresses.
#[derive(Clone, Debug, Deserialize)]
pub struct ChangeWorkerRequest {
    pub new_worker: String,
    #[serde(default)]
    pub new_control_addrs: Vec<String>,
}

impl ChangeWorkerRequest {
    pub fn to_params(&self, miner: &str) -> Result<RawBytes, Error> {
        proposals::propose_change_worker(
            parse_address(miner)?,
            parse_address(&self.new_worker)?,
            parse_addresses(&self.new_control_addrs)?,
        )
    }
}

/// Request to approve a pending multisig transaction. `requester` must be the ID address of
/// the signer who made the proposal.
#[derive(Clone, Debug, Deserialize)]
pub struct ApprovalRequest {
    pub tx_id: i64,
    pub requester: String,
    pub to: String,
    pub value: String,
    pub method: MethodNum,
    #[serde(default)]
    pub params: String,
}

impl ApprovalRequest {
    pub fn to_params(&self) -> Result<RawBytes, Error> {
        proposals::approve(
            TxnID(self.tx_id),
            parse_address(&self.requester).context("invalid requester")?,
            parse_address(&self.to).context("invalid receiver")?,
            parse_atto(&self.value)?,
            self.method,
            RawBytes::new(decode_base64(&self.params)?),
        )
    }
}

/// An unsigned message in its text form. Keys match case-insensitively, so `gasLimit`,
/// `GasLimit` and `gaslimit` are the same field.
#[derive(Clone, Debug, Deserialize)]
pub struct MessageRequest {
    #[serde(default)]
    pub version: u64,
    pub to: String,
    pub from: String,
    pub nonce: u64,
    #[serde(deserialize_with = "string_or_number")]
    pub value: String,
    #[serde(rename = "gaslimit")]
    pub gas_limit: i64,
    #[serde(rename = "gasfeecap", deserialize_with = "string_or_number")]
    pub gas_fee_cap: String,
    #[serde(rename = "gaspremium", deserialize_with = "string_or_number")]
    pub gas_premium: String,
    pub method: MethodNum,
    #[serde(default)]
    pub params: String,
}

impl MessageRequest {
    pub fn from_json(input: &str) -> Result<Self, Error> {
        let fields: Map<String, Value> = from_json(input)?;
        let fields = fields.into_iter().map(|(k, v)| (k.to_ascii_lowercase(), v)).collect();
        serde_json::from_value(Value::Object(fields))
            .map_err(|e| wlib_error!(illegal_argument; "invalid input json: {}", e))
    }

    pub fn to_message(&self) -> Result<ChainMessage, Error> {
        Ok(ChainMessage {
            version: self.version,
            to: parse_address(&self.to)?,
            from: parse_address(&self.from)?,
            nonce: self.nonce,
            value: parse_atto(&self.value)?,
            gas_limit: self.gas_limit,
            gas_fee_cap: parse_atto(&self.gas_fee_cap)?,
            gas_premium: parse_atto(&self.gas_premium)?,
            method_num: self.method,
            params: RawBytes::new(decode_base64(&self.params)?),
        })
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: de::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Amount {
        Text(String),
        Number(u64),
    }

    match Amount::deserialize(deserializer)? {
        Amount::Text(s) => Ok(s),
        Amount::Number(n) => Ok(n.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_shape() {
        assert_eq!(Reply::bytes(&[0x40]).to_json(), r#"{"param":"QA=="}"#);
        assert_eq!(Reply::Value("f01".to_string()).to_json(), r#"{"value":"f01"}"#);
        assert_eq!(Reply::Err("boom".to_string()).to_json(), r#"{"err":"boom"}"#);
    }

    #[test]
    fn message_keys_match_any_case() {
        let lower = MessageRequest::from_json(
            r#"{"to":"f01","from":"f02","nonce":1,"value":"5","gaslimit":10,
                "gasfeecap":"1","gaspremium":1,"method":0}"#,
        )
        .unwrap();
        let upper = MessageRequest::from_json(
            r#"{"Version":0,"To":"f01","From":"f02","Nonce":1,"Value":"5","GasLimit":10,
                "GasFeeCap":"1","GasPremium":"1","Method":0,"Params":""}"#,
        )
        .unwrap();
        let camel = MessageRequest::from_json(
            r#"{"version":0,"to":"f01","FROM":"f02","nonce":1,"value":5,"gasLimit":10,
                "gasFeeCap":"1","gasPremium":"1","method":0,"params":""}"#,
        )
        .unwrap();
        assert_eq!(lower.to_message().unwrap(), upper.to_message().unwrap());
        assert_eq!(camel.to_message().unwrap(), upper.to_message().unwrap());
    }

    #[test]
    fn bad_inputs_are_errors() {
        assert!(from_json::<ApprovalRequest>("{").is_err());
        assert!(MessageRequest::from_json("[]").is_err());
        assert!(MessageRequest::from_json(r#"{"to":"f01"}"#).is_err());
        assert!(decode_base64("not base64!").is_err());
        assert!(parse_address("f1").is_err());
        assert!(parse_atto("-5").is_err());
    }
}
