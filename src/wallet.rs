// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! String-in, string-out surface for wallet front ends.
//!
//! Every call answers a JSON [`Reply`]. Failures of any stage are reported through
//! `{"err": ..}`; nothing panics across this boundary and no partial output is returned.

use fil_wlib_shared::crypto::{self, PrivateKey};
use fil_wlib_shared::{wlib_error, Address, Error, Network, DEFAULT_ACTORS_VERSION};
use fvm_shared::sector::RegisteredPoStProof;
use log::{debug, warn};

use crate::json::{self, Reply};
use crate::proposals;

/// Settings shared by every call of a [`Wallet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Network that derived addresses are rendered for.
    pub network: Network,
    /// Actors version whose legacy code CIDs are used to create actors.
    pub actors_version: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self { network: Network::default(), actors_version: DEFAULT_ACTORS_VERSION }
    }
}

/// Kind of public key an address is derived from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyType {
    Secp256k1,
    Bls,
}

impl std::str::FromStr for KeyType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_ascii_lowercase().as_str() {
            "secp" | "secp256k1" => Ok(KeyType::Secp256k1),
            "bls" => Ok(KeyType::Bls),
            _ => Err(wlib_error!(illegal_argument; "unknown key type {:?}", s)),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Wallet {
    config: Config,
}

impl Wallet {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Address of a base64 public key of the given type.
    pub fn derive_address(&self, public_key: &str, key_type: &str) -> String {
        respond("derive_address", || {
            let key = json::decode_base64(public_key)?;
            let addr = match key_type.parse::<KeyType>()? {
                KeyType::Secp256k1 => Address::new_secp256k1(&key)?,
                KeyType::Bls => Address::new_bls(&key)?,
            };
            Ok(Reply::Value(addr.with_network(self.config.network).to_string()))
        })
    }

    /// Parses and re-formats an address, keeping the network it was written for.
    pub fn normalize_address(&self, address: &str) -> String {
        respond("normalize_address", || {
            Ok(Reply::Value(json::parse_address(address)?.to_string()))
        })
    }

    /// Base64 of the CID bytes of a JSON message.
    pub fn message_cid(&self, message: &str) -> String {
        respond("message_cid", || {
            let msg = json::MessageRequest::from_json(message)?.to_message()?;
            Ok(Reply::bytes(&msg.cid()?.to_bytes()))
        })
    }

    /// Multibase string of the CID of a JSON message.
    pub fn message_cid_string(&self, message: &str) -> String {
        respond("message_cid_string", || {
            let msg = json::MessageRequest::from_json(message)?.to_message()?;
            Ok(Reply::Value(msg.cid()?.to_string()))
        })
    }

    /// Uncompressed public key of a base64 secp256k1 private key.
    pub fn public_key(&self, private_key: &str) -> String {
        respond("public_key", || {
            Ok(Reply::bytes(&crypto::public_key(&json::decode_base64(private_key)?)?))
        })
    }

    /// Address of a base64 secp256k1 private key.
    pub fn key_address(&self, private_key: &str) -> String {
        respond("key_address", || {
            let key = PrivateKey::from_bytes(&json::decode_base64(private_key)?)?;
            Ok(Reply::Value(key.address(self.config.network)?.to_string()))
        })
    }

    /// Signs a base64 payload, typically message CID bytes.
    pub fn sign(&self, private_key: &str, payload: &str) -> String {
        respond("sign", || {
            let key = json::decode_base64(private_key)?;
            let payload = json::decode_base64(payload)?;
            Ok(Reply::bytes(crypto::sign(&key, &payload)?.bytes()))
        })
    }

    /// Init actor `Exec` params creating a multisig wallet from a JSON request.
    pub fn create_multisig(&self, request: &str) -> String {
        respond("create_multisig", || {
            let request: json::CreateMultisigRequest = json::from_json(request)?;
            Ok(Reply::bytes(request.to_params(self.config.actors_version)?.bytes()))
        })
    }

    pub fn propose_send(&self, to: &str, value: &str) -> String {
        respond("propose_send", || {
            let to = json::parse_address(to)?;
            let value = json::parse_atto(value)?;
            Ok(Reply::bytes(proposals::propose_send(to, value)?.bytes()))
        })
    }

    pub fn propose_withdraw_balance(&self, miner: &str, amount: &str) -> String {
        respond("propose_withdraw_balance", || {
            let miner = json::parse_address(miner)?;
            let amount = json::parse_atto(amount)?;
            Ok(Reply::bytes(proposals::propose_withdraw_balance(miner, amount)?.bytes()))
        })
    }

    pub fn propose_change_worker(&self, miner: &str, request: &str) -> String {
        respond("propose_change_worker", || {
            let request: json::ChangeWorkerRequest = json::from_json(request)?;
            Ok(Reply::bytes(request.to_params(miner)?.bytes()))
        })
    }

    pub fn propose_change_owner(&self, new_owner: &str, miner: &str, value: &str) -> String {
        respond("propose_change_owner", || {
            let new_owner = json::parse_address(new_owner)?;
            let miner = json::parse_address(miner)?;
            let value = json::parse_atto(value)?;
            Ok(Reply::bytes(proposals::propose_change_owner(new_owner, miner, value)?.bytes()))
        })
    }

    pub fn propose_confirm_update_worker_key(&self, miner: &str) -> String {
        respond("propose_confirm_update_worker_key", || {
            let miner = json::parse_address(miner)?;
            Ok(Reply::bytes(proposals::propose_confirm_update_worker_key(miner)?.bytes()))
        })
    }

    /// Proposal creating a miner with no peer ID and no multiaddrs.
    pub fn propose_create_miner(&self, owner: &str, worker: &str, proof_type: &str) -> String {
        respond("propose_create_miner", || {
            let owner = json::parse_address(owner)?;
            let worker = json::parse_address(worker)?;
            let proof_type: i64 = proof_type.trim().parse().map_err(|e| {
                wlib_error!(illegal_argument; "invalid proof type({}): {}", proof_type, e)
            })?;
            let params = proposals::propose_create_miner(
                owner,
                worker,
                RegisteredPoStProof::from(proof_type),
                None,
                None,
            )?;
            Ok(Reply::bytes(params.bytes()))
        })
    }

    /// Approval of a pending multisig transaction described by a JSON request.
    pub fn approve(&self, request: &str) -> String {
        respond("approve", || {
            let request: json::ApprovalRequest = json::from_json(request)?;
            Ok(Reply::bytes(request.to_params()?.bytes()))
        })
    }
}

fn respond<F>(call: &str, f: F) -> String
where
    F: FnOnce() -> Result<Reply, Error>,
{
    let reply = match f() {
        Ok(reply) => {
            debug!("{}: {:?}", call, reply);
            reply
        }
        Err(e) => {
            warn!("{} failed (exit code {}): {}", call, e.exit_code().value(), e);
            Reply::Err(e.to_string())
        }
    };
    reply.to_json()
}
