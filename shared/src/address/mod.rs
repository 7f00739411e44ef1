// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Filecoin account identifiers.
//!
//! Text form: `<network><protocol><payload>`, where the payload is a decimal actor ID for
//! protocol 0, and lowercase unpadded base32 of `payload ++ checksum` for every other protocol.
//! f4 addresses additionally carry their namespace in decimal, followed by `f`. The checksum
//! is a 4-byte blake2b of `protocol byte ++ payload`.
//!
//! Binary form: `protocol byte ++ payload`, with actor IDs and namespaces as LEB128 varints.
//! This is what the canonical encoding embeds; it carries no checksum and no network.

use std::fmt;
use std::str::FromStr;

use data_encoding::BASE32_NOPAD;
use fvm_ipld_encoding::BytesDe;
use fvm_shared::ActorID;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

pub use self::errors::Error;
pub use self::network::Network;
pub use self::payload::{DelegatedAddress, Payload};
pub use self::protocol::Protocol;

mod errors;
mod network;
mod payload;
mod protocol;

/// Hash length of payload for Secp and Actor addresses.
pub const PAYLOAD_HASH_LEN: usize = 20;

/// Uncompressed secp256k1 public key length used for validation of Secp addresses.
pub const SECP_PUB_LEN: usize = 65;

/// BLS public key length used for validation of BLS addresses.
pub const BLS_PUB_LEN: usize = 48;

/// Max length of f4 sub addresses.
pub const MAX_SUBADDRESS_LEN: usize = 54;

/// Length of the checksum hash for string encodings.
pub const CHECKSUM_HASH_LEN: usize = 4;

/// Separates the namespace from the sub-address in f4 text.
const DELEGATED_SEPARATOR: char = 'f';

/// Address is the struct that defines the protocol and data payload conversion from either
/// a public key or value
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub struct Address {
    network: Network,
    payload: Payload,
}

impl Address {
    fn new(network: Network, protocol: Protocol, payload: &[u8]) -> Result<Self, Error> {
        Ok(Self { network, payload: Payload::new(protocol, payload)? })
    }

    /// Creates an address from its binary form (protocol byte followed by payload).
    pub fn from_bytes(bz: &[u8]) -> Result<Self, Error> {
        if bz.len() < 2 {
            return Err(Error::InvalidLength);
        }
        let protocol = Protocol::from_byte(bz[0]).ok_or(Error::UnknownProtocol)?;
        Self::new(Network::default(), protocol, &bz[1..])
    }

    /// Generates new address using ID protocol.
    pub const fn new_id(id: ActorID) -> Self {
        Self { network: Network::Mainnet, payload: Payload::ID(id) }
    }

    /// Generates new address using the Secp256k1 protocol from an uncompressed public key.
    pub fn new_secp256k1(pubkey: &[u8]) -> Result<Self, Error> {
        if pubkey.len() != SECP_PUB_LEN {
            return Err(Error::InvalidSECPLength(pubkey.len()));
        }
        Ok(Self { network: Network::default(), payload: Payload::Secp256k1(address_hash(pubkey)) })
    }

    /// Generates new address using the Actor protocol.
    pub fn new_actor(data: &[u8]) -> Self {
        Self { network: Network::default(), payload: Payload::Actor(address_hash(data)) }
    }

    /// Generates a new address using the BLS protocol.
    pub fn new_bls(pubkey: &[u8]) -> Result<Self, Error> {
        Self::new(Network::default(), Protocol::BLS, pubkey)
    }

    /// Generates a new f4 address within the given namespace.
    pub fn new_delegated(namespace: ActorID, subaddress: &[u8]) -> Result<Self, Error> {
        Ok(Self {
            network: Network::default(),
            payload: Payload::Delegated(DelegatedAddress::new(namespace, subaddress)?),
        })
    }

    /// Returns the same address, rendered for another network.
    pub fn with_network(mut self, network: Network) -> Self {
        self.network = network;
        self
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn protocol(&self) -> Protocol {
        self.payload.protocol()
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Raw payload bytes, without the protocol byte.
    pub fn payload_bytes(&self) -> Vec<u8> {
        self.payload.to_raw_bytes()
    }

    /// Binary form used by the canonical encoding.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.payload.to_bytes()
    }

    /// Returns the actor ID of an ID address.
    pub fn id(&self) -> Result<ActorID, Error> {
        match self.payload {
            Payload::ID(id) => Ok(id),
            _ => Err(Error::NonIDAddress),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = self.network.to_prefix();
        let protocol = self.protocol();
        match &self.payload {
            Payload::ID(id) => write!(f, "{}{}{}", prefix, protocol, id),
            Payload::Delegated(addr) => {
                let cksm = checksum(&self.to_bytes());
                let mut bz = addr.subaddress().to_vec();
                bz.extend_from_slice(&cksm);
                write!(
                    f,
                    "{}{}{}{}{}",
                    prefix,
                    protocol,
                    addr.namespace(),
                    DELEGATED_SEPARATOR,
                    encode_base32(&bz)
                )
            }
            _ => {
                let cksm = checksum(&self.to_bytes());
                let mut bz = self.payload_bytes();
                bz.extend_from_slice(&cksm);
                write!(f, "{}{}{}", prefix, protocol, encode_base32(&bz))
            }
        }
    }
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(addr: &str) -> Result<Self, Error> {
        if addr.len() < 3 || !addr.is_ascii() {
            return Err(Error::InvalidLength);
        }
        let network = Network::from_prefix(&addr[0..1]).ok_or(Error::UnknownNetwork)?;
        let protocol = Protocol::from_digit(&addr[1..2]).ok_or(Error::UnknownProtocol)?;
        let raw = &addr[2..];

        let payload = match protocol {
            Protocol::ID => Payload::ID(parse_actor_id(raw)?),
            Protocol::Delegated => {
                let (namespace, encoded) =
                    raw.split_once(DELEGATED_SEPARATOR).ok_or(Error::InvalidPayload)?;
                let namespace = parse_actor_id(namespace)?;
                let (subaddress, cksm) = split_checksum(encoded)?;
                let payload = Payload::Delegated(DelegatedAddress::new(namespace, &subaddress)?);
                verify_checksum(&payload, &cksm)?;
                payload
            }
            _ => {
                let (raw_payload, cksm) = split_checksum(raw)?;
                let payload = Payload::new(protocol, &raw_payload)?;
                verify_checksum(&payload, &cksm)?;
                payload
            }
        };
        Ok(Self { network, payload })
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_bytes(&self.to_bytes())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let BytesDe(bz) = BytesDe::deserialize(deserializer)?;
        Address::from_bytes(&bz).map_err(de::Error::custom)
    }
}

/// Decimal actor ID. Only the canonical spelling is accepted so that text round-trips.
fn parse_actor_id(raw: &str) -> Result<ActorID, Error> {
    let canonical = !raw.is_empty()
        && raw.bytes().all(|b| b.is_ascii_digit())
        && (raw.len() == 1 || !raw.starts_with('0'));
    if !canonical {
        return Err(Error::InvalidID(raw.to_string()));
    }
    raw.parse().map_err(|_| Error::InvalidID(raw.to_string()))
}

fn split_checksum(encoded: &str) -> Result<(Vec<u8>, Vec<u8>), Error> {
    let mut bz = decode_base32(encoded)?;
    if bz.len() < CHECKSUM_HASH_LEN {
        return Err(Error::InvalidLength);
    }
    let cksm = bz.split_off(bz.len() - CHECKSUM_HASH_LEN);
    Ok((bz, cksm))
}

fn verify_checksum(payload: &Payload, expect: &[u8]) -> Result<(), Error> {
    if validate_checksum(&payload.to_bytes(), expect) {
        Ok(())
    } else {
        Err(Error::InvalidChecksum)
    }
}

fn encode_base32(bz: &[u8]) -> String {
    BASE32_NOPAD.encode(bz).to_ascii_lowercase()
}

fn decode_base32(s: &str) -> Result<Vec<u8>, Error> {
    if s.bytes().any(|b| b.is_ascii_uppercase()) {
        return Err(Error::Base32Decoding(format!("uppercase characters in {:?}", s)));
    }
    BASE32_NOPAD
        .decode(s.to_ascii_uppercase().as_bytes())
        .map_err(|e| Error::Base32Decoding(e.to_string()))
}

/// Returns the 20-byte blake2b hash used for Secp and Actor payloads.
fn address_hash(ingest: &[u8]) -> [u8; PAYLOAD_HASH_LEN] {
    let digest = blake2b_simd::Params::new().hash_length(PAYLOAD_HASH_LEN).hash(ingest);
    let mut hash = [0u8; PAYLOAD_HASH_LEN];
    hash.copy_from_slice(digest.as_bytes());
    hash
}

/// Checksum calculates the 4 byte checksum hash
pub fn checksum(ingest: &[u8]) -> [u8; CHECKSUM_HASH_LEN] {
    let digest = blake2b_simd::Params::new().hash_length(CHECKSUM_HASH_LEN).hash(ingest);
    let mut cksm = [0u8; CHECKSUM_HASH_LEN];
    cksm.copy_from_slice(digest.as_bytes());
    cksm
}

/// Validates the checksum against the ingest data
pub fn validate_checksum(ingest: &[u8], expect: &[u8]) -> bool {
    checksum(ingest)[..] == *expect
}
