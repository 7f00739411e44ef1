// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use fvm_shared::ActorID;
use unsigned_varint::{decode, encode};

use super::{Error, Protocol, BLS_PUB_LEN, MAX_SUBADDRESS_LEN, PAYLOAD_HASH_LEN};

/// A namespaced sub-address, the payload of an f4 address.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub struct DelegatedAddress {
    namespace: ActorID,
    length: usize,
    buffer: [u8; MAX_SUBADDRESS_LEN],
}

impl DelegatedAddress {
    pub fn new(namespace: ActorID, subaddress: &[u8]) -> Result<Self, Error> {
        let length = subaddress.len();
        if length > MAX_SUBADDRESS_LEN {
            return Err(Error::InvalidSubAddressLength(length));
        }
        let mut buffer = [0u8; MAX_SUBADDRESS_LEN];
        buffer[..length].copy_from_slice(subaddress);
        Ok(Self { namespace, length, buffer })
    }

    /// The actor ID of the namespace manager.
    pub fn namespace(&self) -> ActorID {
        self.namespace
    }

    pub fn subaddress(&self) -> &[u8] {
        &self.buffer[..self.length]
    }
}

/// Payload is the data of the Address. Variants are the supported Address protocols.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub enum Payload {
    /// ID protocol address.
    ID(ActorID),
    /// SECP256K1 key address, 20 byte hash of PublicKey
    Secp256k1([u8; PAYLOAD_HASH_LEN]),
    /// Actor protocol address, 20 byte hash of actor data
    Actor([u8; PAYLOAD_HASH_LEN]),
    /// BLS key address, full 48 byte public key
    BLS([u8; BLS_PUB_LEN]),
    /// f4 namespaced address
    Delegated(DelegatedAddress),
}

impl Payload {
    pub fn protocol(&self) -> Protocol {
        match self {
            Self::ID(_) => Protocol::ID,
            Self::Secp256k1(_) => Protocol::Secp256k1,
            Self::Actor(_) => Protocol::Actor,
            Self::BLS(_) => Protocol::BLS,
            Self::Delegated(_) => Protocol::Delegated,
        }
    }

    /// Payload bytes without the protocol byte. IDs and namespaces are LEB128 varints.
    pub fn to_raw_bytes(&self) -> Vec<u8> {
        match self {
            Self::ID(id) => encode::u64(*id, &mut encode::u64_buffer()).to_vec(),
            Self::Secp256k1(hash) | Self::Actor(hash) => hash.to_vec(),
            Self::BLS(key) => key.to_vec(),
            Self::Delegated(addr) => {
                let mut bz = encode::u64(addr.namespace(), &mut encode::u64_buffer()).to_vec();
                bz.extend_from_slice(addr.subaddress());
                bz
            }
        }
    }

    /// Protocol byte followed by the raw payload.
    pub fn to_bytes(&self) -> Vec<u8> {
        let raw = self.to_raw_bytes();
        let mut bz = Vec::with_capacity(raw.len() + 1);
        bz.push(self.protocol() as u8);
        bz.extend(raw);
        bz
    }

    /// Builds a payload from its raw bytes, validating length and varint framing.
    pub fn new(protocol: Protocol, payload: &[u8]) -> Result<Self, Error> {
        let payload = match protocol {
            Protocol::ID => {
                let (id, rest) = decode::u64(payload).map_err(|_| Error::InvalidPayload)?;
                if !rest.is_empty() {
                    return Err(Error::InvalidPayload);
                }
                Self::ID(id)
            }
            Protocol::Secp256k1 => Self::Secp256k1(
                payload.try_into().map_err(|_| Error::InvalidPayloadLength(payload.len()))?,
            ),
            Protocol::Actor => Self::Actor(
                payload.try_into().map_err(|_| Error::InvalidPayloadLength(payload.len()))?,
            ),
            Protocol::BLS => {
                Self::BLS(payload.try_into().map_err(|_| Error::InvalidBLSLength(payload.len()))?)
            }
            Protocol::Delegated => {
                let (namespace, subaddress) =
                    decode::u64(payload).map_err(|_| Error::InvalidPayload)?;
                Self::Delegated(DelegatedAddress::new(namespace, subaddress)?)
            }
        };
        Ok(payload)
    }
}
