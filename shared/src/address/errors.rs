// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use thiserror::Error;

use super::{BLS_PUB_LEN, PAYLOAD_HASH_LEN, SECP_PUB_LEN};

/// Address error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("unknown address network")]
    UnknownNetwork,
    #[error("unknown address protocol")]
    UnknownProtocol,
    #[error("invalid address payload")]
    InvalidPayload,
    #[error("invalid address length")]
    InvalidLength,
    #[error("invalid payload length, wanted: {} got: {0}", PAYLOAD_HASH_LEN)]
    InvalidPayloadLength(usize),
    #[error("invalid BLS public key length, wanted: {} got: {0}", BLS_PUB_LEN)]
    InvalidBLSLength(usize),
    #[error("invalid SECP256K1 public key length, wanted: {} got: {0}", SECP_PUB_LEN)]
    InvalidSECPLength(usize),
    #[error("delegated sub-address too long: {0} bytes")]
    InvalidSubAddressLength(usize),
    #[error("invalid address checksum")]
    InvalidChecksum,
    #[error("decoding payload from base32: {0}")]
    Base32Decoding(String),
    #[error("non-canonical actor ID {0:?}")]
    InvalidID(String),
    #[error("cannot get id from non id address")]
    NonIDAddress,
}
