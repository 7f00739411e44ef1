// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use cid::Cid;
use fvm_ipld_encoding::tuple::*;
use fvm_ipld_encoding::{RawBytes, DAG_CBOR};
use fvm_shared::MethodNum;
use log::debug;

use crate::{cbor, ipld, Address, Error, TokenAmount};

/// An unsigned chain message. Field order is the chain's wire order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize_tuple, Deserialize_tuple)]
pub struct ChainMessage {
    pub version: u64,
    pub to: Address,
    pub from: Address,
    pub nonce: u64,
    pub value: TokenAmount,
    pub gas_limit: i64,
    pub gas_fee_cap: TokenAmount,
    pub gas_premium: TokenAmount,
    pub method_num: MethodNum,
    pub params: RawBytes,
}

impl ChainMessage {
    /// Canonical encoding of the message.
    pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        cbor::serialize_vec(self, "message")
    }

    /// Content identifier of the message: CIDv1, DAG-CBOR, blake2b-256 of the encoding.
    /// This is the payload signed for secp256k1 senders.
    pub fn cid(&self) -> Result<Cid, Error> {
        let cid = ipld::blake2b_cid(DAG_CBOR, &self.to_bytes()?)?;
        debug!("message {} -> {} nonce {}: cid {}", self.from, self.to, self.nonce, cid);
        Ok(cid)
    }
}
