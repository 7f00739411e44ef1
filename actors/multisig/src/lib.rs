// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use fil_wlib_shared::ipld::{blake2b_256, BLAKE2B_256_LEN};
use fil_wlib_shared::{cbor, Error};
use fvm_ipld_encoding::RawBytes;
use fvm_shared::METHOD_CONSTRUCTOR;
use log::debug;
use num_derive::FromPrimitive;

pub use self::types::*;

mod types;

/// Multisig actor methods available
#[derive(FromPrimitive, Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum Method {
    Constructor = METHOD_CONSTRUCTOR,
    Propose = 2,
    Approve = 3,
    Cancel = 4,
    AddSigner = 5,
    RemoveSigner = 6,
    SwapSigner = 7,
    ChangeNumApprovalsThreshold = 8,
    LockBalance = 9,
}

/// Computes a digest of a proposed transaction. This digest is used to confirm identity of the
/// transaction associated with an ID, which might change under chain re-orgs.
pub fn compute_proposal_hash(txn: &ProposalHashData) -> Result<[u8; BLAKE2B_256_LEN], Error> {
    let data = cbor::serialize_vec(txn, "proposal hash data")?;
    Ok(blake2b_256(&data))
}

/// Builds `Approve` (or `Cancel`) parameters binding `id` to the exact proposal described by
/// `txn`. Any change to the proposal yields a different hash, so a stale approval is rejected
/// on chain.
pub fn approval_params(id: TxnID, txn: &ProposalHashData) -> Result<RawBytes, Error> {
    let proposal_hash = compute_proposal_hash(txn)?;
    debug!(
        "txn {} from {} to {} method {}: proposal hash {}",
        id.0,
        txn.requester,
        txn.to,
        txn.method,
        hex::encode(proposal_hash)
    );
    cbor::serialize(&TxnIDParams { id, proposal_hash: proposal_hash.to_vec() }, "approval params")
}
