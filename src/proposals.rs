// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Builders for the parameters a multisig wallet sends on chain.
//!
//! Every builder returns the canonical bytes of the outermost record. Nested parameters are
//! encoded first and embedded as a byte string, exactly as the receiving actor expects them.

use fil_actor_miner::{
    ChangeOwnerAddressParams, ChangeWorkerAddressParams, Method as MinerMethod,
    WithdrawBalanceParams,
};
use fil_actor_multisig::{
    ConstructorParams, ProposalHashData, ProposeParams, TxnID, SIGNERS_MAX,
    START_EPOCH_ACTORS_VERSION,
};
use fil_actor_power::{CreateMinerParams, Method as PowerMethod};
use fil_wlib_shared::{
    wlib_error, Address, BuiltinActor, Error, TokenAmount, STORAGE_POWER_ACTOR_ADDR,
};
use fvm_ipld_encoding::{BytesDe, RawBytes};
use fvm_shared::clock::ChainEpoch;
use fvm_shared::sector::RegisteredPoStProof;
use fvm_shared::{MethodNum, METHOD_SEND};
use log::debug;

use crate::params::MethodParams;

/// `Exec` parameters for the init actor (`f01`) that create a multisig wallet. Only actors
/// versions whose multisig constructor carries a start epoch are supported.
pub fn create_multisig(
    signers: Vec<Address>,
    num_approvals_threshold: u64,
    unlock_duration: ChainEpoch,
    start_epoch: ChainEpoch,
    actors_version: u32,
) -> Result<RawBytes, Error> {
    if signers.is_empty() {
        return Err(wlib_error!(illegal_argument; "must have at least one signer"));
    }
    if signers.len() > SIGNERS_MAX {
        return Err(wlib_error!(
            illegal_argument;
            "cannot add more than {} signers, got {}",
            SIGNERS_MAX,
            signers.len()
        ));
    }
    if actors_version < START_EPOCH_ACTORS_VERSION {
        return Err(wlib_error!(
            illegal_argument;
            "multisig creation needs actors version {} or later, got {}",
            START_EPOCH_ACTORS_VERSION,
            actors_version
        ));
    }

    let constructor_params =
        ConstructorParams { signers, num_approvals_threshold, unlock_duration, start_epoch };
    let exec = fil_actor_init::exec_params(
        BuiltinActor::Multisig,
        actors_version,
        &constructor_params,
    )?;
    MethodParams::from(exec).serialize()
}

/// Proposes a plain transfer of `value` to `to`.
pub fn propose_send(to: Address, value: TokenAmount) -> Result<RawBytes, Error> {
    propose(to, value, METHOD_SEND, None)
}

/// Proposes withdrawing `amount` from a miner's available balance.
pub fn propose_withdraw_balance(miner: Address, amount: TokenAmount) -> Result<RawBytes, Error> {
    let inner = WithdrawBalanceParams { amount_requested: amount };
    propose(
        miner,
        TokenAmount::zero(),
        MinerMethod::WithdrawBalance as MethodNum,
        Some(inner.into()),
    )
}

/// Proposes handing a miner over to `new_owner`.
pub fn propose_change_owner(
    new_owner: Address,
    miner: Address,
    value: TokenAmount,
) -> Result<RawBytes, Error> {
    let inner = ChangeOwnerAddressParams { new_owner };
    propose(miner, value, MinerMethod::ChangeOwnerAddress as MethodNum, Some(inner.into()))
}

/// Proposes a new worker key and control address set for a miner.
pub fn propose_change_worker(
    miner: Address,
    new_worker: Address,
    new_control_addresses: Vec<Address>,
) -> Result<RawBytes, Error> {
    let inner = ChangeWorkerAddressParams { new_worker, new_control_addresses };
    propose(
        miner,
        TokenAmount::zero(),
        MinerMethod::ChangeWorkerAddress as MethodNum,
        Some(inner.into()),
    )
}

/// Proposes confirming a previously requested worker key change.
pub fn propose_confirm_update_worker_key(miner: Address) -> Result<RawBytes, Error> {
    propose(
        miner,
        TokenAmount::zero(),
        MinerMethod::ConfirmChangeWorkerAddress as MethodNum,
        None,
    )
}

/// Proposes creating a miner through the storage power actor.
pub fn propose_create_miner(
    owner: Address,
    worker: Address,
    window_post_proof_type: RegisteredPoStProof,
    peer: Option<Vec<u8>>,
    multiaddrs: Option<Vec<Vec<u8>>>,
) -> Result<RawBytes, Error> {
    if let RegisteredPoStProof::Invalid(code) = window_post_proof_type {
        return Err(wlib_error!(illegal_argument; "unknown window PoSt proof type {}", code));
    }
    let inner = CreateMinerParams {
        owner,
        worker,
        window_post_proof_type,
        peer: peer.unwrap_or_default(),
        multiaddrs: multiaddrs.unwrap_or_default().into_iter().map(BytesDe).collect(),
    };
    propose(
        STORAGE_POWER_ACTOR_ADDR,
        TokenAmount::zero(),
        PowerMethod::CreateMiner as MethodNum,
        Some(inner.into()),
    )
}

/// `Approve` parameters for pending transaction `txn_id`, bound to the proposal made by
/// `requester` with the given call details.
pub fn approve(
    txn_id: TxnID,
    requester: Address,
    to: Address,
    value: TokenAmount,
    method: MethodNum,
    params: RawBytes,
) -> Result<RawBytes, Error> {
    let txn = ProposalHashData { requester, to, value, method, params };
    fil_actor_multisig::approval_params(txn_id, &txn)
}

fn propose(
    to: Address,
    value: TokenAmount,
    method: MethodNum,
    params: Option<MethodParams>,
) -> Result<RawBytes, Error> {
    let params = match params {
        Some(inner) => inner.serialize()?,
        None => RawBytes::default(),
    };
    debug!(
        "propose method {} to {} with value {}: {} param bytes",
        method,
        to,
        value,
        params.bytes().len()
    );
    MethodParams::from(ProposeParams { to, value, method, params }).serialize()
}
