// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use fvm_shared::METHOD_CONSTRUCTOR;
use num_derive::FromPrimitive;

pub use self::types::*;

mod types;

/// Storage Miner actor methods a multisig proposes
#[derive(FromPrimitive, Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum Method {
    Constructor = METHOD_CONSTRUCTOR,
    ChangeWorkerAddress = 3,
    WithdrawBalance = 16,
    /// Named `ConfirmUpdateWorkerKey` in actors v5 and earlier.
    ConfirmChangeWorkerAddress = 21,
    ChangeOwnerAddress = 23,
}
