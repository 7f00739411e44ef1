// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! The closed set of call parameter records this library produces.

use fil_actor_init::ExecParams;
use fil_actor_miner::{ChangeOwnerAddressParams, ChangeWorkerAddressParams, WithdrawBalanceParams};
use fil_actor_multisig::{ConstructorParams, ProposalHashData, ProposeParams, TxnIDParams};
use fil_actor_power::CreateMinerParams;
use fil_wlib_shared::{cbor, Error};
use fvm_ipld_encoding::RawBytes;

/// Parameters of one actor method call, encoded with the chain's schema for that method.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MethodParams {
    Constructor(ConstructorParams),
    Exec(ExecParams),
    Propose(ProposeParams),
    WithdrawBalance(WithdrawBalanceParams),
    ChangeWorkerAddress(ChangeWorkerAddressParams),
    ChangeOwnerAddress(ChangeOwnerAddressParams),
    TxnID(TxnIDParams),
    ProposalHashData(ProposalHashData),
    CreateMiner(CreateMinerParams),
}

macro_rules! method_params {
    ($($variant:ident($params:ty) => $name:literal,)*) => {
        $(
            impl From<$params> for MethodParams {
                fn from(params: $params) -> Self {
                    MethodParams::$variant(params)
                }
            }
        )*

        impl MethodParams {
            /// Human readable name of the record, used in error messages.
            pub fn name(&self) -> &'static str {
                match self {
                    $(MethodParams::$variant(_) => $name,)*
                }
            }

            /// Canonical encoding of the record.
            pub fn serialize(&self) -> Result<RawBytes, Error> {
                match self {
                    $(MethodParams::$variant(params) => cbor::serialize(params, $name),)*
                }
            }
        }
    };
}

method_params! {
    Constructor(ConstructorParams) => "multisig constructor params",
    Exec(ExecParams) => "exec params",
    Propose(ProposeParams) => "propose params",
    WithdrawBalance(WithdrawBalanceParams) => "withdraw balance params",
    ChangeWorkerAddress(ChangeWorkerAddressParams) => "change worker address params",
    ChangeOwnerAddress(ChangeOwnerAddressParams) => "change owner address params",
    TxnID(TxnIDParams) => "txn id params",
    ProposalHashData(ProposalHashData) => "proposal hash data",
    CreateMiner(CreateMinerParams) => "create miner params",
}

#[cfg(test)]
mod tests {
    use super::*;
    use fil_wlib_shared::{Address, ErrorKind, TokenAmount};
    use fvm_shared::bigint::BigUint;

    #[test]
    fn dispatch_matches_record_encoding() {
        let withdraw = WithdrawBalanceParams { amount_requested: TokenAmount::from_atto(1u64) };
        let params = MethodParams::from(withdraw.clone());
        assert_eq!(params.name(), "withdraw balance params");
        assert_eq!(params.serialize().unwrap(), cbor::serialize(&withdraw, "x").unwrap());
    }

    #[test]
    fn failure_names_the_record() {
        let params = MethodParams::from(ProposeParams {
            to: Address::new_id(1),
            value: TokenAmount::from_atto(BigUint::from(1u8) << 2048usize),
            method: 0,
            params: RawBytes::default(),
        });
        let err = params.serialize().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Serialization);
        assert!(err.msg().starts_with("failed to serialize propose params"));
    }
}
