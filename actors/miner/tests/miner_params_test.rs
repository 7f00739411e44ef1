// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use fil_actor_miner::{
    ChangeOwnerAddressParams, ChangeWorkerAddressParams, Method, WithdrawBalanceParams,
};
use fil_wlib_shared::{cbor, Address, TokenAmount};
use fvm_ipld_encoding::RawBytes;
use hex_literal::hex;
use num_traits::FromPrimitive;

#[test]
fn method_numbers() {
    assert_eq!(Method::ChangeWorkerAddress as u64, 3);
    assert_eq!(Method::WithdrawBalance as u64, 16);
    assert_eq!(Method::ConfirmChangeWorkerAddress as u64, 21);
    assert_eq!(Method::ChangeOwnerAddress as u64, 23);
    assert_eq!(Method::from_u64(16), Some(Method::WithdrawBalance));
    assert_eq!(Method::from_u64(2), None);
}

#[test]
fn withdraw_balance_is_one_tuple() {
    let params = WithdrawBalanceParams {
        amount_requested: TokenAmount::from_atto(100_000_000_000_000_000u64),
    };
    assert_eq!(
        cbor::serialize_vec(&params, "withdraw params").unwrap(),
        hex!("814900016345785d8a0000")
    );
}

#[test]
fn change_owner_is_bare_address() {
    let params = ChangeOwnerAddressParams { new_owner: Address::new_id(2438) };
    let bz = cbor::serialize(&params, "change owner params").unwrap();
    assert_eq!(bz.bytes(), hex!("43008613"));
    let decoded: ChangeOwnerAddressParams = cbor::deserialize(&bz, "change owner params").unwrap();
    assert_eq!(decoded, params);
}

#[test]
fn change_worker_keeps_control_order() {
    let params = ChangeWorkerAddressParams {
        new_worker: Address::new_id(1000),
        new_control_addresses: vec![Address::new_id(1002), Address::new_id(1001)],
    };
    assert_eq!(
        cbor::serialize_vec(&params, "change worker params").unwrap(),
        hex!("82 4300e807 82 4300ea07 4300e907")
    );

    let empty = ChangeWorkerAddressParams {
        new_worker: Address::new_id(1000),
        new_control_addresses: vec![],
    };
    let bz = cbor::serialize(&empty, "change worker params").unwrap();
    assert_eq!(bz, RawBytes::new(hex!("824300e80780").to_vec()));
}
