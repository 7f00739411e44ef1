// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use fil_actor_power::{CreateMinerParams, Method};
use fil_wlib_shared::{cbor, Address};
use fvm_ipld_encoding::BytesDe;
use fvm_shared::sector::RegisteredPoStProof;
use hex_literal::hex;
use num_traits::FromPrimitive;

fn params() -> CreateMinerParams {
    CreateMinerParams {
        owner: Address::new_id(1000),
        worker: Address::new_id(1001),
        window_post_proof_type: RegisteredPoStProof::StackedDRGWindow32GiBV1,
        peer: vec![],
        multiaddrs: vec![],
    }
}

#[test]
fn method_numbers() {
    assert_eq!(Method::CreateMiner as u64, 2);
    assert_eq!(Method::from_u64(7), None);
    assert_eq!(Method::from_u64(9), Some(Method::CurrentTotalPower));
}

#[test]
fn absent_peer_and_multiaddrs_are_empty() {
    assert_eq!(
        cbor::serialize_vec(&params(), "create miner params").unwrap(),
        hex!("85 4300e807 4300e907 08 40 80")
    );
}

#[test]
fn peer_precedes_multiaddrs() {
    let mut p = params();
    p.peer = vec![0x01, 0x02];
    p.multiaddrs = vec![BytesDe(vec![0x0a])];
    let bz = cbor::serialize(&p, "create miner params").unwrap();
    assert_eq!(bz.bytes(), hex!("85 4300e807 4300e907 08 420102 81410a"));

    let decoded: CreateMinerParams = cbor::deserialize(&bz, "create miner params").unwrap();
    assert_eq!(decoded, p);
}
