// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use fil_wlib_shared::{ChainMessage, TokenAmount};
use fvm_ipld_encoding::{RawBytes, DAG_CBOR};
use fvm_shared::METHOD_SEND;
use hex_literal::hex;

fn transfer() -> ChainMessage {
    ChainMessage {
        version: 0,
        to: "f125p5nhte6kwrigoxrcaxftwpinlgspfnqd2zaui".parse().unwrap(),
        from: "f153zbrv25wvfrqf2vrvlk2qmpietuu6wexiyerja".parse().unwrap(),
        nonce: 0,
        value: TokenAmount::from_whole(10u64),
        gas_limit: 1_000_000_000_000,
        gas_fee_cap: TokenAmount::from_atto(10_000_000u64),
        gas_premium: TokenAmount::from_atto(10_000_000u64),
        method_num: METHOD_SEND,
        params: RawBytes::default(),
    }
}

// Tests to match with Go github.com/filecoin-project/go-state-types/types.Message
#[test]
fn message_encoding() {
    assert_eq!(
        transfer().to_bytes().unwrap(),
        hex!(
            "8a005501d75fd69e64f2ad1419d7888172cecf4356693cad5501eef218d75db54b1817558d56ad418f41274a7ac40049008ac7230489e800001b000000e8d4a51000440098968044009896800040"
        )
    );
}

#[test]
fn message_cid() {
    let cid = transfer().cid().unwrap();
    assert_eq!(cid.codec(), DAG_CBOR);
    assert_eq!(
        cid.to_bytes(),
        hex!("0171a0e4022003b694881f962a52598bbec2ac1a383a0c32b519976c15e3f2b6adcc0b6c8463")
    );
    assert_eq!(BASE64.encode(cid.to_bytes()), "AXGg5AIgA7aUiB+WKlJZi77CrBo4OgwytRmXbBXj8ratzAtshGM=");
    assert_eq!(cid.to_string(), "bafy2bzaceab3nfeid6lcuuszro7mfla2ha5aymvvdglwyfpd6k3k3talnscgg");
}

#[test]
fn every_field_changes_the_cid() {
    let base = transfer().cid().unwrap();
    let variants: Vec<Box<dyn Fn(&mut ChainMessage)>> = vec![
        Box::new(|m| m.nonce = 1),
        Box::new(|m| m.value = TokenAmount::from_whole(11u64)),
        Box::new(|m| m.gas_limit += 1),
        Box::new(|m| m.gas_fee_cap = TokenAmount::zero()),
        Box::new(|m| m.gas_premium = TokenAmount::zero()),
        Box::new(|m| m.method_num = 2),
        Box::new(|m| m.params = RawBytes::new(vec![0x80])),
        Box::new(|m| std::mem::swap(&mut m.to, &mut m.from)),
    ];
    for change in variants {
        let mut msg = transfer();
        change(&mut msg);
        assert_ne!(msg.cid().unwrap(), base);
    }
}

#[test]
fn message_decodes() {
    let msg = transfer();
    let decoded: ChainMessage = fvm_ipld_encoding::from_slice(&msg.to_bytes().unwrap()).unwrap();
    assert_eq!(decoded, msg);
}
