// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use fil_wlib_shared::crypto::{self, PrivateKey, SignatureType};
use fil_wlib_shared::{ErrorKind, Network};
use hex_literal::hex;

const PRIVATE_KEY: &str = "p7ZGtfT3MyOdkVaEaE2LzT12fcl2N95jsiYuvBZZ1NA=";

fn decode(s: &str) -> Vec<u8> {
    BASE64.decode(s).unwrap()
}

#[test]
fn private_to_public() {
    let public = crypto::public_key(&decode(PRIVATE_KEY)).unwrap();
    assert_eq!(
        BASE64.encode(public),
        "BN4D/kPsYngi68E2wyEsJgqeaIyv/nqBK07s7TokD1CUUtGkVTtJmvMBCE2b0ygksRzVDXYJJzUweVRWDfn0SB0="
    );
}

#[test]
fn sign_is_deterministic() {
    let key = decode(PRIVATE_KEY);
    let sig = crypto::sign(&key, b"Hello World!").unwrap();
    assert_eq!(sig.sig_type(), SignatureType::Secp256k1);
    assert_eq!(
        BASE64.encode(sig.bytes()),
        "CjSBxOfeEIyWJuKgo7od+wrd+xGZJDbOkIBg+sIo9kZ3bWP0WhIYhkS9Pf9hIbtftszIuzHKFulT0hneCFBEMwE="
    );
    assert_eq!(crypto::sign(&key, b"Hello World!").unwrap(), sig);

    let public = crypto::public_key(&key).unwrap();
    assert!(crypto::verify(&public, b"Hello World!", sig.bytes()).unwrap());
    assert!(!crypto::verify(&public, b"Hello World?", sig.bytes()).unwrap());
}

#[test]
fn sign_message_cid() {
    let key = PrivateKey::from_bytes(&decode("67WMRDA2ldmfcQ87DSHCy+ppKs3iSyNjxfBD7dR68Qw=")).unwrap();
    assert_eq!(
        key.address(Network::Mainnet).unwrap().to_string(),
        "f153zbrv25wvfrqf2vrvlk2qmpietuu6wexiyerja"
    );

    let cid = hex!("0171a0e4022003b694881f962a52598bbec2ac1a383a0c32b519976c15e3f2b6adcc0b6c8463");
    assert_eq!(
        BASE64.encode(key.sign(&cid).bytes()),
        "jHF0ghnCwyl7XNEfgXx1+9sjbg3lJe09gEux/+m5pRFudpQEeFxxt9ZACHNDE//u31r3GBZ4aYixpV8xYp57HgA="
    );
}

#[test]
fn signature_type_encodes_as_integer() {
    assert_eq!(fvm_ipld_encoding::to_vec(&SignatureType::Secp256k1).unwrap(), hex!("01"));
}

#[test]
fn bad_keys_rejected() {
    for key in [vec![], vec![1u8; 31], vec![1u8; 33], vec![0u8; 32], vec![0xffu8; 32]] {
        let err = crypto::public_key(&key).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidKey);
        assert_eq!(crypto::sign(&key, b"payload").unwrap_err().kind(), ErrorKind::InvalidKey);
    }
}

#[test]
fn bad_signature_length_rejected() {
    let key = decode(PRIVATE_KEY);
    let public = crypto::public_key(&key).unwrap();
    let err = crypto::verify(&public, b"payload", &[0u8; 64]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Signing);
}
