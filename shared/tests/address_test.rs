// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use fil_wlib_shared::address::Error;
use fil_wlib_shared::{Address, ErrorKind, Network, Protocol};
use hex_literal::hex;
use test_case::test_case;

const BLS_ADDR: &str =
    "f3xaczqsnxryrhirf4ptfsjb72nv3ogr5uhzsl6qd7l2zahkiaqqkw4fyeim2msfsjdi4sirimpitkc27wgv6q";

#[test_case(
    BLS_ADDR,
    &hex!("03b8059849b78e227444bc7ccb2487fa6d76e347b43e64bf407f5eb203a90084156e17044334c916491a3924450c7a26a1");
    "bls"
)]
#[test_case("f02438", &hex!("008613"); "id")]
#[test_case("f125p5nhte6kwrigoxrcaxftwpinlgspfnqd2zaui", &hex!("01d75fd69e64f2ad1419d7888172cecf4356693cad"); "secp receiver")]
#[test_case("f153zbrv25wvfrqf2vrvlk2qmpietuu6wexiyerja", &hex!("01eef218d75db54b1817558d56ad418f41274a7ac4"); "secp sender")]
fn string_to_binary(text: &str, binary: &[u8]) {
    let addr: Address = text.parse().unwrap();
    assert_eq!(addr.to_bytes(), binary);
    assert_eq!(addr.to_string(), text);

    let decoded = Address::from_bytes(binary).unwrap();
    assert_eq!(decoded, addr);
}

#[test]
fn network_is_kept_from_text() {
    let addr: Address = "t02438".parse().unwrap();
    assert_eq!(addr.network(), Network::Testnet);
    assert_eq!(addr.protocol(), Protocol::ID);
    assert_eq!(addr.id().unwrap(), 2438);
    assert_eq!(addr.to_string(), "t02438");
    assert_eq!(addr.with_network(Network::Mainnet).to_string(), "f02438");
    // The binary form carries no network.
    assert_eq!(addr.to_bytes(), "f02438".parse::<Address>().unwrap().to_bytes());
}

#[test]
fn corrupted_checksum_rejected() {
    let mut text = BLS_ADDR.to_string();
    text.replace_range(10..11, if &text[10..11] == "a" { "b" } else { "a" });
    assert_eq!(text.parse::<Address>(), Err(Error::InvalidChecksum));

    let last = BLS_ADDR.len() - 1;
    let mut text = BLS_ADDR.to_string();
    text.replace_range(last.., if &BLS_ADDR[last..] == "q" { "r" } else { "q" });
    assert!(text.parse::<Address>().is_err());
}

#[test_case("x02438", Error::UnknownNetwork; "unknown network")]
#[test_case("f92438", Error::UnknownProtocol; "unknown protocol")]
#[test_case("f0", Error::InvalidLength; "too short")]
#[test_case("f00012", Error::InvalidID("0012".to_string()); "leading zeros")]
#[test_case("f0-12", Error::InvalidID("-12".to_string()); "signed id")]
#[test_case("f018446744073709551616", Error::InvalidID("18446744073709551616".to_string()); "id overflow")]
fn malformed_text(text: &str, expected: Error) {
    assert_eq!(text.parse::<Address>(), Err(expected));
}

#[test]
fn uppercase_rejected() {
    let upper = format!("f3{}", BLS_ADDR[2..].to_ascii_uppercase());
    assert!(matches!(upper.parse::<Address>(), Err(Error::Base32Decoding(_))));
}

#[test]
fn errors_are_invalid_address() {
    let err: fil_wlib_shared::Error = "f1abc".parse::<Address>().unwrap_err().into();
    assert_eq!(err.kind(), ErrorKind::InvalidAddress);
}

#[test]
fn delegated_round_trip() {
    let addr = Address::new_delegated(10, &[0xaa; 20]).unwrap();
    let text = addr.to_string();
    assert!(text.starts_with("f410f"));
    assert_eq!(text.parse::<Address>().unwrap(), addr);
}

#[test]
fn secp_address_from_public_key() {
    let pubkey = BASE64
        .decode("BENtLYLjXvhSHLCDdmMdg/cRHmfsfWgs/vWsMMrUJHAjBhCRolg+f6aBLThC+9xddiCoeb3f2xyuzPYVqwNsWQI=")
        .unwrap();
    let addr = Address::new_secp256k1(&pubkey).unwrap().with_network(Network::Testnet);
    assert_eq!(addr.to_string(), "t1lrgw6ss5nu5lbhqmmtthc7hmxg6hlt5r6txpy3i");

    assert_eq!(Address::new_secp256k1(&pubkey[1..]), Err(Error::InvalidSECPLength(64)));
}

#[test]
fn bls_address_from_public_key() {
    let pubkey = BASE64
        .decode("jYpwp93MHABEeFfrcDnUo6Hpi0eqEuzARRHVhDRwfkSEd9lhm80EU3Sg+RI28PFu")
        .unwrap();
    let addr = Address::new_bls(&pubkey).unwrap().with_network(Network::Testnet);
    assert_eq!(
        addr.to_string(),
        "t3rwfhbj65zqoaardyk7vxaoouuoq6tc2hvijozqcfchkyindqpzcii56zmgn42bctosqpserw6dyw5y2uf5aq"
    );
}

#[test]
fn cbor_is_byte_string() {
    let addr: Address = "f02438".parse().unwrap();
    assert_eq!(fvm_ipld_encoding::to_vec(&addr).unwrap(), hex!("43008613"));
    let decoded: Address = fvm_ipld_encoding::from_slice(&hex!("43008613")).unwrap();
    assert_eq!(decoded, addr);
}
