// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! secp256k1 key derivation and signing.
//!
//! Payloads are hashed with blake2b-256 before signing. Signatures are 65 bytes:
//! `r ++ s ++ recovery id`, with an RFC 6979 nonce and low-S normalisation, so the same key and
//! payload always produce the same signature.

use libsecp256k1::util::{FULL_PUBLIC_KEY_SIZE, SECRET_KEY_SIZE, SIGNATURE_SIZE};
use libsecp256k1::{Message, PublicKey, PublicKeyFormat, RecoveryId, SecretKey};
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::address::Network;
use crate::ipld::blake2b_256;
use crate::{Address, Error};

/// Length of a recoverable secp256k1 signature.
pub const SECP_SIG_LEN: usize = SIGNATURE_SIZE + 1;

/// Signature scheme tag. Only secp256k1 is produced by this library.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum SignatureType {
    Secp256k1 = 1,
}

/// A signature together with the scheme that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Signature {
    sig_type: SignatureType,
    bytes: [u8; SECP_SIG_LEN],
}

impl Signature {
    pub fn sig_type(&self) -> SignatureType {
        self.sig_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// A secp256k1 private key.
pub struct PrivateKey(SecretKey);

impl PrivateKey {
    pub fn from_bytes(bz: &[u8]) -> Result<Self, Error> {
        if bz.len() != SECRET_KEY_SIZE {
            return Err(Error::invalid_key(format!(
                "invalid key length, wanted: {} got: {}",
                SECRET_KEY_SIZE,
                bz.len()
            )));
        }
        SecretKey::parse_slice(bz)
            .map(PrivateKey)
            .map_err(|e| Error::invalid_key(format!("{:?}", e)))
    }

    /// Uncompressed public key.
    pub fn public_key(&self) -> [u8; FULL_PUBLIC_KEY_SIZE] {
        PublicKey::from_secret_key(&self.0).serialize()
    }

    /// Secp256k1 address of the key on `network`.
    pub fn address(&self, network: Network) -> Result<Address, Error> {
        Ok(Address::new_secp256k1(&self.public_key())?.with_network(network))
    }

    /// Signs the blake2b-256 digest of `payload`.
    pub fn sign(&self, payload: &[u8]) -> Signature {
        let digest = Message::parse(&blake2b_256(payload));
        let (rs, recovery_id) = libsecp256k1::sign(&digest, &self.0);

        let mut bytes = [0u8; SECP_SIG_LEN];
        bytes[..SIGNATURE_SIZE].copy_from_slice(&rs.serialize());
        bytes[SIGNATURE_SIZE] = recovery_id.serialize();
        Signature { sig_type: SignatureType::Secp256k1, bytes }
    }
}

/// Derives the uncompressed public key of a raw 32-byte private key.
pub fn public_key(private_key: &[u8]) -> Result<[u8; FULL_PUBLIC_KEY_SIZE], Error> {
    Ok(PrivateKey::from_bytes(private_key)?.public_key())
}

/// Signs `payload` (typically message CID bytes) with a raw 32-byte private key.
pub fn sign(private_key: &[u8], payload: &[u8]) -> Result<Signature, Error> {
    Ok(PrivateKey::from_bytes(private_key)?.sign(payload))
}

/// Checks `signature` over `payload` against an uncompressed public key.
pub fn verify(public_key: &[u8], payload: &[u8], signature: &[u8]) -> Result<bool, Error> {
    if signature.len() != SECP_SIG_LEN {
        return Err(Error::signing(format!(
            "invalid signature length, wanted: {} got: {}",
            SECP_SIG_LEN,
            signature.len()
        )));
    }
    let public_key = PublicKey::parse_slice(public_key, Some(PublicKeyFormat::Full))
        .map_err(|e| Error::invalid_key(format!("{:?}", e)))?;
    let rs = libsecp256k1::Signature::parse_standard_slice(&signature[..SIGNATURE_SIZE])
        .map_err(|e| Error::signing(format!("{:?}", e)))?;
    let recovery_id = RecoveryId::parse(signature[SIGNATURE_SIZE])
        .map_err(|e| Error::signing(format!("{:?}", e)))?;

    let digest = Message::parse(&blake2b_256(payload));
    let recovered = libsecp256k1::recover(&digest, &rs, &recovery_id)
        .map_err(|e| Error::signing(format!("{:?}", e)))?;
    Ok(recovered == public_key && libsecp256k1::verify(&digest, &rs, &public_key))
}
