// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use cid::multihash::MultihashGeneric;
use cid::Cid;

use crate::Error;

/// Multihash sized to match `Cid`.
type Multihash = MultihashGeneric<64>;

/// Multihash code of the identity "hash".
pub const IDENTITY_HASH: u64 = 0x0;

/// Multihash code of blake2b with a 256 bit digest.
pub const BLAKE2B_256: u64 = 0xb220;

/// Length of a blake2b-256 digest.
pub const BLAKE2B_256_LEN: usize = 32;

pub fn blake2b_256(data: &[u8]) -> [u8; BLAKE2B_256_LEN] {
    let digest = blake2b_simd::Params::new().hash_length(BLAKE2B_256_LEN).hash(data);
    let mut hash = [0u8; BLAKE2B_256_LEN];
    hash.copy_from_slice(digest.as_bytes());
    hash
}

/// Returns a CIDv1 for `data` under `codec`, addressed by its blake2b-256 digest.
pub fn blake2b_cid(codec: u64, data: &[u8]) -> Result<Cid, Error> {
    wrap(codec, BLAKE2B_256, &blake2b_256(data))
}

/// Returns a CIDv1 that inlines `data` with the identity multihash.
pub fn identity_cid(codec: u64, data: &[u8]) -> Result<Cid, Error> {
    wrap(codec, IDENTITY_HASH, data)
}

fn wrap(codec: u64, code: u64, digest: &[u8]) -> Result<Cid, Error> {
    let mh = Multihash::wrap(code, digest)
        .map_err(|e| Error::serialization(format!("failed to build multihash: {}", e)))?;
    Ok(Cid::new_v1(codec, mh))
}
