// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Canonical (DAG-CBOR) encoding helpers.
//!
//! Parameter records derive `Serialize_tuple`, so they encode as fixed-arity arrays in field
//! declaration order. Integers take their shortest form, byte fields are length-prefixed byte
//! strings and `None` encodes as an explicit null. The same value always yields the same bytes.

use fvm_ipld_encoding::RawBytes;
use serde::{de, ser};

use crate::Error;

/// Serializes a structure as a CBOR vector of bytes, returning a serialization error on failure.
/// `desc` is a noun phrase for the object being serialized, included in any error message.
pub fn serialize_vec<T>(value: &T, desc: &str) -> Result<Vec<u8>, Error>
where
    T: ser::Serialize + ?Sized,
{
    fvm_ipld_encoding::to_vec(value)
        .map_err(|e| Error::from(e).wrap(format!("failed to serialize {}", desc)))
}

/// Serializes a structure as CBOR bytes, returning a serialization error on failure.
/// `desc` is a noun phrase for the object being serialized, included in any error message.
pub fn serialize<T>(value: &T, desc: &str) -> Result<RawBytes, Error>
where
    T: ser::Serialize + ?Sized,
{
    Ok(RawBytes::new(serialize_vec(value, desc)?))
}

/// Deserialises CBOR-encoded bytes as a structure, returning a serialization error on failure.
/// `desc` is a noun phrase for the object being deserialized, included in any error message.
pub fn deserialize<O: de::DeserializeOwned>(v: &RawBytes, desc: &str) -> Result<O, Error> {
    fvm_ipld_encoding::from_slice(v.bytes())
        .map_err(|e| Error::from(e).wrap(format!("failed to deserialize {}", desc)))
}
