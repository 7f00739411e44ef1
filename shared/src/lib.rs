// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Building blocks shared by the wallet parameter builders: the address codec, token amounts,
//! canonical CBOR helpers, chain messages and their CIDs, and secp256k1 signing.
//!
//! Everything here is a pure function of its inputs. Nothing is cached and there is no
//! process-wide configuration, so every item may be used from any thread.

pub use self::address::{Address, Network, Payload, Protocol};
pub use self::builtin::*;
pub use self::econ::TokenAmount;
pub use self::error::{Context, Error, ErrorKind};
pub use self::message::ChainMessage;

pub mod address;
pub mod builtin;
pub mod cbor;
pub mod crypto;
pub mod econ;
mod error;
pub mod ipld;
pub mod message;
