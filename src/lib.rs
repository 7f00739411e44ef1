// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Offline parameter builder for Filecoin multisig wallets.
//!
//! Produces the exact call parameters a wallet needs to create a multisig, propose and
//! approve transfers, and administer storage miners through a multisig. Also computes
//! message CIDs and secp256k1 signatures over them.
//!
//! [`proposals`] holds the typed builders; [`Wallet`] exposes the same operations as
//! string-in, string-out calls for front ends that speak JSON and base64.

pub use fil_wlib_shared as shared;
pub use fil_wlib_shared::{Address, Error, ErrorKind, Network, TokenAmount};

pub use self::params::MethodParams;
pub use self::wallet::{Config, KeyType, Wallet};

pub mod json;
pub mod params;
pub mod proposals;
mod wallet;
