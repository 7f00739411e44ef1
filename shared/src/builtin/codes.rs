// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Code CIDs of legacy (pre-bundle) builtin actors.
//!
//! Before actor bundles, an actor's code was identified by a CIDv1 with the raw codec and an
//! identity multihash inlining `fil/<version>/<name>`.

use std::fmt;
use std::ops::RangeInclusive;

use cid::Cid;
use fvm_ipld_encoding::IPLD_RAW;

use crate::{ipld, wlib_error, Error};

/// Actors version used when the caller does not pick one.
pub const DEFAULT_ACTORS_VERSION: u32 = 5;

/// Actors versions with legacy code CIDs.
pub const LEGACY_ACTORS_VERSIONS: RangeInclusive<u32> = 1..=7;

/// Builtin actors this library builds parameters for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BuiltinActor {
    Multisig,
}

impl BuiltinActor {
    /// Name used in the actor's legacy code CID.
    pub fn name(self) -> &'static str {
        match self {
            BuiltinActor::Multisig => "multisig",
        }
    }

    /// Legacy code CID of the actor for the given actors version.
    pub fn legacy_code_id(self, version: u32) -> Result<Cid, Error> {
        if !LEGACY_ACTORS_VERSIONS.contains(&version) {
            return Err(wlib_error!(illegal_argument; "unsupported actors version {}", version));
        }
        ipld::identity_cid(IPLD_RAW, format!("fil/{}/{}", version, self.name()).as_bytes())
    }
}

impl fmt::Display for BuiltinActor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn legacy_multisig_code() {
        let cid = BuiltinActor::Multisig.legacy_code_id(DEFAULT_ACTORS_VERSION).unwrap();
        assert_eq!(cid.codec(), IPLD_RAW);
        assert_eq!(cid.hash().code(), ipld::IDENTITY_HASH);
        assert_eq!(cid.hash().digest(), b"fil/5/multisig");
    }

    #[test]
    fn unknown_version_rejected() {
        for version in [0, 8] {
            let err = BuiltinActor::Multisig.legacy_code_id(version).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::IllegalArgument);
        }
    }
}
