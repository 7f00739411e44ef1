// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::fmt;
use std::str::FromStr;

use super::Error;

pub const MAINNET_PREFIX: &str = "f";
pub const TESTNET_PREFIX: &str = "t";

/// Network the textual form of an address belongs to. Only the leading character of the text
/// depends on it; the binary form is network independent.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
}

impl Network {
    pub fn to_prefix(self) -> &'static str {
        match self {
            Network::Mainnet => MAINNET_PREFIX,
            Network::Testnet => TESTNET_PREFIX,
        }
    }

    pub(super) fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            MAINNET_PREFIX => Some(Network::Mainnet),
            TESTNET_PREFIX => Some(Network::Testnet),
            _ => None,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => f.write_str("mainnet"),
            Network::Testnet => f.write_str("testnet"),
        }
    }
}

/// Accepts the network name or its address prefix.
impl FromStr for Network {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" | MAINNET_PREFIX => Ok(Network::Mainnet),
            "testnet" | TESTNET_PREFIX => Ok(Network::Testnet),
            _ => Err(Error::UnknownNetwork),
        }
    }
}
