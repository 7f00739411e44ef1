// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::fmt;

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

/// Protocol defines the addressing protocol used to derive data to an address
#[derive(PartialEq, Eq, Copy, Clone, FromPrimitive, Debug, Hash)]
#[repr(u8)]
pub enum Protocol {
    /// ID protocol addressing
    ID = 0,
    /// SECP256K1 key addressing
    Secp256k1 = 1,
    /// Actor protocol addressing
    Actor = 2,
    /// BLS key addressing
    BLS = 3,
    /// Namespaced sub-addresses (f4)
    Delegated = 4,
}

impl Protocol {
    pub(super) fn from_byte(b: u8) -> Option<Protocol> {
        FromPrimitive::from_u8(b)
    }

    pub(super) fn from_digit(c: &str) -> Option<Protocol> {
        c.parse::<u8>().ok().and_then(Protocol::from_byte)
    }
}

/// Allows Protocol to be displayed as the digit used in textual addresses
impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as u8)
    }
}
