// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

pub use self::codes::*;
pub use self::singletons::*;

pub mod codes;
pub mod singletons;
