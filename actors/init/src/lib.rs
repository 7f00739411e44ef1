// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use fil_wlib_shared::{cbor, BuiltinActor, Error};
use fvm_shared::METHOD_CONSTRUCTOR;
use log::debug;
use num_derive::FromPrimitive;
use serde::Serialize;

pub use self::types::*;

mod types;

/// Init actor methods available
#[derive(FromPrimitive, Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum Method {
    Constructor = METHOD_CONSTRUCTOR,
    Exec = 2,
}

/// Builds the `Exec` parameters that make the init actor construct a legacy builtin actor.
pub fn exec_params<P>(
    actor: BuiltinActor,
    actors_version: u32,
    constructor_params: &P,
) -> Result<ExecParams, Error>
where
    P: Serialize,
{
    let code_cid = actor.legacy_code_id(actors_version)?;
    let constructor_params =
        cbor::serialize(constructor_params, &format!("{} constructor params", actor))?;
    debug!("exec {} (code {}): {} param bytes", actor, code_cid, constructor_params.bytes().len());
    Ok(ExecParams { code_cid, constructor_params })
}

