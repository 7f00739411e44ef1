// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::fmt::Display;

use fvm_shared::error::ExitCode;
use thiserror::Error;

use crate::{address, econ};

/// Broad classification of a failure, stable across message wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed address text or bytes, bad checksum, unsupported protocol.
    InvalidAddress,
    /// Negative, unparseable or badly-suffixed token amount.
    InvalidAmount,
    /// A value that cannot be represented in the canonical encoding.
    Serialization,
    /// Malformed private or public key material.
    InvalidKey,
    /// The signature scheme rejected its input.
    Signing,
    /// An argument outside the supported range, e.g. an unknown actors version.
    IllegalArgument,
}

/// The error type returned by every fallible operation in the wallet library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{msg}")]
pub struct Error {
    kind: ErrorKind,
    /// Message for debugging purposes.
    msg: String,
}

impl Error {
    pub fn new(kind: ErrorKind, msg: String) -> Self {
        Self { kind, msg }
    }

    pub fn invalid_address(msg: String) -> Self {
        Self::new(ErrorKind::InvalidAddress, msg)
    }
    pub fn invalid_amount(msg: String) -> Self {
        Self::new(ErrorKind::InvalidAmount, msg)
    }
    pub fn serialization(msg: String) -> Self {
        Self::new(ErrorKind::Serialization, msg)
    }
    pub fn invalid_key(msg: String) -> Self {
        Self::new(ErrorKind::InvalidKey, msg)
    }
    pub fn signing(msg: String) -> Self {
        Self::new(ErrorKind::Signing, msg)
    }
    pub fn illegal_argument(msg: String) -> Self {
        Self::new(ErrorKind::IllegalArgument, msg)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Error message of the error.
    pub fn msg(&self) -> &str {
        &self.msg
    }

    /// The exit code the chain would report for a call failing this way.
    pub fn exit_code(&self) -> ExitCode {
        match self.kind {
            ErrorKind::InvalidAddress | ErrorKind::InvalidAmount | ErrorKind::IllegalArgument => {
                ExitCode::USR_ILLEGAL_ARGUMENT
            }
            ErrorKind::Serialization => ExitCode::USR_SERIALIZATION,
            ErrorKind::InvalidKey => ExitCode::USR_FORBIDDEN,
            ErrorKind::Signing => ExitCode::USR_UNSPECIFIED,
        }
    }

    /// Prefix error message with a string message.
    pub fn wrap(mut self, msg: impl AsRef<str>) -> Self {
        self.msg = format!("{}: {}", msg.as_ref(), self.msg);
        self
    }
}

impl From<address::Error> for Error {
    fn from(e: address::Error) -> Self {
        Self::invalid_address(e.to_string())
    }
}

impl From<econ::ParseError> for Error {
    fn from(e: econ::ParseError) -> Self {
        Self::invalid_amount(e.to_string())
    }
}

/// Converts a raw encoding error into a serialization error.
impl From<fvm_ipld_encoding::Error> for Error {
    fn from(e: fvm_ipld_encoding::Error) -> Self {
        Self::serialization(format!(
            "failed to encode parameter(ExitCode: {}): {}",
            ExitCode::USR_SERIALIZATION.value(),
            e
        ))
    }
}

/// Convenience macro for generating wallet errors
#[macro_export]
macro_rules! wlib_error {
    // Error with only one stringable expression
    ( $code:ident; $msg:expr ) => { $crate::Error::$code($msg.to_string()) };

    // String with positional arguments
    ( $code:ident; $msg:literal $(, $ex:expr)+ ) => {
        $crate::Error::$code(format!($msg, $($ex,)*))
    };

    // Error with only one stringable expression, with comma separator
    ( $code:ident, $msg:expr ) => { $crate::wlib_error!($code; $msg) };

    // String with positional arguments, with comma separator
    ( $code:ident, $msg:literal $(, $ex:expr)+ ) => {
        $crate::wlib_error!($code; $msg $(, $ex)*)
    };
}

// Adds context to an error's descriptive message.
pub trait Context<T> {
    fn context<C>(self, context: C) -> Result<T, Error>
    where
        C: Display + 'static;

    fn with_context<C, F>(self, f: F) -> Result<T, Error>
    where
        C: Display + 'static,
        F: FnOnce() -> C;
}

impl<T, E: Into<Error>> Context<T> for Result<T, E> {
    fn context<C>(self, context: C) -> Result<T, Error>
    where
        C: Display + 'static,
    {
        self.map_err(|err| err.into().wrap(context.to_string()))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, Error>
    where
        C: Display + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|err| err.into().wrap(f().to_string()))
    }
}
