// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::fmt;
use std::str::FromStr;

use fvm_shared::bigint::{bigint_ser, BigInt, BigUint, Sign};
use num_traits::Zero;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Number of attoFIL in one FIL.
pub const FILECOIN_PRECISION: u64 = 1_000_000_000_000_000_000;

/// Decimal places between FIL and attoFIL.
const FIL_DECIMALS: usize = 18;

/// Longest numeric part accepted by the parser.
const MAX_AMOUNT_LEN: usize = 50;

/// Amount parsing error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("string length too large: {0}")]
    TooLong(usize),
    #[error("unrecognized suffix: {0:?}")]
    UnknownUnit(String),
    #[error("failed to parse {0:?} as a decimal number")]
    Malformed(String),
    #[error("negative amount {0:?}")]
    Negative(String),
    #[error("invalid {unit} value: {value:?}")]
    ExcessPrecision { unit: &'static str, value: String },
}

/// A non-negative quantity of FIL, held in attoFIL.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenAmount {
    // Never negative; every constructor goes through BigUint.
    atto: BigInt,
}

impl TokenAmount {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn from_atto(atto: impl Into<BigUint>) -> Self {
        Self { atto: BigInt::from(atto.into()) }
    }

    pub fn from_whole(fil: impl Into<BigUint>) -> Self {
        Self::from_atto(fil.into() * FILECOIN_PRECISION)
    }

    pub fn atto(&self) -> &BigInt {
        &self.atto
    }

    pub fn is_zero(&self) -> bool {
        self.atto.is_zero()
    }

    /// Parses a bare attoFIL quantity. The empty string and `"0"` are shorthands for zero
    /// and never reach the decimal grammar.
    pub fn parse_atto(value: &str) -> Result<Self, ParseError> {
        if value.is_empty() || value == "0" {
            return Ok(Self::zero());
        }
        format!("{} {}", value, Unit::AttoFil.suffix()).parse()
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.atto)
    }
}

impl fmt::Debug for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenAmount({} attoFIL)", self.atto)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Unit {
    Fil,
    AttoFil,
}

impl Unit {
    fn parse(suffix: &str) -> Result<Self, ParseError> {
        match suffix.trim().to_ascii_lowercase().as_str() {
            "" | "fil" => Ok(Unit::Fil),
            "attofil" | "afil" => Ok(Unit::AttoFil),
            _ => Err(ParseError::UnknownUnit(suffix.to_string())),
        }
    }

    fn decimals(self) -> usize {
        match self {
            Unit::Fil => FIL_DECIMALS,
            Unit::AttoFil => 0,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Unit::Fil => "FIL",
            Unit::AttoFil => "attoFIL",
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Unit::Fil => "fil",
            Unit::AttoFil => "afil",
        }
    }
}

/// Parses `<decimal>[ <unit>]` where unit is `fil` (default) or `attofil`/`afil`,
/// case-insensitive.
impl FromStr for TokenAmount {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let suffix = s.trim_start_matches(|c: char| c == '-' || c == '.' || c.is_ascii_digit());
        let number = &s[..s.len() - suffix.len()];
        let unit = Unit::parse(suffix)?;

        if number.len() > MAX_AMOUNT_LEN {
            return Err(ParseError::TooLong(number.len()));
        }
        if number.starts_with('-') {
            return Err(ParseError::Negative(number.to_string()));
        }

        let (int_part, frac_part) = number.split_once('.').unwrap_or((number, ""));
        let well_formed = !(int_part.is_empty() && frac_part.is_empty())
            && int_part.bytes().all(|b| b.is_ascii_digit())
            && frac_part.bytes().all(|b| b.is_ascii_digit());
        if !well_formed {
            return Err(ParseError::Malformed(number.to_string()));
        }

        let frac = frac_part.trim_end_matches('0');
        if frac.len() > unit.decimals() {
            return Err(ParseError::ExcessPrecision {
                unit: unit.name(),
                value: number.to_string(),
            });
        }

        let mut digits = String::with_capacity(int_part.len() + unit.decimals());
        digits.push_str(int_part);
        digits.push_str(frac);
        digits.extend(std::iter::repeat('0').take(unit.decimals() - frac.len()));

        let atto = BigUint::parse_bytes(digits.as_bytes(), 10)
            .ok_or_else(|| ParseError::Malformed(number.to_string()))?;
        Ok(Self::from_atto(atto))
    }
}

impl Serialize for TokenAmount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        bigint_ser::serialize(&self.atto, serializer)
    }
}

impl<'de> Deserialize<'de> for TokenAmount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let atto: BigInt = bigint_ser::deserialize(deserializer)?;
        if atto.sign() == Sign::Minus {
            return Err(de::Error::custom(format!("negative token amount {}", atto)));
        }
        Ok(Self { atto })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_are_padded_to_atto() {
        let parse = |s: &str| s.parse::<TokenAmount>().unwrap();
        assert_eq!(parse("1.5"), TokenAmount::from_atto(1_500_000_000_000_000_000u64));
        assert_eq!(parse(".5 fil"), TokenAmount::from_atto(500_000_000_000_000_000u64));
        assert_eq!(parse("7.000 afil"), TokenAmount::from_atto(7u64));
    }

    #[test]
    fn debug_names_the_unit() {
        assert_eq!(format!("{:?}", TokenAmount::from_atto(42u64)), "TokenAmount(42 attoFIL)");
    }
}
