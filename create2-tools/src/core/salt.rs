// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/create2-tools/blob/main/licenses/COPYRIGHT.md

//! CREATE2 salt values.

use std::{fmt, str::FromStr};

use alloy::primitives::B256;

#[derive(Debug, thiserror::Error)]
pub enum SaltError {
    #[error("salt must start with 0x")]
    MissingPrefix,
    #[error("salt is longer than 32 bytes")]
    TooLong,
    #[error("invalid salt hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// A 32-byte salt mixed into deterministic address derivation.
///
/// Shorter user input is left-padded with zeros, so `0x01` and
/// `0x0...01` name the same salt and therefore the same address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Salt(B256);

impl Salt {
    /// Generates a random salt.
    pub fn random() -> Self {
        Self(B256::random())
    }

    pub fn as_b256(&self) -> B256 {
        self.0
    }
}

impl From<B256> for Salt {
    fn from(value: B256) -> Self {
        Self(value)
    }
}

impl FromStr for Salt {
    type Err = SaltError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let nibbles = s.strip_prefix("0x").ok_or(SaltError::MissingPrefix)?;
        if nibbles.len() > 64 {
            return Err(SaltError::TooLong);
        }
        // Tolerate an odd nibble count; left padding makes `0x1` mean `0x01`.
        let padded = if nibbles.len() % 2 == 1 {
            format!("0{nibbles}")
        } else {
            nibbles.to_owned()
        };
        let bytes = hex::decode(padded)?;
        Ok(Self(B256::left_padding_from(&bytes)))
    }
}

impl fmt::Display for Salt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
