// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Solana account addresses
//!
//! [`SolanaAddress`] checks the textual shape of an account identifier: 32 to 44
//! characters from the Base58 alphabet. It does not decode the value or verify
//! that it lies on the curve, which is enough to reject typos before a request
//! leaves the process.
//!
//! ```rust
//! use shared_types::SolanaAddress;
//!
//! let mint = SolanaAddress::new("So11111111111111111111111111111111111111112").unwrap();
//! assert_eq!(mint.as_str(), "So11111111111111111111111111111111111111112");
//!
//! // `0`, `O`, `I` and `l` are not part of the alphabet
//! assert!(SolanaAddress::new("0o11111111111111111111111111111111111111112").is_err());
//! ```

use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Base58 alphabet, 32 to 44 characters
pub const ADDRESS_PATTERN: &str = r"^[1-9A-HJ-NP-Za-km-z]{32,44}$";

static ADDRESS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ADDRESS_PATTERN).expect("address regex is valid"));

/// A string that has the shape of a Solana account address
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SolanaAddress(Box<str>);

impl SolanaAddress {
    /// Validate and wrap an address
    ///
    /// # Errors
    ///
    /// Returns [`AddressParseError`] when the value is empty, has the wrong
    /// length, or contains characters outside the Base58 alphabet.
    pub fn new(s: impl Into<String>) -> Result<Self, AddressParseError> {
        let s = s.into();
        if Self::is_valid(&s) {
            Ok(Self(s.into_boxed_str()))
        } else {
            Err(AddressParseError(s))
        }
    }

    /// Check a candidate without allocating
    pub fn is_valid(s: &str) -> bool {
        ADDRESS_REGEX.is_match(s)
    }

    /// Get the address as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SolanaAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for SolanaAddress {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for SolanaAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for SolanaAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for SolanaAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

/// Error returned for a value that is not shaped like a Solana address
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a valid Solana address: {0:?}")]
pub struct AddressParseError(pub String);
