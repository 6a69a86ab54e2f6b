// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Shared types for the Solana data API client
//!
//! This crate provides validated value types used by both the generic request
//! layer and the concrete client, avoiding circular dependencies.

pub mod address;
pub mod timeframe;

pub use address::{ADDRESS_PATTERN, AddressParseError, SolanaAddress};
pub use timeframe::{Timeframe, TimeframeParseError};
