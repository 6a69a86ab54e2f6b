// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Aggregation timeframes
//!
//! Trending and volume rankings are bucketed by the data service over one of a
//! fixed set of windows. [`Timeframe`] is that set.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Window over which the data service aggregates trending and volume metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timeframe {
    /// Five minutes
    FiveMinutes,
    /// Fifteen minutes
    FifteenMinutes,
    /// Thirty minutes
    ThirtyMinutes,
    /// One hour
    OneHour,
    /// Six hours
    SixHours,
    /// Twelve hours
    TwelveHours,
    /// Twenty-four hours
    TwentyFourHours,
}

impl Timeframe {
    /// Returns the path segment the data service expects for this window
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FiveMinutes => "5m",
            Self::FifteenMinutes => "15m",
            Self::ThirtyMinutes => "30m",
            Self::OneHour => "1h",
            Self::SixHours => "6h",
            Self::TwelveHours => "12h",
            Self::TwentyFourHours => "24h",
        }
    }

    /// Returns every supported timeframe, shortest first
    pub const fn all() -> &'static [Self] {
        &[
            Self::FiveMinutes,
            Self::FifteenMinutes,
            Self::ThirtyMinutes,
            Self::OneHour,
            Self::SixHours,
            Self::TwelveHours,
            Self::TwentyFourHours,
        ]
    }

    /// Comma separated list of every accepted value, used in error messages
    pub fn valid_values() -> String {
        Self::all()
            .iter()
            .map(|timeframe| timeframe.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = TimeframeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|timeframe| timeframe.as_str() == s)
            .ok_or_else(|| TimeframeParseError(s.to_string()))
    }
}

impl Serialize for Timeframe {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Timeframe {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

/// Error returned when a string is not one of the supported timeframes
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid timeframe: {0}. Valid timeframes are: {valid}", valid = Timeframe::valid_values())]
pub struct TimeframeParseError(pub String);
