// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Argument checks run before a request is built

use std::fmt::Display;

use api_client::{ApiError, ApiResult};
use shared_types::{SolanaAddress, Timeframe};

/// `value` must look like a Solana address
pub(crate) fn address(param: &str, value: &str) -> ApiResult<()> {
    if SolanaAddress::is_valid(value) {
        Ok(())
    } else {
        Err(ApiError::validation(format!("Invalid {param}: {value}")))
    }
}

/// Every entry of `values` must look like a Solana address
pub(crate) fn addresses(param: &str, values: &[&str]) -> ApiResult<()> {
    values.iter().try_for_each(|value| address(param, value))
}

/// `value` must lie in `min..=max`
pub(crate) fn in_range<T>(param: &str, value: T, min: T, max: T) -> ApiResult<()>
where
    T: PartialOrd + Display,
{
    if value < min || value > max {
        return Err(ApiError::validation(format!(
            "Invalid {param}: {value}. Must be between {min} and {max}"
        )));
    }
    Ok(())
}

/// A batch may carry at most `max` tokens
pub(crate) fn batch_size(len: usize, max: usize) -> ApiResult<()> {
    if len > max {
        return Err(ApiError::validation(format!(
            "Maximum of {max} tokens per request"
        )));
    }
    Ok(())
}

/// An absent timeframe means the service default
pub(crate) fn timeframe(value: Option<&str>) -> ApiResult<Option<Timeframe>> {
    value
        .map(str::parse::<Timeframe>)
        .transpose()
        .map_err(ApiError::validation)
}
