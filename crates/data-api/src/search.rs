// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Free form filters for the token search endpoint
//!
//! The search endpoint accepts an open ended set of query parameters. Filters
//! are passed through untouched, in insertion order, and are form encoded into
//! the query string.
//!
//! ```rust
//! use data_api::SearchFilters;
//!
//! let filters = SearchFilters::new()
//!     .with("query", "bonk")
//!     .with("minLiquidity", 10_000)
//!     .with_list("market", ["raydium", "orca"]);
//!
//! assert_eq!(
//!     filters.to_query_string(),
//!     "query=bonk&minLiquidity=10000&market=raydium%2Corca"
//! );
//! ```

use std::fmt::Display;

use url::form_urlencoded;

/// Ordered list of search query parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    pairs: Vec<(String, String)>,
}

impl SearchFilters {
    /// Empty filter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.pairs.push((key.into(), value.to_string()));
        self
    }

    /// Append a list valued parameter, joined with commas
    #[must_use]
    pub fn with_list<I>(self, key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let joined = values
            .into_iter()
            .map(|value| value.to_string())
            .collect::<Vec<_>>()
            .join(",");
        self.with(key, joined)
    }

    /// Whether no filter has been set
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Form encoded query string, without the leading `?`
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&self.pairs)
            .finish()
    }
}

impl<K, V> FromIterator<(K, V)> for SearchFilters
where
    K: Into<String>,
    V: Display,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::new(), |filters, (key, value)| filters.with(key, value))
    }
}
