//! Query-string hydration for shareable searches
//!
//! Only a fixed set of parameters is recognized:
//! - `q` - free-text search
//! - `industry`, `useCase`, `certification` - one taxonomy value each;
//!   repeating a parameter selects more values
//! - `sort` - `relevance|score|reviews|newest|name`
//!
//! Hydration runs once when a page mounts. Later state changes are not
//! written back to the URL; [`to_query_string`] exists for building a link
//! on demand.

use crate::filter::FilterState;
use crate::sort::SortOption;
use crate::taxonomy::{Certification, Industry, Taxonomy, UseCase};
use serde::Serialize;
use std::collections::BTreeSet;

/// Parameter carrying the search text
pub const PARAM_SEARCH: &str = "q";
/// Parameter carrying an industry value
pub const PARAM_INDUSTRY: &str = "industry";
/// Parameter carrying a use-case value
pub const PARAM_USE_CASE: &str = "useCase";
/// Parameter carrying a certification value
pub const PARAM_CERTIFICATION: &str = "certification";
/// Parameter carrying the sort key
pub const PARAM_SORT: &str = "sort";

/// Browse inputs recovered from a URL
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseParams {
    pub search: String,
    pub filters: FilterState,
    pub sort: SortOption,
}

/// Parse a query string (with or without the leading `?`).
///
/// Unrecognized parameters and values that are not members of their
/// vocabulary are dropped. A `sort` value that is not a known key leaves the
/// default relevance order in place. Never fails.
pub fn hydrate(query_string: &str) -> BrowseParams {
    let mut params = BrowseParams::default();
    let query_string = query_string.trim().trim_start_matches('?');

    for pair in query_string.split('&').filter(|p| !p.is_empty()) {
        let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
        let key = decode_component(raw_key);
        let value = decode_component(raw_value);

        match key.as_str() {
            PARAM_SEARCH => params.search = value,
            PARAM_INDUSTRY => match Industry::from_param(&value) {
                Some(v) => params.filters = params.filters.with_industry(v),
                None => drop_value(&key, &value),
            },
            PARAM_USE_CASE => match UseCase::from_param(&value) {
                Some(v) => params.filters = params.filters.with_use_case(v),
                None => drop_value(&key, &value),
            },
            PARAM_CERTIFICATION => match Certification::from_param(&value) {
                Some(v) => params.filters = params.filters.with_certification(v),
                None => drop_value(&key, &value),
            },
            PARAM_SORT => match SortOption::parse_known(&value) {
                Some(sort) => params.sort = sort,
                None => drop_value(&key, &value),
            },
            _ => log::debug!("Ignoring unrecognized URL parameter '{}'", key),
        }
    }

    params
}

/// Encode the shareable subset of browse state as a query string.
///
/// Only non-default values are written, taxonomy values use their URL keys,
/// and the relevance sort is omitted. Returns an empty string for default
/// state. [`hydrate`] of the output restores the same subset.
pub fn to_query_string(params: &BrowseParams) -> String {
    let mut pairs: Vec<String> = Vec::new();

    if !params.search.trim().is_empty() {
        pairs.push(pair(PARAM_SEARCH, &params.search));
    }
    pairs.extend(encode_all(PARAM_INDUSTRY, params.filters.industries()));
    pairs.extend(encode_all(PARAM_USE_CASE, params.filters.use_cases()));
    pairs.extend(encode_all(PARAM_CERTIFICATION, params.filters.certifications()));
    if params.sort != SortOption::Relevance {
        pairs.push(pair(PARAM_SORT, params.sort.key()));
    }

    pairs.join("&")
}

fn encode_all<'a, T: Taxonomy>(
    key: &'a str,
    values: &'a BTreeSet<T>,
) -> impl Iterator<Item = String> + 'a {
    values.iter().map(move |v| pair(key, v.key()))
}

fn pair(key: &str, value: &str) -> String {
    format!("{}={}", key, urlencoding::encode(value))
}

/// Decode `+` as space, then percent escapes. Malformed escapes that do not
/// decode to UTF-8 fall back to the raw text.
fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

fn drop_value(key: &str, value: &str) {
    log::debug!("Ignoring unrecognized value '{}' for URL parameter '{}'", value, key);
}

#[cfg(test)]
#[path = "url_params_test.rs"]
mod tests;
