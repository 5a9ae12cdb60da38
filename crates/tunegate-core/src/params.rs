//! Request parameter parsing shared by every endpoint.
//!
//! Parameters arrive as optional raw strings. Defaults are applied here and
//! values are normalized so that requests with the same effective parameters
//! compare equal (and therefore produce the same cache key).

use crate::GatewayError;

pub const DEFAULT_REGION: &str = "IN";
pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_LIMIT: usize = 10;
pub const DEFAULT_SEARCH_FILTER: &str = "all";

/// Region and language forwarded upstream with every locale-aware call.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    region: String,
    language: String,
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            region: String::from(DEFAULT_REGION),
            language: String::from(DEFAULT_LANGUAGE),
        }
    }
}

impl Locale {
    /// Builds a locale from optional query values. Blank values fall back to
    /// the defaults; the region is upper-cased and the language lower-cased.
    pub fn from_query(region: Option<&str>, language: Option<&str>) -> Self {
        Self {
            region: normalize_region(region),
            language: non_blank(language)
                .unwrap_or(DEFAULT_LANGUAGE)
                .to_ascii_lowercase(),
        }
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}

/// Country code used by the charts endpoint (read from the `region` query).
pub fn country_from_query(region: Option<&str>) -> String {
    normalize_region(region)
}

/// Parses `limit`, falling back to [`DEFAULT_LIMIT`] when absent or blank.
pub fn parse_limit(raw: Option<&str>) -> Result<usize, GatewayError> {
    let Some(raw) = non_blank(raw) else {
        return Ok(DEFAULT_LIMIT);
    };

    let limit = raw
        .parse::<usize>()
        .map_err(|_| GatewayError::InvalidParameter {
            name: "limit",
            value: raw.to_owned(),
            reason: "expected a non-negative integer",
        })?;

    if limit == 0 {
        return Err(GatewayError::InvalidParameter {
            name: "limit",
            value: raw.to_owned(),
            reason: "limit must be greater than zero",
        });
    }

    Ok(limit)
}

/// Returns the trimmed value of a required parameter.
pub fn require(name: &'static str, raw: Option<&str>) -> Result<String, GatewayError> {
    non_blank(raw)
        .map(str::to_owned)
        .ok_or(GatewayError::MissingParameter { name })
}

/// Returns the trimmed value of an optional parameter, `None` when blank.
pub fn optional(raw: Option<&str>) -> Option<String> {
    non_blank(raw).map(str::to_owned)
}

fn normalize_region(region: Option<&str>) -> String {
    non_blank(region)
        .unwrap_or(DEFAULT_REGION)
        .to_ascii_uppercase()
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}
