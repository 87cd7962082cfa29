use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{PbinError, PbinResult};

/// Expiration identifier forwarded verbatim in `meta.expire`.
///
/// Only the shape is checked here (non-empty, no whitespace). Whether the
/// server honours the value is the server's business; [`Expiration::is_known`]
/// lets callers warn about values the stock server does not list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Expiration(String);

impl Expiration {
    /// Identifiers offered by a stock server configuration.
    pub const KNOWN: &'static [&'static str] = &[
        "5min", "10min", "1hour", "1day", "1week", "1month", "1year", "never",
    ];

    pub const DEFAULT: &'static str = "1week";

    pub fn new(id: impl Into<String>) -> PbinResult<Self> {
        let id = id.into();
        if id.is_empty() || id.chars().any(char::is_whitespace) {
            return Err(PbinError::InvalidExpiration(id));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_known(&self) -> bool {
        Self::KNOWN.contains(&self.0.as_str())
    }
}

impl Default for Expiration {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for Expiration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Expiration {
    type Err = PbinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Expiration {
    type Error = PbinError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Expiration> for String {
    fn from(value: Expiration) -> Self {
        value.0
    }
}
