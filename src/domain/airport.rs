//! Airport identifier type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum number of characters in an airport code.
pub const MAX_CODE_LEN: usize = 4;

/// Airport code as typed by the user: uppercased and capped at
/// [`MAX_CODE_LEN`] characters.
///
/// Nothing else is checked. The route service is the only validator, so an
/// empty or unknown code is still forwarded verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AirportCode(String);

impl AirportCode {
    /// Normalize raw text into a code.
    ///
    /// Uppercasing happens before the cap, so a character that expands when
    /// uppercased counts by its expanded length.
    pub fn new(raw: impl AsRef<str>) -> Self {
        let code = raw
            .as_ref()
            .chars()
            .flat_map(char::to_uppercase)
            .take(MAX_CODE_LEN)
            .collect();
        Self(code)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len() >= MAX_CODE_LEN
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AirportCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for AirportCode {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
