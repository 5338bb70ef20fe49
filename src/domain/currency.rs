//! Currency type
//!
//! The set of currencies an account can be denominated in.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported account currencies.
///
/// Serialized as the upper-case ISO code (`"USD"`, `"SEK"`, `"GBP"`), which
/// is also the form used in audit log messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Sek,
    Gbp,
}

impl Currency {
    /// The upper-case ISO code for this currency.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Sek => "SEK",
            Currency::Gbp => "GBP",
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::Usd
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_serialization() {
        let json = serde_json::to_string(&Currency::Sek).unwrap();
        assert_eq!(json, r#""SEK""#);

        let deserialized: Currency = serde_json::from_str(r#""GBP""#).unwrap();
        assert_eq!(deserialized, Currency::Gbp);
    }

    #[test]
    fn test_currency_display_matches_code() {
        assert_eq!(Currency::Usd.to_string(), "USD");
        assert_eq!(Currency::Usd.code(), "USD");
    }
}
