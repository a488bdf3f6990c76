use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Currency code as sent on the wire.
///
/// Codes other than `ARS` and `USD` are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Currency {
    Ars,
    Usd,
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown currency code: {0}")]
pub struct UnknownCurrency(pub String);

impl Currency {
    pub fn code(&self) -> &str {
        match self {
            Currency::Ars => "ARS",
            Currency::Usd => "USD",
            Currency::Other(raw) => raw,
        }
    }
}

impl From<String> for Currency {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "ARS" => Currency::Ars,
            "USD" => Currency::Usd,
            _ => Currency::Other(raw),
        }
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        match currency {
            Currency::Other(raw) => raw,
            known => known.code().to_string(),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Strict parse for user input: only the known codes, case-insensitive.
impl FromStr for Currency {
    type Err = UnknownCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ARS" => Ok(Currency::Ars),
            "USD" => Ok(Currency::Usd),
            _ => Err(UnknownCurrency(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_wire_codes() {
        assert_eq!(serde_json::to_string(&Currency::Ars).unwrap(), "\"ARS\"");
        assert_eq!(
            serde_json::from_str::<Currency>("\"USD\"").unwrap(),
            Currency::Usd
        );
    }

    #[test]
    fn test_unknown_code_survives_round_trip() {
        let eur: Currency = serde_json::from_str("\"EUR\"").unwrap();
        assert_eq!(eur, Currency::Other("EUR".to_string()));
        assert_eq!(eur.code(), "EUR");
        assert_eq!(serde_json::to_string(&eur).unwrap(), "\"EUR\"");

        let lower: Currency = serde_json::from_str("\"ars\"").unwrap();
        assert_eq!(lower, Currency::Other("ars".to_string()));
        assert_eq!(serde_json::to_string(&lower).unwrap(), "\"ars\"");
    }

    #[test]
    fn test_currency_from_str() {
        assert_eq!("ars".parse::<Currency>(), Ok(Currency::Ars));
        assert_eq!(" USD ".parse::<Currency>(), Ok(Currency::Usd));
        assert_eq!(
            "BRL".parse::<Currency>(),
            Err(UnknownCurrency("BRL".to_string()))
        );
        assert_eq!(Currency::Usd.to_string(), "USD");
    }
}
