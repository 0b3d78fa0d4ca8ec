use std::fmt::{Display, Formatter};

use crate::ValidationError;

const CURRENCY_LEN: usize = 3;
const ISSUER_MIN_LEN: usize = 25;
const ISSUER_MAX_LEN: usize = 35;

/// One side of an exchange-rate pair: a currency code plus, for issued
/// currencies, the issuing wallet address.
///
/// XRP is the native asset and never carries an issuer; every other currency
/// on the ledger is an IOU and requires one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Asset {
    currency: String,
    issuer: Option<String>,
}

impl Asset {
    pub fn new(
        currency: impl AsRef<str>,
        issuer: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let currency = validate_currency(currency.as_ref())?;
        let issuer = match issuer.map(str::trim) {
            Some("") | None => None,
            Some(raw) => Some(validate_issuer(raw)?),
        };

        if currency == "XRP" {
            if issuer.is_some() {
                return Err(ValidationError::XrpWithIssuer);
            }
        } else if issuer.is_none() {
            return Err(ValidationError::MissingIssuer { currency });
        }

        Ok(Self { currency, issuer })
    }

    /// Convenience constructor for the native asset.
    pub fn xrp() -> Self {
        Self {
            currency: String::from("XRP"),
            issuer: None,
        }
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn issuer(&self) -> Option<&str> {
        self.issuer.as_deref()
    }
}

impl Display for Asset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.issuer {
            Some(issuer) => write!(f, "{}.{}", self.currency, issuer),
            None => f.write_str(&self.currency),
        }
    }
}

/// A base/counter pairing whose exchange rate is being observed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurrencyPair {
    pub base: Asset,
    pub counter: Asset,
}

impl CurrencyPair {
    pub const fn new(base: Asset, counter: Asset) -> Self {
        Self { base, counter }
    }
}

impl Display for CurrencyPair {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.base, self.counter)
    }
}

fn validate_currency(raw: &str) -> Result<String, ValidationError> {
    let value = raw.trim().to_ascii_uppercase();
    if value.len() != CURRENCY_LEN || !value.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(ValidationError::InvalidCurrency {
            value: raw.to_owned(),
        });
    }
    Ok(value)
}

fn validate_issuer(raw: &str) -> Result<String, ValidationError> {
    let valid = raw.starts_with('r')
        && (ISSUER_MIN_LEN..=ISSUER_MAX_LEN).contains(&raw.len())
        && raw.bytes().all(|b| b.is_ascii_alphanumeric());
    if !valid {
        return Err(ValidationError::InvalidIssuer {
            value: raw.to_owned(),
        });
    }
    Ok(raw.to_owned())
}
