//! Monetary amounts for display pricing.
//!
//! Amounts are stored in the smallest currency unit (cents) as an unsigned
//! integer, so a price is non-negative by construction and never subject to
//! floating-point rounding.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// Supported display currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Eur,
}

impl Currency {
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Eur => "\u{20ac}",
        }
    }
}

/// A monetary amount in minor units (e.g. cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    cents: u64,
    currency: Currency,
}

impl Money {
    pub const fn from_cents(cents: u64, currency: Currency) -> Self {
        Self { cents, currency }
    }

    /// Euro amount from cents; the storefront prices everything in EUR.
    pub const fn eur(cents: u64) -> Self {
        Self::from_cents(cents, Currency::Eur)
    }

    pub fn cents(&self) -> u64 {
        self.cents
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }
}

impl ValueObject for Money {}

impl core::fmt::Display for Money {
    /// Two-decimal display precision, symbol-prefixed (e.g. `€29.99`).
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}{}.{:02}",
            self.currency.symbol(),
            self.cents / 100,
            self.cents % 100
        )
    }
}
