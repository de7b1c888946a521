use serde::{Deserialize, Serialize};
use std::fmt;

/// A price in the smallest currency unit (rupiah have no minor unit).
///
/// Integer-only so that totals never drift the way floating point sums do.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Self = Self(0);

    pub fn new(amount: u64) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// Renders the amount with the given currency format, e.g. `Rp42.000`.
    pub fn format_with(&self, currency: &CurrencyFormat) -> String {
        let digits = self.0.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(currency.thousands_separator);
            }
            grouped.push(ch);
        }
        format!("{}{}", currency.symbol, grouped)
    }
}

impl Money {
    /// `None` when the sum leaves the `u64` range.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// `None` when the product leaves the `u64` range.
    pub fn checked_mul(self, quantity: u32) -> Option<Self> {
        self.0.checked_mul(u64::from(quantity)).map(Self)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a [`Money`] amount is shown to people.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub thousands_separator: char,
}

impl CurrencyFormat {
    pub fn new(symbol: impl Into<String>, thousands_separator: char) -> Self {
        Self {
            symbol: symbol.into(),
            thousands_separator,
        }
    }
}

impl Default for CurrencyFormat {
    /// Indonesian rupiah as the `id-ID` locale prints it.
    fn default() -> Self {
        Self::new("Rp", '.')
    }
}
