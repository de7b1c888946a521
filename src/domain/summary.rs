use super::money::{CurrencyFormat, Money};
use std::fmt;

/// Text form of a non-empty cart: which dishes, how many, and the total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSummary {
    product_list: String,
    total: Money,
}

impl OrderSummary {
    /// Joins `"<name> x<quantity>"` entries.
    pub const SEPARATOR: &'static str = " + ";

    pub(crate) fn new(product_list: String, total: Money) -> Self {
        Self {
            product_list,
            total,
        }
    }

    pub fn product_list(&self) -> &str {
        &self.product_list
    }

    pub fn total(&self) -> Money {
        self.total
    }

    /// Product list followed by the formatted total.
    pub fn render(&self, currency: &CurrencyFormat) -> String {
        format!(
            "{} = {}",
            self.product_list,
            self.total.format_with(currency)
        )
    }
}

impl fmt::Display for OrderSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&CurrencyFormat::default()))
    }
}

/// The sentence the shop receives through the messaging channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplate {
    pub shop_name: String,
    pub currency: CurrencyFormat,
}

impl MessageTemplate {
    pub fn new(shop_name: impl Into<String>, currency: CurrencyFormat) -> Self {
        Self {
            shop_name: shop_name.into(),
            currency,
        }
    }

    pub fn render(&self, summary: &OrderSummary) -> String {
        format!(
            "Halo {}, saya ingin membeli {} dan totalnya adalah {}.",
            self.shop_name,
            summary.product_list(),
            summary.total().format_with(&self.currency)
        )
    }
}
