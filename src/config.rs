//! Shop settings loaded from environment variables.

use crate::domain::money::CurrencyFormat;
use crate::domain::request::{Contact, MessagingChannel};
use crate::domain::summary::MessageTemplate;
use crate::error::Result;

pub const DEFAULT_SHOP_NAME: &str = "Warung Nusantara";
pub const DEFAULT_PHONE: &str = "6285607492894";
pub const DEFAULT_CHANNEL_URL: &str = "https://wa.me";
pub const DEFAULT_CURRENCY: &str = "Rp";
pub const DEFAULT_LAUNCHER: &str = "xdg-open";

/// Who the shop is and where orders go.
///
/// Reads from environment variables:
/// - `WARUNG_SHOP_NAME`: name used in the order greeting (default: `"Warung Nusantara"`)
/// - `WARUNG_PHONE`: destination contact on the messaging service
/// - `WARUNG_CHANNEL_URL`: messaging service base URL (default: `"https://wa.me"`)
/// - `WARUNG_CURRENCY`: currency prefix for totals (default: `"Rp"`)
/// - `WARUNG_LAUNCHER`: program that opens the request URI (default: `"xdg-open"`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopConfig {
    pub shop_name: String,
    pub phone: String,
    pub channel_url: String,
    pub currency_symbol: String,
    pub launcher: String,
}

impl ShopConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ShopConfig::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let var = |key: &str, default: String| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or(default)
        };
        let config = Self {
            shop_name: var("WARUNG_SHOP_NAME", defaults.shop_name),
            phone: var("WARUNG_PHONE", defaults.phone),
            channel_url: var("WARUNG_CHANNEL_URL", defaults.channel_url),
            currency_symbol: var("WARUNG_CURRENCY", defaults.currency_symbol),
            launcher: var("WARUNG_LAUNCHER", defaults.launcher),
        };
        tracing::debug!(shop = %config.shop_name, channel = %config.channel_url, "config loaded");
        config
    }

    pub fn contact(&self) -> Result<Contact> {
        Contact::new(&self.phone)
    }

    pub fn channel(&self) -> Result<MessagingChannel> {
        MessagingChannel::parse(&self.channel_url)
    }

    pub fn currency(&self) -> CurrencyFormat {
        CurrencyFormat::new(self.currency_symbol.clone(), '.')
    }

    pub fn message_template(&self) -> MessageTemplate {
        MessageTemplate::new(self.shop_name.clone(), self.currency())
    }
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            shop_name: DEFAULT_SHOP_NAME.to_string(),
            phone: DEFAULT_PHONE.to_string(),
            channel_url: DEFAULT_CHANNEL_URL.to_string(),
            currency_symbol: DEFAULT_CURRENCY.to_string(),
            launcher: DEFAULT_LAUNCHER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_values() {
        let config = ShopConfig::default();
        assert_eq!(config.shop_name, "Warung Nusantara");
        assert_eq!(config.contact().unwrap().as_str(), "6285607492894");
        assert_eq!(config.channel().unwrap().base().as_str(), "https://wa.me/");
        assert_eq!(config.currency(), CurrencyFormat::default());
    }

    #[test]
    fn test_lookup_overrides_and_blank_fallback() {
        let vars: HashMap<&str, &str> = [
            ("WARUNG_SHOP_NAME", "Warung Bu Sri"),
            ("WARUNG_PHONE", "+62 811-1111-222"),
            ("WARUNG_CURRENCY", "   "),
        ]
        .into_iter()
        .collect();
        let config = ShopConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.shop_name, "Warung Bu Sri");
        assert_eq!(config.contact().unwrap().as_str(), "628111111222");
        assert_eq!(config.currency_symbol, "Rp");
        assert_eq!(config.launcher, "xdg-open");
    }
}
