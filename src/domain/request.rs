use crate::error::{OrderError, Result};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use std::fmt;
use url::Url;

/// Characters left as-is inside a query component; everything else is percent-encoded.
///
/// The unreserved marks of `encodeURIComponent` minus the apostrophe, so `+`, `&`, `=`
/// and every non-ASCII byte arrive encoded.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'(')
    .remove(b')');

/// Query parameter carrying the order text.
pub const TEXT_PARAM: &str = "text";

/// Who receives the order on the messaging service, e.g. a phone number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Contact(String);

impl Contact {
    /// Accepts display forms such as `+62 856-0749-2894` and keeps only the address.
    pub fn new(raw: &str) -> Result<Self> {
        let normalized: String = raw
            .trim()
            .trim_start_matches('+')
            .chars()
            .filter(|c| !matches!(c, ' ' | '-'))
            .collect();
        if normalized.is_empty() || !normalized.chars().all(|c| c.is_ascii_graphic()) {
            return Err(OrderError::InvalidContact(raw.to_string()));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Base address of the external messaging service (`https://wa.me` by default).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessagingChannel {
    base: Url,
}

impl MessagingChannel {
    pub fn parse(base: &str) -> Result<Self> {
        let base = Url::parse(base)?;
        if base.cannot_be_a_base() {
            return Err(OrderError::InvalidChannel(base.to_string()));
        }
        Ok(Self { base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Builds `<base>/<destination>?text=<encoded text>`.
    ///
    /// The same inputs always give the same URI. Any query on the base is replaced.
    pub fn build_external_request_uri(&self, text: &str, destination: &Contact) -> Result<Url> {
        let mut uri = self.base.clone();
        uri.path_segments_mut()
            .map_err(|_| OrderError::InvalidChannel(self.base.to_string()))?
            .pop_if_empty()
            .push(destination.as_str());
        let encoded = utf8_percent_encode(text, URI_COMPONENT);
        uri.set_query(Some(&format!("{}={}", TEXT_PARAM, encoded)));
        Ok(uri)
    }
}

/// A ready-to-open request for the messaging channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalRequest {
    pub destination: Contact,
    pub message: String,
    pub uri: Url,
}

impl ExternalRequest {
    pub fn new(channel: &MessagingChannel, destination: Contact, message: String) -> Result<Self> {
        let uri = channel.build_external_request_uri(&message, &destination)?;
        Ok(Self {
            destination,
            message,
            uri,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use percent_encoding::percent_decode_str;

    fn decoded_text(uri: &Url) -> String {
        let query = uri.query().unwrap();
        let encoded = query.strip_prefix("text=").unwrap();
        percent_decode_str(encoded).decode_utf8().unwrap().into_owned()
    }

    #[test]
    fn test_contact_normalization() {
        assert_eq!(Contact::new("+62 856-0749-2894").unwrap().as_str(), "6285607492894");
        assert_eq!(Contact::new("6285607492894").unwrap().as_str(), "6285607492894");
        assert!(matches!(
            Contact::new("  "),
            Err(OrderError::InvalidContact(_))
        ));
        assert!(matches!(
            Contact::new("0812\u{00e9}"),
            Err(OrderError::InvalidContact(_))
        ));
    }

    #[test]
    fn test_uri_shape() {
        let channel = MessagingChannel::parse("https://wa.me").unwrap();
        let contact = Contact::new("6285607492894").unwrap();
        let uri = channel
            .build_external_request_uri("Nasi Goreng x2 + Mie Ayam x1", &contact)
            .unwrap();

        assert_eq!(
            uri.as_str(),
            "https://wa.me/6285607492894?text=Nasi%20Goreng%20x2%20%2B%20Mie%20Ayam%20x1"
        );
    }

    #[test]
    fn test_uri_is_idempotent() {
        let channel = MessagingChannel::parse("https://wa.me/").unwrap();
        let contact = Contact::new("6285607492894").unwrap();
        let first = channel.build_external_request_uri("Es Teh x1", &contact).unwrap();
        let second = channel.build_external_request_uri("Es Teh x1", &contact).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.path(), "/6285607492894");
    }

    #[test]
    fn test_reserved_and_unicode_roundtrip() {
        let channel = MessagingChannel::parse("https://wa.me").unwrap();
        let contact = Contact::new("6285607492894").unwrap();
        let text = "Soto & Sate x1 + Es Teh x2 = €1.000 #promo? 50% ✅";
        let uri = channel.build_external_request_uri(text, &contact).unwrap();

        assert!(!uri.query().unwrap()[5..].contains(['&', '+', '#', '?', ' ']));
        assert_eq!(decoded_text(&uri), text);
    }

    #[test]
    fn test_channel_must_take_a_path() {
        assert!(matches!(
            MessagingChannel::parse("mailto:warung@example.com"),
            Err(OrderError::InvalidChannel(_))
        ));
        assert!(matches!(
            MessagingChannel::parse("not a url"),
            Err(OrderError::UrlError(_))
        ));
    }
}
