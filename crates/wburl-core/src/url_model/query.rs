//! Query string for WaterButler requests.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters `encodeURIComponent` leaves alone; everything else is escaped.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Encodes one key or value the way jQuery's `$.param` does: component
/// escaping with spaces as `+`.
fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, COMPONENT)
        .to_string()
        .replace("%20", "+")
}

/// Fields sent with every request, in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestQuery<'a> {
    pub path: &'a str,
    pub token: &'a str,
    pub nid: &'a str,
    pub provider: &'a str,
    pub cookie: &'a str,
}

impl RequestQuery<'_> {
    pub fn encode(&self) -> String {
        [
            ("path", self.path),
            ("token", self.token),
            ("nid", self.nid),
            ("provider", self.provider),
            ("cookie", self.cookie),
        ]
        .iter()
        .map(|(key, value)| format!("{}={}", encode_component(key), encode_component(value)))
        .collect::<Vec<_>>()
        .join("&")
    }
}
