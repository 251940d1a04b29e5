//! HTML attribute values and their serialization
//!
//! Every attribute emitted by the renderer goes through [`serialize_attrs`],
//! so the same suppression and escaping rules apply to controller, provider
//! and poster elements alike.

use indexmap::IndexMap;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Attribute keys whose values are URLs and are escaped with [`esc_url`]
pub const URL_ATTRIBUTES: &[&str] = &["src", "href", "poster"];

/// URL schemes accepted by [`esc_url`]
pub const ALLOWED_PROTOCOLS: &[&str] = &[
    "http", "https", "ftp", "ftps", "mailto", "news", "irc", "irc6", "ircs", "gopher", "nntp",
    "feed", "telnet", "mms", "rtsp", "sms", "svn", "tel", "fax", "xmpp", "webcal", "urn",
];

/// Characters percent-encoded inside URL attributes (non-ASCII is always encoded)
const URL_UNSAFE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'\\')
    .add(b'^');

/// A scalar HTML attribute value
///
/// - `Flag(false)` suppresses the attribute entirely
/// - `Flag(true)` and an empty `Text` emit the bare attribute name
/// - everything else emits `name="escaped value"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Flag(bool),
    Number(i64),
    Text(String),
}

impl AttrValue {
    /// Convert a JSON value, dropping anything that is not a scalar.
    ///
    /// `null`, arrays and objects yield `None`. Non-integer numbers are kept
    /// as their textual form.
    #[must_use]
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(Self::Flag(*b)),
            Value::Number(n) => Some(
                n.as_i64()
                    .map_or_else(|| Self::Text(n.to_string()), Self::Number),
            ),
            Value::String(s) => Some(Self::Text(s.clone())),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Flag(b) => Value::Bool(*b),
            Self::Number(n) => Value::from(*n),
            Self::Text(s) => Value::String(s.clone()),
        }
    }

    /// `true` only for an explicit `Flag(false)`
    #[must_use]
    pub const fn is_false(&self) -> bool {
        matches!(self, Self::Flag(false))
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Flag(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        Self::Number(i64::from(value))
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Ordered attribute name → value map. Insertion order is output order.
pub type AttributeMap = IndexMap<String, AttrValue>;

/// Build an [`AttributeMap`] from a JSON object, silently dropping non-scalars
#[must_use]
pub fn attrs_from_json(object: &Map<String, Value>) -> AttributeMap {
    object
        .iter()
        .filter_map(|(key, value)| AttrValue::from_json(value).map(|v| (key.clone(), v)))
        .collect()
}

/// Serialize attributes into a space separated HTML attribute string
#[must_use]
pub fn serialize_attrs(attrs: &AttributeMap) -> String {
    let mut parsed = Vec::with_capacity(attrs.len());

    for (key, value) in attrs {
        let name = esc_attr(key);

        match value {
            AttrValue::Flag(false) => {}
            AttrValue::Flag(true) => parsed.push(name),
            AttrValue::Text(text) if text.is_empty() => parsed.push(name),
            value => {
                let raw = value.to_string();
                if is_url_attribute(key) {
                    let escaped = esc_url(&raw);
                    if escaped.is_empty() {
                        tracing::trace!(attribute = %key, "dropping attribute with unsafe URL");
                        continue;
                    }
                    parsed.push(format!("{name}=\"{escaped}\""));
                } else {
                    parsed.push(format!("{name}=\"{}\"", esc_attr(&raw)));
                }
            }
        }
    }

    parsed.join(" ")
}

fn is_url_attribute(key: &str) -> bool {
    URL_ATTRIBUTES.iter().any(|k| k.eq_ignore_ascii_case(key))
}

/// Escape text for use inside a double-quoted attribute value
#[must_use]
pub fn esc_attr(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#039;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            _ => output.push(c),
        }
    }
    output
}

/// Escape a URL for use inside an attribute value.
///
/// Returns an empty string for blank URLs and for URLs whose scheme is not in
/// [`ALLOWED_PROTOCOLS`]. Relative URLs pass through.
#[must_use]
pub fn esc_url(url: &str) -> String {
    let url = url.trim();
    if url.is_empty() {
        return String::new();
    }

    let encoded = utf8_percent_encode(url, URL_UNSAFE).to_string();

    if let Some(scheme) = url_scheme(&encoded) {
        if !ALLOWED_PROTOCOLS
            .iter()
            .any(|p| p.eq_ignore_ascii_case(scheme))
        {
            return String::new();
        }
    }

    encoded.replace('&', "&amp;").replace('\'', "&#039;")
}

/// Scheme of a URL, if the first delimiter is a colon
fn url_scheme(url: &str) -> Option<&str> {
    let end = url.find([':', '/', '?', '#'])?;
    url[end..].starts_with(':').then(|| &url[..end])
}
