//! Primitive predicates over untyped option values.
//!
//! Option objects arrive as [`serde_json::Value`] so that wrong JSON types and
//! unrecognized keys can be reported instead of silently coerced. A field that
//! is `None` here means the key was absent; an explicit `null` is `Some`.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::{Map, Value};
use url::{ParseError, Url};

lazy_static! {
    static ref ILLEGAL_URL_CHARS: Regex =
        Regex::new(r"[^a-zA-Z0-9:/?#\[\]@!$&'()*+,;=._~%-]").expect("valid URL charset pattern");
    static ref HOSTNAME: Regex =
        Regex::new(r"^[a-zA-Z0-9]+[\w-]*(\.?[a-zA-Z0-9]+[\w-]*)*$").expect("valid hostname pattern");
    static ref PATHNAME: Regex =
        Regex::new(r"^(/[\w.~!$'()*+,;=:@%-]+)*/?$").expect("valid pathname pattern");
}

pub fn is_non_null_object(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::Object(_)))
}

pub fn as_object(value: Option<&Value>) -> Option<&Map<String, Value>> {
    value.and_then(Value::as_object)
}

pub fn is_boolean(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::Bool(_)))
}

pub fn is_string(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::String(_)))
}

pub fn is_non_empty_string(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::String(s)) if !s.is_empty())
}

pub fn is_array(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::Array(_)))
}

/// Loose truthiness used to tell a missing value from a malformed one.
///
/// Absent, `null`, `false`, `0` and `""` are falsy. Everything else,
/// including empty arrays and objects, is truthy.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map_or(true, |f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Whether `value` is an absolute `http`/`https` URL string.
pub fn is_url(value: Option<&Value>) -> bool {
    match value {
        Some(Value::String(s)) => is_url_str(s),
        _ => false,
    }
}

pub fn is_url_str(candidate: &str) -> bool {
    if candidate.is_empty() || ILLEGAL_URL_CHARS.is_match(candidate) {
        return false;
    }

    // `Url::parse` is lenient about missing slashes for special schemes.
    let has_slashes = candidate
        .split_once(':')
        .map_or(false, |(_, rest)| rest.starts_with("//"));
    if !has_slashes {
        return false;
    }

    // Out-of-range numeric ports are tolerated; only the host and path are checked.
    let url = match Url::parse(candidate) {
        Ok(url) => url,
        Err(ParseError::InvalidPort) => match without_port(candidate).map(|c| Url::parse(&c)) {
            Some(Ok(url)) => url,
            _ => return false,
        },
        Err(_) => return false,
    };
    if url.scheme() != "http" && url.scheme() != "https" {
        return false;
    }

    match url.host_str() {
        Some(host) if HOSTNAME.is_match(host) => {}
        _ => return false,
    }

    let path = url.path();
    path.is_empty() || path == "/" || PATHNAME.is_match(path)
}

/// Drops an all-digit port from the authority of `candidate`.
fn without_port(candidate: &str) -> Option<String> {
    let (scheme, rest) = candidate.split_once("://")?;
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let (authority, tail) = rest.split_at(end);
    let (host, port) = authority.rsplit_once(':')?;
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(format!("{scheme}://{host}{tail}"))
}
