//! CQL literal rendering.
//!
//! Every function here produces text in the store's native literal syntax.
//! Collection renderers take already-typed elements and serialize each one
//! through its own `CqlValue` impl.

use crate::{error::SerializeError, value::CqlValue};

const HEX: &[u8; 16] = b"0123456789abcdef";

/// Quote a text literal, doubling embedded single quotes.
pub(crate) fn text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 2);
    out.push('\'');
    for ch in raw.chars() {
        if ch == '\'' {
            out.push('\'');
        }
        out.push(ch);
    }
    out.push('\'');

    out
}

pub(crate) fn double(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else {
        format!("{value:?}")
    }
}

pub(crate) fn float(value: f32) -> String {
    if value.is_finite() {
        format!("{value:?}")
    } else {
        double(f64::from(value))
    }
}

pub(crate) fn blob(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(2 + bytes.len() * 2);
    out.push_str("0x");
    for byte in bytes {
        out.push(char::from(HEX[usize::from(byte >> 4)]));
        out.push(char::from(HEX[usize::from(byte & 0x0f)]));
    }

    out
}

/// `[a, b, c]`
pub(crate) fn list<'a, T, I>(items: I) -> Result<String, SerializeError>
where
    T: CqlValue + 'a,
    I: IntoIterator<Item = &'a T>,
{
    delimited('[', ']', items.into_iter().map(CqlValue::to_cql))
}

/// `{a, b, c}`
pub(crate) fn set<'a, T, I>(items: I) -> Result<String, SerializeError>
where
    T: CqlValue + 'a,
    I: IntoIterator<Item = &'a T>,
{
    delimited('{', '}', items.into_iter().map(CqlValue::to_cql))
}

/// `{k1: v1, k2: v2}`
pub(crate) fn map<'a, K, V, I>(entries: I) -> Result<String, SerializeError>
where
    K: CqlValue + 'a,
    V: CqlValue + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    delimited(
        '{',
        '}',
        entries
            .into_iter()
            .map(|(key, value)| Ok(format!("{}: {}", key.to_cql()?, value.to_cql()?))),
    )
}

fn delimited<I>(open: char, close: char, parts: I) -> Result<String, SerializeError>
where
    I: Iterator<Item = Result<String, SerializeError>>,
{
    let mut out = String::new();
    out.push(open);
    for (idx, part) in parts.enumerate() {
        if idx > 0 {
            out.push_str(", ");
        }
        out.push_str(&part?);
    }
    out.push(close);

    Ok(out)
}
