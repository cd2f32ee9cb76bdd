#![allow(missing_docs)]

use crate::{Error, Result};
use std::borrow::Cow;

/// Escapes markup characters so the string is safe inside element text and
/// double- or single-quoted attribute values.
///
/// Does not allocate if the string contains nothing to escape.
pub fn escape_xml(s: &str) -> Cow<'_, str> {
    let first = match s.find(|c| matches!(c, '<' | '>' | '&' | '"' | '\'')) {
        Some(index) => index,
        None => return Cow::Borrowed(s),
    };

    let mut escaped = String::with_capacity(s.len() + 8);
    escaped.push_str(&s[..first]);
    for c in s[first..].chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// `on`/`off` flags, as used by `mute`.
pub(crate) fn parse_on_off(field: &'static str, s: &str) -> Result<bool> {
    match s.trim() {
        s if s.eq_ignore_ascii_case("on") => Ok(true),
        s if s.eq_ignore_ascii_case("off") => Ok(false),
        _ => Err(invalid(field, s)),
    }
}

pub(crate) fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

/// `1`/`0` flags, as used by `powerStatus`.
pub(crate) fn parse_bool(field: &'static str, s: &str) -> Result<bool> {
    match s.trim() {
        "0" => Ok(false),
        "1" => Ok(true),
        _ => Err(invalid(field, s)),
    }
}

pub(crate) fn parse_number<T: std::str::FromStr>(field: &'static str, s: &str) -> Result<T> {
    s.trim().parse().map_err(|_| invalid(field, s))
}

fn invalid(field: &'static str, value: &str) -> Error {
    Error::InvalidValue {
        field,
        value: value.to_string(),
    }
}

/// Normalises a raw device volume against the installation's maximum.
/// Readings above the maximum saturate at `1.0`.
pub fn volume_fraction(raw: u16, max_volume: u16) -> f64 {
    if max_volume == 0 {
        return 0.0;
    }
    (f64::from(raw) / f64::from(max_volume)).clamp(0.0, 1.0)
}

/// Inverse of [`volume_fraction`]; out-of-range and NaN levels are clamped.
pub fn raw_volume(fraction: f64, max_volume: u16) -> u16 {
    let fraction = if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    };
    (fraction * f64::from(max_volume)).round() as u16
}
