//! Per-type predicates and parsers.
//!
//! Predicates take the raw submitted string. Address-like types (`email`,
//! `phone`, `url`, `domain`, `ip`) are checked and stored trimmed.

use crate::model::field::FieldValue;
use once_cell::sync::Lazy;
use regex::Regex;
use std::net::IpAddr;
use url::Url;

static NUMERIC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?\s*$")
        .expect("valid numeric regex")
});
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
    )
    .expect("valid email regex")
});

const MAX_EMAIL_LOCAL_CHARS: usize = 64;
const MAX_DOMAIN_CHARS: usize = 253;
const MAX_DOMAIN_LABEL_CHARS: usize = 63;
const PHONE_LOCAL_DIGITS: usize = 9;
const PHONE_INTERNATIONAL_MIN_DIGITS: usize = 10;
const PHONE_INTERNATIONAL_MAX_DIGITS: usize = 12;

pub(crate) fn is_bool(raw: &str) -> bool {
    matches!(
        raw.to_ascii_lowercase().as_str(),
        "true" | "false" | "1" | "0"
    )
}

pub(crate) fn parse_bool(raw: &str) -> FieldValue {
    FieldValue::Bool(matches!(raw.to_ascii_lowercase().as_str(), "true" | "1"))
}

pub(crate) fn is_numeric(raw: &str) -> bool {
    NUMERIC_RE.is_match(raw)
}

pub(crate) fn parse_numeric(raw: &str) -> FieldValue {
    FieldValue::Float(raw.trim().parse::<f64>().unwrap_or(0.0))
}

pub(crate) fn is_int(raw: &str) -> bool {
    if !is_numeric(raw) {
        return false;
    }
    if raw.trim().parse::<i64>().is_ok() {
        return true;
    }
    match raw.trim().parse::<f64>() {
        Ok(value) => {
            value.is_finite()
                && value.trunc() == value
                && value >= i64::MIN as f64
                && value < i64::MAX as f64
        }
        Err(_) => false,
    }
}

pub(crate) fn parse_int(raw: &str) -> FieldValue {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<i64>() {
        return FieldValue::Int(value);
    }
    // Float-shaped whole numbers such as `1e3` or `30.0`.
    FieldValue::Int(trimmed.parse::<f64>().map(|value| value as i64).unwrap_or(0))
}

pub(crate) fn is_noempty(raw: &str) -> bool {
    !raw.is_empty()
}

pub(crate) fn is_email(raw: &str) -> bool {
    let candidate = raw.trim();
    if !EMAIL_RE.is_match(candidate) {
        return false;
    }
    let Some((local, _)) = candidate.rsplit_once('@') else {
        return false;
    };
    local.len() <= MAX_EMAIL_LOCAL_CHARS
        && !local.starts_with('.')
        && !local.ends_with('.')
        && !local.contains("..")
}

pub(crate) fn is_phone(raw: &str) -> bool {
    let candidate = raw.trim();
    match candidate.strip_prefix('+') {
        Some(digits) => {
            all_ascii_digits(digits)
                && (PHONE_INTERNATIONAL_MIN_DIGITS..=PHONE_INTERNATIONAL_MAX_DIGITS)
                    .contains(&digits.len())
        }
        None => all_ascii_digits(candidate) && candidate.len() == PHONE_LOCAL_DIGITS,
    }
}

pub(crate) fn is_url(raw: &str) -> bool {
    match Url::parse(raw.trim()) {
        Ok(url) => url.host_str().is_some_and(|host| !host.is_empty()),
        Err(_) => false,
    }
}

pub(crate) fn is_domain(raw: &str) -> bool {
    let candidate = raw.trim();
    let candidate = candidate.strip_suffix('.').unwrap_or(candidate);
    if candidate.is_empty() || candidate.len() > MAX_DOMAIN_CHARS {
        return false;
    }
    candidate.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= MAX_DOMAIN_LABEL_CHARS
            && !label.chars().any(|c| c.is_whitespace() || c.is_control())
    })
}

pub(crate) fn is_ip(raw: &str) -> bool {
    raw.trim().parse::<IpAddr>().is_ok()
}

pub(crate) fn text(raw: &str) -> FieldValue {
    FieldValue::Text(raw.to_string())
}

pub(crate) fn trimmed_text(raw: &str) -> FieldValue {
    FieldValue::Text(raw.trim().to_string())
}

fn all_ascii_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|byte| byte.is_ascii_digit())
}
