use shared::protocol::ShortenRequest;

use crate::error::{ShortenError, EMPTY_URL_ALERT};

/// Raw input values as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub url: String,
    pub custom_alias: String,
    pub password: String,
    pub max_clicks: String,
}

impl FormValues {
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }
}

/// Reads the leading integer of `raw`, like a browser's `parseInt`.
///
/// Leading whitespace and a sign are accepted, trailing garbage is ignored
/// (`"5abc"` is 5, `"2.5"` is 2). Input without leading digits reads as zero;
/// digit runs beyond `i64` saturate instead of wrapping or vanishing.
pub fn parse_max_clicks(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let magnitude = rest
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, digit| {
            acc.saturating_mul(10)
                .saturating_add(i64::from(digit - b'0'))
        });
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Builds the wire request, dropping every optional field that is unset.
///
/// A click limit of zero is indistinguishable from no limit and is omitted.
pub fn build_request(form: &FormValues) -> Result<ShortenRequest, ShortenError> {
    if form.url.trim().is_empty() {
        return Err(ShortenError::Validation(EMPTY_URL_ALERT.to_string()));
    }

    let max_clicks = parse_max_clicks(&form.max_clicks);
    Ok(ShortenRequest {
        url: form.url.clone(),
        custom_alias: non_empty(&form.custom_alias),
        password: non_empty(&form.password),
        max_clicks: u64::try_from(max_clicks).ok().filter(|clicks| *clicks > 0),
    })
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
