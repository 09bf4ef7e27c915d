use super::*;
use serde_json::json;

fn payload(form: &FormValues) -> serde_json::Value {
    serde_json::to_value(build_request(form).expect("request")).expect("serialize")
}

#[test]
fn bare_url_produces_single_key_payload() {
    let form = FormValues::with_url("https://example.com");
    assert_eq!(payload(&form), json!({"url": "https://example.com"}));
}

#[test]
fn positive_click_limit_is_sent_as_integer() {
    let form = FormValues {
        max_clicks: "5".to_string(),
        ..FormValues::with_url("https://example.com")
    };
    assert_eq!(payload(&form)["max_clicks"], json!(5));
}

#[test]
fn zero_or_empty_click_limit_is_omitted() {
    for raw in ["0", "", "  ", "abc", "-3", "+0", "x5"] {
        let form = FormValues {
            max_clicks: raw.to_string(),
            ..FormValues::with_url("https://example.com")
        };
        let body = payload(&form);
        assert!(
            body.get("max_clicks").is_none(),
            "max_clicks {raw:?} should be omitted, got {body}"
        );
    }
}

#[test]
fn click_limit_reads_leading_integer() {
    assert_eq!(parse_max_clicks(" 12 "), 12);
    assert_eq!(parse_max_clicks("5abc"), 5);
    assert_eq!(parse_max_clicks("2.5"), 2);
    assert_eq!(parse_max_clicks("-7"), -7);
    assert_eq!(parse_max_clicks("clicks"), 0);
    assert_eq!(parse_max_clicks("99999999999999999999"), i64::MAX);
}

#[test]
fn oversized_click_limit_is_still_sent() {
    let form = FormValues {
        max_clicks: "99999999999999999999".to_string(),
        ..FormValues::with_url("https://example.com")
    };
    assert_eq!(payload(&form)["max_clicks"], json!(i64::MAX));
}

#[test]
fn url_is_sent_as_entered() {
    let form = FormValues::with_url(" https://example.com/path ");
    assert_eq!(payload(&form)["url"], json!(" https://example.com/path "));
}

#[test]
fn alias_and_password_are_included_only_when_present() {
    let form = FormValues {
        url: "https://example.com/long".to_string(),
        custom_alias: "docs".to_string(),
        password: "hunter2".to_string(),
        max_clicks: "10".to_string(),
    };
    assert_eq!(
        payload(&form),
        json!({
            "url": "https://example.com/long",
            "custom_alias": "docs",
            "password": "hunter2",
            "max_clicks": 10
        })
    );

    let without = FormValues {
        custom_alias: String::new(),
        password: String::new(),
        ..form
    };
    let body = payload(&without);
    assert!(body.get("custom_alias").is_none());
    assert!(body.get("password").is_none());
}

#[test]
fn empty_url_is_rejected_before_any_request() {
    let err = build_request(&FormValues::with_url("   ")).expect_err("must reject");
    assert!(matches!(err, ShortenError::Validation(_)));
}
