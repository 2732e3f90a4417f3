use std::net::IpAddr;

use axum::http::{HeaderMap, HeaderValue};
use ipnet::IpNet;

use sheetfolio::contact::client_ip;
use sheetfolio::contact::parser::{parse_submission, BodyFormat};

fn ip(s: &str) -> IpAddr {
    s.parse().unwrap()
}

fn forwarded(chain: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert("x-forwarded-for", HeaderValue::from_str(chain).unwrap());
    headers
}

fn proxies() -> Vec<IpNet> {
    vec!["10.0.0.0/8".parse().unwrap()]
}

// ── Body formats ────────────────────────────────────────────────

#[test]
fn content_types_map_to_formats() {
    assert_eq!(BodyFormat::from_content_type(None), BodyFormat::Json);
    assert_eq!(
        BodyFormat::from_content_type(Some("Application/JSON; charset=utf-8")),
        BodyFormat::Json
    );
    assert_eq!(
        BodyFormat::from_content_type(Some("application/x-www-form-urlencoded")),
        BodyFormat::Form
    );
    assert_eq!(
        BodyFormat::from_content_type(Some("text/plain;charset=UTF-8")),
        BodyFormat::Sniff
    );
}

#[test]
fn text_plain_json_is_decoded_as_json() {
    let body = br#"  {"name":"Ada","email":"ada@example.com","message":"hi"}"#;

    let submission = parse_submission(Some("text/plain"), body).unwrap();
    assert_eq!(submission.name, "Ada");
    assert_eq!(submission.email, "ada@example.com");
    assert_eq!(submission.message, "hi");
}

#[test]
fn text_plain_pairs_are_decoded_as_form() {
    let submission = parse_submission(Some("text/plain"), b"name=Ada+L&message=a%26b").unwrap();
    assert_eq!(submission.name, "Ada L");
    assert_eq!(submission.message, "a&b");
}

#[test]
fn repeated_form_keys_keep_first_value() {
    let submission = parse_submission(
        Some("application/x-www-form-urlencoded"),
        b"name=first&name=second",
    )
    .unwrap();
    assert_eq!(submission.name, "first");
}

#[test]
fn non_object_json_is_rejected() {
    assert!(parse_submission(Some("application/json"), b"[1,2]").is_err());
    assert!(parse_submission(Some("text/plain"), b"[\"x\"]").is_err());
    assert!(parse_submission(Some("application/json"), b"{oops").is_err());
}

#[test]
fn invalid_utf8_form_is_rejected() {
    assert!(parse_submission(Some("application/x-www-form-urlencoded"), &[0xff, 0xfe]).is_err());
}

// ── Client address ──────────────────────────────────────────────

#[test]
fn untrusted_peer_ignores_forwarded_header() {
    let resolved = client_ip::resolve(&forwarded("203.0.113.9"), ip("198.51.100.1"), &proxies());
    assert_eq!(resolved, ip("198.51.100.1"));
}

#[test]
fn spoofed_left_hops_are_ignored() {
    // Client wrote the first entry; our proxy appended the real one
    let resolved = client_ip::resolve(
        &forwarded("1.2.3.4, 203.0.113.9"),
        ip("10.0.0.2"),
        &proxies(),
    );
    assert_eq!(resolved, ip("203.0.113.9"));
}

#[test]
fn chained_trusted_proxies_are_skipped() {
    let resolved = client_ip::resolve(
        &forwarded("203.0.113.9, 10.0.0.5"),
        ip("10.0.0.2"),
        &proxies(),
    );
    assert_eq!(resolved, ip("203.0.113.9"));
}

#[test]
fn garbage_hop_falls_back_to_peer() {
    let resolved = client_ip::resolve(&forwarded("not-an-ip"), ip("10.0.0.2"), &proxies());
    assert_eq!(resolved, ip("10.0.0.2"));

    let resolved = client_ip::resolve(&HeaderMap::new(), ip("10.0.0.2"), &proxies());
    assert_eq!(resolved, ip("10.0.0.2"));
}
