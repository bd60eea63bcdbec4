use crate::client_key;

use std::net::SocketAddr;

use axum::http::{HeaderMap, HeaderValue};
use googletest::prelude::*;

fn peer() -> Option<SocketAddr> {
    Some("10.0.0.9:51234".parse().unwrap())
}

#[test]
fn given_forwarded_for_list_when_keying_then_first_entry_is_used() {
    // Given
    let mut headers = HeaderMap::new();
    headers.insert(
        "x-forwarded-for",
        HeaderValue::from_static(" 203.0.113.7 , 10.0.0.1"),
    );
    headers.insert("x-real-ip", HeaderValue::from_static("198.51.100.2"));

    // When
    let key = client_key(&headers, peer());

    // Then
    assert_that!(key, eq("203.0.113.7"));
}

#[test]
fn given_only_real_ip_when_keying_then_real_ip_is_used() {
    // Given
    let mut headers = HeaderMap::new();
    headers.insert("x-real-ip", HeaderValue::from_static("198.51.100.2"));

    // When
    let key = client_key(&headers, peer());

    // Then
    assert_that!(key, eq("198.51.100.2"));
}

#[test]
fn given_blank_forwarding_headers_when_keying_then_peer_ip_is_used() {
    // Given
    let mut headers = HeaderMap::new();
    headers.insert("x-forwarded-for", HeaderValue::from_static(" , "));
    headers.insert("x-real-ip", HeaderValue::from_static("  "));

    // When
    let key = client_key(&headers, peer());

    // Then
    assert_that!(key, eq("10.0.0.9"));
}

#[test]
fn given_no_headers_and_no_peer_when_keying_then_unknown() {
    // When
    let key = client_key(&HeaderMap::new(), None);

    // Then
    assert_that!(key, eq("unknown"));
}
