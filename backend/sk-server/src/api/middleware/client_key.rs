use std::net::SocketAddr;

use axum::http::HeaderMap;

pub const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";
pub const REAL_IP_HEADER: &str = "x-real-ip";
pub const UNKNOWN_CLIENT: &str = "unknown";

/// Identify the client for login rate limiting.
///
/// Order: first `X-Forwarded-For` entry, `X-Real-IP`, the peer address,
/// then `"unknown"`. Forwarding headers are trusted as sent, so the server
/// is expected to sit behind a proxy that overwrites them.
pub fn client_key(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    let header_value = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    };

    if let Some(forwarded) = header_value(FORWARDED_FOR_HEADER)
        && let Some(first) = forwarded.split(',').map(str::trim).find(|s| !s.is_empty())
    {
        return first.to_string();
    }

    if let Some(real_ip) = header_value(REAL_IP_HEADER) {
        return real_ip.to_string();
    }

    match peer {
        Some(addr) => addr.ip().to_string(),
        None => UNKNOWN_CLIENT.to_string(),
    }
}
