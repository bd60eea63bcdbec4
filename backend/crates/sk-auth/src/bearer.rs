/// Pull the token out of an `Authorization` header value.
///
/// Both `Bearer <token>` and a bare `<token>` are accepted. Returns `None`
/// when nothing is left after the optional prefix.
pub fn extract_bearer_token(header_value: &str) -> Option<&str> {
    let token = header_value
        .strip_prefix("Bearer ")
        .unwrap_or(header_value)
        .trim();

    if token.is_empty() { None } else { Some(token) }
}
