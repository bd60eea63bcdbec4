use crate::{CreateUserRequest, ListUsersQuery, LoginRequest, UpdateUserRequest};

use sk_core::{UserListRequest, UserUpdate};

use googletest::prelude::*;

#[test]
fn given_padded_fields_when_normalizing_create_request_then_name_and_email_are_trimmed() {
    // Given
    let request = CreateUserRequest {
        name: "  Ada Lovelace ".to_string(),
        email: " ada@example.com ".to_string(),
        password: " secret1 ".to_string(),
    };

    // When
    let normalized = request.normalized().unwrap();

    // Then
    assert_that!(normalized.name, eq("Ada Lovelace"));
    assert_that!(normalized.email, eq("ada@example.com"));
    assert_that!(normalized.password, eq(" secret1 "));
}

#[test]
fn given_missing_fields_when_normalizing_create_request_then_name_is_reported_first() {
    // Given
    let request = CreateUserRequest::default();

    // When
    let error = request.normalized().unwrap_err();

    // Then
    assert_that!(error.field(), some(eq("name")));
}

#[test]
fn given_short_password_when_normalizing_create_request_then_password_is_rejected() {
    // Given
    let request = CreateUserRequest {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        password: "12345".to_string(),
    };

    // When
    let error = request.normalized().unwrap_err();

    // Then
    assert_that!(error.field(), some(eq("password")));
}

#[test]
fn given_blank_fields_when_converting_update_then_they_are_left_unchanged() {
    // Given
    let request = UpdateUserRequest {
        name: Some("   ".to_string()),
        email: None,
    };

    // When
    let update = request.into_update().unwrap();

    // Then
    assert_that!(update, eq(&UserUpdate::default()));
}

#[test]
fn given_invalid_email_when_converting_update_then_email_is_rejected() {
    // Given
    let request = UpdateUserRequest {
        name: Some("Ada".to_string()),
        email: Some("not-an-email".to_string()),
    };

    // When
    let error = request.into_update().unwrap_err();

    // Then
    assert_that!(error.field(), some(eq("email")));
}

#[test]
fn given_junk_paging_values_when_converting_query_then_they_are_dropped() {
    // Given
    let query = ListUsersQuery {
        page: Some("abc".to_string()),
        limit: Some(" 25 ".to_string()),
        name: Some("ada".to_string()),
        ..Default::default()
    };

    // When
    let request = UserListRequest::from(query);

    // Then
    assert_that!(request.page, none());
    assert_that!(request.limit, some(eq(25)));
    assert_that!(request.filter.name, some(eq("ada")));
}

#[test]
fn given_empty_password_when_validating_login_then_password_is_rejected() {
    // Given
    let request = LoginRequest {
        email: "ada@example.com".to_string(),
        password: String::new(),
    };

    // When
    let error = request.validate().unwrap_err();

    // Then
    assert_that!(error.field(), some(eq("password")));
}

#[test]
fn given_padded_email_when_validating_login_then_it_is_accepted() {
    // Given
    let request = LoginRequest {
        email: " ada@example.com ".to_string(),
        password: "whatever".to_string(),
    };

    // When
    let result = request.validate();

    // Then
    assert_that!(result, ok(anything()));
}
