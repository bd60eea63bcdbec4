use crate::{ApiError, CurrentUser};

use sk_auth::AuthenticatedUser;

use axum::{body::Body, extract::FromRequestParts, http::Request};

#[tokio::test]
async fn test_extractor_reads_authenticated_user_extension() {
    let mut request = Request::builder().body(Body::empty()).unwrap();
    request.extensions_mut().insert(AuthenticatedUser {
        user_id: 42,
        email: "ada@example.com".to_string(),
    });

    let (mut parts, _body) = request.into_parts();
    let result = CurrentUser::from_request_parts(&mut parts, &()).await;

    let CurrentUser(user) = result.unwrap();
    assert_eq!(user.user_id, 42);
    assert_eq!(user.email, "ada@example.com");
}

#[tokio::test]
async fn test_extractor_without_extension_is_unauthorized() {
    let request = Request::builder().body(Body::empty()).unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = CurrentUser::from_request_parts(&mut parts, &()).await;

    match result {
        Err(ApiError::Unauthorized { message, .. }) => {
            assert_eq!(message, "User not authenticated");
        }
        _ => panic!("Expected Unauthorized error"),
    }
}
