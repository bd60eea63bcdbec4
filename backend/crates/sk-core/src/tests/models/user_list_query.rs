use crate::{SortField, SortOrder, UserFilter, UserListQuery, UserListRequest};

use googletest::prelude::*;

#[test]
fn given_empty_request_when_normalized_then_defaults_apply() {
    let query = UserListQuery::from_request(UserListRequest::default(), 10, 100);

    assert_that!(query.page, eq(1));
    assert_that!(query.limit, eq(10));
    assert_that!(query.name, none());
    assert_that!(query.sort_by, eq(SortField::Id));
    assert_that!(query.sort_order, eq(SortOrder::Asc));
    assert_that!(query.offset(), eq(0));
}

#[test]
fn given_non_positive_page_and_limit_when_normalized_then_reset() {
    let request = UserListRequest {
        page: Some(-3),
        limit: Some(0),
        filter: UserFilter::default(),
    };

    let query = UserListQuery::from_request(request, 10, 100);

    assert_that!(query.page, eq(1));
    assert_that!(query.limit, eq(10));
}

#[test]
fn given_limit_above_max_when_normalized_then_capped() {
    let request = UserListRequest {
        page: Some(3),
        limit: Some(5000),
        filter: UserFilter::default(),
    };

    let query = UserListQuery::from_request(request, 10, 100);

    assert_that!(query.limit, eq(100));
    assert_that!(query.offset(), eq(200));
}

#[test]
fn given_filters_when_normalized_then_trimmed_and_blank_dropped() {
    let request = UserListRequest {
        page: None,
        limit: None,
        filter: UserFilter {
            name: Some("  jo ".to_string()),
            email: Some("   ".to_string()),
            sort_by: Some("created_at".to_string()),
            sort_order: Some("desc".to_string()),
        },
    };

    let query = UserListQuery::from_request(request, 10, 100);

    assert_that!(query.name, some(eq("jo")));
    assert_that!(query.email, none());
    assert_that!(query.sort_by, eq(SortField::CreatedAt));
    assert_that!(query.sort_order, eq(SortOrder::Desc));
}

#[test]
fn given_unknown_sort_values_when_normalized_then_defaults_used() {
    let request = UserListRequest {
        page: None,
        limit: None,
        filter: UserFilter {
            sort_by: Some("password".to_string()),
            sort_order: Some("random".to_string()),
            ..UserFilter::default()
        },
    };

    let query = UserListQuery::from_request(request, 10, 100);

    assert_that!(query.sort_by, eq(SortField::Id));
    assert_that!(query.sort_order, eq(SortOrder::Asc));
}

#[test]
fn given_json_body_when_deserialized_then_nested_filter_parsed() {
    let request: UserListRequest = serde_json::from_str(
        r#"{"page": 2, "limit": 5, "filter": {"name": "ad", "sort_by": "name"}}"#,
    )
    .unwrap();

    assert_that!(request.page, some(eq(2)));
    assert_that!(request.filter.name, some(eq("ad")));
    assert_that!(request.filter.sort_order, none());
}
