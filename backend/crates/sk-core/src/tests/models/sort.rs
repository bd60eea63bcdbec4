use crate::{SortField, SortOrder};

use std::str::FromStr;

#[test]
fn test_sort_field_from_str() {
    assert_eq!(SortField::from_str("name").unwrap(), SortField::Name);
    assert_eq!(SortField::from_str("EMAIL").unwrap(), SortField::Email);
    assert_eq!(
        SortField::from_str("created_at").unwrap(),
        SortField::CreatedAt
    );
    assert!(SortField::from_str("password").is_err());
}

#[test]
fn test_sort_field_as_str_is_column_name() {
    assert_eq!(SortField::Id.as_str(), "id");
    assert_eq!(SortField::CreatedAt.as_str(), "created_at");
}

#[test]
fn test_sort_order_from_str() {
    assert_eq!(SortOrder::from_str("asc").unwrap(), SortOrder::Asc);
    assert_eq!(SortOrder::from_str(" DESC ").unwrap(), SortOrder::Desc);
    assert!(SortOrder::from_str("sideways").is_err());
}

#[test]
fn test_sort_defaults() {
    assert_eq!(SortField::default(), SortField::Id);
    assert_eq!(SortOrder::default(), SortOrder::Asc);
}
