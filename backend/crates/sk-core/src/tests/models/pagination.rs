use crate::Pagination;

#[test]
fn test_total_pages_rounds_up() {
    let pagination = Pagination::new(1, 10, 21);
    assert_eq!(pagination.total_pages, 3);
}

#[test]
fn test_total_pages_exact_multiple() {
    let pagination = Pagination::new(2, 10, 20);
    assert_eq!(pagination.total_pages, 2);
    assert_eq!(pagination.page, 2);
}

#[test]
fn test_total_pages_empty() {
    let pagination = Pagination::new(1, 10, 0);
    assert_eq!(pagination.total_pages, 0);
    assert_eq!(pagination.total, 0);
}

#[test]
fn test_pagination_serializes_snake_case() {
    let json = serde_json::to_value(Pagination::new(1, 5, 6)).unwrap();
    assert_eq!(json["total_pages"], 2);
    assert_eq!(json["limit"], 5);
}
