use sk_core::{NewUser, SortField, SortOrder, UserListQuery};

/// Creates a NewUser with a placeholder hash
pub fn new_user(name: &str, email: &str) -> NewUser {
    NewUser {
        name: name.to_string(),
        email: email.to_string(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
    }
}

/// First page of 10, sorted by id ascending, no filters
pub fn default_query() -> UserListQuery {
    UserListQuery {
        page: 1,
        limit: 10,
        name: None,
        email: None,
        sort_by: SortField::Id,
        sort_order: SortOrder::Asc,
    }
}
