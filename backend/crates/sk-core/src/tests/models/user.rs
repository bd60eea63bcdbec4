use crate::{User, UserUpdate};

use chrono::{Duration, Utc};

fn test_user() -> User {
    let created = Utc::now() - Duration::days(1);
    User {
        id: 7,
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
        created_at: created,
        updated_at: created,
        deleted_at: None,
    }
}

#[test]
fn test_serialized_user_never_contains_password_hash() {
    let json = serde_json::to_value(test_user()).unwrap();

    assert!(json.get("password_hash").is_none());
    assert!(json.get("deleted_at").is_none());
    assert_eq!(json["email"], "jane@example.com");
}

#[test]
fn test_apply_updates_fields_and_timestamp() {
    let mut user = test_user();
    let before = user.updated_at;

    let changed = user.apply(UserUpdate {
        name: Some("Janet".to_string()),
        email: None,
    });

    assert!(changed);
    assert_eq!(user.name, "Janet");
    assert_eq!(user.email, "jane@example.com");
    assert!(user.updated_at > before);
}

#[test]
fn test_apply_same_values_is_noop() {
    let mut user = test_user();
    let before = user.updated_at;

    let changed = user.apply(UserUpdate {
        name: Some("Jane Doe".to_string()),
        email: Some("jane@example.com".to_string()),
    });

    assert!(!changed);
    assert_eq!(user.updated_at, before);
}

#[test]
fn test_empty_update() {
    assert!(UserUpdate::default().is_empty());
    assert!(
        !UserUpdate {
            name: None,
            email: Some("x@y.z".to_string())
        }
        .is_empty()
    );
}
