use aegis_accounts::error::AccountsServiceError;
use aegis_accounts::password::verify_password;
use aegis_accounts::usecase::register::{RegisterInput, RegisterUseCase};

use crate::helpers::{MockUserRepo, test_user};

fn valid_input() -> RegisterInput {
    RegisterInput {
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        password: "hunter2secret".to_owned(),
        password_confirm: "hunter2secret".to_owned(),
        full_name: "Alice Example".to_owned(),
        bio: None,
    }
}

fn validation_fields(err: AccountsServiceError) -> Vec<&'static str> {
    match err {
        AccountsServiceError::Validation(errors) => errors.fields().collect(),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn should_create_user_with_hashed_password() {
    let users = MockUserRepo::empty();
    let usecase = RegisterUseCase {
        users: users.clone(),
    };

    usecase.execute(valid_input()).await.unwrap();

    let stored = users.users_handle();
    let stored = stored.lock().unwrap();
    assert_eq!(stored.len(), 1);
    let user = &stored[0];
    assert_eq!(user.username, "alice");
    assert_eq!(user.email, "alice@example.com");
    assert!(!user.is_admin);
    assert_ne!(user.password_hash, "hunter2secret");
    assert!(verify_password("hunter2secret", &user.password_hash).unwrap());
}

#[tokio::test]
async fn should_collect_all_format_errors_at_once() {
    let users = MockUserRepo::empty();
    let usecase = RegisterUseCase {
        users: users.clone(),
    };

    let result = usecase
        .execute(RegisterInput {
            username: "a!".to_owned(),
            email: "not-an-email".to_owned(),
            password: "short".to_owned(),
            password_confirm: "different".to_owned(),
            full_name: "  ".to_owned(),
            bio: None,
        })
        .await;

    let fields = validation_fields(result.unwrap_err());
    assert!(fields.contains(&"username"));
    assert!(fields.contains(&"email"));
    assert!(fields.contains(&"password"));
    assert!(fields.contains(&"password_confirm"));
    assert!(fields.contains(&"full_name"));
    assert!(users.users_handle().lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_reject_duplicate_username() {
    let users = MockUserRepo::new(vec![test_user("alice", "other@example.com", "hunter2secret")]);
    let usecase = RegisterUseCase {
        users: users.clone(),
    };

    let result = usecase.execute(valid_input()).await;

    let fields = validation_fields(result.unwrap_err());
    assert_eq!(fields, vec!["username"]);
    // A rejected registration leaves the store untouched.
    assert_eq!(users.users_handle().lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_reject_duplicate_email() {
    let users = MockUserRepo::new(vec![test_user("bob", "alice@example.com", "hunter2secret")]);
    let usecase = RegisterUseCase {
        users: users.clone(),
    };

    let result = usecase.execute(valid_input()).await;

    let fields = validation_fields(result.unwrap_err());
    assert_eq!(fields, vec!["email"]);
    assert_eq!(users.users_handle().lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_skip_uniqueness_checks_when_format_invalid() {
    let users = MockUserRepo::new(vec![test_user("alice", "alice@example.com", "hunter2secret")]);
    let usecase = RegisterUseCase { users };

    let result = usecase
        .execute(RegisterInput {
            username: "alice".to_owned(),
            email: "alice@example.com".to_owned(),
            password: "short".to_owned(),
            password_confirm: "short".to_owned(),
            full_name: "Alice Example".to_owned(),
            bio: None,
        })
        .await;

    // Only the format error surfaces; duplicates are not reported alongside it.
    let fields = validation_fields(result.unwrap_err());
    assert_eq!(fields, vec!["password"]);
}

#[tokio::test]
async fn should_accept_optional_bio() {
    let users = MockUserRepo::empty();
    let usecase = RegisterUseCase {
        users: users.clone(),
    };

    let input = RegisterInput {
        bio: Some("rustacean".to_owned()),
        ..valid_input()
    };
    usecase.execute(input).await.unwrap();

    assert_eq!(users.users_handle().lock().unwrap().len(), 1);
}
